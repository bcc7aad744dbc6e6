//! Dashboard Behavior Rules
//!
//! The five independent rules the behavior layer attaches to the
//! server-rendered page:
//!
//! - [`editing`]: edit highlighting on focused data cells
//! - [`save_guard`]: confirmation prompt gating the save button
//! - [`freshness`]: date-based reload when the displayed month is stale
//! - [`shortage`]: shortage/good-supply row classification
//! - [`formatter`]: numeric reformatting of edited cells
//!
//! The rules register on disjoint event/element combinations, so no
//! ordering contract between them exists. Each degrades to a no-op when
//! its target element is missing from the page.

mod editing;
mod formatter;
mod freshness;
mod save_guard;
mod shortage;

pub use formatter::{format_cell_value, CellKind};
pub use freshness::{current_month_label, needs_reload};
pub use shortage::classify_rows;

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::config::BehaviorConfig;
use crate::dom::{Listener, Observation};

/// Error types for behavior attachment
///
/// Only environmental failures that make attachment itself impossible
/// surface here. A missing target element is not an error; the
/// dependent rule silently stays inert.
#[derive(Debug, thiserror::Error)]
pub enum BehaviorError {
    #[error("No global window/document available")]
    DocumentUnavailable,

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl From<JsValue> for BehaviorError {
    fn from(value: JsValue) -> Self {
        BehaviorError::Dom(format!("{value:?}"))
    }
}

/// Handle owning every subscription the behavior layer attached.
///
/// Dropping the handle detaches all listeners, disconnects the mutation
/// observer and cancels both freshness timers.
pub struct Behaviors {
    listeners: Vec<Listener>,
    observation: Option<Observation>,
    initial_check: Option<Timeout>,
    recurring_check: Option<Interval>,
}

impl Behaviors {
    /// Leak every subscription so the behaviors stay attached for the
    /// page's lifetime.
    pub fn forget(mut self) {
        for listener in self.listeners.drain(..) {
            listener.forget();
        }
        if let Some(observation) = self.observation.take() {
            observation.forget();
        }
        if let Some(timeout) = self.initial_check.take() {
            timeout.forget();
        }
        if let Some(interval) = self.recurring_check.take() {
            interval.forget();
        }
    }
}

/// Attach all dashboard behaviors under `root`.
///
/// `root` hosts the delegated cell listeners; the save button, month
/// display and shortage container are looked up by their configured
/// document-wide ids.
pub fn initialize(root: &Element, config: BehaviorConfig) -> Result<Behaviors, BehaviorError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(BehaviorError::DocumentUnavailable)?;

    let config = Rc::new(config);

    let mut listeners = editing::attach(root, &config)?;
    listeners.push(formatter::attach(root, &config)?);
    if let Some(listener) = save_guard::attach(&document, &config)? {
        listeners.push(listener);
    }

    let observation = shortage::attach(&document, &config)?;
    let (initial_check, recurring_check) = freshness::schedule(&document, &config);

    tracing::info!(
        listeners = listeners.len(),
        observing = observation.is_some(),
        "Dashboard behaviors attached"
    );

    Ok(Behaviors {
        listeners,
        observation,
        initial_check: Some(initial_check),
        recurring_check: Some(recurring_check),
    })
}
