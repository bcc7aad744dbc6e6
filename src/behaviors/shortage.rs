//! Shortage row classification.
//!
//! Every row of the results table is classified from scratch on each
//! pass: rows whose rendered cell text carries the shortage token get
//! the shortage class, all others the good-supply class. The table is
//! re-rendered wholesale by the server-driven refresh, so a mutation
//! observer on the container re-runs the pass after every structural
//! change.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use super::BehaviorError;
use crate::config::BehaviorConfig;
use crate::dom::Observation;

/// Re-classify every result row under `container`.
///
/// Idempotent; each row ends up with exactly one of the two classes.
pub fn classify_rows(container: &Element, config: &BehaviorConfig) {
    let Ok(rows) = container.query_selector_all(&config.row_selector) else {
        return;
    };

    for index in 0..rows.length() {
        let Some(row) = rows.get(index).and_then(|node| node.dyn_into::<Element>().ok()) else {
            continue;
        };

        let classes = row.class_list();
        if row_has_token(&row, &config.shortage_token) {
            let _ = classes.add_1(&config.shortage_class);
            let _ = classes.remove_1(&config.good_supply_class);
        } else {
            let _ = classes.add_1(&config.good_supply_class);
            let _ = classes.remove_1(&config.shortage_class);
        }
    }
}

/// Case-sensitive substring match against the rendered text of the
/// row's cells.
fn row_has_token(row: &Element, token: &str) -> bool {
    let Ok(cells) = row.query_selector_all("td") else {
        return false;
    };

    (0..cells.length()).any(|index| {
        cells
            .get(index)
            .and_then(|node| node.text_content())
            .is_some_and(|text| text.contains(token))
    })
}

/// Classify the current rows and keep re-classifying on structural
/// changes under the container.
///
/// A page without the container gets no observer; the rule stays inert
/// for the page's lifetime.
pub(super) fn attach(
    document: &Document,
    config: &Rc<BehaviorConfig>,
) -> Result<Option<Observation>, BehaviorError> {
    let Some(container) = document.get_element_by_id(&config.shortage_container_id) else {
        tracing::debug!(
            id = %config.shortage_container_id,
            "Shortage container absent, highlighting disabled"
        );
        return Ok(None);
    };

    // Server-rendered rows are classified before the first refresh.
    classify_rows(&container, config);

    let observed = container.clone();
    let observer_config = config.clone();
    let observation = Observation::child_list(&container, move |records| {
        if records.iter().any(|record| record.type_() == "childList") {
            classify_rows(&observed, &observer_config);
        }
    })?;

    Ok(Some(observation))
}
