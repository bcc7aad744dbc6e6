//! Numeric formatting of edited cells.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::BehaviorError;
use crate::config::BehaviorConfig;
use crate::dom::Listener;

/// Formatting rule selected by a cell's classification classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Currency,
    Percentage,
    Plain,
}

impl CellKind {
    /// Kind declared by the cell's classes.
    pub fn of(cell: &Element, config: &BehaviorConfig) -> Self {
        let classes = cell.class_list();
        if classes.contains(&config.currency_class) {
            CellKind::Currency
        } else if classes.contains(&config.percentage_class) {
            CellKind::Percentage
        } else {
            CellKind::Plain
        }
    }
}

/// Reformat `raw` for display according to `kind`.
///
/// Anything that does not parse as a finite number passes through
/// unchanged.
pub fn format_cell_value(kind: CellKind, raw: &str) -> String {
    let Ok(value) = raw.trim().parse::<f64>() else {
        return raw.to_string();
    };
    if !value.is_finite() {
        return raw.to_string();
    }

    match kind {
        CellKind::Currency => format!("${}", to_fixed(value, 2)),
        CellKind::Percentage => format!("{}%", to_fixed(value, 1)),
        CellKind::Plain => to_fixed(value, 0),
    }
}

// Rounds halves away from zero, matching the display the dashboard has
// always shown; the default formatter rounds halves to even.
fn to_fixed(value: f64, digits: usize) -> String {
    let factor = 10f64.powi(digits as i32);
    let rounded = (value * factor).round() / factor;
    format!("{rounded:.digits$}")
}

/// Rewrite the text of an edited cell once editing settles.
///
/// Listens for `change` events whose target still carries the editing
/// marker; the visible text is replaced, no data source is informed.
pub(super) fn attach(root: &Element, config: &Rc<BehaviorConfig>) -> Result<Listener, BehaviorError> {
    let config = config.clone();
    let listener = Listener::attach(root.as_ref(), "change", move |event: Event| {
        let Some(cell) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        if !cell.class_list().contains(&config.editing_class) {
            return;
        }

        let raw = cell.text_content().unwrap_or_default();
        let formatted = format_cell_value(CellKind::of(&cell, &config), &raw);
        if formatted != raw {
            cell.set_text_content(Some(&formatted));
        }
    })?;

    Ok(listener)
}
