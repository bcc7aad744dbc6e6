//! Edit-state highlighting for data cells.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event};

use super::BehaviorError;
use crate::config::BehaviorConfig;
use crate::dom::Listener;

/// Delegate focus highlighting to `root`.
///
/// `focusin` marks the targeted data cell with the editing class,
/// `focusout` clears it. Both bubble, unlike plain focus/blur, so a
/// single pair of listeners covers cells the server re-renders later.
pub(super) fn attach(
    root: &Element,
    config: &Rc<BehaviorConfig>,
) -> Result<Vec<Listener>, BehaviorError> {
    let focus_config = config.clone();
    let focus = Listener::attach(root.as_ref(), "focusin", move |event: Event| {
        if let Some(cell) = target_cell(&event, &focus_config.cell_selector) {
            let _ = cell.class_list().add_1(&focus_config.editing_class);
        }
    })?;

    let blur_config = config.clone();
    let blur = Listener::attach(root.as_ref(), "focusout", move |event: Event| {
        if let Some(cell) = target_cell(&event, &blur_config.cell_selector) {
            let _ = cell.class_list().remove_1(&blur_config.editing_class);
        }
    })?;

    Ok(vec![focus, blur])
}

/// The data cell an event landed in, if any.
fn target_cell(event: &Event, selector: &str) -> Option<Element> {
    let element = event.target()?.dyn_into::<Element>().ok()?;
    element.closest(selector).ok().flatten()
}
