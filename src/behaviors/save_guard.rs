//! Confirmation gate on the save control.

use std::rc::Rc;

use web_sys::{Document, Event};

use super::BehaviorError;
use crate::config::BehaviorConfig;
use crate::dom::Listener;

/// Attach the confirmation prompt to the save button.
///
/// Declining stops the click before it reaches the external save
/// handler; accepting lets it through untouched. A page without the
/// button gets no guard.
pub(super) fn attach(
    document: &Document,
    config: &Rc<BehaviorConfig>,
) -> Result<Option<Listener>, BehaviorError> {
    let Some(button) = document.get_element_by_id(&config.save_button_id) else {
        tracing::debug!(id = %config.save_button_id, "Save button absent, confirmation guard disabled");
        return Ok(None);
    };

    let config = config.clone();
    let listener = Listener::attach(button.as_ref(), "click", move |event: Event| {
        let confirmed = web_sys::window()
            .and_then(|window| window.confirm_with_message(&config.confirm_message).ok())
            .unwrap_or(false);

        if !confirmed {
            event.stop_propagation();
            event.prevent_default();
        }
    })?;

    Ok(Some(listener))
}
