//! DOM Subscription Primitives
//!
//! Event listeners and mutation observation modeled as explicit
//! subscriptions: attaching returns a handle, dropping the handle
//! detaches. `forget` leaks a handle when a subscription should live
//! for the rest of the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, MutationObserver, MutationObserverInit, MutationRecord};

/// An attached DOM event listener, removed on drop.
pub struct Listener {
    target: EventTarget,
    event_type: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` for `event_type` events on `target`.
    pub fn attach(
        target: &EventTarget,
        event_type: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event_type,
            callback,
        })
    }

    /// Leak the listener so it stays attached for the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event_type, self.callback.as_ref().unchecked_ref());
    }
}

/// A mutation-observer subscription, disconnected on drop.
pub struct Observation {
    observer: MutationObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, MutationObserver)>,
}

impl Observation {
    /// Observe child-list changes under `target`, recursively.
    ///
    /// The handler receives the batched records; the host delivers them
    /// asynchronously after the triggering DOM change completes.
    pub fn child_list(
        target: &Element,
        mut handler: impl FnMut(Vec<MutationRecord>) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
            move |records: js_sys::Array, _observer: MutationObserver| {
                let records: Vec<MutationRecord> = records
                    .iter()
                    .filter_map(|record| record.dyn_into::<MutationRecord>().ok())
                    .collect();
                handler(records);
            },
        );

        let observer = MutationObserver::new(callback.as_ref().unchecked_ref())?;
        let init = MutationObserverInit::new();
        init.set_child_list(true);
        init.set_subtree(true);
        observer.observe_with_options(target, &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    /// Leak the subscription so it observes for the page's lifetime.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
