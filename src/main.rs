//! Supplyboard UI Entry Point
//!
//! Initializes logging and attaches the dashboard behaviors once the
//! server-rendered DOM is ready.

use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Element;

use supplyboard_ui::{behaviors, BehaviorConfig};

fn main() {
    // Initialize WASM tracing
    let config = WASMLayerConfigBuilder::default()
        .set_max_level(tracing::Level::DEBUG)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    tracing::info!("Starting Supplyboard UI behaviors");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::error!("No document available, behaviors not attached");
        return;
    };

    // The server renders the whole page; wait for its DOM when the
    // script happens to run before parsing finishes.
    if document.ready_state() == "loading" {
        let on_ready = Closure::<dyn FnMut()>::new(attach);
        if document
            .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())
            .is_ok()
        {
            on_ready.forget();
        }
    } else {
        attach();
    }
}

/// Attach the behavior layer to the page body for the page's lifetime.
fn attach() {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        tracing::error!("No document body, behaviors not attached");
        return;
    };

    let root: &Element = body.as_ref();
    match behaviors::initialize(root, BehaviorConfig::from_page()) {
        Ok(behaviors) => behaviors.forget(),
        Err(err) => tracing::error!("Failed to attach dashboard behaviors: {err}"),
    }
}
