//! Browser integration tests for the dashboard behaviors.
//!
//! These run against a real DOM via `wasm-pack test --headless`.

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, EventInit};

use supplyboard_ui::behaviors::{self, current_month_label};
use supplyboard_ui::dom::Listener;
use supplyboard_ui::BehaviorConfig;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Mount a fragment of server-rendered markup into the page body.
fn mount(html: &str) -> Element {
    let document = document();
    let host = document.create_element("div").unwrap();
    host.set_inner_html(html);
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn unmount(host: &Element) {
    host.remove();
}

fn bubbling_event(event_type: &str) -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    Event::new_with_event_init_dict(event_type, &init).unwrap()
}

fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn focus_then_blur_leaves_no_editing_marker() {
    let host = mount(
        r#"<table class="dataTable"><tbody><tr>
             <td>120</td>
           </tr></tbody></table>"#,
    );
    let behaviors = behaviors::initialize(&host, BehaviorConfig::default()).unwrap();

    let cell = host.query_selector("td").unwrap().unwrap();
    cell.dispatch_event(&bubbling_event("focusin")).unwrap();
    assert!(cell.class_list().contains("cell-editing"));

    cell.dispatch_event(&bubbling_event("focusout")).unwrap();
    assert!(!cell.class_list().contains("cell-editing"));

    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
fn change_reformats_cells_by_kind() {
    let host = mount(
        r#"<table class="dataTable"><tbody><tr>
             <td class="currency">12</td>
             <td class="percentage">5.25</td>
             <td>7.8</td>
           </tr></tbody></table>"#,
    );
    let behaviors = behaviors::initialize(&host, BehaviorConfig::default()).unwrap();

    let cells = host.query_selector_all("td").unwrap();
    let expected = ["$12.00", "5.3%", "8"];
    for (index, expected) in expected.iter().enumerate() {
        let cell: Element = cells.get(index as u32).unwrap().dyn_into().unwrap();
        cell.dispatch_event(&bubbling_event("focusin")).unwrap();
        cell.dispatch_event(&bubbling_event("change")).unwrap();
        assert_eq!(cell.text_content().unwrap(), *expected);
    }

    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
fn change_leaves_non_numeric_text_alone() {
    let host = mount(
        r#"<table class="dataTable"><tbody><tr>
             <td class="currency">pending</td>
           </tr></tbody></table>"#,
    );
    let behaviors = behaviors::initialize(&host, BehaviorConfig::default()).unwrap();

    let cell = host.query_selector("td").unwrap().unwrap();
    cell.dispatch_event(&bubbling_event("focusin")).unwrap();
    cell.dispatch_event(&bubbling_event("change")).unwrap();
    assert_eq!(cell.text_content().unwrap(), "pending");

    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
fn rows_are_classified_at_setup() {
    let host = mount(
        r#"<div id="shortage-setup"><table><tbody>
             <tr id="short-row"><td>Widget</td><td>SHORTAGE</td></tr>
             <tr id="good-row"><td>Gadget</td><td>In stock</td></tr>
           </tbody></table></div>"#,
    );
    let config = BehaviorConfig {
        shortage_container_id: "shortage-setup".into(),
        ..BehaviorConfig::default()
    };
    let behaviors = behaviors::initialize(&host, config).unwrap();

    let short_row = document().get_element_by_id("short-row").unwrap();
    assert!(short_row.class_list().contains("shortage-warning"));
    assert!(!short_row.class_list().contains("good-supply"));

    let good_row = document().get_element_by_id("good-row").unwrap();
    assert!(good_row.class_list().contains("good-supply"));
    assert!(!good_row.class_list().contains("shortage-warning"));

    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
async fn mutation_reclassifies_replaced_rows() {
    let host = mount(r#"<div id="shortage-observe"><table><tbody></tbody></table></div>"#);
    let config = BehaviorConfig {
        shortage_container_id: "shortage-observe".into(),
        ..BehaviorConfig::default()
    };
    let behaviors = behaviors::initialize(&host, config).unwrap();

    // Simulate the server-driven table refresh.
    let tbody = host.query_selector("tbody").unwrap().unwrap();
    tbody.set_inner_html(
        r#"<tr id="refreshed-short"><td>Widget</td><td>SHORTAGE</td></tr>
           <tr id="refreshed-good"><td>Gadget</td><td>In stock</td></tr>"#,
    );

    // Observer callbacks are delivered asynchronously.
    TimeoutFuture::new(0).await;

    let short_row = document().get_element_by_id("refreshed-short").unwrap();
    assert!(short_row.class_list().contains("shortage-warning"));
    assert!(!short_row.class_list().contains("good-supply"));

    let good_row = document().get_element_by_id("refreshed-good").unwrap();
    assert!(good_row.class_list().contains("good-supply"));
    assert!(!good_row.class_list().contains("shortage-warning"));

    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
async fn reclassification_flips_a_recovered_row() {
    let host = mount(
        r#"<div id="shortage-flip"><table><tbody>
             <tr id="flip-row"><td>Widget</td><td>SHORTAGE</td></tr>
           </tbody></table></div>"#,
    );
    let config = BehaviorConfig {
        shortage_container_id: "shortage-flip".into(),
        ..BehaviorConfig::default()
    };
    let behaviors = behaviors::initialize(&host, config).unwrap();

    let tbody = host.query_selector("tbody").unwrap().unwrap();
    tbody.set_inner_html(r#"<tr id="flip-row"><td>Widget</td><td>Recovered</td></tr>"#);
    TimeoutFuture::new(0).await;

    let row = document().get_element_by_id("flip-row").unwrap();
    assert!(row.class_list().contains("good-supply"));
    assert!(!row.class_list().contains("shortage-warning"));

    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
fn declined_confirmation_blocks_the_save_click() {
    let host = mount(r#"<button id="save-guard-test">Save</button>"#);
    let config = BehaviorConfig {
        save_button_id: "save-guard-test".into(),
        ..BehaviorConfig::default()
    };
    let behaviors = behaviors::initialize(&host, config).unwrap();

    // An external handler further up the chain must never see the click.
    let propagated = Rc::new(Cell::new(false));
    let seen = propagated.clone();
    let outer = Listener::attach(host.as_ref(), "click", move |_| seen.set(true)).unwrap();

    // The headless runner dismisses dialogs, which declines the prompt.
    let button = document().get_element_by_id("save-guard-test").unwrap();
    let click = cancelable_click();
    button.dispatch_event(&click).unwrap();

    assert!(click.default_prevented());
    assert!(!propagated.get());

    drop(outer);
    drop(behaviors);
    unmount(&host);
}

#[wasm_bindgen_test]
fn month_label_is_long_month_plus_year() {
    let label = current_month_label().unwrap();
    let year = js_sys::Date::new_0().get_full_year().to_string();
    assert!(label.contains(&year), "label {label:?} should carry the year");
    assert!(label.len() > year.len());
}

#[wasm_bindgen_test]
fn missing_targets_leave_behaviors_inert() {
    let host = mount("<p>Nothing to enhance here</p>");
    let config = BehaviorConfig {
        save_button_id: "no-such-button".into(),
        shortage_container_id: "no-such-container".into(),
        ..BehaviorConfig::default()
    };

    // Attachment succeeds; the dependent rules just never engage.
    let behaviors = behaviors::initialize(&host, config).unwrap();
    drop(behaviors);
    unmount(&host);
}
