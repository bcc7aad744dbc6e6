//! Date-freshness reload check.
//!
//! The server renders the dashboard for one calendar month and shows
//! that month in a heading. When the page outlives the month it was
//! rendered for, a full reload fetches the fresh data set. The check
//! runs once shortly after load, then hourly.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use web_sys::Document;

use crate::config::BehaviorConfig;

/// Label for the first day of the current month, formatted with the
/// viewer's default locale as long month name plus numeric year
/// ("March 2026").
pub fn current_month_label() -> Option<String> {
    let now = js_sys::Date::new_0();
    let first = js_sys::Date::new_with_year_month_day(now.get_full_year(), now.get_month() as i32, 1);

    let options = js_sys::Object::new();
    js_sys::Reflect::set(&options, &"month".into(), &"long".into()).ok()?;
    js_sys::Reflect::set(&options, &"year".into(), &"numeric".into()).ok()?;

    Some(String::from(first.to_locale_string("default", &options)))
}

/// True when the displayed label is non-empty and disagrees with the
/// freshly computed one. An empty label means the heading is missing
/// or not yet rendered; reloading would loop, so it never triggers.
pub fn needs_reload(displayed: &str, current: &str) -> bool {
    !displayed.is_empty() && displayed != current
}

/// Compare the displayed month against today and reload on mismatch.
fn check(document: &Document, config: &BehaviorConfig) {
    let displayed = document
        .get_element_by_id(&config.month_display_id)
        .and_then(|el| el.text_content())
        .map(|text| text.trim().to_string())
        .unwrap_or_default();

    let Some(current) = current_month_label() else {
        return;
    };

    if needs_reload(&displayed, &current) {
        tracing::info!(%displayed, %current, "Month display is stale, reloading");
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}

/// Schedule the initial and recurring freshness checks.
///
/// Both handles cancel on drop; there is no other stop mechanism, page
/// navigation implicitly ends them.
pub(super) fn schedule(document: &Document, config: &Rc<BehaviorConfig>) -> (Timeout, Interval) {
    let initial_document = document.clone();
    let initial_config = config.clone();
    let initial = Timeout::new(config.initial_check_delay_ms, move || {
        check(&initial_document, &initial_config);
    });

    let recurring_document = document.clone();
    let recurring_config = config.clone();
    let recurring = Interval::new(config.check_interval_ms, move || {
        check(&recurring_document, &recurring_config);
    });

    (initial, recurring)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matching_label_does_not_reload() {
        assert!(!needs_reload("March 2026", "March 2026"));
    }

    #[test]
    fn stale_label_reloads() {
        assert!(needs_reload("February 2026", "March 2026"));
    }

    #[test]
    fn empty_label_never_reloads() {
        assert!(!needs_reload("", "March 2026"));
    }
}
