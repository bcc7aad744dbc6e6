//! Behavior Configuration
//!
//! All selectors, class names and timings the behavior layer uses.
//! Defaults match the markup the dashboard server renders today; a page
//! can override any subset by embedding a JSON blob:
//!
//! ```html
//! <script type="application/json" id="dashboard-behaviors-config">
//!   { "check_interval_ms": 600000 }
//! </script>
//! ```

use serde::Deserialize;

/// Tunables for the dashboard behavior layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Selector matching editable data cells
    pub cell_selector: String,

    /// Class marking a cell while it is being edited
    pub editing_class: String,

    /// Id of the save/update button
    pub save_button_id: String,

    /// Prompt shown before the save action is allowed through
    pub confirm_message: String,

    /// Id of the element displaying the current month
    pub month_display_id: String,

    /// Id of the container wrapping the shortage results table
    pub shortage_container_id: String,

    /// Selector for result rows inside the shortage container
    pub row_selector: String,

    /// Token marking a shortage row (case-sensitive substring of the
    /// rendered cell text)
    pub shortage_token: String,

    /// Class applied to rows carrying the shortage token
    pub shortage_class: String,

    /// Class applied to every other row
    pub good_supply_class: String,

    /// Cell class selecting the currency formatting rule
    pub currency_class: String,

    /// Cell class selecting the percentage formatting rule
    pub percentage_class: String,

    /// Delay before the first freshness check, in milliseconds
    pub initial_check_delay_ms: u32,

    /// Recurring freshness check interval, in milliseconds
    pub check_interval_ms: u32,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            cell_selector: "table.dataTable tbody td".into(),
            editing_class: "cell-editing".into(),
            save_button_id: "saveData".into(),
            confirm_message:
                "Are you sure you want to save changes? This will update the source data.".into(),
            month_display_id: "currentMonthDisplay".into(),
            shortage_container_id: "shortageWarningTable".into(),
            row_selector: "table tbody tr".into(),
            shortage_token: "SHORTAGE".into(),
            shortage_class: "shortage-warning".into(),
            good_supply_class: "good-supply".into(),
            currency_class: "currency".into(),
            percentage_class: "percentage".into(),
            initial_check_delay_ms: 2_000,
            check_interval_ms: 3_600_000,
        }
    }
}

impl BehaviorConfig {
    /// Id of the optional embedded JSON override block
    pub const CONFIG_SCRIPT_ID: &'static str = "dashboard-behaviors-config";

    /// Read overrides embedded in the page, falling back to defaults.
    ///
    /// A malformed blob is ignored (logged at warn level), never surfaced.
    pub fn from_page() -> Self {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return Self::default();
        };
        let Some(text) = document
            .get_element_by_id(Self::CONFIG_SCRIPT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Ignoring malformed embedded behavior config: {err}");
                Self::default()
            }
        }
    }
}
