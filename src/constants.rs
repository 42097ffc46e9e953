// DOM contract of the page hosting the globe.

pub const CANVAS_ID: &str = "globeCanvas";

// Details panel
pub const TITLE_ID: &str = "destinationTitle";
pub const IMAGE_ID: &str = "destinationImage";
pub const SUMMARY_ID: &str = "destinationSummary";
pub const FACTS_ID: &str = "destinationFacts";
pub const STATUS_ID: &str = "statusText";

// View switching
pub const NAV_BUTTON_SELECTOR: &str = ".nav-btn";
pub const VIEW_PANEL_SELECTOR: &str = ".view-panel";
pub const NAV_VIEW_ATTR: &str = "data-view";
pub const ACTIVE_CLASS: &str = "active";

// Assistant dialog (optional)
pub const ASSISTANT_BUTTON_ID: &str = "assistantButton";
pub const ASSISTANT_DIALOG_ID: &str = "assistantDialog";

/// Every element id the page must provide for the globe to start.
pub const REQUIRED_IDS: [&str; 6] = [CANVAS_ID, TITLE_ID, IMAGE_ID, SUMMARY_ID, FACTS_ID, STATUS_ID];

/// Ids from `ids` for which `exists` is false, in order.
pub fn missing_ids<'a>(ids: &[&'a str], exists: impl Fn(&str) -> bool) -> Vec<&'a str> {
    ids.iter().copied().filter(|id| !exists(id)).collect()
}
