// Host-side checks of the page contract.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use std::collections::HashSet;

#[test]
fn required_ids_are_unique_and_non_empty() {
    let mut seen = HashSet::new();
    for id in REQUIRED_IDS {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are bare, got {}", id);
        assert!(seen.insert(id), "duplicate id {}", id);
    }
}

#[test]
fn optional_ids_are_not_required() {
    assert!(!REQUIRED_IDS.contains(&ASSISTANT_BUTTON_ID));
    assert!(!REQUIRED_IDS.contains(&ASSISTANT_DIALOG_ID));
}

#[test]
fn selectors_target_classes() {
    assert!(NAV_BUTTON_SELECTOR.starts_with('.'));
    assert!(VIEW_PANEL_SELECTOR.starts_with('.'));
    assert!(NAV_VIEW_ATTR.starts_with("data-"));
}

#[test]
fn missing_ids_reports_absent_elements_in_order() {
    let present = [CANVAS_ID, TITLE_ID, STATUS_ID];
    let missing = missing_ids(&REQUIRED_IDS, |id| present.contains(&id));
    assert_eq!(missing, vec![IMAGE_ID, SUMMARY_ID, FACTS_ID]);
}

#[test]
fn complete_page_has_nothing_missing() {
    assert!(missing_ids(&REQUIRED_IDS, |_| true).is_empty());
}
