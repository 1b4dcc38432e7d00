#![allow(clippy::float_cmp)]

use std::collections::HashMap;

use super::*;
use crate::consts::THEME_STORAGE_KEY;
use crate::section::{Section, SectionBounds};
use crate::theme::{MemoryStore, ThemeSource};

fn layout(entries: &[(&str, f64, f64)]) -> impl Fn(&str) -> Option<SectionBounds> {
    let map: HashMap<String, SectionBounds> = entries
        .iter()
        .map(|(id, top, height)| ((*id).to_owned(), SectionBounds::new(*top, *height)))
        .collect();
    move |id: &str| map.get(id).copied()
}

fn mounted() -> impl Fn(&str) -> Option<SectionBounds> {
    layout(&[
        ("home", 0.0, 800.0),
        ("about", 800.0, 600.0),
        ("projects", 1400.0, 900.0),
        ("skills", 2300.0, 700.0),
        ("blog", 3000.0, 800.0),
        ("contact", 3800.0, 600.0),
    ])
}

fn metrics(scroll_y: f64) -> ScrollMetrics {
    ScrollMetrics::new(scroll_y, 4400.0, 800.0)
}

// =============================================================
// Initial state
// =============================================================

#[test]
fn new_page_starts_loading_at_first_section() {
    let page = PageCore::default();
    assert_eq!(page.active_section_id(), "home");
    assert_eq!(page.progress_percent(), 0.0);
    assert!(!page.is_ready());
    assert_eq!(page.state().loading, LoadingState::Loading);
}

#[test]
fn empty_registry_falls_back_to_default_section() {
    let page = PageCore::new(SectionRegistry::new(Vec::new()));
    assert_eq!(page.active_section_id(), "home");
}

#[test]
fn custom_registry_starts_at_its_first_section() {
    let page = PageCore::new(SectionRegistry::new(vec![Section::new("intro", "Intro")]));
    assert_eq!(page.active_section_id(), "intro");
}

// =============================================================
// on_scroll
// =============================================================

#[test]
fn scroll_into_new_section_replaces_fragment() {
    let mut page = PageCore::default();
    let actions = page.on_scroll(metrics(900.0), &mounted());
    assert_eq!(page.active_section_id(), "about");
    assert_eq!(actions, vec![Action::ReplaceFragment { fragment: "#about".to_owned() }]);
}

#[test]
fn scroll_within_section_emits_nothing() {
    let mut page = PageCore::default();
    let l = mounted();
    page.on_scroll(metrics(900.0), &l);
    assert!(page.on_scroll(metrics(950.0), &l).is_empty());
    assert!(page.on_scroll(metrics(950.0), &l).is_empty());
    assert_eq!(page.active_section_id(), "about");
}

#[test]
fn scroll_updates_progress_every_sample() {
    let mut page = PageCore::default();
    let l = mounted();
    page.on_scroll(metrics(1800.0), &l);
    assert_eq!(page.progress_percent(), 50.0);
    page.on_scroll(metrics(3600.0), &l);
    assert_eq!(page.progress_percent(), 100.0);
}

#[test]
fn repeated_sample_leaves_state_unchanged() {
    let mut page = PageCore::default();
    let l = mounted();
    page.on_scroll(metrics(2500.0), &l);
    let before = page.state().clone();
    page.on_scroll(metrics(2500.0), &l);
    assert_eq!(page.state(), &before);
}

#[test]
fn scroll_past_last_section_keeps_active() {
    let mut page = PageCore::default();
    page.on_scroll(metrics(3700.0), &mounted());
    assert_eq!(page.active_section_id(), "contact");
    let actions = page.on_scroll(metrics(3700.0), &layout(&[("contact", 3800.0, 100.0)]));
    assert!(actions.is_empty());
    assert_eq!(page.active_section_id(), "contact");
}

#[test]
fn non_finite_offset_keeps_fragment() {
    let mut page = PageCore::default();
    page.on_scroll(metrics(900.0), &mounted());
    assert_eq!(page.active_section_id(), "about");
    let actions = page.on_scroll(metrics(f64::INFINITY), &mounted());
    assert!(actions.is_empty());
    assert_eq!(page.active_section_id(), "about");
    assert_eq!(page.progress_percent(), 0.0);
}

// =============================================================
// scroll_to_section
// =============================================================

#[test]
fn navigate_scrolls_and_sets_active_optimistically() {
    let mut page = PageCore::default();
    let actions = page.scroll_to_section("skills", &mounted());
    assert_eq!(
        actions,
        vec![
            Action::ScrollToSection { id: "skills".to_owned(), top: 2300.0 },
            Action::ReplaceFragment { fragment: "#skills".to_owned() },
        ]
    );
    assert_eq!(page.active_section_id(), "skills");
}

#[test]
fn navigate_to_current_section_only_scrolls() {
    let mut page = PageCore::default();
    let actions = page.scroll_to_section("home", &mounted());
    assert_eq!(actions, vec![Action::ScrollToSection { id: "home".to_owned(), top: 0.0 }]);
}

#[test]
fn navigate_to_unmounted_section_is_noop() {
    let mut page = PageCore::default();
    let l = layout(&[("home", 0.0, 800.0), ("about", 800.0, 600.0)]);
    let before = page.state().clone();
    let actions = page.scroll_to_section("projects", &l);
    assert!(actions.is_empty());
    assert_eq!(page.state(), &before);
}

#[test]
fn navigate_to_unknown_section_is_noop() {
    let mut page = PageCore::default();
    let before = page.state().clone();
    assert!(page.scroll_to_section("projcts", &mounted()).is_empty());
    assert_eq!(page.state(), &before);
}

#[test]
fn next_scroll_sample_overrides_optimistic_navigation() {
    let mut page = PageCore::default();
    let l = mounted();
    page.scroll_to_section("blog", &l);
    assert_eq!(page.active_section_id(), "blog");

    // animation overshot into contact
    let actions = page.on_scroll(metrics(3600.0), &l);
    assert_eq!(page.active_section_id(), "contact");
    assert_eq!(actions, vec![Action::ReplaceFragment { fragment: "#contact".to_owned() }]);
}

#[test]
fn later_navigation_supersedes_earlier_one() {
    let mut page = PageCore::default();
    let l = mounted();
    page.scroll_to_section("blog", &l);
    page.scroll_to_section("about", &l);
    assert_eq!(page.active_section_id(), "about");
}

#[test]
fn scroll_to_top_leaves_active_section_to_tracker() {
    let mut page = PageCore::default();
    page.on_scroll(metrics(3000.0), &mounted());
    assert_eq!(page.scroll_to_top(), vec![Action::ScrollToTop]);
    assert_eq!(page.active_section_id(), "blog");
}

// =============================================================
// Theme
// =============================================================

#[test]
fn load_theme_applies_persisted_value() {
    let mut page = PageCore::default();
    let store = MemoryStore::new().with_value(THEME_STORAGE_KEY, "false");
    let actions = page.load_theme(&store, || true);
    assert_eq!(actions, vec![Action::ApplyTheme { dark: false }]);
    assert!(!page.is_dark());
    assert_eq!(page.state().theme.source, ThemeSource::Persisted);
}

#[test]
fn load_theme_runs_once() {
    let mut page = PageCore::default();
    let store = MemoryStore::new();
    page.load_theme(&store, || false);
    assert!(page.load_theme(&store, || true).is_empty());
    assert!(!page.is_dark());
}

#[test]
fn toggle_theme_round_trip() {
    let mut page = PageCore::default();
    let mut store = MemoryStore::new().with_value(THEME_STORAGE_KEY, "true");
    page.load_theme(&store, || false);
    let original = page.is_dark();

    assert_eq!(page.toggle_theme(&mut store), vec![Action::ApplyTheme { dark: !original }]);
    assert_eq!(page.toggle_theme(&mut store), vec![Action::ApplyTheme { dark: original }]);
    assert_eq!(page.is_dark(), original);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("true"));
}

#[test]
fn toggle_before_load_is_not_overwritten() {
    let mut page = PageCore::default();
    let mut store = MemoryStore::read_only();
    page.toggle_theme(&mut store);
    assert!(page.load_theme(&store, || true).is_empty());
    assert!(!page.is_dark());
}

// =============================================================
// Loading
// =============================================================

#[test]
fn loading_elapsed_reveals_once() {
    let mut page = PageCore::default();
    assert!(page.loading_elapsed());
    assert!(page.is_ready());
    assert!(!page.loading_elapsed());
    assert!(page.is_ready());
}

#[test]
fn teardown_prevents_reveal() {
    let mut page = PageCore::default();
    page.teardown();
    assert!(!page.loading_elapsed());
    assert!(!page.is_ready());
}
