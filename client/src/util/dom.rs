//! DOM adapters for the navigation core.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SectionRefs` exposes live `<section>` geometry to `nav` through
//! `SectionLayout`, and `perform` executes the `Action`s `PageCore` returns.
//! Without the `hydrate` feature nothing is mounted: every section reads as
//! absent and every action is a no-op.

use leptos::html;
use leptos::prelude::*;
use nav::page::Action;
use nav::scroll::ScrollMetrics;
use nav::section::{SectionBounds, SectionLayout, SectionRegistry};

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

/// Element references for every registered section, in registry order.
#[derive(Clone)]
pub struct SectionRefs {
    entries: Vec<(String, NodeRef<html::Section>)>,
}

impl SectionRefs {
    pub fn new(registry: &SectionRegistry) -> Self {
        let entries = registry
            .sections()
            .iter()
            .map(|section| (section.id.clone(), NodeRef::new()))
            .collect();
        Self { entries }
    }

    /// Node ref to bind on the section's element. Unregistered ids get a
    /// detached ref that never resolves.
    pub fn node_ref(&self, id: &str) -> NodeRef<html::Section> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map_or_else(NodeRef::new, |(_, node_ref)| *node_ref)
    }

    #[cfg(feature = "hydrate")]
    fn element(&self, id: &str) -> Option<web_sys::HtmlElement> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .and_then(|(_, node_ref)| node_ref.get_untracked())
    }
}

impl SectionLayout for SectionRefs {
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        #[cfg(feature = "hydrate")]
        {
            let el = self.element(id)?;
            Some(SectionBounds::new(f64::from(el.offset_top()), f64::from(el.offset_height())))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
            None
        }
    }
}

/// Current window scroll offset and document geometry.
pub fn read_metrics() -> Option<ScrollMetrics> {
    #[cfg(feature = "hydrate")]
    {
        let window = web_sys::window()?;
        let root = window.document()?.document_element()?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(ScrollMetrics::new(
            scroll_y,
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        ))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Execute core actions against the DOM.
pub fn perform(actions: &[Action], refs: &SectionRefs) {
    for action in actions {
        match action {
            Action::ScrollToSection { id, top } => scroll_to_section(refs, id, *top),
            Action::ScrollToTop => scroll_window_to(0.0),
            Action::ReplaceFragment { fragment } => replace_fragment(fragment),
            Action::ApplyTheme { dark } => crate::util::dark_mode::apply(*dark),
        }
    }
}

fn scroll_to_section(refs: &SectionRefs, id: &str, top: f64) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = refs.element(id) else {
            scroll_window_to(top);
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (refs, id, top);
    }
}

fn scroll_window_to(top: f64) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = top;
    }
}

/// Rewrite the address-bar fragment via `history.replaceState`, which neither
/// appends history nor jumps to the anchor.
fn replace_fragment(fragment: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
            return;
        };
        let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(fragment));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fragment;
    }
}
