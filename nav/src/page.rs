//! Single-writer page state container.
//!
//! DESIGN
//! ======
//! `PageCore` owns scroll, theme, and loading state. Hosts read it through
//! [`PageCore::state`] and mutate it only through the operations below, each
//! of which returns the [`Action`]s the host must perform against the DOM.
//!
//! Navigation sets the active section optimistically; the next scroll sample
//! is authoritative and may replace it. Last writer wins, on purpose: the
//! smooth-scroll animation is observed through samples, never awaited.

use crate::consts::DEFAULT_SECTION_ID;
use crate::loading::{LoadingGate, LoadingState};
use crate::navigation::{fragment_for, resolve_target};
use crate::scroll::{ScrollMetrics, ScrollState, ScrollTracker};
use crate::section::{SectionLayout, SectionRegistry};
use crate::theme::{PreferenceStore, ThemeState};

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

/// Side effects for the host to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Smoothly scroll the section's element to the viewport top.
    ScrollToSection { id: String, top: f64 },
    /// Smoothly scroll the document back to offset zero.
    ScrollToTop,
    /// Replace the address-bar fragment; no history entry, no anchor jump.
    ReplaceFragment { fragment: String },
    /// Apply the theme to the document root.
    ApplyTheme { dark: bool },
}

/// Read-only view handed to presentational components.
#[derive(Debug, Clone, PartialEq)]
pub struct PageState {
    pub scroll: ScrollState,
    pub theme: ThemeState,
    pub loading: LoadingState,
}

#[derive(Debug, Clone)]
pub struct PageCore {
    registry: SectionRegistry,
    tracker: ScrollTracker,
    gate: LoadingGate,
    theme_loaded: bool,
    state: PageState,
}

impl Default for PageCore {
    fn default() -> Self {
        Self::new(SectionRegistry::portfolio())
    }
}

impl PageCore {
    #[must_use]
    pub fn new(registry: SectionRegistry) -> Self {
        let initial = registry
            .first()
            .map_or_else(|| DEFAULT_SECTION_ID.to_owned(), |s| s.id.clone());
        let gate = LoadingGate::new();
        Self {
            registry,
            tracker: ScrollTracker::default(),
            gate,
            theme_loaded: false,
            state: PageState {
                scroll: ScrollState::new(initial),
                theme: ThemeState::default(),
                loading: gate.state(),
            },
        }
    }

    // --- Read-only views ---

    #[must_use]
    pub fn state(&self) -> &PageState {
        &self.state
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn active_section_id(&self) -> &str {
        &self.state.scroll.active_section_id
    }

    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        self.state.scroll.progress_percent
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.state.theme.is_dark
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.state.loading == LoadingState::Ready
    }

    // --- Scroll ---

    /// Apply a scroll sample. Emits a fragment replacement only when the
    /// active section changes.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics, layout: &dyn SectionLayout) -> Vec<Action> {
        let sample = self
            .tracker
            .sample(&self.state.scroll, metrics, &self.registry, layout);
        self.state.scroll = sample.state;

        let Some(id) = sample.activated else {
            return Vec::new();
        };
        log::debug!("active section -> {id}");
        vec![Action::ReplaceFragment { fragment: fragment_for(&id) }]
    }

    // --- Navigation ---

    /// Smooth-scroll to a mounted section and mark it active right away.
    ///
    /// Unknown or unmounted ids leave the state untouched and return nothing.
    pub fn scroll_to_section(&mut self, id: &str, layout: &dyn SectionLayout) -> Vec<Action> {
        let Some(target) = resolve_target(&self.registry, layout, id) else {
            log::debug!("navigation to {id:?} ignored: section not mounted");
            return Vec::new();
        };

        let mut actions = vec![Action::ScrollToSection { id: target.id.clone(), top: target.bounds.top }];
        if self.state.scroll.active_section_id != target.id {
            actions.push(Action::ReplaceFragment { fragment: fragment_for(&target.id) });
            self.state.scroll.active_section_id = target.id;
        }
        actions
    }

    /// Smooth-scroll to the top of the document.
    #[must_use]
    pub fn scroll_to_top(&self) -> Vec<Action> {
        vec![Action::ScrollToTop]
    }

    // --- Theme ---

    /// Resolve the initial theme. Only the first call per page has effect.
    pub fn load_theme(&mut self, store: &dyn PreferenceStore, prefers_dark: impl FnOnce() -> bool) -> Vec<Action> {
        if self.theme_loaded {
            return Vec::new();
        }
        self.theme_loaded = true;
        self.state.theme = ThemeState::load(store, prefers_dark);
        vec![Action::ApplyTheme { dark: self.state.theme.is_dark }]
    }

    /// Flip the theme and persist it.
    pub fn toggle_theme(&mut self, store: &mut dyn PreferenceStore) -> Vec<Action> {
        // An explicit choice must not be overwritten by a late initial load.
        self.theme_loaded = true;
        let dark = self.state.theme.toggle(store);
        vec![Action::ApplyTheme { dark }]
    }

    // --- Loading ---

    /// Loading timer elapsed. Returns `true` when this reveals the page.
    pub fn loading_elapsed(&mut self) -> bool {
        let revealed = self.gate.fire();
        self.state.loading = self.gate.state();
        revealed
    }

    /// Page torn down; a pending loading timer must not reveal it.
    pub fn teardown(&mut self) {
        self.gate.cancel();
    }
}
