//! Scroll sampling: active section and progress.
//!
//! DESIGN
//! ======
//! A sample is a pure function of the previous state, the current scroll
//! metrics, and live section layout. Repeating a sample with the same inputs
//! yields the same state, so the host may call it on every scroll tick.

use crate::consts::{DEFAULT_SECTION_ID, PROBE_OFFSET_PX, SCROLL_TOP_THRESHOLD_PERCENT};
use crate::section::{SectionLayout, SectionRegistry};

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Document scroll geometry at the moment of a scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Vertical scroll offset of the viewport.
    pub scroll_y: f64,
    /// Full document height.
    pub scroll_height: f64,
    /// Viewport height.
    pub client_height: f64,
}

impl ScrollMetrics {
    #[must_use]
    pub fn new(scroll_y: f64, scroll_height: f64, client_height: f64) -> Self {
        Self { scroll_y, scroll_height, client_height }
    }

    /// Largest reachable scroll offset. May be zero or negative for short pages.
    #[must_use]
    pub fn max_scrollable(&self) -> f64 {
        self.scroll_height - self.client_height
    }
}

/// Scroll progress as a percentage of the scrollable distance.
///
/// Not clamped: overscroll can push the result briefly outside `[0, 100]`.
/// Degenerate geometry (nothing to scroll, non-finite input) yields `0.0`.
#[must_use]
pub fn progress_percent(metrics: ScrollMetrics) -> f64 {
    let max = metrics.max_scrollable();
    if !max.is_finite() || max <= 0.0 || !metrics.scroll_y.is_finite() {
        return 0.0;
    }
    metrics.scroll_y / max * 100.0
}

/// Clamp a progress value into `[0, 100]` for display.
#[must_use]
pub fn clamp_progress(percent: f64) -> f64 {
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, 100.0)
}

/// Whether the scroll-to-top control should be visible.
#[must_use]
pub fn scroll_to_top_visible(percent: f64) -> bool {
    percent > SCROLL_TOP_THRESHOLD_PERCENT
}

/// Derived scroll snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollState {
    pub scroll_y: f64,
    pub active_section_id: String,
    pub progress_percent: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new(DEFAULT_SECTION_ID)
    }
}

impl ScrollState {
    #[must_use]
    pub fn new(active_section_id: impl Into<String>) -> Self {
        Self { scroll_y: 0.0, active_section_id: active_section_id.into(), progress_percent: 0.0 }
    }
}

/// Result of a single scroll sample.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollSample {
    pub state: ScrollState,
    /// Newly activated section id, present only when it differs from before.
    pub activated: Option<String>,
}

/// Samples scroll metrics into [`ScrollState`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTracker {
    probe_offset: f64,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(PROBE_OFFSET_PX)
    }
}

impl ScrollTracker {
    #[must_use]
    pub fn new(probe_offset: f64) -> Self {
        Self { probe_offset }
    }

    /// Document offset tested against section bounds.
    #[must_use]
    pub fn probe(&self, scroll_y: f64) -> f64 {
        scroll_y + self.probe_offset
    }

    /// Compute the next scroll state.
    ///
    /// The active section becomes the first registered section containing
    /// the probe. With no match, or a non-finite offset, the previous section
    /// is kept.
    #[must_use]
    pub fn sample(
        &self,
        previous: &ScrollState,
        metrics: ScrollMetrics,
        registry: &SectionRegistry,
        layout: &dyn SectionLayout,
    ) -> ScrollSample {
        // A non-finite offset lies inside no section, so nothing is matched.
        let (scroll_y, matched) = if metrics.scroll_y.is_finite() {
            (metrics.scroll_y, registry.section_at(self.probe(metrics.scroll_y), layout))
        } else {
            (0.0, None)
        };

        let activated = matched
            .filter(|section| section.id != previous.active_section_id)
            .map(|section| section.id.clone());
        let active_section_id = activated
            .clone()
            .unwrap_or_else(|| previous.active_section_id.clone());

        ScrollSample {
            state: ScrollState { scroll_y, active_section_id, progress_percent: progress_percent(metrics) },
            activated,
        }
    }
}
