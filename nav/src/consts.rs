//! Shared constants for the navigation core.

// ── Scroll tracking ─────────────────────────────────────────────

/// Lookahead added to the scroll offset before the containment test, so a
/// section activates shortly before its top edge reaches the fixed header.
pub const PROBE_OFFSET_PX: f64 = 300.0;

/// Progress (percent) above which the scroll-to-top control is shown.
pub const SCROLL_TOP_THRESHOLD_PERCENT: f64 = 10.0;

/// Section considered active before any scroll sample has matched.
pub const DEFAULT_SECTION_ID: &str = "home";

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the JSON-encoded dark mode preference.
pub const THEME_STORAGE_KEY: &str = "darkMode";

// ── Loading ─────────────────────────────────────────────────────

/// Delay before the loading placeholder gives way to the page.
pub const LOADING_DELAY_MS: u32 = 1800;
