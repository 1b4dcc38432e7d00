//! Dark mode browser glue.
//!
//! Reads the host's `prefers-color-scheme` signal and applies a `data-theme`
//! attribute to the `<html>` element. The preference itself is resolved by
//! `nav::theme`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths safely no-op to keep server rendering deterministic; the server
//! always renders the built-in default theme and hydration corrects it.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Whether the system prefers a dark colour scheme.
pub fn prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// `data-theme` attribute value for a theme.
pub fn theme_attr(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.set_attribute("data-theme", theme_attr(enabled));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
