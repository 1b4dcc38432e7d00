//! Sun / moon theme toggle button.

use leptos::prelude::*;

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

/// Glyph shown on the toggle: the sun while dark (switch to light), the moon
/// while light.
pub fn theme_toggle_glyph(dark: bool) -> &'static str {
    if dark { "☀" } else { "☾" }
}

#[component]
pub fn ThemeToggle(#[prop(into)] dark: Signal<bool>, on_toggle: Callback<()>) -> impl IntoView {
    view! {
        <button
            class="btn theme-toggle"
            class:theme-toggle--dark=move || dark.get()
            on:click=move |_| on_toggle.run(())
            aria-label="Toggle theme"
            title="Toggle dark mode"
        >
            {move || theme_toggle_glyph(dark.get())}
        </button>
    }
}
