//! Thin bar across the top of the viewport tracking scroll progress.

use leptos::prelude::*;
use nav::scroll::clamp_progress;

#[cfg(test)]
#[path = "progress_bar_test.rs"]
mod progress_bar_test;

/// Inline transform for the bar fill. Progress outside `0..=100` is clamped.
pub fn progress_bar_transform(progress_percent: f64) -> String {
    format!("scaleX({})", clamp_progress(progress_percent) / 100.0)
}

#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<f64>) -> impl IntoView {
    view! {
        <div class="progress-bar" role="progressbar" aria-valuemin="0" aria-valuemax="100">
            <div
                class="progress-bar__fill"
                style:transform=move || progress_bar_transform(progress.get())
            ></div>
        </div>
    }
}
