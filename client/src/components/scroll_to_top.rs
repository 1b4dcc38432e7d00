//! Floating "back to top" button.

use leptos::prelude::*;
use nav::scroll::scroll_to_top_visible;

#[component]
pub fn ScrollToTop(#[prop(into)] progress: Signal<f64>, on_click: Callback<()>) -> impl IntoView {
    view! {
        <Show when=move || scroll_to_top_visible(progress.get())>
            <button
                class="btn scroll-to-top"
                on:click=move |_| on_click.run(())
                aria-label="Scroll to top"
            >
                "↑"
            </button>
        </Show>
    }
}
