//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    view! {
        <footer class="site-footer" class:site-footer--dark=move || dark.get()>
            <p>"Built with Rust and Leptos."</p>
        </footer>
    }
}
