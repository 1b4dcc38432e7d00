//! Full-screen splash shown until the loading gate opens.

use leptos::prelude::*;

#[component]
pub fn Loader(#[prop(into)] dark: Signal<bool>) -> impl IntoView {
    view! {
        <div class="loader" class:loader--dark=move || dark.get()>
            <div class="loader__spinner" aria-hidden="true"></div>
            <p class="loader__label">"Loading..."</p>
        </div>
    }
}
