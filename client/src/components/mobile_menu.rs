//! Collapsible navigation for narrow viewports.

use leptos::prelude::*;
use nav::section::Section;

#[cfg(test)]
#[path = "mobile_menu_test.rs"]
mod mobile_menu_test;

/// CSS class for a mobile menu entry.
pub fn mobile_link_class(active: bool) -> &'static str {
    if active { "mobile-menu__link mobile-menu__link--active" } else { "mobile-menu__link" }
}

#[component]
pub fn MobileMenu(
    sections: Vec<Section>,
    #[prop(into)] active: Signal<String>,
    #[prop(into)] dark: Signal<bool>,
    on_navigate: Callback<String>,
) -> impl IntoView {
    let links = sections
        .into_iter()
        .map(|Section { id, label }| {
            let id_for_class = id.clone();
            view! {
                <button
                    class=move || mobile_link_class(active.with(|a| *a == id_for_class))
                    on:click=move |_| on_navigate.run(id.clone())
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="mobile-menu" class:mobile-menu--dark=move || dark.get()>
            <nav class="mobile-menu__nav">{links}</nav>
        </div>
    }
}
