//! Desktop navigation links with active-section highlighting.

use leptos::prelude::*;
use nav::section::Section;

#[cfg(test)]
#[path = "nav_links_test.rs"]
mod nav_links_test;

/// CSS class for a nav link.
pub fn nav_link_class(active: bool, dark: bool) -> &'static str {
    match (active, dark) {
        (true, true) => "nav-link nav-link--active nav-link--dark",
        (true, false) => "nav-link nav-link--active",
        (false, true) => "nav-link nav-link--dark",
        (false, false) => "nav-link",
    }
}

/// One button per section; the active one carries an underline marker.
#[component]
pub fn NavLinks(
    sections: Vec<Section>,
    #[prop(into)] active: Signal<String>,
    #[prop(into)] dark: Signal<bool>,
    on_navigate: Callback<String>,
) -> impl IntoView {
    sections
        .into_iter()
        .map(|section| {
            let Section { id, label } = section;
            let id_for_class = id.clone();
            let id_for_marker = id.clone();
            let is_active = move || active.with(|a| *a == id_for_class);
            view! {
                <button
                    class=move || nav_link_class(is_active(), dark.get())
                    on:click=move |_| on_navigate.run(id.clone())
                >
                    {label}
                    <Show when=move || active.with(|a| *a == id_for_marker)>
                        <span class="nav-link__marker" aria-hidden="true"></span>
                    </Show>
                </button>
            }
        })
        .collect::<Vec<_>>()
}
