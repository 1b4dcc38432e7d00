//! Fixed page header: logo, desktop nav, theme toggle, mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Receives the active section and dark flag read-only from the portfolio
//! page and reports clicks back through callbacks. Owns only the mobile
//! menu flag (`UiState`).

use leptos::prelude::*;
use nav::section::Section;

use crate::components::mobile_menu::MobileMenu;
use crate::components::nav_links::NavLinks;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::ui::UiState;

#[component]
pub fn Header(
    sections: Vec<Section>,
    #[prop(into)] active: Signal<String>,
    #[prop(into)] dark: Signal<bool>,
    on_navigate: Callback<String>,
    on_toggle_theme: Callback<()>,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = move || ui.with(|u| u.menu_open);
    let mobile_sections = sections.clone();

    view! {
        <header class="site-header" class:site-header--dark=move || dark.get()>
            <div class="site-header__bar">
                <a
                    class="site-header__logo"
                    href="#home"
                    on:click=move |ev| {
                        ev.prevent_default();
                        on_navigate.run(nav::consts::DEFAULT_SECTION_ID.to_owned());
                    }
                >
                    "<Dev/>"
                </a>

                <div class="site-header__actions">
                    <nav class="site-header__nav">
                        <NavLinks sections=sections active=active dark=dark on_navigate=on_navigate/>
                    </nav>

                    <ThemeToggle dark=dark on_toggle=on_toggle_theme/>

                    <button
                        class="btn site-header__menu-button"
                        on:click=move |_| ui.update(UiState::toggle_menu)
                        aria-label="Toggle mobile menu"
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=menu_open>
                <MobileMenu
                    sections=mobile_sections.clone()
                    active=active
                    dark=dark
                    on_navigate=on_navigate
                />
            </Show>
        </header>
    }
}
