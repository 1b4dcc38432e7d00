//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use nav::page::PageCore;

use crate::pages::portfolio::PortfolioPage;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the page state container and header chrome state; everything below
/// reads them through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let page = RwSignal::new(PageCore::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(page);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/folio.css"/>
        <Title text="Portfolio"/>
        <Meta name="description" content="Full stack developer portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
