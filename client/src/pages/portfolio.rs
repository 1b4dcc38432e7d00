//! Single-page portfolio: header chrome, content sections, scroll tracking.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It bridges the browser and `nav::page::PageCore`:
//! window scroll events, the splash delay, and the persisted theme flow in;
//! the actions the core returns are executed by `util::dom::perform`.
//! Components below read `PageCore` through memos and never mutate it.

use leptos::prelude::*;
use nav::navigation::nav_items;
use nav::page::{Action, PageCore};
use nav::section::Section;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::loader::Loader;
use crate::components::progress_bar::ProgressBar;
use crate::components::scroll_to_top::ScrollToTop;
use crate::components::sections::section_body;
use crate::state::ui::UiState;
use crate::util::browser_store::BrowserStore;
use crate::util::dom::{SectionRefs, perform, read_metrics};

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

/// Class for the page root.
pub fn root_class(dark: bool) -> &'static str {
    if dark { "folio folio--dark" } else { "folio folio--light" }
}

/// Whether a change of active section should close the mobile menu. The
/// first observed section is not a change.
pub fn should_close_menu(previous: Option<&str>, next: &str) -> bool {
    previous.is_some_and(|previous| previous != next)
}

/// Run one core operation, notify subscribers only if the visible state
/// changed, then execute the returned actions.
pub fn dispatch(
    page: RwSignal<PageCore>,
    refs: &SectionRefs,
    op: impl FnOnce(&mut PageCore, &SectionRefs) -> Vec<Action>,
) -> Vec<Action> {
    let Some((actions, changed)) = page.try_update_untracked(|core| {
        let before = core.state().clone();
        let actions = op(core, refs);
        let changed = *core.state() != before;
        (actions, changed)
    }) else {
        return Vec::new();
    };
    if changed {
        page.notify();
    }
    perform(&actions, refs);
    actions
}

/// Portfolio page.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let page = expect_context::<RwSignal<PageCore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let sections = page.with_untracked(|p| nav_items(p.registry()));
    let refs = page.with_untracked(|p| SectionRefs::new(p.registry()));

    let active = Memo::new(move |_| page.with(|p| p.active_section_id().to_owned()));
    let dark = Memo::new(move |_| page.with(PageCore::is_dark));
    let progress = Memo::new(move |_| page.with(PageCore::progress_percent));
    let ready = Memo::new(move |_| page.with(PageCore::is_ready));

    Effect::new(move |prev: Option<String>| {
        let id = active.get();
        if should_close_menu(prev.as_deref(), &id) {
            ui.update(UiState::close_menu);
        }
        id
    });

    let nav_refs = refs.clone();
    let on_navigate = Callback::new(move |id: String| {
        dispatch(page, &nav_refs, |core, layout| core.scroll_to_section(&id, layout));
    });

    let theme_refs = refs.clone();
    let on_toggle_theme = Callback::new(move |()| {
        dispatch(page, &theme_refs, |core, _| core.toggle_theme(&mut BrowserStore));
    });

    let top_refs = refs.clone();
    let on_scroll_top = Callback::new(move |()| {
        dispatch(page, &top_refs, |core, _| core.scroll_to_top());
    });

    // Sections mount only once the gate opens; sample immediately so the
    // active section and progress reflect a restored scroll position.
    let sample_refs = refs.clone();
    Effect::new(move || {
        if !ready.get() {
            return;
        }
        if let Some(metrics) = read_metrics() {
            dispatch(page, &sample_refs, |core, layout| core.on_scroll(metrics, layout));
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let load_refs = refs.clone();
        Effect::new(move || {
            dispatch(page, &load_refs, |core, _| {
                core.load_theme(&BrowserStore, crate::util::dark_mode::prefers_dark)
            });
        });

        let gate_alive = Arc::new(AtomicBool::new(true));
        let gate_alive_task = gate_alive.clone();
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(nav::loading::LoadingGate::delay()).await;
            if !gate_alive_task.load(Ordering::Relaxed) {
                return;
            }
            if page.try_update_untracked(PageCore::loading_elapsed) == Some(true) {
                log::debug!("loading gate open");
                page.notify();
            }
        });

        let scroll_refs = refs.clone();
        let scroll_listener = window_event_listener(leptos::ev::scroll, move |_| {
            let Some(metrics) = read_metrics() else {
                return;
            };
            dispatch(page, &scroll_refs, |core, layout| core.on_scroll(metrics, layout));
        });

        on_cleanup(move || {
            gate_alive.store(false, Ordering::Relaxed);
            scroll_listener.remove();
            page.try_update_untracked(PageCore::teardown);
        });
    }

    let dark_signal = Signal::from(dark);

    view! {
        <div class=move || root_class(dark.get())>
            <Show
                when=move || ready.get()
                fallback=move || view! { <Loader dark=dark_signal/> }
            >
                <ProgressBar progress=progress/>
                <Header
                    sections=sections.clone()
                    active=active
                    dark=dark_signal
                    on_navigate=on_navigate
                    on_toggle_theme=on_toggle_theme
                />
                <main class="folio__main">
                    {section_views(&sections, &refs, dark_signal, on_navigate)}
                </main>
                <Footer dark=dark_signal/>
                <ScrollToTop progress=progress on_click=on_scroll_top/>
            </Show>
        </div>
    }
}

fn section_views(
    sections: &[Section],
    refs: &SectionRefs,
    dark: Signal<bool>,
    on_navigate: Callback<String>,
) -> Vec<AnyView> {
    sections
        .iter()
        .map(|section| {
            view! {
                <section id=section.id.clone() class="section" node_ref=refs.node_ref(&section.id)>
                    {section_body(&section.id, dark, on_navigate)}
                </section>
            }
            .into_any()
        })
        .collect()
}
