//! Viewport-driven navigation core for the portfolio page.
//!
//! This crate holds every piece of page behavior that does not need a browser:
//! deciding which section is active for a scroll offset, computing scroll
//! progress, planning navigation, resolving the theme preference, and gating
//! the initial reveal. The Leptos client owns the DOM and executes the
//! [`page::Action`]s returned from [`page::PageCore`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Single-writer page state container and host actions |
//! | [`section`] | Ordered section registry and live layout lookup |
//! | [`scroll`] | Active-section tracking and progress math |
//! | [`navigation`] | Navigation target resolution and fragment formatting |
//! | [`theme`] | Persisted / system theme preference |
//! | [`loading`] | One-shot loading gate |
//! | [`consts`] | Shared constants (probe offset, delays, storage key) |

pub mod consts;
pub mod loading;
pub mod navigation;
pub mod page;
pub mod scroll;
pub mod section;
pub mod theme;
