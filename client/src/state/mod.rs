//! Client-side state that is not part of the navigation core.
//!
//! DESIGN
//! ======
//! Scroll, theme, and loading state belong to `nav::page::PageCore`. Only
//! header chrome that has no meaning outside the UI lives here.

pub mod ui;
