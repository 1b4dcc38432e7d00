//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and section content. They read the active
//! section, dark flag, and scroll progress as signals and report user intent
//! back to the portfolio page through callbacks.

pub mod footer;
pub mod header;
pub mod loader;
pub mod mobile_menu;
pub mod nav_links;
pub mod progress_bar;
pub mod scroll_to_top;
pub mod sections;
pub mod theme_toggle;
