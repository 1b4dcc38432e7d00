//! Navigation target resolution.
//!
//! A navigation request only turns into a scroll when the target is both
//! registered and mounted. Anything else (typo, stale id, section not yet
//! rendered) resolves to `None` and the caller does nothing.

use crate::section::{Section, SectionBounds, SectionLayout, SectionRegistry};

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// A resolved scroll destination.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTarget {
    pub id: String,
    pub bounds: SectionBounds,
}

/// Resolve `id` to a mounted, registered section.
#[must_use]
pub fn resolve_target(registry: &SectionRegistry, layout: &dyn SectionLayout, id: &str) -> Option<NavigationTarget> {
    let section = registry.get(id)?;
    let bounds = layout.bounds(&section.id)?;
    Some(NavigationTarget { id: section.id.clone(), bounds })
}

/// Address-bar fragment for a section id.
#[must_use]
pub fn fragment_for(id: &str) -> String {
    format!("#{id}")
}

/// Sections in display order, for nav links and the mobile menu.
#[must_use]
pub fn nav_items(registry: &SectionRegistry) -> Vec<Section> {
    registry.sections().to_vec()
}
