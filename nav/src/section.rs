#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

/// Vertical extent of a rendered section, in document pixels.
///
/// Always read fresh from the host; layout shifts on resize, so bounds are
/// never kept past a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    #[must_use]
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Half-open containment test: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Live geometry lookup for registered sections.
pub trait SectionLayout {
    /// Current bounds of the section's element, or `None` when it is not mounted.
    fn bounds(&self, id: &str) -> Option<SectionBounds>;
}

impl<F> SectionLayout for F
where
    F: Fn(&str) -> Option<SectionBounds>,
{
    fn bounds(&self, id: &str) -> Option<SectionBounds> {
        self(id)
    }
}

/// A navigable page region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: String,
    pub label: String,
}

impl Section {
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }
}

/// Ordered sections, top to bottom as laid out on the page.
///
/// Order is the tie-break for active-section resolution: when bounds
/// overlap, the earlier section wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::portfolio()
    }
}

impl SectionRegistry {
    #[must_use]
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// The portfolio's six sections.
    #[must_use]
    pub fn portfolio() -> Self {
        Self::new(vec![
            Section::new("home", "Home"),
            Section::new("about", "About"),
            Section::new("projects", "Projects"),
            Section::new("skills", "Skills"),
            Section::new("blog", "Blog"),
            Section::new("contact", "Contact"),
        ])
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    #[must_use]
    pub fn first(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// First section, in registry order, whose live bounds contain `y`.
    ///
    /// Unmounted sections are skipped.
    #[must_use]
    pub fn section_at(&self, y: f64, layout: &dyn SectionLayout) -> Option<&Section> {
        self.sections
            .iter()
            .find(|section| layout.bounds(&section.id).is_some_and(|b| b.contains(y)))
    }
}
