//! Project types
//!
//! Records shown in the draggable gallery. Identity (`id`) is stable across
//! reorders; display order belongs to the gallery, not the project.

/// A portfolio project card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Stable identity, never changed by reordering
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    /// Cover image path
    pub image: &'static str,
    /// Technology tags, in display order
    pub technologies: &'static [&'static str],
    /// "More info" link
    pub link: Option<&'static str>,
    pub github_link: Option<&'static str>,
    pub demo_link: Option<&'static str>,
}
