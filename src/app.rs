//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::content;
use crate::gallery::ProjectGallery;
use crate::storage::settings::{load_settings, AppSettings};
use crate::ui::Layout;
use dioxus::prelude::*;

/// Page sections, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Projects,
    Chat,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::Home, Section::About, Section::Projects, Section::Chat];

    /// The DOM id of the section element, used for nav scrolling
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Projects => "projects",
            Section::Chat => "chatbot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About",
            Section::Projects => "Projects",
            Section::Chat => "Chat",
        }
    }
}

/// Global application state shared across components
#[derive(Clone)]
pub struct AppState {
    pub settings: Signal<AppSettings>,
    pub gallery: Signal<ProjectGallery>,
    /// Single source of truth for the scroll-spy nav; fed by section
    /// visibility events, read by the header
    pub active_section: Signal<Section>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        Self {
            settings: Signal::new(load_settings()),
            gallery: Signal::new(ProjectGallery::new(content::projects())),
            active_section: Signal::new(Section::Home),
        }
    }
}

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Layout {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchors_are_unique() {
        let anchors: std::collections::HashSet<_> =
            Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(anchors.len(), Section::ALL.len());
    }
}
