//! UI components for Folio
//!
//! This module contains all user interface components built with Dioxus. The
//! page is one scrollable column of sections; the header nav highlights
//! whichever section last reported itself visible.

pub mod about;
pub mod chat;
pub mod hero;
pub mod projects;

use crate::app::{AppState, Section};
use crate::content;
use crate::storage::settings::save_settings;
use dioxus::prelude::*;

/// Smooth-scroll the page to a section anchor
fn scroll_to(section: Section) {
    document::eval(&format!(
        "document.getElementById('{}')?.scrollIntoView({{ behavior: 'smooth' }});",
        section.anchor()
    ));
}

#[component]
pub fn Layout() -> Element {
    let app_state = use_context::<AppState>();
    let (theme, font_size, animations) = {
        let settings = app_state.settings.read();
        (
            settings.theme.clone(),
            settings.font_size.clone(),
            settings.animations_enabled,
        )
    };
    let motion_class = if animations { "" } else { " no-motion" };

    rsx! {
        div { class: "app theme-{theme} font-{font_size}{motion_class}",
            Header {}
            main { class: "page",
                SectionShell { section: Section::Home, hero::Hero {} }
                SectionShell { section: Section::About, about::About {} }
                SectionShell { section: Section::Projects, projects::ProjectsSection {} }
                SectionShell { section: Section::Chat, chat::ChatPanel {} }
            }
            Footer {}
        }
    }
}

/// Wraps a section body with its anchor id and visibility reporting
#[component]
fn SectionShell(section: Section, children: Element) -> Element {
    let app_state = use_context::<AppState>();
    let mut active_section = app_state.active_section;

    rsx! {
        section {
            id: section.anchor(),
            class: "section",
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    active_section.set(section);
                }
            },
            {children}
        }
    }
}

#[component]
fn Header() -> Element {
    let app_state = use_context::<AppState>();
    let active = *app_state.active_section.read();
    let mut settings = app_state.settings;
    let theme = settings.read().theme.clone();
    let name = content::PROFILE.name;

    let toggle_theme = move |_| {
        let mut s = settings.write();
        s.theme = if s.theme == "dark" { "light" } else { "dark" }.to_string();
        if let Err(e) = save_settings(&s) {
            tracing::error!("Failed to save settings: {}", e);
        }
    };

    rsx! {
        header { class: "header",
            div { class: "header-inner",
                a {
                    class: "brand",
                    onclick: move |_| scroll_to(Section::Home),
                    "{name}"
                }

                nav { class: "nav",
                    for section in Section::ALL {
                        a {
                            class: if section == active { "nav-link active" } else { "nav-link" },
                            onclick: move |_| scroll_to(section),
                            "{section.label()}"
                        }
                    }
                }

                button {
                    class: "theme-toggle",
                    title: "Toggle theme",
                    onclick: toggle_theme,
                    if theme == "dark" { "\u{2600}" } else { "\u{263E}" }
                }
            }
        }
    }
}

#[component]
fn Footer() -> Element {
    let name = content::PROFILE.name;

    rsx! {
        footer { class: "footer",
            div { class: "footer-inner",
                span { class: "footer-copy",
                    "\u{00A9} 2025 {name}. All rights reserved."
                }
                div { class: "footer-links",
                    for link in content::CONTACT_LINKS {
                        a {
                            class: "footer-link",
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{link.label}"
                        }
                    }
                }
            }
        }
    }
}
