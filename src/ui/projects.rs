//! Draggable project gallery section
//!
//! The grid interprets HTML5 drag gestures and commits explicit orders to the
//! [`crate::gallery::ProjectGallery`]; membership and validation live there.

use crate::app::AppState;
use crate::gallery::moved;
use crate::types::project::Project;
use dioxus::prelude::*;
use std::collections::HashSet;

#[component]
pub fn ProjectsSection() -> Element {
    let app_state = use_context::<AppState>();
    let dragging = use_signal(|| None::<u32>);
    let revealed = use_signal(HashSet::<u32>::new);

    let projects: Vec<Project> = app_state.gallery.read().projects().to_vec();

    rsx! {
        div { class: "projects",
            h2 { class: "section-title", "My Projects" }
            p { class: "muted center", "Drag projects to reorder them" }

            div { class: "project-grid",
                for project in projects {
                    ProjectCard {
                        key: "{project.id}",
                        project,
                        dragging,
                        revealed,
                    }
                }
            }
        }
    }
}

#[component]
fn ProjectCard(
    project: Project,
    dragging: Signal<Option<u32>>,
    revealed: Signal<HashSet<u32>>,
) -> Element {
    let app_state = use_context::<AppState>();
    let mut gallery = app_state.gallery;
    let mut dragging = dragging;
    let mut revealed = revealed;
    let id = project.id;

    let card_class = if *dragging.read() == Some(id) {
        "card project-card dragging"
    } else {
        "card project-card"
    };
    let desc_class = if revealed.read().contains(&id) {
        "project-desc revealed"
    } else {
        "project-desc"
    };

    rsx! {
        div {
            class: "{card_class}",
            draggable: "true",
            ondragstart: move |_| dragging.set(Some(id)),
            ondragover: move |evt| evt.prevent_default(),
            ondragend: move |_| dragging.set(None),
            ondrop: move |evt| {
                evt.prevent_default();
                let Some(src) = dragging.take() else { return };
                let candidate = moved(&gallery.read().order(), src, id);
                if let Err(e) = gallery.write().commit_order(&candidate) {
                    tracing::warn!("reorder rejected: {}", e);
                }
            },
            // Description text reveals once, the first time the card scrolls
            // into view
            onvisible: move |evt| {
                if evt.data().is_intersecting().unwrap_or(false) {
                    revealed.write().insert(id);
                }
            },

            img { class: "project-image", src: "{project.image}", alt: "{project.title}" }

            div { class: "project-body",
                h3 { class: "project-title", "{project.title}" }
                p { class: "{desc_class}", "{project.description}" }

                div { class: "tech-tags",
                    for tech in project.technologies {
                        span { class: "tech-chip", "{tech}" }
                    }
                }
            }

            div { class: "project-footer",
                if let Some(github) = project.github_link {
                    a {
                        class: "btn btn-small",
                        href: "{github}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Code"
                    }
                }
                if let Some(link) = project.link {
                    a {
                        class: "btn btn-small",
                        href: "{link}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "More Info"
                    }
                }
                if let Some(demo) = project.demo_link {
                    a {
                        class: "btn btn-small btn-primary",
                        href: "{demo}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "Live Demo"
                    }
                }
            }
        }
    }
}
