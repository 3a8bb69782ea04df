//! Landing section

use crate::app::Section;
use crate::content;
use dioxus::prelude::*;

#[component]
pub fn Hero() -> Element {
    let (headline, accent) = content::HERO_HEADLINE;
    let tagline = content::HERO_TAGLINE;

    rsx! {
        div { class: "hero",
            h1 { class: "hero-headline animate-fade-in-up",
                "{headline}"
                span { class: "hero-accent", "{accent}" }
            }

            p { class: "hero-tagline animate-fade-in-up delay-200", "{tagline}" }

            div { class: "hero-actions animate-fade-in-up delay-400",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| super::scroll_to(Section::About),
                    "Learn More"
                }
                button {
                    class: "btn btn-outline",
                    onclick: move |_| super::scroll_to(Section::Projects),
                    "View Projects"
                }
            }
        }
    }
}
