//! Message display components

use crate::types::message::{Message, Sender};
use dioxus::prelude::*;

#[component]
pub fn MessageBubble(message: Message) -> Element {
    let side = if message.sender == Sender::User { "user" } else { "bot" };

    rsx! {
        div { class: "msg-row {side} animate-fade-in-up",
            div { class: "msg-bubble {side}",
                p { class: "msg-text", "{message.text}" }
                p { class: "msg-time", "{message.time_label()}" }
            }
        }
    }
}

/// Three soft dots while the reply is being "typed"
#[component]
pub fn TypingIndicator() -> Element {
    rsx! {
        div { class: "msg-row bot animate-fade-in-up",
            div { class: "msg-bubble bot typing",
                div { class: "typing-dots",
                    div { class: "dot" }
                    div { class: "dot delay-150" }
                    div { class: "dot delay-300" }
                }
            }
        }
    }
}
