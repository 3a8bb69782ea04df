//! Chat widget
//!
//! The scripted assistant panel: message list, typing indicator, suggested
//! questions, input. Replies land after a randomized typing delay and are
//! cancelled if the panel unmounts first.

pub mod input;
pub mod message;

use crate::bot::rules::typing_delay;
use crate::bot::session::{ChatSession, ReplyGuard};
use crate::content;
use dioxus::prelude::*;
use std::rc::Rc;

#[component]
pub fn ChatPanel() -> Element {
    let mut session = use_signal(|| ChatSession::new(content::WELCOME));
    let guard = use_hook(ReplyGuard::new);
    let rules = use_hook(|| Rc::new(content::rule_book()));

    // A reply scheduled before unmount must never land after it
    {
        let guard = guard.clone();
        use_drop(move || guard.cancel());
    }

    // Keep the newest message in view
    use_effect(move || {
        let _count = session.read().messages().len();
        document::eval(
            "const el = document.getElementById('chat-scroll'); if (el) el.scrollTop = el.scrollHeight;",
        );
    });

    let handle_send = use_callback(move |text: String| {
        let Some(accepted) = session.write().submit(&text) else {
            return;
        };
        let reply = rules.respond(&accepted).to_string();
        let delay = typing_delay();
        let guard = guard.clone();
        tracing::debug!(delay_ms = delay.as_millis() as u64, "bot reply scheduled");
        spawn(async move {
            tokio::time::sleep(delay).await;
            session.write().deliver(&guard, reply);
        });
    });

    let awaiting = session.read().is_awaiting_reply();
    let avatar = content::PROFILE.avatar;
    let name = content::PROFILE.name;

    rsx! {
        div { class: "chat",
            h2 { class: "section-title", "Want to Know More?" }

            div { class: "card chat-card",
                div { class: "chat-header",
                    img {
                        class: "avatar tiny",
                        src: "{avatar}",
                        alt: "{name}",
                    }
                    div {
                        p { class: "chat-title", "Rafael's AI Assistant (Showcase purpose only)" }
                        p { class: "muted small chat-status",
                            if awaiting { "Typing..." } else { "Online" }
                        }
                    }
                }

                div { id: "chat-scroll", class: "chat-messages",
                    for msg in session.read().messages().iter() {
                        message::MessageBubble { key: "{msg.id}", message: msg.clone() }
                    }
                    if awaiting {
                        message::TypingIndicator {}
                    }
                }

                div { class: "chat-suggestions",
                    p { class: "muted small", "Suggested questions:" }
                    div { class: "suggestion-row",
                        for question in content::SUGGESTED_QUESTIONS {
                            button {
                                class: "suggestion-chip",
                                disabled: awaiting,
                                onclick: move |_| handle_send.call(question.to_string()),
                                "{question}"
                            }
                        }
                    }
                }

                input::ChatInput {
                    on_send: move |text| handle_send.call(text),
                    is_awaiting: awaiting,
                }
            }
        }
    }
}
