//! Chat input component with the send button inside the field

use dioxus::prelude::*;

#[component]
pub fn ChatInput(on_send: EventHandler<String>, is_awaiting: bool) -> Element {
    let mut text = use_signal(String::new);

    let mut submit = move || {
        if !is_awaiting && !text().trim().is_empty() {
            on_send.call(text());
            text.set(String::new());
        }
    };

    let handle_keydown = move |evt: KeyboardEvent| {
        if evt.key() == Key::Enter && !evt.modifiers().contains(Modifiers::SHIFT) {
            evt.prevent_default();
            submit();
        }
    };

    let can_send = !is_awaiting && !text().trim().is_empty();
    let send_class = if can_send {
        "send-button"
    } else {
        "send-button disabled"
    };

    rsx! {
        div { class: "chat-input",
            input {
                class: "chat-input-field",
                r#type: "text",
                placeholder: "Type your message...",
                value: "{text}",
                oninput: move |evt| text.set(evt.value()),
                onkeydown: handle_keydown,
                // Presentation affordance only; the session also rejects
                // submissions while a reply is pending
                disabled: is_awaiting,
            }

            button {
                class: "{send_class}",
                disabled: !can_send,
                title: "Send (Enter)",
                onclick: move |_| submit(),
                svg {
                    width: "16",
                    height: "16",
                    view_box: "0 0 24 24",
                    fill: "none",
                    stroke: "currentColor",
                    stroke_width: "2",
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    line { x1: "12", y1: "19", x2: "12", y2: "5" }
                    polyline { points: "5 12 12 5 19 12" }
                }
            }
        }
    }
}
