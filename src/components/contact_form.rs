//! Contact Form Component
//!
//! Collects a name, email and message. No submission backend is wired up:
//! submitting stays on the page and only logs that a submission happened.

use dioxus::prelude::*;
use portfolio_ui::{Button, Input, TextArea};

#[component]
pub fn ContactForm() -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        // Field lengths only; message content never reaches the logs
        tracing::info!(
            name_len = name.read().len(),
            email_len = email.read().len(),
            message_len = message.read().len(),
            "Contact form submitted with no submission handler configured"
        );
    };

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            Input {
                id: "name".to_string(),
                label: "Name".to_string(),
                value: name(),
                oninput: move |s| name.set(s),
            }
            Input {
                id: "email".to_string(),
                label: "Email".to_string(),
                input_type: "email".to_string(),
                value: email(),
                oninput: move |s| email.set(s),
            }
            TextArea {
                id: "message".to_string(),
                label: "Message".to_string(),
                rows: 4,
                value: message(),
                oninput: move |s| message.set(s),
            }
            Button {
                button_type: "submit".to_string(),
                class: "btn-block".to_string(),
                "Send Message"
            }
        }
    }
}
