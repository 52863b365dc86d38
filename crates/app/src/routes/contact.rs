use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardHeader, CardTitle, Input, Label};

use super::marketing::{blurb, Blurb, BlurbGrid, Hero};
use crate::config::app_config;

const CHANNELS: &[Blurb] = &[
    blurb("Email Us", "Drop us a line anytime!"),
    blurb("Call Us", "Mon-Fri from 8am to 6pm"),
    blurb("Visit Us", "Tech District, SF 94105"),
    blurb("Working Hours", "Always here to help"),
];

const TOPICS: &[&str] = &[
    "General Inquiries",
    "Enterprise Sales",
    "Technical Support",
    "Partnership",
];

/// Contact page. The message form is display-only: nothing is sent.
#[component]
pub fn Contact() -> Element {
    let site = &app_config().site;
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut submitted = use_signal(|| false);

    rsx! {
        Hero {
            eyebrow: "Get in touch",
            title: "We'd love to hear from you",
            subtitle: "Reach us at {site.support_email}",
        }
        BlurbGrid { heading: "Ways to reach us", items: CHANNELS }

        section { class: "contact-form-section",
            Card {
                CardHeader { CardTitle { "Send a message" } }
                CardContent {
                    if submitted() {
                        div { class: "auth-success", "Thanks! We'll get back to you soon." }
                    }
                    form {
                        onsubmit: move |evt: FormEvent| {
                            evt.prevent_default();
                            tracing::debug!("contact form submitted");
                            submitted.set(true);
                        },
                        div { class: "auth-field",
                            Label { html_for: "contact_name", "Name" }
                            Input {
                                id: "contact_name",
                                value: name(),
                                on_input: move |e: FormEvent| name.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "contact_email", "Email" }
                            Input {
                                input_type: "email",
                                id: "contact_email",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "contact_topic", "Topic" }
                            select { id: "contact_topic", class: "auth-select",
                                for topic in TOPICS.iter() {
                                    option { key: "{topic}", value: "{topic}", "{topic}" }
                                }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "contact_message", "Message" }
                            textarea {
                                id: "contact_message",
                                class: "contact-textarea",
                                rows: 5,
                                value: message(),
                                oninput: move |e: FormEvent| message.set(e.value()),
                            }
                        }
                        Button { button_type: "submit", "Send Message" }
                    }
                }
            }
        }
    }
}
