use dioxus::prelude::*;
use shared_ui::{Button, Input, Label};

use super::marketing::NoticeCard;
use crate::routes::Route;

/// Password reset request. There are no stored passwords, so the form only
/// acknowledges the request.
#[component]
pub fn ForgotPassword() -> Element {
    let mut email = use_signal(String::new);
    let mut sent = use_signal(|| false);

    rsx! {
        NoticeCard {
            title: "Forgot Password",
            description: "Enter your email and we'll send you a reset link",

            if sent() {
                div { class: "auth-success",
                    "If an account exists for {email}, a reset link is on its way."
                }
            } else {
                form {
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        sent.set(true);
                    },
                    div { class: "auth-field",
                        Label { html_for: "email", "Email" }
                        Input {
                            input_type: "email",
                            id: "email",
                            placeholder: "you@example.com",
                            value: email(),
                            on_input: move |e: FormEvent| email.set(e.value()),
                        }
                    }
                    Button { button_type: "submit", class: "auth-submit", "Send Reset Link" }
                }
            }
            p { class: "auth-link",
                Link { to: Route::Auth {}, "Back to login" }
            }
        }
    }
}
