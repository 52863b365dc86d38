use dioxus::prelude::*;
use shared_ui::{Button, Input, Label};

use super::marketing::NoticeCard;
use crate::routes::Route;

#[component]
pub fn ResetPassword() -> Element {
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<&'static str>::None);
    let mut done = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if password().len() < 8 {
            error_msg.set(Some("Password must be at least 8 characters"));
        } else if password() != confirm() {
            error_msg.set(Some("Passwords do not match"));
        } else {
            error_msg.set(None);
            done.set(true);
        }
    };

    rsx! {
        NoticeCard {
            title: "Reset Password",
            description: "Choose a new password for your account",

            if let Some(err) = error_msg() {
                div { class: "auth-error", "{err}" }
            }
            if done() {
                div { class: "auth-success", "Your password has been updated." }
            } else {
                form { onsubmit: handle_submit,
                    div { class: "auth-field",
                        Label { html_for: "password", "New Password" }
                        Input {
                            input_type: "password",
                            id: "password",
                            placeholder: "At least 8 characters",
                            value: password(),
                            on_input: move |e: FormEvent| password.set(e.value()),
                        }
                    }
                    div { class: "auth-field",
                        Label { html_for: "confirm", "Confirm Password" }
                        Input {
                            input_type: "password",
                            id: "confirm",
                            value: confirm(),
                            on_input: move |e: FormEvent| confirm.set(e.value()),
                        }
                    }
                    Button { button_type: "submit", class: "auth-submit", "Update Password" }
                }
            }
            p { class: "auth-link",
                Link { to: Route::Auth {}, "Back to login" }
            }
        }
    }
}
