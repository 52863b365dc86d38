use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{Role, SignInRequest, ALL_ROLES};
use shared_ui::{
    Button, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle, Input, Label,
};

use crate::auth::use_session;
use crate::routes::{dashboard_route, Route};

/// Sign-in entry point. Every denied dashboard lands here.
#[component]
pub fn Auth() -> Element {
    rsx! {
        SignInForm {
            title: "Sign In",
            description: "Tell us who you are to open your dashboard",
            fixed_role: None,
        }
    }
}

/// Local sign-in form shared by `/auth` and `/admin-login`.
///
/// A valid submission becomes the stored session directly; there is no
/// credential check. With `fixed_role` set, the role picker is hidden.
#[component]
pub fn SignInForm(title: String, description: String, fixed_role: Option<Role>) -> Element {
    let mut session = use_session();
    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(move || fixed_role.unwrap_or(Role::Jobseeker));
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);
        field_errors.set(HashMap::new());

        let request = SignInRequest {
            display_name: display_name(),
            email: email(),
            role: role(),
        };
        match session.sign_in(request) {
            Ok(role) => {
                navigator().push(dashboard_route(role));
            }
            Err(err) => {
                tracing::warn!(error = %err, "sign-in rejected");
                if err.field_errors.is_empty() {
                    error_msg.set(Some(err.friendly_message()));
                } else {
                    field_errors.set(err.field_errors);
                }
            }
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "{title}" }
                    CardDescription { "{description}" }
                }

                CardContent {
                    if let Some(err) = error_msg() {
                        div { class: "auth-error", "{err}" }
                    }

                    form { onsubmit: handle_submit,
                        div { class: "auth-field",
                            Label { html_for: "display_name", "Full Name" }
                            Input {
                                id: "display_name",
                                placeholder: "Jane Doe",
                                value: display_name(),
                                on_input: move |e: FormEvent| display_name.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("display_name") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                input_type: "email",
                                id: "email",
                                placeholder: "you@example.com",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            if let Some(err) = field_errors().get("email") {
                                div { class: "auth-field-error", "{err}" }
                            }
                        }
                        if fixed_role.is_none() {
                            div { class: "auth-field",
                                Label { html_for: "role", "I am a" }
                                select {
                                    id: "role",
                                    class: "auth-select",
                                    value: role().as_str(),
                                    onchange: move |e: FormEvent| {
                                        if let Some(picked) = Role::parse(&e.value()) {
                                            role.set(picked);
                                        }
                                    },
                                    for choice in ALL_ROLES.iter().filter(|r| **r != Role::Admin) {
                                        option { value: choice.as_str(), "{choice.label()}" }
                                    }
                                }
                            }
                        }
                        Button { button_type: "submit", class: "auth-submit", "Continue" }
                    }
                }

                CardFooter {
                    if fixed_role.is_none() {
                        p { class: "auth-link",
                            Link { to: Route::ForgotPassword {}, "Forgot password?" }
                        }
                    } else {
                        p { class: "auth-link",
                            Link { to: Route::Home {}, "Back to site" }
                        }
                    }
                }
            }
        }
    }
}
