use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdArrowLeft, LdBell, LdPalette, LdShield, LdUser};
use dioxus_free_icons::Icon;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input, Label,
    PageHeader, PageSubtitle, PageTitle, Separator,
};

use crate::auth::use_session;
use crate::routes::{dashboard_route, Route};

/// Account settings. Rendered without marketing chrome; the values shown are
/// read from the session and nothing here is persisted.
#[component]
pub fn Settings() -> Element {
    let session = use_session();
    let current = session.current.read().clone();
    let back = current.role.map(dashboard_route).unwrap_or(Route::Home {});
    let mut email_alerts = use_signal(|| true);
    let mut compact = use_signal(|| false);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./settings.css") }

        div { class: "settings-page",
            Link { to: back, class: "settings-back",
                Icon::<LdArrowLeft> { icon: LdArrowLeft, width: 16, height: 16 }
                "Back"
            }

            PageHeader {
                div {
                    PageTitle { "Settings" }
                    PageSubtitle { "Manage your account preferences" }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdUser> { icon: LdUser, width: 18, height: 18 }
                        " Profile"
                    }
                    CardDescription { "Update your personal information" }
                }
                CardContent {
                    div { class: "settings-grid",
                        div { class: "auth-field",
                            Label { html_for: "settings_name", "Full Name" }
                            Input {
                                id: "settings_name",
                                value: current.display_name_or_fallback().to_string(),
                                disabled: true,
                            }
                        }
                        div { class: "auth-field",
                            Label { html_for: "settings_email", "Email" }
                            Input {
                                id: "settings_email",
                                value: current.email_or_fallback().to_string(),
                                disabled: true,
                            }
                        }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
                        " Security"
                    }
                    CardDescription { "Change your password and security settings" }
                }
                CardContent {
                    Link { to: Route::ResetPassword {}, class: "button", "Update Password" }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdBell> { icon: LdBell, width: 18, height: 18 }
                        " Notifications"
                    }
                    CardDescription { "Control email and in-app notifications" }
                }
                CardContent {
                    label { class: "settings-toggle",
                        input {
                            r#type: "checkbox",
                            checked: email_alerts(),
                            onchange: move |_| email_alerts.toggle(),
                        }
                        "Email me about new matches and messages"
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle {
                        Icon::<LdPalette> { icon: LdPalette, width: 18, height: 18 }
                        " Appearance"
                    }
                    CardDescription { "Theme and accessibility preferences" }
                }
                CardContent {
                    label { class: "settings-toggle",
                        input {
                            r#type: "checkbox",
                            checked: compact(),
                            onchange: move |_| compact.toggle(),
                        }
                        "Compact layout"
                    }
                    Separator {}
                    Button { variant: ButtonVariant::Outline, disabled: true, "Save Preferences" }
                }
            }
        }
    }
}
