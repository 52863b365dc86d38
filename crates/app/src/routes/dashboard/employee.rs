use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::DashboardShell;
use crate::auth::use_session;
use crate::guard::RoleGuard;

const SECURITY_TIPS: &[&str] = &[
    "Change your password after the first login.",
    "Keep your profile details up to date.",
    "Enable email alerts for suspicious activity.",
];

#[component]
pub fn EmployeeDashboard() -> Element {
    rsx! {
        RoleGuard { required: Role::Employee,
            DashboardShell { role: Role::Employee,
                AccountChecklist {}
            }
        }
    }
}

#[component]
fn AccountChecklist() -> Element {
    let session = use_session();
    let email = session.current.read().email_or_fallback().to_string();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Account Security" }
                CardDescription { "Signed in as {email}" }
            }
            CardContent {
                ul { class: "checklist",
                    for tip in SECURITY_TIPS.iter() {
                        li { key: "{tip}", class: "checklist-todo", "{tip}" }
                    }
                }
            }
        }
    }
}
