use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::DashboardShell;
use crate::guard::RoleGuard;

const SYSTEM_STATUS: &[(&str, &str)] = &[
    ("Database Status", "Connected"),
    ("API Response", "120ms"),
    ("Email Notifications", "Enabled"),
    ("Auto-approve Companies", "Off"),
];

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        RoleGuard { required: Role::Admin,
            DashboardShell { role: Role::Admin,
                SystemHealth {}
            }
        }
    }
}

#[component]
fn SystemHealth() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "System Health" }
                CardDescription { "Platform services at a glance" }
            }
            CardContent {
                ul { class: "activity-list",
                    for (service, state) in SYSTEM_STATUS.iter() {
                        li { key: "{service}", class: "activity-row",
                            span { "{service}" }
                            Badge { variant: BadgeVariant::Outline, "{state}" }
                        }
                    }
                }
            }
        }
    }
}
