use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::DashboardShell;
use crate::guard::RoleGuard;

const RECENT_ACTIVITY: &[(&str, &str)] = &[
    ("Session completed with John Doe", "2 hours ago"),
    ("New message from Sarah Smith", "5 hours ago"),
    ("Resource shared: React Best Practices", "Yesterday"),
];

#[component]
pub fn MentorDashboard() -> Element {
    rsx! {
        RoleGuard { required: Role::Mentor,
            DashboardShell { role: Role::Mentor,
                RecentActivity {}
            }
        }
    }
}

#[component]
fn RecentActivity() -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "Recent Activity" }
                CardDescription { "Your latest sessions and messages" }
            }
            CardContent {
                ul { class: "activity-list",
                    for (event, when) in RECENT_ACTIVITY.iter() {
                        li { key: "{event}", class: "activity-row",
                            span { "{event}" }
                            span { class: "activity-when", "{when}" }
                        }
                    }
                }
            }
        }
    }
}
