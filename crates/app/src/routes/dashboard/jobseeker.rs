use dioxus::prelude::*;
use shared_types::Role;
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::DashboardShell;
use crate::guard::RoleGuard;

const PROFILE_CHECKLIST: &[(&str, bool)] = &[
    ("Completed profile setup", true),
    ("Education", true),
    ("Experience", true),
    ("Skills", false),
];

#[component]
pub fn JobseekerDashboard() -> Element {
    rsx! {
        RoleGuard { required: Role::Jobseeker,
            DashboardShell { role: Role::Jobseeker,
                ProfileOptimizer {}
            }
        }
    }
}

/// Profile completeness checklist for the overview column.
#[component]
fn ProfileOptimizer() -> Element {
    let done = PROFILE_CHECKLIST.iter().filter(|(_, ok)| *ok).count();
    let percent = done * 100 / PROFILE_CHECKLIST.len();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Profile Optimizer" }
                CardDescription { "Complete your profile to get noticed" }
            }
            CardContent {
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {percent}%;" }
                }
                ul { class: "checklist",
                    for (item, ok) in PROFILE_CHECKLIST.iter() {
                        li {
                            key: "{item}",
                            class: if *ok { "checklist-done" } else { "checklist-todo" },
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}
