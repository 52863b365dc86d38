use dioxus::prelude::*;
use shared_types::{DashboardViewModel, RecordStatus, Role};
use shared_ui::{Badge, Card, CardContent, CardDescription, CardHeader, CardTitle};

use super::{status_badge, DashboardShell};
use crate::guard::RoleGuard;

const PIPELINE: &[RecordStatus] = &[
    RecordStatus::Pending,
    RecordStatus::Interview,
    RecordStatus::Hired,
];

#[component]
pub fn EmployerDashboard() -> Element {
    rsx! {
        RoleGuard { required: Role::Employer,
            DashboardShell { role: Role::Employer,
                HiringPipeline {}
            }
        }
    }
}

/// Applicant counts per stage, taken from the same records the list shows.
#[component]
fn HiringPipeline() -> Element {
    let model = DashboardViewModel::placeholder(Role::Employer);
    let stages: Vec<(RecordStatus, usize)> = PIPELINE
        .iter()
        .map(|stage| {
            let count = model.records.iter().filter(|r| r.status == *stage).count();
            (*stage, count)
        })
        .collect();

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Hiring Pipeline" }
                CardDescription { "Applicants by stage" }
            }
            CardContent {
                ul { class: "pipeline",
                    for (stage, count) in stages {
                        li { key: "{stage.label()}", class: "pipeline-stage",
                            Badge { variant: status_badge(stage), "{stage.label()}" }
                            span { class: "pipeline-count", "{count}" }
                        }
                    }
                }
            }
        }
    }
}
