//! Role dashboards.
//!
//! Each route wraps its view in `RoleGuard`, so nothing below the guard is
//! built unless the stored role matches. The views share `DashboardShell`
//! for the sidebar, greeting header and section switching, and add their
//! own overview panel as children.

pub mod admin;
pub mod employee;
pub mod employer;
pub mod jobseeker;
pub mod mentor;

pub use admin::AdminDashboard;
pub use employee::EmployeeDashboard;
pub use employer::EmployerDashboard;
pub use jobseeker::JobseekerDashboard;
pub use mentor::MentorDashboard;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdLogOut, LdMenu};
use dioxus_free_icons::Icon;
use shared_types::greeting::{format_date, format_time, greeting};
use shared_types::{DashboardViewModel, RecordStatus, RecordSummary, Role, SectionPanel};
use shared_ui::{
    Avatar, Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, PageHeader, PageSubtitle, PageTitle, Sidebar, SidebarContent,
    SidebarFooter, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem,
    SidebarProvider, SidebarTrigger, StatCard,
};

use crate::auth::use_session;
use crate::clock::use_clock;
use crate::config::app_config;
use crate::routes::Route;

const OVERVIEW: &str = "overview";

/// Badge color for a record status.
pub fn status_badge(status: RecordStatus) -> BadgeVariant {
    match status {
        RecordStatus::Hired | RecordStatus::Completed => BadgeVariant::Success,
        RecordStatus::Pending => BadgeVariant::Warning,
        RecordStatus::Interview | RecordStatus::Scheduled => BadgeVariant::Primary,
        RecordStatus::Active => BadgeVariant::Secondary,
    }
}

/// Shared frame for every role dashboard: sidebar sections, greeting
/// header with a live clock, and the overview panel.
#[component]
pub fn DashboardShell(role: Role, children: Element) -> Element {
    let mut session = use_session();
    let model = use_hook(move || DashboardViewModel::placeholder(role));
    let mut active = use_signal(|| OVERVIEW);
    let now = use_clock(app_config().site.clock_interval_ms);

    let current = session.current.read().clone();
    let greeting_line = greeting(&current, now().time());
    let date_line = format_date(now());
    let time_line = format_time(now());
    let brand = &app_config().site.brand;

    let active_label = model.section_label(active()).unwrap_or("Dashboard");
    let panel = model.panel(active()).cloned();
    let sections = model.sections;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "dashboard-brand",
                        span { class: "dashboard-brand-name", "{brand}" }
                        span { class: "dashboard-portal", "{role.portal_name()}" }
                    }
                }
                SidebarContent {
                    SidebarMenu {
                        for section in sections.iter().copied() {
                            SidebarMenuItem { key: "{section.id}",
                                SidebarMenuButton {
                                    active: active() == section.id,
                                    onselect: move |_| active.set(section.id),
                                    "{section.label}"
                                }
                            }
                        }
                    }
                }
                SidebarFooter {
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "dashboard-logout",
                        onclick: move |_| {
                            session.logout();
                            navigator().push(Route::Home {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Log out"
                    }
                }
            }

            SidebarInset {
                header { class: "dashboard-topbar",
                    SidebarTrigger {
                        Icon::<LdMenu> { icon: LdMenu, width: 18, height: 18 }
                    }
                    div { class: "dashboard-user",
                        div { class: "dashboard-user-text",
                            span { class: "dashboard-user-name", "{current.display_name_or_fallback()}" }
                            span { class: "dashboard-user-email", "{current.email_or_fallback()}" }
                        }
                        Avatar { initial: current.initial() }
                    }
                }

                PageHeader {
                    div {
                        PageTitle { "{greeting_line}" }
                        PageSubtitle { "{date_line} · {time_line}" }
                    }
                }

                if active() == OVERVIEW {
                    div { class: "dashboard-stats",
                        for tile in model.stats.iter() {
                            StatCard {
                                key: "{tile.label}",
                                label: "{tile.label}",
                                value: "{tile.value}",
                                hint: "{tile.hint}",
                            }
                        }
                    }

                    div { class: "dashboard-columns",
                        Card { class: "dashboard-records",
                            CardHeader {
                                CardTitle { "{model.records_title}" }
                                CardDescription { "{model.open_records()} awaiting action" }
                            }
                            CardContent {
                                RecordList { records: model.records.clone() }
                            }
                        }

                        div { class: "dashboard-side",
                            Card {
                                CardHeader { CardTitle { "Quick Actions" } }
                                CardContent {
                                    div { class: "quick-actions",
                                        for action in model.quick_actions.iter() {
                                            Button { key: "{action}", variant: ButtonVariant::Outline, "{action}" }
                                        }
                                    }
                                }
                            }
                            {children}
                        }
                    }
                } else if active() == "settings" {
                    Card {
                        CardHeader {
                            CardTitle { "{active_label}" }
                            CardDescription { "Account preferences live on the settings page." }
                        }
                        CardContent {
                            Link { to: Route::Settings {}, class: "button", "Open Settings" }
                        }
                    }
                } else if let Some(panel) = panel {
                    SectionPanelCard { title: "{active_label}", panel }
                } else {
                    Card {
                        CardHeader {
                            CardTitle { "{active_label}" }
                            CardDescription { "Nothing to show here yet." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecordList(records: Vec<RecordSummary>) -> Element {
    rsx! {
        ul { class: "record-list",
            for record in records.iter() {
                li { key: "{record.title}-{record.meta}", class: "record-row",
                    div { class: "record-text",
                        span { class: "record-title", "{record.title}" }
                        span { class: "record-subtitle", "{record.subtitle}" }
                    }
                    span { class: "record-meta", "{record.meta}" }
                    Badge { variant: status_badge(record.status), "{record.status.label()}" }
                }
            }
        }
    }
}

/// Main panel for a selected sidebar section.
#[component]
fn SectionPanelCard(title: String, panel: SectionPanel) -> Element {
    rsx! {
        Card { class: "section-panel",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{panel.description}" }
            }
            CardContent {
                if !panel.filters.is_empty() {
                    div { class: "section-filters",
                        for filter in panel.filters.iter() {
                            Badge { key: "{filter}", variant: BadgeVariant::Outline, "{filter}" }
                        }
                    }
                }
                if !panel.fields.is_empty() {
                    dl { class: "section-fields",
                        for (label, value) in panel.fields.iter() {
                            div { key: "{label}", class: "section-field",
                                dt { "{label}" }
                                dd { "{value}" }
                            }
                        }
                    }
                }
                if !panel.records.is_empty() {
                    RecordList { records: panel.records.clone() }
                }
                if panel.is_empty() {
                    p { class: "section-empty", "{panel.empty_message}" }
                }
            }
        }
    }
}
