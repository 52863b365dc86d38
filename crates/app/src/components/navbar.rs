use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdLogOut};
use dioxus_free_icons::Icon;
use shared_ui::{Button, ButtonVariant, Navbar};

use crate::auth::use_session;
use crate::config::app_config;
use crate::routes::{dashboard_route, Route};

/// Marketing navigation bar shown on every non-dashboard page.
#[component]
pub fn SiteNavbar() -> Element {
    let mut session = use_session();
    let site = &app_config().site;
    let role = session.current.read().role;

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./navbar.css") }

        header { class: "site-header",
            Link { to: Route::Home {}, class: "site-brand",
                Icon::<LdBriefcase> { icon: LdBriefcase, width: 22, height: 22 }
                span { "{site.brand}" }
            }

            Navbar {
                Link { to: Route::About {}, active_class: "active", "About" }
                Link { to: Route::Features {}, active_class: "active", "Features" }
                Link { to: Route::HowItWorks {}, active_class: "active", "How It Works" }
                Link { to: Route::EmployerInfo {}, active_class: "active", "For Employers" }
                Link { to: Route::Contact {}, active_class: "active", "Contact" }
            }

            div { class: "site-header-actions",
                if let Some(role) = role {
                    Link { to: dashboard_route(role), class: "site-header-link", "My Dashboard" }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| {
                            session.logout();
                            navigator().push(Route::Home {});
                        },
                        Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                        "Log out"
                    }
                } else {
                    Link { to: Route::Auth {}, class: "button site-header-cta", "Sign In" }
                }
            }
        }
    }
}
