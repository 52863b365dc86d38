pub mod about;
pub mod admin_login;
pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod employer_info;
pub mod features;
pub mod forgot_password;
pub mod home;
pub mod how_it_works;
pub mod marketing;
pub mod not_found;
pub mod reset_password;
pub mod settings;

use dioxus::prelude::*;
use shared_types::{path_only, ChromeVisibility, Role};

use crate::components::{SiteFooter, SiteNavbar};

use about::About;
use admin_login::AdminLogin;
use auth::Auth;
use contact::Contact;
use dashboard::{
    AdminDashboard, EmployeeDashboard, EmployerDashboard, JobseekerDashboard, MentorDashboard,
};
use employer_info::EmployerInfo;
use features::Features;
use forgot_password::ForgotPassword;
use home::Home;
use how_it_works::HowItWorks;
use not_found::NotFound;
use reset_password::ResetPassword;
use settings::Settings;

/// Application routes.
///
/// Every route shares `PageShell`, which decides from the path alone
/// whether the marketing navbar and footer are drawn.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(PageShell)]
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/features")]
    Features {},
    #[route("/how-it-works")]
    HowItWorks {},
    #[route("/contact")]
    Contact {},
    #[route("/auth")]
    Auth {},
    #[route("/forgot-password")]
    ForgotPassword {},
    #[route("/reset-password")]
    ResetPassword {},
    #[route("/employer-info")]
    EmployerInfo {},
    #[route("/admin-login")]
    AdminLogin {},
    #[route("/settings")]
    Settings {},
    // ── Role dashboards (each behind RoleGuard) ──
    #[route("/jobseeker-dashboard")]
    JobseekerDashboard {},
    #[route("/employer-dashboard")]
    EmployerDashboard {},
    #[route("/mentor-dashboard")]
    MentorDashboard {},
    #[route("/employee-dashboard")]
    EmployeeDashboard {},
    #[route("/admin-dashboard")]
    AdminDashboard {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// The dashboard route a role lands on after signing in.
pub fn dashboard_route(role: Role) -> Route {
    match role {
        Role::Jobseeker => Route::JobseekerDashboard {},
        Role::Employer => Route::EmployerDashboard {},
        Role::Mentor => Route::MentorDashboard {},
        Role::Employee => Route::EmployeeDashboard {},
        Role::Admin => Route::AdminDashboard {},
    }
}

/// Outer layout for every page: optional marketing chrome around the outlet.
#[component]
fn PageShell() -> Element {
    let route: Route = use_route();
    let location = route.to_string();
    let chrome = ChromeVisibility::for_path(path_only(&location));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "page-shell",
            if chrome.navbar {
                SiteNavbar {}
            }
            main {
                class: if chrome.navbar { "page-content" } else { "page-content page-content-bare" },
                Outlet::<Route> {}
            }
            if chrome.footer {
                SiteFooter {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    use dioxus_history::{History, MemoryHistory};
    use pretty_assertions::assert_eq;
    use shared_types::{is_dashboard_route, SessionKey, ALL_ROLES, AUTH_ENTRY_PATH, DASHBOARD_PATHS};

    use crate::auth::SessionContext;
    use crate::storage::testing::{fresh_store, seed};

    #[component]
    fn AppAt(path: String) -> Element {
        use_context_provider(move || {
            Rc::new(MemoryHistory::with_initial_path(path)) as Rc<dyn History>
        });
        use_context_provider(SessionContext::new);

        rsx! { Router::<Route> {} }
    }

    fn render_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            AppAt,
            AppAtProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn unknown_path_renders_not_found_inside_chrome() {
        let _store = fresh_store();

        let html = render_at("/unknown-path");
        assert!(html.contains("Page Not Found"), "{html}");
        assert!(html.contains("site-header"), "{html}");
        assert!(html.contains("site-footer"), "{html}");
    }

    #[test]
    fn settings_renders_without_chrome() {
        let _store = fresh_store();

        let html = render_at("/settings");
        assert!(html.contains("page-content-bare"), "{html}");
        assert!(!html.contains("site-header"), "{html}");
        assert!(!html.contains("site-footer"), "{html}");
    }

    #[test]
    fn signed_in_mentor_is_greeted_by_first_name() {
        let _store = fresh_store();
        seed(&[(SessionKey::Role, "mentor"), (SessionKey::DisplayName, "Dr. Lisa K.")]);

        let html = render_at("/mentor-dashboard");
        assert!(html.contains("Lisa!"), "{html}");
        assert!(!html.contains("guard-redirect"), "{html}");
        assert!(!html.contains("site-header"), "{html}");
    }

    #[test]
    fn employer_on_admin_dashboard_sees_only_the_redirect_placeholder() {
        let _store = fresh_store();
        seed(&[(SessionKey::Role, "employer"), (SessionKey::DisplayName, "Acme")]);

        let html = render_at("/admin-dashboard");
        assert!(html.contains("Redirecting to sign in"), "{html}");
        assert!(!html.contains("Job Postings"), "{html}");
        assert!(!html.contains("Acme"), "{html}");
    }

    #[test]
    fn dashboard_routes_match_role_paths() {
        for role in ALL_ROLES {
            assert_eq!(dashboard_route(*role).to_string(), role.dashboard_path());
        }
    }

    #[test]
    fn every_chromeless_path_is_routable() {
        for path in DASHBOARD_PATHS {
            let route: Route = path.parse().expect("dashboard path parses");
            assert!(!matches!(route, Route::NotFound { .. }), "{path}");
            assert_eq!(route.to_string(), *path);
        }
    }

    #[test]
    fn marketing_routes_keep_chrome() {
        let routes = [
            Route::Home {},
            Route::About {},
            Route::Features {},
            Route::HowItWorks {},
            Route::Contact {},
            Route::Auth {},
            Route::ForgotPassword {},
            Route::ResetPassword {},
            Route::EmployerInfo {},
        ];
        for route in routes {
            assert!(!is_dashboard_route(&route.to_string()), "{route}");
        }
    }

    #[test]
    fn auth_route_is_the_redirect_target() {
        assert_eq!(Route::Auth {}.to_string(), AUTH_ENTRY_PATH);
    }

    #[test]
    fn unknown_path_falls_through_to_not_found_with_chrome() {
        let route: Route = "/unknown-path".parse().expect("catch-all parses");
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["unknown-path".to_string()]
            }
        );
        let chrome = ChromeVisibility::for_path(path_only(&route.to_string()));
        assert!(chrome.navbar && chrome.footer);
    }
}
