use pretty_assertions::assert_eq;
use shared_types::{is_dashboard_route, path_only, ChromeVisibility, DASHBOARD_PATHS};

#[test]
fn test_every_dashboard_path_hides_chrome() {
    for path in DASHBOARD_PATHS {
        assert!(is_dashboard_route(path), "{path}");
        assert_eq!(
            ChromeVisibility::for_path(path),
            ChromeVisibility {
                navbar: false,
                footer: false
            }
        );
    }
}

#[test]
fn test_settings_and_admin_login_hide_chrome() {
    assert!(is_dashboard_route("/settings"));
    assert!(is_dashboard_route("/admin-login"));
}

#[test]
fn test_marketing_paths_show_chrome() {
    for path in [
        "/",
        "/about",
        "/features",
        "/how-it-works",
        "/contact",
        "/auth",
        "/forgot-password",
        "/reset-password",
        "/employer-info",
    ] {
        let chrome = ChromeVisibility::for_path(path);
        assert!(chrome.navbar && chrome.footer, "{path}");
    }
}

#[test]
fn test_near_miss_paths_are_not_dashboards() {
    for path in [
        "/unknown-path",
        "/settings/",
        "/Settings",
        "/admin-dashboard/users",
        "admin-dashboard",
        "",
    ] {
        assert!(!is_dashboard_route(path), "{path:?}");
    }
}

#[test]
fn test_query_and_fragment_do_not_change_classification() {
    assert_eq!(path_only("/settings?tab=security"), "/settings");
    assert_eq!(path_only("/mentor-dashboard#sessions"), "/mentor-dashboard");
    assert!(is_dashboard_route(path_only("/employer-dashboard?x=1")));
    assert!(!is_dashboard_route(path_only("/about?ref=footer")));
}

#[test]
fn test_navbar_and_footer_always_agree() {
    for path in ["/", "/settings", "/jobseeker-dashboard", "/nowhere"] {
        let chrome = ChromeVisibility::for_path(path);
        assert_eq!(chrome.navbar, chrome.footer, "{path}");
    }
}
