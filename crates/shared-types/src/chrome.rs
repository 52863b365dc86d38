/// Paths that render without the marketing navbar and footer.
///
/// Membership is exact string equality: no prefixes, no trailing-slash or
/// case folding. Anything not listed keeps the chrome.
pub const DASHBOARD_PATHS: &[&str] = &[
    "/jobseeker-dashboard",
    "/employer-dashboard",
    "/mentor-dashboard",
    "/employee-dashboard",
    "/admin-dashboard",
    "/admin-login",
    "/settings",
];

/// Whether `path` is one of the [`DASHBOARD_PATHS`].
pub fn is_dashboard_route(path: &str) -> bool {
    DASHBOARD_PATHS.contains(&path)
}

/// Which pieces of site chrome a page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeVisibility {
    pub navbar: bool,
    pub footer: bool,
}

impl ChromeVisibility {
    /// Chrome for a path: hidden on dashboard routes, shown everywhere else.
    pub fn for_path(path: &str) -> Self {
        let shown = !is_dashboard_route(path);
        Self {
            navbar: shown,
            footer: shown,
        }
    }
}

/// Strip a query string or fragment from a rendered router location.
pub fn path_only(location: &str) -> &str {
    location.split(['?', '#']).next().unwrap_or(location)
}
