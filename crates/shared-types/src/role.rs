use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role controlling which dashboard a session may enter.
///
/// - `Jobseeker`: candidate looking for internships and jobs.
/// - `Employer`: company account posting internships and reviewing applications.
/// - `Mentor`: industry mentor guiding jobseekers.
/// - `Admin`: platform operator.
/// - `Employee`: staff member linked to an employer account.
///
/// There is no "guest" variant: an unauthenticated session is
/// `Option::<Role>::None`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Jobseeker,
    Employer,
    Mentor,
    Admin,
    Employee,
}

/// All roles in sign-in picker order.
pub const ALL_ROLES: &[Role] = &[
    Role::Jobseeker,
    Role::Employer,
    Role::Mentor,
    Role::Employee,
    Role::Admin,
];

impl Role {
    /// Parse a stored role marker. Matching is exact: the store holds the
    /// lowercase form written by [`Role::as_str`], anything else is no role.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "jobseeker" => Some(Role::Jobseeker),
            "employer" => Some(Role::Employer),
            "mentor" => Some(Role::Mentor),
            "admin" => Some(Role::Admin),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// Lowercase string for local storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Jobseeker => "jobseeker",
            Role::Employer => "employer",
            Role::Mentor => "mentor",
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Jobseeker => "Jobseeker",
            Role::Employer => "Employer",
            Role::Mentor => "Mentor",
            Role::Admin => "Administrator",
            Role::Employee => "Employee",
        }
    }

    /// Path of the dashboard this role lands on after sign-in.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Jobseeker => "/jobseeker-dashboard",
            Role::Employer => "/employer-dashboard",
            Role::Mentor => "/mentor-dashboard",
            Role::Admin => "/admin-dashboard",
            Role::Employee => "/employee-dashboard",
        }
    }

    /// Subtitle shown under the brand in the dashboard sidebar.
    pub fn portal_name(&self) -> &'static str {
        match self {
            Role::Jobseeker => "Jobseeker Portal",
            Role::Employer => "Employer Portal",
            Role::Mentor => "Mentor Portal",
            Role::Admin => "Admin Console",
            Role::Employee => "Employee Portal",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
