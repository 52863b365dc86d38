use dioxus::prelude::*;
use shared_types::Role;

use super::auth::SignInForm;

/// Administrator entry: the sign-in form with the role fixed to admin.
#[component]
pub fn AdminLogin() -> Element {
    rsx! {
        SignInForm {
            title: "Admin Portal",
            description: "Administrator access to the SkillSyncer console",
            fixed_role: Some(Role::Admin),
        }
    }
}
