use dioxus::prelude::*;
use shared_types::{AppError, GuardState, Role, SessionGuard, AUTH_ENTRY_PATH};
use shared_ui::Skeleton;

use crate::routes::Route;
use crate::storage::LocalStore;

/// Wraps a dashboard view and renders it only for the matching role.
///
/// The verdict is taken once, from the store, when the guard mounts. A
/// denied mount renders a neutral placeholder and navigates to the sign-in
/// entry; the wrapped view is never constructed in that case.
#[component]
pub fn RoleGuard(required: Role, children: Element) -> Element {
    let verdict = use_hook(move || {
        let mut guard = SessionGuard::new(required);
        let verdict = guard
            .decide_from_store(&LocalStore)
            .unwrap_or(GuardState::Loading);
        match &verdict {
            GuardState::Authorized(_) => tracing::debug!(%required, "dashboard access granted"),
            GuardState::Denied(reason) => {
                let err = AppError::from(*reason);
                tracing::info!(%required, error = %err, "dashboard access denied");
            }
            GuardState::Loading => {}
        }
        verdict
    });

    let redirect = verdict.redirect_target();
    use_effect(move || {
        if redirect.is_some() {
            navigator().push(Route::Auth {});
        }
    });

    match verdict {
        GuardState::Authorized(_) => rsx! { {children} },
        GuardState::Denied(_) => rsx! {
            div { class: "guard-redirect", "data-redirect": AUTH_ENTRY_PATH,
                p { "Redirecting to sign in..." }
            }
        },
        GuardState::Loading => rsx! {
            div { class: "guard-redirect",
                Skeleton { style: "height: 2rem; width: 12rem;" }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::{fresh_store, seed};
    use shared_types::SessionKey;

    #[component]
    fn Protected(required: Role) -> Element {
        rsx! {
            RoleGuard { required,
                div { class: "protected", "PROTECTED" }
            }
        }
    }

    fn mount(required: Role) -> VirtualDom {
        let mut dom = VirtualDom::new_with_props(Protected, ProtectedProps { required });
        dom.rebuild_in_place();
        dom
    }

    #[test]
    fn no_role_renders_only_the_placeholder() {
        let _store = fresh_store();

        let html = dioxus_ssr::render(&mount(Role::Jobseeker));
        assert!(!html.contains("PROTECTED"), "{html}");
        assert!(html.contains("Redirecting to sign in"), "{html}");
        assert!(html.contains("data-redirect=\"/auth\""), "{html}");
    }

    #[test]
    fn wrong_role_renders_only_the_placeholder() {
        let _store = fresh_store();
        seed(&[(SessionKey::Role, "employer"), (SessionKey::DisplayName, "Acme")]);

        let html = dioxus_ssr::render(&mount(Role::Admin));
        assert!(!html.contains("PROTECTED"), "{html}");
        assert!(html.contains("data-redirect"), "{html}");
    }

    #[test]
    fn matching_role_renders_children() {
        let _store = fresh_store();
        seed(&[(SessionKey::Role, "employer")]);

        let html = dioxus_ssr::render(&mount(Role::Employer));
        assert!(html.contains("PROTECTED"), "{html}");
        assert!(!html.contains("guard-redirect"), "{html}");
    }

    #[test]
    fn verdict_holds_for_the_mount_and_refreshes_on_remount() {
        let _store = fresh_store();

        let mut dom = mount(Role::Mentor);
        seed(&[(SessionKey::Role, "mentor")]);
        dom.mark_dirty(ScopeId::ROOT);
        dom.render_immediate_to_vec();
        let html = dioxus_ssr::render(&dom);
        assert!(!html.contains("PROTECTED"), "{html}");

        let html = dioxus_ssr::render(&mount(Role::Mentor));
        assert!(html.contains("PROTECTED"), "{html}");
    }
}
