use leptos::*;

use crate::{
    state::auth::{use_auth, AuthState},
    utils::permissions::{has_permission, Role},
};

/// True when the signed-in profile holds one of `roles`.
pub fn can_see(state: &AuthState, roles: &[Role]) -> bool {
    state
        .role()
        .is_some_and(|role| has_permission(role, roles))
}

/// Renders `children` only for profiles whose role is in `roles`. Nothing is
/// rendered without a profile.
#[component]
pub fn UserCanSee(#[prop(into)] roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let state = use_auth().map(|ctx| ctx.state());
    let visible = move || state.is_some_and(|state| can_see(&state.get(), &roles));
    view! {
        <Show when=visible fallback=|| ()>
            {children()}
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{auth_context, profile},
        ssr::render_to_string,
    };

    fn render_for(user: Option<&'static str>) -> String {
        render_to_string(move || {
            let (ctx, _store, _nav) = auth_context("http://api.local", None);
            ctx.set_user(user.map(profile));
            provide_context(ctx);
            view! {
                <UserCanSee roles=vec![Role::GlobalAdmin]>
                    {|| view! { <div>"admin-only"</div> }}
                </UserCanSee>
            }
        })
    }

    #[test]
    fn renders_children_for_allowed_role() {
        assert!(render_for(Some("global-admin")).contains("admin-only"));
        assert!(render_for(Some("global.admin")).contains("admin-only"));
    }

    #[test]
    fn hides_children_for_other_roles_and_anonymous() {
        assert!(!render_for(Some("client")).contains("admin-only"));
        assert!(!render_for(None).contains("admin-only"));
    }

    #[test]
    fn hides_children_without_provider() {
        let html = render_to_string(|| {
            view! {
                <UserCanSee roles=vec![Role::Client]>
                    {|| view! { <div>"client-only"</div> }}
                </UserCanSee>
            }
        });
        assert!(!html.contains("client-only"));
    }
}
