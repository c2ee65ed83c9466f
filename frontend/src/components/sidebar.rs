use leptos::*;

use super::user_can_see::UserCanSee;
use crate::{
    router::{NavItem, ADMIN_NAV, GENERAL_NAV},
    utils::permissions::Role,
};

#[component]
fn NavSection(title: &'static str, items: &'static [NavItem]) -> impl IntoView {
    view! {
        <section>
            <h2>{title}</h2>
            <ul>
                {items
                    .iter()
                    .map(|item| view! { <li><a href=item.href>{item.label}</a></li> })
                    .collect_view()}
            </ul>
        </section>
    }
}

/// Console navigation. The admin section is shown to global admins only.
#[component]
pub fn SidebarNav() -> impl IntoView {
    view! {
        <nav>
            <NavSection title="General" items=GENERAL_NAV/>
            <UserCanSee roles=vec![Role::GlobalAdmin]>
                <NavSection title="Admin" items=ADMIN_NAV/>
            </UserCanSee>
        </nav>
    }
}
