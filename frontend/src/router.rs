use leptos::*;

use crate::{components::sidebar::SidebarNav, state::auth::AuthProvider};

pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const CHANGE_PASSWORD_PATH: &str = "/change/password";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
}

pub const GENERAL_NAV: &[NavItem] = &[
    NavItem {
        href: DASHBOARD_PATH,
        label: "Dashboard",
    },
    NavItem {
        href: "/employee",
        label: "Employees",
    },
    NavItem {
        href: "/absence",
        label: "Absences",
    },
    NavItem {
        href: "/config",
        label: "Settings",
    },
];

pub const ADMIN_NAV: &[NavItem] = &[
    NavItem {
        href: "/user",
        label: "Users",
    },
    NavItem {
        href: "/company",
        label: "Companies",
    },
];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <AuthProvider>
            <SidebarNav/>
        </AuthProvider>
    }
}
