#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use serde_json::json;
    use std::rc::Rc;

    use crate::{
        api::{ApiClient, UserProfile},
        state::auth::AuthContext,
        utils::{
            cookies::{MemorySessionStore, SessionStore},
            navigation::RecordingNavigator,
        },
    };

    pub fn profile_json(email: &str, first_access: bool) -> serde_json::Value {
        json!({
            "id": "u1",
            "name": "Ana Souza",
            "email": email,
            "role": "global-admin",
            "companyCnpj": null,
            "firstAccess": first_access
        })
    }

    pub fn profile(role: &str) -> UserProfile {
        UserProfile {
            id: "u1".into(),
            name: "Ana Souza".into(),
            email: "ana@acme.com".into(),
            role: role.into(),
            company_cnpj: None,
            company: None,
            first_access: false,
        }
    }

    /// Context wired to in-memory collaborators. Needs a live runtime.
    pub fn auth_context(
        base_url: &str,
        stored_token: Option<&str>,
    ) -> (AuthContext, MemorySessionStore, RecordingNavigator) {
        let store = MemorySessionStore::new();
        if let Some(token) = stored_token {
            store.store(token, 3600);
        }
        let navigator = RecordingNavigator::new();
        let ctx = AuthContext::new(
            ApiClient::new_with_base_url(base_url),
            Rc::new(store.clone()),
            Rc::new(navigator.clone()),
        );
        (ctx, store, navigator)
    }
}
