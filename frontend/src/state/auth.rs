//! Session state shared by every page of the console.
//!
//! [`AuthContext`] owns the signed-in profile and the operations that change
//! it. Each operation takes a ticket when it starts and may only apply its
//! result while no later-issued operation has applied one. Failed calls apply
//! nothing, so they never cancel an older call still in flight.

use leptos::*;
use std::{cell::Cell, future::Future, rc::Rc};
use thiserror::Error;

use crate::{
    api::{
        ApiClient, ApiError, ResetPasswordInfo, SessionResponse, SignInData, UserMessage,
        UserProfile, ValidateIdentityInfo,
    },
    router::{CHANGE_PASSWORD_PATH, DASHBOARD_PATH, LOGIN_PATH},
    utils::{
        cookies::SessionStore,
        navigation::{BrowserNavigator, Navigator},
        permissions::Role,
    },
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthStatus {
    /// Nothing checked yet.
    #[default]
    Unresolved,
    /// A stored token is being exchanged for the profile.
    Resolving,
    Authenticated,
    Anonymous,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub status: AuthStatus,
    pub user: Option<UserProfile>,
}

impl AuthState {
    fn authenticated(user: UserProfile) -> Self {
        Self {
            status: AuthStatus::Authenticated,
            user: Some(user),
        }
    }

    fn anonymous() -> Self {
        Self {
            status: AuthStatus::Anonymous,
            user: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status == AuthStatus::Authenticated && self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(UserProfile::role)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuthError {
    #[error("{}", .message.text)]
    Api {
        message: UserMessage,
        #[source]
        source: ApiError,
    },
    #[error("a newer authentication request replaced this one")]
    Superseded,
}

impl From<ApiError> for AuthError {
    fn from(source: ApiError) -> Self {
        AuthError::Api {
            message: source.user_message(),
            source,
        }
    }
}

impl AuthError {
    /// Text and form field to show; `None` when nothing should be shown.
    pub fn user_message(&self) -> Option<&UserMessage> {
        match self {
            AuthError::Api { message, .. } => Some(message),
            AuthError::Superseded => None,
        }
    }
}

#[derive(Clone)]
pub struct AuthContext {
    state: RwSignal<AuthState>,
    api: ApiClient,
    session: Rc<dyn SessionStore>,
    navigator: Rc<dyn Navigator>,
    issued: Rc<Cell<u64>>,
    applied: Rc<Cell<u64>>,
}

impl AuthContext {
    /// Must be called inside a Leptos runtime.
    pub fn new(api: ApiClient, session: Rc<dyn SessionStore>, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            state: create_rw_signal(AuthState::default()),
            api,
            session,
            navigator,
            issued: Rc::new(Cell::new(0)),
            applied: Rc::new(Cell::new(0)),
        }
    }

    pub fn state(&self) -> ReadSignal<AuthState> {
        self.state.read_only()
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.get_untracked()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    #[cfg(test)]
    pub(crate) fn set_user(&self, user: Option<UserProfile>) {
        self.state.set(match user {
            Some(user) => AuthState::authenticated(user),
            None => AuthState::anonymous(),
        });
    }

    fn begin(&self) -> u64 {
        let ticket = self.issued.get() + 1;
        self.issued.set(ticket);
        ticket
    }

    /// Claims the right to change state. False when a later call already did.
    fn commit(&self, ticket: u64) -> bool {
        if ticket <= self.applied.get() {
            return false;
        }
        self.applied.set(ticket);
        true
    }

    fn establish(&self, session: SessionResponse) {
        self.session.store(&session.token, session.token_expires);
        self.api.set_token(Some(session.token));
        self.state.set(AuthState::authenticated(session.user));
    }

    fn forget(&self) {
        self.session.clear();
        self.api.set_token(None);
        self.state.set(AuthState::anonymous());
    }

    /// Restores the profile for a stored token. A token the API no longer
    /// accepts is removed.
    pub fn rehydrate(&self) -> impl Future<Output = ()> + 'static {
        let ticket = self.begin();
        let ctx = self.clone();
        let token = self.session.token();
        if let Some(token) = &token {
            self.api.set_token(Some(token.clone()));
            self.state.set(AuthState {
                status: AuthStatus::Resolving,
                user: None,
            });
        } else {
            self.state.set(AuthState::anonymous());
        }
        async move {
            if token.is_none() {
                return;
            }
            let result = ctx.api.recover_session().await;
            if !ctx.commit(ticket) {
                log::debug!("discarding stale session recovery");
                return;
            }
            match result {
                Ok(user) => ctx.state.set(AuthState::authenticated(user)),
                Err(err) => {
                    if err.is_unauthorized() {
                        log::info!("stored session rejected: {}", err);
                    } else {
                        log::warn!("session recovery failed: {}", err);
                    }
                    ctx.forget();
                }
            }
        }
    }

    /// On success stores the session and opens the password change page on
    /// first access, the dashboard otherwise. Failures leave state untouched.
    pub fn sign_in(&self, credentials: SignInData) -> impl Future<Output = Result<(), AuthError>> + 'static {
        let ticket = self.begin();
        let ctx = self.clone();
        async move {
            let session = ctx.api.login(&credentials).await?;
            if !ctx.commit(ticket) {
                log::debug!("discarding stale sign-in for {}", credentials.email);
                return Err(AuthError::Superseded);
            }
            let first_access = session.user.first_access;
            ctx.establish(session);
            ctx.navigator.navigate(if first_access {
                CHANGE_PASSWORD_PATH
            } else {
                DASHBOARD_PATH
            });
            Ok(())
        }
    }

    pub fn sign_out(&self) {
        let ticket = self.begin();
        self.commit(ticket);
        self.forget();
        self.navigator.navigate(LOGIN_PATH);
    }

    pub fn change_password(
        &self,
        new_password: String,
    ) -> impl Future<Output = Result<(), AuthError>> + 'static {
        let ticket = self.begin();
        let ctx = self.clone();
        async move {
            let user = ctx.api.change_password(&new_password).await?;
            if !ctx.commit(ticket) {
                return Err(AuthError::Superseded);
            }
            ctx.state.set(AuthState::authenticated(user));
            ctx.navigator.navigate(DASHBOARD_PATH);
            Ok(())
        }
    }

    /// Requests a recovery code by e-mail. State is not touched.
    pub async fn reset_password(&self, info: ResetPasswordInfo) -> Result<(), AuthError> {
        self.api.reset_password(&info).await?;
        Ok(())
    }

    /// Exchanges a recovery token and e-mailed code for a session.
    pub fn validate_identity(
        &self,
        info: ValidateIdentityInfo,
    ) -> impl Future<Output = Result<(), AuthError>> + 'static {
        let ticket = self.begin();
        let ctx = self.clone();
        async move {
            let session = ctx.api.validate_identity(&info).await?;
            if !ctx.commit(ticket) {
                return Err(AuthError::Superseded);
            }
            ctx.establish(session);
            ctx.navigator.navigate(CHANGE_PASSWORD_PATH);
            Ok(())
        }
    }

    /// Whether a recovery link can still be redeemed.
    pub async fn check_recovery_token(&self, token: &str) -> bool {
        match self.api.validate_token(token).await {
            Ok(()) => true,
            Err(err) => {
                log::info!("recovery token rejected: {}", err);
                false
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_session_store() -> Rc<dyn SessionStore> {
    Rc::new(crate::utils::cookies::DocumentCookieStore)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_session_store() -> Rc<dyn SessionStore> {
    Rc::new(crate::utils::cookies::MemorySessionStore::new())
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let ctx = AuthContext::new(api, browser_session_store(), Rc::new(BrowserNavigator));
    provide_context(ctx.clone());
    spawn_local(ctx.rehydrate());
    view! { <>{children()}</> }
}

pub fn use_auth() -> Option<AuthContext> {
    use_context::<AuthContext>()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::FormField,
        test_support::helpers::{auth_context, profile_json},
        utils::cookies::SessionStore as _,
    };
    use httpmock::prelude::*;
    use serde_json::json;
    use std::time::Duration;

    fn session_json(first_access: bool, token: &str) -> serde_json::Value {
        json!({
            "user": profile_json("ana@acme.com", first_access),
            "token": token,
            "tokenExpires": 7200
        })
    }

    fn credentials(email: &str) -> SignInData {
        SignInData {
            email: email.into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn sign_in_on_first_access_opens_password_change() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/login/admin");
                then.status(200).json_body(session_json(true, "tok-1"));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), None);
        ctx.sign_in(credentials("ana@acme.com")).await.unwrap();

        assert_eq!(nav.visited(), vec!["/change/password".to_string()]);
        assert_eq!(store.token().as_deref(), Some("tok-1"));
        assert_eq!(store.max_age(), Some(7200));
        assert_eq!(ctx.api().token().as_deref(), Some("tok-1"));
        let state = ctx.snapshot();
        assert!(state.is_authenticated());
        assert_eq!(state.role(), Some(Role::GlobalAdmin));
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_in_after_first_access_opens_dashboard() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/login/admin");
                then.status(200).json_body(session_json(false, "tok-2"));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, _store, nav) = auth_context(&server.base_url(), None);
        ctx.sign_in(credentials("ana@acme.com")).await.unwrap();

        assert_eq!(nav.last().as_deref(), Some("/dashboard"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_in_failure_maps_message_and_keeps_state() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/login/admin");
                then.status(401).json_body(json!({ "message": "Invalid password" }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), None);
        let err = ctx.sign_in(credentials("ana@acme.com")).await.unwrap_err();

        let message = err.user_message().expect("message");
        assert_eq!(message.field, Some(FormField::Password));
        assert_eq!(err.to_string(), "Invalid password.");
        assert_eq!(ctx.snapshot(), AuthState::default());
        assert!(nav.visited().is_empty());
        assert_eq!(store.token(), None);
        runtime.dispose();
    }

    #[tokio::test]
    async fn rehydrate_restores_profile_for_stored_token() {
        let server = MockServer::start_async().await;
        let recover = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/user/recover")
                    .header("authorization", "Bearer stored");
                then.status(200)
                    .json_body(json!({ "user": profile_json("ana@acme.com", false) }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, _store, nav) = auth_context(&server.base_url(), Some("stored"));
        let pending = ctx.rehydrate();
        assert_eq!(ctx.snapshot().status, AuthStatus::Resolving);
        pending.await;

        recover.assert_async().await;
        assert!(ctx.snapshot().is_authenticated());
        assert!(nav.visited().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn rehydrate_failure_clears_stale_token() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/recover");
                then.status(401).json_body(json!({ "message": "Invalid token" }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, _nav) = auth_context(&server.base_url(), Some("expired"));
        ctx.rehydrate().await;

        assert_eq!(ctx.snapshot().status, AuthStatus::Anonymous);
        assert_eq!(store.token(), None);
        assert_eq!(ctx.api().token(), None);
        runtime.dispose();
    }

    #[tokio::test]
    async fn rehydrate_without_token_skips_the_api() {
        let server = MockServer::start_async().await;
        let recover = server
            .mock_async(|when, then| {
                when.method(GET).path("/user/recover");
                then.status(200);
            })
            .await;

        let runtime = create_runtime();
        let (ctx, _store, _nav) = auth_context(&server.base_url(), None);
        ctx.rehydrate().await;

        assert_eq!(ctx.snapshot().status, AuthStatus::Anonymous);
        assert_eq!(recover.hits_async().await, 0);
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_out_clears_session_and_returns_to_login() {
        let server = MockServer::start_async().await;
        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), Some("tok"));
        ctx.api().set_token(store.token());

        ctx.sign_out();

        assert_eq!(store.token(), None);
        assert_eq!(ctx.api().token(), None);
        assert_eq!(ctx.snapshot().status, AuthStatus::Anonymous);
        assert_eq!(nav.last().as_deref(), Some("/"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_out_discards_in_flight_rehydration() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/recover");
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .json_body(json!({ "user": profile_json("ana@acme.com", false) }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), Some("tok"));
        let pending = ctx.rehydrate();
        ctx.sign_out();
        pending.await;

        assert_eq!(ctx.snapshot(), AuthState::anonymous());
        assert_eq!(store.token(), None);
        assert_eq!(nav.visited(), vec!["/".to_string()]);
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_sign_in_does_not_cancel_rehydration() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/recover");
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .json_body(json!({ "user": profile_json("ana@acme.com", false) }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/login/admin");
                then.status(401).json_body(json!({ "message": "Invalid password" }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), Some("stored"));
        let pending = ctx.rehydrate();
        let attempt = ctx.sign_in(credentials("ana@acme.com"));
        let ((), attempt) = futures::join!(pending, attempt);

        assert!(matches!(attempt, Err(AuthError::Api { .. })));
        let state = ctx.snapshot();
        assert_eq!(state.status, AuthStatus::Authenticated);
        assert_eq!(state.user.expect("user").email, "ana@acme.com");
        assert_eq!(store.token().as_deref(), Some("stored"));
        assert_eq!(ctx.api().token().as_deref(), Some("stored"));
        assert!(nav.visited().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn sign_in_issued_later_overrides_earlier_one_that_lands_last() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/login/admin")
                    .json_body(json!({ "email": "first@acme.com", "password": "secret" }));
                then.status(200).json_body(json!({
                    "user": profile_json("first@acme.com", false),
                    "token": "first",
                    "tokenExpires": 60
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/login/admin")
                    .json_body(json!({ "email": "second@acme.com", "password": "secret" }));
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .json_body(json!({
                        "user": profile_json("second@acme.com", false),
                        "token": "second",
                        "tokenExpires": 60
                    }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, _nav) = auth_context(&server.base_url(), None);
        let first = ctx.sign_in(credentials("first@acme.com"));
        let second = ctx.sign_in(credentials("second@acme.com"));
        let (first, second) = futures::join!(first, second);

        assert_eq!(first, Ok(()));
        assert_eq!(second, Ok(()));
        assert_eq!(store.token().as_deref(), Some("second"));
        assert_eq!(ctx.snapshot().user.expect("user").email, "second@acme.com");
        runtime.dispose();
    }

    #[tokio::test]
    async fn latest_sign_in_wins() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/login/admin")
                    .json_body(json!({ "email": "slow@acme.com", "password": "secret" }));
                then.status(200)
                    .delay(Duration::from_millis(200))
                    .json_body(json!({
                        "user": profile_json("slow@acme.com", true),
                        "token": "slow",
                        "tokenExpires": 60
                    }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/login/admin")
                    .json_body(json!({ "email": "fast@acme.com", "password": "secret" }));
                then.status(200).json_body(json!({
                    "user": profile_json("fast@acme.com", false),
                    "token": "fast",
                    "tokenExpires": 60
                }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), None);
        let slow = ctx.sign_in(credentials("slow@acme.com"));
        let fast = ctx.sign_in(credentials("fast@acme.com"));
        let (slow, fast) = futures::join!(slow, fast);

        assert_eq!(slow, Err(AuthError::Superseded));
        assert_eq!(fast, Ok(()));
        assert_eq!(store.token().as_deref(), Some("fast"));
        assert_eq!(nav.visited(), vec!["/dashboard".to_string()]);
        let user = ctx.snapshot().user.expect("user");
        assert_eq!(user.email, "fast@acme.com");
        runtime.dispose();
    }

    #[tokio::test]
    async fn change_password_replaces_profile_and_opens_dashboard() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method("PATCH")
                    .path("/user/change/password/admin")
                    .json_body(json!({ "newPassword": "n3w-pass" }));
                then.status(200).json_body(profile_json("ana@acme.com", false));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, _store, nav) = auth_context(&server.base_url(), Some("tok"));
        ctx.change_password("n3w-pass".into()).await.unwrap();

        let state = ctx.snapshot();
        assert!(state.is_authenticated());
        assert!(!state.user.expect("user").first_access);
        assert_eq!(nav.last().as_deref(), Some("/dashboard"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn validate_identity_stores_session_and_opens_password_change() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/user/validate/identity")
                    .json_body(json!({ "token": "link-token", "code": "123456" }));
                then.status(200).json_body(session_json(true, "recovered"));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), None);
        ctx.validate_identity(ValidateIdentityInfo {
            token: "link-token".into(),
            code: "123456".into(),
        })
        .await
        .unwrap();

        assert_eq!(store.token().as_deref(), Some("recovered"));
        assert_eq!(nav.last().as_deref(), Some("/change/password"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn invalid_recovery_code_is_reported_on_code_field() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/user/validate/identity");
                then.status(400).json_body(json!({ "message": "Invalid code" }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, store, nav) = auth_context(&server.base_url(), None);
        let err = ctx
            .validate_identity(ValidateIdentityInfo {
                token: "link-token".into(),
                code: "000000".into(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.user_message().and_then(|m| m.field), Some(FormField::Code));
        assert_eq!(store.token(), None);
        assert!(nav.visited().is_empty());
        runtime.dispose();
    }

    #[tokio::test]
    async fn reset_password_and_recovery_token_check() {
        let server = MockServer::start_async().await;
        let reset = server
            .mock_async(|when, then| {
                when.method(POST).path("/user/reset/password/admin");
                then.status(204);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/validate/token/good");
                then.status(200);
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/user/validate/token/bad");
                then.status(400).json_body(json!({ "message": "Token expired" }));
            })
            .await;

        let runtime = create_runtime();
        let (ctx, _store, nav) = auth_context(&server.base_url(), None);
        ctx.reset_password(ResetPasswordInfo {
            name: "Ana".into(),
            email: "ana@acme.com".into(),
        })
        .await
        .unwrap();
        assert!(ctx.check_recovery_token("good").await);
        assert!(!ctx.check_recovery_token("bad").await);

        reset.assert_async().await;
        assert_eq!(ctx.snapshot(), AuthState::default());
        assert!(nav.visited().is_empty());
        runtime.dispose();
    }
}
