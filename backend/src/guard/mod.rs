//! Page access guard.
//!
//! Every page loader runs behind [`with_ssr_auth`] or [`with_ssr_guest`]. The
//! guard decides from the session cookie alone, before the loader runs,
//! whether the request proceeds or is redirected. Role checks use the claim
//! decoded locally from the token and only steer navigation; the PointControl
//! API enforces authorization on every call.

pub mod context;
pub mod permissions;

use std::future::Future;

use serde::Serialize;
use thiserror::Error;

use crate::{models::Role, upstream::ApiError, utils::token::decode_role};

pub use context::PageContext;
pub use permissions::has_permission;

pub const LOGIN_PATH: &str = "/";
pub const DEFAULT_PAGE_PATH: &str = "/dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub destination: String,
    pub permanent: bool,
}

impl Redirect {
    pub fn temporary(destination: impl Into<String>) -> Self {
        Self {
            destination: destination.into(),
            permanent: false,
        }
    }
}

/// Outcome of a page loader, serialized as `{"props": …}` or
/// `{"redirect": {"destination": …, "permanent": …}}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PageResult<P> {
    Props(P),
    Redirect(Redirect),
}

impl<P> PageResult<P> {
    pub fn props(props: P) -> Self {
        PageResult::Props(props)
    }

    pub fn redirect(destination: impl Into<String>) -> Self {
        PageResult::Redirect(Redirect::temporary(destination))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Proceed,
    RedirectToLogin,
    RedirectToDefaultPage,
}

impl AccessDecision {
    pub fn redirect(self) -> Option<Redirect> {
        match self {
            AccessDecision::Proceed => None,
            AccessDecision::RedirectToLogin => Some(Redirect::temporary(LOGIN_PATH)),
            AccessDecision::RedirectToDefaultPage => Some(Redirect::temporary(DEFAULT_PAGE_PATH)),
        }
    }
}

/// Role allow-list for a protected page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthOptions {
    pub roles: Vec<Role>,
}

impl AuthOptions {
    pub fn roles(roles: impl IntoIterator<Item = Role>) -> Self {
        Self {
            roles: roles.into_iter().collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum LoaderError {
    /// The API rejected the session token; the guard turns this into a
    /// sign-out and a redirect to the login page.
    #[error("session token is no longer accepted")]
    InvalidSession,
    #[error(transparent)]
    Api(ApiError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<ApiError> for LoaderError {
    fn from(err: ApiError) -> Self {
        if err.is_unauthorized() {
            LoaderError::InvalidSession
        } else {
            LoaderError::Api(err)
        }
    }
}

pub fn decide_access(token: Option<&str>, options: Option<&AuthOptions>) -> AccessDecision {
    let token = match token.filter(|t| !t.is_empty()) {
        Some(token) => token,
        None => return AccessDecision::RedirectToLogin,
    };
    let Some(options) = options else {
        return AccessDecision::Proceed;
    };
    match decode_role(token) {
        Ok(role) if has_permission(role, &options.roles) => AccessDecision::Proceed,
        Ok(role) => {
            tracing::debug!(%role, allowed = ?options.roles, "role outside page allow-list");
            AccessDecision::RedirectToDefaultPage
        }
        Err(err) => {
            tracing::debug!(error = %err, "session token role could not be decoded");
            AccessDecision::RedirectToDefaultPage
        }
    }
}

pub fn decide_guest_access(token: Option<&str>) -> AccessDecision {
    match token.filter(|t| !t.is_empty()) {
        Some(_) => AccessDecision::RedirectToDefaultPage,
        None => AccessDecision::Proceed,
    }
}

/// Runs `loader` only for signed-in sessions whose role satisfies `options`.
pub async fn with_ssr_auth<P, F, Fut>(
    ctx: PageContext,
    options: Option<&AuthOptions>,
    loader: F,
) -> Result<PageResult<P>, LoaderError>
where
    F: FnOnce(PageContext) -> Fut,
    Fut: Future<Output = Result<PageResult<P>, LoaderError>>,
{
    let decision = decide_access(ctx.session_token(), options);
    if let Some(redirect) = decision.redirect() {
        tracing::debug!(
            path = ctx.path(),
            ?decision,
            destination = %redirect.destination,
            "page access denied"
        );
        return Ok(PageResult::Redirect(redirect));
    }

    let session = ctx.clone();
    match loader(ctx).await {
        Err(LoaderError::InvalidSession) => {
            tracing::info!(path = session.path(), "invalid session, clearing cookie");
            session.destroy_session();
            Ok(PageResult::redirect(LOGIN_PATH))
        }
        other => other,
    }
}

/// Runs `loader` only when no session cookie is present.
pub async fn with_ssr_guest<P, F, Fut>(
    ctx: PageContext,
    loader: F,
) -> Result<PageResult<P>, LoaderError>
where
    F: FnOnce(PageContext) -> Fut,
    Fut: Future<Output = Result<PageResult<P>, LoaderError>>,
{
    let decision = decide_guest_access(ctx.session_token());
    if let Some(redirect) = decision.redirect() {
        tracing::debug!(path = ctx.path(), "guest page requested with a session");
        return Ok(PageResult::Redirect(redirect));
    }
    loader(ctx).await
}
