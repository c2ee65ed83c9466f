use std::{
    convert::Infallible,
    sync::{Arc, Mutex, MutexGuard},
};

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use crate::{
    state::AppState,
    utils::cookies::{
        build_clear_session_cookie, extract_cookie_value, CookieOptions, SESSION_COOKIE_NAME,
    },
};

/// Per-request view handed to page loaders: the requested path, the session
/// cookie, and the `Set-Cookie` headers the response must carry.
#[derive(Debug, Clone)]
pub struct PageContext {
    path: String,
    session_token: Option<String>,
    cookie_options: CookieOptions,
    set_cookies: Arc<Mutex<Vec<String>>>,
}

impl PageContext {
    pub fn new(
        path: impl Into<String>,
        cookie_header: Option<&str>,
        cookie_options: CookieOptions,
    ) -> Self {
        let session_token = cookie_header
            .and_then(|raw| extract_cookie_value(raw, SESSION_COOKIE_NAME))
            .filter(|token| !token.is_empty());
        Self {
            path: path.into(),
            session_token,
            cookie_options,
            set_cookies: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref()
    }

    /// Queues removal of the session cookie on the outgoing response.
    pub fn destroy_session(&self) {
        self.pending().push(build_clear_session_cookie(self.cookie_options));
    }

    pub fn set_cookies(&self) -> Vec<String> {
        self.pending().clone()
    }

    fn pending(&self) -> MutexGuard<'_, Vec<String>> {
        self.set_cookies
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl FromRequestParts<AppState> for PageContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok());
        Ok(PageContext::new(
            parts.uri.path(),
            cookie_header,
            state.config.cookie_options(),
        ))
    }
}
