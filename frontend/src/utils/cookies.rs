//! Browser-side session token persistence.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::{cell::RefCell, rc::Rc};

pub const SESSION_COOKIE_NAME: &str = "@PointControlAdmin.token";

const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

/// Where the session token lives between page loads.
pub trait SessionStore {
    fn token(&self) -> Option<String>;
    /// Persists `token` for `max_age_secs` seconds.
    fn store(&self, token: &str, max_age_secs: i64);
    fn clear(&self);
}

pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!(
        "{}={}; Max-Age={}; Path=/",
        SESSION_COOKIE_NAME,
        utf8_percent_encode(token, COOKIE_VALUE),
        max_age_secs.max(0)
    )
}

pub fn clear_session_cookie() -> String {
    format!("{}=; Max-Age=0; Path=/", SESSION_COOKIE_NAME)
}

/// Reads `name` out of a `document.cookie` style string.
pub fn read_cookie(cookies: &str, name: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        if key.trim() != name {
            return None;
        }
        let value = percent_decode_str(value.trim()).decode_utf8_lossy().into_owned();
        if value.is_empty() {
            None
        } else {
            Some(value)
        }
    })
}

/// In-memory store for host builds and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<RefCell<Option<(String, i64)>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.store(token, 3600);
        store
    }

    pub fn max_age(&self) -> Option<i64> {
        self.inner.borrow().as_ref().map(|(_, max_age)| *max_age)
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.borrow().as_ref().map(|(token, _)| token.clone())
    }

    fn store(&self, token: &str, max_age_secs: i64) {
        *self.inner.borrow_mut() = Some((token.to_string(), max_age_secs));
    }

    fn clear(&self) {
        self.inner.borrow_mut().take();
    }
}

/// Store backed by `document.cookie`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentCookieStore;

#[cfg(target_arch = "wasm32")]
impl DocumentCookieStore {
    fn document() -> Option<web_sys::HtmlDocument> {
        use wasm_bindgen::JsCast;
        web_sys::window()?
            .document()?
            .dyn_into::<web_sys::HtmlDocument>()
            .ok()
    }

    fn write(cookie: &str) {
        match Self::document() {
            Some(document) => {
                if document.set_cookie(cookie).is_err() {
                    log::warn!("failed to write session cookie");
                }
            }
            None => log::warn!("no document to write session cookie to"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl SessionStore for DocumentCookieStore {
    fn token(&self) -> Option<String> {
        let cookies = Self::document()?.cookie().ok()?;
        read_cookie(&cookies, SESSION_COOKIE_NAME)
    }

    fn store(&self, token: &str, max_age_secs: i64) {
        Self::write(&session_cookie(token, max_age_secs));
    }

    fn clear(&self) {
        Self::write(&clear_session_cookie());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_cookie_carries_max_age_and_path() {
        assert_eq!(
            session_cookie("abc.def", 86400),
            "@PointControlAdmin.token=abc.def; Max-Age=86400; Path=/"
        );
        assert_eq!(
            clear_session_cookie(),
            "@PointControlAdmin.token=; Max-Age=0; Path=/"
        );
    }

    #[test]
    fn read_cookie_skips_other_and_empty_entries() {
        let jar = "theme=dark; @PointControlAdmin.token=a%20b; other=1";
        assert_eq!(read_cookie(jar, SESSION_COOKIE_NAME).as_deref(), Some("a b"));
        assert_eq!(read_cookie("@PointControlAdmin.token=", SESSION_COOKIE_NAME), None);
        assert_eq!(read_cookie("theme=dark", SESSION_COOKIE_NAME), None);
    }

    #[test]
    fn memory_store_round_trips_and_clears() {
        let store = MemorySessionStore::new();
        assert_eq!(store.token(), None);
        store.store("tok", 60);
        assert_eq!(store.token().as_deref(), Some("tok"));
        assert_eq!(store.max_age(), Some(60));
        store.clear();
        assert_eq!(store.token(), None);
    }
}
