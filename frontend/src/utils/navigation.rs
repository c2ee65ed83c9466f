use std::{cell::RefCell, rc::Rc};

pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// Full page navigation, so the target page's loader runs its guard.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    #[cfg(target_arch = "wasm32")]
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to navigate to {}", path);
            return;
        };
        if window.location().set_href(path).is_err() {
            log::warn!("navigation to {} failed", path);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn navigate(&self, path: &str) {
        log::debug!("navigate to {}", path);
    }
}

/// Remembers every navigation instead of performing it.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visited: Rc<RefCell<Vec<String>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visited.borrow_mut().push(path.to_string());
    }
}
