use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/v1";

static API_BASE_URL: OnceLock<String> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
fn get_from_env_js() -> Option<String> {
    // Optional global object: window.__POINTCONTROL_ENV = { API_BASE_URL: "..." }
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &"__POINTCONTROL_ENV".into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    let val = js_sys::Reflect::get(&obj, &"API_BASE_URL".into())
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
        .or_else(|| js_sys::Reflect::get(&obj, &"api_base_url".into()).ok());
    val.and_then(|v| v.as_string())
}

#[cfg(not(target_arch = "wasm32"))]
fn get_from_env_js() -> Option<String> {
    std::env::var("API_BASE_URL").ok()
}

fn normalize(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Base URL of the PointControl API, resolved once per page load.
pub fn api_base_url() -> String {
    API_BASE_URL
        .get_or_init(|| {
            get_from_env_js()
                .as_deref()
                .and_then(normalize)
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
        })
        .clone()
}
