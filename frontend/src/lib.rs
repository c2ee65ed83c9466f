pub mod api;
pub mod components;
pub mod config;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
    log::info!(
        "Starting PointControl admin console (api: {})",
        config::api_base_url()
    );
    router::mount_app();
}
