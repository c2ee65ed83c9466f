use crate::{config::Config, upstream::ApiClient};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Unauthenticated client; loaders derive a per-session copy with
    /// [`ApiClient::for_context`].
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(config.api_base_url.clone());
        Self { config, api }
    }
}
