pub mod config;
pub mod error;
pub mod guard;
pub mod models;
pub mod pages;
pub mod state;
pub mod upstream;
pub mod utils;

use axum::{http::Method, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Page routes with the shared trace and CORS layers.
pub fn app(state: AppState) -> Router {
    pages::router(state).layer(
        ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::OPTIONS])
                .allow_headers(Any)
                .max_age(std::time::Duration::from_secs(24 * 60 * 60)),
        ),
    )
}
