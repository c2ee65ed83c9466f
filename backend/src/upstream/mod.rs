//! Server-to-server client for the PointControl API, used by page loaders.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
