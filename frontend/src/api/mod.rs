mod absences;
mod auth;
pub mod client;
mod companies;
mod employees;
pub mod errors;
mod points;
pub mod types;
mod users;

pub use client::*;
pub use errors::*;
pub use types::*;
