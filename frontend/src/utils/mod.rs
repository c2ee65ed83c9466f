pub mod cookies;
pub mod navigation;
pub mod pagination;
pub mod permissions;
