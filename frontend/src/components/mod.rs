pub mod sidebar;
pub mod user_can_see;
