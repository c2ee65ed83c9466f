use crate::models::Role;

/// `true` iff `role` is one of `allowed`. An empty allow-list admits nobody;
/// pages without role restrictions never reach this check.
pub fn has_permission(role: Role, allowed: &[Role]) -> bool {
    allowed.contains(&role)
}
