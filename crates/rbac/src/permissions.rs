//! Permission string matching
//!
//! Permissions use the `resource:action` form, optionally scoped with a
//! third segment (`users:read:self`). Matching rules:
//! - Exact: `users:read` matches `users:read`
//! - Action wildcard: `users:*` matches any action on `users`
//! - Global wildcard: `*` matches anything
//! - Scope extension: holding `users:read` grants `users:read:self`
//! - No cross-resource wildcard: `*:read` does NOT match `users:read`

/// Typed permission constants. Use these instead of raw strings to avoid
/// typos in application code.
pub mod well_known {
    pub const USERS_READ: &str = "users:read";
    pub const USERS_WRITE: &str = "users:write";
    pub const USERS_DELETE: &str = "users:delete";
    pub const USERS_ALL: &str = "users:*";

    pub const TEAMS_READ: &str = "teams:read";
    pub const TEAMS_WRITE: &str = "teams:write";
    pub const TEAMS_MANAGE: &str = "teams:manage";
    pub const TEAMS_ALL: &str = "teams:*";

    pub const ROLES_READ: &str = "roles:read";
    pub const ROLES_WRITE: &str = "roles:write";
    pub const ROLES_ASSIGN: &str = "roles:assign";
    pub const ROLES_ALL: &str = "roles:*";

    pub const INVOICES_READ: &str = "invoices:read";
    pub const INVOICES_WRITE: &str = "invoices:write";
    pub const INVOICES_ALL: &str = "invoices:*";

    pub const REPORTS_READ: &str = "reports:read";
    pub const REPORTS_EXPORT: &str = "reports:export";
    pub const REPORTS_ALL: &str = "reports:*";

    pub const SETTINGS_READ: &str = "settings:read";
    pub const SETTINGS_WRITE: &str = "settings:write";
    pub const SETTINGS_ALL: &str = "settings:*";

    pub const AUDIT_READ: &str = "audit:read";
    pub const AUDIT_EXPORT: &str = "audit:export";
    pub const AUDIT_ALL: &str = "audit:*";

    pub const GLOBAL: &str = "*";
}

/// Match a single held permission against a required one
pub fn matches_permission(held: &str, required: &str) -> bool {
    if held.is_empty() || required.is_empty() {
        return false;
    }

    // Global wildcard matches everything
    if held == "*" {
        return true;
    }

    let mut held_parts = held.splitn(3, ':');
    let mut required_parts = required.splitn(3, ':');

    let (Some(held_resource), Some(held_action)) = (held_parts.next(), held_parts.next()) else {
        return false;
    };
    let (Some(required_resource), Some(required_action)) =
        (required_parts.next(), required_parts.next())
    else {
        return false;
    };

    // Resources must match exactly
    if held_resource != required_resource {
        return false;
    }

    // Action wildcard matches any action, including scoped ones
    if held_action == "*" {
        return true;
    }

    // Exact action match; a held `users:read` also covers `users:read:self`
    held_action == required_action
}

/// True if the user holds ANY of the required permissions.
/// An empty requirement list grants nothing.
pub fn has_any_permission(held: &[String], required: &[&str]) -> bool {
    if required.is_empty() {
        return false;
    }

    required
        .iter()
        .any(|req| held.iter().any(|h| matches_permission(h, req)))
}

/// True if the user holds ALL of the required permissions.
/// An empty requirement list is vacuously satisfied.
pub fn has_all_permissions(held: &[String], required: &[&str]) -> bool {
    required
        .iter()
        .all(|req| held.iter().any(|h| matches_permission(h, req)))
}
