//! Built-in roles and the hierarchy check
//!
//! Lower hierarchy level = higher privilege. Level 0 is reserved for the
//! built-in super admin; custom roles live in 1..=100.

use std::collections::HashMap;

use atrium_identity::RoleDefinition;

use crate::custom::CustomRoleRegistry;

/// Slugs of the built-in roles, ordered by privilege
pub const BUILT_IN_ROLE_SLUGS: [&str; 5] = ["super_admin", "admin", "manager", "user", "guest"];

fn role(slug: &str, name: &str, level: u8, permissions: &[&str]) -> RoleDefinition {
    RoleDefinition {
        slug: slug.to_string(),
        name: name.to_string(),
        hierarchy_level: level,
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

lazy_static::lazy_static! {
    static ref BUILT_IN_ROLES: HashMap<&'static str, RoleDefinition> = {
        let mut roles = HashMap::new();
        roles.insert("super_admin", role("super_admin", "Super Admin", 0, &["*"]));
        roles.insert(
            "admin",
            role(
                "admin",
                "Admin",
                10,
                &[
                    "users:*",
                    "roles:*",
                    "teams:*",
                    "departments:*",
                    "invitations:*",
                    "settings:*",
                    "audit:read",
                ],
            ),
        );
        roles.insert(
            "manager",
            role(
                "manager",
                "Manager",
                20,
                &[
                    "users:read",
                    "teams:*",
                    "departments:read",
                    "invitations:create",
                    "invitations:read",
                ],
            ),
        );
        roles.insert(
            "user",
            role(
                "user",
                "User",
                30,
                &["users:read:self", "teams:read", "departments:read"],
            ),
        );
        roles.insert("guest", role("guest", "Guest", 40, &["users:read:self"]));
        roles
    };
}

/// Look up a built-in role definition by slug
pub fn built_in_role(slug: &str) -> Option<&'static RoleDefinition> {
    BUILT_IN_ROLES.get(slug)
}

/// True if the user's hierarchy level meets or exceeds the required level.
/// Lower number = more privileged.
pub fn meets_minimum_role(user_level: u8, required_level: u8) -> bool {
    user_level <= required_level
}

/// Look up a role by slug: built-ins first, then the custom registry
pub fn role_by_slug<'a>(slug: &str, registry: &'a CustomRoleRegistry) -> Option<&'a RoleDefinition> {
    built_in_role(slug).or_else(|| registry.get(slug))
}
