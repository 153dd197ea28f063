//! Role-based access control for the Atrium platform
//!
//! Built-in role hierarchy, `resource:action` permission matching, and a
//! registry for organization-defined custom roles.

mod custom;
mod error;
pub mod permissions;
mod roles;

pub use custom::{CustomRole, CustomRoleRegistry};
pub use error::RbacError;
pub use permissions::{has_all_permissions, has_any_permission, matches_permission};
pub use roles::{built_in_role, meets_minimum_role, role_by_slug, BUILT_IN_ROLE_SLUGS};
