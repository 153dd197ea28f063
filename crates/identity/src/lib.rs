//! Identity data shapes for the Atrium platform
//!
//! The canonical definitions of users, organizations, roles, and session
//! claims shared by every Atrium product, with `validator`-backed input
//! validation replacing per-app ad hoc checks.

mod organizations;
mod roles;
mod sessions;
mod users;
pub mod validation;

pub use organizations::{CreateOrganization, Organization, OrganizationStatus, UpdateOrganization};
pub use roles::{CreateRole, Role, RoleDefinition};
pub use sessions::{SessionUser, TokenClaims};
pub use users::{CreateUser, UpdateUser, User, UserStatus};
