//! RBAC errors

/// Errors raised when defining custom roles
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RbacError {
    #[error("hierarchy level must be between 1 and 100, got {level} for role \"{slug}\"")]
    HierarchyLevelOutOfRange { slug: String, level: u8 },

    #[error("invalid slug format: \"{0}\", must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("permissions must be non-empty for role \"{0}\"")]
    EmptyPermissions(String),

    #[error("slug \"{0}\" collides with a built-in role")]
    ReservedSlug(String),
}
