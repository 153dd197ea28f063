//! Role entity and input shapes
//!
//! Hierarchy levels run from 0 (most privileged, reserved for the built-in
//! super admin) to 100. Custom roles must use 1..=100.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::validation::validate_slug;

/// The resolved definition of a role: what the authorization layer needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleDefinition {
    pub slug: String,
    pub name: String,
    pub hierarchy_level: u8,
    pub permissions: Vec<String>,
}

/// A stored role, built-in or organization-defined
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub hierarchy_level: u8,
    pub is_built_in: bool,
    pub is_active: bool,
    pub organization_id: Option<Uuid>,
    pub permissions: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn check_slug(slug: &str) -> Result<(), ValidationError> {
    if validate_slug(slug) {
        Ok(())
    } else {
        Err(ValidationError::new("slug"))
    }
}

/// Input for creating an organization-defined role
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRole {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(min = 1, max = 100), custom(function = check_slug))]
    pub slug: String,

    #[validate(length(max = 500))]
    pub description: Option<String>,

    #[validate(range(min = 1, max = 100))]
    pub hierarchy_level: u8,

    #[validate(length(min = 1))]
    pub permissions: Vec<String>,

    pub organization_id: Option<Uuid>,
}
