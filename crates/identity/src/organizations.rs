//! Organization (tenant) entity and input shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::validation::validate_slug;

lazy_static::lazy_static! {
    static ref HEX_COLOR_REGEX: regex::Regex =
        regex::Regex::new(r"^#[0-9A-Fa-f]{6}$").unwrap();
}

/// Organization lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrganizationStatus {
    Active,
    Suspended,
    Archived,
}

impl std::fmt::Display for OrganizationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrganizationStatus::Active => write!(f, "active"),
            OrganizationStatus::Suspended => write!(f, "suspended"),
            OrganizationStatus::Archived => write!(f, "archived"),
        }
    }
}

/// A tenant organization
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub status: OrganizationStatus,
    pub plan_tier: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
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

/// Input for creating an organization
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 63), custom(function = check_slug))]
    pub slug: String,

    pub plan_tier: Option<String>,

    #[validate(url)]
    pub logo_url: Option<String>,

    #[validate(regex(path = *HEX_COLOR_REGEX))]
    pub primary_color: Option<String>,

    pub domain: Option<String>,

    pub metadata: Option<Value>,
}

/// Input for updating an organization
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganization {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(url)]
    pub logo_url: Option<String>,

    #[validate(regex(path = *HEX_COLOR_REGEX))]
    pub primary_color: Option<String>,

    pub domain: Option<String>,

    pub plan_tier: Option<String>,

    pub metadata: Option<Value>,
}
