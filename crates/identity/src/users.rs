//! User entity and input shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::validation::PHONE_REGEX;

/// User lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Suspended,
    Deleted,
}

/// A platform user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub status: UserStatus,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a user
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    #[validate(email, length(max = 255))]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(regex(path = *PHONE_REGEX))]
    pub phone: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,

    pub metadata: Option<Value>,
}

/// Input for updating a user; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(regex(path = *PHONE_REGEX))]
    pub phone: Option<String>,

    #[validate(url)]
    pub avatar_url: Option<String>,

    pub status: Option<UserStatus>,

    pub metadata: Option<Value>,
}
