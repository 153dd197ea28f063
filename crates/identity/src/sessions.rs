//! Session and token claim shapes
//!
//! `TokenClaims` is the wire contract for the enriched session token the
//! product apps consume. Field names are fixed; changing them breaks every
//! deployed client.

use serde::{Deserialize, Serialize};

use crate::organizations::OrganizationStatus;

/// The authenticated user as seen by application code
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub tenant_id: String,
    pub role_slugs: Vec<String>,
    pub active_role: String,
    pub permissions: Vec<String>,
    pub tenant_status: OrganizationStatus,
}

/// Decoded claims of an enriched session token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    pub roles: Vec<String>,
    #[serde(rename = "activeRole")]
    pub active_role: String,
    pub permissions: Vec<String>,
    #[serde(rename = "planTier")]
    pub plan_tier: String,
    #[serde(rename = "tenantStatus")]
    pub tenant_status: String,
    #[serde(rename = "authProvider")]
    pub auth_provider: String,
    /// Issued at (unix seconds)
    pub iat: u64,
    /// Expires at (unix seconds)
    pub exp: u64,
}
