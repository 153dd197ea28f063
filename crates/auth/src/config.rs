//! Authentication configuration resolution
//!
//! Apps supply a partial `AuthConfig`; `resolve` applies platform defaults
//! and validates the lockout policy up front so misconfiguration fails at
//! startup, not at the first login.

use serde::{Deserialize, Serialize};

use crate::error::AuthError;
use crate::lockout::LockoutPolicy;

/// Session lifetime: 8 hours, in seconds.
///
/// Shared by the config resolver and claim enrichment; the two must never
/// disagree on token lifetime.
pub const SESSION_MAX_AGE_SECS: u64 = 28_800;

/// Supported identity providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthProvider {
    Credentials,
    AzureEntra,
    Google,
    GenericOidc,
}

/// Azure Entra ID (OIDC) settings
#[derive(Debug, Clone)]
pub struct AzureEntraConfig {
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
}

/// Google OAuth settings
#[derive(Debug, Clone)]
pub struct GoogleOauthConfig {
    pub client_id: String,
    pub client_secret: String,
}

/// Session persistence strategy. Only stateless JWT sessions exist today;
/// the enum keeps the wire shape explicit for the apps reading it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStrategy {
    Jwt,
}

/// Caller-supplied auth configuration; unset fields fall back to defaults
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub providers: Vec<AuthProvider>,
    pub azure: Option<AzureEntraConfig>,
    pub google: Option<GoogleOauthConfig>,
    pub session_max_age: Option<u64>,
    pub lockout: Option<LockoutPolicy>,
    pub public_routes: Option<Vec<String>>,
}

impl AuthConfig {
    /// Resolve against platform defaults.
    ///
    /// Fails if the supplied lockout policy has a zero field.
    pub fn resolve(self) -> Result<ResolvedAuthConfig, AuthError> {
        let lockout = self.lockout.unwrap_or_default();
        if lockout.max_attempts == 0 {
            return Err(AuthError::InvalidLockoutPolicy("max_attempts"));
        }
        if lockout.lock_duration_minutes == 0 {
            return Err(AuthError::InvalidLockoutPolicy("lock_duration_minutes"));
        }

        Ok(ResolvedAuthConfig {
            providers: self.providers,
            azure: self.azure,
            google: self.google,
            session_max_age: self.session_max_age.unwrap_or(SESSION_MAX_AGE_SECS),
            session_strategy: SessionStrategy::Jwt,
            lockout,
            public_routes: self.public_routes.unwrap_or_default(),
        })
    }
}

/// Fully resolved auth configuration
#[derive(Debug, Clone)]
pub struct ResolvedAuthConfig {
    pub providers: Vec<AuthProvider>,
    pub azure: Option<AzureEntraConfig>,
    pub google: Option<GoogleOauthConfig>,
    pub session_max_age: u64,
    pub session_strategy: SessionStrategy,
    pub lockout: LockoutPolicy,
    pub public_routes: Vec<String>,
}
