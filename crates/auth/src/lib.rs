//! Authentication foundation for the Atrium platform
//!
//! The pieces a host authentication flow (NextAuth-style credentials or
//! OIDC) composes around its own transport:
//! - Account lockout with time-windowed failure counting
//! - Session claim enrichment with deterministic expiry
//! - Auth configuration resolution and injected flow hooks
//!
//! The crate owns no transport: it never signs, serializes, or transmits
//! tokens, and lockout state lives behind the `LockoutStore` capability.

mod claims;
mod config;
mod error;
mod hooks;
mod lockout;
mod store;

pub use claims::{enrich_claims, enrich_claims_with_max_age, AuthorizationContext, JsonMap};
pub use config::{
    AuthConfig, AuthProvider, AzureEntraConfig, GoogleOauthConfig, ResolvedAuthConfig,
    SessionStrategy, SESSION_MAX_AGE_SECS,
};
pub use error::AuthError;
pub use hooks::{AuthHooks, NoopHooks};
pub use lockout::{FailedLogin, LockoutCheck, LockoutManager, LockoutPolicy};
pub use store::{InMemoryLockoutStore, LockoutEntry, LockoutStore};
