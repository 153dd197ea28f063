//! Injected auth-flow hooks
//!
//! The host authentication flow implements `AuthHooks` to observe and
//! shape sign-in without this crate knowing anything about its transport.
//! All hooks have no-op defaults.

use crate::claims::JsonMap;
use crate::config::AuthProvider;

/// Collaborator interface the host authentication flow implements
pub trait AuthHooks: Send + Sync {
    /// Last-touch adjustment of the enriched claim set before signing
    fn enrich_token(&self, claims: JsonMap) -> JsonMap {
        claims
    }

    /// Called after credential validation; returning `false` vetoes the
    /// sign-in.
    fn on_sign_in(&self, _account_id: &str, _provider: AuthProvider) -> bool {
        true
    }

    /// Called when a session ends
    #[mutants::skip] // No-op default; nothing observable to mutate
    fn on_sign_out(&self, _account_id: &str) {}
}

/// Hooks that do nothing; the default collaborator
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHooks;

impl AuthHooks for NoopHooks {}
