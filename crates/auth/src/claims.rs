//! Session claim enrichment
//!
//! After a successful sign-in the host flow hands the base token claims
//! and the resolved authorization context to `enrich_claims`, which
//! produces the final claim set the token-signing step consumes. The
//! enrichment is the single source of truth for `exp`: any caller-supplied
//! expiry is overwritten.

use chrono::Utc;
use serde_json::{json, Value};

use crate::config::SESSION_MAX_AGE_SECS;

/// Claim mapping as handed to and returned from enrichment
pub type JsonMap = serde_json::Map<String, Value>;

/// The authorization facts enrichment flattens into the token
#[derive(Debug, Clone)]
pub struct AuthorizationContext {
    pub tenant_id: String,
    pub role_slugs: Vec<String>,
    pub active_role: String,
    pub permissions: Vec<String>,
    pub tenant_status: String,
    pub plan_tier: String,
    pub auth_provider: String,
}

/// Enrich base claims with the platform session max age
pub fn enrich_claims(base: &JsonMap, context: &AuthorizationContext) -> JsonMap {
    enrich_claims_with_max_age(base, context, SESSION_MAX_AGE_SECS)
}

/// Enrich base claims, expiring `max_age_secs` after issuance.
///
/// `base` is never mutated. Derived claim keys overwrite any same-named
/// base claim; `iat` is the exception, preserved when already present and
/// numeric, otherwise stamped with the call-time clock. `exp` is always
/// recomputed as `iat + max_age_secs`.
pub fn enrich_claims_with_max_age(
    base: &JsonMap,
    context: &AuthorizationContext,
    max_age_secs: u64,
) -> JsonMap {
    let mut claims = base.clone();

    let iat = base
        .get("iat")
        .and_then(Value::as_u64)
        .unwrap_or_else(|| Utc::now().timestamp() as u64);

    claims.insert("tenantId".to_string(), json!(context.tenant_id));
    claims.insert("roles".to_string(), json!(context.role_slugs));
    claims.insert("activeRole".to_string(), json!(context.active_role));
    claims.insert("permissions".to_string(), json!(context.permissions));
    claims.insert("tenantStatus".to_string(), json!(context.tenant_status));
    claims.insert("planTier".to_string(), json!(context.plan_tier));
    claims.insert("authProvider".to_string(), json!(context.auth_provider));
    claims.insert("iat".to_string(), json!(iat));
    claims.insert("exp".to_string(), json!(iat + max_age_secs));

    claims
}
