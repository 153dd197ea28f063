//! End-to-end credentials login flow
//!
//! Wires the auth pieces together the way a host application does:
//! lockout check before credential validation, failure recording, reset
//! on success, then claim enrichment from the RBAC- and tenant-resolved
//! authorization context.

use std::sync::Arc;

use chrono::{Duration, Utc};
use serde_json::json;

use atrium_auth::{
    enrich_claims, AuthConfig, AuthProvider, AuthorizationContext, InMemoryLockoutStore, JsonMap,
    LockoutEntry, LockoutManager, LockoutPolicy, LockoutStore,
};
use atrium_common::{AuditEmitter, AuditEvent, InMemoryAuditEmitter};
use atrium_identity::OrganizationStatus;
use atrium_rbac::{built_in_role, has_all_permissions};
use atrium_tenant::check_tenant_status;

fn lockout_audit_event(account_id: &str) -> AuditEvent {
    AuditEvent {
        actor_id: account_id.to_string(),
        action: "auth.account_locked".to_string(),
        resource_type: "account".to_string(),
        resource_id: account_id.to_string(),
        tenant_id: "acme".to_string(),
        request_id: uuid::Uuid::new_v4().to_string(),
        before_state: None,
        after_state: None,
        occurred_at: Utc::now(),
    }
}

#[test]
fn brute_force_is_locked_out_and_recovers_after_the_window() {
    let config = AuthConfig {
        providers: vec![AuthProvider::Credentials],
        lockout: Some(LockoutPolicy {
            max_attempts: 3,
            lock_duration_minutes: 10,
        }),
        ..Default::default()
    }
    .resolve()
    .unwrap();

    let store = Arc::new(InMemoryLockoutStore::new());
    let manager = LockoutManager::with_store(config.lockout, store.clone()).unwrap();
    let audit = InMemoryAuditEmitter::new();

    // Pre-validation gate passes for a fresh account
    assert!(!manager.check_account_lockout("user-1").unwrap().locked);

    // Three bad passwords in a row
    let first = manager.record_failed_login("user-1").unwrap();
    assert!(!first.locked);
    assert_eq!(first.attempts_remaining, 2);

    let second = manager.record_failed_login("user-1").unwrap();
    assert!(!second.locked);
    assert_eq!(second.attempts_remaining, 1);

    let third = manager.record_failed_login("user-1").unwrap();
    assert!(third.locked);
    assert_eq!(third.attempts_remaining, 0);
    audit.emit(lockout_audit_event("user-1"));

    // A fourth attempt during the window changes nothing
    let fourth = manager.record_failed_login("user-1").unwrap();
    assert!(fourth.locked);
    assert_eq!(fourth.attempts_remaining, 0);

    let check = manager.check_account_lockout("user-1").unwrap();
    assert!(check.locked);
    let locked_until = check.locked_until.unwrap();

    // Simulate 11 minutes passing by rewinding the stored deadline
    store
        .put(
            "user-1",
            LockoutEntry {
                attempts: 3,
                locked_until: Some(locked_until - Duration::minutes(11)),
            },
        )
        .unwrap();

    assert!(!manager.check_account_lockout("user-1").unwrap().locked);

    // The account locked exactly once from the audit trail's view
    assert_eq!(audit.events().len(), 1);
    assert_eq!(audit.events()[0].action, "auth.account_locked");
}

#[test]
fn successful_login_resets_failures_and_issues_enriched_claims() {
    let manager = LockoutManager::new(LockoutPolicy::default()).unwrap();

    // Two stumbles before the right password
    manager.record_failed_login("user-1").unwrap();
    manager.record_failed_login("user-1").unwrap();
    assert!(!manager.check_account_lockout("user-1").unwrap().locked);

    // Credentials validated: reset, gate the tenant, build the context
    manager.reset_failed_logins("user-1").unwrap();
    check_tenant_status(OrganizationStatus::Active).unwrap();

    let admin = built_in_role("admin").unwrap();
    let context = AuthorizationContext {
        tenant_id: "acme".to_string(),
        role_slugs: vec![admin.slug.clone()],
        active_role: admin.slug.clone(),
        permissions: admin.permissions.clone(),
        tenant_status: OrganizationStatus::Active.to_string(),
        plan_tier: "pro".to_string(),
        auth_provider: "credentials".to_string(),
    };

    let mut base = JsonMap::new();
    base.insert("sub".to_string(), json!("user-1"));
    base.insert("iat".to_string(), json!(1_700_000_000));

    let claims = enrich_claims(&base, &context);

    assert_eq!(claims["sub"], json!("user-1"));
    assert_eq!(claims["tenantId"], json!("acme"));
    assert_eq!(claims["activeRole"], json!("admin"));
    assert_eq!(claims["tenantStatus"], json!("active"));
    assert_eq!(claims["exp"], json!(1_700_028_800));

    // The enriched permission set actually authorizes admin work
    let held: Vec<String> = claims["permissions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect();
    assert!(has_all_permissions(&held, &["users:delete", "audit:read"]));
    assert!(!has_all_permissions(&held, &["audit:export"]));

    // And the failure count really restarted
    let result = manager.record_failed_login("user-1").unwrap();
    assert_eq!(result.attempts_remaining, 4);
}

#[test]
fn suspended_tenant_blocks_login_before_enrichment() {
    let manager = LockoutManager::new(LockoutPolicy::default()).unwrap();
    assert!(!manager.check_account_lockout("user-2").unwrap().locked);

    let err = check_tenant_status(OrganizationStatus::Suspended).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Organization is suspended. Contact your administrator."
    );
}
