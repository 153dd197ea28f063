//! Audit emitter capability
//!
//! Security-sensitive flows (sign-in, lockout transitions, role changes)
//! report what happened through an `AuditEmitter`. The host application
//! decides where events go; the in-memory emitter backs tests and local
//! development.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// A single audit event
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEvent {
    pub actor_id: String,
    pub action: String,
    pub resource_type: String,
    pub resource_id: String,
    pub tenant_id: String,
    pub request_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_state: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after_state: Option<Value>,
    pub occurred_at: DateTime<Utc>,
}

/// Sink for audit events. Emission failures must not break the calling
/// flow; implementations log and swallow their own errors.
pub trait AuditEmitter: Send + Sync {
    fn emit(&self, event: AuditEvent);
}

/// Collects events in memory. Used by tests and local development.
#[derive(Debug, Default)]
pub struct InMemoryAuditEmitter {
    events: Mutex<Vec<AuditEvent>>,
}

impl InMemoryAuditEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<AuditEvent>> {
        // A poisoned lock only means a panicking writer; the event log stays usable
        self.events.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Snapshot of everything emitted so far
    pub fn events(&self) -> Vec<AuditEvent> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl AuditEmitter for InMemoryAuditEmitter {
    fn emit(&self, event: AuditEvent) {
        self.lock().push(event);
    }
}
