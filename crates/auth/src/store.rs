//! Lockout state storage
//!
//! The manager speaks to its state through the `LockoutStore` capability
//! so deployments can swap the in-process map for a shared store without
//! touching the lockout logic. `compare_and_swap` is the primitive the
//! manager builds its read-check-write sequence on; a store that cannot
//! honor it atomically per key must not be used for lockout.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use crate::error::AuthError;

/// Failure bookkeeping for one account.
///
/// Absence of an entry is equivalent to `{ attempts: 0, locked_until: None }`.
/// `locked_until` is set exactly when the triggering failure reached the
/// policy's attempt limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockoutEntry {
    pub attempts: u32,
    pub locked_until: Option<DateTime<Utc>>,
}

/// Keyed storage for lockout entries.
///
/// Implementations report infrastructure failures as
/// [`AuthError::StoreUnavailable`]; callers treat that as fail-closed.
pub trait LockoutStore: Send + Sync {
    fn get(&self, account_id: &str) -> Result<Option<LockoutEntry>, AuthError>;

    fn put(&self, account_id: &str, entry: LockoutEntry) -> Result<(), AuthError>;

    /// Remove any entry for the account; a no-op for unknown accounts.
    fn delete(&self, account_id: &str) -> Result<(), AuthError>;

    /// Atomically replace the entry for `account_id`, but only if its
    /// current value equals `current` (`None` meaning no entry). Returns
    /// whether the swap happened. `next: None` deletes the entry.
    fn compare_and_swap(
        &self,
        account_id: &str,
        current: Option<&LockoutEntry>,
        next: Option<LockoutEntry>,
    ) -> Result<bool, AuthError>;
}

/// Process-local lockout store.
///
/// State is not durable and not shared across instances: a restart clears
/// all lockouts, and horizontally scaled deployments each count failures
/// independently. Production multi-instance deployments back the manager
/// with a shared store instead.
#[derive(Debug, Default)]
pub struct InMemoryLockoutStore {
    entries: Mutex<HashMap<String, LockoutEntry>>,
}

impl InMemoryLockoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, LockoutEntry>>, AuthError> {
        self.entries
            .lock()
            .map_err(|_| AuthError::StoreUnavailable("lockout map poisoned".to_string()))
    }
}

impl LockoutStore for InMemoryLockoutStore {
    fn get(&self, account_id: &str) -> Result<Option<LockoutEntry>, AuthError> {
        Ok(self.entries()?.get(account_id).cloned())
    }

    fn put(&self, account_id: &str, entry: LockoutEntry) -> Result<(), AuthError> {
        self.entries()?.insert(account_id.to_string(), entry);
        Ok(())
    }

    fn delete(&self, account_id: &str) -> Result<(), AuthError> {
        self.entries()?.remove(account_id);
        Ok(())
    }

    fn compare_and_swap(
        &self,
        account_id: &str,
        current: Option<&LockoutEntry>,
        next: Option<LockoutEntry>,
    ) -> Result<bool, AuthError> {
        let mut entries = self.entries()?;

        if entries.get(account_id) != current {
            return Ok(false);
        }

        match next {
            Some(entry) => {
                entries.insert(account_id.to_string(), entry);
            }
            None => {
                entries.remove(account_id);
            }
        }

        Ok(true)
    }
}
