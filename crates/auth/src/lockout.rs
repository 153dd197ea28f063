//! Account lockout / brute-force mitigation
//!
//! Tracks failed authentication attempts per account and enforces a
//! temporary lock once the policy's attempt limit is reached. The host
//! flow calls `check_account_lockout` before validating credentials,
//! `record_failed_login` on failure, and `reset_failed_logins` on success.
//!
//! Counting and lock-setting are fused into one compare-and-swap so
//! concurrent failures on the same account cannot race past the limit:
//! a caller that loses the swap re-reads the entry and re-decides.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use crate::error::AuthError;
use crate::store::{InMemoryLockoutStore, LockoutEntry, LockoutStore};

/// Lockout policy, fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutPolicy {
    /// Failures allowed before the account locks
    pub max_attempts: u32,
    /// How long a lock lasts
    pub lock_duration_minutes: u32,
}

impl Default for LockoutPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            lock_duration_minutes: 15,
        }
    }
}

impl LockoutPolicy {
    fn validate(&self) -> Result<(), AuthError> {
        if self.max_attempts == 0 {
            return Err(AuthError::InvalidLockoutPolicy("max_attempts"));
        }
        if self.lock_duration_minutes == 0 {
            return Err(AuthError::InvalidLockoutPolicy("lock_duration_minutes"));
        }
        Ok(())
    }
}

/// Result of a lockout check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutCheck {
    pub locked: bool,
    pub locked_until: Option<DateTime<Utc>>,
}

impl LockoutCheck {
    fn unlocked() -> Self {
        Self {
            locked: false,
            locked_until: None,
        }
    }
}

/// Result of recording a failed login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FailedLogin {
    pub locked: bool,
    pub attempts_remaining: u32,
}

/// Per-account failed-login tracker.
///
/// Accounts are opaque identifier strings; unknown accounts are valid
/// inputs that behave as if they had zero recorded failures.
pub struct LockoutManager {
    policy: LockoutPolicy,
    store: Arc<dyn LockoutStore>,
}

impl LockoutManager {
    /// Create a manager backed by the in-process store.
    ///
    /// Fails if a policy field is zero.
    pub fn new(policy: LockoutPolicy) -> Result<Self, AuthError> {
        Self::with_store(policy, Arc::new(InMemoryLockoutStore::new()))
    }

    /// Create a manager backed by a caller-supplied store
    pub fn with_store(policy: LockoutPolicy, store: Arc<dyn LockoutStore>) -> Result<Self, AuthError> {
        policy.validate()?;
        Ok(Self { policy, store })
    }

    pub fn policy(&self) -> LockoutPolicy {
        self.policy
    }

    /// Is the account currently locked?
    ///
    /// Expired locks are purged as a side effect of being observed, so a
    /// stale entry never blocks an account past its window.
    pub fn check_account_lockout(&self, account_id: &str) -> Result<LockoutCheck, AuthError> {
        self.check_at(account_id, Utc::now())
    }

    /// Record one failed attempt and report the account's new state.
    ///
    /// While a lock window is active this short-circuits without touching
    /// the counter, so hammering a locked account neither extends the lock
    /// nor inflates the count.
    pub fn record_failed_login(&self, account_id: &str) -> Result<FailedLogin, AuthError> {
        self.record_at(account_id, Utc::now())
    }

    /// Clear all failure state for the account. Idempotent; safe for
    /// accounts that were never seen.
    pub fn reset_failed_logins(&self, account_id: &str) -> Result<(), AuthError> {
        self.store.delete(account_id)
    }

    fn check_at(&self, account_id: &str, now: DateTime<Utc>) -> Result<LockoutCheck, AuthError> {
        let Some(entry) = self.store.get(account_id)? else {
            return Ok(LockoutCheck::unlocked());
        };

        match entry.locked_until {
            None => Ok(LockoutCheck::unlocked()),
            Some(until) if until <= now => {
                // Lock has expired; lazily purge. Losing the swap means a
                // concurrent observer already cleaned up.
                self.store.compare_and_swap(account_id, Some(&entry), None)?;
                Ok(LockoutCheck::unlocked())
            }
            Some(until) => Ok(LockoutCheck {
                locked: true,
                locked_until: Some(until),
            }),
        }
    }

    fn record_at(&self, account_id: &str, now: DateTime<Utc>) -> Result<FailedLogin, AuthError> {
        loop {
            let current = self.store.get(account_id)?;

            if let Some(entry) = &current {
                if let Some(until) = entry.locked_until {
                    if until > now {
                        return Ok(FailedLogin {
                            locked: true,
                            attempts_remaining: 0,
                        });
                    }
                }
            }

            // An expired lock starts a fresh count rather than resuming
            // the count that triggered it.
            let prior_attempts = match &current {
                Some(entry) if entry.locked_until.is_none() => entry.attempts,
                _ => 0,
            };
            let attempts = prior_attempts + 1;

            let (next, outcome) = if attempts >= self.policy.max_attempts {
                let locked_until = now + Duration::minutes(i64::from(self.policy.lock_duration_minutes));
                tracing::warn!(
                    account_id,
                    attempts,
                    %locked_until,
                    "account locked after repeated failed logins"
                );
                (
                    LockoutEntry {
                        attempts,
                        locked_until: Some(locked_until),
                    },
                    FailedLogin {
                        locked: true,
                        attempts_remaining: 0,
                    },
                )
            } else {
                (
                    LockoutEntry {
                        attempts,
                        locked_until: None,
                    },
                    FailedLogin {
                        locked: false,
                        attempts_remaining: self.policy.max_attempts - attempts,
                    },
                )
            };

            if self
                .store
                .compare_and_swap(account_id, current.as_ref(), Some(next))?
            {
                return Ok(outcome);
            }
            // A concurrent caller moved the entry; re-read and re-decide.
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(max_attempts: u32, lock_duration_minutes: u32) -> LockoutManager {
        LockoutManager::new(LockoutPolicy {
            max_attempts,
            lock_duration_minutes,
        })
        .unwrap()
    }

    #[test]
    fn test_fresh_account_is_unlocked() {
        let manager = LockoutManager::new(LockoutPolicy::default()).unwrap();
        let check = manager.check_account_lockout("user-1").unwrap();
        assert_eq!(check, LockoutCheck::unlocked());
    }

    #[test]
    fn test_zero_policy_fields_rejected() {
        assert!(matches!(
            LockoutManager::new(LockoutPolicy {
                max_attempts: 0,
                lock_duration_minutes: 15,
            }),
            Err(AuthError::InvalidLockoutPolicy("max_attempts"))
        ));
        assert!(matches!(
            LockoutManager::new(LockoutPolicy {
                max_attempts: 5,
                lock_duration_minutes: 0,
            }),
            Err(AuthError::InvalidLockoutPolicy("lock_duration_minutes"))
        ));
    }

    #[test]
    fn test_default_policy_counts_down_from_five() {
        let manager = LockoutManager::new(LockoutPolicy::default()).unwrap();

        let result = manager.record_failed_login("user-1").unwrap();
        assert_eq!(
            result,
            FailedLogin {
                locked: false,
                attempts_remaining: 4
            }
        );
    }

    #[test]
    fn test_attempts_remaining_strictly_decreases_to_lock() {
        let manager = manager(3, 10);

        let results: Vec<FailedLogin> = (0..3)
            .map(|_| manager.record_failed_login("user-1").unwrap())
            .collect();

        assert_eq!(
            results,
            vec![
                FailedLogin {
                    locked: false,
                    attempts_remaining: 2
                },
                FailedLogin {
                    locked: false,
                    attempts_remaining: 1
                },
                FailedLogin {
                    locked: true,
                    attempts_remaining: 0
                },
            ]
        );

        let check = manager.check_account_lockout("user-1").unwrap();
        assert!(check.locked);
        assert!(check.locked_until.is_some());
    }

    #[test]
    fn test_failures_during_lock_do_not_extend_it() {
        let manager = manager(3, 10);

        for _ in 0..3 {
            manager.record_failed_login("user-1").unwrap();
        }
        let locked_until = manager
            .check_account_lockout("user-1")
            .unwrap()
            .locked_until
            .unwrap();

        // A fourth failure during the window short-circuits
        let result = manager.record_failed_login("user-1").unwrap();
        assert_eq!(
            result,
            FailedLogin {
                locked: true,
                attempts_remaining: 0
            }
        );

        // And the lock deadline is untouched
        let check = manager.check_account_lockout("user-1").unwrap();
        assert_eq!(check.locked_until, Some(locked_until));
    }

    #[test]
    fn test_failures_are_tracked_per_account() {
        let manager = manager(3, 10);

        manager.record_failed_login("user-1").unwrap();
        manager.record_failed_login("user-1").unwrap();

        let other = manager.record_failed_login("user-2").unwrap();
        assert_eq!(
            other,
            FailedLogin {
                locked: false,
                attempts_remaining: 2
            }
        );
    }

    #[test]
    fn test_check_purges_expired_lock() {
        let store = Arc::new(InMemoryLockoutStore::new());
        let manager = LockoutManager::with_store(
            LockoutPolicy {
                max_attempts: 3,
                lock_duration_minutes: 10,
            },
            store.clone(),
        )
        .unwrap();

        // Plant a lock that expired a minute ago, as if 11 minutes passed
        store
            .put(
                "user-1",
                LockoutEntry {
                    attempts: 3,
                    locked_until: Some(Utc::now() - Duration::minutes(1)),
                },
            )
            .unwrap();

        let check = manager.check_account_lockout("user-1").unwrap();
        assert_eq!(check, LockoutCheck::unlocked());

        // Lazy expiry removed the entry entirely
        assert_eq!(store.get("user-1").unwrap(), None);
    }

    #[test]
    fn test_boundary_instant_counts_as_expired() {
        let now = Utc::now();
        let manager = manager(3, 10);
        let check = manager
            .check_at("user-1", now)
            .unwrap();
        assert!(!check.locked);

        // locked_until == now is outside the lock window
        let store = Arc::new(InMemoryLockoutStore::new());
        let manager = LockoutManager::with_store(
            LockoutPolicy {
                max_attempts: 3,
                lock_duration_minutes: 10,
            },
            store.clone(),
        )
        .unwrap();
        store
            .put(
                "user-1",
                LockoutEntry {
                    attempts: 3,
                    locked_until: Some(now),
                },
            )
            .unwrap();

        assert!(!manager.check_at("user-1", now).unwrap().locked);
    }

    #[test]
    fn test_failure_after_expiry_starts_fresh_count() {
        let store = Arc::new(InMemoryLockoutStore::new());
        let manager = LockoutManager::with_store(
            LockoutPolicy {
                max_attempts: 3,
                lock_duration_minutes: 10,
            },
            store.clone(),
        )
        .unwrap();

        store
            .put(
                "user-1",
                LockoutEntry {
                    attempts: 3,
                    locked_until: Some(Utc::now() - Duration::minutes(1)),
                },
            )
            .unwrap();

        // Counting restarts at 1, not at the prior count
        let result = manager.record_failed_login("user-1").unwrap();
        assert_eq!(
            result,
            FailedLogin {
                locked: false,
                attempts_remaining: 2
            }
        );
    }

    #[test]
    fn test_reset_clears_lock_and_unknown_accounts_are_fine() {
        let manager = manager(2, 15);

        manager.record_failed_login("user-1").unwrap();
        manager.record_failed_login("user-1").unwrap();
        assert!(manager.check_account_lockout("user-1").unwrap().locked);

        manager.reset_failed_logins("user-1").unwrap();
        assert!(!manager.check_account_lockout("user-1").unwrap().locked);

        // Never-seen account
        manager.reset_failed_logins("nonexistent").unwrap();
        assert!(!manager.check_account_lockout("nonexistent").unwrap().locked);
    }

    #[test]
    fn test_reset_then_failure_counts_from_one() {
        let manager = manager(3, 10);

        manager.record_failed_login("user-1").unwrap();
        manager.record_failed_login("user-1").unwrap();
        manager.reset_failed_logins("user-1").unwrap();

        let result = manager.record_failed_login("user-1").unwrap();
        assert_eq!(
            result,
            FailedLogin {
                locked: false,
                attempts_remaining: 2
            }
        );
    }

    #[test]
    fn test_lock_deadline_matches_policy_duration() {
        let manager = manager(1, 30);
        let before = Utc::now();
        manager.record_failed_login("user-1").unwrap();
        let after = Utc::now();

        let locked_until = manager
            .check_account_lockout("user-1")
            .unwrap()
            .locked_until
            .unwrap();

        assert!(locked_until >= before + Duration::minutes(30));
        assert!(locked_until <= after + Duration::minutes(30));
    }

    #[test]
    fn test_concurrent_failures_never_exceed_limit() {
        use std::sync::atomic::{AtomicU32, Ordering};

        let manager = Arc::new(manager(5, 10));
        let locks_seen = Arc::new(AtomicU32::new(0));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let manager = Arc::clone(&manager);
                let locks_seen = Arc::clone(&locks_seen);
                std::thread::spawn(move || {
                    let result = manager.record_failed_login("user-1").unwrap();
                    if result.locked {
                        locks_seen.fetch_add(1, Ordering::SeqCst);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Exactly 5 failures counted; the remaining 3 either raced into
        // the lock transition or short-circuited against it.
        assert_eq!(locks_seen.load(Ordering::SeqCst), 3 + 1);
        assert!(manager.check_account_lockout("user-1").unwrap().locked);
    }
}
