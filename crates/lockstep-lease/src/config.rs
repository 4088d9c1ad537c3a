//! Coordinator tuning knobs.

use std::time::Duration;

/// Default maximum attempts for store reads and commits.
pub const DEFAULT_COMMIT_ATTEMPTS: u32 = 3;

/// Default maximum attempts for arming the expiry timer.
pub const DEFAULT_ARM_ATTEMPTS: u32 = 3;

/// Default backoff between retry attempts.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_millis(50);

/// Default coordinator mailbox capacity.
pub const DEFAULT_MAILBOX_CAPACITY: usize = 64;

/// Configuration for per-resource coordinators.
///
/// The retry caps bound how long a single lease operation can stall on a
/// transiently unavailable collaborator before failing loudly; timer-arm
/// exhaustion is the one exception and never fails the triggering call.
#[derive(Debug, Clone)]
pub struct CoordinatorConfig {
    /// Maximum attempts for a store read or commit before the fault is
    /// surfaced to the caller.
    pub max_commit_attempts: u32,

    /// Maximum attempts for arming the expiry timer. Exhaustion is
    /// tolerated: the lease is still granted, reclaim is delayed.
    pub max_arm_attempts: u32,

    /// Fixed backoff between retry attempts.
    pub retry_backoff: Duration,

    /// Capacity of the coordinator's command mailbox.
    pub mailbox_capacity: usize,
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            max_commit_attempts: DEFAULT_COMMIT_ATTEMPTS,
            max_arm_attempts: DEFAULT_ARM_ATTEMPTS,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
            mailbox_capacity: DEFAULT_MAILBOX_CAPACITY,
        }
    }
}

impl CoordinatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum store read/commit attempts.
    #[must_use]
    pub const fn with_max_commit_attempts(mut self, attempts: u32) -> Self {
        self.max_commit_attempts = attempts;
        self
    }

    /// Sets the maximum timer-arm attempts.
    #[must_use]
    pub const fn with_max_arm_attempts(mut self, attempts: u32) -> Self {
        self.max_arm_attempts = attempts;
        self
    }

    /// Sets the backoff between retry attempts.
    #[must_use]
    pub const fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    /// Sets the coordinator mailbox capacity.
    #[must_use]
    pub const fn with_mailbox_capacity(mut self, capacity: usize) -> Self {
        self.mailbox_capacity = capacity;
        self
    }
}
