//! Observability metrics for lease coordination.
//!
//! Metrics are exposed via the `metrics` crate facade and are designed to
//! answer the operational questions this service gets asked: who is
//! winning leases, how often holders lose them to expiry, and whether the
//! timer substrate is degrading (the known weak point of delayed reclaim).
//!
//! ## Metrics Exported
//!
//! | Metric | Type | Labels | Description |
//! |--------|------|--------|-------------|
//! | `lockstep_lease_operations_total` | Counter | `op`, `outcome` | Lease operations by outcome |
//! | `lockstep_lease_reclaims_total` | Counter | - | Leases reclaimed by the expiry scheduler |
//! | `lockstep_expiry_arm_failures_total` | Counter | `exhausted` | Timer-arm attempts that failed |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use lockstep_lease::metrics::LeaseMetrics;
//!
//! let metrics = LeaseMetrics::new();
//! metrics.record_operation("acquire", "granted");
//! metrics.record_reclaim();
//! ```

use metrics::counter;

/// Metric names as constants for consistency.
pub mod names {
    /// Counter: lease operations by operation and outcome.
    pub const OPERATIONS_TOTAL: &str = "lockstep_lease_operations_total";
    /// Counter: leases reclaimed by the expiry scheduler.
    pub const RECLAIMS_TOTAL: &str = "lockstep_lease_reclaims_total";
    /// Counter: expiry timer arm failures.
    pub const ARM_FAILURES_TOTAL: &str = "lockstep_expiry_arm_failures_total";
}

/// Label keys used across metrics.
pub mod labels {
    /// Operation name (acquire, renew, release).
    pub const OP: &str = "op";
    /// Operation outcome (granted, rejected, released).
    pub const OUTCOME: &str = "outcome";
    /// Whether the arm retry budget was exhausted ("true"/"false").
    pub const EXHAUSTED: &str = "exhausted";
}

/// High-level interface for recording lease metrics.
///
/// Cheap to clone and share across coordinator tasks.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeaseMetrics;

impl LeaseMetrics {
    /// Creates a new metrics recorder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Records a completed lease operation and its outcome.
    pub fn record_operation(&self, op: &str, outcome: &str) {
        counter!(
            names::OPERATIONS_TOTAL,
            labels::OP => op.to_string(),
            labels::OUTCOME => outcome.to_string(),
        )
        .increment(1);
    }

    /// Records a lease reclaimed by the expiry scheduler.
    pub fn record_reclaim(&self) {
        counter!(names::RECLAIMS_TOTAL).increment(1);
    }

    /// Records a failed expiry-timer arm attempt.
    pub fn record_arm_failure(&self, exhausted: bool) {
        counter!(
            names::ARM_FAILURES_TOTAL,
            labels::EXHAUSTED => exhausted.to_string(),
        )
        .increment(1);
    }
}
