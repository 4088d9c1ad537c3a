//! One-shot expiry timers for lease reclaim.
//!
//! Every successful acquire or renew arms a one-shot timer for exactly the
//! granted interval; when it fires, the coordinator re-evaluates the lease
//! and reclaims it if the holder stopped renewing. Arming is a call into a
//! scheduling substrate that may be briefly unavailable, so it sits behind
//! the [`ReminderScheduler`] trait: production uses the Tokio-backed
//! implementation, tests substitute flaky or inert schedulers.
//!
//! ## Supersession
//!
//! Only the most recent arm is honored. Each arm carries a generation
//! number; the coordinator ignores notices whose generation is stale, and
//! the Tokio implementation additionally aborts the previous pending sleep
//! for the same resource. A stale timer that fires anyway is harmless: the
//! fire handler checks current state before acting.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use lockstep_core::ResourceId;

use crate::error::{Error, Result};

/// Notice delivered into a coordinator's mailbox when an armed expiry
/// timer fires.
///
/// The generation identifies which arm produced the notice; the
/// coordinator compares it against its current generation to discard
/// notices from superseded timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpiryNotice {
    /// Generation of the arm that produced this notice.
    pub generation: u64,
}

/// Scheduling substrate for one-shot expiry timers.
///
/// Implementations must deliver the notice into `sink` once `delay` has
/// elapsed, best-effort: delivery may be skipped if the timer was
/// cancelled, superseded, or the coordinator is gone. Transient substrate
/// faults should be reported as
/// [`Error::Unavailable`](crate::error::Error::Unavailable) so the
/// coordinator's bounded arm retry can classify them.
#[async_trait]
pub trait ReminderScheduler: Send + Sync {
    /// Arms a one-shot timer for `resource_id`.
    ///
    /// A subsequent `arm` for the same resource supersedes this one.
    async fn arm(
        &self,
        resource_id: &ResourceId,
        delay: Duration,
        notice: ExpiryNotice,
        sink: mpsc::Sender<ExpiryNotice>,
    ) -> Result<()>;

    /// Cancels the pending timer for `resource_id`, if any.
    ///
    /// Best-effort: a timer that fires despite cancellation is discarded
    /// by the coordinator's generation check.
    async fn cancel(&self, resource_id: &ResourceId) -> Result<()>;
}

/// Converts a lock poison error to an internal error.
fn poison_err<T>(_: PoisonError<T>) -> Error {
    Error::internal("timer registry lock poisoned")
}

/// Tokio-backed reminder scheduler.
///
/// Each armed timer is a spawned task sleeping for the requested delay and
/// then sending the notice. At most one pending timer exists per resource;
/// re-arming aborts the previous one. Entries for timers that already
/// fired are cleared lazily on the next arm or cancel.
#[derive(Debug, Default)]
pub struct TokioReminderScheduler {
    pending: Mutex<HashMap<String, AbortHandle>>,
}

impl TokioReminderScheduler {
    /// Creates a new Tokio-backed scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ReminderScheduler for TokioReminderScheduler {
    async fn arm(
        &self,
        resource_id: &ResourceId,
        delay: Duration,
        notice: ExpiryNotice,
        sink: mpsc::Sender<ExpiryNotice>,
    ) -> Result<()> {
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // The coordinator may already be gone; a failed send is fine.
            let _ = sink.send(notice).await;
        });

        let mut pending = self.pending.lock().map_err(poison_err)?;
        if let Some(previous) = pending.insert(resource_id.as_str().to_string(), task.abort_handle())
        {
            previous.abort();
        }
        Ok(())
    }

    async fn cancel(&self, resource_id: &ResourceId) -> Result<()> {
        let mut pending = self.pending.lock().map_err(poison_err)?;
        if let Some(handle) = pending.remove(resource_id.as_str()) {
            handle.abort();
        }
        Ok(())
    }
}
