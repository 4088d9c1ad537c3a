//! The per-resource lease coordinator.
//!
//! Each resource gets exactly one coordinator: a dedicated task that owns
//! the resource's lease record and processes operations strictly one at a
//! time from a single mailbox. Expiry-timer fires are delivered into the
//! same mailbox loop, so reclaim never races an in-flight acquire, renew,
//! or release on the same resource. Coordinators for different resources
//! share nothing and run fully in parallel.
//!
//! ## Semantics
//!
//! - First writer wins: an unlocked resource goes to whoever commits first.
//! - Same-holder operations are idempotent: the current holder's acquire
//!   or renew refreshes the validity window and re-arms the expiry timer.
//! - A foreign holder is contention, not a fault: the operation returns
//!   `false` and mutates nothing.
//! - There is no expiry check on the request path: a lease that has
//!   numerically passed its window but has not been reclaimed by the
//!   expiry scheduler is still treated as held.
//!
//! ## Cancellation
//!
//! Handle operations await a reply on a oneshot channel. Dropping the
//! caller's future abandons only that wait; the coordinator finishes the
//! operation (including the durable commit) regardless, and the next
//! operation in the mailbox is unaffected.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{mpsc, oneshot};
use tracing::{error, info, warn, Instrument};

use lockstep_core::observability::lease_span;
use lockstep_core::{RequesterId, ResourceId};

use crate::config::CoordinatorConfig;
use crate::error::{Error, Result};
use crate::metrics::LeaseMetrics;
use crate::record::LeaseRecord;
use crate::store::LeaseStore;
use crate::timer::{ExpiryNotice, ReminderScheduler};

/// Capacity of the expiry-notice channel. At most one timer is pending
/// per resource, so this only needs slack for superseded stragglers.
const EXPIRY_CHANNEL_CAPACITY: usize = 4;

/// Operations delivered into the coordinator's mailbox.
enum Command {
    Acquire {
        requester: RequesterId,
        interval: Duration,
        reply: oneshot::Sender<Result<bool>>,
    },
    Renew {
        requester: RequesterId,
        interval: Duration,
        reply: oneshot::Sender<Result<bool>>,
    },
    Release {
        requester: RequesterId,
        reply: oneshot::Sender<Result<bool>>,
    },
    Inspect {
        reply: oneshot::Sender<Result<Option<LeaseRecord>>>,
    },
}

/// Client handle to one resource's coordinator.
///
/// Cheap to clone; all clones feed the same mailbox. Input validation
/// happens here, before anything is enqueued, so malformed requests never
/// occupy the serialized context.
#[derive(Clone)]
pub struct CoordinatorHandle {
    resource_id: ResourceId,
    commands: mpsc::Sender<Command>,
}

impl CoordinatorHandle {
    /// The resource this coordinator is bound to.
    #[must_use]
    pub fn resource_id(&self) -> &ResourceId {
        &self.resource_id
    }

    /// Attempts to acquire the lease for `requester_id`.
    ///
    /// Returns `true` if the lease was granted or refreshed for this
    /// requester, `false` if another requester holds it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty requester id or a
    /// zero lease interval; propagates store faults that survive the
    /// bounded retry.
    pub async fn acquire(&self, requester_id: &str, lease_interval: Duration) -> Result<bool> {
        let requester = validated_requester(requester_id)?;
        let interval = validated_interval(lease_interval)?;
        self.call(|reply| Command::Acquire {
            requester,
            interval,
            reply,
        })
        .await
    }

    /// Renews the lease for `requester_id`.
    ///
    /// Identical contract to [`acquire`](Self::acquire): a renew against an
    /// unlocked resource acquires it, and a renew by the current holder
    /// restarts the validity window.
    ///
    /// # Errors
    ///
    /// Same as [`acquire`](Self::acquire).
    pub async fn renew(&self, requester_id: &str, lease_interval: Duration) -> Result<bool> {
        let requester = validated_requester(requester_id)?;
        let interval = validated_interval(lease_interval)?;
        self.call(|reply| Command::Renew {
            requester,
            interval,
            reply,
        })
        .await
    }

    /// Releases the lease held by `requester_id`.
    ///
    /// Returns `true` if this requester held the lease and it was cleared,
    /// `false` if the resource was unlocked or held by someone else.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty requester id;
    /// propagates store faults that survive the bounded retry.
    pub async fn release(&self, requester_id: &str) -> Result<bool> {
        let requester = validated_requester(requester_id)?;
        self.call(|reply| Command::Release { requester, reply }).await
    }

    /// Reads the current lease record without mutating anything.
    ///
    /// # Errors
    ///
    /// Propagates store faults that survive the bounded retry.
    pub async fn current_lease(&self) -> Result<Option<LeaseRecord>> {
        self.call(|reply| Command::Inspect { reply }).await
    }

    async fn call<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<Result<T>>) -> Command,
    ) -> Result<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(make(reply))
            .await
            .map_err(|_| self.stopped())?;
        response.await.map_err(|_| self.stopped())?
    }

    fn stopped(&self) -> Error {
        Error::CoordinatorStopped {
            resource_id: self.resource_id.to_string(),
        }
    }
}

fn validated_requester(requester_id: &str) -> Result<RequesterId> {
    RequesterId::new(requester_id).map_err(Error::from)
}

fn validated_interval(lease_interval: Duration) -> Result<Duration> {
    if lease_interval.is_zero() {
        return Err(Error::invalid_argument("lease interval must be positive"));
    }
    Ok(lease_interval)
}

/// The coordinator task state.
///
/// Constructed and spawned via [`Coordinator::spawn`]; the task runs until
/// every [`CoordinatorHandle`] for the resource has been dropped.
pub struct Coordinator {
    resource_id: ResourceId,
    store: Arc<dyn LeaseStore>,
    scheduler: Arc<dyn ReminderScheduler>,
    config: CoordinatorConfig,
    metrics: LeaseMetrics,
    commands: mpsc::Receiver<Command>,
    expiry_rx: mpsc::Receiver<ExpiryNotice>,
    expiry_tx: mpsc::Sender<ExpiryNotice>,
    /// Generation of the most recent timer arm. Notices carrying an older
    /// generation come from superseded timers and are discarded.
    generation: u64,
}

impl Coordinator {
    /// Spawns the coordinator task for a resource and returns its handle.
    #[must_use]
    pub fn spawn(
        resource_id: ResourceId,
        store: Arc<dyn LeaseStore>,
        scheduler: Arc<dyn ReminderScheduler>,
        config: CoordinatorConfig,
    ) -> CoordinatorHandle {
        let (command_tx, command_rx) = mpsc::channel(config.mailbox_capacity);
        let (expiry_tx, expiry_rx) = mpsc::channel(EXPIRY_CHANNEL_CAPACITY);

        let coordinator = Self {
            resource_id: resource_id.clone(),
            store,
            scheduler,
            config,
            metrics: LeaseMetrics::new(),
            commands: command_rx,
            expiry_rx,
            expiry_tx,
            generation: 0,
        };
        tokio::spawn(coordinator.run());

        CoordinatorHandle {
            resource_id,
            commands: command_tx,
        }
    }

    async fn run(mut self) {
        info!(resource = %self.resource_id, "coordinator started");
        loop {
            tokio::select! {
                command = self.commands.recv() => match command {
                    Some(command) => self.handle_command(command).await,
                    // All handles dropped: nothing can reach this
                    // coordinator anymore.
                    None => break,
                },
                Some(notice) = self.expiry_rx.recv() => {
                    let span = lease_span("expire", self.resource_id.as_str());
                    self.handle_expiry(notice).instrument(span).await;
                }
            }
        }
        info!(resource = %self.resource_id, "coordinator stopped");
    }

    async fn handle_command(&mut self, command: Command) {
        match command {
            Command::Acquire {
                requester,
                interval,
                reply,
            } => {
                let span = lease_span("acquire", self.resource_id.as_str());
                let result = self
                    .grant("acquire", requester, interval)
                    .instrument(span)
                    .await;
                let _ = reply.send(result);
            }
            Command::Renew {
                requester,
                interval,
                reply,
            } => {
                let span = lease_span("renew", self.resource_id.as_str());
                let result = self
                    .grant("renew", requester, interval)
                    .instrument(span)
                    .await;
                let _ = reply.send(result);
            }
            Command::Release { requester, reply } => {
                let span = lease_span("release", self.resource_id.as_str());
                let result = self.release(requester).instrument(span).await;
                let _ = reply.send(result);
            }
            Command::Inspect { reply } => {
                let _ = reply.send(self.load_record().await);
            }
        }
    }

    /// Shared transition for acquire and renew: grant to an unlocked
    /// resource or refresh the current holder's window; reject foreigners.
    async fn grant(
        &mut self,
        op: &'static str,
        requester: RequesterId,
        interval: Duration,
    ) -> Result<bool> {
        if let Some(current) = self.load_record().await? {
            if !current.held_by(&requester) {
                // A numerically expired but unreclaimed lease still counts
                // as held: reclaim is scheduler-driven, never
                // request-driven.
                info!(
                    resource = %self.resource_id,
                    requester = %requester,
                    holder = %current.holder_id,
                    op,
                    "lease held by another requester"
                );
                self.metrics.record_operation(op, "rejected");
                return Ok(false);
            }
        }

        let record = LeaseRecord::granted_now(requester.clone(), interval);
        let expires_at = record.expires_at();
        self.commit_record(Some(record)).await?;
        self.arm_expiry(interval).await?;

        info!(
            resource = %self.resource_id,
            requester = %requester,
            %expires_at,
            op,
            "lease granted"
        );
        self.metrics.record_operation(op, "granted");
        Ok(true)
    }

    async fn release(&mut self, requester: RequesterId) -> Result<bool> {
        match self.load_record().await? {
            Some(current) if current.held_by(&requester) => {
                self.commit_record(None).await?;
                // Logical cancel: a still-pending timer now carries a
                // stale generation even if the substrate cancel fails.
                self.generation = self.generation.wrapping_add(1);
                if let Err(err) = self.scheduler.cancel(&self.resource_id).await {
                    warn!(
                        resource = %self.resource_id,
                        error = %err,
                        "failed to cancel expiry timer"
                    );
                }
                info!(resource = %self.resource_id, requester = %requester, "lease released");
                self.metrics.record_operation("release", "released");
                Ok(true)
            }
            Some(current) => {
                info!(
                    resource = %self.resource_id,
                    requester = %requester,
                    holder = %current.holder_id,
                    "release rejected: not the holder"
                );
                self.metrics.record_operation("release", "rejected");
                Ok(false)
            }
            None => {
                info!(
                    resource = %self.resource_id,
                    requester = %requester,
                    "release rejected: resource is unlocked"
                );
                self.metrics.record_operation("release", "rejected");
                Ok(false)
            }
        }
    }

    /// Re-evaluates the lease after a timer fire and reclaims it if the
    /// holder stopped renewing. Faults here are logged, never propagated:
    /// there is no caller, and a missed reclaim is retried on the next arm.
    async fn handle_expiry(&mut self, notice: ExpiryNotice) {
        if notice.generation != self.generation {
            // Superseded arm; the record was renewed or released since.
            return;
        }

        let record = match self.load_record().await {
            Ok(Some(record)) => record,
            Ok(None) => return,
            Err(err) => {
                warn!(
                    resource = %self.resource_id,
                    error = %err,
                    "expiry check failed; reclaim delayed"
                );
                return;
            }
        };

        if !record.is_expired(Utc::now()) {
            // No-op reconciliation: the window moved since this timer was
            // armed.
            return;
        }

        match self.commit_record(None).await {
            Ok(()) => {
                info!(
                    resource = %self.resource_id,
                    holder = %record.holder_id,
                    "lease reclaimed after expiry"
                );
                self.metrics.record_reclaim();
            }
            Err(err) => {
                warn!(
                    resource = %self.resource_id,
                    error = %err,
                    "lease reclaim failed"
                );
            }
        }
    }

    /// Arms the expiry timer for the freshly granted window.
    ///
    /// Transient substrate faults are retried up to the configured cap;
    /// exhausting the cap does not fail the triggering grant — the lease
    /// stands and reclaim is delayed until the next renew re-arms. A
    /// non-transient fault is logged and propagated.
    async fn arm_expiry(&mut self, interval: Duration) -> Result<()> {
        self.generation = self.generation.wrapping_add(1);
        let notice = ExpiryNotice {
            generation: self.generation,
        };

        let mut attempt = 1u32;
        loop {
            match self
                .scheduler
                .arm(&self.resource_id, interval, notice, self.expiry_tx.clone())
                .await
            {
                Ok(()) => return Ok(()),
                Err(err) if err.is_transient() => {
                    let exhausted = attempt >= self.config.max_arm_attempts;
                    self.metrics.record_arm_failure(exhausted);
                    if exhausted {
                        warn!(
                            resource = %self.resource_id,
                            attempts = attempt,
                            error = %err,
                            "expiry timer not armed; reclaim delayed until the next renew"
                        );
                        return Ok(());
                    }
                    warn!(
                        resource = %self.resource_id,
                        attempt,
                        error = %err,
                        "expiry timer arm failed; retrying"
                    );
                    tokio::time::sleep(self.config.retry_backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(
                        resource = %self.resource_id,
                        error = %err,
                        "expiry timer arm failed"
                    );
                    return Err(err);
                }
            }
        }
    }

    async fn load_record(&self) -> Result<Option<LeaseRecord>> {
        let mut attempt = 1u32;
        loop {
            match self.store.get(&self.resource_id).await {
                Ok(record) => return Ok(record),
                Err(err) if err.is_transient() && attempt < self.config.max_commit_attempts => {
                    warn!(
                        resource = %self.resource_id,
                        attempt,
                        error = %err,
                        "lease store read failed; retrying"
                    );
                    tokio::time::sleep(self.config.retry_backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(resource = %self.resource_id, error = %err, "lease store read failed");
                    return Err(err);
                }
            }
        }
    }

    async fn commit_record(&self, record: Option<LeaseRecord>) -> Result<()> {
        let mut attempt = 1u32;
        loop {
            match self.store.commit(&self.resource_id, record.clone()).await {
                Ok(()) => return Ok(()),
                Err(err) if err.is_transient() && attempt < self.config.max_commit_attempts => {
                    warn!(
                        resource = %self.resource_id,
                        attempt,
                        error = %err,
                        "lease commit failed; retrying"
                    );
                    tokio::time::sleep(self.config.retry_backoff).await;
                    attempt += 1;
                }
                Err(err) => {
                    error!(resource = %self.resource_id, error = %err, "lease commit failed");
                    return Err(err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryLeaseStore;
    use crate::timer::TokioReminderScheduler;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn resource(id: &str) -> ResourceId {
        ResourceId::new(id).unwrap()
    }

    fn fast_config() -> CoordinatorConfig {
        CoordinatorConfig::new().with_retry_backoff(Duration::from_millis(1))
    }

    fn spawn_default(id: &str) -> CoordinatorHandle {
        Coordinator::spawn(
            resource(id),
            Arc::new(InMemoryLeaseStore::new()),
            Arc::new(TokioReminderScheduler::new()),
            fast_config(),
        )
    }

    /// Store that fails the first `failures` calls with a transient fault.
    struct FlakyStore {
        inner: InMemoryLeaseStore,
        failures: AtomicU32,
    }

    impl FlakyStore {
        fn new(failures: u32) -> Self {
            Self {
                inner: InMemoryLeaseStore::new(),
                failures: AtomicU32::new(failures),
            }
        }

        fn maybe_fail(&self) -> Result<()> {
            let remaining = self.failures.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failures.store(remaining - 1, Ordering::SeqCst);
                return Err(Error::unavailable("store", "injected fault"));
            }
            Ok(())
        }
    }

    #[async_trait::async_trait]
    impl LeaseStore for FlakyStore {
        async fn get(&self, resource_id: &ResourceId) -> Result<Option<LeaseRecord>> {
            self.maybe_fail()?;
            self.inner.get(resource_id).await
        }

        async fn commit(
            &self,
            resource_id: &ResourceId,
            record: Option<LeaseRecord>,
        ) -> Result<()> {
            self.maybe_fail()?;
            self.inner.commit(resource_id, record).await
        }
    }

    /// Scheduler whose arm always fails with the given fault class.
    struct FailingScheduler {
        transient: bool,
    }

    #[async_trait::async_trait]
    impl ReminderScheduler for FailingScheduler {
        async fn arm(
            &self,
            _resource_id: &ResourceId,
            _delay: Duration,
            _notice: ExpiryNotice,
            _sink: mpsc::Sender<ExpiryNotice>,
        ) -> Result<()> {
            if self.transient {
                Err(Error::unavailable("scheduler", "injected fault"))
            } else {
                Err(Error::internal("scheduler wedged"))
            }
        }

        async fn cancel(&self, _resource_id: &ResourceId) -> Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn acquire_grants_when_unlocked() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);

        let lease = handle.current_lease().await?.expect("lease present");
        assert_eq!(lease.holder_id.as_str(), "worker-7");
        assert_eq!(lease.lease_interval, Duration::from_secs(30));
        Ok(())
    }

    #[tokio::test]
    async fn acquire_is_idempotent_for_current_holder() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);
        let first = handle.current_lease().await?.expect("lease present");

        assert!(handle.acquire("worker-7", Duration::from_secs(60)).await?);
        let second = handle.current_lease().await?.expect("lease present");

        assert_eq!(second.lease_interval, Duration::from_secs(60));
        assert!(second.lease_start >= first.lease_start);
        Ok(())
    }

    #[tokio::test]
    async fn foreign_requester_is_rejected_without_mutation() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);
        let before = handle.current_lease().await?.expect("lease present");

        assert!(!handle.acquire("worker-8", Duration::from_secs(30)).await?);
        assert!(!handle.renew("worker-8", Duration::from_secs(30)).await?);
        assert!(!handle.release("worker-8").await?);

        let after = handle.current_lease().await?.expect("lease present");
        assert_eq!(after, before);
        Ok(())
    }

    #[tokio::test]
    async fn renew_on_unlocked_resource_acquires() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.renew("worker-7", Duration::from_secs(30)).await?);
        let lease = handle.current_lease().await?.expect("lease present");
        assert_eq!(lease.holder_id.as_str(), "worker-7");
        Ok(())
    }

    #[tokio::test]
    async fn mixed_case_holder_refreshes_own_lease() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);
        assert!(handle.renew("Worker-7", Duration::from_secs(30)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn release_clears_state_for_next_acquirer() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);
        assert!(handle.release("worker-7").await?);
        assert!(handle.current_lease().await?.is_none());

        assert!(handle.acquire("worker-8", Duration::from_secs(30)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn release_of_unlocked_resource_returns_false() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(!handle.release("worker-7").await?);
        Ok(())
    }

    #[tokio::test]
    async fn empty_requester_is_invalid_argument() -> Result<()> {
        let handle = spawn_default("printer-1");

        let err = handle
            .acquire("", Duration::from_secs(30))
            .await
            .expect_err("empty requester rejected");
        assert!(matches!(err, Error::InvalidArgument { .. }));

        let err = handle.release("   ").await.expect_err("blank requester rejected");
        assert!(matches!(err, Error::InvalidArgument { .. }));

        // Nothing was committed.
        assert!(handle.current_lease().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn zero_interval_is_invalid_argument() -> Result<()> {
        let handle = spawn_default("printer-1");

        let err = handle
            .acquire("worker-7", Duration::ZERO)
            .await
            .expect_err("zero interval rejected");
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(handle.current_lease().await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn transient_store_faults_are_retried() -> Result<()> {
        // Two injected faults, three attempts per access: the operation
        // succeeds on the read's third attempt.
        let handle = Coordinator::spawn(
            resource("printer-1"),
            Arc::new(FlakyStore::new(2)),
            Arc::new(TokioReminderScheduler::new()),
            fast_config(),
        );

        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn persistent_store_fault_fails_loudly() {
        let handle = Coordinator::spawn(
            resource("printer-1"),
            Arc::new(FlakyStore::new(100)),
            Arc::new(TokioReminderScheduler::new()),
            fast_config(),
        );

        let err = handle
            .acquire("worker-7", Duration::from_secs(30))
            .await
            .expect_err("retry budget exhausted");
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn arm_exhaustion_still_grants_the_lease() -> Result<()> {
        let handle = Coordinator::spawn(
            resource("printer-1"),
            Arc::new(InMemoryLeaseStore::new()),
            Arc::new(FailingScheduler { transient: true }),
            fast_config(),
        );

        // Timer never arms, but the grant stands.
        assert!(handle.acquire("worker-7", Duration::from_secs(30)).await?);
        assert!(handle.current_lease().await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn non_transient_arm_fault_is_propagated() -> Result<()> {
        let handle = Coordinator::spawn(
            resource("printer-1"),
            Arc::new(InMemoryLeaseStore::new()),
            Arc::new(FailingScheduler { transient: false }),
            fast_config(),
        );

        let err = handle
            .acquire("worker-7", Duration::from_secs(30))
            .await
            .expect_err("internal scheduler fault surfaces");
        assert!(matches!(err, Error::Internal { .. }));

        // The grant was committed before arming failed; the record stands.
        assert!(handle.current_lease().await?.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn expired_unrenewed_lease_is_reclaimed() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_millis(5)).await?);

        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(handle.current_lease().await?.is_none());
        assert!(handle.acquire("worker-9", Duration::from_secs(30)).await?);
        Ok(())
    }

    #[tokio::test]
    async fn renew_moves_the_reclaim_window() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_millis(40)).await?);

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(handle.renew("worker-7", Duration::from_millis(200)).await?);

        // Past the original window: the superseded timer must not have
        // reclaimed the renewed lease.
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!handle.acquire("worker-8", Duration::from_secs(30)).await?);
        let lease = handle.current_lease().await?.expect("lease present");
        assert_eq!(lease.holder_id.as_str(), "worker-7");
        Ok(())
    }

    #[tokio::test]
    async fn release_cancels_the_pending_timer() -> Result<()> {
        let handle = spawn_default("printer-1");
        assert!(handle.acquire("worker-7", Duration::from_millis(20)).await?);
        assert!(handle.release("worker-7").await?);

        // New holder acquired before the old timer would have fired; the
        // stale timer must not reclaim the new lease.
        assert!(handle.acquire("worker-8", Duration::from_secs(30)).await?);
        tokio::time::sleep(Duration::from_millis(50)).await;

        let lease = handle.current_lease().await?.expect("lease present");
        assert_eq!(lease.holder_id.as_str(), "worker-8");
        Ok(())
    }
}
