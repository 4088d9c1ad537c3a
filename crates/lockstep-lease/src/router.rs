//! Request routing to per-resource coordinators.
//!
//! The router is the single client-facing surface: it validates the
//! resource id, resolves the resource's coordinator (spawning it on first
//! use), and forwards the operation verbatim. It holds no lease state of
//! its own and applies no lease logic; semantics live entirely in the
//! coordinator.
//!
//! Coordinator handles are cached so repeated operations on a resource
//! reuse the same mailbox. The cache lock is held only for the lookup and
//! insert, never across an await, so routing for different resources does
//! not serialize their operations.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use lockstep_core::ResourceId;

use crate::config::CoordinatorConfig;
use crate::coordinator::{Coordinator, CoordinatorHandle};
use crate::error::{Error, Result};
use crate::record::LeaseRecord;
use crate::store::LeaseStore;
use crate::timer::ReminderScheduler;

/// Converts a lock poison error to an internal error.
fn poison_err<T>(_: PoisonError<T>) -> Error {
    Error::internal("coordinator cache lock poisoned")
}

/// Cache of live coordinator handles, one per resource.
#[derive(Default)]
pub struct CoordinatorCache {
    inner: Mutex<HashMap<String, CoordinatorHandle>>,
}

impl CoordinatorCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached handle for `resource_id`, or inserts the one
    /// produced by `create`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock was poisoned.
    pub fn resolve(
        &self,
        resource_id: &ResourceId,
        create: impl FnOnce() -> CoordinatorHandle,
    ) -> Result<CoordinatorHandle> {
        let mut inner = self.inner.lock().map_err(poison_err)?;
        if let Some(handle) = inner.get(resource_id.as_str()) {
            return Ok(handle.clone());
        }
        let handle = create();
        inner.insert(resource_id.as_str().to_string(), handle.clone());
        Ok(handle)
    }

    /// Number of resources with a live coordinator.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock was poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.inner.lock().map_err(poison_err)?.len())
    }

    /// Returns whether no coordinator has been spawned yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock was poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.inner.lock().map_err(poison_err)?.is_empty())
    }
}

/// The client-facing lease service.
///
/// Clone-free by design: share it behind an `Arc` and call it from any
/// task. Operations on the same resource are serialized by that resource's
/// coordinator; operations on different resources proceed in parallel.
///
/// ## Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use lockstep_lease::prelude::*;
///
/// # async fn example() -> lockstep_lease::Result<()> {
/// let router = LeaseRouter::new(
///     Arc::new(InMemoryLeaseStore::new()),
///     Arc::new(TokioReminderScheduler::new()),
/// );
///
/// if router.acquire_lease("printer-1", "worker-7", Duration::from_secs(30)).await? {
///     // exclusive access until release or expiry
///     router.release_lease("printer-1", "worker-7").await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct LeaseRouter {
    store: Arc<dyn LeaseStore>,
    scheduler: Arc<dyn ReminderScheduler>,
    config: CoordinatorConfig,
    cache: CoordinatorCache,
}

impl LeaseRouter {
    /// Creates a router with the default coordinator configuration.
    #[must_use]
    pub fn new(store: Arc<dyn LeaseStore>, scheduler: Arc<dyn ReminderScheduler>) -> Self {
        Self::with_config(store, scheduler, CoordinatorConfig::default())
    }

    /// Creates a router with an explicit coordinator configuration.
    #[must_use]
    pub fn with_config(
        store: Arc<dyn LeaseStore>,
        scheduler: Arc<dyn ReminderScheduler>,
        config: CoordinatorConfig,
    ) -> Self {
        Self {
            store,
            scheduler,
            config,
            cache: CoordinatorCache::new(),
        }
    }

    /// Attempts to acquire the lease on `resource_id` for `requester_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for malformed identifiers or a
    /// zero interval; propagates coordinator faults.
    pub async fn acquire_lease(
        &self,
        resource_id: &str,
        requester_id: &str,
        lease_interval: Duration,
    ) -> Result<bool> {
        self.resolve(resource_id)?
            .acquire(requester_id, lease_interval)
            .await
    }

    /// Renews the lease on `resource_id` for `requester_id`.
    ///
    /// # Errors
    ///
    /// Same as [`acquire_lease`](Self::acquire_lease).
    pub async fn renew_lease(
        &self,
        resource_id: &str,
        requester_id: &str,
        lease_interval: Duration,
    ) -> Result<bool> {
        self.resolve(resource_id)?
            .renew(requester_id, lease_interval)
            .await
    }

    /// Releases the lease on `resource_id` held by `requester_id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for malformed identifiers;
    /// propagates coordinator faults.
    pub async fn release_lease(&self, resource_id: &str, requester_id: &str) -> Result<bool> {
        self.resolve(resource_id)?.release(requester_id).await
    }

    /// Reads the current lease on `resource_id` without mutating anything.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a malformed resource id;
    /// propagates coordinator faults.
    pub async fn current_lease(&self, resource_id: &str) -> Result<Option<LeaseRecord>> {
        self.resolve(resource_id)?.current_lease().await
    }

    /// Number of resources with a live coordinator.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock was poisoned.
    pub fn coordinator_count(&self) -> Result<usize> {
        self.cache.len()
    }

    fn resolve(&self, resource_id: &str) -> Result<CoordinatorHandle> {
        let resource = ResourceId::new(resource_id).map_err(Error::from)?;
        self.cache.resolve(&resource, || {
            Coordinator::spawn(
                resource.clone(),
                Arc::clone(&self.store),
                Arc::clone(&self.scheduler),
                self.config.clone(),
            )
        })
    }
}
