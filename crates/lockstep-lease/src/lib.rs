//! Lease-based mutual exclusion for named resources.
//!
//! `lockstep-lease` grants time-bounded exclusive leases on arbitrary
//! string-named resources. A lease is held until its holder releases it or
//! stops renewing and the validity window lapses, at which point the
//! expiry scheduler reclaims it for the next requester. Holder crashes
//! therefore never wedge a resource.
//!
//! ## Architecture
//!
//! ```text
//!                 ┌─────────────────────┐
//!    clients ───▶ │     LeaseRouter     │  validates ids, caches handles
//!                 └──────────┬──────────┘
//!                            │ one mailbox per resource
//!              ┌─────────────┼─────────────┐
//!              ▼             ▼             ▼
//!        ┌───────────┐ ┌───────────┐ ┌───────────┐
//!        │Coordinator│ │Coordinator│ │Coordinator│   serialized lease
//!        │ printer-1 │ │ printer-2 │ │    ...    │   logic per resource
//!        └─────┬─────┘ └─────┬─────┘ └─────┬─────┘
//!              │             │             │
//!              ▼             ▼             ▼
//!         LeaseStore (durable records) + ReminderScheduler (expiry)
//! ```
//!
//! Each resource's [`Coordinator`](coordinator::Coordinator) processes
//! operations and expiry fires strictly one at a time, so lease decisions
//! never race. The [`LeaseStore`](store::LeaseStore) and
//! [`ReminderScheduler`](timer::ReminderScheduler) traits are the seams
//! for swapping in production storage and timer substrates.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//! use lockstep_lease::prelude::*;
//!
//! # async fn example() -> lockstep_lease::Result<()> {
//! let router = LeaseRouter::new(
//!     Arc::new(InMemoryLeaseStore::new()),
//!     Arc::new(TokioReminderScheduler::new()),
//! );
//!
//! // First writer wins; contention is a `false` return, not an error.
//! assert!(router.acquire_lease("printer-1", "worker-7", Duration::from_secs(30)).await?);
//! assert!(!router.acquire_lease("printer-1", "worker-8", Duration::from_secs(30)).await?);
//!
//! // Renew before the window lapses to keep holding the lease.
//! assert!(router.renew_lease("printer-1", "worker-7", Duration::from_secs(30)).await?);
//!
//! // Only the holder can release.
//! assert!(router.release_lease("printer-1", "worker-7").await?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod coordinator;
pub mod error;
pub mod metrics;
pub mod record;
pub mod router;
pub mod store;
pub mod timer;

pub use config::CoordinatorConfig;
pub use coordinator::{Coordinator, CoordinatorHandle};
pub use error::{Error, Result};
pub use record::LeaseRecord;
pub use router::{CoordinatorCache, LeaseRouter};
pub use store::LeaseStore;
pub use timer::{ExpiryNotice, ReminderScheduler, TokioReminderScheduler};

/// Commonly used types, importable as a group.
pub mod prelude {
    pub use crate::config::CoordinatorConfig;
    pub use crate::coordinator::{Coordinator, CoordinatorHandle};
    pub use crate::error::{Error, Result};
    pub use crate::record::LeaseRecord;
    pub use crate::router::LeaseRouter;
    pub use crate::store::memory::InMemoryLeaseStore;
    pub use crate::store::LeaseStore;
    pub use crate::timer::{ExpiryNotice, ReminderScheduler, TokioReminderScheduler};
    pub use lockstep_core::{RequesterId, ResourceId};
}
