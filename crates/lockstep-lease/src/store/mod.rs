//! Pluggable storage for lease records.
//!
//! The [`LeaseStore`] trait defines the durable-commit collaborator the
//! coordinator writes through. Implementations must make each commit
//! atomic at record granularity: the holder, start, and interval fields
//! travel as one value, so a reader can never observe a record with only
//! some of them set.
//!
//! ## Design Principles
//!
//! - **Whole-record commits**: `commit` replaces or clears the record in
//!   one atomic write; there is no per-field mutation
//! - **No CAS required**: each resource's record is mutated only by its
//!   own coordinator, which already serializes operations per resource
//! - **Testability**: in-memory implementation for tests, a replicated
//!   state store in production

pub mod memory;

use async_trait::async_trait;

use lockstep_core::ResourceId;

use crate::error::Result;
use crate::record::LeaseRecord;

/// Storage abstraction for lease records, keyed by resource id.
///
/// Implementations must provide:
/// - Durability appropriate for the deployment (a committed record
///   survives process failure and is never read partially written)
/// - Atomicity per commit (the record is replaced or cleared as one value)
///
/// Transient unavailability should be reported as
/// [`Error::Unavailable`](crate::error::Error::Unavailable) so the
/// coordinator's bounded retry can distinguish it from permanent faults.
///
/// ## Thread Safety
///
/// All methods are `Send + Sync` to support concurrent access from many
/// coordinator tasks (for different resources).
#[async_trait]
pub trait LeaseStore: Send + Sync {
    /// Reads the lease record for a resource.
    ///
    /// Returns `None` if the resource is unlocked (no record committed, or
    /// the record was cleared by release/reclaim).
    async fn get(&self, resource_id: &ResourceId) -> Result<Option<LeaseRecord>>;

    /// Commits the lease record for a resource.
    ///
    /// `Some(record)` replaces the stored record; `None` clears it. The
    /// write must be atomic and durable before this method returns.
    async fn commit(&self, resource_id: &ResourceId, record: Option<LeaseRecord>) -> Result<()>;
}
