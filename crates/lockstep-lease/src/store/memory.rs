//! In-memory lease store implementation for testing.
//!
//! This module provides [`InMemoryLeaseStore`], a simple in-memory
//! implementation of the [`LeaseStore`] trait suitable for testing and
//! development.
//!
//! ## Limitations
//!
//! - **NOT suitable for production**: no durability, no replication
//! - **Single-process only**: records are not visible across process
//!   boundaries

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use lockstep_core::ResourceId;

use super::LeaseStore;
use crate::error::{Error, Result};
use crate::record::LeaseRecord;

/// In-memory lease store for testing.
///
/// Provides a thread-safe implementation of the [`LeaseStore`] trait using
/// `RwLock` for synchronization.
///
/// ## Example
///
/// ```rust
/// use lockstep_lease::store::memory::InMemoryLeaseStore;
///
/// let store = InMemoryLeaseStore::new();
/// // Use store in tests...
/// ```
#[derive(Debug, Default)]
pub struct InMemoryLeaseStore {
    records: RwLock<HashMap<String, LeaseRecord>>,
}

/// Converts a lock poison error to a storage error.
fn poison_err<T>(_: PoisonError<T>) -> Error {
    Error::storage("lease store lock poisoned")
}

impl InMemoryLeaseStore {
    /// Creates a new, empty in-memory lease store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of resources with a committed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock was poisoned.
    pub fn len(&self) -> Result<usize> {
        Ok(self.records.read().map_err(poison_err)?.len())
    }

    /// Returns whether no resource currently has a committed record.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock was poisoned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.records.read().map_err(poison_err)?.is_empty())
    }
}

#[async_trait]
impl LeaseStore for InMemoryLeaseStore {
    async fn get(&self, resource_id: &ResourceId) -> Result<Option<LeaseRecord>> {
        let records = self.records.read().map_err(poison_err)?;
        Ok(records.get(resource_id.as_str()).cloned())
    }

    async fn commit(&self, resource_id: &ResourceId, record: Option<LeaseRecord>) -> Result<()> {
        let mut records = self.records.write().map_err(poison_err)?;
        match record {
            Some(record) => {
                records.insert(resource_id.as_str().to_string(), record);
            }
            None => {
                records.remove(resource_id.as_str());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lockstep_core::RequesterId;
    use std::time::Duration;

    fn resource(id: &str) -> ResourceId {
        ResourceId::new(id).unwrap()
    }

    fn record(holder: &str) -> LeaseRecord {
        LeaseRecord::granted_now(RequesterId::new(holder).unwrap(), Duration::from_secs(30))
    }

    #[tokio::test]
    async fn get_returns_none_for_unknown_resource() -> Result<()> {
        let store = InMemoryLeaseStore::new();
        assert!(store.get(&resource("printer-1")).await?.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn commit_then_get_round_trips() -> Result<()> {
        let store = InMemoryLeaseStore::new();
        let id = resource("printer-1");

        store.commit(&id, Some(record("worker-7"))).await?;

        let stored = store.get(&id).await?.expect("record present");
        assert!(stored.held_by(&RequesterId::new("worker-7").unwrap()));
        assert_eq!(store.len()?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn commit_none_clears_the_record() -> Result<()> {
        let store = InMemoryLeaseStore::new();
        let id = resource("printer-1");

        store.commit(&id, Some(record("worker-7"))).await?;
        store.commit(&id, None).await?;

        assert!(store.get(&id).await?.is_none());
        assert!(store.is_empty()?);
        Ok(())
    }

    #[tokio::test]
    async fn resources_are_independent() -> Result<()> {
        let store = InMemoryLeaseStore::new();

        store
            .commit(&resource("printer-1"), Some(record("worker-7")))
            .await?;
        store
            .commit(&resource("printer-2"), Some(record("worker-8")))
            .await?;
        store.commit(&resource("printer-1"), None).await?;

        assert!(store.get(&resource("printer-1")).await?.is_none());
        assert!(store.get(&resource("printer-2")).await?.is_some());
        Ok(())
    }
}
