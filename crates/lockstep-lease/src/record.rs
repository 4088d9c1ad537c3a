//! The per-resource lease record.
//!
//! A resource's lease state is a single value: either no record (unlocked)
//! or a record holding the current holder, the start of the validity
//! window, and the granted interval. The three fields are always written
//! and cleared together, so no observer can ever see a half-set record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use lockstep_core::RequesterId;

/// Durable lease state for one resource.
///
/// Absence of a record means the resource is unlocked; the record is the
/// value committed to the [`LeaseStore`](crate::store::LeaseStore) on every
/// successful acquire or renew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaseRecord {
    /// The requester currently holding the lease.
    pub holder_id: RequesterId,

    /// When the current validity window started (last successful
    /// acquire or renew).
    pub lease_start: DateTime<Utc>,

    /// Length of the validity window granted at `lease_start`.
    pub lease_interval: Duration,
}

impl LeaseRecord {
    /// Creates a record with an explicit start time.
    #[must_use]
    pub const fn new(
        holder_id: RequesterId,
        lease_start: DateTime<Utc>,
        lease_interval: Duration,
    ) -> Self {
        Self {
            holder_id,
            lease_start,
            lease_interval,
        }
    }

    /// Creates a record whose validity window starts now.
    #[must_use]
    pub fn granted_now(holder_id: RequesterId, lease_interval: Duration) -> Self {
        Self::new(holder_id, Utc::now(), lease_interval)
    }

    /// When the lease expires.
    ///
    /// Intervals too large to represent as a timestamp saturate to the far
    /// future rather than wrapping.
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        chrono::Duration::from_std(self.lease_interval)
            .ok()
            .and_then(|interval| self.lease_start.checked_add_signed(interval))
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Returns whether the lease is expired at `now`.
    ///
    /// Expiry is strict: a lease is expired only once `now` is past
    /// `lease_start + lease_interval`, not at the boundary itself.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.lease_start)
            .to_std()
            .is_ok_and(|elapsed| elapsed > self.lease_interval)
    }

    /// Returns whether `requester` is the current holder.
    ///
    /// Holder comparison is case-insensitive.
    #[must_use]
    pub fn held_by(&self, requester: &RequesterId) -> bool {
        self.holder_id.matches(requester)
    }
}
