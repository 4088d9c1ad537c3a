//! Validated identifiers for Lockstep entities.
//!
//! Resource and requester ids are caller-supplied strings, but they are
//! never allowed to be empty or whitespace-only: an empty holder id is
//! indistinguishable from "unlocked" in the persisted record, so it is
//! rejected at the type boundary instead of checked ad hoc at every call
//! site.
//!
//! # Example
//!
//! ```rust
//! use lockstep_core::id::{RequesterId, ResourceId};
//!
//! let resource = ResourceId::new("printer-1").unwrap();
//! let requester = RequesterId::new("worker-7").unwrap();
//!
//! // Holder identity comparison is case-insensitive.
//! let shouty = RequesterId::new("WORKER-7").unwrap();
//! assert!(requester.matches(&shouty));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// A unique identifier for a protected resource.
///
/// The resource id names the thing a lease guards (a printer, a partition,
/// a singleton job). It is immutable for the lifetime of the resource and
/// is the key every coordinator, store entry, and timer is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// Creates a new resource id after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_id("resource id cannot be empty"));
        }
        Ok(Self(id))
    }

    /// Returns the resource id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of a caller competing for a lease.
///
/// Two requester ids that differ only in ASCII case are the same holder;
/// [`RequesterId::matches`] is the comparison every ownership check must
/// use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequesterId(String);

impl RequesterId {
    /// Creates a new requester id after validating it.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(Error::invalid_id("requester id cannot be empty"));
        }
        Ok(Self(id))
    }

    /// Returns the requester id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns whether two requester ids name the same holder.
    ///
    /// Comparison is case-insensitive: `"Worker-7"` and `"worker-7"` are
    /// the same identity.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for RequesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_id_accepts_normal_names() {
        let id = ResourceId::new("printer-1").unwrap();
        assert_eq!(id.as_str(), "printer-1");
        assert_eq!(id.to_string(), "printer-1");
    }

    #[test]
    fn resource_id_rejects_empty() {
        assert!(ResourceId::new("").is_err());
        assert!(ResourceId::new("   ").is_err());
        assert!(ResourceId::new("\t\n").is_err());
    }

    #[test]
    fn requester_id_rejects_empty() {
        assert!(RequesterId::new("").is_err());
        assert!(RequesterId::new(" ").is_err());
    }

    #[test]
    fn requester_match_is_case_insensitive() {
        let lower = RequesterId::new("worker-7").unwrap();
        let mixed = RequesterId::new("Worker-7").unwrap();
        let other = RequesterId::new("worker-8").unwrap();

        assert!(lower.matches(&mixed));
        assert!(mixed.matches(&lower));
        assert!(!lower.matches(&other));
    }

    #[test]
    fn ids_serialize_transparently() {
        let id = ResourceId::new("printer-1").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"printer-1\"");

        let back: ResourceId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
