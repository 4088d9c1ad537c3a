//! # lockstep-core
//!
//! Core abstractions for the Lockstep lease coordination service.
//!
//! This crate provides the foundational types used across all Lockstep
//! components:
//!
//! - **Identifiers**: Validated, strongly-typed ids for resources and requesters
//! - **Error Types**: Shared error definitions and result types
//! - **Observability**: Logging initialization and span constructors
//!
//! ## Crate Boundary
//!
//! `lockstep-core` is the only crate allowed to define shared primitives.
//! Lease semantics live in `lockstep-lease`; this crate knows nothing about
//! leases, coordinators, or routing.
//!
//! ## Example
//!
//! ```rust
//! use lockstep_core::prelude::*;
//!
//! let resource = ResourceId::new("printer-1").unwrap();
//! let requester = RequesterId::new("worker-7").unwrap();
//! assert_eq!(resource.as_str(), "printer-1");
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod id;
pub mod observability;

pub use error::{Error, Result};
pub use id::{RequesterId, ResourceId};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::id::{RequesterId, ResourceId};
    pub use crate::observability::{init_logging, lease_span, LogFormat};
}
