//! Error types for the lease coordination domain.
//!
//! Contention is not an error: a lease held by someone else is signaled by
//! a `false` return from the operation, never by a fault. The error enum
//! covers the remaining classes: invalid input (never retried, no state
//! mutation), transient infrastructure faults (retried internally with a
//! bounded attempt count), and unexpected faults (logged and propagated).

/// The result type used throughout `lockstep-lease`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lease operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed input: empty/missing identifiers or a non-positive lease
    /// interval. Surfaced immediately; no state mutation occurs.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of what made the input invalid.
        message: String,
    },

    /// A collaborator (store or timer substrate) is briefly unavailable.
    ///
    /// This is the retryable fault class: coordinators retry it internally
    /// with a bounded attempt count before surfacing it.
    #[error("{subsystem} unavailable: {message}")]
    Unavailable {
        /// The collaborator that was unavailable ("store" or "scheduler").
        subsystem: &'static str,
        /// Description of the fault.
        message: String,
    },

    /// A storage operation failed in a non-transient way.
    #[error("storage error: {message}")]
    Storage {
        /// Description of the storage failure.
        message: String,
        /// The underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The coordinator task for a resource is no longer running.
    #[error("coordinator stopped for resource {resource_id}")]
    CoordinatorStopped {
        /// The resource whose coordinator is gone.
        resource_id: String,
    },

    /// An internal error occurred that should not happen in normal operation.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal error.
        message: String,
    },
}

impl Error {
    /// Creates a new invalid-argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a new transient-unavailability error for a subsystem.
    #[must_use]
    pub fn unavailable(subsystem: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            subsystem,
            message: message.into(),
        }
    }

    /// Creates a new storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new storage error with a source.
    #[must_use]
    pub fn storage_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns whether this error belongs to the transient fault class
    /// that coordinators retry internally.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

impl From<lockstep_core::Error> for Error {
    fn from(error: lockstep_core::Error) -> Self {
        match error {
            lockstep_core::Error::InvalidId { message } => Self::InvalidArgument { message },
            lockstep_core::Error::Internal { message } => Self::Internal { message },
        }
    }
}
