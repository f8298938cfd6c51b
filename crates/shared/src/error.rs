//! Error types for Lattice storage operations

use thiserror::Error;

/// Errors reported by grant-graph storage backends.
///
/// Lookup operations (`get`, `grants`) never produce `NotFound`; they
/// answer with `Ok(None)` instead. Only the mutating operations treat a
/// missing name as a failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Operation referenced a name absent from the store
    #[error("entity '{name}' is not present in storage")]
    NotFound { name: String },

    /// `grant` was invoked with a non-role on the granting side
    #[error("entity '{name}' is not a role")]
    TypeMismatch { name: String },

    /// `grant` was invoked with the same entity on both sides
    #[error("role '{name}' cannot grant itself")]
    SelfGrant { name: String },

    /// `revoke` was invoked on a pair with no existing edge
    #[error("'{child}' is not granted to '{role}'")]
    GrantNotFound { role: String, child: String },

    /// The backing store failed independently of the request (poisoned lock)
    #[error("storage backend error: {message}")]
    Backend { message: String },
}

pub type Result<T> = std::result::Result<T, StorageError>;
