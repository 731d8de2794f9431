//! Error types for object construction and store lookups

use thiserror::Error;

use crate::object::refs::ObjectId;
use crate::object::ObjectKind;

/// Errors raised while building objects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ObjectError {
    /// The payload buffer could not be allocated
    #[error("out of memory: cannot allocate {requested} bytes for {kind} object")]
    OutOfMemory {
        /// Kind of the object being built
        kind: ObjectKind,
        /// Payload size that was requested
        requested: usize,
    },
}

/// Lookup failures reported by an [`ObjectStore`](crate::store::ObjectStore).
#[derive(Error, Debug)]
pub enum StoreError {
    /// No entry exists for the requested object.
    #[error("object not found: {0}")]
    NotFound(ObjectId),

    /// The entry exists but is marked free in the cross-reference table.
    #[error("object is free: {0}")]
    Free(ObjectId),

    /// The stored bytes could not be decoded into an object.
    #[error("cannot decode object {id}: {reason}")]
    Decode {
        /// The object being decoded
        id: ObjectId,
        /// Why decoding failed
        reason: String,
    },

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for object construction
pub type Result<T> = std::result::Result<T, ObjectError>;

/// Result alias for store lookups.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
