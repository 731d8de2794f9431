//! # Folio
//!
//! The in-memory object model for PDF-style document graphs.
//!
//! Every value in a document (numbers, strings, names, arrays,
//! dictionaries and indirect references) is an [`Object`]: a cheap,
//! reference-counted handle to an immutable payload. Parsers build objects,
//! content interpreters and renderers read them.
//!
//! ## Architecture
//!
//! - **Variant core**: [`Object`], [`Payload`], [`ObjectKind`]
//! - **Introspection**: `is_*` predicates, strict `as_*` and defaulting
//!   `to_*` accessors, all looking through one level of indirection
//! - **Resolution**: [`Object::resolve`] loads a reference's target from an
//!   [`ObjectStore`] at most once and caches the outcome
//! - **Comparison**: structural `PartialEq` that never resolves references
//!
//! ## Example
//!
//! ```
//! use std::rc::Rc;
//! use folio::{MemoryStore, Object, ObjectId, ObjectStore};
//!
//! let store: Rc<dyn ObjectStore> = Rc::new(MemoryStore::with_entries([(
//!     ObjectId::new(7, 0),
//!     Object::int(612),
//! )]));
//!
//! let width = Object::reference_in(ObjectId::new(7, 0), &store);
//! assert!(width.is_int());
//! assert_eq!(width.to_int(), 612);
//! assert_eq!(width.object_number(), 7);
//! ```
//!
//! Objects are single-threaded (`!Send`, `!Sync`); share them across
//! threads only through your own synchronization around whole graphs.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod object;
pub mod store;

// Re-export main types
pub use error::{ObjectError, Result, StoreError, StoreResult};
pub use object::{
    kind_name, DictBuilder, Object, ObjectId, ObjectKind, Payload, Reference, ResolutionState,
    WeakObject,
};
pub use store::{MemoryStore, ObjectStore};

/// Folio version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
