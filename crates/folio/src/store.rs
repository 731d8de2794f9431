//! Object stores that indirect references resolve against.
//!
//! A store maps [`ObjectId`]s to decoded objects. The document parser's
//! cross-reference table is the production implementation; [`MemoryStore`]
//! is a `HashMap`-backed store for tests and for documents built in memory.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::{StoreError, StoreResult};
use crate::object::{Object, ObjectId};

/// Source of indirect objects.
///
/// Implementations must satisfy these rules:
/// - A successful lookup hands the caller its own handle to the object.
/// - A failed lookup is reported as a single [`StoreError`].
/// - The object model calls `load_object` at most once per reference, so
///   implementations need no caching of their own for correctness.
pub trait ObjectStore {
    /// Load the object stored under `id`.
    fn load_object(&self, id: ObjectId) -> StoreResult<Object>;
}

/// In-memory, `HashMap`-based object store.
///
/// Interior mutability lets entries be added after references pointing at
/// the store have been handed out.
#[derive(Default)]
pub struct MemoryStore {
    objects: RefCell<HashMap<ObjectId, Object>>,
    free: RefCell<HashSet<ObjectId>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `entries`.
    pub fn with_entries(entries: impl IntoIterator<Item = (ObjectId, Object)>) -> Self {
        let store = Self::new();
        store.objects.borrow_mut().extend(entries);
        store
    }

    /// Add or replace the object under `id`, returning the previous one.
    pub fn insert(&self, id: ObjectId, obj: Object) -> Option<Object> {
        self.free.borrow_mut().remove(&id);
        self.objects.borrow_mut().insert(id, obj)
    }

    /// Mark `id` as a free entry; lookups of it fail with [`StoreError::Free`].
    pub fn mark_free(&self, id: ObjectId) -> Option<Object> {
        self.free.borrow_mut().insert(id);
        self.objects.borrow_mut().remove(&id)
    }

    /// Whether an object is stored under `id`.
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.borrow().contains_key(&id)
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    /// Returns `true` if no objects are stored.
    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }

    /// Sorted list of all stored ids.
    pub fn ids(&self) -> Vec<ObjectId> {
        let mut ids: Vec<ObjectId> = self.objects.borrow().keys().copied().collect();
        ids.sort();
        ids
    }
}

impl ObjectStore for MemoryStore {
    fn load_object(&self, id: ObjectId) -> StoreResult<Object> {
        if self.free.borrow().contains(&id) {
            return Err(StoreError::Free(id));
        }
        // Clone the handle out so no borrow is held if the caller resolves
        // further references back into this store.
        let found = self.objects.borrow().get(&id).cloned();
        found.ok_or(StoreError::NotFound(id))
    }
}

impl fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStore")
            .field("object_count", &self.len())
            .field("free_count", &self.free.borrow().len())
            .finish()
    }
}
