//! Indirect references and their lazy resolution

use std::cell::{Cell, OnceCell};
use std::fmt;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use super::{Object, Payload};
use crate::store::ObjectStore;

/// Store coordinates of an indirect object: object number and generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ObjectId {
    /// Object number
    pub num: u32,
    /// Generation number
    pub gen: u16,
}

impl ObjectId {
    /// Create an id from its object and generation numbers.
    pub const fn new(num: u32, gen: u16) -> Self {
        Self { num, gen }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} R", self.num, self.gen)
    }
}

/// Where a reference stands in its resolution lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionState {
    /// No lookup has completed yet (or there is no store to ask)
    Unresolved,
    /// The store produced a target, now cached
    Resolved,
    /// The lookup failed; the reference is inert from now on
    Failed,
}

/// Terminal outcome of the single store lookup.
enum Target {
    Resolved(Object),
    Failed,
}

impl Target {
    fn object(&self) -> Option<&Object> {
        match self {
            Target::Resolved(obj) => Some(obj),
            Target::Failed => None,
        }
    }
}

/// Payload of a [`Reference`](super::ObjectKind::Reference) object.
///
/// The store link is weak: a reference never keeps its store alive. The
/// cache is written at most once, so the store is asked at most once per
/// reference instance whatever the outcome.
pub struct Reference {
    id: ObjectId,
    store: Option<Weak<dyn ObjectStore>>,
    cache: OnceCell<Target>,
    // Set while the store lookup is running.
    loading: Cell<bool>,
}

impl Reference {
    pub(crate) fn unbound(id: ObjectId) -> Self {
        Self {
            id,
            store: None,
            cache: OnceCell::new(),
            loading: Cell::new(false),
        }
    }

    pub(crate) fn bound(id: ObjectId, store: &Rc<dyn ObjectStore>) -> Self {
        Self {
            store: Some(Rc::downgrade(store)),
            ..Self::unbound(id)
        }
    }

    /// Store coordinates of the target.
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Whether this reference was built with a store link.
    pub fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Current resolution state, without triggering a lookup.
    pub fn state(&self) -> ResolutionState {
        match self.cache.get() {
            None => ResolutionState::Unresolved,
            Some(Target::Resolved(_)) => ResolutionState::Resolved,
            Some(Target::Failed) => ResolutionState::Failed,
        }
    }

    /// The cached target, without triggering a lookup.
    pub fn cached(&self) -> Option<&Object> {
        self.cache.get().and_then(Target::object)
    }

    /// Resolve one hop, asking the store on first use.
    ///
    /// `owner` is the handle carrying this payload. A store answer that is
    /// `owner` itself is recorded as a failure and not cached, so a
    /// reference never holds a handle to itself.
    ///
    /// Returns `None` when the reference is inert: no store, store gone,
    /// lookup failed, or a lookup for this same reference is still running.
    pub(crate) fn target(&self, owner: &Object) -> Option<&Object> {
        if let Some(target) = self.cache.get() {
            return target.object();
        }
        if self.loading.get() {
            debug!(num = self.id.num, gen = self.id.gen, "reference re-entered while loading");
            return None;
        }
        let store = match self.store.as_ref()?.upgrade() {
            Some(store) => store,
            None => {
                debug!(num = self.id.num, gen = self.id.gen, "reference store has been dropped");
                return None;
            }
        };

        let outcome = {
            let _guard = LoadingGuard::enter(&self.loading);
            store.load_object(self.id)
        };

        let target = match outcome {
            Ok(obj) if obj.ptr_eq(owner) => {
                warn!(num = self.id.num, gen = self.id.gen, "reference resolves to itself; ignoring");
                Target::Failed
            }
            Ok(obj) => {
                trace!(num = self.id.num, gen = self.id.gen, kind = %obj.kind(), "resolved reference");
                Target::Resolved(obj)
            }
            Err(error) => {
                warn!(
                    num = self.id.num,
                    gen = self.id.gen,
                    %error,
                    "cannot resolve reference; ignoring error"
                );
                Target::Failed
            }
        };
        self.cache.get_or_init(|| target).object()
    }
}

/// Holds the `loading` flag up until dropped, including during unwinding.
struct LoadingGuard<'a>(&'a Cell<bool>);

impl<'a> LoadingGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl fmt::Debug for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reference")
            .field("id", &self.id)
            .field("has_store", &self.has_store())
            .field("state", &self.state())
            .finish()
    }
}

impl Object {
    /// The single resolution gate.
    ///
    /// A reference yields its target after at most one store lookup; the
    /// target is returned as-is even when it is itself a reference. An
    /// inert reference yields itself. Any other kind yields `self`.
    pub fn resolve(&self) -> &Object {
        match self.payload() {
            Payload::Reference(r) => r.target(self).unwrap_or(self),
            _ => self,
        }
    }

    /// The reference payload of this handle, without resolving.
    pub fn as_reference(&self) -> Option<&Reference> {
        match self.payload() {
            Payload::Reference(r) => Some(r),
            _ => None,
        }
    }

    /// Store coordinates of this handle; `None` unless it is a reference.
    pub fn id(&self) -> Option<ObjectId> {
        self.as_reference().map(Reference::id)
    }

    /// Object number of a reference, `0` for any other kind. Never resolves.
    pub fn object_number(&self) -> u32 {
        self.id().map_or(0, |id| id.num)
    }

    /// Generation number of a reference, `0` for any other kind. Never resolves.
    pub fn generation(&self) -> u16 {
        self.id().map_or(0, |id| id.gen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, StoreResult};
    use crate::object::ObjectKind;

    struct CountingStore {
        calls: Cell<usize>,
        answer: Option<i64>,
    }

    impl ObjectStore for CountingStore {
        fn load_object(&self, id: ObjectId) -> StoreResult<Object> {
            self.calls.set(self.calls.get() + 1);
            match self.answer {
                Some(n) => Ok(Object::int(n)),
                None => Err(StoreError::NotFound(id)),
            }
        }
    }

    fn store(answer: Option<i64>) -> (Rc<CountingStore>, Rc<dyn ObjectStore>) {
        let concrete = Rc::new(CountingStore {
            calls: Cell::new(0),
            answer,
        });
        let dynamic: Rc<dyn ObjectStore> = concrete.clone();
        (concrete, dynamic)
    }

    #[test]
    fn test_object_id_display() {
        assert_eq!(ObjectId::new(3, 0).to_string(), "3 0 R");
        assert_eq!(ObjectId::new(17, 2).to_string(), "17 2 R");
    }

    #[test]
    fn test_unbound_reference_is_inert() {
        let r = Object::reference(ObjectId::new(5, 0));
        assert!(r.resolve().ptr_eq(&r));
        let payload = r.as_reference().unwrap();
        assert!(!payload.has_store());
        assert_eq!(payload.state(), ResolutionState::Unresolved);
    }

    #[test]
    fn test_resolves_once() {
        let (counter, store) = store(Some(42));
        let r = Object::reference_in(ObjectId::new(1, 0), &store);

        assert_eq!(r.resolve().kind(), ObjectKind::Int);
        assert_eq!(r.resolve().kind(), ObjectKind::Int);
        assert_eq!(counter.calls.get(), 1);
        assert_eq!(
            r.as_reference().unwrap().state(),
            ResolutionState::Resolved
        );
    }

    #[test]
    fn test_failure_is_cached() {
        let (counter, store) = store(None);
        let r = Object::reference_in(ObjectId::new(1, 0), &store);

        assert!(r.resolve().ptr_eq(&r));
        assert!(r.resolve().ptr_eq(&r));
        assert_eq!(counter.calls.get(), 1);

        let payload = r.as_reference().unwrap();
        assert_eq!(payload.state(), ResolutionState::Failed);
        assert!(payload.cached().is_none());
        // No self-handle is stored for the failed state.
        assert_eq!(r.ref_count(), 1);
    }

    #[test]
    fn test_dropped_store_leaves_reference_unresolved() {
        let (counter, store) = store(Some(1));
        let r = Object::reference_in(ObjectId::new(2, 0), &store);
        drop(store);
        drop(counter);

        assert!(r.resolve().ptr_eq(&r));
        assert_eq!(
            r.as_reference().unwrap().state(),
            ResolutionState::Unresolved
        );
    }

    #[test]
    fn test_numbers_are_read_without_resolving() {
        let (counter, store) = store(Some(1));
        let r = Object::reference_in(ObjectId::new(8, 3), &store);
        assert_eq!(r.object_number(), 8);
        assert_eq!(r.generation(), 3);
        assert_eq!(counter.calls.get(), 0);

        assert_eq!(Object::int(8).object_number(), 0);
        assert_eq!(Object::int(8).generation(), 0);
        assert_eq!(Object::null().id(), None);
    }
}
