//! Object representation for document graphs

mod access;
mod cmp;
mod compound;
mod display;
mod impls;
pub mod refs;

pub use compound::DictBuilder;
pub use refs::{ObjectId, Reference, ResolutionState};

use std::fmt;
use std::rc::{Rc, Weak};

/// The kind tag of an [`Object`].
///
/// A kind is fixed at construction and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// The `null` object
    Null,
    /// `true` or `false`
    Bool,
    /// Signed integer
    Int,
    /// Floating-point number
    Real,
    /// Byte string of explicit length
    String,
    /// Name identifier (`/Type`)
    Name,
    /// Ordered sequence of objects
    Array,
    /// Ordered sequence of key/value pairs
    Dict,
    /// Indirect reference into an object store
    Reference,
}

impl ObjectKind {
    /// Human-readable name of the kind.
    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::Null => "null",
            ObjectKind::Bool => "boolean",
            ObjectKind::Int => "integer",
            ObjectKind::Real => "real",
            ObjectKind::String => "string",
            ObjectKind::Name => "name",
            ObjectKind::Array => "array",
            ObjectKind::Dict => "dictionary",
            ObjectKind::Reference => "reference",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Payload carried by an object, one variant per kind.
///
/// Variable-length payloads are boxed slices so they hold exactly the
/// storage they need. Nothing here mutates after construction except the
/// resolution cache inside [`Reference`].
pub enum Payload {
    /// `null`
    Null,

    /// Boolean
    Bool(bool),

    /// Integer
    Int(i64),

    /// Real number
    Real(f64),

    /// Byte string; may contain zero bytes
    String(Box<[u8]>),

    /// Name, stored without the leading slash
    Name(Box<str>),

    /// Array elements, each a shared handle
    Array(Box<[Object]>),

    /// Dictionary pairs in insertion order; duplicate keys are kept
    Dict(Box<[(Object, Object)]>),

    /// Indirect reference
    Reference(Reference),
}

impl Payload {
    /// The kind tag of this payload.
    pub fn kind(&self) -> ObjectKind {
        match self {
            Payload::Null => ObjectKind::Null,
            Payload::Bool(_) => ObjectKind::Bool,
            Payload::Int(_) => ObjectKind::Int,
            Payload::Real(_) => ObjectKind::Real,
            Payload::String(_) => ObjectKind::String,
            Payload::Name(_) => ObjectKind::Name,
            Payload::Array(_) => ObjectKind::Array,
            Payload::Dict(_) => ObjectKind::Dict,
            Payload::Reference(_) => ObjectKind::Reference,
        }
    }
}

/// A shared handle to a single document object.
///
/// Cloning a handle shares the object and bumps its reference count;
/// dropping the last handle destroys the object and releases every child
/// handle it holds (array elements, dictionary pairs, a resolved reference
/// target).
///
/// # Nesting depth
///
/// Destruction, [`PartialEq`] and [`Debug`](fmt::Debug) walk nested arrays
/// and dictionaries recursively, one stack frame per level. Callers that
/// build objects from untrusted input must cap nesting depth themselves;
/// a chain tens of thousands of levels deep can overflow the stack.
///
/// # Example
///
/// ```
/// use folio::Object;
///
/// let page = Object::dict(vec![
///     (Object::name("Type"), Object::name("Page")),
///     (Object::name("Rotate"), Object::int(90)),
/// ]);
///
/// assert!(page.is_dict());
/// assert_eq!(page.dict_get("Type").map(|t| t.to_name()), Some("Page"));
/// assert_eq!(page.dict_get("Rotate").map(|r| r.to_int()), Some(90));
/// ```
#[derive(Clone)]
pub struct Object(Rc<Payload>);

impl Object {
    pub(crate) fn from_payload(payload: Payload) -> Self {
        Object(Rc::new(payload))
    }

    /// The payload of this handle, without resolving references.
    pub fn payload(&self) -> &Payload {
        &self.0
    }

    /// The kind of this handle, without resolving references.
    pub fn kind(&self) -> ObjectKind {
        self.0.kind()
    }

    /// Name of this handle's own kind (a reference reports `"reference"`).
    pub fn kind_name(&self) -> &'static str {
        self.kind().name()
    }

    /// Whether both handles point at the same object.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Number of live handles sharing this object.
    pub fn ref_count(&self) -> usize {
        Rc::strong_count(&self.0)
    }

    /// Create a non-owning probe that reports whether the object is alive.
    pub fn downgrade(&self) -> WeakObject {
        WeakObject(Rc::downgrade(&self.0))
    }
}

/// A non-owning probe on an [`Object`].
///
/// Holding a `WeakObject` never keeps the object alive.
#[derive(Clone)]
pub struct WeakObject(Weak<Payload>);

impl WeakObject {
    /// Recover a handle if the object is still alive.
    pub fn upgrade(&self) -> Option<Object> {
        self.0.upgrade().map(Object)
    }

    /// Whether the object has not been destroyed yet.
    pub fn is_alive(&self) -> bool {
        self.0.strong_count() > 0
    }
}

impl fmt::Debug for WeakObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakObject")
            .field("alive", &self.is_alive())
            .finish()
    }
}

/// Kind name of a possibly absent object; `"<nil>"` when absent.
pub fn kind_name(obj: Option<&Object>) -> &'static str {
    obj.map_or("<nil>", Object::kind_name)
}
