//! Object constructors, lifetime operations, and From conversions

use std::rc::Rc;

use super::*;
use crate::error::{ObjectError, Result};
use crate::store::ObjectStore;

// ═══════════════════════════════════════════════════════════════════
// Constructors
// ═══════════════════════════════════════════════════════════════════

impl Object {
    /// Create the `null` object
    pub fn null() -> Self {
        Object::from_payload(Payload::Null)
    }

    /// Create a boolean
    pub fn bool(b: bool) -> Self {
        Object::from_payload(Payload::Bool(b))
    }

    /// Create an integer
    pub fn int(i: i64) -> Self {
        Object::from_payload(Payload::Int(i))
    }

    /// Create a real number
    pub fn real(f: f64) -> Self {
        Object::from_payload(Payload::Real(f))
    }

    /// Create a byte string. The bytes are copied and may contain zeros.
    pub fn string(bytes: impl AsRef<[u8]>) -> Self {
        Object::from_payload(Payload::String(bytes.as_ref().into()))
    }

    /// Create a name from its text, without the leading slash
    pub fn name(name: impl AsRef<str>) -> Self {
        Object::from_payload(Payload::Name(name.as_ref().into()))
    }

    /// Create an array that takes ownership of the element handles
    pub fn array(items: Vec<Object>) -> Self {
        Object::from_payload(Payload::Array(items.into_boxed_slice()))
    }

    /// Create a dictionary from ordered key/value pairs.
    ///
    /// Keys are not deduplicated.
    pub fn dict(pairs: Vec<(Object, Object)>) -> Self {
        Object::from_payload(Payload::Dict(pairs.into_boxed_slice()))
    }

    /// Create a standalone reference with no store behind it.
    ///
    /// It never resolves and dereferences to itself.
    pub fn reference(id: ObjectId) -> Self {
        Object::from_payload(Payload::Reference(Reference::unbound(id)))
    }

    /// Create a reference resolved lazily against `store`.
    ///
    /// The reference keeps only a weak link to the store.
    pub fn reference_in(id: ObjectId, store: &Rc<dyn ObjectStore>) -> Self {
        Object::from_payload(Payload::Reference(Reference::bound(id, store)))
    }

    /// Create a byte string, reporting allocation failure instead of aborting.
    pub fn try_string(bytes: &[u8]) -> Result<Self> {
        let mut buf = Vec::new();
        buf.try_reserve_exact(bytes.len())
            .map_err(|_| ObjectError::OutOfMemory {
                kind: ObjectKind::String,
                requested: bytes.len(),
            })?;
        buf.extend_from_slice(bytes);
        Ok(Object::from_payload(Payload::String(buf.into_boxed_slice())))
    }

    /// Create a name, reporting allocation failure instead of aborting.
    pub fn try_name(name: &str) -> Result<Self> {
        let mut buf = String::new();
        buf.try_reserve_exact(name.len())
            .map_err(|_| ObjectError::OutOfMemory {
                kind: ObjectKind::Name,
                requested: name.len(),
            })?;
        buf.push_str(name);
        Ok(Object::from_payload(Payload::Name(buf.into_boxed_str())))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Lifetime
    // ═══════════════════════════════════════════════════════════════════

    /// Take another shared handle to this object.
    pub fn retain(&self) -> Object {
        self.clone()
    }

    /// Give up this handle.
    ///
    /// When it was the last one, the object is destroyed and its children
    /// are released depth-first.
    pub fn release(self) {
        drop(self)
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<bool> for Object {
    fn from(b: bool) -> Self {
        Object::bool(b)
    }
}

impl From<i32> for Object {
    fn from(n: i32) -> Self {
        Object::int(n.into())
    }
}

impl From<i64> for Object {
    fn from(n: i64) -> Self {
        Object::int(n)
    }
}

impl From<f32> for Object {
    fn from(n: f32) -> Self {
        Object::real(n.into())
    }
}

impl From<f64> for Object {
    fn from(n: f64) -> Self {
        Object::real(n)
    }
}

impl From<Vec<u8>> for Object {
    fn from(bytes: Vec<u8>) -> Self {
        Object::from_payload(Payload::String(bytes.into_boxed_slice()))
    }
}

impl From<Vec<Object>> for Object {
    fn from(items: Vec<Object>) -> Self {
        Object::array(items)
    }
}

impl From<ObjectId> for Object {
    fn from(id: ObjectId) -> Self {
        Object::reference(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_object_has_one_owner() {
        let objs = [
            Object::null(),
            Object::bool(false),
            Object::int(-3),
            Object::real(0.5),
            Object::string(b"abc"),
            Object::name("Font"),
            Object::array(vec![Object::int(1)]),
            Object::dict(vec![(Object::name("K"), Object::null())]),
            Object::reference(ObjectId::new(4, 0)),
        ];
        for obj in &objs {
            assert_eq!(obj.ref_count(), 1, "{} should start at 1", obj.kind());
        }
    }

    #[test]
    fn test_string_keeps_embedded_zeros() {
        let s = Object::string(b"a\0b\0");
        match s.payload() {
            Payload::String(bytes) => assert_eq!(&bytes[..], b"a\0b\0"),
            _ => panic!("Expected String"),
        }
    }

    #[test]
    fn test_try_constructors() {
        let s = Object::try_string(b"hello").unwrap();
        assert_eq!(s.kind(), ObjectKind::String);

        let n = Object::try_name("Pages").unwrap();
        match n.payload() {
            Payload::Name(text) => assert_eq!(&**text, "Pages"),
            _ => panic!("Expected Name"),
        }
    }

    #[test]
    fn test_retain_release_balance() {
        let obj = Object::int(9);
        let extra = obj.retain();
        assert_eq!(obj.ref_count(), 2);
        assert!(extra.ptr_eq(&obj));

        extra.release();
        assert_eq!(obj.ref_count(), 1);
    }

    #[test]
    fn test_container_holds_child_handles() {
        let child = Object::name("Leaf");
        let arr = Object::array(vec![child.retain(), child.retain()]);
        assert_eq!(child.ref_count(), 3);

        arr.release();
        assert_eq!(child.ref_count(), 1);
    }

    #[test]
    fn test_dict_release_drops_keys_and_values() {
        let key = Object::name("Kids");
        let value = Object::array(vec![]);
        let dict = Object::dict(vec![(key.retain(), value.retain())]);
        assert_eq!(key.ref_count(), 2);
        assert_eq!(value.ref_count(), 2);

        drop(dict);
        assert_eq!(key.ref_count(), 1);
        assert_eq!(value.ref_count(), 1);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Object::from(true).kind(), ObjectKind::Bool);
        assert_eq!(Object::from(7i32).kind(), ObjectKind::Int);
        assert_eq!(Object::from(7i64).kind(), ObjectKind::Int);
        assert_eq!(Object::from(1.5f32).kind(), ObjectKind::Real);
        assert_eq!(Object::from(1.5f64).kind(), ObjectKind::Real);
        assert_eq!(Object::from(vec![1u8, 2]).kind(), ObjectKind::String);
        assert_eq!(Object::from(vec![Object::null()]).kind(), ObjectKind::Array);
        assert_eq!(Object::from(ObjectId::new(1, 0)).kind(), ObjectKind::Reference);
    }
}
