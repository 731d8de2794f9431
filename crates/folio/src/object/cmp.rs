//! Structural equality between objects

use super::*;

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

/// Deep equality.
///
/// Containers compare position by position, so two dictionaries holding
/// the same pairs in a different order are unequal. References compare by
/// store coordinates only and are never resolved, so comparison performs no
/// store lookups.
impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        if self.ptr_eq(other) {
            return true;
        }

        match (self.payload(), other.payload()) {
            (Payload::Null, Payload::Null) => true,
            (Payload::Bool(a), Payload::Bool(b)) => a == b,
            (Payload::Int(a), Payload::Int(b)) => a == b,

            // Exact comparison; NaN never equals a distinct handle
            (Payload::Real(a), Payload::Real(b)) => a == b,

            (Payload::String(a), Payload::String(b)) => a == b,
            (Payload::Name(a), Payload::Name(b)) => a == b,

            // Coordinates only, whichever store each one points at
            (Payload::Reference(a), Payload::Reference(b)) => a.id() == b.id(),

            // Slice equality checks the length first, then short-circuits
            (Payload::Array(a), Payload::Array(b)) => a == b,
            (Payload::Dict(a), Payload::Dict(b)) => a == b,

            // Different kinds are never equal
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_handle_is_equal() {
        let nan = Object::real(f64::NAN);
        assert_eq!(nan, nan.clone());
        assert_ne!(nan, Object::real(f64::NAN));
    }

    #[test]
    fn test_primitives() {
        assert_eq!(Object::null(), Object::null());
        assert_eq!(Object::bool(true), Object::bool(true));
        assert_ne!(Object::bool(true), Object::bool(false));
        assert_eq!(Object::int(42), Object::int(42));
        assert_ne!(Object::int(42), Object::int(43));
    }

    #[test]
    fn test_reals_compare_exactly() {
        assert_eq!(Object::real(1.5), Object::real(1.5));
        assert_ne!(Object::real(1.5), Object::real(1.25));
        assert_ne!(Object::real(0.1), Object::real(0.3));
    }

    #[test]
    fn test_kinds_do_not_mix() {
        assert_ne!(Object::int(1), Object::real(1.0));
        assert_ne!(Object::name("a"), Object::string("a"));
        assert_ne!(Object::null(), Object::bool(false));
    }

    #[test]
    fn test_strings_compare_length_and_bytes() {
        assert_eq!(Object::string(b"a\0b"), Object::string(b"a\0b"));
        assert_ne!(Object::string(b"a\0"), Object::string(b"a"));
        assert_ne!(Object::string(b"ab"), Object::string(b"ac"));
    }

    #[test]
    fn test_references_compare_by_coordinates() {
        let a = Object::reference(ObjectId::new(3, 0));
        let b = Object::reference(ObjectId::new(3, 0));
        let c = Object::reference(ObjectId::new(3, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_arrays_are_positional() {
        let a = Object::array(vec![Object::int(1), Object::int(2)]);
        let b = Object::array(vec![Object::int(1), Object::int(2)]);
        let c = Object::array(vec![Object::int(2), Object::int(1)]);
        let d = Object::array(vec![Object::int(1)]);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
    }

    #[test]
    fn test_dicts_are_positional() {
        let ab = Object::dict(vec![
            (Object::name("a"), Object::int(1)),
            (Object::name("b"), Object::int(2)),
        ]);
        let ab2 = Object::dict(vec![
            (Object::name("a"), Object::int(1)),
            (Object::name("b"), Object::int(2)),
        ]);
        let ba = Object::dict(vec![
            (Object::name("b"), Object::int(2)),
            (Object::name("a"), Object::int(1)),
        ]);
        assert_eq!(ab, ab2);
        assert_ne!(ab, ba);
    }
}
