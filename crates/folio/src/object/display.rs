//! Debug formatting for objects
//!
//! Renders a compact, PDF-like view for diagnostics and test output. It is
//! not a serializer: strings are shown escaped Rust-style and references are
//! never resolved.

use std::fmt;

use super::*;

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.payload() {
            Payload::Null => write!(f, "null"),
            Payload::Bool(b) => write!(f, "{}", b),
            Payload::Int(i) => write!(f, "{}", i),
            Payload::Real(r) => write!(f, "{:?}", r),
            Payload::String(s) => write!(f, "({})", s.escape_ascii()),
            Payload::Name(n) => write!(f, "/{}", n),

            Payload::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{:?}", item)?;
                }
                write!(f, "]")
            }

            Payload::Dict(pairs) => {
                write!(f, "<<")?;
                for (key, value) in pairs.iter() {
                    write!(f, " {:?} {:?}", key, value)?;
                }
                write!(f, " >>")
            }

            Payload::Reference(r) => write!(f, "{}", r.id()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_primitives() {
        assert_eq!(format!("{:?}", Object::null()), "null");
        assert_eq!(format!("{:?}", Object::bool(false)), "false");
        assert_eq!(format!("{:?}", Object::int(-4)), "-4");
        assert_eq!(format!("{:?}", Object::real(1.5)), "1.5");
        assert_eq!(format!("{:?}", Object::real(2.0)), "2.0");
        assert_eq!(format!("{:?}", Object::name("Type")), "/Type");
    }

    #[test]
    fn test_debug_string_escapes_bytes() {
        assert_eq!(format!("{:?}", Object::string(b"hi")), "(hi)");
        assert_eq!(format!("{:?}", Object::string(b"a\0")), "(a\\x00)");
    }

    #[test]
    fn test_debug_containers() {
        let arr = Object::array(vec![Object::int(1), Object::name("N")]);
        assert_eq!(format!("{:?}", arr), "[1 /N]");
        assert_eq!(format!("{:?}", Object::array(vec![])), "[]");

        let dict = Object::dict(vec![(Object::name("Count"), Object::int(3))]);
        assert_eq!(format!("{:?}", dict), "<< /Count 3 >>");
        assert_eq!(format!("{:?}", Object::dict(vec![])), "<< >>");
    }

    #[test]
    fn test_debug_reference_is_not_resolved() {
        let r = Object::reference(ObjectId::new(12, 0));
        assert_eq!(format!("{:?}", r), "12 0 R");
    }
}
