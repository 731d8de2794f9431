//! Kind predicates and value extraction
//!
//! Everything here except [`Object::is_indirect`] looks through one level of
//! indirection via [`Object::resolve`] before inspecting the kind. Nothing
//! here fails: predicates answer `false` and the `to_*` accessors fall back
//! to a default on a kind mismatch. The `as_*` accessors are the strict
//! counterparts and return `None` instead.

use super::*;

impl Object {
    /// Kind after resolving one level of indirection.
    pub fn resolved_kind(&self) -> ObjectKind {
        self.resolve().kind()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if this handle is a reference. Does not resolve.
    pub fn is_indirect(&self) -> bool {
        self.kind() == ObjectKind::Reference
    }

    /// Check if value is `null`
    pub fn is_null(&self) -> bool {
        self.resolved_kind() == ObjectKind::Null
    }

    /// Check if value is a boolean
    pub fn is_bool(&self) -> bool {
        self.resolved_kind() == ObjectKind::Bool
    }

    /// Check if value is an integer
    pub fn is_int(&self) -> bool {
        self.resolved_kind() == ObjectKind::Int
    }

    /// Check if value is a real number
    pub fn is_real(&self) -> bool {
        self.resolved_kind() == ObjectKind::Real
    }

    /// Check if value is an integer or a real
    pub fn is_number(&self) -> bool {
        matches!(self.resolved_kind(), ObjectKind::Int | ObjectKind::Real)
    }

    /// Check if value is a byte string
    pub fn is_string(&self) -> bool {
        self.resolved_kind() == ObjectKind::String
    }

    /// Check if value is a name
    pub fn is_name(&self) -> bool {
        self.resolved_kind() == ObjectKind::Name
    }

    /// Check if value is an array
    pub fn is_array(&self) -> bool {
        self.resolved_kind() == ObjectKind::Array
    }

    /// Check if value is a dictionary
    pub fn is_dict(&self) -> bool {
        self.resolved_kind() == ObjectKind::Dict
    }

    // ═══════════════════════════════════════════════════════════════════
    // Strict Extractors
    // ═══════════════════════════════════════════════════════════════════

    /// Extract a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self.resolve().payload() {
            Payload::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract an integer (no conversion from reals)
    pub fn as_int(&self) -> Option<i64> {
        match self.resolve().payload() {
            Payload::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract a real (no conversion from integers)
    pub fn as_real(&self) -> Option<f64> {
        match self.resolve().payload() {
            Payload::Real(f) => Some(*f),
            _ => None,
        }
    }

    /// Extract name text
    pub fn as_name(&self) -> Option<&str> {
        match self.resolve().payload() {
            Payload::Name(n) => Some(&**n),
            _ => None,
        }
    }

    /// Extract string bytes
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self.resolve().payload() {
            Payload::String(s) => Some(&s[..]),
            _ => None,
        }
    }

    /// Extract array elements as a slice
    pub fn as_array(&self) -> Option<&[Object]> {
        match self.resolve().payload() {
            Payload::Array(items) => Some(&items[..]),
            _ => None,
        }
    }

    /// Extract dictionary pairs as a slice
    pub fn as_dict(&self) -> Option<&[(Object, Object)]> {
        match self.resolve().payload() {
            Payload::Dict(pairs) => Some(&pairs[..]),
            _ => None,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Defaulting Accessors
    // ═══════════════════════════════════════════════════════════════════

    /// Boolean value, `false` for any other kind.
    pub fn to_bool(&self) -> bool {
        self.as_bool().unwrap_or(false)
    }

    /// Integer value. Reals truncate toward zero (saturating at the `i64`
    /// bounds, NaN gives `0`); any other kind gives `0`.
    pub fn to_int(&self) -> i64 {
        match self.resolve().payload() {
            Payload::Int(i) => *i,
            Payload::Real(f) => *f as i64,
            _ => 0,
        }
    }

    /// Real value. Integers convert to the nearest `f64`, which is exact up
    /// to 2^53 in magnitude; any other kind gives `0.0`.
    pub fn to_real(&self) -> f64 {
        match self.resolve().payload() {
            Payload::Real(f) => *f,
            Payload::Int(i) => *i as f64,
            _ => 0.0,
        }
    }

    /// Name text, `""` for any other kind.
    pub fn to_name(&self) -> &str {
        self.as_name().unwrap_or("")
    }

    /// String bytes, empty for any other kind.
    pub fn to_bytes(&self) -> &[u8] {
        self.as_bytes().unwrap_or(&[])
    }

    /// String length in bytes, `0` for any other kind.
    pub fn to_string_len(&self) -> usize {
        self.to_bytes().len()
    }
}
