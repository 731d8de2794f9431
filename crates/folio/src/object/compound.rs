//! Container access: arrays and dictionaries

use super::*;

impl Object {
    /// Number of array elements, `0` if not an array.
    pub fn array_len(&self) -> usize {
        self.as_array().map_or(0, <[Object]>::len)
    }

    /// Array element at `index`, unresolved.
    pub fn array_get(&self, index: usize) -> Option<&Object> {
        self.as_array()?.get(index)
    }

    /// Number of dictionary pairs, duplicates included; `0` if not a dictionary.
    pub fn dict_len(&self) -> usize {
        self.as_dict().map_or(0, <[(Object, Object)]>::len)
    }

    /// Value of the first pair whose key is the name `key`, unresolved.
    ///
    /// Keys are matched without resolving them.
    pub fn dict_get(&self, key: &str) -> Option<&Object> {
        self.as_dict()?
            .iter()
            .find(|(k, _)| matches!(k.payload(), Payload::Name(n) if &**n == key))
            .map(|(_, v)| v)
    }

    /// Iterate over dictionary pairs in order; empty if not a dictionary.
    pub fn dict_entries(&self) -> impl Iterator<Item = (&Object, &Object)> {
        self.as_dict()
            .unwrap_or(&[])
            .iter()
            .map(|(k, v)| (k, v))
    }
}

/// Builder for dictionaries with name keys.
///
/// Entries keep insertion order and repeated keys are kept as separate
/// pairs.
///
/// # Example
///
/// ```
/// use folio::{DictBuilder, Object};
///
/// let font = DictBuilder::new()
///     .with("Type", Object::name("Font"))
///     .with("Subtype", Object::name("Type1"))
///     .build();
///
/// assert_eq!(font.dict_len(), 2);
/// assert_eq!(font.dict_get("Subtype").map(Object::to_name), Some("Type1"));
/// ```
#[derive(Default)]
pub struct DictBuilder {
    pairs: Vec<(Object, Object)>,
}

impl DictBuilder {
    /// Start an empty dictionary
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with room for `capacity` pairs
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            pairs: Vec::with_capacity(capacity),
        }
    }

    /// Append a pair keyed by the name `key` (builder pattern)
    pub fn with(mut self, key: impl AsRef<str>, value: impl Into<Object>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a pair keyed by the name `key`
    pub fn push(&mut self, key: impl AsRef<str>, value: impl Into<Object>) {
        self.pairs.push((Object::name(key), value.into()));
    }

    /// Append a pair with an arbitrary key object
    pub fn push_pair(&mut self, key: Object, value: Object) {
        self.pairs.push((key, value));
    }

    /// Number of pairs so far
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs have been added
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Finish the dictionary
    pub fn build(self) -> Object {
        Object::dict(self.pairs)
    }
}
