//! Ordered name/value tables.

use rustc_hash::FxHashMap;

use super::Value;

/// The bindings of one scope.
///
/// Names are unique. Iteration follows first-definition order, which is the
/// order `env` reports; redefining a name replaces its value in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Value)>,
    /// Name -> position in `entries`.
    index: FxHashMap<String, usize>,
}

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the value bound to `name` in this table only.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    /// Bind `name` to `value`, replacing any existing binding.
    pub fn put(&mut self, name: &str, value: Value) {
        if let Some(&slot) = self.index.get(name) {
            self.entries[slot].1 = value;
            return;
        }
        self.index.insert(name.to_owned(), self.entries.len());
        self.entries.push((name.to_owned(), value));
    }

    /// Iterate over `(name, value)` pairs in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }
}
