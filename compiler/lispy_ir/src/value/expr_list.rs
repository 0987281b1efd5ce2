//! The owned cell sequence behind S- and Q-expressions.

use std::slice;
use std::vec;

use super::Value;

/// An ordered, exclusively-owned sequence of values.
///
/// Stored densely; `append` is amortized O(1), `prepend` and `remove_at`
/// shift the remaining cells. Removal always moves the element out to the
/// caller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExprList {
    cells: Vec<Value>,
}

impl ExprList {
    /// Create an empty list.
    #[inline]
    pub fn new() -> Self {
        ExprList { cells: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.cells.get(index)
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.cells.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Value> {
        self.cells.iter_mut()
    }

    /// Move `value` onto the end of the list.
    #[inline]
    pub fn append(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Builder form of [`append`](Self::append).
    #[inline]
    #[must_use]
    pub fn with(mut self, value: Value) -> Self {
        self.append(value);
        self
    }

    /// Move `value` into slot 0, shifting everything else right.
    #[inline]
    pub fn prepend(&mut self, value: Value) {
        self.cells.insert(0, value);
    }

    /// Remove and return the element at `index`, compacting the rest.
    ///
    /// Returns `None` if `index` is out of range; callers check counts first.
    #[inline]
    pub fn remove_at(&mut self, index: usize) -> Option<Value> {
        if index < self.cells.len() {
            Some(self.cells.remove(index))
        } else {
            None
        }
    }

    /// Extract the element at `index` and discard the rest of the list.
    #[inline]
    pub fn take_at(mut self, index: usize) -> Option<Value> {
        self.remove_at(index)
    }

    /// Move every element of `src` onto the end of `self`, in order.
    #[inline]
    pub fn concatenate_into(&mut self, src: ExprList) {
        self.cells.extend(src.cells);
    }

    /// Drop everything past the first `len` elements.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.cells.truncate(len);
    }

    /// Index of the first `Error` cell, if any.
    pub fn position_of_error(&self) -> Option<usize> {
        self.cells.iter().position(Value::is_error)
    }
}

impl From<Vec<Value>> for ExprList {
    fn from(cells: Vec<Value>) -> Self {
        ExprList { cells }
    }
}

impl FromIterator<Value> for ExprList {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        ExprList {
            cells: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ExprList {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExprList {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}
