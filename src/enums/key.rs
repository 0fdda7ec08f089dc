//! # Key Module
//!
//! Dynamically shaped keys and payloads for [`ListV::select`](crate::ListV::select)
//! and [`ListV::assign`](crate::ListV::assign).

use crate::structs::slice_spec::SliceSpec;

/// A view-local key: a single index, or a slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKey {
    Index(isize),
    Slice(SliceSpec),
}

/// Result of reading through a [`ViewKey`].
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<T> {
    Item(T),
    Items(Vec<T>),
}

/// Payload written through a [`ViewKey`].
///
/// `Item` pairs with an index key and `Items` with a slice key. Any other
/// pairing is rejected with `ViewError::UnsupportedKey`.
#[derive(Debug, Clone, PartialEq)]
pub enum Assignment<T> {
    Item(T),
    Items(Vec<T>),
}

impl ViewKey {
    /// Human-readable key shape, used in error messages.
    #[inline]
    pub fn shape_name(&self) -> &'static str {
        match self {
            ViewKey::Index(_) => "an index",
            ViewKey::Slice(_) => "a slice",
        }
    }
}

impl<T> Selection<T> {
    /// Returns the single item, if the selection came from an index key.
    pub fn into_item(self) -> Option<T> {
        match self {
            Selection::Item(item) => Some(item),
            Selection::Items(_) => None,
        }
    }

    /// Returns the items as a vector; a single item becomes a one-element vector.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Selection::Item(item) => vec![item],
            Selection::Items(items) => items,
        }
    }
}

impl<T> Assignment<T> {
    #[inline]
    pub fn shape_name(&self) -> &'static str {
        match self {
            Assignment::Item(_) => "a single value",
            Assignment::Items(_) => "a sequence of values",
        }
    }
}

impl<T> From<Vec<T>> for Assignment<T> {
    fn from(values: Vec<T>) -> Self {
        Assignment::Items(values)
    }
}
