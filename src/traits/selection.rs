//! # **Selection Traits** - *Keys accepted by a view*
//!
//! Input types that can address positions of a [`ListV`](crate::ListV).
//!
//! ## Architecture
//! - **ViewSelector**: user-facing input types (integers, ranges, `SliceSpec`)
//!   that convert into a [`ViewKey`].
//! - Integers select a single view-local index; ranges and `SliceSpec` select
//!   a slice that is resolved against the view length at access time.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::enums::key::ViewKey;
use crate::structs::slice_spec::SliceSpec;

/// Trait for types that can specify a view-local selection.
pub trait ViewSelector {
    /// Converts this selection into a key.
    fn to_key(&self) -> ViewKey;

    /// Returns true if this selector addresses a slice rather than one index.
    fn is_slice(&self) -> bool {
        matches!(self.to_key(), ViewKey::Slice(_))
    }
}

// These allow users to pass indices and ranges when selecting through a view.
// For example: view.select(2), view.select(1..3), view.select(SliceSpec::full().with_step(-1))

macro_rules! impl_index_selector {
    ($($t:ty),*) => {
        $(
            /// Single view-local index
            impl ViewSelector for $t {
                fn to_key(&self) -> ViewKey {
                    // Indices past `isize` can never be in bounds.
                    ViewKey::Index(isize::try_from(*self).unwrap_or(isize::MAX))
                }
            }
        )*
    };
}

impl_index_selector!(isize, usize, i32, i64, u32);

macro_rules! impl_range_selector {
    ($($t:ty),*) => {
        $(
            impl ViewSelector for Range<$t> {
                fn to_key(&self) -> ViewKey {
                    ViewKey::Slice(SliceSpec::from(self.clone()))
                }
            }

            impl ViewSelector for RangeFrom<$t> {
                fn to_key(&self) -> ViewKey {
                    ViewKey::Slice(SliceSpec::from(self.clone()))
                }
            }

            impl ViewSelector for RangeTo<$t> {
                fn to_key(&self) -> ViewKey {
                    ViewKey::Slice(SliceSpec::from(*self))
                }
            }

            impl ViewSelector for RangeInclusive<$t> {
                fn to_key(&self) -> ViewKey {
                    ViewKey::Slice(SliceSpec::from(self.clone()))
                }
            }
        )*
    };
}

impl_range_selector!(isize, usize, i32, i64);

/// Whole view
impl ViewSelector for RangeFull {
    fn to_key(&self) -> ViewKey {
        ViewKey::Slice(SliceSpec::full())
    }
}

/// Explicit slice triple
impl ViewSelector for SliceSpec {
    fn to_key(&self) -> ViewKey {
        ViewKey::Slice(*self)
    }
}

/// Already-built key
impl ViewSelector for ViewKey {
    fn to_key(&self) -> ViewKey {
        *self
    }
}
