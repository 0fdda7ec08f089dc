//! # Export Operations
//!
//! Materialise the viewed elements into an independent `Vec`.
//!
//! - [`to_list`](ListV::to_list) is shallow: it uses `Clone`, so elements that
//!   are shared handles (`Rc<RefCell<_>>`, `Arc<_>`) keep pointing at the same
//!   storage as the source.
//! - [`deep_copy`](ListV::deep_copy) uses [`DeepCopy`], so nothing in the
//!   result is shared with the source at any depth.

use crate::enums::error::Result;
use crate::structs::views::list_view::ListV;
use crate::traits::deep_copy::DeepCopy;
use crate::traits::source::Source;

impl<'a, S: Source + ?Sized> ListV<'a, S> {
    /// Shallow snapshot of the viewed elements.
    #[inline]
    pub fn to_list(&self) -> Result<Vec<S::Item>>
    where
        S::Item: Clone,
    {
        self.read_positions(&self.descriptor().as_source_slice())
    }

    /// Recursive copy of the viewed elements.
    pub fn deep_copy(&self) -> Result<Vec<S::Item>>
    where
        S::Item: DeepCopy,
    {
        self.map(DeepCopy::deep_copy)
    }
}
