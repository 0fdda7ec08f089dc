//! # Concatenate Trait Module
//!
//! Merges two views over the same source into one covering window.
//!
//! ## Rules
//! 1. Both views must track the identical source container.
//! 2. Both views must share the same step.
//! 3. The merged window spans from the earliest start to the furthest stop in
//!    traversal direction: `min(start)..max(stop)` for a positive step and
//!    `max(start)..min(stop)` for a negative one.
//!
//! ## Example
//! ```rust
//! # use std::cell::RefCell;
//! # use listview::{ListV, Concatenate};
//! let src = RefCell::new((0..10).collect::<Vec<i32>>());
//! let a = ListV::with_bounds(&src, 0, 3, 1).unwrap();
//! let b = ListV::with_bounds(&src, 5, 8, 1).unwrap();
//! let merged = a.concat(b).unwrap();
//! assert_eq!(merged.as_tuple(), (0, 8, 1));
//! ```

use crate::enums::error::ViewError;
use crate::structs::views::list_view::ListV;
use crate::traits::source::Source;

/// Concatenate trait for combining two instances of the same type.
///
/// # Consuming Semantics
/// `concat` takes both operands by value. Views are `Copy`, so the
/// originals stay usable.
pub trait Concatenate {
    /// Concatenates `self` with `other`, returning a new instance.
    ///
    /// # Errors
    /// - `SourceMismatch`: the operands do not share a source
    /// - `StepMismatch`: the operands do not share a step
    fn concat(self, other: Self) -> Result<Self, ViewError>
    where
        Self: Sized;
}

impl<'a, S: Source + ?Sized> Concatenate for ListV<'a, S> {
    fn concat(self, other: Self) -> Result<Self, ViewError> {
        if self.address() != other.address() {
            return Err(ViewError::SourceMismatch);
        }
        if self.step() != other.step() {
            return Err(ViewError::StepMismatch { left: self.step(), right: other.step() });
        }
        let (start, stop) = if self.step() > 0 {
            (self.start().min(other.start()), self.stop().max(other.stop()))
        } else {
            (self.start().max(other.start()), self.stop().min(other.stop()))
        };
        let descriptor = self.descriptor().with_start(start).with_stop(stop);
        Ok(ListV::from_descriptor(self.source(), descriptor))
    }
}
