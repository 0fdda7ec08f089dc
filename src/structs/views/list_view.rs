//! # **ListView Module** - *Strided Mutable View over a Source*
//!
//! `ListV` is a **logical, zero-copy, mutable view** onto the positions
//! `start, start + step, ...` (excluding `stop`) of a caller-owned container.
//!
//! ## Purpose
//! - Translated, bounds-checked access and mutation of a strided sub-sequence.
//! - Several views may alias overlapping ranges of one source at the same time.
//! - Nothing is copied until an export or slice read asks for it.
//!
//! ## Behaviour
//! - View-local index `i` maps to source index `start + i * step`.
//! - Slices are resolved against the view length first, then translated.
//! - `stop` is fixed when the view is built; later growth or shrinkage of the
//!   source does not move it. Positions that fall outside the source at access
//!   time produce [`ViewError::IndexOutOfBounds`].
//! - Equality is identity of the source plus the enumerated position sequence.
//!
//! ## Threading
//! - Not thread-safe. The source is shared through a `RefCell`, so `ListV` is
//!   neither `Send` nor `Sync`. Borrow conflicts surface as
//!   [`ViewError::SourceBorrowed`] on the checked operations.
//!
//! ## Related
//! - [`Descriptor`] holds the `(start, stop, step)` triple.
//! - [`DescriptorT`] is the tuple form returned by [`as_tuple`](ListV::as_tuple).

use std::cell::{Ref, RefCell, RefMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;

use log::{debug, trace};
use num_traits::ToPrimitive;

use crate::enums::error::{Result, ViewError};
use crate::enums::key::{Assignment, Selection, ViewKey};
use crate::structs::descriptor::{Descriptor, SourceSlice, StepRange};
use crate::structs::slice_spec::SliceSpec;
use crate::traits::print::write_preview;
use crate::traits::selection::ViewSelector;
use crate::traits::source::Source;
use crate::DescriptorT;

/// # ListView
///
/// Strided, mutable window over a [`Source`] held in a `RefCell`.
///
/// ## Fields
/// - `source`: non-owning reference to the caller's container.
/// - `descriptor`: the `(start, stop, step)` positions being tracked.
///
/// ## Example
/// ```rust
/// use std::cell::RefCell;
/// use listview::ListV;
///
/// let src = RefCell::new((0..10).map(|i| vec![i]).collect::<Vec<_>>());
/// let view = ListV::with_bounds(&src, 1, 8, 2).unwrap();
///
/// assert_eq!(view.len(), 4);
/// view.set(2, vec![99]).unwrap();
/// assert_eq!(src.borrow()[5], vec![99]);
/// assert_eq!(view.map(|x| x[0] * 2).unwrap(), vec![2, 6, 198, 14]);
/// ```
pub struct ListV<'a, S: Source + ?Sized> {
    source: &'a RefCell<S>,
    descriptor: Descriptor,
}

impl<'a, S: Source + ?Sized> Clone for ListV<'a, S> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, S: Source + ?Sized> Copy for ListV<'a, S> {}

#[inline]
fn checked(position: i128, len: usize) -> Result<usize> {
    if position >= 0 && position < len as i128 {
        Ok(position as usize)
    } else {
        Err(ViewError::IndexOutOfBounds { index: position, len })
    }
}

#[inline]
fn source_len<S: Source + ?Sized>(source: &RefCell<S>) -> Result<usize> {
    source
        .try_borrow()
        .map(|s| s.len())
        .map_err(|_| ViewError::SourceBorrowed)
}

impl<'a, S: Source + ?Sized> ListV<'a, S> {
    /// View over the whole source: `start = 0`, `stop = len(source)`, `step = 1`.
    ///
    /// # Errors
    /// `SourceBorrowed` if the source is mutably borrowed while its length is read.
    pub fn new(source: &'a RefCell<S>) -> Result<Self> {
        Self::try_new(source, 0, None::<usize>, 1)
    }

    /// View with explicit integer bounds. Fails only on a zero step.
    pub fn with_bounds(source: &'a RefCell<S>, start: isize, stop: isize, step: isize) -> Result<Self> {
        Ok(Self::from_descriptor(source, Descriptor::new(start, stop, step)?))
    }

    /// View with loosely typed bounds.
    ///
    /// A `None` stop defaults to the source length measured now. Floats are
    /// accepted only when they hold an exact integer.
    ///
    /// # Errors
    /// - `Construction(NonInteger | OutOfRange | ZeroStep)` for invalid fields.
    /// - `SourceBorrowed` if `stop` is defaulted while the source is mutably borrowed.
    pub fn try_new<A, B, C>(source: &'a RefCell<S>, start: A, stop: Option<B>, step: C) -> Result<Self>
    where
        A: ToPrimitive + Debug,
        B: ToPrimitive + Debug,
        C: ToPrimitive + Debug,
    {
        let descriptor = match stop {
            Some(stop) => Descriptor::try_from_parts(start, stop, step),
            None => Descriptor::try_from_parts(start, source_len(source)?, step),
        };
        match descriptor {
            Ok(descriptor) => Ok(Self::from_descriptor(source, descriptor)),
            Err(err) => {
                debug!("ListView: rejected descriptor: {}", err);
                Err(err.into())
            }
        }
    }

    /// View over an already validated descriptor.
    #[inline]
    pub fn from_descriptor(source: &'a RefCell<S>, descriptor: Descriptor) -> Self {
        Self { source, descriptor }
    }

    /// The container this view tracks.
    #[inline]
    pub fn source(&self) -> &'a RefCell<S> {
        self.source
    }

    /// Identity of the source container, used for equality.
    #[inline]
    pub fn address(&self) -> usize {
        self.source as *const RefCell<S> as *const () as usize
    }

    #[inline]
    pub fn start(&self) -> isize {
        self.descriptor.start()
    }

    #[inline]
    pub fn stop(&self) -> isize {
        self.descriptor.stop()
    }

    #[inline]
    pub fn step(&self) -> isize {
        self.descriptor.step()
    }

    #[inline]
    pub fn set_start(&mut self, start: isize) {
        self.descriptor = self.descriptor.with_start(start);
    }

    #[inline]
    pub fn set_stop(&mut self, stop: isize) {
        self.descriptor = self.descriptor.with_stop(stop);
    }

    /// Replaces the step, rejecting zero and leaving the view untouched on error.
    #[inline]
    pub fn set_step(&mut self, step: isize) -> Result<()> {
        self.descriptor = self.descriptor.with_step(step)?;
        Ok(())
    }

    #[inline]
    pub fn set_descriptor(&mut self, descriptor: Descriptor) {
        self.descriptor = descriptor;
    }

    #[inline]
    pub fn descriptor(&self) -> Descriptor {
        self.descriptor
    }

    /// Returns the view window as a tuple: (start, stop, step).
    #[inline]
    pub fn as_tuple(&self) -> DescriptorT {
        self.descriptor.as_tuple()
    }

    /// The tracked source positions, computed on demand.
    #[inline]
    pub fn range(&self) -> StepRange {
        self.descriptor.range()
    }

    /// The descriptor as a slice triple over the source.
    #[inline]
    pub fn slice(&self) -> SliceSpec {
        self.descriptor.as_slice_spec()
    }

    /// Number of positions the view covers.
    #[inline]
    pub fn len(&self) -> usize {
        self.descriptor.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// True when the view covers at least one position.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        self.len() > 0
    }

    /// True iff `other` tracks the very same source and enumerates the same
    /// positions. Equal contents in a different container never compare equal.
    #[inline]
    pub fn equals(&self, other: &ListV<'_, S>) -> bool {
        self.address() == other.address() && self.descriptor.same_positions(&other.descriptor)
    }

    /// Debug form as a string: source identity plus the raw descriptor.
    pub fn to_debug_string(&self) -> String {
        format!("{:?}", self)
    }

    #[inline]
    fn borrow(&self) -> Result<Ref<'a, S>> {
        self.source.try_borrow().map_err(|_| ViewError::SourceBorrowed)
    }

    #[inline]
    fn borrow_mut(&self) -> Result<RefMut<'a, S>> {
        self.source
            .try_borrow_mut()
            .map_err(|_| ViewError::SourceBorrowed)
    }

    /// Element at a raw source position.
    #[inline]
    pub(crate) fn at(&self, position: i128) -> Result<Ref<'a, S::Item>> {
        element(self.source, position)
    }

    /// Output reservation for a traversal, capped by what the source holds.
    ///
    /// The view length alone can exceed any allocation when the bounds run
    /// past the source.
    #[inline]
    pub(crate) fn capacity_hint(&self) -> usize {
        self.len().min(source_len(self.source).unwrap_or(0))
    }

    /// Mutable element at a raw source position.
    pub(crate) fn at_mut(&self, position: i128) -> Result<RefMut<'a, S::Item>> {
        let source = self.borrow_mut()?;
        let len = source.len();
        let index = checked(position, len)?;
        RefMut::filter_map(source, |s| s.get_mut(index))
            .map_err(|_| ViewError::IndexOutOfBounds { index: position, len })
    }

    /// Returns the element at view-local index `index`.
    ///
    /// The returned guard keeps the source immutably borrowed until dropped.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if `start + index * step` is outside the source.
    #[inline]
    pub fn get(&self, index: isize) -> Result<Ref<'a, S::Item>> {
        self.at(self.descriptor.translate_index(index))
    }

    /// Returns the element at view-local index `index` for mutation.
    #[inline]
    pub fn get_mut(&self, index: isize) -> Result<RefMut<'a, S::Item>> {
        self.at_mut(self.descriptor.translate_index(index))
    }

    /// Writes `value` at view-local index `index`.
    #[inline]
    pub fn set(&self, index: isize, value: S::Item) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Writes `value` at view-local index `index`, returning the previous element.
    #[inline]
    pub fn replace(&self, index: isize, value: S::Item) -> Result<S::Item> {
        Ok(std::mem::replace(&mut *self.get_mut(index)?, value))
    }

    /// Resolves a view-local slice against `len()` and translates it.
    pub(crate) fn source_slice(&self, spec: SliceSpec) -> Result<SourceSlice> {
        let resolved = spec.resolve(self.len())?;
        Ok(self.descriptor.translate_slice(&resolved))
    }

    pub(crate) fn read_positions(&self, slice: &SourceSlice) -> Result<Vec<S::Item>>
    where
        S::Item: Clone,
    {
        let source = self.borrow()?;
        let len = source.len();
        slice
            .positions()
            .map(|position| {
                let index = checked(position, len)?;
                source
                    .get(index)
                    .cloned()
                    .ok_or(ViewError::IndexOutOfBounds { index: position, len })
            })
            .collect()
    }

    /// All-or-nothing write of `values` into the translated positions.
    pub(crate) fn write_positions(&self, slice: &SourceSlice, values: Vec<S::Item>) -> Result<()> {
        let expected = slice.len();
        if values.len() != expected {
            debug!(
                "ListView: rejected write of {} values into {} positions",
                values.len(),
                expected
            );
            return Err(ViewError::LengthMismatch { expected, found: values.len() });
        }
        let mut source = self.borrow_mut()?;
        let len = source.len();
        let indices = slice
            .positions()
            .map(|position| checked(position, len))
            .collect::<Result<Vec<usize>>>()?;
        for (index, value) in indices.into_iter().zip(values) {
            if let Some(slot) = source.get_mut(index) {
                *slot = value;
            }
        }
        trace!("ListView: wrote {} values at {:?}", expected, slice);
        Ok(())
    }

    /// Independent snapshot of the elements a view-local slice designates.
    ///
    /// # Errors
    /// `IndexOutOfBounds` if any designated position is outside the source.
    pub fn get_slice<K: Into<SliceSpec>>(&self, spec: K) -> Result<Vec<S::Item>>
    where
        S::Item: Clone,
    {
        let slice = self.source_slice(spec.into())?;
        self.read_positions(&slice)
    }

    /// Assigns `values` into the positions a view-local slice designates.
    ///
    /// The count must match exactly; the source never grows or shrinks.
    ///
    /// # Errors
    /// - `LengthMismatch` if the value count differs from the slice length.
    /// - `IndexOutOfBounds` if any position is outside the source. Nothing is
    ///   written in either case.
    pub fn set_slice<K, I>(&self, spec: K, values: I) -> Result<()>
    where
        K: Into<SliceSpec>,
        I: IntoIterator<Item = S::Item>,
    {
        let slice = self.source_slice(spec.into())?;
        self.write_positions(&slice, values.into_iter().collect())
    }

    /// Reads through an index or slice key.
    pub fn select<K: ViewSelector>(&self, key: K) -> Result<Selection<S::Item>>
    where
        S::Item: Clone,
    {
        match key.to_key() {
            ViewKey::Index(i) => Ok(Selection::Item((*self.get(i)?).clone())),
            ViewKey::Slice(spec) => Ok(Selection::Items(self.get_slice(spec)?)),
        }
    }

    /// Writes through an index or slice key.
    ///
    /// # Errors
    /// `UnsupportedKey` when the key and payload shapes disagree, e.g. a single
    /// value assigned to a slice.
    pub fn assign<K: ViewSelector>(&self, key: K, value: Assignment<S::Item>) -> Result<()> {
        match (key.to_key(), value) {
            (ViewKey::Index(i), Assignment::Item(v)) => self.set(i, v),
            (ViewKey::Slice(spec), Assignment::Items(vs)) => self.set_slice(spec, vs),
            (key, value) => Err(ViewError::UnsupportedKey {
                key: key.shape_name(),
                value: value.shape_name(),
            }),
        }
    }

    /// Lazy iterator over the viewed elements.
    ///
    /// Each step re-reads the source, so writes made between steps are seen.
    /// Every call starts a fresh traversal.
    #[inline]
    pub fn iter(&self) -> Iter<'a, S> {
        Iter { source: self.source, range: self.descriptor.range() }
    }

    /// Moves both bounds down by `amount`, clamping `start` at zero.
    pub fn shifted_left(&self, amount: usize) -> Self {
        let amount = isize::try_from(amount).unwrap_or(isize::MAX);
        let start = self.start().saturating_sub(amount).max(0);
        let stop = self.stop().saturating_sub(amount);
        Self::from_descriptor(self.source, self.descriptor.with_start(start).with_stop(stop))
    }

    /// Moves both bounds up by `amount`.
    pub fn shifted_right(&self, amount: usize) -> Self {
        let amount = isize::try_from(amount).unwrap_or(isize::MAX);
        let start = self.start().saturating_add(amount);
        let stop = self.stop().saturating_add(amount);
        Self::from_descriptor(self.source, self.descriptor.with_start(start).with_stop(stop))
    }
}

/// # Iter
///
/// Lazy traversal of a [`ListV`]. Yields a shared borrow of each element.
///
/// Items are checked as they are produced: a position outside the source
/// yields `Err(IndexOutOfBounds)` and a mutably borrowed source yields
/// `Err(SourceBorrowed)`. Traversal continues past an error, so
/// `collect::<Result<Vec<_>>>()` stops at the first one.
pub struct Iter<'a, S: Source + ?Sized> {
    source: &'a RefCell<S>,
    range: StepRange,
}

fn element<'a, S: Source + ?Sized>(source: &'a RefCell<S>, position: i128) -> Result<Ref<'a, S::Item>> {
    let source = source.try_borrow().map_err(|_| ViewError::SourceBorrowed)?;
    let len = source.len();
    let index = checked(position, len)?;
    Ref::filter_map(source, |s| s.get(index))
        .map_err(|_| ViewError::IndexOutOfBounds { index: position, len })
}

impl<'a, S: Source + ?Sized> Iterator for Iter<'a, S> {
    type Item = Result<Ref<'a, S::Item>>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let position = self.range.next()?;
        Some(element(self.source, position as i128))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl<'a, S: Source + ?Sized> DoubleEndedIterator for Iter<'a, S> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let position = self.range.next_back()?;
        Some(element(self.source, position as i128))
    }
}

impl<'a, S: Source + ?Sized> ExactSizeIterator for Iter<'a, S> {}
impl<'a, S: Source + ?Sized> FusedIterator for Iter<'a, S> {}

impl<'a, 'v, S: Source + ?Sized> IntoIterator for &'v ListV<'a, S> {
    type Item = Result<Ref<'a, S::Item>>;
    type IntoIter = Iter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, S: Source + ?Sized> IntoIterator for ListV<'a, S> {
    type Item = Result<Ref<'a, S::Item>>;
    type IntoIter = Iter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, 'b, S: Source + ?Sized> PartialEq<ListV<'b, S>> for ListV<'a, S> {
    #[inline]
    fn eq(&self, other: &ListV<'b, S>) -> bool {
        self.equals(other)
    }
}

impl<'a, S: Source + ?Sized> Eq for ListV<'a, S> {}

// We do not implement `Index` as the view cannot hand out a plain
// reference into a `RefCell` without a guard.

impl<'a, S: Source + ?Sized> Debug for ListV<'a, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ListView(<source at {:#x}>, start={}, stop={}, step={})",
            self.address(),
            self.start(),
            self.stop(),
            self.step()
        )
    }
}

/// Renders the viewed elements as `ListView([a, b, ...])`.
///
/// Only the first `MAX_PREVIEW` (50) elements are written; longer views end
/// with `… (n more)`. Use [`to_list`](ListV::to_list) for the full contents.
/// Positions outside the source are rendered inline as `<Index error: ...>`.
impl<'a, S: Source + ?Sized> Display for ListV<'a, S>
where
    S::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ListView(")?;
        write_preview(
            f,
            self.len(),
            self.range().map(|position| self.at(position as i128)),
        )?;
        write!(f, ")")
    }
}
