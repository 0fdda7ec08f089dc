//! # Descriptor Module
//!
//! The `(start, stop, step)` triple that names which source positions a
//! [`ListV`](crate::ListV) tracks, plus the pure index arithmetic that maps
//! view-local coordinates onto the source.
//!
//! ## Behaviour
//! - Positions follow half-open range semantics: `start, start + step, ...`
//!   up to but excluding `stop`, ascending for `step > 0` and descending for
//!   `step < 0`.
//! - Lengths are computed arithmetically and never by materialising the range.
//! - Translation is done in `i128`, so composing two `isize` affine maps cannot
//!   overflow. Bounds are only checked against the source by the caller.

use std::fmt::Debug;
use std::iter::FusedIterator;

use num_traits::ToPrimitive;

use crate::enums::error::ConstructionError;
use crate::structs::slice_spec::{ResolvedSlice, SliceSpec};
use crate::DescriptorT;

/// Number of values `start, start + step, ...` strictly before `stop`.
#[inline]
pub(crate) fn range_len(start: i128, stop: i128, step: i128) -> usize {
    let n = if step > 0 && start < stop {
        (stop - start - 1) / step + 1
    } else if step < 0 && start > stop {
        (start - stop - 1) / (-step) + 1
    } else {
        0
    };
    n as usize
}

/// # Descriptor
///
/// Immutable `(start, stop, step)` triple with `step != 0`.
///
/// ## Example
/// ```rust
/// use listview::Descriptor;
///
/// let d = Descriptor::new(1, 8, 2).unwrap();
/// assert_eq!(d.len(), 4);
/// assert_eq!(d.range().collect::<Vec<_>>(), vec![1, 3, 5, 7]);
/// assert_eq!(d.translate_index(2), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    start: isize,
    stop: isize,
    step: isize,
}

impl Descriptor {
    /// Construct a descriptor, rejecting a zero step.
    #[inline]
    pub fn new(start: isize, stop: isize, step: isize) -> Result<Self, ConstructionError> {
        if step == 0 {
            return Err(ConstructionError::ZeroStep);
        }
        Ok(Self { start, stop, step })
    }

    /// Construct a descriptor from any numeric field types.
    ///
    /// Floats are accepted only when they hold an exact integer value.
    pub fn try_from_parts<A, B, C>(start: A, stop: B, step: C) -> Result<Self, ConstructionError>
    where
        A: ToPrimitive + Debug,
        B: ToPrimitive + Debug,
        C: ToPrimitive + Debug,
    {
        let start = field_to_isize("start", start)?;
        let stop = field_to_isize("stop", stop)?;
        let step = field_to_isize("step", step)?;
        Self::new(start, stop, step)
    }

    #[inline]
    pub fn start(&self) -> isize {
        self.start
    }

    #[inline]
    pub fn stop(&self) -> isize {
        self.stop
    }

    #[inline]
    pub fn step(&self) -> isize {
        self.step
    }

    #[inline]
    pub fn with_start(self, start: isize) -> Self {
        Self { start, ..self }
    }

    #[inline]
    pub fn with_stop(self, stop: isize) -> Self {
        Self { stop, ..self }
    }

    #[inline]
    pub fn with_step(self, step: isize) -> Result<Self, ConstructionError> {
        Self::new(self.start, self.stop, step)
    }

    /// Number of positions the descriptor enumerates.
    #[inline]
    pub fn len(&self) -> usize {
        range_len(self.start as i128, self.stop as i128, self.step as i128)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily enumerates the source positions.
    #[inline]
    pub fn range(&self) -> StepRange {
        StepRange {
            start: self.start as i128,
            step: self.step as i128,
            front: 0,
            back: self.len(),
        }
    }

    /// The descriptor as a fully specified slice triple.
    #[inline]
    pub fn as_slice_spec(&self) -> SliceSpec {
        SliceSpec::new(Some(self.start), Some(self.stop), Some(self.step))
    }

    /// Returns the descriptor as a tuple: (start, stop, step).
    #[inline]
    pub fn as_tuple(&self) -> DescriptorT {
        (self.start, self.stop, self.step)
    }

    /// Source position of view-local index `i`: `start + i * step`.
    #[inline]
    pub fn translate_index(&self, i: isize) -> i128 {
        self.start as i128 + i as i128 * self.step as i128
    }

    /// Source positions named by a view-local slice that has already been
    /// resolved against the view length.
    #[inline]
    pub fn translate_slice(&self, slice: &ResolvedSlice) -> SourceSlice {
        let (start, step) = (self.start as i128, self.step as i128);
        SourceSlice {
            start: start + slice.start * step,
            stop: start + slice.stop * step,
            step: step * slice.step,
        }
    }

    /// The descriptor's own positions in translator form.
    #[inline]
    pub fn as_source_slice(&self) -> SourceSlice {
        SourceSlice {
            start: self.start as i128,
            stop: self.stop as i128,
            step: self.step as i128,
        }
    }

    /// True when both descriptors enumerate the same position sequence,
    /// even if their triples differ syntactically.
    pub fn same_positions(&self, other: &Descriptor) -> bool {
        let len = self.len();
        if len != other.len() {
            return false;
        }
        match len {
            0 => true,
            1 => self.start == other.start,
            _ => self.start == other.start && self.step == other.step,
        }
    }
}

impl TryFrom<DescriptorT> for Descriptor {
    type Error = ConstructionError;

    fn try_from((start, stop, step): DescriptorT) -> Result<Self, Self::Error> {
        Descriptor::new(start, stop, step)
    }
}

fn field_to_isize<I: ToPrimitive + Debug>(field: &'static str, value: I) -> Result<isize, ConstructionError> {
    if let Some(f) = value.to_f64() {
        if !f.is_finite() || f.fract() != 0.0 {
            return Err(ConstructionError::NonInteger { field, value: format!("{:?}", value) });
        }
    }
    value
        .to_isize()
        .ok_or_else(|| ConstructionError::OutOfRange { field, value: format!("{:?}", value) })
}

/// Translated `(start, stop, step)` in source coordinates.
///
/// Components may lie outside the source, or outside `isize`, until they are
/// bounds-checked at access time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSlice {
    pub start: i128,
    pub stop: i128,
    pub step: i128,
}

impl SourceSlice {
    #[inline]
    pub fn len(&self) -> usize {
        range_len(self.start, self.stop, self.step)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates the translated positions in order.
    pub fn positions(&self) -> impl Iterator<Item = i128> + use<> {
        let (start, step) = (self.start, self.step);
        (0..self.len()).map(move |k| start + k as i128 * step)
    }
}

/// # StepRange
///
/// Lazy `range(start, stop, step)` over `isize` positions. Double ended and
/// exact sized.
#[derive(Debug, Clone)]
pub struct StepRange {
    start: i128,
    step: i128,
    front: usize,
    back: usize,
}

impl StepRange {
    #[inline]
    fn at(&self, k: usize) -> isize {
        // Every in-range position lies between `start` and `stop`.
        (self.start + k as i128 * self.step) as isize
    }
}

impl Iterator for StepRange {
    type Item = isize;

    #[inline]
    fn next(&mut self) -> Option<isize> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.at(self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for StepRange {
    #[inline]
    fn next_back(&mut self) -> Option<isize> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.at(self.back))
    }
}

impl ExactSizeIterator for StepRange {}
impl FusedIterator for StepRange {}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_len(start: isize, stop: isize, step: isize) -> usize {
        let mut n = 0;
        let mut i = start;
        while (step > 0 && i < stop) || (step < 0 && i > stop) {
            n += 1;
            i += step;
        }
        n
    }

    #[test]
    fn test_len_matches_enumeration() {
        for start in -6..=6 {
            for stop in -6..=6 {
                for step in [-4, -3, -2, -1, 1, 2, 3, 4] {
                    let d = Descriptor::new(start, stop, step).unwrap();
                    let expected = brute_len(start, stop, step);
                    assert_eq!(d.len(), expected, "({start}, {stop}, {step})");
                    assert_eq!(d.range().count(), expected);
                }
            }
        }
    }

    #[test]
    fn test_descending_and_empty_ranges() {
        let d = Descriptor::new(9, -1, -3).unwrap();
        assert_eq!(d.range().collect::<Vec<_>>(), vec![9, 6, 3, 0]);
        assert_eq!(d.range().rev().collect::<Vec<_>>(), vec![0, 3, 6, 9]);

        assert!(Descriptor::new(5, 5, 1).unwrap().is_empty());
        assert!(Descriptor::new(7, 2, 1).unwrap().is_empty());
        assert!(Descriptor::new(2, 7, -1).unwrap().is_empty());
    }

    #[test]
    fn test_len_extreme_bounds() {
        let d = Descriptor::new(isize::MIN, isize::MAX, isize::MAX).unwrap();
        assert_eq!(d.len(), 3);
        let d = Descriptor::new(isize::MAX, isize::MIN, -1).unwrap();
        assert_eq!(d.len(), usize::MAX);
    }

    #[test]
    fn test_zero_step_rejected() {
        assert_eq!(Descriptor::new(0, 4, 0), Err(ConstructionError::ZeroStep));
        assert_eq!(Descriptor::try_from((1, 2, 0)), Err(ConstructionError::ZeroStep));
    }

    #[test]
    fn test_try_from_parts_field_validation() {
        let d = Descriptor::try_from_parts(1u8, 8i64, 2.0f64).unwrap();
        assert_eq!(d.as_tuple(), (1, 8, 2));

        assert!(matches!(
            Descriptor::try_from_parts(1.5f64, 8, 1),
            Err(ConstructionError::NonInteger { field: "start", .. })
        ));
        assert!(matches!(
            Descriptor::try_from_parts(0, f64::NAN, 1),
            Err(ConstructionError::NonInteger { field: "stop", .. })
        ));
        assert!(matches!(
            Descriptor::try_from_parts(0, u64::MAX, 1),
            Err(ConstructionError::OutOfRange { field: "stop", .. })
        ));
        assert_eq!(Descriptor::try_from_parts(0, 3, 0u32), Err(ConstructionError::ZeroStep));
    }

    #[test]
    fn test_translate_index() {
        let d = Descriptor::new(1, 8, 2).unwrap();
        assert_eq!(d.translate_index(0), 1);
        assert_eq!(d.translate_index(3), 7);
        assert_eq!(d.translate_index(-1), -1);

        let d = Descriptor::new(9, -1, -1).unwrap();
        assert_eq!(d.translate_index(0), 9);
        assert_eq!(d.translate_index(9), 0);
    }

    #[test]
    fn test_translate_slice_composes_affine_maps() {
        // view positions: 1 3 5 7 9
        let d = Descriptor::new(1, 10, 2).unwrap();
        let view_len = d.len();

        // view[1:4] -> positions 3 5 7
        let r = SliceSpec::new(Some(1), Some(4), None).resolve(view_len).unwrap();
        let s = d.translate_slice(&r);
        assert_eq!(s.positions().collect::<Vec<_>>(), vec![3, 5, 7]);

        // view[::-2] -> positions 9 5 1
        let r = SliceSpec::new(None, None, Some(-2)).resolve(view_len).unwrap();
        let s = d.translate_slice(&r);
        assert_eq!(s.positions().collect::<Vec<_>>(), vec![9, 5, 1]);
        assert_eq!(s.len(), r.len());

        // purely negative strides on both levels
        let d = Descriptor::new(8, -1, -2).unwrap(); // 8 6 4 2 0
        let r = SliceSpec::new(None, None, Some(-1)).resolve(d.len()).unwrap();
        let s = d.translate_slice(&r);
        assert_eq!(s.positions().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    }

    #[test]
    fn test_same_positions() {
        let a = Descriptor::new(1, 8, 2).unwrap();
        let b = Descriptor::new(1, 9, 2).unwrap();
        let c = Descriptor::new(1, 8, 3).unwrap();
        assert!(a.same_positions(&b));
        assert!(!a.same_positions(&c));

        // single position, step irrelevant
        let d = Descriptor::new(4, 5, 1).unwrap();
        let e = Descriptor::new(4, 0, -7).unwrap();
        assert!(d.same_positions(&e));

        // all empty descriptors enumerate nothing
        let f = Descriptor::new(3, 3, 1).unwrap();
        let g = Descriptor::new(0, 9, -1).unwrap();
        assert!(f.same_positions(&g));
    }
}
