//! # SliceSpec Module
//!
//! View-local slice arguments with optional components, and their
//! resolution into concrete bounds.
//!
//! A [`SliceSpec`] must be resolved against the length of the view it applies
//! to before it is handed to the translator, so that open-ended or negative
//! components are never composed with the view's own descriptor.

use std::ops::{Range, RangeFrom, RangeFull, RangeInclusive, RangeTo};

use crate::enums::error::ConstructionError;
use crate::structs::descriptor::range_len;

/// `start:stop:step` with every component optional.
///
/// Negative `start`/`stop` count from the end of the view, and omitted
/// components default the same way extended slicing does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SliceSpec {
    pub start: Option<isize>,
    pub stop: Option<isize>,
    pub step: Option<isize>,
}

/// A [`SliceSpec`] with every component resolved against a length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedSlice {
    pub start: i128,
    pub stop: i128,
    pub step: i128,
}

impl SliceSpec {
    #[inline]
    pub fn new(start: Option<isize>, stop: Option<isize>, step: Option<isize>) -> Self {
        Self { start, stop, step }
    }

    /// The whole view, `::`.
    #[inline]
    pub fn full() -> Self {
        Self::default()
    }

    /// Replaces the step, keeping the bounds.
    #[inline]
    pub fn with_step(mut self, step: isize) -> Self {
        self.step = Some(step);
        self
    }

    /// Resolves omitted and negative components against `len`, clamping the
    /// bounds into the valid range for the step direction.
    pub fn resolve(&self, len: usize) -> Result<ResolvedSlice, ConstructionError> {
        let step = self.step.unwrap_or(1) as i128;
        if step == 0 {
            return Err(ConstructionError::ZeroStep);
        }
        let len = len as i128;
        let (lower, upper) = if step > 0 { (0, len) } else { (-1, len - 1) };

        let clamp = |bound: Option<isize>, default: i128| -> i128 {
            match bound {
                None => default,
                Some(b) => {
                    let mut b = b as i128;
                    if b < 0 {
                        b += len;
                    }
                    b.clamp(lower, upper)
                }
            }
        };

        let start = clamp(self.start, if step > 0 { lower } else { upper });
        let stop = clamp(self.stop, if step > 0 { upper } else { lower });
        Ok(ResolvedSlice { start, stop, step })
    }
}

impl ResolvedSlice {
    /// Number of view positions the resolved slice designates.
    #[inline]
    pub fn len(&self) -> usize {
        range_len(self.start, self.stop, self.step)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<RangeFull> for SliceSpec {
    fn from(_: RangeFull) -> Self {
        SliceSpec::full()
    }
}

macro_rules! impl_slice_spec_from_ranges {
    ($($t:ty),*) => {
        $(
            impl From<Range<$t>> for SliceSpec {
                fn from(r: Range<$t>) -> Self {
                    SliceSpec::new(Some(to_bound(r.start)), Some(to_bound(r.end)), None)
                }
            }

            impl From<RangeFrom<$t>> for SliceSpec {
                fn from(r: RangeFrom<$t>) -> Self {
                    SliceSpec::new(Some(to_bound(r.start)), None, None)
                }
            }

            impl From<RangeTo<$t>> for SliceSpec {
                fn from(r: RangeTo<$t>) -> Self {
                    SliceSpec::new(None, Some(to_bound(r.end)), None)
                }
            }

            /// An inclusive end of `-1` selects through the last element.
            impl From<RangeInclusive<$t>> for SliceSpec {
                fn from(r: RangeInclusive<$t>) -> Self {
                    let end = to_bound(*r.end());
                    let stop = if end == -1 { None } else { Some(end.saturating_add(1)) };
                    SliceSpec::new(Some(to_bound(*r.start())), stop, None)
                }
            }
        )*
    };
}

impl_slice_spec_from_ranges!(isize, usize, i32, i64);

/// Out-of-range bounds saturate; resolution clamps them afterwards.
#[inline]
fn to_bound<I: TryInto<isize> + PartialOrd + Default>(value: I) -> isize {
    let negative = value < I::default();
    value
        .try_into()
        .unwrap_or(if negative { isize::MIN } else { isize::MAX })
}
