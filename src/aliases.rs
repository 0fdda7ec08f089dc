use crate::ListV;

/// Long-form name for [`ListV`].
///
/// # Description
/// - Strided, mutable, zero-copy view over a caller-owned container.
/// - Equivalent to `ListV`; use whichever reads better at the call site.
///
/// # Example
/// ```rust
/// use std::cell::RefCell;
/// use listview::aliases::ListView;
///
/// let src = RefCell::new(vec![1, 2, 3, 4]);
/// let evens: ListView<'_, Vec<i32>> = ListView::with_bounds(&src, 1, 4, 2).unwrap();
/// assert_eq!(evens.to_list().unwrap(), vec![2, 4]);
/// ```
pub type ListView<'a, S> = ListV<'a, S>;

// ----------------- Descriptor Views ---------------------------
//
// Plain tuple forms for when one isn't using the full
// `Descriptor` abstraction or doesn't want to couple a
// function signature to it.
//
// --------------------------------------------------------------

/// Signed source position, as used by the descriptor.
pub type Position = isize;

/// ***D**escriptor **T**uple*: `(start, stop, step)`.
pub type DescriptorT = (Position, Position, Position);
