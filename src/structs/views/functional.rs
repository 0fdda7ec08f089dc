//! # Functional Operations
//!
//! Higher-order traversal through a [`ListV`]: `for_each`, `map`, `filter`
//! and the whole-window `apply_in_place` transform.
//!
//! Element-wise operations borrow one element at a time and release it before
//! moving on, so writes made by a callback are visible to later steps. If a
//! callback reaches the same source through another view while an element is
//! lent out, that access fails with `SourceBorrowed` rather than panicking.

use log::debug;

use crate::enums::error::{Result, ViewError};
use crate::structs::views::list_view::ListV;
use crate::traits::source::Source;

impl<'a, S: Source + ?Sized> ListV<'a, S> {
    /// Calls `callback` on each element in traversal order.
    ///
    /// Elements are lent mutably, so in-place changes land in the source.
    pub fn for_each<F>(&self, mut callback: F) -> Result<()>
    where
        F: FnMut(&mut S::Item),
    {
        for position in self.range() {
            let mut elem = self.at_mut(position as i128)?;
            callback(&mut elem);
        }
        Ok(())
    }

    /// Collects `callback(element)` for every element. The source is not modified.
    pub fn map<U, F>(&self, mut callback: F) -> Result<Vec<U>>
    where
        F: FnMut(&S::Item) -> U,
    {
        let mut out = Vec::with_capacity(self.capacity_hint());
        for position in self.range() {
            let elem = self.at(position as i128)?;
            out.push(callback(&elem));
        }
        Ok(out)
    }

    /// Clones out the elements for which `predicate` holds, in traversal order.
    pub fn filter<P>(&self, mut predicate: P) -> Result<Vec<S::Item>>
    where
        P: FnMut(&S::Item) -> bool,
        S::Item: Clone,
    {
        let mut out = Vec::new();
        for position in self.range() {
            let elem = self.at(position as i128)?;
            if predicate(&elem) {
                out.push((*elem).clone());
            }
        }
        Ok(out)
    }

    /// Hands a snapshot of the viewed elements to `callback`, then writes the
    /// snapshot back over the viewed positions and returns `callback`'s result.
    ///
    /// Enables whole-window operations such as sorting in place:
    /// ```rust
    /// use std::cell::RefCell;
    /// use listview::ListV;
    ///
    /// let src = RefCell::new((0..10).collect::<Vec<i32>>());
    /// let view = ListV::with_bounds(&src, 3, 8, 1).unwrap();
    /// view.apply_in_place(|v| v.sort_by(|a, b| b.cmp(a))).unwrap();
    /// assert_eq!(*src.borrow(), vec![0, 1, 2, 7, 6, 5, 4, 3, 8, 9]);
    /// ```
    ///
    /// The source is not borrowed while `callback` runs.
    ///
    /// # Errors
    /// `LengthMismatch` if `callback` grows or shrinks the snapshot. The source
    /// is left untouched and the callback's result is dropped.
    pub fn apply_in_place<R, F>(&self, callback: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<S::Item>) -> R,
        S::Item: Clone,
    {
        self.apply_in_place_with((), |snapshot, ()| callback(snapshot))
    }

    /// As [`apply_in_place`](Self::apply_in_place), passing `args` through to
    /// `callback` after the snapshot.
    pub fn apply_in_place_with<A, R, F>(&self, args: A, callback: F) -> Result<R>
    where
        F: FnOnce(&mut Vec<S::Item>, A) -> R,
        S::Item: Clone,
    {
        let window = self.descriptor().as_source_slice();
        let mut snapshot = self.read_positions(&window)?;
        let expected = snapshot.len();
        let retval = callback(&mut snapshot, args);
        if snapshot.len() != expected {
            debug!(
                "ListView: apply_in_place callback changed length from {} to {}",
                expected,
                snapshot.len()
            );
            return Err(ViewError::LengthMismatch { expected, found: snapshot.len() });
        }
        self.write_positions(&window, snapshot)?;
        Ok(retval)
    }

    /// Snapshots the window, then maps it on the rayon pool.
    ///
    /// Only the snapshot crosses threads; the source itself is read once, on
    /// the calling thread.
    #[cfg(feature = "parallel_proc")]
    pub fn par_map<U, F>(&self, callback: F) -> Result<Vec<U>>
    where
        F: Fn(&S::Item) -> U + Sync + Send,
        S::Item: Clone + Sync,
        U: Send,
    {
        use rayon::prelude::*;

        let snapshot = self.read_positions(&self.descriptor().as_source_slice())?;
        Ok(snapshot.par_iter().map(callback).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn nested(n: i32) -> RefCell<Vec<Vec<i32>>> {
        RefCell::new((0..n).map(|i| vec![i]).collect())
    }

    #[test]
    fn test_for_each_mutates_through_view() {
        let src = nested(10);
        let view = ListV::with_bounds(&src, 1, 8, 2).unwrap();
        view.for_each(|x| x.push(0)).unwrap();

        let s = src.borrow();
        assert_eq!(s[1], vec![1, 0]);
        assert_eq!(s[7], vec![7, 0]);
        assert_eq!(s[2], vec![2]);
    }

    #[test]
    fn test_for_each_visits_in_traversal_order() {
        let src = RefCell::new(vec![1, 0, 0, 0, 5]);
        let view = ListV::with_bounds(&src, 4, -1, -2).unwrap(); // 4 2 0
        let mut seen = Vec::new();
        view.for_each(|x| {
            seen.push(*x);
            *x += 1;
        })
        .unwrap();
        assert_eq!(seen, vec![5, 0, 1]);
        assert_eq!(*src.borrow(), vec![2, 0, 1, 0, 6]);
    }

    #[test]
    fn test_map_reads_live_source() {
        let src = RefCell::new(vec![1, 2, 3]);
        let view = ListV::new(&src).unwrap();
        let other = ListV::with_bounds(&src, 2, 3, 1).unwrap();

        // touching the same source from inside the callback while an element is lent
        let mut nested_err = None;
        let out = view
            .map(|x| {
                if nested_err.is_none() {
                    nested_err = other.set(0, 0).err();
                }
                x * 10
            })
            .unwrap();
        assert_eq!(out, vec![10, 20, 30]);
        assert_eq!(nested_err, Some(ViewError::SourceBorrowed));
    }

    #[test]
    fn test_map_scenario() {
        let src = nested(10);
        let view = ListV::with_bounds(&src, 1, 8, 2).unwrap();
        view.set(2, vec![99]).unwrap();
        let doubled = view.map(|x| x[0] * 2).unwrap();
        assert_eq!(doubled, vec![2, 6, 198, 14]);
        assert_eq!(doubled.len(), view.len());
    }

    #[test]
    fn test_filter() {
        let src = nested(10);
        let view = ListV::with_bounds(&src, 1, 8, 2).unwrap();
        let big = view.filter(|x| x[0] > 4).unwrap();
        assert_eq!(big, vec![vec![5], vec![7]]);
        assert!(big.len() <= view.len());
        assert!(view.filter(|_| false).unwrap().is_empty());
    }

    #[test]
    fn test_apply_in_place_sorts_window() {
        let src = nested(10);
        let view = ListV::with_bounds(&src, 1, 8, 2).unwrap();
        let first = view
            .apply_in_place(|v| {
                v.sort_by(|a, b| b[0].cmp(&a[0]));
                v[0].clone()
            })
            .unwrap();
        assert_eq!(first, vec![7]);

        let s = src.borrow();
        assert_eq!(s[1], vec![7]);
        assert_eq!(s[3], vec![5]);
        assert_eq!(s[5], vec![3]);
        assert_eq!(s[7], vec![1]);
        assert_eq!(s[0], vec![0]);
    }

    #[test]
    fn test_apply_in_place_with_args() {
        let src = RefCell::new(vec![5, 1, 4, 2, 3]);
        let view = ListV::new(&src).unwrap();
        let n = view
            .apply_in_place_with(true, |v, reverse| {
                v.sort();
                if reverse {
                    v.reverse();
                }
                v.len()
            })
            .unwrap();
        assert_eq!(n, 5);
        assert_eq!(*src.borrow(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_apply_in_place_rejects_length_change() {
        let src = RefCell::new(vec![3, 2, 1]);
        let view = ListV::new(&src).unwrap();
        let err = view
            .apply_in_place(|v| {
                v.sort();
                v.push(0);
            })
            .unwrap_err();
        assert_eq!(err, ViewError::LengthMismatch { expected: 3, found: 4 });
        assert_eq!(*src.borrow(), vec![3, 2, 1]);
    }

    #[test]
    fn test_functional_ops_report_out_of_bounds() {
        let src = RefCell::new(vec![0, 1]);
        let view = ListV::with_bounds(&src, 0, 3, 1).unwrap();
        assert!(matches!(
            view.map(|x| *x),
            Err(ViewError::IndexOutOfBounds { index: 2, len: 2 })
        ));
        assert!(view.for_each(|_| {}).is_err());
        assert!(view.apply_in_place(|_| ()).is_err());
    }

    #[test]
    fn test_functional_ops_on_view_past_source_end() {
        let src = RefCell::new(vec![1u8, 2, 3]);
        let view = ListV::with_bounds(&src, 0, isize::MAX, 1).unwrap();
        let past = ViewError::IndexOutOfBounds { index: 3, len: 3 };

        assert_eq!(view.capacity_hint(), 3);
        assert_eq!(view.map(|x| *x).unwrap_err(), past);
        assert_eq!(view.map(|x| *x as u64).unwrap_err(), past);
        assert_eq!(view.filter(|_| true).unwrap_err(), past);
        assert_eq!(view.apply_in_place(|v| v.reverse()).unwrap_err(), past);
        assert_eq!(*src.borrow(), vec![1, 2, 3]);
        assert_eq!(view.for_each(|_| {}).unwrap_err(), past);
    }

    #[test]
    fn test_functional_ops_on_descending_view_from_isize_max() {
        let src = RefCell::new(vec![1u8, 2, 3]);
        let view = ListV::with_bounds(&src, isize::MAX, isize::MIN, -1).unwrap();
        let first = ViewError::IndexOutOfBounds { index: isize::MAX as i128, len: 3 };

        assert_eq!(view.len(), usize::MAX);
        assert_eq!(view.capacity_hint(), 3);
        assert_eq!(view.map(|x| *x).unwrap_err(), first);
        assert_eq!(view.filter(|_| true).unwrap_err(), first);
        assert_eq!(view.for_each(|_| {}).unwrap_err(), first);
        assert_eq!(view.apply_in_place(|_| ()).unwrap_err(), first);
    }

    #[cfg(feature = "parallel_proc")]
    #[test]
    fn test_par_map() {
        let src = RefCell::new((0..100).collect::<Vec<u64>>());
        let view = ListV::with_bounds(&src, 0, 100, 3).unwrap();
        let out = view.par_map(|x| x * 2).unwrap();
        assert_eq!(out, view.map(|x| x * 2).unwrap());
    }
}
