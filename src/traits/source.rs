//! # Source Trait Module
//!
//! The random-access contract a container must satisfy to be tracked by a
//! [`ListV`](crate::ListV): a length query plus checked indexed reads and
//! writes.
//!
//! Containers that cannot provide this contract are rejected at compile time
//! by the `S: Source` bound on the view.

use std::collections::VecDeque;

#[cfg(feature = "vec64")]
use ::vec64::Vec64;

/// Mutable, ordered, random-access container.
pub trait Source {
    type Item;

    /// Current number of elements.
    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reference to the element at `index`, or `None` if out of bounds.
    fn get(&self, index: usize) -> Option<&Self::Item>;

    /// Mutable reference to the element at `index`, or `None` if out of bounds.
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;
}

impl<T> Source for [T] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

impl<T, const N: usize> Source for [T; N] {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

impl<T> Source for Vec<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

impl<T> Source for Box<[T]> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        <[T]>::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        <[T]>::get_mut(self, index)
    }
}

impl<T> Source for VecDeque<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }
}

/// 64-byte aligned vector
#[cfg(feature = "vec64")]
impl<T> Source for Vec64<T> {
    type Item = T;

    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn second<S: Source + ?Sized>(s: &S) -> Option<&S::Item> {
        s.get(1)
    }

    #[test]
    fn test_vec_and_slice_sources() {
        let mut v = vec![10, 20, 30];
        assert_eq!(Source::len(&v), 3);
        assert_eq!(second(&v), Some(&20));
        *Source::get_mut(&mut v, 2).unwrap() = 31;
        assert_eq!(v, vec![10, 20, 31]);
        assert!(Source::get(&v, 3).is_none());

        let s: &[i32] = &v;
        assert_eq!(second(s), Some(&20));
    }

    #[test]
    fn test_array_box_and_deque_sources() {
        let a = [1, 2, 3, 4];
        assert_eq!(Source::len(&a), 4);
        assert_eq!(second(&a), Some(&2));

        let b: Box<[u8]> = vec![7, 8].into_boxed_slice();
        assert_eq!(second(&b), Some(&8));

        let mut d: VecDeque<i32> = VecDeque::new();
        d.push_back(2);
        d.push_front(1);
        assert_eq!(second(&d), Some(&2));
        assert!(Source::get_mut(&mut d, 5).is_none());
        assert!(!Source::is_empty(&d));
    }

    #[cfg(feature = "vec64")]
    #[test]
    fn test_vec64_source() {
        let mut v: Vec64<i64> = Vec64::from(vec![5, 6, 7]);
        assert_eq!(Source::len(&v), 3);
        *Source::get_mut(&mut v, 0).unwrap() = 50;
        assert_eq!(v.as_slice(), &[50, 6, 7]);
    }
}
