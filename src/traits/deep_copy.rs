//! # DeepCopy Trait Module
//!
//! Recursive duplication for view exports.
//!
//! `Clone` on shared handles (`Rc`, `Arc`) only bumps a reference count, so a
//! cloned snapshot still aliases the source's storage. `DeepCopy` rebuilds
//! every level instead, so the copy shares nothing with the original.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

/// Recursively duplicates a value so no storage is shared with `self`.
pub trait DeepCopy {
    fn deep_copy(&self) -> Self;
}

macro_rules! impl_deep_copy_by_clone {
    ($($t:ty),*) => {
        $(
            impl DeepCopy for $t {
                #[inline]
                fn deep_copy(&self) -> Self {
                    self.clone()
                }
            }
        )*
    };
}

impl_deep_copy_by_clone!(
    bool, char, (), i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, &'static str
);

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    fn deep_copy(&self) -> Self {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Self {
        Box::new((**self).deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Self {
        self.as_ref().map(DeepCopy::deep_copy)
    }
}

impl<T: DeepCopy, const N: usize> DeepCopy for [T; N] {
    fn deep_copy(&self) -> Self {
        std::array::from_fn(|i| self[i].deep_copy())
    }
}

impl<A: DeepCopy, B: DeepCopy> DeepCopy for (A, B) {
    fn deep_copy(&self) -> Self {
        (self.0.deep_copy(), self.1.deep_copy())
    }
}

impl<A: DeepCopy, B: DeepCopy, C: DeepCopy> DeepCopy for (A, B, C) {
    fn deep_copy(&self) -> Self {
        (self.0.deep_copy(), self.1.deep_copy(), self.2.deep_copy())
    }
}

/// Allocates a fresh `Rc`; the copy has a strong count of one.
impl<T: DeepCopy> DeepCopy for Rc<T> {
    fn deep_copy(&self) -> Self {
        Rc::new((**self).deep_copy())
    }
}

impl<T: DeepCopy> DeepCopy for Arc<T> {
    fn deep_copy(&self) -> Self {
        Arc::new((**self).deep_copy())
    }
}

/// # Panics
/// If the cell is currently mutably borrowed.
impl<T: DeepCopy> DeepCopy for RefCell<T> {
    fn deep_copy(&self) -> Self {
        RefCell::new(self.borrow().deep_copy())
    }
}

impl<T: Copy> DeepCopy for Cell<T> {
    fn deep_copy(&self) -> Self {
        Cell::new(self.get())
    }
}

impl<K: Clone + Ord, V: DeepCopy> DeepCopy for BTreeMap<K, V> {
    fn deep_copy(&self) -> Self {
        self.iter().map(|(k, v)| (k.clone(), v.deep_copy())).collect()
    }
}

impl<K: Clone + Eq + Hash, V: DeepCopy, H: BuildHasher + Clone> DeepCopy for HashMap<K, V, H> {
    fn deep_copy(&self) -> Self {
        let mut out = HashMap::with_capacity_and_hasher(self.len(), self.hasher().clone());
        out.extend(self.iter().map(|(k, v)| (k.clone(), v.deep_copy())));
        out
    }
}
