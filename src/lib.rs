//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # ListView
//!
//! Strided, mutable, zero-copy views over caller-owned containers.
//!
//! A [`ListV`] tracks the positions `start, start + step, ...` (excluding
//! `stop`) of any container implementing [`Source`], translating view-local
//! indices and slices into source coordinates on every access. Views never own
//! or copy their source, and several may alias the same one.
//!
//! ## Example
//! ```rust
//! use std::cell::RefCell;
//! use listview::{ListV, Print};
//!
//! let src = RefCell::new((0..10).map(|i| vec![i]).collect::<Vec<_>>());
//! let view = ListV::with_bounds(&src, 1, 8, 2).unwrap();
//!
//! assert_eq!(view.len(), 4);
//! view.set(2, vec![99]).unwrap();
//! assert_eq!(src.borrow()[5], vec![99]);
//! view.print(); // ListView([[1], [3], [99], [7]])
//! ```

pub mod enums {
    pub mod error;
    pub mod key;
}

pub mod structs {
    pub mod descriptor;
    pub mod slice_spec;
    pub mod views {
        pub mod export;
        pub mod functional;
        pub mod list_view;
    }
}

pub mod traits {
    pub mod concatenate;
    pub mod deep_copy;
    pub mod print;
    pub mod selection;
    pub mod source;
}

pub mod aliases;

pub use aliases::{DescriptorT, ListView, Position};

pub use enums::error::{ConstructionError, Result, ViewError};
pub use enums::key::{Assignment, Selection, ViewKey};

pub use structs::descriptor::{Descriptor, SourceSlice, StepRange};
pub use structs::slice_spec::{ResolvedSlice, SliceSpec};
pub use structs::views::list_view::{Iter, ListV};

pub use traits::concatenate::Concatenate;
pub use traits::deep_copy::DeepCopy;
pub use traits::print::Print;
pub use traits::selection::ViewSelector;
pub use traits::source::Source;

#[cfg(feature = "vec64")]
pub use ::vec64::Vec64;
