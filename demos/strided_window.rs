//! ---------------------------------------------------------
//! Walks through a strided window over a nested list,
//! mutating the source through the view and vice versa.
//!
//! Run with:
//!     cargo run --example strided_window
//! ---------------------------------------------------------

use std::cell::RefCell;

use listview::{Concatenate, ListV, Print, SliceSpec};

fn main() {
    let src = RefCell::new((0..10).map(|i| vec![i]).collect::<Vec<_>>());

    // Every second element from 1 up to (not including) 8
    let odds = match ListV::with_bounds(&src, 1, 8, 2) {
        Ok(view) => view,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };
    println!("{odds:?} has {} elements", odds.len());
    odds.print();

    // Writes land in the source
    if let Err(e) = odds.set(2, vec![99]) {
        eprintln!("{e}");
    }
    println!("source[5] = {:?}", src.borrow()[5]);

    // Higher-order traversal
    println!("doubled: {:?}", odds.map(|v| v[0] * 2));
    println!("big ones: {:?}", odds.filter(|v| v[0] > 4));

    // Reversed sub-slice of the view
    println!("reversed: {:?}", odds.get_slice(SliceSpec::full().with_step(-1)));

    // Out-of-range access is reported, never wrapped
    if let Err(e) = odds.get(4) {
        println!("{e}");
    }

    // Window arithmetic
    let tail = odds.shifted_right(1);
    tail.print();
    if let Ok(all) = odds.concat(ListV::from_descriptor(&src, odds.descriptor().with_start(9).with_stop(10))) {
        all.print();
    }

    println!("source: {:?}", src.borrow());
}
