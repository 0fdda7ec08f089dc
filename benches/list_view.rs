//! Benchmarks for strided ListView traversal against direct slice access
//!
//! Run with: `cargo bench --bench list_view`

use std::cell::RefCell;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use listview::ListV;

fn bench_strided_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("strided_sum");

    for step in [1isize, 2, 8] {
        let data: Vec<i64> = (0..100_000).collect();
        let len = data.len() as isize;
        let src = RefCell::new(data.clone());
        let view = ListV::with_bounds(&src, 0, len, step).unwrap();

        group.bench_with_input(BenchmarkId::new("ListV::iter", step), &step, |b, _| {
            b.iter(|| black_box(view.iter().map(|x| x.map_or(0, |r| *r)).sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("ListV::map", step), &step, |b, _| {
            b.iter(|| black_box(view.map(|x| *x).unwrap().iter().sum::<i64>()));
        });

        group.bench_with_input(BenchmarkId::new("slice::step_by", step), &step, |b, &step| {
            b.iter(|| black_box(data.iter().step_by(step as usize).sum::<i64>()));
        });
    }

    group.finish();
}

fn bench_slice_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice_write");

    for len in [16usize, 1024, 65_536] {
        let src = RefCell::new(vec![0u32; len * 2]);
        let view = ListV::with_bounds(&src, 1, (len * 2) as isize, 2).unwrap();
        let values: Vec<u32> = (0..len as u32).collect();

        group.bench_with_input(BenchmarkId::new("set_slice", len), &len, |b, _| {
            b.iter(|| view.set_slice(.., black_box(values.clone())).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("apply_in_place", len), &len, |b, _| {
            b.iter(|| view.apply_in_place(|items| items.reverse()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_strided_sum, bench_slice_roundtrip);
criterion_main!(benches);
