use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use recycle_collections::linked_list::reusable::ReusableLinkedList;
use std::collections::LinkedList;
use std::hint::black_box;

const FRAME_SIZES: [usize; 3] = [64, 1_024, 16_384];

// Fill a list, drain it, repeat: the per-frame pattern the free list is for.
fn churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_churn");

    for size in FRAME_SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reusable", size), &size, |b, &size| {
            let mut list = ReusableLinkedList::with_capacity(size);
            b.iter(|| {
                for i in 0..size {
                    list.add_last(black_box(i));
                }
                list.clear();
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &size, |b, &size| {
            let mut list = LinkedList::new();
            b.iter(|| {
                for i in 0..size {
                    list.push_back(black_box(i));
                }
                list.clear();
            });
        });
    }

    group.finish();
}

// Random removals by handle and re-insertions next to surviving nodes.
fn handle_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("handle_ops");

    for size in FRAME_SIZES {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("remove_insert", size), &size, |b, &size| {
            let mut rng = StdRng::seed_from_u64(7);
            let mut list = ReusableLinkedList::new();
            let mut handles: Vec<_> = (0..size).map(|i| list.add_last(i)).collect();
            b.iter(|| {
                for _ in 0..size {
                    let at = rng.random_range(0..handles.len());
                    let value = list.remove_node(handles[at]).unwrap();
                    let anchor = handles[rng.random_range(0..handles.len())];
                    handles[at] = match list.add_after(anchor, value) {
                        Ok(handle) => handle,
                        Err(_) => list.add_first(value),
                    };
                }
                black_box(list.len());
            });
        });
    }

    group.finish();
}

fn iter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in FRAME_SIZES {
        let list: ReusableLinkedList<u64> = (0..size as u64).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("sum", size), &list, |b, list| {
            b.iter(|| black_box(list.iter().sum::<u64>()));
        });
    }

    group.finish();
}

criterion_group!(benches, churn_benchmark, handle_benchmark, iter_benchmark);
criterion_main!(benches);
