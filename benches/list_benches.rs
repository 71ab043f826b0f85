use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fastlist::list::{FastList, Tray};
use fastlist::mem::{MemPool, SharedPool};
use rand::seq::SliceRandom;
use std::cell::RefCell;
use std::collections::LinkedList;
use std::rc::Rc;

const SAMPLE_SIZE: usize = 10_000;

fn prewarmed_pool<T>() -> SharedPool<Tray<T>> {
    Rc::new(RefCell::new(MemPool::with_capacity(SAMPLE_SIZE)))
}

// --- FIFO churn: fill and drain, the pool's steady-state workload ---

fn fifo_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fifo_churn");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let pool = prewarmed_pool::<u32>();

    group.bench_function(BenchmarkId::new("pooled_fast_list", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = FastList::new(pool.clone());
            for i in 0..SAMPLE_SIZE as u32 {
                list.push_back(i);
            }
            while let Some(value) = list.pop_front() {
                black_box(value);
            }
        });
    });

    group.bench_function(BenchmarkId::new("std_linked_list", SAMPLE_SIZE), |b| {
        b.iter(|| {
            let mut list = LinkedList::new();
            for i in 0..SAMPLE_SIZE as u32 {
                list.push_back(i);
            }
            while let Some(value) = list.pop_front() {
                black_box(value);
            }
        });
    });

    group.finish();
}

// --- Cursor filter: one forward pass removing half the elements ---

fn cursor_filter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("cursor_filter");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let pool = prewarmed_pool::<u32>();

    group.bench_function(BenchmarkId::new("remove_odd_values", SAMPLE_SIZE), |b| {
        b.iter_with_setup(
            || {
                let mut values: Vec<u32> = (0..SAMPLE_SIZE as u32).collect();
                values.shuffle(&mut rand::rng());
                values
            },
            |values| {
                let mut list = FastList::new(pool.clone());
                list.extend(values);

                let mut iter = list.iter();
                let mut cur = iter.reset();
                while let Some(value) = cur {
                    cur = if value % 2 == 1 {
                        iter.remove();
                        iter.current()
                    } else {
                        iter.advance()
                    };
                }
                black_box(list.len());
            },
        );
    });

    group.finish();
}

criterion_group!(benches, fifo_churn_benchmark, cursor_filter_benchmark);
criterion_main!(benches);
