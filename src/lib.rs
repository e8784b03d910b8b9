//! A binary max-heap that works either on plain numbers or as a priority queue of [`Entry`]s
//! whose priorities can be changed in place.
//!
//! ```
//! use maxheap::{Entry, MaxHeap};
//!
//! let mut queue = MaxHeap::new();
//! queue.insert(Entry::with_payload(1.0, "low")).unwrap();
//! queue.insert(Entry::with_payload(5.0, "high")).unwrap();
//!
//! queue.update_priority(&Entry::new(1.0), 9).unwrap();
//! assert_eq!(queue.extract_max().and_then(Entry::into_payload), Some("low"));
//! ```

mod entry;
mod error;
mod heap;
mod item;

pub use entry::Entry;
pub use error::{priority_from, HeapError};
pub use heap::{build_heap, heap_sort, is_heap, left, parent, right, MaxHeap};
pub use item::{HeapElement, HeapItem, Kind};

#[cfg(test)]
use rand::prelude::*;

#[cfg(test)]
fn bench<F: FnOnce()>(name: &str, num_tabs: usize, f: F) {
    use std::time::{Duration, Instant};
    let start = Instant::now();
    f();
    let elapsed = start.elapsed();

    print!("BENCH `{}` :", name);
    for _ in 0..num_tabs {
        print!("\t");
    }

    if elapsed < Duration::from_millis(1) {
        println!(
            "{} {:03} nanos",
            elapsed.as_micros(),
            elapsed.as_nanos() % 1000,
        );
    } else if elapsed < Duration::from_secs(1) {
        println!(
            "{} {:03} micros",
            elapsed.as_millis(),
            elapsed.as_micros() % 1000,
        );
    } else {
        println!(
            "{} {:03} millis",
            elapsed.as_secs(),
            elapsed.subsec_millis(),
        );
    }
}

#[cfg(test)]
fn validate_max_heap_dstruct() {
    let mut rng = SmallRng::from_entropy();

    const K: usize = 16;
    const N: usize = K * 256;

    let mut heap = MaxHeap::with_capacity(N);
    let mut next_id = 0;

    println!("[Validate MaxHeap]");
    for k in 0..K {
        for _ in 0..N / K {
            let priority = rng.gen_range(-1000.0..1000.0);
            heap.insert(Entry::with_payload(priority, next_id)).unwrap();
            next_id += 1;
        }
        assert!(is_heap(heap.as_slice()));

        // shuffle some priorities around, both up and down
        for _ in 0..N / K {
            let i = rng.gen_range(0..heap.len());
            let priority: f64 = rng.gen_range(-1000.0..1000.0);
            heap.update_priority_at(i, priority).unwrap();
        }
        assert!(is_heap(heap.as_slice()));

        // drain a few, every payload comes out once
        for _ in 0..k {
            let top = heap.extract_max().unwrap();
            assert!(heap.peek_max().map_or(true, |next| next <= &top));
        }
        assert!(is_heap(heap.as_slice()));
    }

    let sorted = heap.sorted();
    assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

    let mut seen = vec![false; next_id];
    while let Some(entry) = heap.extract_max() {
        let id = entry.into_payload().unwrap();
        assert!(!seen[id]);
        seen[id] = true;
    }
    assert_eq!(seen.iter().filter(|&&s| s).count(), sorted.len());
    println!("MaxHeap VALIDATED");
    println!();
}

#[cfg(test)]
fn bench_max_heap_dstruct() {
    use ordered_float::OrderedFloat;

    let mut rng = SmallRng::from_entropy();

    const N: usize = 64 * 1024;

    let values: Vec<f64> = (0..N).map(|_| rng.gen_range(0.0..1000_000.0)).collect();
    let mut sorted = values.clone();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap());

    let mut std_heap = std::collections::BinaryHeap::with_capacity(N);
    bench("std::collections::BinaryHeap::push", 2, || {
        for &x in values.iter() {
            std_heap.push(OrderedFloat(x));
        }
    });
    bench("std::collections::BinaryHeap::pop", 2, || {
        for &x in sorted.iter() {
            assert_eq!(std_heap.pop(), Some(OrderedFloat(x)));
        }
    });
    println!();

    let mut heap = MaxHeap::with_capacity(N);
    bench("MaxHeap::insert", 5, || {
        for (len, &x) in values.iter().enumerate() {
            assert_eq!(heap.len(), len);
            heap.insert(x).unwrap();
        }
    });
    bench("MaxHeap::update_priority_at", 4, || {
        for i in 0..N {
            let x = heap.as_slice()[i];
            heap.update_priority_at(i, x).unwrap();
        }
    });
    bench("MaxHeap::sorted", 5, || {
        let ascending = heap.sorted();
        assert!(ascending.iter().rev().eq(sorted.iter()));
    });
    bench("MaxHeap::extract_max", 4, || {
        for &x in sorted.iter() {
            assert_eq!(heap.extract_max(), Some(x));
        }
    });
    println!();

    bench("build_heap", 6, || {
        assert!(is_heap(&build_heap(values.clone())));
    });
}

#[test]
pub fn main() {
    validate_max_heap_dstruct();
    bench_max_heap_dstruct();
    println!();
}
