/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use parbfs::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

fn counters(n: usize) -> Vec<AtomicUsize> {
    (0..n).map(|_| AtomicUsize::new(0)).collect()
}

#[test]
fn test_every_index_once() {
    let thread_pool = thread_pool![4];
    let n = 10_000;
    // From always-parallel to always-sequential
    for threshold in [0, 1, 2, 3, 7, 64, 1000, n, n + 1, DEFAULT_THRESHOLD] {
        let c = counters(n);
        par_for(&thread_pool, 0..n, threshold, |i| {
            c[i].fetch_add(1, Ordering::Relaxed);
        });
        assert!(
            c.iter().all(|x| x.load(Ordering::Relaxed) == 1),
            "threshold {threshold}"
        );
    }
}

#[test]
fn test_subrange() {
    let thread_pool = thread_pool![3];
    let c = counters(100);
    par_for(&thread_pool, 10..90, 4, |i| {
        c[i].fetch_add(1, Ordering::Relaxed);
    });
    for (i, x) in c.iter().enumerate() {
        let expected = usize::from((10..90).contains(&i));
        assert_eq!(x.load(Ordering::Relaxed), expected);
    }
}

#[test]
fn test_empty_range() {
    let thread_pool = thread_pool![2];
    let calls = AtomicUsize::new(0);
    par_for(&thread_pool, 5..5, 1, |_| {
        calls.fetch_add(1, Ordering::Relaxed);
    });
    #[allow(clippy::reversed_empty_ranges)]
    par_for(&thread_pool, 7..3, 1, |_| {
        calls.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_sequential_leaf_is_ordered() {
    // Below the threshold indices are processed in increasing order
    let thread_pool = thread_pool![4];
    let order = std::sync::Mutex::new(Vec::new());
    par_for(&thread_pool, 0..100, 1000, |i| {
        order.lock().unwrap().push(i);
    });
    assert_eq!(order.into_inner().unwrap(), (0..100).collect::<Vec<_>>());
}

#[test]
fn test_single_thread_pool() {
    let thread_pool = thread_pool![1];
    let c = counters(5000);
    par_for(&thread_pool, 0..5000, 1, |i| {
        c[i].fetch_add(i, Ordering::Relaxed);
    });
    assert!(c.iter().enumerate().all(|(i, x)| x.load(Ordering::Relaxed) == i));
}

#[test]
fn test_error_after_siblings_complete() {
    let thread_pool = thread_pool![4];
    let n = 4096;
    let c = counters(n);
    let result = try_par_for(&thread_pool, 0..n, 16, |i| {
        if i == 100 {
            return Err(i);
        }
        c[i].fetch_add(1, Ordering::Relaxed);
        Ok(())
    });
    assert_eq!(result, Err(100));
    // Only the leaf containing the failing index stops early: siblings are
    // never cancelled.
    let done = c.iter().filter(|x| x.load(Ordering::Relaxed) == 1).count();
    assert!(done >= n - 16);
    assert!(c[n - 1].load(Ordering::Relaxed) == 1);
    assert!(c[..100].iter().all(|x| x.load(Ordering::Relaxed) == 1));
}

#[test]
fn test_leftmost_error() {
    let thread_pool = thread_pool![4];
    let result = try_par_for(&thread_pool, 0..1000, 1, |i| {
        if i % 100 == 42 {
            Err(i)
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err(42));
}

#[test]
fn test_ok() {
    let thread_pool = thread_pool![];
    let result: Result<(), ()> = try_par_for(&thread_pool, 0..100_000, 128, |_| Ok(()));
    assert!(result.is_ok());
}
