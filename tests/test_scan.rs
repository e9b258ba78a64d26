/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use parbfs::prelude::*;
use proptest::prelude::*;

fn seq_scan(data: &[usize]) -> Vec<usize> {
    let mut result = Vec::with_capacity(data.len() + 1);
    let mut sum = 0;
    result.push(0);
    for &x in data {
        sum += x;
        result.push(sum);
    }
    result
}

#[test]
fn test_scan_examples() {
    let thread_pool = thread_pool![2];
    assert_eq!(&*par_scan(&thread_pool, &[1, 1, 1, 1], 2), &[0, 1, 2, 3, 4]);
    assert_eq!(&*par_scan(&thread_pool, &[3, 0, 2], 1), &[0, 3, 3, 5]);
    assert_eq!(&*par_scan(&thread_pool, &[], 1), &[0]);
    assert_eq!(&*par_scan(&thread_pool, &[7], 0), &[0, 7]);
}

#[test]
fn test_scan_thresholds() {
    let thread_pool = thread_pool![4];
    let data = (0..10_000).map(|i| i % 17).collect::<Vec<_>>();
    let expected = seq_scan(&data);
    for threshold in [0, 1, 2, 5, 100, 9_999, 10_000, 10_001, DEFAULT_THRESHOLD] {
        assert_eq!(
            &*par_scan(&thread_pool, &data, threshold),
            &expected[..],
            "threshold {threshold}"
        );
    }
}

#[test]
fn test_scan_zeros() {
    let thread_pool = thread_pool![3];
    let result = par_scan(&thread_pool, &[0; 1000], 3);
    assert_eq!(result.len(), 1001);
    assert!(result.iter().all(|&x| x == 0));
}

proptest! {
    #[test]
    fn test_scan_matches_prefix_sums(
        data in prop::collection::vec(0..1000_usize, 0..3000),
        threshold in 0..64_usize,
        num_threads in 1..5_usize,
    ) {
        let thread_pool = thread_pool![num_threads];
        let result = par_scan(&thread_pool, &data, threshold);
        prop_assert_eq!(result.len(), data.len() + 1);
        prop_assert_eq!(result[0], 0);
        for (i, &x) in data.iter().enumerate() {
            prop_assert_eq!(result[i + 1] - result[i], x);
        }
        prop_assert_eq!(result[data.len()], data.iter().sum::<usize>());
    }
}
