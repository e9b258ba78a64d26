/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::is_leaf;
use rayon::ThreadPool;
use sync_cell_slice::{SyncCell, SyncSlice};

/// Computes in parallel the exclusive prefix sum of a slice.
///
/// The result has length `data.len() + 1`: its first element is zero, the
/// element of index `i + 1` is the element of index `i` plus `data[i]`, and
/// thus the last element is the sum of `data`.
///
/// The computation is performed by two passes over an implicit binary tree
/// whose leaves are ranges of `data` shorter than `threshold` (the same leaf
/// rule of [`par_for`](super::par_for)). The first pass computes bottom-up
/// the sum of each subtree; the second pass, which starts only when the
/// first one is complete, pushes top-down to each subtree the sum of the
/// elements preceding it, and writes the result at the leaves.
///
/// Sums are computed with `usize` arithmetic and no overflow detection: the
/// caller must guarantee that the sum of `data` fits a `usize`. This is
/// always true for the outdegrees of a set of distinct nodes of a graph held
/// in memory.
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
///
/// let scan = par_scan(&thread_pool![2], &[3, 1, 4, 1, 5], 2);
/// assert_eq!(&*scan, &[0, 3, 4, 8, 9, 14]);
/// ```
pub fn par_scan(thread_pool: &ThreadPool, data: &[usize], threshold: usize) -> Box<[usize]> {
    let mut result = vec![0; data.len() + 1].into_boxed_slice();
    let mut sums = vec![0; scratch_len(data.len(), threshold)].into_boxed_slice();

    thread_pool.install(|| {
        up_sweep(data, threshold, 1, sums.as_sync_slice());
        down_sweep(data, &mut result[1..], threshold, 1, 0, &sums);
    });

    result
}

/// Returns the length of the heap-indexed tree of sums used by [`par_scan`].
///
/// The root has index one, and the children of the node of index `i` have
/// indices `2i` and `2i + 1`. A node with `len` elements has children with
/// `⌊len / 2⌋` and `⌈len / 2⌉` elements, so no node at a given depth is larger
/// than the node reached by taking `⌈len / 2⌉` at every split, and the depth
/// of the tree is the number of splits along that chain. Nodes at depth `d`
/// have indices in `[2^d..2^(d + 1))`.
pub(crate) fn scratch_len(len: usize, threshold: usize) -> usize {
    let mut len = len;
    let mut depth = 0;
    while !is_leaf(len, threshold) {
        len = len.div_ceil(2);
        depth += 1;
    }
    2 << depth
}

fn up_sweep(data: &[usize], threshold: usize, idx: usize, sums: &[SyncCell<usize>]) -> usize {
    let sum = if is_leaf(data.len(), threshold) {
        data.iter().sum()
    } else {
        let (left, right) = data.split_at(data.len() / 2);
        let (left_sum, right_sum) = rayon::join(
            || up_sweep(left, threshold, 2 * idx, sums),
            || up_sweep(right, threshold, 2 * idx + 1, sums),
        );
        left_sum + right_sum
    };
    // SAFETY: every index of the tree is written by exactly one task, and it is
    // read only after the pass is complete.
    unsafe { sums[idx].set(sum) };
    sum
}

fn down_sweep(
    data: &[usize],
    result: &mut [usize],
    threshold: usize,
    idx: usize,
    prefix: usize,
    sums: &[usize],
) {
    if is_leaf(data.len(), threshold) {
        let mut acc = prefix;
        for (r, &d) in result.iter_mut().zip(data) {
            acc += d;
            *r = acc;
        }
        return;
    }

    let mid = data.len() / 2;
    let (data_left, data_right) = data.split_at(mid);
    let (result_left, result_right) = result.split_at_mut(mid);
    let left_sum = sums[2 * idx];
    rayon::join(
        || down_sweep(data_left, result_left, threshold, 2 * idx, prefix, sums),
        || {
            down_sweep(
                data_right,
                result_right,
                threshold,
                2 * idx + 1,
                prefix + left_sum,
                sums,
            )
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_len() {
        assert_eq!(scratch_len(0, 4), 2);
        assert_eq!(scratch_len(3, 4), 2);
        assert_eq!(scratch_len(4, 4), 4);
        // 7 -> 4 -> 2: two splits
        assert_eq!(scratch_len(7, 4), 8);
        // 9 -> 5 -> 3: two splits
        assert_eq!(scratch_len(9, 4), 8);
        // with threshold one, we split down to single elements
        assert_eq!(scratch_len(5, 1), 16);
        assert_eq!(scratch_len(5, 0), 16);
        assert_eq!(scratch_len(1, 0), 2);
    }

    /// Returns the largest tree index touched when scanning `len` elements.
    fn max_index(len: usize, threshold: usize, idx: usize) -> usize {
        if is_leaf(len, threshold) {
            idx
        } else {
            max_index(len / 2, threshold, 2 * idx).max(max_index(
                len.div_ceil(2),
                threshold,
                2 * idx + 1,
            ))
        }
    }

    #[test]
    fn test_scratch_len_is_sufficient() {
        for threshold in [0, 1, 2, 3, 5, 8, 64] {
            for len in 0..2000 {
                assert!(max_index(len, threshold, 1) < scratch_len(len, threshold));
            }
        }
    }

    #[test]
    fn test_scan_small() {
        let thread_pool = crate::thread_pool![3];
        assert_eq!(&*par_scan(&thread_pool, &[], 1), &[0]);
        assert_eq!(&*par_scan(&thread_pool, &[7], 1), &[0, 7]);
        assert_eq!(
            &*par_scan(&thread_pool, &[1; 10], 1),
            &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10]
        );
    }
}
