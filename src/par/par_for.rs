/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::is_leaf;
use rayon::ThreadPool;
use std::{convert::Infallible, ops::Range};

/// Applies a fallible operation to every index of a range in parallel.
///
/// The order in which indices are processed is unspecified, so operations on
/// distinct indices must not conflict. If the range has fewer than
/// `threshold` indices, they are processed sequentially in increasing order,
/// stopping at the first error. Otherwise, the range is split at its midpoint
/// and the two halves are processed in parallel on `thread_pool`; the call
/// returns when both halves are done.
///
/// Subtasks are never cancelled: when an operation fails, all other subtasks
/// run to completion, and then the error of the leftmost failing subtask is
/// returned.
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
///
/// let values = [1, 2, 3, 0, 5];
/// let result = try_par_for(&thread_pool![2], 0..values.len(), 2, |i| {
///     if values[i] == 0 { Err(i) } else { Ok(()) }
/// });
/// assert_eq!(result, Err(3));
/// ```
pub fn try_par_for<E, F>(
    thread_pool: &ThreadPool,
    range: Range<usize>,
    threshold: usize,
    op: F,
) -> Result<(), E>
where
    E: Send,
    F: Fn(usize) -> Result<(), E> + Sync,
{
    thread_pool.install(|| fork(range, threshold, &op))
}

/// Applies an operation to every index of a range in parallel.
///
/// This is the infallible version of [`try_par_for`].
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// let counters: Vec<AtomicUsize> = (0..1000).map(|_| AtomicUsize::new(0)).collect();
/// par_for(&thread_pool![4], 0..1000, 16, |i| {
///     counters[i].fetch_add(1, Ordering::Relaxed);
/// });
/// assert!(counters.iter().all(|c| c.load(Ordering::Relaxed) == 1));
/// ```
pub fn par_for<F>(thread_pool: &ThreadPool, range: Range<usize>, threshold: usize, op: F)
where
    F: Fn(usize) + Sync,
{
    let Ok(()) = try_par_for(thread_pool, range, threshold, |i| {
        op(i);
        Ok::<(), Infallible>(())
    });
}

fn fork<E, F>(range: Range<usize>, threshold: usize, op: &F) -> Result<(), E>
where
    E: Send,
    F: Fn(usize) -> Result<(), E> + Sync,
{
    if is_leaf(range.len(), threshold) {
        return range.into_iter().try_for_each(op);
    }

    let mid = range.start + range.len() / 2;
    let (left, right) = rayon::join(
        || fork(range.start..mid, threshold, op),
        || fork(mid..range.end, threshold, op),
    );
    left.and(right)
}
