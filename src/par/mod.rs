/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fork-join parallel primitives.
//!
//! Both primitives recursively halve their input, running the two halves with
//! [`rayon::join`] inside the [`ThreadPool`](rayon::ThreadPool) passed by the
//! caller, until the input is shorter than a *threshold*: at that point, the
//! input is processed sequentially. A higher threshold reduces overhead, a
//! lower threshold exposes more parallelism. Inputs of length at most one are
//! never split, so every threshold, including zero and one, leads to a
//! terminating recursion.
//!
//! * [`par_for`] and [`try_par_for`] apply an operation to every index of a
//!   range;
//! * [`par_scan`] computes an exclusive prefix sum.

mod par_for;
pub use par_for::*;

mod scan;
pub use scan::*;

/// The default threshold below which inputs are processed sequentially.
pub const DEFAULT_THRESHOLD: usize = 1 << 14;

/// Returns whether an input of length `len` must be processed sequentially.
#[inline(always)]
fn is_leaf(len: usize, threshold: usize) -> bool {
    len < threshold || len <= 1
}
