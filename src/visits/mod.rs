/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits computing distances.
//!
//! Visits start from a node and return a boxed slice containing, for each
//! node, its distance from the start node in number of arcs, or
//! [`UNREACHABLE`] if there is no path from the start node.
//!
//! [Sequential visits](Seq) use a single thread, whereas [layer-synchronous
//! parallel visits](ParLayered) use the threads of a [`ThreadPool`] passed
//! by reference. The two kinds of visit return the same distances on the same
//! input, independently of the number of threads.
//!
//! The functions [`sequential_bfs`] and [`parallel_bfs`] are convenience
//! wrappers that build a visit, run it without logging, and return the
//! distances.

mod claims;
pub use claims::*;

mod par_layered;
pub use par_layered::*;

mod seq;
pub use seq::*;

use crate::traits::RandomAccessGraph;
use dsi_progress_logger::no_logging;
use rayon::ThreadPool;
use thiserror::Error;

/// The distance assigned to nodes that cannot be reached from the start node.
///
/// It is never a valid distance, as distances are smaller than the number of
/// nodes.
pub const UNREACHABLE: usize = usize::MAX;

/// Errors that can occur during a visit.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BfsError {
    /// The start node is not a node of the graph.
    #[error("Start node {start} does not exist (the graph has {num_nodes} nodes)")]
    StartOutOfRange { start: usize, num_nodes: usize },
    /// A node has a successor that is not a node of the graph.
    #[error("Successor {succ} of node {node} does not exist (the graph has {num_nodes} nodes)")]
    SuccessorOutOfRange {
        node: usize,
        succ: usize,
        num_nodes: usize,
    },
}

/// Returns the distances from `start` computed by a [sequential visit](Seq).
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
///
/// let graph = VecGraph::from_adjacency([vec![1], vec![0, 2], vec![1], vec![]])?;
/// assert_eq!(&*sequential_bfs(&graph, 0)?, &[0, 1, 2, UNREACHABLE]);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn sequential_bfs(
    graph: impl RandomAccessGraph,
    start: usize,
) -> Result<Box<[usize]>, BfsError> {
    Seq::new(graph).visit(start, no_logging![])
}

/// Returns the distances from `start` computed by a [layer-synchronous
/// parallel visit](ParLayered) with the [default
/// threshold](crate::par::DEFAULT_THRESHOLD) on the given thread pool.
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
///
/// let graph = parbfs::graphs::lattice::cube(3);
/// let distances = parallel_bfs(&graph, 0, &thread_pool![2])?;
/// assert_eq!(distances[26], 6);
/// assert_eq!(distances, sequential_bfs(&graph, 0)?);
/// # Ok::<(), BfsError>(())
/// ```
pub fn parallel_bfs(
    graph: impl RandomAccessGraph + Sync,
    start: usize,
    thread_pool: &ThreadPool,
) -> Result<Box<[usize]>, BfsError> {
    ParLayered::new(graph).visit(start, thread_pool, no_logging![])
}
