/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{BfsError, Claims, UNREACHABLE};
use crate::par::{par_for, par_scan, try_par_for, DEFAULT_THRESHOLD};
use crate::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use rayon::{prelude::*, ThreadPool};
use sync_cell_slice::SyncSlice;

/// Marks the slots of a next-frontier buffer that were not filled.
///
/// No node can have this value, as nodes are smaller than the number of nodes.
const UNCLAIMED: usize = usize::MAX;

/// Layer-synchronous parallel breadth-first visits computing distances.
///
/// The visit processes all nodes at distance `d` before any node at distance
/// `d + 1`. Each layer (the *frontier*) is expanded as follows, with a full
/// barrier between steps:
///
/// 1. the outdegrees of the nodes of the frontier are gathered in parallel;
/// 2. a [parallel prefix sum](crate::par::par_scan) turns the outdegrees into
///    offsets, so that the `k`-th successor of the `i`-th node of the
///    frontier has its own slot, at offset `offsets[i] + k`, in a buffer
///    large enough to contain all successors of the frontier;
/// 3. the frontier is walked again in parallel, and every successor is
///    [claimed](Claims::claim): the thread winning the claim assigns the
///    distance and writes the node in its slot;
/// 4. the buffer is compacted, preserving order, removing unfilled slots:
///    the result is the next frontier.
///
/// Since every node is claimed at most once, it appears in at most one
/// frontier: the total size of buffers is bounded by the number of arcs, and
/// the visit does an amount of work proportional to that of a
/// [sequential visit](super::Seq).
///
/// Below the threshold, which is the same for the parallel loops and for the
/// prefix sum, work is performed sequentially; parallelism is bounded by the
/// number of threads of the [`ThreadPool`] passed to
/// [`visit`](ParLayered::visit).
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = ParLayered::with_threshold(&graph, 1);
/// let distances = visit.visit(0, &thread_pool![4], no_logging![])?;
/// assert_eq!(&*distances, &[0, 1, 2, 2]);
/// # Ok::<(), BfsError>(())
/// ```
pub struct ParLayered<G: RandomAccessGraph> {
    graph: G,
    threshold: usize,
    claims: Claims,
}

impl<G: RandomAccessGraph> ParLayered<G> {
    /// Creates a layer-synchronous parallel breadth-first visit.
    ///
    /// This constructor uses the [default threshold](DEFAULT_THRESHOLD). Use
    /// [`with_threshold`](Self::with_threshold) to set a different
    /// threshold.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        Self::with_threshold(graph, DEFAULT_THRESHOLD)
    }

    /// Creates a layer-synchronous parallel breadth-first visit.
    ///
    /// # Arguments
    ///
    /// * `graph`: the graph to visit.
    ///
    /// * `threshold`: the number of frontier nodes (or outdegrees, for the
    ///   prefix sum) below which work is performed sequentially. A high
    ///   threshold reduces overhead, but may lead to decreased parallelism on
    ///   small frontiers.
    pub fn with_threshold(graph: G, threshold: usize) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            threshold,
            claims: Claims::new(num_nodes),
        }
    }

    /// Returns the threshold of this visit.
    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl<G: RandomAccessGraph + Sync> ParLayered<G> {
    /// Visits the graph from `start`, returning the distance of each node
    /// from `start`, or [`UNREACHABLE`] for nodes that cannot be reached.
    ///
    /// Claims are cleared at the start of each call, so the same visit can be
    /// used for multiple starting nodes.
    ///
    /// # Errors
    ///
    /// [`BfsError::StartOutOfRange`] if `start` is not a node of the graph,
    /// and [`BfsError::SuccessorOutOfRange`] if the visit finds a successor
    /// that is not a node of the graph. In the latter case, the error is
    /// returned after all tasks of the current layer have completed.
    pub fn visit(
        &mut self,
        start: usize,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[usize]>, BfsError> {
        let num_nodes = self.graph.num_nodes();
        if start >= num_nodes {
            return Err(BfsError::StartOutOfRange { start, num_nodes });
        }

        self.claims.reset();
        let mut distances = vec![UNREACHABLE; num_nodes].into_boxed_slice();

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!(
            "Visiting graph in parallel from node {start} using {} threads...",
            thread_pool.current_num_threads()
        ));

        let graph = &self.graph;
        let claims = &self.claims;
        let threshold = self.threshold;

        claims.claim(start);
        distances[start] = 0;
        let mut frontier = vec![start];
        let mut distance = 0;

        while !frontier.is_empty() {
            pl.update_with_count(frontier.len());
            let next_distance = distance + 1;

            let mut degrees = vec![0; frontier.len()].into_boxed_slice();
            let degrees_sync = degrees.as_sync_slice();
            par_for(thread_pool, 0..frontier.len(), threshold, |i| {
                // SAFETY: each index is written by exactly one task
                unsafe { degrees_sync[i].set(graph.outdegree(frontier[i])) };
            });

            let offsets = par_scan(thread_pool, &degrees, threshold);
            let total = offsets[frontier.len()];

            let mut buffer = vec![UNCLAIMED; total].into_boxed_slice();
            let buffer_sync = buffer.as_sync_slice();
            let distances_sync = distances.as_sync_slice();
            try_par_for(thread_pool, 0..frontier.len(), threshold, |i| {
                let node = frontier[i];
                for (k, &succ) in graph.successors(node).iter().enumerate() {
                    if succ >= num_nodes {
                        return Err(BfsError::SuccessorOutOfRange {
                            node,
                            succ,
                            num_nodes,
                        });
                    }
                    if claims.claim(succ) {
                        // SAFETY: only the thread claiming a node writes its
                        // distance, and each slot of the buffer belongs to a
                        // single arc of the frontier.
                        unsafe {
                            distances_sync[succ].set(next_distance);
                            buffer_sync[offsets[i] + k].set(succ);
                        }
                    }
                }
                Ok(())
            })?;

            frontier = thread_pool.install(|| {
                buffer
                    .par_iter()
                    .copied()
                    .filter(|&node| node != UNCLAIMED)
                    .collect()
            });

            log::debug!(
                "Layer {}: {} arcs scanned, {} nodes discovered",
                distance,
                total,
                frontier.len()
            );
            distance = next_distance;
        }

        pl.done();
        log::info!("Visit from node {} completed with {} layers", start, distance);
        Ok(distances)
    }
}
