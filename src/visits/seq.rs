/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{BfsError, UNREACHABLE};
use crate::traits::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit computing distances.
///
/// This is the classical textbook algorithm: nodes are marked as visited and
/// assigned their distance when they are discovered, and then expanded in
/// FIFO order. It runs in time linear in the number of nodes and arcs, and it
/// is the reference against which [parallel visits](super::ParLayered) are
/// checked.
///
/// The structure can be reused for multiple visits, amortizing the
/// allocation of the visited flags and of the queue.
///
/// # Examples
///
/// ```
/// use parbfs::prelude::*;
/// use dsi_progress_logger::no_logging;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2), (2, 0), (1, 3)]);
/// let mut visit = Seq::new(&graph);
/// assert_eq!(&*visit.visit(0, no_logging![])?, &[0, 1, 2, 2]);
/// assert_eq!(&*visit.visit(3, no_logging![])?, &[UNREACHABLE, UNREACHABLE, UNREACHABLE, 0]);
/// # Ok::<(), BfsError>(())
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    queue: VecDeque<usize>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
        }
    }

    /// Visits the graph from `start`, returning the distance of each node
    /// from `start`, or [`UNREACHABLE`] for nodes that cannot be reached.
    ///
    /// # Errors
    ///
    /// [`BfsError::StartOutOfRange`] if `start` is not a node of the graph,
    /// and [`BfsError::SuccessorOutOfRange`] if the visit finds a successor
    /// that is not a node of the graph.
    pub fn visit(
        &mut self,
        start: usize,
        pl: &mut impl ProgressLog,
    ) -> Result<Box<[usize]>, BfsError> {
        let num_nodes = self.graph.num_nodes();
        if start >= num_nodes {
            return Err(BfsError::StartOutOfRange { start, num_nodes });
        }

        self.visited.fill(false);
        self.queue.clear();
        let mut distances = vec![UNREACHABLE; num_nodes].into_boxed_slice();

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.start(format!("Visiting graph sequentially from node {start}..."));

        self.visited.set(start, true);
        distances[start] = 0;
        self.queue.push_back(start);

        while let Some(node) = self.queue.pop_front() {
            pl.light_update();
            let distance = distances[node] + 1;
            for &succ in self.graph.successors(node) {
                if succ >= num_nodes {
                    return Err(BfsError::SuccessorOutOfRange {
                        node,
                        succ,
                        num_nodes,
                    });
                }
                if !self.visited[succ] {
                    self.visited.set(succ, true);
                    distances[succ] = distance;
                    self.queue.push_back(succ);
                }
            }
        }

        pl.done();
        Ok(distances)
    }
}
