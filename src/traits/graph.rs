/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Random access to immutable graphs.

A graph has nodes identified by the integers in `[0..n)`, where `n` is
returned by [`num_nodes`](RandomAccessGraph::num_nodes). Each node has an
ordered list of successors, which can be accessed in constant time as a slice.
Duplicate successors and loops are allowed.

Graphs are never modified after construction, so every implementation that
is [`Sync`] can be shared freely among the threads of a parallel visit.

*/

/// A graph providing random access to the successors of its nodes.
pub trait RandomAccessGraph {
    /// Returns the number of nodes in the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs in the graph.
    fn num_arcs(&self) -> u64;

    /// Returns the successors of a node, in the order in which they were
    /// provided at construction time.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `node` is not smaller than
    /// [`num_nodes`](RandomAccessGraph::num_nodes).
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the number of successors of a node.
    ///
    /// Implementations overriding this method must return the length of
    /// [`successors`](RandomAccessGraph::successors).
    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        (**self).num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }
}
