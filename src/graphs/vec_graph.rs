/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{check_succs, GraphError};
use crate::traits::RandomAccessGraph;

/// An immutable [`RandomAccessGraph`] implementation based on a boxed slice of
/// boxed slices.
///
/// Successors are stored in the order in which they were provided; duplicates
/// and loops are kept as they are.
///
/// # Examples
///
/// ```
/// use parbfs::graphs::vec_graph::VecGraph;
/// use parbfs::traits::RandomAccessGraph;
///
/// let graph = VecGraph::from_adjacency([vec![1, 2], vec![0], vec![0]])?;
/// assert_eq!(graph.num_nodes(), 3);
/// assert_eq!(graph.num_arcs(), 4);
/// assert_eq!(graph.successors(0), &[1, 2]);
/// # Ok::<(), parbfs::graphs::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VecGraph {
    /// The number of arcs in the graph.
    num_arcs: u64,
    /// For each node, its list of successors.
    succ: Box<[Box<[usize]>]>,
}

impl VecGraph {
    /// Creates a new graph with `n` nodes and no arcs.
    pub fn empty(n: usize) -> Self {
        Self {
            num_arcs: 0,
            succ: (0..n).map(|_| Box::default()).collect(),
        }
    }

    /// Creates a new graph from per-node successor lists.
    ///
    /// The number of nodes is the number of lists; the list of index `i`
    /// contains the successors of node `i`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::SuccessorOutOfRange`] if some successor is not
    /// smaller than the number of lists.
    pub fn from_adjacency<I, S>(lists: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = usize>,
    {
        let succ: Box<[Box<[usize]>]> = lists
            .into_iter()
            .map(|s| s.into_iter().collect())
            .collect();
        let num_nodes = succ.len();
        let mut num_arcs = 0;
        for (node, s) in succ.iter().enumerate() {
            check_succs(node, s, num_nodes)?;
            num_arcs += s.len() as u64;
        }
        Ok(Self { num_arcs, succ })
    }

    /// Creates a new graph from successor lists whose successors are known to
    /// be smaller than the number of lists.
    pub(crate) fn from_valid_lists(succ: Vec<Vec<usize>>) -> Self {
        let num_arcs = succ.iter().map(|s| s.len() as u64).sum();
        debug_assert!(succ
            .iter()
            .enumerate()
            .all(|(node, s)| check_succs(node, s, succ.len()).is_ok()));
        Self {
            num_arcs,
            succ: succ.into_iter().map(Vec::into_boxed_slice).collect(),
        }
    }

    /// Creates a new graph from a list of arcs, adding nodes as needed.
    ///
    /// The number of nodes is one plus the largest node appearing in an arc.
    /// The successors of each node appear in the same order as the
    /// corresponding arcs.
    pub fn from_arcs(arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut succ: Vec<Vec<usize>> = Vec::new();
        let mut num_arcs = 0;
        for (u, v) in arcs {
            let max = u.max(v);
            if max >= succ.len() {
                succ.resize_with(max + 1, Vec::new);
            }
            succ[u].push(v);
            num_arcs += 1;
        }
        Self {
            num_arcs,
            succ: succ.into_iter().map(Vec::into_boxed_slice).collect(),
        }
    }
}

impl RandomAccessGraph for VecGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.succ.len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.num_arcs
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.succ[node]
    }
}
