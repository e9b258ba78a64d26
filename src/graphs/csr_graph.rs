/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 * SPDX-FileCopyrightText: 2025 Tommaso Fontana
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{check_succs, GraphError};
use crate::traits::RandomAccessGraph;

/// A compressed sparse-row graph.
///
/// It is a graph representation that stores the degree-cumulative function
/// (DCF) and the successors in two flat boxed slices. The DCF is a sequence of
/// `n + 1` offsets: the successors of node `x` are those in the range
/// `dcf[x]..dcf[x + 1]` of the successor slice.
///
/// With respect to a [`VecGraph`](super::vec_graph::VecGraph) it uses a
/// single allocation for all successors, which makes it the representation of
/// choice for large graphs such as [lattices](super::lattice::cube).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsrGraph {
    dcf: Box<[usize]>,
    successors: Box<[usize]>,
}

impl core::default::Default for CsrGraph {
    fn default() -> Self {
        Self {
            dcf: vec![0].into(),
            successors: vec![].into(),
        }
    }
}

impl CsrGraph {
    /// Creates an empty CSR graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new CSR graph from the given degree-cumulative function and
    /// successors.
    ///
    /// # Safety
    ///
    /// The degree-cumulative function must start at zero, be monotone, and
    /// end at the length of the successors; all successors must be smaller
    /// than the length of the degree-cumulative function minus one.
    pub unsafe fn from_parts(dcf: Box<[usize]>, successors: Box<[usize]>) -> Self {
        Self { dcf, successors }
    }

    /// Creates a new CSR graph from per-node successor lists.
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
        let mut dcf = vec![0];
        let mut successors = vec![];
        for s in lists {
            successors.extend(s);
            dcf.push(successors.len());
        }
        let num_nodes = dcf.len() - 1;
        for node in 0..num_nodes {
            check_succs(node, &successors[dcf[node]..dcf[node + 1]], num_nodes)?;
        }
        Ok(Self {
            dcf: dcf.into(),
            successors: successors.into(),
        })
    }

    /// Creates a new CSR graph with the same nodes and successors of a given
    /// graph.
    pub fn from_graph<G: RandomAccessGraph>(graph: &G) -> Self {
        let num_nodes = graph.num_nodes();
        let mut dcf = Vec::with_capacity(num_nodes + 1);
        let mut successors = Vec::with_capacity(graph.num_arcs() as usize);
        dcf.push(0);
        for node in 0..num_nodes {
            successors.extend_from_slice(graph.successors(node));
            dcf.push(successors.len());
        }
        Self {
            dcf: dcf.into(),
            successors: successors.into(),
        }
    }

    /// Returns the degree-cumulative function.
    pub fn dcf(&self) -> &[usize] {
        &self.dcf
    }

    /// Returns a pair containing the degree-cumulative function and the
    /// successors.
    pub fn into_inner(self) -> (Box<[usize]>, Box<[usize]>) {
        (self.dcf, self.successors)
    }
}

impl RandomAccessGraph for CsrGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.dcf.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> u64 {
        self.successors.len() as u64
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        &self.successors[self.dcf[node]..self.dcf[node + 1]]
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.dcf[node + 1] - self.dcf[node]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::vec_graph::VecGraph;

    #[test]
    fn test_from_graph() -> Result<(), GraphError> {
        let lists = [vec![1, 3], vec![], vec![2, 2, 0], vec![1]];
        let g = VecGraph::from_adjacency(lists.clone())?;
        let csr = CsrGraph::from_graph(&g);
        assert_eq!(csr, CsrGraph::from_adjacency(lists)?);
        assert_eq!(csr.num_nodes(), 4);
        assert_eq!(csr.num_arcs(), 6);
        assert_eq!(csr.dcf(), &[0, 2, 2, 5, 6]);
        for node in 0..4 {
            assert_eq!(csr.successors(node), g.successors(node));
            assert_eq!(csr.outdegree(node), g.outdegree(node));
        }
        let (dcf, successors) = csr.into_inner();
        assert_eq!(&*dcf, &[0, 2, 2, 5, 6]);
        assert_eq!(&*successors, &[1, 3, 2, 2, 0, 1]);
        Ok(())
    }

    #[test]
    fn test_default() {
        let g = CsrGraph::new();
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.num_arcs(), 0);
    }

    #[test]
    fn test_out_of_range() {
        assert!(matches!(
            CsrGraph::from_adjacency([vec![0], vec![2]]),
            Err(GraphError::SuccessorOutOfRange { node: 1, succ: 2, .. })
        ));
    }
}
