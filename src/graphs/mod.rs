/*
 * SPDX-FileCopyrightText: 2023 Inria
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of graphs.

use thiserror::Error;

pub mod csr_graph;
pub mod lattice;
pub mod random;
pub mod vec_graph;

pub mod prelude {
    pub use super::csr_graph::CsrGraph;
    pub use super::vec_graph::VecGraph;
    pub use super::GraphError;
}

/// Errors that can occur when building a graph from adjacency lists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A successor list contains a node that does not exist.
    #[error("Successor {succ} of node {node} (at index {index}) does not exist (the graph has {num_nodes} nodes)")]
    SuccessorOutOfRange {
        node: usize,
        index: usize,
        succ: usize,
        num_nodes: usize,
    },
}

/// Checks that all successors in a list are smaller than `num_nodes`.
pub(crate) fn check_succs(node: usize, succs: &[usize], num_nodes: usize) -> Result<(), GraphError> {
    match succs.iter().position(|&succ| succ >= num_nodes) {
        None => Ok(()),
        Some(index) => Err(GraphError::SuccessorOutOfRange {
            node,
            index,
            succ: succs[index],
            num_nodes,
        }),
    }
}
