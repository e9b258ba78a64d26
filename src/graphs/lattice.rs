/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Cubic lattices.
//!
//! The lattice of side `k` has `k³` nodes, one for each cell `(x, y, z)` with
//! coordinates in `[0..k)`; node `x + y·k + z·k²` has an arc towards each cell
//! at distance one along an axis. The distance between two nodes is thus the
//! Manhattan distance of the corresponding cells, which makes lattices
//! convenient to test visits at scale.

use super::csr_graph::CsrGraph;

/// Returns the node of the lattice of side `side` corresponding to a cell.
#[inline(always)]
pub fn node(side: usize, x: usize, y: usize, z: usize) -> usize {
    x + y * side + z * side * side
}

/// Returns the cell of the lattice of side `side` corresponding to a node.
#[inline(always)]
pub fn cell(side: usize, node: usize) -> (usize, usize, usize) {
    (node % side, (node / side) % side, node / side / side)
}

/// Builds the lattice of side `side`.
///
/// Successors are listed in the order −x, +x, −y, +y, −z, +z (missing
/// neighbors on the faces of the cube are skipped).
pub fn cube(side: usize) -> CsrGraph {
    let num_nodes = side * side * side;
    // Each of the three axes contributes two arcs for each of its side - 1
    // adjacent pairs along each of the side² lines.
    let num_arcs = 6 * side.saturating_sub(1) * side * side;
    let mut dcf = Vec::with_capacity(num_nodes + 1);
    let mut successors = Vec::with_capacity(num_arcs);
    dcf.push(0);

    for z in 0..side {
        for y in 0..side {
            for x in 0..side {
                if x > 0 {
                    successors.push(node(side, x - 1, y, z));
                }
                if x + 1 < side {
                    successors.push(node(side, x + 1, y, z));
                }
                if y > 0 {
                    successors.push(node(side, x, y - 1, z));
                }
                if y + 1 < side {
                    successors.push(node(side, x, y + 1, z));
                }
                if z > 0 {
                    successors.push(node(side, x, y, z - 1));
                }
                if z + 1 < side {
                    successors.push(node(side, x, y, z + 1));
                }
                dcf.push(successors.len());
            }
        }
    }

    debug_assert_eq!(successors.len(), num_arcs);
    // SAFETY: the DCF starts at zero, is monotone and ends at the number of
    // successors; all successors are cells of the lattice.
    unsafe { CsrGraph::from_parts(dcf.into(), successors.into()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RandomAccessGraph;

    #[test]
    fn test_cube_2() {
        let g = cube(2);
        assert_eq!(g.num_nodes(), 8);
        assert_eq!(g.num_arcs(), 24);
        assert_eq!(g.successors(0), &[1, 2, 4]);
        assert_eq!(g.successors(7), &[6, 5, 3]);
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(cube(0).num_nodes(), 0);
        let g = cube(1);
        assert_eq!(g.num_nodes(), 1);
        assert_eq!(g.num_arcs(), 0);
    }

    #[test]
    fn test_cell_node() {
        let side = 5;
        for n in 0..side * side * side {
            let (x, y, z) = cell(side, n);
            assert_eq!(node(side, x, y, z), n);
        }
        let g = cube(side);
        let inner = node(side, 2, 2, 2);
        assert_eq!(g.outdegree(inner), 6);
        assert_eq!(g.outdegree(node(side, 0, 0, 0)), 3);
        assert_eq!(g.outdegree(node(side, 0, 2, 2)), 5);
    }
}
