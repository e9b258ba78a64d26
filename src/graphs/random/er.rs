/*
 * SPDX-FileCopyrightText: 2023 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::vec_graph::VecGraph;
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Returns an Erdös-Rényi random graph.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included, and successors are sorted.
///
/// The graph depends only on `n`, `p` and the `seed` of the [pseudorandom
/// number generator](SmallRng), so tests can reproduce it at will. Note that
/// the construction time is quadratic in `n`.
///
/// # Panics
///
/// If `p` is not in [0..1].
pub fn erdos_renyi(n: usize, p: f64, seed: u64) -> VecGraph {
    assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
    let mut rng = SmallRng::seed_from_u64(seed);
    let succ = (0..n)
        .map(|x| {
            (0..n)
                .filter(|&y| y != x && rng.random_bool(p))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    // Successors are drawn from [0..n)
    VecGraph::from_valid_lists(succ)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::RandomAccessGraph;

    #[test]
    fn test_er() {
        let g = erdos_renyi(10, 0.3, 0);
        assert_eq!(g.num_nodes(), 10);
        assert_eq!(g, erdos_renyi(10, 0.3, 0));
        for node in 0..10 {
            assert!(!g.successors(node).contains(&node));
            assert!(g.successors(node).is_sorted());
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(erdos_renyi(5, 0.0, 1).num_arcs(), 0);
        assert_eq!(erdos_renyi(5, 0.0, 1).num_nodes(), 5);
        assert_eq!(erdos_renyi(5, 1.0, 1).num_arcs(), 20);
    }
}
