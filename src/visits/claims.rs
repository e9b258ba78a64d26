/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::sync::atomic::Ordering;
use sux::prelude::*;

/// An array of atomic per-node claims.
///
/// Each node starts unclaimed, and [`claim`](Claims::claim) moves it to
/// claimed by an atomic swap on an [`AtomicBitVec`]: among any number of
/// concurrent calls on the same node, exactly one succeeds. Parallel visits use this property to
/// enqueue each node, and to assign its distance, exactly once.
///
/// # Examples
///
/// ```
/// use parbfs::visits::Claims;
///
/// let claims = Claims::new(3);
/// assert!(claims.claim(1));
/// assert!(!claims.claim(1));
/// assert!(claims.is_claimed(1));
/// assert!(!claims.is_claimed(0));
/// ```
pub struct Claims(AtomicBitVec);

impl Claims {
    /// Creates an array of `n` unclaimed nodes.
    pub fn new(n: usize) -> Self {
        Self(AtomicBitVec::new(n))
    }

    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Claims a node if it is unclaimed, returning whether this call claimed
    /// it.
    ///
    /// # Panics
    ///
    /// If `node` is not smaller than [`len`](Claims::len).
    #[inline(always)]
    pub fn claim(&self, node: usize) -> bool {
        !self.0.swap(node, true, Ordering::Relaxed)
    }

    /// Returns whether a node has been claimed.
    #[inline(always)]
    pub fn is_claimed(&self, node: usize) -> bool {
        self.0.get(node, Ordering::Relaxed)
    }

    /// Returns all nodes to the unclaimed state.
    pub fn reset(&mut self) {
        self.0.fill(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::par::par_for;
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_single_thread() {
        let mut claims = Claims::new(4);
        assert_eq!(claims.len(), 4);
        for node in 0..4 {
            assert!(!claims.is_claimed(node));
            assert!(claims.claim(node));
            assert!(claims.is_claimed(node));
            assert!(!claims.claim(node));
        }
        claims.reset();
        assert!((0..4).all(|node| !claims.is_claimed(node)));
        assert!(claims.claim(2));
    }

    #[test]
    fn test_race_on_one_node() {
        let claims = Claims::new(1);
        let winners = AtomicUsize::new(0);
        std::thread::scope(|s| {
            for _ in 0..16 {
                s.spawn(|| {
                    for _ in 0..100 {
                        if claims.claim(0) {
                            winners.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                });
            }
        });
        assert_eq!(winners.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_race_on_many_nodes() {
        // Every node is claimed by eight different indices.
        let n = 10_000;
        let mut claims = Claims::new(n);
        let wins: Vec<AtomicUsize> = (0..n).map(|_| AtomicUsize::new(0)).collect();
        par_for(&crate::thread_pool![8], 0..8 * n, 1, |i| {
            let node = i % n;
            if claims.claim(node) {
                wins[node].fetch_add(1, Ordering::Relaxed);
            }
        });
        assert!(wins.iter().all(|w| w.load(Ordering::Relaxed) == 1));
        assert!((0..n).all(|node| claims.is_claimed(node)));
        claims.reset();
        assert!((0..n).all(|node| !claims.is_claimed(node)));
        assert!(claims.claim(n - 1));
    }
}
