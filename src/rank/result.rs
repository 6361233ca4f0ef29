/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::time::Duration;

use super::Rank;
use crate::traits::RandomAccessGraph;

/// The result of a PageRank computation.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankResult<T> {
    /// The rank of each node.
    pub ranks: Vec<T>,
    /// The number of iterations performed; zero if no iteration was
    /// necessary.
    pub iterations: usize,
    /// The error between the last two approximations, restricted to the
    /// updated nodes.
    pub error: T,
    /// The time spent computing (the mean time, if the computation was
    /// repeated).
    pub time: Duration,
}

impl<T: Rank> PageRankResult<T> {
    /// Returns a result describing a computation that performed no iteration.
    ///
    /// The ranks are a copy of `initial`, or the uniform vector if `initial`
    /// is `None`.
    ///
    /// # Panics
    ///
    /// Panics if the length of `initial` does not match the number of nodes.
    pub fn initial(graph: &impl RandomAccessGraph, initial: Option<&[T]>) -> Self {
        let n = graph.num_nodes();
        let ranks = match initial {
            Some(q) => {
                assert_eq!(
                    q.len(),
                    n,
                    "Initial rank vector length ({}) does not match the number of nodes ({n})",
                    q.len()
                );
                q.to_vec()
            }
            None => vec![T::one() / T::from_count(n); n],
        };
        Self {
            ranks,
            iterations: 0,
            error: T::zero(),
            time: Duration::ZERO,
        }
    }

    /// Returns whether the computation stopped because the error fell below
    /// the given tolerance, rather than by exhausting the iterations.
    pub fn converged(&self, tolerance: T) -> bool {
        self.error < tolerance
    }
}
