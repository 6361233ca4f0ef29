/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::graphs::csr_graph::CsrGraph;

/// Provides a sequential implementation of Erdös-Rényi random graphs.
///
/// The Erdös-Rényi random graph model is a simple model for generating random
/// graphs. It is parameterized by the number of nodes `n` and the probability
/// `p` of an arc between any two nodes. In this implementation, loops are never
/// included.
///
/// The time required to generate the graph is quadratic in `n`, so the
/// generator materializes its output as a [`CsrGraph`].
#[derive(Debug, Clone)]
pub struct ErdosRenyi {
    n: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new Erdös-Rényi random graph, given the number of
    /// nodes, the probability of an arc between any two nodes, and a
    /// seed for the [pseudorandom number generator](SmallRng).
    pub fn new(n: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1]");
        Self { n, p, seed }
    }

    /// Returns the arcs of the graph, in lexicographical order.
    pub fn arcs(&self) -> Vec<(usize, usize)> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut arcs = Vec::new();
        for x in 0..self.n {
            for y in 0..self.n {
                if y != x && rng.random_bool(self.p) {
                    arcs.push((x, y));
                }
            }
        }
        arcs
    }

    /// Materializes the graph.
    pub fn to_csr(&self) -> CsrGraph {
        CsrGraph::from_arcs(self.n, self.arcs())
    }
}
