/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::csr_graph::CsrGraph;
use crate::traits::RandomAccessGraph;

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// The transpose of a graph, with each node labelled by its outdegree in the
/// original graph.
///
/// The successors of a node in this graph are its _predecessors_ in the
/// original graph. The outdegrees are needed by pull-based algorithms, which
/// enumerate predecessors but must scale their contributions by the number of
/// arcs leaving them.
///
/// Instances are usually built with
/// [`transpose_with_degree`](crate::transform::transpose_with_degree).
pub struct TransposeGraph {
    csr: CsrGraph,
    outdegrees: Box<[usize]>,
}

impl TransposeGraph {
    /// Creates a new transpose from a CSR graph containing the reversed arcs
    /// and the outdegrees of the original graph.
    ///
    /// # Panics
    ///
    /// Panics if the number of outdegrees does not match the number of nodes,
    /// or if the outdegrees do not sum to the number of arcs.
    pub fn new(csr: CsrGraph, outdegrees: impl Into<Box<[usize]>>) -> Self {
        let outdegrees = outdegrees.into();
        assert_eq!(
            outdegrees.len(),
            csr.num_nodes(),
            "Outdegree vector length ({}) does not match the number of nodes ({})",
            outdegrees.len(),
            csr.num_nodes()
        );
        assert_eq!(
            outdegrees.iter().sum::<usize>(),
            csr.num_arcs(),
            "Outdegrees do not sum to the number of arcs"
        );
        Self { csr, outdegrees }
    }

    /// Returns the outdegree of `node` in the original graph.
    #[inline(always)]
    pub fn source_outdegree(&self, node: usize) -> usize {
        self.outdegrees[node]
    }

    /// Returns the outdegrees of the original graph.
    pub fn source_outdegrees(&self) -> &[usize] {
        &self.outdegrees
    }

    /// Returns the degree-cumulative function of the transpose.
    pub fn dcf(&self) -> &[usize] {
        self.csr.dcf()
    }

    /// Returns the flat array of predecessors.
    pub fn arcs(&self) -> &[usize] {
        self.csr.arcs()
    }
}

impl RandomAccessGraph for TransposeGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.csr.num_nodes()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.csr.num_arcs()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> &[usize] {
        self.csr.successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.csr.outdegree(node)
    }
}
