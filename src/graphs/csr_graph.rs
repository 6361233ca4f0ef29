/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::traits::RandomAccessGraph;
use thiserror::Error;

/// Error types that can occur when building a [`CsrGraph`] from its parts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CsrError {
    /// The degree-cumulative function must contain at least one offset.
    #[error("The degree-cumulative function is empty")]
    EmptyDcf,

    /// The degree-cumulative function must start from zero.
    #[error("The degree-cumulative function starts from {0} instead of 0")]
    NonZeroStart(usize),

    /// The degree-cumulative function must be monotone.
    #[error("The degree-cumulative function decreases at node {node}: {prev} > {next}")]
    NotMonotone { node: usize, prev: usize, next: usize },

    /// The last offset must be the number of arcs.
    #[error("The last offset ({last}) does not match the number of successors ({num_arcs})")]
    LastOffset { last: usize, num_arcs: usize },

    /// Successors must be nodes of the graph.
    #[error("Successor {succ} at index {index} is out of range (the graph has {num_nodes} nodes)")]
    SuccessorOutOfRange {
        index: usize,
        succ: usize,
        num_nodes: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
/// A compressed sparse-row graph.
///
/// It is a graph representation that stores the degree-cumulative function
/// (DCF) and the successors in two boxed slices. The DCF is a sequence of
/// *n* + 1 offsets: the successors of node *x* are stored in
/// `successors[dcf[x]..dcf[x + 1]]`.
///
/// Graphs built with [`from_arcs`](CsrGraph::from_arcs) have sorted successor
/// lists without duplicates; graphs built with
/// [`try_from_parts`](CsrGraph::try_from_parts) keep the successors in the
/// order they are given.
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
    /// The degree-cumulative function must be monotone, start from zero, end
    /// with the number of successors, and all successors must be smaller than
    /// the number of nodes. Otherwise, accessing the graph may panic.
    pub unsafe fn from_parts(dcf: Box<[usize]>, successors: Box<[usize]>) -> Self {
        Self { dcf, successors }
    }

    /// Creates a new CSR graph from the given degree-cumulative function and
    /// successors, checking that they are coherent.
    pub fn try_from_parts(
        dcf: impl Into<Box<[usize]>>,
        successors: impl Into<Box<[usize]>>,
    ) -> Result<Self, CsrError> {
        let dcf = dcf.into();
        let successors = successors.into();
        let first = *dcf.first().ok_or(CsrError::EmptyDcf)?;
        if first != 0 {
            return Err(CsrError::NonZeroStart(first));
        }
        if let Some(node) = dcf.windows(2).position(|w| w[0] > w[1]) {
            return Err(CsrError::NotMonotone {
                node,
                prev: dcf[node],
                next: dcf[node + 1],
            });
        }
        let last = dcf[dcf.len() - 1];
        if last != successors.len() {
            return Err(CsrError::LastOffset {
                last,
                num_arcs: successors.len(),
            });
        }
        let num_nodes = dcf.len() - 1;
        if let Some(index) = successors.iter().position(|&s| s >= num_nodes) {
            return Err(CsrError::SuccessorOutOfRange {
                index,
                succ: successors[index],
                num_nodes,
            });
        }
        Ok(Self { dcf, successors })
    }

    /// Creates a new CSR graph with `num_nodes` nodes from a list of arcs.
    ///
    /// Arcs are sorted, and duplicates are removed.
    ///
    /// # Panics
    ///
    /// Panics if an arc endpoint is greater than or equal to `num_nodes`.
    pub fn from_arcs(num_nodes: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut arcs = arcs.into_iter().collect::<Vec<_>>();
        for &(u, v) in &arcs {
            let max = u.max(v);
            assert!(
                max < num_nodes,
                "Node {max} does not exist (the graph has {num_nodes} nodes)"
            );
        }
        arcs.sort_unstable();
        arcs.dedup();

        let mut dcf = Vec::with_capacity(num_nodes + 1);
        dcf.push(0);
        let mut successors = Vec::with_capacity(arcs.len());
        let mut last_src = 0;
        for (src, dst) in arcs {
            while last_src < src {
                dcf.push(successors.len());
                last_src += 1;
            }
            successors.push(dst);
        }
        while dcf.len() < num_nodes + 1 {
            dcf.push(successors.len());
        }
        Self {
            dcf: dcf.into(),
            successors: successors.into(),
        }
    }

    /// Creates a new CSR graph copying a [`RandomAccessGraph`].
    pub fn from_graph<G: RandomAccessGraph>(g: &G) -> Self {
        let n = g.num_nodes();
        let mut dcf = Vec::with_capacity(n + 1);
        dcf.push(0);
        let mut successors = Vec::with_capacity(g.num_arcs());
        for node in 0..n {
            successors.extend_from_slice(g.successors(node));
            dcf.push(successors.len());
        }
        Self {
            dcf: dcf.into(),
            successors: successors.into(),
        }
    }

    /// Returns the degree-cumulative function (the offsets).
    pub fn dcf(&self) -> &[usize] {
        &self.dcf
    }

    /// Returns the flat array of successors.
    pub fn arcs(&self) -> &[usize] {
        &self.successors
    }
}

impl RandomAccessGraph for CsrGraph {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.dcf.len() - 1
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.successors.len()
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

    #[test]
    fn test_from_arcs() {
        let g = CsrGraph::from_arcs(5, [(3, 1), (0, 2), (0, 1), (0, 2), (1, 4)]);
        assert_eq!(g.num_nodes(), 5);
        assert_eq!(g.num_arcs(), 4);
        assert_eq!(g.dcf(), &[0, 2, 3, 3, 4, 4]);
        assert_eq!(g.successors(0), &[1, 2]);
        assert!(g.successors(2).is_empty());
        assert_eq!(g.outdegree(3), 1);
        assert!(g.has_arc(1, 4));
        assert!(!g.has_arc(4, 1));
    }

    #[test]
    fn test_empty() {
        let g = CsrGraph::new();
        assert_eq!(g.num_nodes(), 0);
        assert_eq!(g.num_arcs(), 0);
        let g = CsrGraph::from_arcs(3, Vec::new());
        assert_eq!(g.num_nodes(), 3);
        assert_eq!(g.dcf(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_try_from_parts() {
        let g = CsrGraph::try_from_parts(vec![0_usize, 1, 2], vec![1_usize, 0]).unwrap();
        assert_eq!(g, CsrGraph::from_arcs(2, [(0, 1), (1, 0)]));

        assert_eq!(
            CsrGraph::try_from_parts(Vec::<usize>::new(), Vec::<usize>::new()),
            Err(CsrError::EmptyDcf)
        );
        assert_eq!(
            CsrGraph::try_from_parts(vec![1_usize, 1], vec![0_usize]),
            Err(CsrError::NonZeroStart(1))
        );
        assert_eq!(
            CsrGraph::try_from_parts(vec![0_usize, 2, 1], vec![0_usize]),
            Err(CsrError::NotMonotone {
                node: 1,
                prev: 2,
                next: 1
            })
        );
        assert_eq!(
            CsrGraph::try_from_parts(vec![0_usize, 1, 1], vec![0_usize, 1]),
            Err(CsrError::LastOffset {
                last: 1,
                num_arcs: 2
            })
        );
        assert_eq!(
            CsrGraph::try_from_parts(vec![0_usize, 1, 1], vec![2_usize]),
            Err(CsrError::SuccessorOutOfRange {
                index: 0,
                succ: 2,
                num_nodes: 2
            })
        );
    }

    #[test]
    fn test_from_graph() {
        let g = CsrGraph::from_arcs(4, [(0, 1), (0, 2), (2, 3), (3, 0)]);
        assert_eq!(CsrGraph::from_graph(&g), g);
        // Copying the transpose drops the outdegree labels
        let t = crate::transform::transpose_with_degree(&g);
        assert_eq!(
            CsrGraph::from_graph(&t),
            CsrGraph::from_arcs(4, [(1, 0), (2, 0), (3, 2), (0, 3)])
        );
    }

    #[test]
    #[should_panic(expected = "does not exist")]
    fn test_from_arcs_out_of_range() {
        CsrGraph::from_arcs(2, [(0, 2)]);
    }
}
