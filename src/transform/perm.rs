/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::csr_graph::CsrGraph;
use crate::graphs::transpose_graph::TransposeGraph;
use crate::traits::RandomAccessGraph;

/// Returns the inverse of a node order, that is, the array mapping each node
/// to its position in `order`.
///
/// # Panics
///
/// Panics if `order` is not a permutation of `[0 . . order.len())`.
pub fn invert_order(order: &[usize]) -> Box<[usize]> {
    let n = order.len();
    let mut inv = vec![usize::MAX; n];
    for (pos, &node) in order.iter().enumerate() {
        assert!(
            node < n,
            "Node {node} at position {pos} is out of range (the order has {n} nodes)"
        );
        assert!(
            inv[node] == usize::MAX,
            "Node {node} appears twice in the order"
        );
        inv[node] = pos;
    }
    inv.into()
}

/// Returns a copy of a transpose in which node `order[i]` is relabelled as
/// `i`.
///
/// Labels (the outdegrees in the original graph) follow their nodes, and
/// predecessor lists are sorted in the new numbering.
///
/// # Panics
///
/// Panics if `order` is not a permutation of the nodes of the graph.
pub fn permute(transpose: &TransposeGraph, order: &[usize]) -> TransposeGraph {
    let n = transpose.num_nodes();
    assert_eq!(
        order.len(),
        n,
        "The given order has {} values and thus it's incompatible with a graph with {} nodes.",
        order.len(),
        n,
    );
    let inv = invert_order(order);

    let mut dcf = Vec::with_capacity(n + 1);
    dcf.push(0);
    let mut preds = Vec::with_capacity(transpose.num_arcs());
    let mut outdegrees = Vec::with_capacity(n);
    for &old in order.iter() {
        let start = preds.len();
        preds.extend(transpose.successors(old).iter().map(|&u| inv[u]));
        preds[start..].sort_unstable();
        dcf.push(preds.len());
        outdegrees.push(transpose.source_outdegree(old));
    }

    // SAFETY: the offsets are cumulative lengths, and predecessors are images
    // of nodes through a permutation.
    let csr = unsafe { CsrGraph::from_parts(dcf.into(), preds.into()) };
    TransposeGraph::new(csr, outdegrees)
}
