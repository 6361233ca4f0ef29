/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::graphs::csr_graph::CsrGraph;
use crate::graphs::transpose_graph::TransposeGraph;
use crate::traits::RandomAccessGraph;

/// Returns the transpose of the provided graph, with each node labelled by
/// its outdegree in the provided graph.
///
/// Predecessor lists are sorted. Multiple arcs between the same pair of nodes
/// are preserved, so the labels always sum to the number of arcs.
pub fn transpose_with_degree(graph: &impl RandomAccessGraph) -> TransposeGraph {
    let n = graph.num_nodes();

    // Counting sort on the targets: first the indegrees...
    let mut dcf = vec![0; n + 1];
    let mut outdegrees = Vec::with_capacity(n);
    for src in 0..n {
        let succ = graph.successors(src);
        outdegrees.push(succ.len());
        for &dst in succ {
            dcf[dst + 1] += 1;
        }
    }
    for i in 0..n {
        dcf[i + 1] += dcf[i];
    }

    // ...then the predecessors, in increasing order as sources are scanned
    // in increasing order.
    let mut cursor = dcf[..n].to_vec();
    let mut preds = vec![0; dcf[n]];
    for src in 0..n {
        for &dst in graph.successors(src) {
            preds[cursor[dst]] = src;
            cursor[dst] += 1;
        }
    }

    // SAFETY: the offsets are the prefix sums of the indegrees, and
    // predecessors are nodes of the graph.
    let csr = unsafe { CsrGraph::from_parts(dcf.into(), preds.into()) };
    TransposeGraph::new(csr, outdegrees)
}
