/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sequential harness shared by all PageRank variants.
//!
//! The harness prepares the vectors needed by a convergence loop (initial
//! ranks, contribution factors and initial contributions), times the loop,
//! and assembles the [result](PageRankResult). When a partition into
//! [affected nodes](crate::dynamic::AffectedNodes) is given, the transpose
//! and the vectors are relabelled so that affected nodes come first, the loop
//! is run on the window of affected nodes only, and the ranks are mapped back
//! to the original numbering.

use std::ops::Range;
use std::time::Instant;

use super::{kernels, PageRankOptions, PageRankResult, Rank, RankBuffers};
use crate::dynamic::AffectedNodes;
use crate::graphs::transpose_graph::TransposeGraph;
use crate::traits::RandomAccessGraph;
use crate::transform::permute;

/// Runs a convergence loop on a transpose.
///
/// `run` is called with the buffers, the contribution factors, the
/// (possibly relabelled) transpose and the window of nodes to update; it must
/// return the number of iterations and the final error. The contributions in
/// the buffers are initialized on all nodes before the call.
///
/// If `affected` is `None`, all nodes are updated. Otherwise, only the
/// affected nodes are updated, and all other nodes keep their initial rank.
/// The initial ranks are `initial`, or the uniform vector if `initial` is
/// `None`.
///
/// # Panics
///
/// Panics if the length of `initial` or the number of nodes of `affected` do
/// not match the number of nodes of `transpose`, if the options are invalid,
/// or if the window is empty.
pub fn pagerank_seq<T: Rank>(
    transpose: &TransposeGraph,
    affected: Option<&AffectedNodes>,
    initial: Option<&[T]>,
    options: &PageRankOptions<T>,
    mut run: impl FnMut(&mut RankBuffers<T>, &[T], &TransposeGraph, Range<usize>) -> (usize, T),
) -> PageRankResult<T> {
    let n = transpose.num_nodes();
    if let Err(e) = options.validate() {
        panic!("Invalid PageRank options: {e}");
    }
    if let Some(q) = initial {
        assert_eq!(
            q.len(),
            n,
            "Initial rank vector length ({}) does not match the number of nodes ({n})",
            q.len()
        );
    }

    let permuted;
    let (graph, window) = match affected {
        None => (transpose, 0..n),
        Some(affected) => {
            assert_eq!(
                affected.num_nodes(),
                n,
                "The partition has {} nodes, but the graph has {n} nodes",
                affected.num_nodes()
            );
            permuted = permute(transpose, affected.order());
            (&permuted, 0..affected.len())
        }
    };

    let seed: Box<[T]> = match (initial, affected) {
        (Some(q), None) => q.into(),
        (Some(q), Some(affected)) => affected.order().iter().map(|&v| q[v]).collect(),
        (None, _) => vec![T::one() / T::from_count(n); n].into(),
    };
    let factors = kernels::factors(graph.source_outdegrees(), options.damping);

    let mut run_once = || {
        let start = Instant::now();
        let mut buffers = RankBuffers::from_seed(&seed);
        let (a, _, c) = buffers.split_mut();
        kernels::scale(c, a, &factors, 0..n);
        let (iterations, error) = run(&mut buffers, &factors[..], graph, window.clone());
        (buffers, iterations, error, start.elapsed())
    };

    let (buffers, iterations, error, mut total) = run_once();
    for _ in 1..options.repeat {
        total += run_once().3;
    }
    let time = total.div_f64(options.repeat as f64);
    log::info!(
        "Completed in {} iterations, error {} (mean time {:?})",
        iterations,
        error,
        time
    );

    let ranks = buffers.into_ranks();
    let ranks = match affected {
        None => ranks.into_vec(),
        Some(affected) => {
            let mut out = vec![T::zero(); n];
            for (&v, &rank) in affected.order().iter().zip(ranks.iter()) {
                out[v] = rank;
            }
            out
        }
    };

    PageRankResult {
        ranks,
        iterations,
        error,
        time,
    }
}
