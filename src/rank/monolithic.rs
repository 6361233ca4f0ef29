/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use std::ops::Range;

use dsi_progress_logger::{no_logging, ProgressLog};
use predicates::Predicate;

use super::preds::PredParams;
use super::seq::pagerank_seq;
use super::{kernels, Mode, PageRankOptions, PageRankResult, Rank, RankBuffers};
use crate::dynamic::affected_nodes;
use crate::graphs::transpose_graph::TransposeGraph;
use crate::traits::RandomAccessGraph;
use crate::transform::transpose_with_degree;

/// Iterates PageRank on the nodes in `window` until the stopping predicate of
/// `options` is satisfied.
///
/// At each iteration, for each node *v* in the window the current rank
/// vector is set to the teleport floor (1 − *p*) / *N* (*N* is the number of
/// nodes, not the size of the window) plus the contributions of the
/// predecessors of *v*; then the error between the current and the previous
/// rank vector is computed on the window. If the iteration does not stop,
/// contributions are updated on the window using `factors`, and the rank
/// vectors are swapped.
///
/// Contributions must have been computed on all nodes before the call. Nodes
/// outside the window are never written, so their rank and contribution must
/// be already final.
///
/// Returns the number of iterations, which is in [1 . . `options.max_iter`],
/// and the final error. The last approximation is the
/// [current](RankBuffers::current) rank vector of `buffers`.
///
/// # Panics
///
/// Panics if the window is empty or exceeds the number of nodes, if vector
/// lengths do not match the number of nodes of the transpose, or if the
/// options are invalid.
pub fn pagerank_loop<T: Rank>(
    buffers: &mut RankBuffers<T>,
    factors: &[T],
    transpose: &TransposeGraph,
    window: Range<usize>,
    options: &PageRankOptions<T>,
    pl: &mut impl ProgressLog,
) -> (usize, T) {
    let n = transpose.num_nodes();
    assert!(!window.is_empty(), "The update window must not be empty");
    assert!(
        window.end <= n,
        "The update window {window:?} exceeds the number of nodes ({n})"
    );
    assert_eq!(buffers.len(), n, "Buffer length does not match the number of nodes");
    assert_eq!(factors.len(), n, "Factor length does not match the number of nodes");
    if let Err(e) = options.validate() {
        panic!("Invalid PageRank options: {e}");
    }

    let p = options.damping;
    let inv_n = T::one() / T::from_count(n);
    let floor = (T::one() - p) * inv_n;
    let predicate = options.stopping_predicate();
    let (dcf, preds) = (transpose.dcf(), transpose.arcs());

    log::info!("Mode: {}", options.mode);
    log::info!("Damping: {}", p);
    log::info!("Norm: {}", options.norm);
    log::info!("Stopping criterion: {}", predicate);

    pl.item_name("iteration");
    pl.expected_updates(Some(options.max_iter));
    pl.start(format!(
        "Computing PageRank on {} of {n} nodes...",
        window.len()
    ));

    let mut iteration = 0;
    let error = loop {
        let (a, r, c) = buffers.split_mut();
        let c0 = match options.mode {
            Mode::PseudoRank => floor,
            Mode::WeaklyPreferential => {
                floor + p * kernels::dangling_mass(r, transpose.source_outdegrees()) * inv_n
            }
        };
        kernels::accumulate(a, c, dcf, preds, window.clone(), c0);
        let error = kernels::error(a, r, window.clone(), options.norm);
        iteration += 1;

        log::info!("Iteration {}: error = {}", iteration, error);
        pl.update_and_display();

        if predicate.eval(&PredParams { iteration, error }) {
            break error;
        }

        kernels::scale(c, a, factors, window.clone());
        // The last approximation is always the current vector
        buffers.swap();
    };

    pl.done();
    (iteration, error)
}

/// Computes PageRank on all nodes of a graph.
///
/// `transpose` is the [transpose](transpose_with_degree) of `graph`; if it is
/// `None`, it is computed. `initial` is the initial rank vector; if it is
/// `None`, the uniform vector is used.
///
/// # Examples
///
/// ```
/// use pagerank_csr::graphs::csr_graph::CsrGraph;
/// use pagerank_csr::rank::{pagerank_static, PageRankOptions};
///
/// let g = CsrGraph::from_arcs(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
/// let result = pagerank_static::<f64>(&g, None, None, &PageRankOptions::default());
///
/// for rank in &result.ranks {
///     assert!((rank - 0.25).abs() < 1E-6);
/// }
/// ```
///
/// # Panics
///
/// Panics if `transpose` or `initial` do not match the number of nodes of
/// `graph`, or if the options are invalid.
pub fn pagerank_static<T: Rank>(
    graph: &impl RandomAccessGraph,
    transpose: Option<&TransposeGraph>,
    initial: Option<&[T]>,
    options: &PageRankOptions<T>,
) -> PageRankResult<T> {
    pagerank_static_with_logging(graph, transpose, initial, options, no_logging![])
}

/// Computes PageRank on all nodes of a graph, logging progress.
///
/// See [`pagerank_static`] for the meaning of the arguments. Iterations are
/// counted by `pl`.
pub fn pagerank_static_with_logging<T: Rank>(
    graph: &impl RandomAccessGraph,
    transpose: Option<&TransposeGraph>,
    initial: Option<&[T]>,
    options: &PageRankOptions<T>,
    pl: &mut impl ProgressLog,
) -> PageRankResult<T> {
    let built;
    let transpose = match transpose {
        Some(t) => t,
        None => {
            built = transpose_with_degree(graph);
            &built
        }
    };
    assert_eq!(
        transpose.num_nodes(),
        graph.num_nodes(),
        "The graph and its transpose have a different number of nodes"
    );

    if transpose.num_nodes() == 0 {
        return PageRankResult::initial(transpose, initial);
    }

    pagerank_seq(transpose, None, initial, options, |buffers, factors, t, window| {
        pagerank_loop(buffers, factors, t, window, options, &mut *pl)
    })
}

/// Recomputes PageRank after a graph edit.
///
/// `x` is the old graph and `y` the new one; `xt` and `yt` are their
/// [transposes](transpose_with_degree), which are computed if `None`.
/// `initial` should contain the ranks of the old graph (extended to the new
/// nodes, if any); if it is `None`, the uniform vector is used.
///
/// Only the [affected nodes](crate::dynamic::affected_nodes) are updated: all
/// other nodes keep their initial rank. If no node is affected, no iteration
/// is performed and the result contains a copy of the initial ranks. In
/// [`WeaklyPreferential`](super::Mode::WeaklyPreferential) mode the rank of
/// every node depends on the rank of all dangling nodes, so as soon as a node
/// is affected all nodes are updated.
///
/// When `initial` is the PageRank of `x` and the number of nodes does not
/// change, the result is the PageRank of `y` within the tolerance.
///
/// # Panics
///
/// Panics if a graph and its transpose have a different number of nodes, if
/// `y` has fewer nodes than `x`, if `initial` does not match the number of
/// nodes of `y`, or if the options are invalid.
pub fn pagerank_dynamic<T: Rank, G: RandomAccessGraph>(
    x: &G,
    xt: Option<&TransposeGraph>,
    y: &G,
    yt: Option<&TransposeGraph>,
    initial: Option<&[T]>,
    options: &PageRankOptions<T>,
) -> PageRankResult<T> {
    pagerank_dynamic_with_logging(x, xt, y, yt, initial, options, no_logging![])
}

/// Recomputes PageRank after a graph edit, logging progress.
///
/// See [`pagerank_dynamic`] for the meaning of the arguments. Iterations are
/// counted by `pl`.
pub fn pagerank_dynamic_with_logging<T: Rank, G: RandomAccessGraph>(
    x: &G,
    xt: Option<&TransposeGraph>,
    y: &G,
    yt: Option<&TransposeGraph>,
    initial: Option<&[T]>,
    options: &PageRankOptions<T>,
    pl: &mut impl ProgressLog,
) -> PageRankResult<T> {
    let (xt_built, yt_built);
    let xt = match xt {
        Some(t) => t,
        None => {
            xt_built = transpose_with_degree(x);
            &xt_built
        }
    };
    let yt = match yt {
        Some(t) => t,
        None => {
            yt_built = transpose_with_degree(y);
            &yt_built
        }
    };

    let affected = affected_nodes(x, xt, y, yt);
    log::info!(
        "{} affected nodes out of {}",
        affected.len(),
        affected.num_nodes()
    );
    if affected.is_empty() {
        return PageRankResult::initial(y, initial);
    }
    let affected = match options.mode {
        Mode::PseudoRank => Some(&affected),
        Mode::WeaklyPreferential => {
            log::info!("Updating all nodes, as dangling mass is spread uniformly");
            None
        }
    };

    pagerank_seq(
        yt,
        affected,
        initial,
        options,
        |buffers, factors, t, window| {
            pagerank_loop(buffers, factors, t, window, options, &mut *pl)
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphs::csr_graph::CsrGraph;
    use crate::rank::ErrorNorm;

    fn cycle(n: usize) -> CsrGraph {
        CsrGraph::from_arcs(n, (0..n).map(|i| (i, (i + 1) % n)))
    }

    #[test]
    fn test_loop_exhaustion() {
        let g = CsrGraph::from_arcs(3, [(0, 1), (0, 2), (1, 2), (2, 0)]);
        let t = transpose_with_degree(&g);
        let options = PageRankOptions::<f64> {
            tolerance: 0.0,
            max_iter: 7,
            ..Default::default()
        };
        let factors = kernels::factors(t.source_outdegrees(), options.damping);
        let mut buffers = RankBuffers::from_seed(&[1.0 / 3.0; 3]);
        let (a, _, c) = buffers.split_mut();
        kernels::scale(c, a, &factors, 0..3);
        let (iterations, error) =
            pagerank_loop(&mut buffers, &factors, &t, 0..3, &options, no_logging![]);
        assert_eq!(iterations, 7);
        assert!(error > 0.0);
    }

    #[test]
    fn test_loop_single_iteration() {
        // With damping zero every node gets exactly the teleport floor
        let g = cycle(5);
        let t = transpose_with_degree(&g);
        let options = PageRankOptions::<f32> {
            damping: 0.0,
            tolerance: 0.0,
            max_iter: 1,
            ..Default::default()
        };
        let factors = kernels::factors(t.source_outdegrees(), options.damping);
        let mut buffers = RankBuffers::from_seed(&[1.0, 0.0, 0.0, 0.0, 0.0]);
        let (iterations, error) =
            pagerank_loop(&mut buffers, &factors, &t, 0..5, &options, no_logging![]);
        assert_eq!(iterations, 1);
        assert_eq!(buffers.current(), &[0.2; 5]);
        assert!((error - 1.6).abs() < 1E-6);
    }

    #[test]
    fn test_loop_window() {
        let g = cycle(4);
        let t = transpose_with_degree(&g);
        let options = PageRankOptions::<f64> {
            max_iter: 3,
            tolerance: 0.0,
            norm: ErrorNorm::LInf,
            ..Default::default()
        };
        let factors = kernels::factors(t.source_outdegrees(), options.damping);
        let mut buffers = RankBuffers::from_seed(&[0.1, 0.2, 0.3, 0.4]);
        let (a, _, c) = buffers.split_mut();
        kernels::scale(c, a, &factors, 0..4);
        pagerank_loop(&mut buffers, &factors, &t, 1..3, &options, no_logging![]);
        // Nodes outside the window are untouched in both vectors
        assert_eq!(buffers.current()[0], 0.1);
        assert_eq!(buffers.current()[3], 0.4);
        assert_eq!(buffers.previous()[0], 0.1);
        assert_eq!(buffers.previous()[3], 0.4);
    }

    #[test]
    #[should_panic(expected = "must not be empty")]
    fn test_loop_empty_window() {
        let g = cycle(3);
        let t = transpose_with_degree(&g);
        let factors = [0.85; 3];
        let mut buffers = RankBuffers::<f64>::new(3);
        pagerank_loop(
            &mut buffers,
            &factors,
            &t,
            0..0,
            &PageRankOptions::default(),
            no_logging![],
        );
    }

    #[test]
    #[should_panic(expected = "Invalid PageRank options")]
    fn test_invalid_options() {
        let g = cycle(3);
        let options = PageRankOptions::<f64> {
            damping: 1.0,
            ..Default::default()
        };
        pagerank_static(&g, None, None, &options);
    }

    #[test]
    fn test_static_empty() {
        let g = CsrGraph::new();
        let result = pagerank_static::<f64>(&g, None, None, &PageRankOptions::default());
        assert!(result.ranks.is_empty());
        assert_eq!(result.iterations, 0);
    }

    #[test]
    fn test_repeat() {
        let g = cycle(6);
        let seed = [0.5, 0.5, 0.0, 0.0, 0.0, 0.0];
        let once = pagerank_static::<f64>(&g, None, Some(&seed[..]), &Default::default());
        let options = PageRankOptions {
            repeat: 3,
            ..Default::default()
        };
        let thrice = pagerank_static::<f64>(&g, None, Some(&seed[..]), &options);
        assert_eq!(once.ranks, thrice.ranks);
        assert_eq!(once.iterations, thrice.iterations);
    }
}
