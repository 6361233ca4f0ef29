/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use pagerank_csr::prelude::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Returns the ℓ∞ distance between two vectors.
fn l_inf_distance(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f64::max)
}

/// Returns a copy of `x` with some arcs removed and some arcs added.
fn edit(x: &CsrGraph, removed: &[(usize, usize)], added: &[(usize, usize)]) -> CsrGraph {
    let arcs = (0..x.num_nodes())
        .flat_map(|u| x.successors(u).iter().map(move |&v| (u, v)))
        .filter(|arc| !removed.contains(arc))
        .chain(added.iter().copied());
    CsrGraph::from_arcs(x.num_nodes(), arcs)
}

fn precise() -> PageRankOptions<f64> {
    PageRankOptions {
        tolerance: 1E-12,
        ..Default::default()
    }
}

#[test]
fn test_no_change() {
    init_logger();
    let x = ErdosRenyi::new(50, 0.1, 0).to_csr();
    let options = precise();
    let old = pagerank_static(&x, None, None, &options);
    let new = pagerank_dynamic(&x, None, &x, None, Some(old.ranks.as_slice()), &options);
    assert_eq!(new.iterations, 0);
    assert_eq!(new.ranks, old.ranks);
}

#[test]
fn test_matches_static() {
    init_logger();
    let options = precise();
    for seed in 0..5 {
        let x = ErdosRenyi::new(80, 0.03, seed).to_csr();
        let y = edit(&x, &[], &[(0, 1), (5, 7), (40, 2)]);
        let old = pagerank_static(&x, None, None, &options);
        let dynamic = pagerank_dynamic(&x, None, &y, None, Some(old.ranks.as_slice()), &options);
        let fresh = pagerank_static(&y, None, None, &options);
        assert!(dynamic.iterations > 0);
        assert!(
            l_inf_distance(&dynamic.ranks, &fresh.ranks) < 1E-9,
            "seed {seed}"
        );
    }
}

#[test]
fn test_removed_arcs() {
    init_logger();
    let options = precise();
    let x = ErdosRenyi::new(60, 0.05, 10).to_csr();
    let removed = (0..x.num_nodes())
        .filter(|&u| x.outdegree(u) > 0)
        .take(3)
        .map(|u| (u, x.successors(u)[0]))
        .collect::<Vec<_>>();
    let y = edit(&x, &removed, &[]);
    assert_eq!(y.num_arcs(), x.num_arcs() - removed.len());

    let old = pagerank_static(&x, None, None, &options);
    let dynamic = pagerank_dynamic(&x, None, &y, None, Some(old.ranks.as_slice()), &options);
    let fresh = pagerank_static(&y, None, None, &options);
    assert!(l_inf_distance(&dynamic.ranks, &fresh.ranks) < 1E-9);
}

#[test]
fn test_unaffected_keep_rank() {
    init_logger();
    // Two disjoint cycles; only the first one is edited
    let x = CsrGraph::from_arcs(
        6,
        [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)],
    );
    let y = edit(&x, &[], &[(0, 2)]);
    let (xt, yt) = (transpose_with_degree(&x), transpose_with_degree(&y));

    let affected = affected_nodes(&x, &xt, &y, &yt);
    assert_eq!(affected.affected(), &[0, 1, 2]);
    assert_eq!(affected.unaffected(), &[3, 4, 5]);

    let options = precise();
    let old = pagerank_static(&x, Some(&xt), None, &options);
    let new = pagerank_dynamic(
        &x,
        Some(&xt),
        &y,
        Some(&yt),
        Some(old.ranks.as_slice()),
        &options,
    );
    for v in 3..6 {
        assert_eq!(new.ranks[v], old.ranks[v]);
    }
    let fresh = pagerank_static(&y, Some(&yt), None, &options);
    assert!(l_inf_distance(&new.ranks, &fresh.ranks) < 1E-9);
    // Node 2 now has two predecessors
    assert!(new.ranks[2] > new.ranks[1]);
}

#[test]
fn test_dangling_edit() {
    init_logger();
    // 2 is dangling in x and gets a successor in y
    let x = CsrGraph::from_arcs(4, [(0, 1), (1, 2), (3, 0)]);
    let y = edit(&x, &[], &[(2, 3)]);
    let options = precise();
    let old = pagerank_static(&x, None, None, &options);
    let new = pagerank_dynamic(&x, None, &y, None, Some(old.ranks.as_slice()), &options);
    let fresh = pagerank_static(&y, None, None, &options);
    assert!(new.ranks.iter().all(|r| r.is_finite()));
    assert!(l_inf_distance(&new.ranks, &fresh.ranks) < 1E-9);
}

#[test]
fn test_weakly_preferential() {
    init_logger();
    // 3 <-> 4 is not reachable from the edit, but its rank depends on the
    // rank of the dangling nodes
    let x = CsrGraph::from_arcs(5, [(0, 1), (1, 2), (3, 4), (4, 3)]);
    let y = edit(&x, &[(1, 2)], &[]);
    let options = PageRankOptions::<f64> {
        mode: Mode::WeaklyPreferential,
        ..precise()
    };
    let old = pagerank_static(&x, None, None, &options);
    let new = pagerank_dynamic(&x, None, &y, None, Some(old.ranks.as_slice()), &options);
    let fresh = pagerank_static(&y, None, None, &options);
    assert!(l_inf_distance(&new.ranks, &fresh.ranks) < 1E-9);
    assert!((new.ranks.iter().sum::<f64>() - 1.0).abs() < 1E-9);

    for seed in 0..3 {
        let x = ErdosRenyi::new(60, 0.02, 30 + seed).to_csr();
        let y = edit(&x, &[], &[(0, 1), (2, 3)]);
        let old = pagerank_static(&x, None, None, &options);
        let new = pagerank_dynamic(&x, None, &y, None, Some(old.ranks.as_slice()), &options);
        let fresh = pagerank_static(&y, None, None, &options);
        assert!(l_inf_distance(&new.ranks, &fresh.ranks) < 1E-9, "seed {seed}");
    }
}

#[test]
fn test_new_nodes() {
    init_logger();
    let x = CsrGraph::from_arcs(3, [(0, 1), (1, 2), (2, 0)]);
    let y = CsrGraph::from_arcs(5, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 3)]);
    let options = precise();
    let old = pagerank_static(&x, None, None, &options);
    let mut initial = old.ranks.clone();
    initial.resize(5, 0.2);
    let new = pagerank_dynamic(&x, None, &y, None, Some(initial.as_slice()), &options);
    assert_eq!(new.ranks.len(), 5);
    assert!(new.iterations > 0);
    // Old nodes cannot be reached from the new ones, so they keep their rank
    assert_eq!(&new.ranks[..3], &old.ranks[..]);
}

#[test]
fn test_without_initial() {
    let x = CsrGraph::from_arcs(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
    let y = edit(&x, &[(3, 0)], &[(3, 1)]);
    let result = pagerank_dynamic(&x, None, &y, None, None, &PageRankOptions::<f64>::default());
    assert_eq!(result.ranks.len(), 4);
    assert!(result.ranks.iter().all(|r| r.is_finite() && *r > 0.0));
}

#[test]
fn test_f32() {
    init_logger();
    let x = ErdosRenyi::new(40, 0.1, 20).to_csr();
    let y = edit(&x, &[], &[(1, 2), (3, 4)]);
    let options = PageRankOptions::<f32> {
        tolerance: 1E-6,
        ..Default::default()
    };
    let old = pagerank_static(&x, None, None, &options);
    let new = pagerank_dynamic(&x, None, &y, None, Some(old.ranks.as_slice()), &options);
    let fresh = pagerank_static(&y, None, None, &options);
    for (a, b) in new.ranks.iter().zip(&fresh.ranks) {
        assert!((a - b).abs() < 1E-4);
    }
}

#[test]
#[should_panic(expected = "fewer nodes")]
fn test_fewer_nodes() {
    let x = CsrGraph::from_arcs(3, [(0, 1)]);
    let y = CsrGraph::from_arcs(2, [(0, 1)]);
    pagerank_dynamic(&x, None, &y, None, None, &PageRankOptions::<f64>::default());
}
