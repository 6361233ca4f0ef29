/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Nodes affected by a graph edit.
//!
//! Given two snapshots *x* (old) and *y* (new) of a graph, a node is
//! [_changed_](changed_nodes) if its successors or its predecessors differ
//! between the snapshots, and it is [_affected_](affected_nodes) if it is
//! reachable in *y* from a changed node. The PageRank of a node that is not
//! affected depends only on nodes that are not affected, and on arcs that
//! did not change.
//!
//! Affected nodes are returned as an explicit partition of the nodes,
//! [`AffectedNodes`], which lists the affected nodes first.

use std::collections::VecDeque;

use sux::bits::BitVec;
use thiserror::Error;

use crate::graphs::transpose_graph::TransposeGraph;
use crate::traits::{same_successors, RandomAccessGraph};

/// Error types that can occur when building an [`AffectedNodes`] partition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AffectedError {
    /// An affected node is not a node of the graph.
    #[error("Node {node} is out of range (the graph has {num_nodes} nodes)")]
    OutOfRange { node: usize, num_nodes: usize },

    /// An affected node has been listed more than once.
    #[error("Node {0} is listed twice")]
    Duplicate(usize),
}

/// A partition of the nodes of a graph into affected and unaffected nodes.
///
/// The partition is represented by an [order](Self::order) of all nodes in
/// which the [affected nodes](Self::affected) come first; the remaining nodes
/// follow in increasing order. The order is always a permutation of
/// `[0 . . n)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffectedNodes {
    order: Box<[usize]>,
    num_affected: usize,
}

impl AffectedNodes {
    /// Creates a partition from a list of affected nodes, which will keep
    /// their relative order.
    pub fn new(
        affected: impl IntoIterator<Item = usize>,
        num_nodes: usize,
    ) -> Result<Self, AffectedError> {
        let mut marks = BitVec::new(num_nodes);
        let mut order = Vec::with_capacity(num_nodes);
        for node in affected {
            if node >= num_nodes {
                return Err(AffectedError::OutOfRange { node, num_nodes });
            }
            if marks[node] {
                return Err(AffectedError::Duplicate(node));
            }
            marks.set(node, true);
            order.push(node);
        }
        let num_affected = order.len();
        order.extend((0..num_nodes).filter(|&node| !marks[node]));
        Ok(Self {
            order: order.into(),
            num_affected,
        })
    }

    /// Creates a partition in which the affected nodes are those satisfying
    /// the given predicate, in increasing order.
    pub fn from_fn(num_nodes: usize, mut affected: impl FnMut(usize) -> bool) -> Self {
        let (mut order, rest): (Vec<usize>, Vec<usize>) =
            (0..num_nodes).partition(|&node| affected(node));
        let num_affected = order.len();
        order.extend(rest);
        Self {
            order: order.into(),
            num_affected,
        }
    }

    /// Returns all nodes, affected nodes first.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns the affected nodes.
    pub fn affected(&self) -> &[usize] {
        &self.order[..self.num_affected]
    }

    /// Returns the nodes that are not affected.
    pub fn unaffected(&self) -> &[usize] {
        &self.order[self.num_affected..]
    }

    /// Returns the number of affected nodes.
    pub fn len(&self) -> usize {
        self.num_affected
    }

    /// Returns true if no node is affected.
    pub fn is_empty(&self) -> bool {
        self.num_affected == 0
    }

    /// Returns the number of nodes of the graph.
    pub fn num_nodes(&self) -> usize {
        self.order.len()
    }
}

fn check_snapshots(
    x: &impl RandomAccessGraph,
    xt: &TransposeGraph,
    y: &impl RandomAccessGraph,
    yt: &TransposeGraph,
) {
    assert_eq!(
        x.num_nodes(),
        xt.num_nodes(),
        "The old graph and its transpose have a different number of nodes"
    );
    assert_eq!(
        y.num_nodes(),
        yt.num_nodes(),
        "The new graph and its transpose have a different number of nodes"
    );
    assert!(
        y.num_nodes() >= x.num_nodes(),
        "The new graph has fewer nodes ({}) than the old graph ({})",
        y.num_nodes(),
        x.num_nodes()
    );
}

/// Returns the nodes of `y` whose successors or predecessors differ in `x`,
/// and the nodes of `y` that do not exist in `x`.
///
/// # Panics
///
/// Panics if a graph and its transpose have a different number of nodes, or
/// if `y` has fewer nodes than `x`.
pub fn changed_nodes<G: RandomAccessGraph>(
    x: &G,
    xt: &TransposeGraph,
    y: &G,
    yt: &TransposeGraph,
) -> BitVec {
    check_snapshots(x, xt, y, yt);
    let n = y.num_nodes();
    let old_n = x.num_nodes();
    let mut changed = BitVec::new(n);
    for node in 0..n {
        if node >= old_n
            || !same_successors(x, node, y, node)
            || !same_successors(xt, node, yt, node)
        {
            changed.set(node, true);
        }
    }
    changed
}

/// Returns the nodes of `y` that are reachable from a [changed](changed_nodes)
/// node, changed nodes included.
///
/// Both parts of the returned partition are sorted in increasing order.
///
/// # Panics
///
/// Panics if a graph and its transpose have a different number of nodes, or
/// if `y` has fewer nodes than `x`.
pub fn affected_nodes<G: RandomAccessGraph>(
    x: &G,
    xt: &TransposeGraph,
    y: &G,
    yt: &TransposeGraph,
) -> AffectedNodes {
    let changed = changed_nodes(x, xt, y, yt);
    let n = y.num_nodes();

    // Breadth-first visit of y from all changed nodes
    let mut visited = BitVec::new(n);
    let mut queue = VecDeque::new();
    let mut num_changed = 0;
    for root in 0..n {
        if !changed[root] {
            continue;
        }
        num_changed += 1;
        if visited[root] {
            continue;
        }
        visited.set(root, true);
        queue.push_back(root);
        while let Some(node) = queue.pop_front() {
            for &succ in y.successors(node) {
                if !visited[succ] {
                    visited.set(succ, true);
                    queue.push_back(succ);
                }
            }
        }
    }

    let affected = AffectedNodes::from_fn(n, |node| visited[node]);
    log::debug!(
        "{} changed nodes, {} affected nodes out of {}",
        num_changed,
        affected.len(),
        n
    );
    affected
}
