/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Basic trait to access graphs in random-access fashion.

Nodes are the integers in `[0 . . n)`, where *n* is the [number of
nodes](RandomAccessGraph::num_nodes). Successors are exposed as slices: all
graphs in this crate are stored in compressed sparse-row form, so a slice is
the natural (and fastest) view of a successor list.

The function [`eq`] can be used to check whether two graphs are equal.

*/

use std::rc::Rc;

use impl_tools::autoimpl;
use thiserror::Error;

/// A graph providing random access to successor lists.
///
/// Note that there is no guarantee that successors are returned in
/// ascending order, unless the implementation states otherwise.
#[autoimpl(for<S: trait + ?Sized> &S, &mut S, Rc<S>)]
pub trait RandomAccessGraph {
    /// Returns the number of nodes of the graph.
    fn num_nodes(&self) -> usize;

    /// Returns the number of arcs of the graph.
    fn num_arcs(&self) -> usize;

    /// Returns the successors of a node.
    fn successors(&self, node: usize) -> &[usize];

    /// Returns the outdegree of a node.
    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).len()
    }

    /// Returns whether there is an arc going from `src` to `dst`.
    ///
    /// Note that the default implementation performs a linear scan.
    fn has_arc(&self, src: usize, dst: usize) -> bool {
        self.successors(src).contains(&dst)
    }
}

/// Error types that can occur during graph equality checking.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EqError {
    /// The graphs have different numbers of nodes.
    #[error("Different number of nodes: {first} != {second}")]
    NumNodes { first: usize, second: usize },

    /// The graphs have different numbers of arcs.
    #[error("Different number of arcs: {first} != {second}")]
    NumArcs { first: usize, second: usize },

    /// The graphs have different successors for a specific node.
    #[error("Different successors for node {node}: at index {index} {first} != {second}")]
    Successors {
        node: usize,
        index: usize,
        first: usize,
        second: usize,
    },

    /// The graphs have different outdegrees for a specific node.
    #[error("Different outdegree for node {node}: {first} != {second}")]
    Outdegree {
        node: usize,
        first: usize,
        second: usize,
    },
}

/// Checks whether two graphs are equal, returning the first difference found.
///
/// Successor lists are compared as sets, so the function can be used on
/// graphs whose successors are not sorted.
pub fn eq<G0: RandomAccessGraph, G1: RandomAccessGraph>(g0: &G0, g1: &G1) -> Result<(), EqError> {
    if g0.num_nodes() != g1.num_nodes() {
        return Err(EqError::NumNodes {
            first: g0.num_nodes(),
            second: g1.num_nodes(),
        });
    }
    if g0.num_arcs() != g1.num_arcs() {
        return Err(EqError::NumArcs {
            first: g0.num_arcs(),
            second: g1.num_arcs(),
        });
    }
    for node in 0..g0.num_nodes() {
        eq_succs(node, g0.successors(node), g1.successors(node))?;
    }
    Ok(())
}

/// Returns true if the successor lists of `node0` in `g0` and `node1` in `g1`
/// contain the same nodes.
pub fn same_successors<G0: RandomAccessGraph, G1: RandomAccessGraph>(
    g0: &G0,
    node0: usize,
    g1: &G1,
    node1: usize,
) -> bool {
    eq_succs(node0, g0.successors(node0), g1.successors(node1)).is_ok()
}

#[doc(hidden)]
/// Checks whether two successor lists contain the same nodes,
/// returning an appropriate error.
pub fn eq_succs(node: usize, succ0: &[usize], succ1: &[usize]) -> Result<(), EqError> {
    if succ0.len() != succ1.len() {
        return Err(EqError::Outdegree {
            node,
            first: succ0.len(),
            second: succ1.len(),
        });
    }
    if succ0 == succ1 {
        return Ok(());
    }
    let mut succ0 = succ0.to_vec();
    let mut succ1 = succ1.to_vec();
    succ0.sort_unstable();
    succ1.sort_unstable();
    match succ0.iter().zip(succ1.iter()).position(|(a, b)| a != b) {
        None => Ok(()),
        Some(index) => Err(EqError::Successors {
            node,
            index,
            first: succ0[index],
            second: succ1[index],
        }),
    }
}
