/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Sequential pull-based PageRank.
//!
//! The computation iterates
//!
//! > *aᵥ* = (1 − *p*) / *N* + ∑_(*u* → *v*) *p* · *rᵤ* / *d*⁺(*u*)
//!
//! where *p* is the damping factor, *N* the number of nodes, *r* the previous
//! approximation and *d*⁺(*u*) the outdegree of *u*. Predecessors are
//! enumerated on the [transpose](crate::graphs::transpose_graph::TransposeGraph)
//! of the graph, which also carries the outdegrees.
//!
//! Two entry points are provided:
//!
//! - [`pagerank_static`] computes PageRank on all nodes, starting from a
//!   uniform vector or from a given initial vector;
//! - [`pagerank_dynamic`] recomputes PageRank after a graph edit, updating only
//!   the nodes [affected](crate::dynamic::affected_nodes) by the edit and
//!   keeping the previous rank of all other nodes.
//!
//! Both use the same [convergence loop](pagerank_loop), which stops when the
//! [error](ErrorNorm) between successive approximations falls below the
//! tolerance, or when the maximum number of iterations is reached. The
//! computation is generic over the [rank type](Rank), which can be `f32` or
//! `f64`.
//!
//! # Dangling nodes
//!
//! By default ([`Mode::PseudoRank`]) nodes without successors give no
//! contribution, and ranks do not sum to one unless the graph has no dangling
//! nodes. With [`Mode::WeaklyPreferential`] their rank is redistributed
//! uniformly.

use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::AddAssign;

use num_traits::Float;
use sealed::sealed;

pub mod buffers;
pub mod kernels;
mod monolithic;
pub mod options;
pub mod preds;
pub mod result;
pub mod seq;

pub use buffers::RankBuffers;
pub use monolithic::*;
pub use options::{ErrorNorm, Mode, PageRankOptions};
pub use result::PageRankResult;

/// The floating-point types that can be used to store ranks.
///
/// This trait is sealed, and it is implemented for `f32` and `f64`.
#[sealed]
pub trait Rank: Float + AddAssign + Sum + Default + Debug + Display + Send + Sync + 'static {
    /// Converts a count (e.g., a number of nodes or an outdegree).
    fn from_count(n: usize) -> Self;
    /// Converts a double, possibly losing precision.
    fn from_f64(x: f64) -> Self;
}

#[sealed]
impl Rank for f32 {
    #[inline(always)]
    fn from_count(n: usize) -> Self {
        n as f32
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x as f32
    }
}

#[sealed]
impl Rank for f64 {
    #[inline(always)]
    fn from_count(n: usize) -> Self {
        n as f64
    }
    #[inline(always)]
    fn from_f64(x: f64) -> Self {
        x
    }
}
