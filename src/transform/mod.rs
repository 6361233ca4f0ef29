/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Transformations on graphs.
//!
//! # Transpose
//!
//! - [`transpose_with_degree`]: returns the transpose of a graph, with each
//!   node labelled by its outdegree in the original graph.
//!
//! # Permute
//!
//! - [`permute`]: returns a transpose with nodes relabelled following a given
//!   order.

mod perm;
pub use perm::*;

mod transpose;
pub use transpose::*;
