/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph implementations.

pub mod csr_graph;
pub mod random;
pub mod transpose_graph;

pub mod prelude {
    pub use super::csr_graph::{CsrError, CsrGraph};
    pub use super::random::ErdosRenyi;
    pub use super::transpose_graph::TransposeGraph;
}
