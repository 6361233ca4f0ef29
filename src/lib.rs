/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

#![doc = include_str!("../README.md")]
#![deny(unstable_features)]
#![deny(trivial_casts)]
#![deny(unconditional_recursion)]
#![deny(clippy::empty_loop)]
#![deny(unreachable_code)]
#![deny(unreachable_patterns)]
#![deny(unused_macro_rules)]
#![deny(unused_doc_comments)]

pub mod dynamic;
pub mod graphs;
pub mod rank;
pub mod traits;
pub mod transform;

pub mod prelude {
    pub use crate::dynamic::{affected_nodes, changed_nodes, AffectedError, AffectedNodes};
    pub use crate::graphs::prelude::*;
    pub use crate::rank::{
        pagerank_dynamic, pagerank_static, ErrorNorm, Mode, PageRankOptions, PageRankResult,
        Rank,
    };
    pub use crate::traits::*;
    pub use crate::transform::*;
}
