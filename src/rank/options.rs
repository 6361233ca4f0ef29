/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Configuration of a PageRank computation.

use super::preds::{MaxIter, PredParams, Tolerance};
use super::Rank;
use anyhow::{ensure, Result};
use predicates::prelude::*;

/// Selects the norm used to measure the error between successive
/// approximations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorNorm {
    /// Sum of absolute differences. This is the default.
    #[default]
    L1,
    /// Euclidean norm of the difference.
    L2,
    /// Maximum absolute difference.
    LInf,
}

impl std::fmt::Display for ErrorNorm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorNorm::L1 => f.write_str("ℓ₁"),
            ErrorNorm::L2 => f.write_str("ℓ₂"),
            ErrorNorm::LInf => f.write_str("ℓ∞"),
        }
    }
}

/// Selects how the rank of dangling nodes (nodes without successors) is
/// handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mode {
    /// Dangling nodes give no contribution: every node receives just the
    /// teleport floor (1 − *p*) / *N* plus the contributions of its
    /// predecessors. In the presence of dangling nodes the result is not
    /// stochastic, but it is proportional to the strongly preferential
    /// PageRank with uniform preference. This is the default.
    #[default]
    PseudoRank,
    /// The rank of dangling nodes is spread uniformly over all nodes.
    ///
    /// Note that in this mode the rank of every node depends on the rank of
    /// all dangling nodes, so a [dynamic](super::pagerank_dynamic) computation
    /// updates all nodes whenever some node is affected.
    WeaklyPreferential,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::PseudoRank => f.write_str("pseudorank"),
            Mode::WeaklyPreferential => f.write_str("weakly preferential"),
        }
    }
}

/// Options of a PageRank computation.
///
/// Default values are available as associated constants. Invalid values are
/// detected by [`validate`](Self::validate), and running a computation with
/// invalid options panics.
///
/// # Examples
///
/// ```
/// use pagerank_csr::rank::{ErrorNorm, PageRankOptions};
///
/// let options = PageRankOptions::<f64> {
///     tolerance: 1E-10,
///     norm: ErrorNorm::LInf,
///     ..Default::default()
/// };
/// assert!(options.validate().is_ok());
/// assert_eq!(options.max_iter, PageRankOptions::<f64>::DEFAULT_MAX_ITER);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRankOptions<T> {
    /// The damping factor *p*, in [0 . . 1).
    pub damping: T,
    /// The error threshold; iteration stops when the error is strictly
    /// smaller. Zero makes the threshold unreachable.
    pub tolerance: T,
    /// The maximum number of iterations; at least one.
    pub max_iter: usize,
    /// The norm used to compute the error.
    pub norm: ErrorNorm,
    /// How dangling nodes are handled.
    pub mode: Mode,
    /// How many times the computation is repeated to measure its time; at
    /// least one.
    pub repeat: usize,
}

impl<T: Rank> PageRankOptions<T> {
    pub const DEFAULT_DAMPING: f64 = 0.85;
    pub const DEFAULT_TOLERANCE: f64 = 1E-6;
    pub const DEFAULT_MAX_ITER: usize = 500;
    pub const DEFAULT_REPEAT: usize = 1;

    /// Checks that the options are valid.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            !self.damping.is_nan() && self.damping >= T::zero() && self.damping < T::one(),
            // Note that 0.0..1.0 is [0.0..1.0) in mathematical notation
            "The damping factor must be in [0 . . 1), got {}",
            self.damping
        );
        ensure!(!self.tolerance.is_nan(), "The tolerance must not be NaN");
        ensure!(
            self.tolerance >= T::zero(),
            "The tolerance must be nonnegative, got {}",
            self.tolerance
        );
        ensure!(self.max_iter >= 1, "The maximum number of iterations must be positive");
        ensure!(self.repeat >= 1, "The number of repetitions must be positive");
        Ok(())
    }

    /// Returns the stopping predicate corresponding to these options: stop
    /// when the error is below the tolerance, or when the maximum number of
    /// iterations has been reached.
    pub fn stopping_predicate(&self) -> impl Predicate<PredParams<T>> {
        Tolerance::new_unchecked(self.tolerance).or(MaxIter::from(self.max_iter))
    }
}

impl<T: Rank> Default for PageRankOptions<T> {
    fn default() -> Self {
        Self {
            damping: T::from_f64(Self::DEFAULT_DAMPING),
            tolerance: T::from_f64(Self::DEFAULT_TOLERANCE),
            max_iter: Self::DEFAULT_MAX_ITER,
            norm: ErrorNorm::default(),
            mode: Mode::default(),
            repeat: Self::DEFAULT_REPEAT,
        }
    }
}
