/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Predicates implementing stopping conditions.
//!
//! The [convergence loop](super::pagerank_loop) evaluates a
//! [predicate](Predicate) after each iteration, and stops if it evaluates to
//! true. The predicate is built by
//! [`PageRankOptions::stopping_predicate`](super::PageRankOptions::stopping_predicate)
//! combining a [`Tolerance`] and a [`MaxIter`], but the predicates in this
//! module can be combined freely using the `and` and `or` methods provided by
//! the [`Predicate`] trait.
//!
//! # Examples
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use predicates::prelude::*;
//! use pagerank_csr::rank::preds::{MaxIter, PredParams, Tolerance};
//!
//! let predicate = Tolerance::new(1E-6)?.or(MaxIter::from(100));
//! assert!(predicate.eval(&PredParams { iteration: 100, error: 1.0 }));
//! assert!(!predicate.eval(&PredParams { iteration: 1, error: 1E-6 }));
//! #     Ok(())
//! # }
//! ```

use super::Rank;
use anyhow::ensure;
use predicates::{reflection::PredicateReflection, Predicate};
use std::fmt::Display;

#[doc(hidden)]
/// This structure is passed to stopping predicates to provide the
/// information that is needed to evaluate them.
#[derive(Debug)]
pub struct PredParams<T> {
    pub iteration: usize,
    pub error: T,
}

/// Stops after at most the provided number of iterations.
#[derive(Debug, Clone)]
pub struct MaxIter {
    max_iter: usize,
}

impl From<usize> for MaxIter {
    fn from(max_iter: usize) -> Self {
        MaxIter { max_iter }
    }
}

impl Display for MaxIter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(max iter: {})", self.max_iter))
    }
}

impl PredicateReflection for MaxIter {}

impl<T> Predicate<PredParams<T>> for MaxIter {
    fn eval(&self, pred_params: &PredParams<T>) -> bool {
        pred_params.iteration >= self.max_iter
    }
}

/// Stops when the error between successive approximations is strictly
/// smaller than a given threshold.
///
/// A threshold equal to zero is never met.
#[derive(Debug, Clone)]
pub struct Tolerance<T> {
    threshold: T,
}

impl<T: Rank> Tolerance<T> {
    /// Creates a new tolerance predicate, checking that the threshold is
    /// nonnegative.
    pub fn new(threshold: T) -> anyhow::Result<Self> {
        ensure!(!threshold.is_nan(), "The threshold must not be NaN");
        ensure!(
            threshold >= T::zero(),
            "The threshold must be nonnegative, got {threshold}"
        );
        Ok(Self { threshold })
    }

    pub(crate) fn new_unchecked(threshold: T) -> Self {
        Self { threshold }
    }
}

impl<T: Display> Display for Tolerance<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!("(error < {})", self.threshold))
    }
}

impl<T: Display> PredicateReflection for Tolerance<T> {}

impl<T: Rank> Predicate<PredParams<T>> for Tolerance<T> {
    fn eval(&self, pred_params: &PredParams<T>) -> bool {
        pred_params.error < self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance() {
        assert!(Tolerance::new(-1E-3).is_err());
        assert!(Tolerance::new(f64::NAN).is_err());
        let t = Tolerance::new(1E-3).unwrap();
        assert!(t.eval(&PredParams {
            iteration: 1,
            error: 1E-4
        }));
        assert!(!t.eval(&PredParams {
            iteration: 1,
            error: 1E-3
        }));
        let zero = Tolerance::new(0.0_f32).unwrap();
        assert!(!zero.eval(&PredParams {
            iteration: 1,
            error: 0.0
        }));
    }

    #[test]
    fn test_max_iter() {
        let m = MaxIter::from(3);
        assert!(!Predicate::<PredParams<f64>>::eval(
            &m,
            &PredParams {
                iteration: 2,
                error: 1.0
            }
        ));
        assert!(Predicate::<PredParams<f64>>::eval(
            &m,
            &PredParams {
                iteration: 3,
                error: 1.0
            }
        ));
        assert_eq!(m.to_string(), "(max iter: 3)");
    }
}
