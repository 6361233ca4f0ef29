/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Per-node numeric kernels.
//!
//! All kernels are pure functions operating on a window of node indices; they
//! do not allocate, with the exception of [`factors`], which builds the vector
//! it returns.

use std::ops::Range;

use kahan::KahanSum;

use super::{ErrorNorm, Rank};

/// Computes the contribution factors *p* / *d*⁺(*v*), where *d*⁺(*v*) is the
/// outdegree of *v*.
///
/// Dangling nodes have factor zero, so they give no contribution.
pub fn factors<T: Rank>(outdegrees: &[usize], damping: T) -> Box<[T]> {
    outdegrees
        .iter()
        .map(|&d| {
            if d == 0 {
                T::zero()
            } else {
                damping / T::from_count(d)
            }
        })
        .collect()
}

/// Sets `a[v]` to `c0` plus the sum of the contributions `c[u]` of the
/// predecessors `u` of `v`, for each `v` in `window`.
///
/// Predecessors are given in compressed sparse-row form: those of `v` are
/// `preds[dcf[v]..dcf[v + 1]]`.
#[inline]
pub fn accumulate<T: Rank>(
    a: &mut [T],
    c: &[T],
    dcf: &[usize],
    preds: &[usize],
    window: Range<usize>,
    c0: T,
) {
    for v in window {
        let mut sum = c0;
        for &u in &preds[dcf[v]..dcf[v + 1]] {
            sum += c[u];
        }
        a[v] = sum;
    }
}

/// Returns the distance between `a` and `r` restricted to `window`, measured
/// with the given norm.
pub fn error<T: Rank>(a: &[T], r: &[T], window: Range<usize>, norm: ErrorNorm) -> T {
    let diffs = a[window.clone()]
        .iter()
        .zip(&r[window])
        .map(|(&x, &y)| (x - y).abs());
    match norm {
        ErrorNorm::L1 => {
            let mut sum = KahanSum::<T>::new();
            for d in diffs {
                sum += d;
            }
            sum.sum()
        }
        ErrorNorm::L2 => {
            let mut sum = KahanSum::<T>::new();
            for d in diffs {
                sum += d * d;
            }
            sum.sum().sqrt()
        }
        ErrorNorm::LInf => diffs.fold(T::zero(), T::max),
    }
}

/// Sets `c[v]` to `a[v] · f[v]` for each `v` in `window`.
#[inline]
pub fn scale<T: Rank>(c: &mut [T], a: &[T], f: &[T], window: Range<usize>) {
    for ((c, &a), &f) in c[window.clone()]
        .iter_mut()
        .zip(&a[window.clone()])
        .zip(&f[window])
    {
        *c = a * f;
    }
}

/// Returns the sum of the ranks of dangling nodes, that is, nodes whose
/// outdegree is zero.
pub fn dangling_mass<T: Rank>(r: &[T], outdegrees: &[usize]) -> T {
    let mut sum = KahanSum::<T>::new();
    for (&x, _) in r.iter().zip(outdegrees).filter(|&(_, &d)| d == 0) {
        sum += x;
    }
    sum.sum()
}
