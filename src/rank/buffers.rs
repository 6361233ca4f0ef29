/*
 * SPDX-FileCopyrightText: 2026 The pagerank-csr authors
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::Rank;

/// The vectors used by a double-buffered PageRank iteration.
///
/// There are two rank vectors: the _current_ one (*a*), which is written
/// during an iteration and holds the latest approximation at the end of it,
/// and the _previous_ one (*r*), which holds the approximation of the
/// preceding iteration. [`swap`](Self::swap) exchanges their roles in
/// constant time by flipping an index. A third vector stores the
/// contribution *c* of each node to its successors.
#[derive(Debug, Clone)]
pub struct RankBuffers<T> {
    ranks: [Box<[T]>; 2],
    current: usize,
    contributions: Box<[T]>,
}

impl<T: Rank> RankBuffers<T> {
    /// Creates zero-filled buffers for `n` nodes.
    pub fn new(n: usize) -> Self {
        Self {
            ranks: [vec![T::zero(); n].into(), vec![T::zero(); n].into()],
            current: 0,
            contributions: vec![T::zero(); n].into(),
        }
    }

    /// Creates buffers in which both rank vectors are copies of `seed`.
    ///
    /// Contributions are zero.
    pub fn from_seed(seed: &[T]) -> Self {
        Self {
            ranks: [seed.into(), seed.into()],
            current: 0,
            contributions: vec![T::zero(); seed.len()].into(),
        }
    }
}

impl<T> RankBuffers<T> {
    /// Returns the number of nodes.
    pub fn len(&self) -> usize {
        self.contributions.len()
    }

    /// Returns true if there are no nodes.
    pub fn is_empty(&self) -> bool {
        self.contributions.is_empty()
    }

    /// Returns the current rank vector.
    pub fn current(&self) -> &[T] {
        &self.ranks[self.current]
    }

    /// Returns the previous rank vector.
    pub fn previous(&self) -> &[T] {
        &self.ranks[1 - self.current]
    }

    /// Returns the contribution vector.
    pub fn contributions(&self) -> &[T] {
        &self.contributions
    }

    /// Returns mutable references to the current rank vector, the previous
    /// rank vector and the contribution vector, in this order.
    pub fn split_mut(&mut self) -> (&mut [T], &mut [T], &mut [T]) {
        let [first, second] = &mut self.ranks;
        let (current, previous) = if self.current == 0 {
            (first, second)
        } else {
            (second, first)
        };
        (&mut current[..], &mut previous[..], &mut self.contributions[..])
    }

    /// Exchanges the roles of the current and previous rank vectors.
    #[inline(always)]
    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Consumes the buffers, returning the current rank vector.
    pub fn into_ranks(self) -> Box<[T]> {
        let [first, second] = self.ranks;
        if self.current == 0 {
            first
        } else {
            second
        }
    }
}
