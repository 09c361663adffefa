// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of movie-recommender.
//
// movie-recommender is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// movie-recommender is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with movie-recommender.  If not, see <http://www.gnu.org/licenses/>.

use crate::scored::ScoredCandidate;
use std::{cmp::Reverse, collections::BinaryHeap};

type MinHeap<T> = BinaryHeap<Reverse<T>>;

/// Keeps the `n` greatest candidates pushed into it
#[derive(Debug)]
pub struct TopN {
    n: usize,
    min_heap: MinHeap<ScoredCandidate>,
}

impl TopN {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            min_heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, candidate: ScoredCandidate) {
        if self.n == 0 {
            return;
        }

        if self.min_heap.len() < self.n {
            self.min_heap.push(Reverse(candidate));
        } else if let Some(minimum) = self.min_heap.peek() {
            if candidate > minimum.0 {
                self.min_heap.pop();
                self.min_heap.push(Reverse(candidate));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.min_heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.min_heap.is_empty()
    }

    /// Best candidate first
    pub fn into_vec(self) -> Vec<ScoredCandidate> {
        self.min_heap
            .into_sorted_vec()
            .into_iter()
            .map(|r| r.0)
            .collect()
    }
}

impl Extend<ScoredCandidate> for TopN {
    fn extend<I: IntoIterator<Item = ScoredCandidate>>(&mut self, iter: I) {
        for candidate in iter {
            self.push(candidate);
        }
    }
}
