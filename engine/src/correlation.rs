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

use crate::utils::aligned_values;
use controller::Ratings;
use num_traits::float::Float;
use std::{hash::Hash, ops::AddAssign};

/// Pearson correlation between two rating columns using only the keys
/// (users) present in both of them.
///
/// Returns `None` when there is no comparable signal: fewer than two users
/// in common or one of the sides constant over them.
pub fn pearson_correlation<K, V>(a: &Ratings<K, V>, b: &Ratings<K, V>) -> Option<V>
where
    K: Hash + Eq + Ord,
    V: Float + AddAssign,
{
    let pairs = aligned_values(a, b);
    if pairs.len() < 2 {
        return None;
    }

    let (first_x, first_y) = pairs[0];
    if pairs.iter().all(|&(x, _)| x == first_x) || pairs.iter().all(|&(_, y)| y == first_y) {
        return None;
    }

    let n = V::from(pairs.len())?;
    let mut sum_x = V::zero();
    let mut sum_y = V::zero();

    for &(x, y) in &pairs {
        sum_x += x;
        sum_y += y;
    }

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let mut cov = V::zero();
    let mut dev_x = V::zero();
    let mut dev_y = V::zero();

    for &(x, y) in &pairs {
        let cx = x - mean_x;
        let cy = y - mean_y;

        cov += cx * cy;
        dev_x += cx.powi(2);
        dev_y += cy.powi(2);
    }

    let pearson = cov / (dev_x * dev_y).sqrt();
    if pearson.is_nan() || pearson.is_infinite() {
        None
    } else {
        Some(pearson.max(-V::one()).min(V::one()))
    }
}
