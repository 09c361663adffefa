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

use controller::Genres;

/// Tags of `a` that are also present in `b`
pub fn shared_genres<'a>(a: &'a Genres, b: &'a Genres) -> impl Iterator<Item = &'a String> + 'a {
    a.iter().filter(move |tag| b.contains(tag))
}

/// Bonus added to a correlation for every tag the two movies have in common.
/// When `a` has no tags nothing is compared and the bonus is zero.
pub fn genre_bonus(a: &Genres, b: &Genres, weight: f64) -> f64 {
    if a.is_empty() {
        return 0.0;
    }

    shared_genres(a, b).count() as f64 * weight
}
