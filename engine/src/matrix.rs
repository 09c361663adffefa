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

use crate::error::ErrorKind;
use controller::{MapedRatings, Ratings, TitledRating, UserId};
use std::collections::{hash_map::Entry, HashSet};

/// Sparse users × movies matrix stored by columns, every column is keyed by
/// the movie title. A missing cell means the user never rated the movie.
#[derive(Debug, Clone, Default)]
pub struct RatingMatrix {
    columns: MapedRatings<String, UserId>,
    users: HashSet<UserId>,
}

impl RatingMatrix {
    pub fn column(&self, title: &str) -> Option<&Ratings<UserId>> {
        self.columns.get(title)
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Ratings<UserId>)> {
        self.columns
            .iter()
            .map(|(title, ratings)| (title.as_str(), ratings))
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.columns.contains_key(title)
    }

    pub fn get(&self, user: UserId, title: &str) -> Option<f64> {
        self.columns.get(title)?.get(&user).copied()
    }

    /// Number of columns (movies)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Number of rows (users)
    pub fn users_count(&self) -> usize {
        self.users.len()
    }

    /// Number of present cells
    pub fn ratings_count(&self) -> usize {
        self.columns.values().map(|column| column.len()).sum()
    }
}

#[derive(Debug, Default)]
pub struct RatingMatrixBuilder {
    matrix: RatingMatrix,
}

impl RatingMatrixBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill a single cell. Non finite scores and a second rating for an
    /// already filled cell are rejected, the first value stays.
    pub fn insert(&mut self, user: UserId, title: &str, score: f64) -> Result<(), ErrorKind> {
        if !score.is_finite() {
            return Err(ErrorKind::InvalidRating {
                user,
                title: title.into(),
                score,
            });
        }

        let column = self.matrix.columns.entry(title.into()).or_default();
        match column.entry(user) {
            Entry::Occupied(_) => {
                return Err(ErrorKind::DuplicateRating {
                    user,
                    title: title.into(),
                })
            }
            Entry::Vacant(cell) => {
                cell.insert(score);
            }
        }

        self.matrix.users.insert(user);
        Ok(())
    }

    pub fn build(self) -> RatingMatrix {
        self.matrix
    }

    /// Build a matrix out of joined records, rejected rows are logged and
    /// left out.
    pub fn from_records<I>(records: I) -> RatingMatrix
    where
        I: IntoIterator<Item = TitledRating>,
    {
        let mut builder = Self::new();
        let mut rejected = 0;

        for record in records {
            if let Err(e) = builder.insert(record.user_id, &record.title, record.score) {
                log::warn!("Dropping rating: {}", e);
                rejected += 1;
            }
        }

        let matrix = builder.build();
        log::info!(
            "Built rating matrix with {} users, {} movies and {} ratings ({} rejected)",
            matrix.users_count(),
            matrix.len(),
            matrix.ratings_count(),
            rejected
        );

        matrix
    }
}
