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

pub mod catalog;
pub mod correlation;
pub mod error;
pub mod genres;
pub mod matrix;
pub mod ranking;
pub mod scored;
pub mod utils;

pub use crate::{
    catalog::Catalog,
    error::ErrorKind,
    matrix::{RatingMatrix, RatingMatrixBuilder},
    scored::ScoredCandidate,
};

use crate::{correlation::pearson_correlation, genres::genre_bonus, ranking::TopN};
use anyhow::Error;
use config::EngineConfig;
use controller::{Controller, Movie};

pub const DEFAULT_GENRE_WEIGHT: f64 = 0.1;

/// What to recommend and how to score it
#[derive(Debug, Clone, PartialEq)]
pub struct Query<'a> {
    pub title: &'a str,
    pub n: usize,
    pub use_genre: bool,
    pub weight: f64,
}

impl<'a> Query<'a> {
    pub fn new(title: &'a str, n: usize) -> Self {
        Self {
            title,
            n,
            use_genre: true,
            weight: DEFAULT_GENRE_WEIGHT,
        }
    }

    pub fn use_genre(mut self, use_genre: bool) -> Self {
        self.use_genre = use_genre;
        self
    }

    pub fn weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    fn validate(&self) -> Result<(), ErrorKind> {
        if self.n == 0 {
            return Err(ErrorKind::ZeroResults);
        }

        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ErrorKind::InvalidWeight(self.weight));
        }

        Ok(())
    }
}

/// Rank every other movie of the matrix by its rating correlation with the
/// query movie, plus a bonus per shared genre when asked for and the query
/// movie has genres. Movies without a defined correlation are left out.
pub fn recommend(
    catalog: &Catalog,
    matrix: &RatingMatrix,
    query: &Query,
) -> Result<Vec<ScoredCandidate>, ErrorKind> {
    query.validate()?;

    let movie = catalog
        .get(query.title)
        .ok_or_else(|| ErrorKind::MovieNotFound(query.title.into()))?;

    let ratings = matrix
        .column(query.title)
        .ok_or_else(|| ErrorKind::NotInMatrix(query.title.into()))?;

    let score_genres = query.use_genre && !movie.genres.is_empty();
    let mut top = TopN::new(query.n);
    let mut excluded = 0;

    for (title, other) in matrix.columns() {
        if title == query.title {
            continue;
        }

        let mut score = match pearson_correlation(ratings, other) {
            Some(score) => score,
            None => {
                log::trace!("No comparable ratings between '{}' and '{}'", query.title, title);
                excluded += 1;
                continue;
            }
        };

        let genres = match catalog.genres(title) {
            Some(genres) => genres.clone(),
            None => {
                log::warn!("Movie '{}' has ratings but no metadata", title);
                Default::default()
            }
        };

        if score_genres {
            score += genre_bonus(&movie.genres, &genres, query.weight);
        }

        // A huge weight can push the bonus out of range
        if !score.is_finite() {
            log::trace!("Score of '{}' against '{}' overflowed", title, query.title);
            excluded += 1;
            continue;
        }

        top.push(ScoredCandidate::new(title, score, genres));
    }

    log::debug!(
        "Scored {} movies against '{}' ({} without comparable ratings)",
        matrix.len().saturating_sub(1 + excluded),
        query.title,
        excluded
    );

    Ok(top.into_vec())
}

/// Movie metadata and the rating matrix, both built once and read only
/// afterwards.
pub struct Engine {
    catalog: Catalog,
    matrix: RatingMatrix,
    config: EngineConfig,
}

impl Engine {
    pub fn new(catalog: Catalog, matrix: RatingMatrix, config: EngineConfig) -> Self {
        Self {
            catalog,
            matrix,
            config,
        }
    }

    pub fn with_controller<C: Controller>(controller: &C, config: EngineConfig) -> Result<Self, Error> {
        let catalog: Catalog = controller.movies()?.into_iter().collect();
        let matrix = RatingMatrixBuilder::from_records(controller.titled_ratings()?);

        log::info!("Catalog has {} movies", catalog.len());
        Ok(Self::new(catalog, matrix, config))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn matrix(&self) -> &RatingMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// A query for `title` using the configured defaults
    pub fn query<'a>(&self, title: &'a str) -> Query<'a> {
        Query::new(title, self.config.top_n)
            .use_genre(self.config.use_genre)
            .weight(self.config.genre_weight)
    }

    pub fn recommend(&self, query: &Query) -> Result<Vec<ScoredCandidate>, ErrorKind> {
        recommend(&self.catalog, &self.matrix, query)
    }

    pub fn movie(&self, title: &str) -> Result<&Movie, ErrorKind> {
        self.catalog
            .get(title)
            .ok_or_else(|| ErrorKind::MovieNotFound(title.into()))
    }

    /// Rating correlation between two movies, `None` if it isn't defined
    pub fn correlation(&self, a: &str, b: &str) -> Result<Option<f64>, ErrorKind> {
        let column = |title: &str| {
            self.matrix
                .column(title)
                .ok_or_else(|| ErrorKind::NotInMatrix(title.into()))
        };

        Ok(pearson_correlation(column(a)?, column(b)?))
    }
}
