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

use controller::{Genres, Movie};
use std::{
    collections::{hash_map::Entry, HashMap},
    iter::FromIterator,
};

/// Movie metadata indexed by title
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    movies: HashMap<String, Movie>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie, a title that's already present keeps its first record
    pub fn insert(&mut self, movie: Movie) -> bool {
        match self.movies.entry(movie.title.clone()) {
            Entry::Occupied(entry) => {
                log::debug!(
                    "Ignoring movie with id({}), title '{}' already taken by id({})",
                    movie.id,
                    movie.title,
                    entry.get().id
                );
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(movie);
                true
            }
        }
    }

    pub fn get(&self, title: &str) -> Option<&Movie> {
        self.movies.get(title)
    }

    pub fn genres(&self, title: &str) -> Option<&Genres> {
        self.movies.get(title).map(|movie| &movie.genres)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

impl FromIterator<Movie> for Catalog {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for movie in iter {
            catalog.insert(movie);
        }

        catalog
    }
}
