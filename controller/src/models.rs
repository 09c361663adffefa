// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{Entity, Genres, MovieId, UserId};
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub language: String,
    pub genres: Genres,
}

impl Movie {
    pub fn new(id: MovieId, title: &str, language: &str, genres: Genres) -> Self {
        Self {
            id,
            title: title.into(),
            language: language.into(),
            genres,
        }
    }
}

impl Entity for Movie {
    type Id = MovieId;

    fn get_id(&self) -> MovieId {
        self.id
    }

    fn get_data(&self) -> HashMap<String, String> {
        let mut data = HashMap::new();
        data.insert("title".into(), self.title.clone());
        data.insert("language".into(), self.language.clone());
        data.insert("genres".into(), self.genres.to_string());
        data
    }
}

// A single (user, movie) observation as it comes from the ratings file
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    pub user_id: UserId,
    pub movie_id: MovieId,
    pub score: f64,
}

impl Rating {
    pub fn new(user_id: UserId, movie_id: MovieId, score: f64) -> Self {
        Self {
            user_id,
            movie_id,
            score,
        }
    }
}

// A rating already matched against its movie, keyed by title
#[derive(Debug, Clone, PartialEq)]
pub struct TitledRating {
    pub user_id: UserId,
    pub title: String,
    pub score: f64,
}

impl TitledRating {
    pub fn new(user_id: UserId, title: &str, score: f64) -> Self {
        Self {
            user_id,
            title: title.into(),
            score,
        }
    }
}
