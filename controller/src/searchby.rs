// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::Movie;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SearchBy {
    Id(String),
    Title(String),
    Custom(String, String),
}

impl SearchBy {
    pub fn id(id: &str) -> Self {
        Self::Id(id.into())
    }

    pub fn title(title: &str) -> Self {
        Self::Title(title.into())
    }

    pub fn custom(key: &str, val: &str) -> Self {
        Self::Custom(key.into(), val.into())
    }

    /// Whether a movie satisfies this criteria, only `language` and `genre`
    /// are understood as custom keys
    pub fn matches(&self, movie: &Movie) -> bool {
        match self {
            SearchBy::Id(id) => movie.id.to_string() == *id,
            SearchBy::Title(title) => movie.title == *title,
            SearchBy::Custom(key, val) => match key.as_str() {
                "language" => movie.language == *val,
                "genre" => movie.genres.contains(val),
                _ => false,
            },
        }
    }
}

impl Display for SearchBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchBy::Id(id) => write!(f, "id({})", id),
            SearchBy::Title(title) => write!(f, "title({})", title),
            SearchBy::Custom(key, val) => write!(f, "{}({})", key, val),
        }
    }
}
