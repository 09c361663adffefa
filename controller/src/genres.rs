// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use std::{
    fmt::{self, Display},
    iter::FromIterator,
    slice::Iter,
};

/// Set of genre tags attached to a movie.
///
/// Tags keep the order in which they were first seen, duplicates are dropped
/// on construction. Comparison between tags is exact and case-sensitive.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Genres {
    tags: Vec<String>,
}

impl Genres {
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        tags.into_iter().collect()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.tags
    }
}

impl<S: Into<String>> FromIterator<S> for Genres {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut genres = Genres::default();
        for tag in iter {
            let tag = tag.into();
            if !genres.contains(&tag) {
                genres.tags.push(tag);
            }
        }

        genres
    }
}

impl<'a> IntoIterator for &'a Genres {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl Display for Genres {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_are_dropped() {
        let genres = Genres::from_tags(vec!["Drama", "Action", "Drama"]);

        assert_eq!(genres.len(), 2);
        assert_eq!(genres.as_slice(), &["Drama".to_string(), "Action".to_string()]);
    }

    #[test]
    fn tags_are_case_sensitive() {
        let genres = Genres::from_tags(vec!["Drama"]);

        assert!(genres.contains("Drama"));
        assert!(!genres.contains("drama"));
    }

    #[test]
    fn display_joins_tags() {
        let genres = Genres::from_tags(vec!["Action", "Crime"]);
        assert_eq!(genres.to_string(), "Action, Crime");

        assert_eq!(Genres::default().to_string(), "");
    }
}
