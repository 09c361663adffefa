// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod genres;
pub mod models;
pub mod searchby;

use anyhow::Error;
use std::collections::HashMap;

pub use entity::{Entity, ToTable};
pub use genres::Genres;
pub use models::{Movie, Rating, TitledRating};
pub use searchby::SearchBy;

pub type Result<T> = std::result::Result<T, Error>;
pub type UserId = u64;
pub type MovieId = u64;
pub type Ratings<I, Value = f64> = HashMap<I, Value>;
pub type MapedRatings<K, I, Value = f64> = HashMap<K, Ratings<I, Value>>;

pub trait Controller {
    /// Get all movies that survived loading and filtering
    fn movies(&self) -> Result<Vec<Movie>>;

    /// Get movies that matched the search criteria by id, title or custom (if implemented)
    fn movies_by(&self, by: &SearchBy) -> Result<Vec<Movie>>;

    /// Get all ratings, not yet matched against any movie
    fn ratings(&self) -> Result<Vec<Rating>>;

    /// Inner join of ratings and movies on the movie id, ratings pointing to
    /// unknown movies are left out
    fn titled_ratings(&self) -> Result<Vec<TitledRating>> {
        let titles: HashMap<MovieId, String> = self
            .movies()?
            .into_iter()
            .map(|movie| (movie.id, movie.title))
            .collect();

        let joined = self
            .ratings()?
            .into_iter()
            .filter_map(|rating| {
                let title = titles.get(&rating.movie_id)?;
                Some(TitledRating {
                    user_id: rating.user_id,
                    title: title.clone(),
                    score: rating.score,
                })
            })
            .collect();

        Ok(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct InMemory {
        movies: Vec<Movie>,
        ratings: Vec<Rating>,
    }

    impl Controller for InMemory {
        fn movies(&self) -> Result<Vec<Movie>> {
            Ok(self.movies.clone())
        }

        fn movies_by(&self, by: &SearchBy) -> Result<Vec<Movie>> {
            Ok(self
                .movies
                .iter()
                .filter(|movie| by.matches(movie))
                .cloned()
                .collect())
        }

        fn ratings(&self) -> Result<Vec<Rating>> {
            Ok(self.ratings.clone())
        }
    }

    #[test]
    fn titled_ratings_is_an_inner_join() -> std::result::Result<(), Error> {
        let controller = InMemory {
            movies: vec![
                Movie::new(1, "Heat", "en", Genres::from_tags(vec!["Crime"])),
                Movie::new(2, "Alien", "en", Genres::default()),
            ],
            ratings: vec![
                Rating::new(10, 1, 4.0),
                Rating::new(10, 3, 2.0),
                Rating::new(11, 2, 5.0),
            ],
        };

        let mut joined = controller.titled_ratings()?;
        joined.sort_by(|a, b| a.title.cmp(&b.title));

        assert_eq!(joined.len(), 2);
        assert_eq!(joined[0], TitledRating::new(11, "Alien", 5.0));
        assert_eq!(joined[1], TitledRating::new(10, "Heat", 4.0));

        Ok(())
    }

    #[test]
    fn movies_by_title() -> std::result::Result<(), Error> {
        let controller = InMemory {
            movies: vec![
                Movie::new(1, "Heat", "en", Genres::default()),
                Movie::new(2, "Alien", "en", Genres::default()),
            ],
            ratings: vec![],
        };

        let found = controller.movies_by(&SearchBy::title("Alien"))?;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, 2);

        Ok(())
    }
}
