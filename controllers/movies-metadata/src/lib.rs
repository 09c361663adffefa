// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod parser;

use anyhow::Error;
use controller::{error::ErrorKind, Controller, Movie, Rating, SearchBy};
use csv::StringRecord;
use indicatif::ProgressIterator;
use std::{fs::File, io::Read, path::Path};

pub const METADATA_PATH: &str = "data/movies_metadata.csv";
pub const RATINGS_PATH: &str = "data/ratings_small.csv";

/// Controller backed by the `movies_metadata.csv` and `ratings_small.csv`
/// dumps, everything is read once and kept in memory.
pub struct MoviesMetadataController {
    movies: Vec<Movie>,
    ratings: Vec<Rating>,
}

impl MoviesMetadataController {
    pub fn new() -> Result<Self, Error> {
        Self::with_paths(METADATA_PATH, RATINGS_PATH, Some("en"))
    }

    pub fn with_paths(
        metadata: impl AsRef<Path>,
        ratings: impl AsRef<Path>,
        language: Option<&str>,
    ) -> Result<Self, Error> {
        log::info!("Reading movies from {}", metadata.as_ref().display());
        let metadata = File::open(metadata)?;

        log::info!("Reading ratings from {}", ratings.as_ref().display());
        let ratings = File::open(ratings)?;

        Self::from_readers(metadata, ratings, language)
    }

    pub fn from_readers<M, R>(metadata: M, ratings: R, language: Option<&str>) -> Result<Self, Error>
    where
        M: Read,
        R: Read,
    {
        let movies = read_movies(metadata, language)?;
        let ratings = read_ratings(ratings)?;

        Ok(Self { movies, ratings })
    }
}

impl Controller for MoviesMetadataController {
    fn movies(&self) -> Result<Vec<Movie>, Error> {
        Ok(self.movies.clone())
    }

    fn movies_by(&self, by: &SearchBy) -> Result<Vec<Movie>, Error> {
        let movies: Vec<_> = self
            .movies
            .iter()
            .filter(|movie| by.matches(movie))
            .cloned()
            .collect();

        if !movies.is_empty() {
            return Ok(movies);
        }

        let err = match by {
            SearchBy::Id(id) => ErrorKind::NotFoundById(id.clone()),
            SearchBy::Title(title) => ErrorKind::NotFoundByTitle(title.clone()),
            SearchBy::Custom(k, v) => ErrorKind::NotFoundByCustom(k.clone(), v.clone()),
        };

        Err(err.into())
    }

    fn ratings(&self) -> Result<Vec<Rating>, Error> {
        Ok(self.ratings.clone())
    }
}

fn column(headers: &StringRecord, name: &'static str) -> Result<usize, ErrorKind> {
    headers
        .iter()
        .position(|header| header.trim() == name)
        .ok_or(ErrorKind::MissingColumn(name))
}

fn field<'r>(record: &'r StringRecord, idx: usize, name: &'static str) -> Result<&'r str, ErrorKind> {
    record
        .get(idx)
        .map(str::trim)
        .ok_or(ErrorKind::MissingColumn(name))
}

fn parse_id(value: &str, name: &'static str) -> Result<u64, ErrorKind> {
    value
        .parse()
        .map_err(|_| ErrorKind::InvalidNumber(name, value.into()))
}

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .flexible(true)
        .from_reader(input)
}

/// Read the movies metadata, keeping only movies in `language` (if any).
/// Rows with a non-numeric id or a malformed genres cell are dropped.
pub fn read_movies<R: Read>(input: R, language: Option<&str>) -> Result<Vec<Movie>, Error> {
    let mut csv = reader(input);
    let headers = csv.headers()?.clone();

    let id_idx = column(&headers, "id")?;
    let title_idx = column(&headers, "original_title")?;
    let language_idx = column(&headers, "original_language")?;
    let genres_idx = column(&headers, "genres")?;

    let mut movies = Vec::new();
    let mut dropped = 0;
    let records: Vec<_> = csv.records().collect();

    for record in records.iter().progress() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Dropping unreadable movie row: {}", e);
                dropped += 1;
                continue;
            }
        };

        let parsed = (|| -> Result<Option<Movie>, ErrorKind> {
            let movie_language = field(record, language_idx, "original_language")?;
            if let Some(language) = language {
                if movie_language != language {
                    return Ok(None);
                }
            }

            let id = parse_id(field(record, id_idx, "id")?, "id")?;
            let title = field(record, title_idx, "original_title")?;
            let genres = parser::parse_genres(field(record, genres_idx, "genres")?)?;

            Ok(Some(Movie::new(id, title, movie_language, genres)))
        })();

        match parsed {
            Ok(Some(movie)) => movies.push(movie),
            Ok(None) => {}
            Err(e) => {
                log::warn!("Dropping movie row: {}", e);
                dropped += 1;
            }
        }
    }

    log::info!("Loaded {} movies ({} rows dropped)", movies.len(), dropped);
    Ok(movies)
}

/// Read the `userId,movieId,rating` triples, rows with non-numeric values are dropped.
pub fn read_ratings<R: Read>(input: R) -> Result<Vec<Rating>, Error> {
    let mut csv = reader(input);
    let headers = csv.headers()?.clone();

    let user_idx = column(&headers, "userId")?;
    let movie_idx = column(&headers, "movieId")?;
    let rating_idx = column(&headers, "rating")?;

    let mut ratings = Vec::new();
    let mut dropped = 0;
    let records: Vec<_> = csv.records().collect();

    for record in records.iter().progress() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Dropping unreadable rating row: {}", e);
                dropped += 1;
                continue;
            }
        };

        let parsed = (|| -> Result<Rating, ErrorKind> {
            let user_id = parse_id(field(record, user_idx, "userId")?, "userId")?;
            let movie_id = parse_id(field(record, movie_idx, "movieId")?, "movieId")?;

            let score = field(record, rating_idx, "rating")?;
            let score: f64 = score
                .parse()
                .map_err(|_| ErrorKind::InvalidNumber("rating", score.into()))?;

            Ok(Rating::new(user_id, movie_id, score))
        })();

        match parsed {
            Ok(rating) => ratings.push(rating),
            Err(e) => {
                log::warn!("Dropping rating row: {}", e);
                dropped += 1;
            }
        }
    }

    log::info!("Loaded {} ratings ({} rows dropped)", ratings.len(), dropped);
    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use controller::{Genres, TitledRating};

    const METADATA: &str = r#"adult,genres,id,original_language,original_title,popularity
False,"[{'id': 28, 'name': 'Action'}, {'id': 18, 'name': 'Drama'}]",155,en,The Dark Knight,57.4
False,"[{'id': 80, 'name': 'Crime'}, {'id': 18, 'name': 'Drama'}]",949,en,Heat,17.9
False,"[{'id': 18, 'name': 'Drama'}]",129,ja,千と千尋の神隠し,41.0
False,[],1997-08-20,en,Broken Row,0.0
False,"[{'id': 35, 'name': 'Comedy'",11,en,Bad Genres,1.0
False,[],13,en,Forrest Gump,48.3
"#;

    const RATINGS: &str = "userId,movieId,rating,timestamp
1,155,4.0,1260759144
1,949,3.5,1260759179
2,155,five,1260759182
2,13,2.0,1260759185
3,129,5.0,1260759190
3,42,1.0,1260759191
";

    fn controller(language: Option<&str>) -> Result<MoviesMetadataController, Error> {
        MoviesMetadataController::from_readers(METADATA.as_bytes(), RATINGS.as_bytes(), language)
    }

    #[test]
    fn movies_are_filtered_by_language() -> Result<(), Error> {
        let controller = controller(Some("en"))?;
        let titles: Vec<_> = controller.movies()?.into_iter().map(|m| m.title).collect();

        assert_eq!(titles, vec!["The Dark Knight", "Heat", "Forrest Gump"]);

        Ok(())
    }

    #[test]
    fn movies_without_language_filter() -> Result<(), Error> {
        let controller = controller(None)?;
        assert_eq!(controller.movies()?.len(), 4);

        Ok(())
    }

    #[test]
    fn genres_are_parsed() -> Result<(), Error> {
        let controller = controller(Some("en"))?;
        let movie = &controller.movies_by(&SearchBy::title("The Dark Knight"))?[0];

        assert_eq!(movie.id, 155);
        assert_eq!(movie.genres, Genres::from_tags(vec!["Action", "Drama"]));

        let movie = &controller.movies_by(&SearchBy::id("13"))?[0];
        assert!(movie.genres.is_empty());

        Ok(())
    }

    #[test]
    fn missing_movie_is_an_error() -> Result<(), Error> {
        let controller = controller(Some("en"))?;
        assert!(controller.movies_by(&SearchBy::title("Alien")).is_err());

        Ok(())
    }

    #[test]
    fn malformed_ratings_are_dropped() -> Result<(), Error> {
        let controller = controller(Some("en"))?;
        assert_eq!(controller.ratings()?.len(), 5);

        Ok(())
    }

    #[test]
    fn titled_ratings_join_on_movie_id() -> Result<(), Error> {
        let controller = controller(Some("en"))?;
        let joined = controller.titled_ratings()?;

        assert_eq!(
            joined,
            vec![
                TitledRating::new(1, "The Dark Knight", 4.0),
                TitledRating::new(1, "Heat", 3.5),
                TitledRating::new(2, "Forrest Gump", 2.0),
            ]
        );

        Ok(())
    }

    #[test]
    fn missing_column_is_fatal() {
        let metadata = "id,original_title,genres\n1,Heat,[]\n";
        let result = read_movies(metadata.as_bytes(), None);

        assert!(result.is_err());
    }
}
