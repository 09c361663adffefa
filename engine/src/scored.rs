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
use std::cmp::Ordering;

/// A movie scored against the query movie.
///
/// Candidates are ordered by score and, on equal scores, the title that comes
/// first alphabetically is the greater one. Sorting in descending order gives
/// the ranking. The unrounded score is compared, so two rows showing the same
/// `display_score` may still be ordered by score rather than by title.
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub title: String,
    pub score: f64,
    pub genres: Genres,
}

impl ScoredCandidate {
    pub fn new(title: &str, score: f64, genres: Genres) -> Self {
        Self {
            title: title.into(),
            score,
            genres,
        }
    }

    /// Score rounded to two decimal places
    pub fn rounded_score(&self) -> f64 {
        (self.score * 100.0).round() / 100.0
    }

    pub fn display_score(&self) -> String {
        format!("{:.2}", self.score)
    }
}

impl PartialEq for ScoredCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScoredCandidate {}

impl PartialOrd for ScoredCandidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScoredCandidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // Scores are finite, never NaN
        self.score
            .partial_cmp(&other.score)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.title.cmp(&self.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_scored_candidates() {
        let a = ScoredCandidate::new("Heat", 0.5, Genres::default());
        let b = ScoredCandidate::new("Heat", 0.7, Genres::default());

        assert!(b > a);
        assert_ne!(a, b);

        let b = a.clone();

        assert_eq!(a, b);
        assert!(!(a > b));
    }

    #[test]
    fn ties_prefer_alphabetical_order() {
        let alien = ScoredCandidate::new("Alien", 0.5, Genres::default());
        let heat = ScoredCandidate::new("Heat", 0.5, Genres::default());

        assert!(alien > heat);

        let mut ranked = vec![heat.clone(), alien.clone()];
        ranked.sort_by(|a, b| b.cmp(a));
        assert_eq!(ranked, vec![alien, heat]);
    }

    #[test]
    fn ranking_uses_unrounded_score() {
        let zulu = ScoredCandidate::new("Zulu", 0.754, Genres::default());
        let alpha = ScoredCandidate::new("Alpha", 0.751, Genres::default());

        assert_eq!(zulu.display_score(), alpha.display_score());
        assert!(zulu > alpha);
    }

    #[test]
    fn score_formatting() {
        let candidate = ScoredCandidate::new("Heat", 0.754_653, Genres::default());

        assert_eq!(candidate.display_score(), "0.75");
        assert_eq!(candidate.rounded_score(), 0.75);

        let candidate = ScoredCandidate::new("Heat", -1.0, Genres::default());
        assert_eq!(candidate.display_score(), "-1.00");
    }
}
