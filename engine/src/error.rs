use controller::UserId;
use thiserror::Error as DError;

#[derive(Debug, Clone, PartialEq, DError)]
pub enum ErrorKind {
    #[error("Couldn't found movie with title({0})")]
    MovieNotFound(String),

    #[error("Movie with title({0}) has no ratings column")]
    NotInMatrix(String),

    #[error("Rating of user({user}) for '{title}' is not a number ({score})")]
    InvalidRating {
        user: UserId,
        title: String,
        score: f64,
    },

    #[error("User({user}) already rated '{title}'")]
    DuplicateRating { user: UserId, title: String },

    #[error("Asked for zero recommendations")]
    ZeroResults,

    #[error("Genre weight must be a positive number, got {0}")]
    InvalidWeight(f64),
}

impl ErrorKind {
    /// The requested title couldn't be resolved
    pub fn is_lookup(&self) -> bool {
        matches!(self, ErrorKind::MovieNotFound(_) | ErrorKind::NotInMatrix(_))
    }

    /// A rating row was rejected while building the matrix
    pub fn is_data(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidRating { .. } | ErrorKind::DuplicateRating { .. }
        )
    }
}
