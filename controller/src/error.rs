// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, DError)]
pub enum ErrorKind {
    #[error("Couldn't found movie with id({0})")]
    NotFoundById(String),

    #[error("Couldn't found movie with title({0})")]
    NotFoundByTitle(String),

    #[error("Couldn't found movie with {0}({1})")]
    NotFoundByCustom(String, String),

    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("Couldn't parse {0} from '{1}'")]
    InvalidNumber(&'static str, String),

    #[error("Malformed genres literal '{0}'")]
    InvalidGenres(String),
}
