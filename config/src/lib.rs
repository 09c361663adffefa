use anyhow::Error;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    pub genre_weight: f64,
    pub use_genre: bool,
    pub top_n: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            genre_weight: 0.1,
            use_genre: true,
            top_n: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    pub metadata_path: PathBuf,
    pub ratings_path: PathBuf,
    /// Keep only movies in this original language, all of them if unset
    pub language: Option<String>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            metadata_path: "data/movies_metadata.csv".into(),
            ratings_path: "data/ratings_small.csv".into(),
            language: Some("en".into()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub engine: EngineConfig,
    pub data: DataConfig,
}

impl Config {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        let parsed: Self = toml::from_str(contents)?;
        Ok(parsed)
    }
}
