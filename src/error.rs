//! Error types for loading datasets and configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a country dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The dataset file could not be read.
    #[error("failed to read dataset {path}: {source}")]
    Io {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON or does not match the expected shape.
    #[error("invalid dataset document: {0}")]
    Json(#[from] serde_json::Error),
    /// Neither a `geojson` collection nor top-level `features` were found.
    #[error("dataset document has no feature collection")]
    MissingFeatures,
    /// A feature carries no `ISO_A3` country code.
    #[error("feature {index} has no ISO_A3 country code")]
    MissingCode {
        /// Position of the feature in the collection.
        index: usize,
    },
}

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid TOML.
    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),
    /// The configuration parsed but holds unusable values.
    #[error("invalid config value: {0}")]
    Invalid(String),
}
