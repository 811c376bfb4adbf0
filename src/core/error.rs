//! Error handling for the config prefixer.
//!
//! Every failure the tool can hit is fatal: the run aborts before anything is
//! written. [`CombineError`] names which stage failed and carries the path or
//! URL involved together with the underlying cause.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for prefixer operations
pub type Result<T> = std::result::Result<T, CombineError>;

/// Parse failure in one of the two supported document formats
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Main error type for the prefixer pipeline
#[derive(Debug, Error)]
pub enum CombineError {
    /// The combine-config file could not be opened or read
    #[error("Couldn't read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The combine-config file was read but could not be parsed
    #[error("Couldn't parse config file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: FormatError,
    },

    /// An API document could not be retrieved
    #[error("Couldn't fetch OpenAPI document from {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// An API document was retrieved but could not be parsed
    #[error("Couldn't parse OpenAPI document from {url}: {source}")]
    DocParse {
        url: String,
        #[source]
        source: FormatError,
    },

    /// The updated config could not be serialized
    #[error("Couldn't serialize combined config: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written
    #[error("Couldn't write combined config to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CombineError {
    pub fn fetch<U: Into<String>, R: std::fmt::Display>(url: U, reason: R) -> Self {
        Self::Fetch {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}
