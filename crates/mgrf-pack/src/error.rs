//! Pack-specific error types.
//!
//! Structured errors for catalog loading, synthesis, and bulk replacement.
//! Errors carry the file path or element index they refer to so a rejected
//! dataset can be fixed without guesswork.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error)]
pub enum PackError {
    /// YAML parsing failed.
    #[error("failed to parse YAML at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing failed.
    #[error("failed to parse JSON at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A required file was not found.
    #[error("required file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension does not name a supported dataset format.
    #[error("unsupported dataset format for {path}: expected .json, .yaml or .yml")]
    UnsupportedFormat { path: PathBuf },

    /// A replacement payload was not a list of route records.
    #[error("route dataset must be a list, found {found}")]
    NotAList { found: &'static str },

    /// One or more route records failed structural validation.
    #[error("invalid route catalog ({} defect(s)): {}", .errors.len(), .errors.join("; "))]
    InvalidCatalog { errors: Vec<String> },

    /// A synthesis pass has no qualification for a (specialty, origin) pair.
    #[error("synthesis pass `{pass}` has no qualification for specialty {specialty:?} from {origin:?}")]
    MissingQualification {
        pass: &'static str,
        specialty: String,
        origin: String,
    },

    /// A synthesis pass has no step template for a destination.
    #[error("synthesis pass `{pass}` has no step template for destination {destination:?}")]
    MissingTemplate {
        pass: &'static str,
        destination: String,
    },

    /// Route ids ran past `u32::MAX`.
    #[error("route id space exhausted")]
    IdSpaceExhausted,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic serde_json error (not file-specific).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic serde_yaml error (not file-specific).
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for pack operations.
pub type PackResult<T> = Result<T, PackError>;
