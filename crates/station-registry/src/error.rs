//! Error types for the station registry.
//!
//! Decode failures are split into syntax (`Parse`) and strict-field-matching
//! (`Schema`) classes so callers can tell a half-written file from a foreign
//! one. Every variant carries the offending path.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Record file content is not syntactically valid JSON.
    #[error("Malformed record file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Syntactically valid JSON that fails strict field matching: a required
    /// field is missing, an unknown field is present, or a value has the
    /// wrong shape.
    #[error("Record file {path:?} does not match the station schema: {source}")]
    Schema {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure reading, writing, or listing.
    #[error("IO error at {path:?}: {message}")]
    Io {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl RegistryError {
    /// Create an IO error with path context.
    pub fn io_with_path(err: std::io::Error, path: impl Into<PathBuf>) -> Self {
        RegistryError::Io {
            message: err.to_string(),
            path: path.into(),
            source: err,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_io_error_display_names_path() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = RegistryError::io_with_path(io, Path::new("/var/run/stations/station-a"));
        assert!(err.to_string().contains("station-a"));
    }

    #[test]
    fn test_parse_error_display_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let err = RegistryError::Parse {
            path: PathBuf::from("/tmp/bad-record"),
            source,
        };
        assert!(err.to_string().contains("bad-record"));
    }
}
