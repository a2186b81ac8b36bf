//! Unified Error Type System
//!
//! Single error enum for the whole application, with structured variants
//! carrying enough context to name the offending file or destination.
//!
//! Per-file parse and read failures are recovered by the aggregator and never
//! abort a run; everything else propagates up and terminates it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StructError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed source text. Recovered per file by the aggregator.
    #[error("Syntax error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Config error: {0}")]
    Config(String),

    /// Output destination could not be written. Fatal for the run.
    #[error("Failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StructError {
    /// Check whether this error is recovered locally (run continues)
    pub fn is_per_file(&self) -> bool {
        matches!(self, Self::Parse { .. })
    }
}

pub type Result<T> = std::result::Result<T, StructError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = StructError::Parse {
            path: "pkg/broken.py".to_string(),
            message: "invalid syntax at line 3, column 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Syntax error in pkg/broken.py: invalid syntax at line 3, column 1"
        );
        assert!(err.is_per_file());
    }

    #[test]
    fn test_output_error_is_fatal() {
        let err = StructError::Output {
            path: "structure.dot".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(!err.is_per_file());
        assert!(err.to_string().contains("structure.dot"));
    }
}
