use std::path::PathBuf;
use thiserror::Error;

/// Raised when the ownership rule source cannot be turned into a rule set.
/// Without rules no file can be resolved, so callers abort the run.
#[derive(Error, Debug)]
pub enum CompilationError {
    #[error("failed to read ownership rules '{path}': {source}")]
    RulesFileReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid ownership pattern '{pattern}' on line {line}: {message}")]
    InvalidPattern {
        pattern: String,
        line: usize,
        message: String,
    },
}

impl CompilationError {
    pub fn rules_file_read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RulesFileReadError {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_pattern(
        pattern: impl Into<String>,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            line,
            message: message.into(),
        }
    }
}
