use thiserror::Error;

/// Custom error types for stocknews
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StockNewsError {
    #[error("Invalid config at {path}: {message}")]
    Config { path: String, message: String },

    #[error("Invalid easing factor {0}: must be greater than 0 and at most 1")]
    InvalidEasing(f32),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for StockNewsError {
    fn from(err: std::io::Error) -> Self {
        StockNewsError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
