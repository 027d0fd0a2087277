//! Error types for Boardsweep

use thiserror::Error;

/// Result type alias using Boardsweep's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Boardsweep error types with helpful messages
#[derive(Error, Debug)]
pub enum Error {
    // Input errors (E001-E099)
    #[error("Search text is empty. Enter something to find.")]
    EmptySearch,

    #[error("Invalid search pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    // Platform errors (E100-E199)
    #[error("Board platform error: {0}")]
    Platform(String),

    #[error("Failed to persist item '{item_id}': {message}")]
    Persistence { item_id: String, message: String },
}

impl Error {
    /// Get error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySearch => "E001",
            Self::InvalidPattern(_) => "E002",
            Self::Platform(_) => "E100",
            Self::Persistence { .. } => "E101",
        }
    }

    /// Whether the error occurred before any board item was modified
    pub fn is_pre_flight(&self) -> bool {
        matches!(self, Self::EmptySearch | Self::InvalidPattern(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(Error::EmptySearch.code(), "E001");
        assert_eq!(Error::Platform("offline".into()).code(), "E100");
    }

    #[test]
    fn test_pattern_error_conversion() {
        let err = regex::Regex::new("(unclosed").unwrap_err();
        let err: Error = err.into();
        assert_eq!(err.code(), "E002");
        assert!(err.is_pre_flight());
    }

    #[test]
    fn test_persistence_message_names_item() {
        let err = Error::Persistence {
            item_id: "item-3".into(),
            message: "board is read-only".into(),
        };
        assert!(err.to_string().contains("item-3"));
        assert!(!err.is_pre_flight());
    }
}
