//! Error types for the address book assistant.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field validation errors live in [`crate::domain::ValidationError`].

use crate::domain::ValidationError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving the address book.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The storage file exists but does not hold a valid address book
    #[error("Corrupt address book data in {}: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The address book could not be encoded
    #[error("Failed to encode address book: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Errors raised by a bot command before it can produce a reply.
///
/// The dispatcher turns these into advisory text, they never end a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments; carries the usage hint shown to the user
    #[error("{usage}")]
    ArgumentCount { usage: &'static str },

    /// A field value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Loading or saving the address book failed
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Reading commands or writing replies failed
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Convenience type alias for Results with StorageError
pub type StorageResult<T> = Result<T, StorageError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with SessionError
pub type SessionResult<T> = Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CommandError::ArgumentCount {
            usage: "Give me name and phone please.",
        };
        assert_eq!(err.to_string(), "Give me name and phone please.");

        let err = CommandError::from(ValidationError::EmptyName);
        assert_eq!(err.to_string(), "Name cannot be empty");

        let err = ConfigError::InvalidValue {
            var: "BIRTHDAY_WINDOW_DAYS".to_string(),
            reason: "Must be a number".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for BIRTHDAY_WINDOW_DAYS: Must be a number"
        );
    }

    #[test]
    fn test_corrupt_error_names_path() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = StorageError::Corrupt {
            path: PathBuf::from("book.json"),
            source,
        };
        assert!(err.to_string().starts_with("Corrupt address book data in book.json"));
    }

    #[test]
    fn test_session_error_wraps_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = SessionError::from(StorageError::from(io));
        assert!(err.to_string().contains("denied"));
    }
}
