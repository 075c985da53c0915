//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during field validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is empty or whitespace only.
    #[error("Name cannot be empty")]
    EmptyName,

    /// The provided phone number is not exactly ten digits.
    #[error("Invalid phone number: {0}. Phone must be exactly 10 digits")]
    InvalidPhone(String),

    /// The provided birthday is not a real `DD.MM.YYYY` date.
    #[error("Invalid date format: {0}. Use DD.MM.YYYY")]
    InvalidBirthday(String),
}
