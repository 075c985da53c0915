//! Name value object.

use super::errors::ValidationError;
use super::Field;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A contact's name, which is also its key in the address book.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("  Alice ").unwrap();
/// assert_eq!(name.as_str(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    /// Create a new Name, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if nothing is left after trimming.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Field for Name {
    const KIND: &'static str = "name";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn value(&self) -> &str {
        &self.0
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
