//! Birthday value object.

use super::errors::ValidationError;
use super::Field;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Text format of a birthday, as understood by `chrono`.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono accepts unpadded days and months, the regex does not
static BIRTHDAY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("birthday pattern is valid"));

/// A birthday written as `DD.MM.YYYY`.
///
/// The original text is kept for display and storage; the parsed calendar
/// date is available through [`Birthday::date`].
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let birthday = Birthday::new("15.12.2000").unwrap();
/// assert_eq!(birthday.date(), NaiveDate::from_ymd_opt(2000, 12, 15).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `DD.MM.YYYY` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the text is not zero-padded
    /// `DD.MM.YYYY` or does not name a real calendar date.
    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();

        if !BIRTHDAY_PATTERN.is_match(&text) {
            return Err(ValidationError::InvalidBirthday(text));
        }

        match NaiveDate::parse_from_str(&text, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { text, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(text)),
        }
    }

    /// The calendar date of birth.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Get the birthday as the text it was given in.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Field for Birthday {
    const KIND: &'static str = "birthday";

    fn parse(raw: &str) -> Result<Self, ValidationError> {
        Self::new(raw)
    }

    fn value(&self) -> &str {
        &self.text
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
