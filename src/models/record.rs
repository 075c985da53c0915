//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{parse_field, Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// The name is fixed at creation and doubles as the record's key in the
/// [`AddressBook`](super::AddressBook). Phones keep insertion order and may
/// repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    name: Name,

    #[serde(default)]
    phones: Vec<Phone>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            name: parse_field::<Name>(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` for anything but ten digits.
    pub fn add_phone(&mut self, phone: &str) -> Result<(), ValidationError> {
        let phone = parse_field::<Phone>(phone)?;
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove every entry equal to `phone`, returning how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != phone);
        let removed = before - self.phones.len();
        debug!(name = %self.name, phone, removed, "Removed phone");
        removed
    }

    /// Replace the first entry equal to `old` with `new`.
    ///
    /// Does nothing when `old` is not on the record, whatever `new` holds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `old` is present and `new`
    /// is not ten digits. The phone list is left untouched in that case.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old) else {
            return Ok(());
        };
        *slot = parse_field::<Phone>(new)?;
        debug!(name = %self.name, old, new, "Edited phone");
        Ok(())
    }

    /// First phone entry equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    /// Validate and set the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` unless `date` is `DD.MM.YYYY`.
    pub fn add_birthday(&mut self, date: &str) -> Result<(), ValidationError> {
        let birthday = parse_field::<Birthday>(date)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `"; "`.
    pub fn phones_display(&self) -> String {
        self.phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_display(),
            self.birthday
                .as_ref()
                .map_or("None", Birthday::as_str)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn phone_list(record: &Record) -> Vec<&str> {
        record.phones().iter().map(Phone::as_str).collect()
    }

    #[test]
    fn test_record_new() {
        let record = Record::new("Alice").unwrap();
        assert_eq!(record.name().as_str(), "Alice");
        assert!(record.phones().is_empty());
        assert!(record.birthday().is_none());
    }

    #[test]
    fn test_record_new_rejects_blank_name() {
        assert_eq!(Record::new("  "), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_add_phone_keeps_duplicates_in_order() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("0987654321").unwrap();
        record.add_phone("1234567890").unwrap();

        assert_eq!(
            phone_list(&record),
            ["1234567890", "0987654321", "1234567890"]
        );

        let found = record.find_phone("1234567890").unwrap();
        assert!(std::ptr::eq(found, &record.phones()[0]));
        assert!(!std::ptr::eq(found, &record.phones()[2]));
    }

    #[test]
    fn test_add_phone_rejects_malformed() {
        let mut record = Record::new("Alice").unwrap();
        let err = record.add_phone("12345").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("12345".to_string()));
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_remove_phone_removes_all_matches() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(record.remove_phone("1111111111"), 2);
        assert_eq!(phone_list(&record), ["2222222222"]);
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        assert_eq!(record.remove_phone("9999999999"), 0);
        assert_eq!(phone_list(&record), ["1111111111"]);
    }

    #[test]
    fn test_edit_phone_replaces_first_match_only() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();

        record.edit_phone("1111111111", "3333333333").unwrap();
        assert_eq!(phone_list(&record), ["3333333333", "1111111111"]);
    }

    #[test]
    fn test_edit_phone_missing_old_is_noop() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        assert!(record.edit_phone("000", "111").is_ok());
        assert_eq!(phone_list(&record), ["1111111111"]);
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_list_intact() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();

        let err = record.edit_phone("1111111111", "abc").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("abc".to_string()));
        assert_eq!(phone_list(&record), ["1111111111"]);
    }

    #[test]
    fn test_find_phone_absent() {
        let record = Record::new("Alice").unwrap();
        assert!(record.find_phone("1234567890").is_none());
    }

    #[test]
    fn test_add_birthday_overwrites() {
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("01.01.2000").unwrap();
        record.add_birthday("02.02.2002").unwrap();
        assert_eq!(record.birthday().unwrap().as_str(), "02.02.2002");
    }

    #[test]
    fn test_add_birthday_invalid_keeps_previous() {
        let mut record = Record::new("Alice").unwrap();
        record.add_birthday("01.01.2000").unwrap();
        assert!(record.add_birthday("2000-01-01").is_err());
        assert_eq!(record.birthday().unwrap().as_str(), "01.01.2000");
    }

    #[test]
    fn test_display() {
        let mut record = Record::new("Alice").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: , birthday: None"
        );

        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record.add_birthday("15.12.2000").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Alice, phones: 1234567890; 5555555555, birthday: 15.12.2000"
        );
    }

    #[test]
    fn test_serialization_shape() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1234567890").unwrap();

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Alice", "phones": ["1234567890"] })
        );
    }

    #[test]
    fn test_deserialization_validates_fields() {
        let bad_phone = r#"{ "name": "Alice", "phones": ["12"] }"#;
        assert!(serde_json::from_str::<Record>(bad_phone).is_err());

        let bad_birthday = r#"{ "name": "Alice", "birthday": "1.1.2000" }"#;
        assert!(serde_json::from_str::<Record>(bad_birthday).is_err());

        let minimal: Record = serde_json::from_str(r#"{ "name": "Alice" }"#).unwrap();
        assert_eq!(minimal, Record::new("Alice").unwrap());
    }
}
