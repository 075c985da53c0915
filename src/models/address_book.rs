//! The address book: contact records keyed by name.

use super::record::Record;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Insertion-ordered collection of [`Record`]s keyed by name.
///
/// Lookups are a linear scan; an address book holds a person's contacts, not
/// a directory service. The key of every entry is its record's name, which
/// cannot change, so a rename is a `delete` followed by `add_record`.
///
/// Serializes as a JSON array of records in book order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Record>", into = "Vec<Record>")]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` under its name.
    ///
    /// A record already stored under that name is replaced in place, keeping
    /// its position, and handed back.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        match self.position(record.name().as_str()) {
            Some(index) => {
                debug!(name = %record.name(), "Replacing existing record");
                Some(std::mem::replace(&mut self.records[index], record))
            }
            None => {
                debug!(name = %record.name(), "Adding record");
                self.records.push(record);
                None
            }
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name().as_str() == name)
    }

    /// Exact-name lookup for editing phones or the birthday.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| r.name().as_str() == name)
    }

    /// Remove the record stored under `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        let index = self.position(name)?;
        debug!(name, "Deleting record");
        Some(self.records.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name().as_str() == name)
    }
}

impl From<Vec<Record>> for AddressBook {
    // Later duplicates overwrite earlier ones, same as repeated add_record calls
    fn from(records: Vec<Record>) -> Self {
        let mut book = AddressBook::new();
        for record in records {
            book.add_record(record);
        }
        book
    }
}

impl From<AddressBook> for Vec<Record> {
    fn from(book: AddressBook) -> Self {
        book.records
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        iter.into_iter().collect::<Vec<_>>().into()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
