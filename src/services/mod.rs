//! Service layer.
//!
//! Queries over the address book that do not belong to a single record.

pub mod birthdays;

pub use birthdays::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
