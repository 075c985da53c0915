//! Data models for the address book.
//!
//! A [`Record`] aggregates one person's validated fields; the [`AddressBook`]
//! owns every record under its name.

pub mod address_book;
pub mod record;

pub use address_book::AddressBook;
pub use record::Record;
