use crate::error::StorageResult;
use crate::models::AddressBook;

/// Durable storage for the address book.
///
/// Provides abstraction over where the book lives between runs,
/// enabling different implementations (JSON file, in-memory mock).
pub trait AddressBookStore {
    /// Read the stored address book.
    ///
    /// Returns an empty book when nothing has been stored yet.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored address book with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;
}
