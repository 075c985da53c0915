use address_book::error::{StorageError, StorageResult};
use address_book::models::AddressBook;
use address_book::repositories::AddressBookStore;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock address book store for testing.
///
/// Keeps the "stored" book in memory, can be told to fail, and tracks
/// method calls for verification.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockAddressBookStore {
    stored: Arc<Mutex<Option<AddressBook>>>,
    fail_load: Arc<Mutex<bool>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockAddressBookStore {
    /// Create a store with nothing saved yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = Some(book);
        store
    }

    /// Make every following `load` report corrupt data.
    pub fn fail_loads(&self) {
        *self.fail_load.lock().unwrap() = true;
    }

    /// The book as last saved, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl AddressBookStore for MockAddressBookStore {
    fn load(&self) -> StorageResult<AddressBook> {
        self.track_call("load");

        if *self.fail_load.lock().unwrap() {
            let source = serde_json::from_str::<AddressBook>("not json").unwrap_err();
            return Err(StorageError::Corrupt {
                path: "mock".into(),
                source,
            });
        }

        Ok(self.stored().unwrap_or_default())
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        self.track_call("save");
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }
}

/// An output that refuses every write, for terminal failure tests.
#[allow(dead_code)]
pub struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
