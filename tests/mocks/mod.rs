mod mock_address_book_store;

#[allow(unused_imports)]
pub use mock_address_book_store::{BrokenPipe, MockAddressBookStore};
