mod json_file_store;
mod traits;

pub use json_file_store::{JsonFileStore, DEFAULT_STORAGE_PATH};
pub use traits::AddressBookStore;
