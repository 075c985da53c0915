//! Address Book - a command-line assistant bot for personal contacts.
//!
//! This library stores names, phone numbers and birthdays, answers lookups,
//! reports upcoming birthdays and keeps the whole book in a JSON file between
//! runs.
//!
//! # Architecture
//!
//! - **domain**: Validated field types (name, phone, birthday)
//! - **models**: Contact records and the address book that owns them
//! - **services**: Upcoming birthday lookup
//! - **repositories**: Loading and saving the address book
//! - **bot**: Command parsing, dispatch and the interactive loop
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use bot::{run_session, Assistant, Reply};
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use models::{AddressBook, Record};
pub use repositories::{AddressBookStore, JsonFileStore, DEFAULT_STORAGE_PATH};
pub use services::{upcoming_birthdays, UpcomingBirthday, DEFAULT_WINDOW_DAYS};
