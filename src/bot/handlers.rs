//! Command handlers.
//!
//! Each handler validates its arguments, runs one address book operation and
//! returns the reply text. Handlers report bad input as [`CommandError`];
//! [`respond`] turns that into advice for the user.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::services::upcoming_birthdays;
use chrono::NaiveDate;
use tracing::debug;

const ADD_USAGE: &str = "Give me name and phone please.";
const CHANGE_USAGE: &str = "Give me name, old phone and new phone please.";
const NAME_USAGE: &str = "Give me a name please.";
const BIRTHDAY_USAGE: &str = "Give me name and birthday (DD.MM.YYYY) please.";
const REMOVE_PHONE_USAGE: &str = "Give me name and phone to remove please.";

const NOT_FOUND: &str = "Contact not found.";
const PHONE_NOT_FOUND: &str = "Phone not found.";

/// Run a handler and always come back with text to show.
///
/// Argument-count mistakes become the command's usage hint and validation
/// failures become the validation message. Both leave the book as it was
/// before the failing step.
pub fn respond<F>(handler: F) -> String
where
    F: FnOnce() -> CommandResult<String>,
{
    handler().unwrap_or_else(|err| {
        debug!(error = %err, "Command rejected");
        match err {
            CommandError::ArgumentCount { usage } => usage.to_string(),
            CommandError::Validation(e) => e.to_string(),
        }
    })
}

fn expect_args<'a, const N: usize>(
    args: &[&'a str],
    usage: &'static str,
) -> CommandResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| CommandError::ArgumentCount { usage })
}

/// `add <name> <phone>`
pub fn add_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>(args, ADD_USAGE)?;

    if book.contains(name) {
        return Ok("Contact already exists.".to_string());
    }

    let mut record = Record::new(name)?;
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, old, new] = expect_args::<3>(args, CHANGE_USAGE)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(NOT_FOUND.to_string());
    };
    if record.find_phone(old).is_none() {
        return Ok(PHONE_NOT_FOUND.to_string());
    }

    record.edit_phone(old, new)?;
    Ok("Contact updated.".to_string())
}

/// `phone <name>`
pub fn show_phone(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args, NAME_USAGE)?;

    Ok(match book.find(name) {
        Some(record) => format!("Phone: {}", record.phones_display()),
        None => NOT_FOUND.to_string(),
    })
}

/// `all`
pub fn show_all(book: &AddressBook) -> String {
    if book.is_empty() {
        return "No contacts in the address book.".to_string();
    }
    book.iter()
        .map(Record::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, date] = expect_args::<2>(args, BIRTHDAY_USAGE)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(NOT_FOUND.to_string());
    };
    record.add_birthday(date)?;
    Ok("Birthday added.".to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[&str], book: &AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args, NAME_USAGE)?;

    Ok(match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => format!("Birthday: {birthday}"),
            None => "Birthday not set.".to_string(),
        },
        None => NOT_FOUND.to_string(),
    })
}

/// `birthdays`
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u32) -> String {
    let upcoming = upcoming_birthdays(book, today, window_days);
    if upcoming.is_empty() {
        return "No upcoming birthdays.".to_string();
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    lines.extend(upcoming.iter().map(ToString::to_string));
    lines.join("\n")
}

/// `remove-phone <name> <phone>`
pub fn remove_phone(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name, phone] = expect_args::<2>(args, REMOVE_PHONE_USAGE)?;

    let Some(record) = book.find_mut(name) else {
        return Ok(NOT_FOUND.to_string());
    };
    Ok(match record.remove_phone(phone) {
        0 => PHONE_NOT_FOUND.to_string(),
        _ => "Phone removed.".to_string(),
    })
}

/// `delete <name>`
pub fn delete_contact(args: &[&str], book: &mut AddressBook) -> CommandResult<String> {
    let [name] = expect_args::<1>(args, NAME_USAGE)?;

    Ok(match book.delete(name) {
        Some(_) => "Contact deleted.".to_string(),
        None => NOT_FOUND.to_string(),
    })
}
