//! Interactive assistant bot.
//!
//! Reads commands line by line, dispatches them to the [`handlers`] and
//! writes one reply per command. The address book is loaded from an
//! [`AddressBookStore`] before the first prompt and saved back once the user
//! leaves with `close`/`exit` or input runs out.

pub mod handlers;
pub mod parser;

pub use parser::{parse_input, Command, ParsedInput};

use crate::error::SessionResult;
use crate::models::AddressBook;
use crate::repositories::AddressBookStore;
use crate::services::DEFAULT_WINDOW_DAYS;
use chrono::{Local, NaiveDate};
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const FAREWELL: &str = "Good bye!";

/// What the assistant does after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Show the text and keep going
    Continue(String),

    /// Show the text and end the session
    Exit(String),

    /// Nothing to show (blank line)
    Silent,
}

/// The command dispatcher, owning the address book for one session.
#[derive(Debug, Clone)]
pub struct Assistant {
    book: AddressBook,
    window_days: u32,
}

impl Assistant {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Change how many days ahead `birthdays` looks.
    pub fn with_window_days(mut self, window_days: u32) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn into_book(self) -> AddressBook {
        self.book
    }

    /// Handle one line of input, using `today` for birthday lookups.
    pub fn handle(&mut self, line: &str, today: NaiveDate) -> Reply {
        use handlers::*;

        let Some(ParsedInput { command, args }) = parse_input(line) else {
            return Reply::Silent;
        };
        debug!(%command, args = args.len(), "Dispatching command");

        let Some(command) = Command::from_word(&command) else {
            return Reply::Continue("Invalid command.".to_string());
        };

        let book = &mut self.book;
        let text = match command {
            Command::Hello => "How can I help you?".to_string(),
            Command::Add => respond(|| add_contact(&args, book)),
            Command::Change => respond(|| change_contact(&args, book)),
            Command::Phone => respond(|| show_phone(&args, book)),
            Command::All => show_all(book),
            Command::AddBirthday => respond(|| add_birthday(&args, book)),
            Command::ShowBirthday => respond(|| show_birthday(&args, book)),
            Command::Birthdays => birthdays(book, today, self.window_days),
            Command::RemovePhone => respond(|| remove_phone(&args, book)),
            Command::Delete => respond(|| delete_contact(&args, book)),
            Command::Exit => return Reply::Exit(FAREWELL.to_string()),
        };
        Reply::Continue(text)
    }

    /// Prompt, read and reply until `close`/`exit` or end of input.
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> SessionResult<()>
    where
        R: BufRead,
        W: Write,
    {
        writeln!(output, "{GREETING}")?;

        let mut lines = input.lines();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            let Some(line) = lines.next() else {
                info!("Input closed, ending session");
                writeln!(output)?;
                writeln!(output, "{FAREWELL}")?;
                break;
            };

            match self.handle(&line?, Local::now().date_naive()) {
                Reply::Continue(text) => writeln!(output, "{text}")?,
                Reply::Exit(text) => {
                    writeln!(output, "{text}")?;
                    break;
                }
                Reply::Silent => {}
            }
        }

        output.flush()?;
        Ok(())
    }
}

/// Load the book from `store`, run the assistant over `input`, save the book.
///
/// The book is saved only when the loop ends normally; a terminal error
/// leaves the stored book as it was.
pub fn run_session<S, R, W>(store: &S, window_days: u32, input: R, output: W) -> SessionResult<()>
where
    S: AddressBookStore + ?Sized,
    R: BufRead,
    W: Write,
{
    let book = store.load()?;
    let mut assistant = Assistant::new(book).with_window_days(window_days);

    assistant.run(input, output)?;

    store.save(assistant.book())?;
    Ok(())
}
