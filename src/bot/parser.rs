//! Command line parsing.

/// A command the assistant understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    RemovePhone,
    Delete,
    Exit,
}

impl Command {
    /// Look up a command word, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        let command = match word.to_lowercase().as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove-phone" => Self::RemovePhone,
            "delete" => Self::Delete,
            "close" | "exit" => Self::Exit,
            _ => return None,
        };
        Some(command)
    }
}

/// A line split into its command word and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput<'a> {
    /// The command word, lowercased
    pub command: String,

    /// Whitespace-separated arguments, case preserved
    pub args: Vec<&'a str>,
}

/// Split a line on whitespace. `None` for a blank line.
pub fn parse_input(line: &str) -> Option<ParsedInput<'_>> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    Some(ParsedInput {
        command,
        args: words.collect(),
    })
}
