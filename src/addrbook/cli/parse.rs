//! Turns one input line into a [`Command`].
//!
//! The command word is case-insensitive; arguments are kept as typed.
//! Arguments are whitespace separated, so names are single words.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, phone: String },
    Phone { name: String },
    ShowAll,
    Search { query: String },
    Page { size: Option<usize> },
    Delete { name: String },
    AddPhone { name: String, phone: String },
    RemovePhone { name: String, phone: String },
    EditPhone { name: String, old: String, new: String },
    Birthday { name: String, date: String },
    ClearBirthday { name: String },
    Birthdays { days: Option<u32> },
    Help,
    Exit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid command!")]
    InvalidCommand,

    #[error("Invalid input!")]
    InvalidInput,
}

/// `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<Command>, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((first, args)) = tokens.split_first() else {
        return Ok(None);
    };
    let word = first.to_lowercase();

    let command = match (word.as_str(), args) {
        ("hello", []) => Command::Hello,
        ("help", []) => Command::Help,
        ("exit" | "close", []) => Command::Exit,
        ("good", [bye]) if bye.eq_ignore_ascii_case("bye") => Command::Exit,
        ("show", [all]) if all.eq_ignore_ascii_case("all") => Command::ShowAll,
        ("add", [name, phone]) => Command::Add {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("change", [name, phone]) => Command::Change {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("phone", [name]) => Command::Phone {
            name: name.to_string(),
        },
        ("search", query) => Command::Search {
            query: query.join(" "),
        },
        ("page", []) => Command::Page { size: None },
        ("page", [size]) => Command::Page {
            size: Some(size.parse().map_err(|_| ParseError::InvalidInput)?),
        },
        ("delete", [name]) => Command::Delete {
            name: name.to_string(),
        },
        ("add-phone", [name, phone]) => Command::AddPhone {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("remove-phone", [name, phone]) => Command::RemovePhone {
            name: name.to_string(),
            phone: phone.to_string(),
        },
        ("edit-phone", [name, old, new]) => Command::EditPhone {
            name: name.to_string(),
            old: old.to_string(),
            new: new.to_string(),
        },
        ("birthday", [name, clear]) if clear.eq_ignore_ascii_case("clear") => {
            Command::ClearBirthday {
                name: name.to_string(),
            }
        }
        ("birthday", [name, date]) => Command::Birthday {
            name: name.to_string(),
            date: date.to_string(),
        },
        ("birthdays", []) => Command::Birthdays { days: None },
        ("birthdays", [days]) => Command::Birthdays {
            days: Some(days.parse().map_err(|_| ParseError::InvalidInput)?),
        },
        _ => return Err(ParseError::InvalidCommand),
    };
    Ok(Some(command))
}
