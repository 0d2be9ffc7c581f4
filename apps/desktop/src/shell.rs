//! Line commands for the interactive directory shell.

use client_core::DirectoryEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Event(DirectoryEvent),
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),
    #[error("'open' needs a card number, e.g. 'open 3'")]
    MissingIndex,
    #[error("'{0}' is not a card number")]
    BadIndex(String),
}

pub const HELP: &str = "\
commands:
  list              show the gallery
  search [QUERY]    filter by first or last name; no query shows everyone
  open N            show card N (as numbered by 'list') in detail
  next | prev       step through the detail view
  close             close the detail view
  quit              leave";

pub fn parse_command(line: &str) -> Result<ShellCommand, ShellError> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    let command = match verb.to_ascii_lowercase().as_str() {
        "" | "list" | "ls" => ShellCommand::List,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        "search" | "/" => ShellCommand::Event(DirectoryEvent::SearchSubmitted(rest.to_string())),
        "open" => {
            if rest.is_empty() {
                return Err(ShellError::MissingIndex);
            }
            let index = rest
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .ok_or_else(|| ShellError::BadIndex(rest.to_string()))?;
            ShellCommand::Event(DirectoryEvent::CardClicked(index))
        }
        "next" | "n" => ShellCommand::Event(DirectoryEvent::Next),
        "prev" | "p" => ShellCommand::Event(DirectoryEvent::Prev),
        "close" | "c" => ShellCommand::Event(DirectoryEvent::Close),
        other => return Err(ShellError::Unknown(other.to_string())),
    };
    Ok(command)
}
