//! Text command parsing for the interactive shell.
//!
//! Commands are space-delimited; the first token is a numeric opcode.
//! Item creation reuses the media type codes from the load format.

use crate::error::{AppError, AppResult};
use crate::models::{ItemKind, MediaType};

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddItem { title: String, kind: ItemKind },
    DeleteItem { id: u32 },
    EditItem { id: u32, title: String },
    ViewAll,
    ViewItem { id: u32 },
    HotPicks,
    Borrow { item_id: u32, user_id: Option<u32> },
    Borrowers,
    Quit,
    Return { id: u32 },
}

fn bad_input(message: impl Into<String>) -> AppError {
    AppError::MalformedInput(message.into())
}

fn parse_id(token: &str, what: &str) -> AppResult<u32> {
    token
        .parse()
        .map_err(|_| bad_input(format!("{} must be a number, got {:?}", what, token)))
}

impl Command {
    /// Parse one input line into a command
    pub fn parse(input: &str) -> AppResult<Command> {
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let opcode = tokens
            .first()
            .ok_or_else(|| bad_input("empty command"))?;
        let opcode: u32 = opcode
            .parse()
            .map_err(|_| bad_input("please enter a valid option"))?;

        match opcode {
            1 => Self::parse_add(&tokens),
            2 => match tokens[..] {
                [_, id] => Ok(Command::DeleteItem {
                    id: parse_id(id, "item id")?,
                }),
                _ => Err(bad_input("Format: 2 <item id>")),
            },
            3 => {
                if tokens.len() < 3 {
                    return Err(bad_input("Format: 3 <item id> <new title>"));
                }
                Ok(Command::EditItem {
                    id: parse_id(tokens[1], "item id")?,
                    title: tokens[2..].join(" "),
                })
            }
            4 => Ok(Command::ViewAll),
            5 => match tokens[..] {
                [_, id] => Ok(Command::ViewItem {
                    id: parse_id(id, "item id")?,
                }),
                _ => Err(bad_input("Format: 5 <item id>")),
            },
            6 => Ok(Command::HotPicks),
            7 => match tokens[..] {
                [_, item_id] => Ok(Command::Borrow {
                    item_id: parse_id(item_id, "item id")?,
                    user_id: None,
                }),
                [_, item_id, user_id] => Ok(Command::Borrow {
                    item_id: parse_id(item_id, "item id")?,
                    user_id: Some(parse_id(user_id, "user id")?),
                }),
                _ => Err(bad_input("Format: 7 <item id> [user id]")),
            },
            8 => Ok(Command::Borrowers),
            9 => Ok(Command::Quit),
            10 => match tokens[..] {
                [_, id] => Ok(Command::Return {
                    id: parse_id(id, "item id")?,
                }),
                _ => Err(bad_input("Format: 10 <item id>")),
            },
            other => Err(bad_input(format!(
                "unknown option {}, please enter a valid option",
                other
            ))),
        }
    }

    /// `1 <type> <title> <info...>` where the info format depends on type
    fn parse_add(tokens: &[&str]) -> AppResult<Command> {
        if tokens.len() < 4 {
            return Err(bad_input("Format: 1 <type> <title> <info...>"));
        }
        let code: u8 = tokens[1]
            .parse()
            .map_err(|_| bad_input(format!("item type must be a number, got {:?}", tokens[1])))?;
        let media =
            MediaType::try_from(code).map_err(|c| bad_input(format!("unknown item type {}", c)))?;
        let title = tokens[2].to_string();
        let info = tokens[3..].join(" ");

        let kind = match media {
            MediaType::Book => {
                let fields: Vec<&str> = info.split_whitespace().collect();
                match fields[..] {
                    [author, year] => ItemKind::Book {
                        author: author.to_string(),
                        year: year
                            .parse()
                            .map_err(|_| bad_input(format!("invalid year {:?}", year)))?,
                    },
                    _ => return Err(bad_input("book info must be: <author> <year>")),
                }
            }
            MediaType::Magazine => {
                let fields: Vec<&str> = info.splitn(2, ';').collect();
                match fields[..] {
                    [publisher, authors] if !authors.trim().is_empty() => ItemKind::Magazine {
                        publisher: publisher.to_string(),
                        authors: authors.split(',').map(str::to_string).collect(),
                    },
                    _ => {
                        return Err(bad_input(
                            "magazine info must be: <publisher>;<author1,author2,...>",
                        ))
                    }
                }
            }
            MediaType::Newspaper => {
                let fields: Vec<&str> = info.splitn(2, ';').collect();
                match fields[..] {
                    [publisher, date] if !date.trim().is_empty() => ItemKind::Newspaper {
                        publisher: publisher.to_string(),
                        publication_date: date.to_string(),
                    },
                    _ => return Err(bad_input("newspaper info must be: <publisher>;<date>")),
                }
            }
        };

        Ok(Command::AddItem { title, kind })
    }
}
