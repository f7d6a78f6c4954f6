//! Interactive shell
//!
//! Maps text commands onto catalog store operations and renders the
//! structured results as display lines. The shell owns all rendering;
//! the store never writes output itself.

pub mod commands;

pub use commands::Command;

use std::io::{BufRead, Write};

use crate::catalog::Catalog;

/// Result of handling one input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Display lines to show the user; may be empty
    Continue(Vec<String>),
    /// The session was terminated
    Quit,
}

/// The interaction shell driving a catalog store
pub struct Shell {
    catalog: Catalog,
}

impl Shell {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Handle one input line. Errors are recoverable and rendered as
    /// display lines; no error terminates the session.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        if line.trim().is_empty() {
            return Outcome::Continue(Vec::new());
        }
        match Command::parse(line) {
            Ok(command) => self.execute(command),
            Err(err) => Outcome::Continue(vec![err.display_line()]),
        }
    }

    fn execute(&mut self, command: Command) -> Outcome {
        let lines = match command {
            Command::AddItem { title, kind } => {
                let item = self.catalog.add_item(title, kind);
                tracing::debug!("Added item {} ({})", item.id, item.kind.media_type());
                vec![format!(
                    "{} added successfully with ID {}.",
                    capitalize(item.kind.media_type().label()),
                    item.id
                )]
            }
            Command::DeleteItem { id } => match self.catalog.delete_item(id) {
                Ok(_) => vec![format!("Item with ID {} deleted.", id)],
                Err(err) => vec![err.display_line()],
            },
            Command::EditItem { id, title } => match self.catalog.edit_item(id, title) {
                Ok(()) => vec![format!("Item with ID {} edited.", id)],
                Err(err) => vec![err.display_line()],
            },
            Command::ViewAll => self
                .catalog
                .items()
                .iter()
                .map(|item| item.display_line())
                .collect(),
            Command::ViewItem { id } => match self.catalog.item(id) {
                Ok(item) => vec![item.display_line()],
                Err(err) => vec![err.display_line()],
            },
            Command::HotPicks => {
                let mut lines = vec!["Hot Picks:".to_string()];
                lines.extend(
                    self.catalog
                        .hot_picks()
                        .iter()
                        .map(|item| format!("{} (popularity: {})", item.title, item.popularity)),
                );
                lines
            }
            Command::Borrow { item_id, user_id } => {
                match self.catalog.borrow_item(user_id, item_id) {
                    Ok(receipt) => {
                        let mut lines = Vec::new();
                        if receipt.new_borrower {
                            lines.push(format!("Registered new borrower {}.", receipt.user_id));
                        }
                        lines.push(format!(
                            "Item {} borrowed successfully by user {}.",
                            receipt.item_id, receipt.user_id
                        ));
                        lines
                    }
                    Err(err) => vec![err.display_line()],
                }
            }
            Command::Borrowers => {
                let mut lines = vec!["Borrowers and borrowed items:".to_string()];
                for holdings in self.catalog.borrower_holdings() {
                    lines.push(format!("User ID: {}", holdings.user_id));
                    for title in &holdings.titles {
                        lines.push(format!("- {}", title));
                    }
                }
                lines
            }
            Command::Return { id } => match self.catalog.return_item(id) {
                Ok(user_id) => vec![format!("Item {} returned by user {}.", id, user_id)],
                Err(err) => vec![err.display_line()],
            },
            Command::Quit => return Outcome::Quit,
        };
        Outcome::Continue(lines)
    }

    /// Drive the shell over a line-oriented reader and writer until
    /// the quit command or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Outcome::Continue(lines) => {
                    for line in lines {
                        writeln!(output, "{}", line)?;
                    }
                }
                Outcome::Quit => break,
            }
        }
        Ok(())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
