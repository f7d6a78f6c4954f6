//! Catalog record parser
//!
//! Parses the line-oriented, comma-separated catalog load format into
//! item records. A malformed line fails the whole parse with a
//! diagnostic naming the offending line; nothing is skipped silently.

use crate::error::{AppError, AppResult};
use crate::models::{ItemKind, MediaType};

/// A parsed load-file record, ready to be added to the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemRecord {
    pub title: String,
    pub kind: ItemKind,
}

/// Parse an entire load source. Blank lines are skipped; the first
/// malformed line aborts the parse and no records are returned.
pub fn parse_catalog(source: &str) -> AppResult<Vec<ItemRecord>> {
    let mut records = Vec::new();
    for (idx, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_record(line).map_err(|reason| AppError::MalformedRecord {
            line: idx + 1,
            reason,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Parse a single record line: `type,title,field3,field4[,...]`
fn parse_record(line: &str) -> Result<ItemRecord, String> {
    let parts: Vec<&str> = line.split(',').collect();
    if parts.len() < 2 {
        return Err("expected a type code and a title".to_string());
    }

    let code: u8 = parts[0]
        .trim()
        .parse()
        .map_err(|_| format!("invalid type code {:?}", parts[0]))?;
    let media = MediaType::try_from(code).map_err(|c| format!("unknown type code {}", c))?;
    let title = parts[1].to_string();

    let kind = match media {
        MediaType::Book => {
            if parts.len() != 4 {
                return Err(format!(
                    "book records take 4 fields (type,title,author,year), got {}",
                    parts.len()
                ));
            }
            let year: i32 = parts[3]
                .trim()
                .parse()
                .map_err(|_| format!("invalid year {:?}", parts[3]))?;
            ItemKind::Book {
                author: parts[2].to_string(),
                year,
            }
        }
        MediaType::Magazine => {
            if parts.len() < 4 {
                return Err(format!(
                    "magazine records take at least 4 fields (type,title,publisher,authors...), got {}",
                    parts.len()
                ));
            }
            ItemKind::Magazine {
                publisher: parts[2].to_string(),
                authors: parse_author_list(&parts[3..])?,
            }
        }
        MediaType::Newspaper => {
            if parts.len() != 4 {
                return Err(format!(
                    "newspaper records take 4 fields (type,title,publisher,date), got {}",
                    parts.len()
                ));
            }
            ItemKind::Newspaper {
                publisher: parts[2].to_string(),
                publication_date: parts[3].to_string(),
            }
        }
    };

    Ok(ItemRecord { title, kind })
}

/// Author fields end at the first token carrying a trailing period.
/// Fields after the terminator are malformed; a missing terminator
/// ends the list at the last field.
fn parse_author_list(fields: &[&str]) -> Result<Vec<String>, String> {
    let mut authors = Vec::new();
    let mut terminated_at = None;
    for (i, field) in fields.iter().enumerate() {
        if let Some(stripped) = field.strip_suffix('.') {
            authors.push(stripped.to_string());
            terminated_at = Some(i);
            break;
        }
        authors.push(field.to_string());
    }
    if let Some(end) = terminated_at {
        if end + 1 < fields.len() {
            return Err("unexpected fields after the end of the author list".to_string());
        }
    }
    if authors.iter().any(|a| a.is_empty()) {
        return Err("empty author name".to_string());
    }
    Ok(authors)
}
