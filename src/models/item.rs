//! Item (catalog entry) model and related types.

use serde::Serialize;

/// Media type codes for catalog items.
/// The numeric codes are shared by the load-file format and the command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[repr(u8)]
pub enum MediaType {
    Book = 1,
    Magazine = 2,
    Newspaper = 3,
}

impl MediaType {
    /// Return the numeric code for this media type
    pub fn as_code(&self) -> u8 {
        *self as u8
    }

    /// Lowercase label used in display lines
    pub fn label(&self) -> &'static str {
        match self {
            MediaType::Book => "book",
            MediaType::Magazine => "magazine",
            MediaType::Newspaper => "newspaper",
        }
    }
}

impl TryFrom<u8> for MediaType {
    type Error = u8;

    /// Unknown codes are an error, never silently mapped
    fn try_from(v: u8) -> Result<Self, u8> {
        match v {
            1 => Ok(MediaType::Book),
            2 => Ok(MediaType::Magazine),
            3 => Ok(MediaType::Newspaper),
            other => Err(other),
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Variant-specific payload of a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ItemKind {
    Book {
        author: String,
        year: i32,
    },
    Magazine {
        publisher: String,
        authors: Vec<String>,
    },
    Newspaper {
        publisher: String,
        publication_date: String,
    },
}

impl ItemKind {
    pub fn media_type(&self) -> MediaType {
        match self {
            ItemKind::Book { .. } => MediaType::Book,
            ItemKind::Magazine { .. } => MediaType::Magazine,
            ItemKind::Newspaper { .. } => MediaType::Newspaper,
        }
    }
}

/// A catalog item. Ids are store-assigned, monotonic and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    pub popularity: u32,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(id: u32, title: String, kind: ItemKind) -> Self {
        Self {
            id,
            title,
            popularity: 0,
            kind,
        }
    }

    /// One-line display representation of this item
    pub fn display_line(&self) -> String {
        let details = match &self.kind {
            ItemKind::Book { author, year } => format!("by {} ({})", author, year),
            ItemKind::Magazine { publisher, authors } => {
                format!("published by {}, authors: {}", publisher, authors.join(", "))
            }
            ItemKind::Newspaper {
                publisher,
                publication_date,
            } => format!("published by {}, {}", publisher, publication_date),
        };
        format!(
            "#{} [{}] {} {} (popularity: {})",
            self.id,
            self.kind.media_type(),
            self.title,
            details,
            self.popularity
        )
    }
}
