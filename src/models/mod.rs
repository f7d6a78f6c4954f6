//! Data models for Biblion

pub mod borrower;
pub mod item;

// Re-export commonly used types
pub use borrower::Borrower;
pub use item::{Item, ItemKind, MediaType};
