//! Biblion Library Catalog Manager
//!
//! An in-memory catalog of library items (books, magazines and
//! newspapers) with borrower and lending tracking, driven by a
//! line-oriented text command shell.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod records;
pub mod shell;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
