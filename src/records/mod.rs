//! Catalog load-file support

pub mod parser;

pub use parser::{parse_catalog, ItemRecord};

use std::fs;
use std::path::Path;

use crate::error::AppResult;

/// Read and parse a catalog load file in one shot. Read failures and
/// malformed records both surface to the caller.
pub fn load_catalog_file(path: &Path) -> AppResult<Vec<ItemRecord>> {
    let source = fs::read_to_string(path)?;
    parse_catalog(&source)
}
