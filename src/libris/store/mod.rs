//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence capability the catalog depends on.
//! A store only knows how to read and write a whole snapshot of the collection;
//! ordering, id assignment and validation live above it.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file
//!   - Whole-file rewrite on every save, via a temp file and a rename
//!   - Unreadable files can be moved aside before they get overwritten
//!
//! - [`memory::InMemoryStore`]: Storage for tests
//!   - Keeps the encoded JSON in memory, so it goes through the same codec
//!   - Can be told to fail writes
//!
//! ## Storage Format
//!
//! ```text
//! [
//!     {
//!         "book_id": 1,
//!         "title": "Мастер и Маргарита",
//!         "author": "Михаил Булгаков",
//!         "year": 1967,
//!         "status": "в наличии"
//!     }
//! ]
//! ```
//!
//! Non-ASCII text is written as-is, never `\u`-escaped.

use crate::error::{LibrisError, Result};
use crate::model::Book;
use serde::Serialize;
use std::path::PathBuf;

pub mod fs;
pub mod memory;

const INDENT: &[u8] = b"    ";

/// Abstract interface for catalog persistence.
pub trait DataStore {
    /// Load the stored collection. `Ok(None)` means nothing has been stored yet.
    fn load_books(&self) -> Result<Option<Vec<Book>>>;

    /// Replace the stored collection with `books`.
    fn save_books(&mut self, books: &[Book]) -> Result<()>;

    /// Move unreadable stored data out of the way so a later save does not
    /// destroy it. Returns where it went, if anything was moved.
    fn quarantine(&mut self) -> Result<Option<PathBuf>>;

    /// Human readable location, for messages.
    fn location(&self) -> String;
}

pub fn encode(books: &[Book]) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    books.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| LibrisError::Store(e.to_string()))
}

/// Decodes raw file bytes. Bytes that are not UTF-8 fail like any other bad JSON.
pub fn decode(content: &[u8]) -> Result<Vec<Book>> {
    Ok(serde_json::from_slice(content)?)
}
