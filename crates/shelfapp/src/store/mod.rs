//! # Storage Layer
//!
//! The [`DataStore`] trait is the only way the rest of shelf reaches persisted
//! state. It deals in whole collections: every command loads the full list of
//! books, changes it in memory and saves the full list back.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file holding an array of books.
//!   - Missing file reads as an empty catalog; the parent directory is created
//!     on first save.
//!   - Saves go to a sibling temp file which is then renamed over the target,
//!     so a crash mid-write leaves the previous file intact.
//!   - Optionally holds a [`lock::LockFile`] for the lifetime of the store.
//!
//! - [`memory::InMemoryStore`]: in-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures
//!
//! ## Storage Format
//!
//! ```text
//! [
//!   {
//!     "id": 1,
//!     "title": "Dune",
//!     "author": "Frank Herbert",
//!     "available": true
//!   }
//! ]
//! ```
//!
//! Loading validates the invariants the rest of the code relies on: ids are
//! positive and unique, titles and authors are non-empty.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::collections::HashSet;
use std::path::Path;

pub mod fs;
pub mod lock;
pub mod memory;

/// Abstract interface for catalog storage.
pub trait DataStore {
    /// Load the whole collection, in stored order.
    fn load(&self) -> Result<Vec<Book>>;

    /// Replace the whole collection.
    fn save(&mut self, books: &[Book]) -> Result<()>;

    /// Human readable location of the data (a path for file stores).
    fn location(&self) -> String;
}

/// Parse and validate a serialized collection.
pub fn decode(path: &Path, content: &str) -> Result<Vec<Book>> {
    let books: Vec<Book> =
        serde_json::from_str(content).map_err(|e| ShelfError::corrupt(path, e.to_string()))?;

    let mut seen = HashSet::with_capacity(books.len());
    for book in &books {
        if book.id == 0 {
            return Err(ShelfError::corrupt(path, "book ids must be positive"));
        }
        if !seen.insert(book.id) {
            return Err(ShelfError::corrupt(
                path,
                format!("duplicate book id {}", book.id),
            ));
        }
        if book.title.trim().is_empty() || book.author.trim().is_empty() {
            return Err(ShelfError::corrupt(
                path,
                format!("book {} has an empty title or author", book.id),
            ));
        }
    }
    Ok(books)
}

/// Serialize a collection the way it is written to disk.
pub fn encode(path: &Path, books: &[Book]) -> Result<String> {
    let mut content = serde_json::to_string_pretty(books)
        .map_err(|e| ShelfError::corrupt(path, e.to_string()))?;
    content.push('\n');
    Ok(content)
}
