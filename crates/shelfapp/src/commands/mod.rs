//! # Command Layer
//!
//! One submodule per verb. Each command loads the collection from a
//! [`DataStore`], runs a catalog operation over it, saves it back when it
//! changed, and returns a structured [`CmdResult`].
//!
//! ## What Commands Do NOT Do
//!
//! - **Terminal I/O**: no stdout, stderr or formatting
//! - **Argument parsing**: the CLI and the API facade turn raw input into types
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! [`CmdResult`] carries:
//! - `listed_books`: books to display, already filtered and sorted
//! - `affected_books`: books that were created, toggled or removed
//! - `stats`: catalog counts (for `stats`)
//! - `failed_ids`: ids that could not be processed by a partial-failure command
//! - `messages`: leveled messages (info, success, warning, error)
//!
//! ## Testing Strategy
//!
//! Command tests run against [`InMemoryStore`] and check both the returned
//! `CmdResult` and what ends up in the store.
//!
//! ## Command Modules
//!
//! - [`add`]: create a book (optionally unavailable)
//! - [`toggle`]: flip availability of one or more books
//! - [`delete`]: remove a book
//! - [`list`]: filter, sort and optionally export
//! - [`search`]: text-only listing
//! - [`import`]: bulk add from CSV
//! - [`export`]: CSV / JSON writers used by `list`
//! - [`stats`]: availability counts
//!
//! [`DataStore`]: crate::store::DataStore
//! [`InMemoryStore`]: crate::store::memory::InMemoryStore

use crate::model::{Book, BookId, CatalogStats};
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod export;
pub mod import;
pub mod list;
pub mod search;
pub mod stats;
pub mod toggle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub listed_books: Vec<Book>,
    pub affected_books: Vec<Book>,
    pub stats: Option<CatalogStats>,
    pub failed_ids: Vec<BookId>,
    /// Whether `listed_books` went through a text or availability filter.
    pub filtered: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_books(mut self, books: Vec<Book>) -> Self {
        self.listed_books = books;
        self
    }

    pub fn with_affected_books(mut self, books: Vec<Book>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_stats(mut self, stats: CatalogStats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn has_failures(&self) -> bool {
        !self.failed_ids.is_empty()
    }
}

/// "Yes"/"No" rendering of availability used in messages and tables.
pub fn yes_no(available: bool) -> &'static str {
    if available {
        "Yes"
    } else {
        "No"
    }
}

/// `1 book` / `3 books`.
pub fn count_books(n: usize) -> String {
    if n == 1 {
        "1 book".to_string()
    } else {
        format!("{} books", n)
    }
}
