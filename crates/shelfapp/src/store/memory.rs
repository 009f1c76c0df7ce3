use super::DataStore;
use crate::error::{Result, ShelfError};
use crate::model::Book;
use std::path::PathBuf;

/// In-memory storage for testing.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    books: Vec<Book>,
    simulate_write_error: bool,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            books,
            ..Self::default()
        }
    }

    /// Make every following `save` fail with an I/O error.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    /// Number of successful saves, for asserting read-only commands stay read-only.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Book>> {
        Ok(self.books.clone())
    }

    fn save(&mut self, books: &[Book]) -> Result<()> {
        if self.simulate_write_error {
            return Err(ShelfError::io(
                &PathBuf::from(self.location()),
                std::io::Error::other("simulated write error"),
            ));
        }
        self.books = books.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "memory://books".to_string()
    }
}
