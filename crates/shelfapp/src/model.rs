use crate::error::{Result, ShelfError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type BookId = u64;

fn default_available() -> bool {
    true
}

/// A single catalog record. Field order is the on-disk order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    // Older files written by hand sometimes omit the flag.
    #[serde(default = "default_available")]
    pub available: bool,
}

impl Book {
    pub fn new(id: BookId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            available: true,
        }
    }

    /// Case-insensitive substring match against title or author.
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.author.to_lowercase().contains(needle)
    }
}

/// Read-only restriction of a collection. Unset fields do not filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    pub text: Option<String>,
    pub available: Option<bool>,
}

impl BookFilter {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            available: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.available.is_none()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Id,
    Title,
    Author,
    Available,
}

impl SortField {
    pub const NAMES: [&'static str; 4] = ["id", "title", "author", "available"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Title => "title",
            SortField::Author => "author",
            SortField::Available => "available",
        }
    }
}

impl FromStr for SortField {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(SortField::Id),
            "title" => Ok(SortField::Title),
            "author" => Ok(SortField::Author),
            "available" => Ok(SortField::Available),
            other => Err(ShelfError::validation(format!(
                "Unknown sort field '{}' (expected one of: {})",
                other,
                SortField::NAMES.join(", ")
            ))),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    pub available: usize,
    pub unavailable: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_available_defaults_to_true() {
        let book: Book = serde_json::from_str(r#"{"id": 3, "title": "Emma", "author": "Austen"}"#)
            .unwrap();
        assert!(book.available);
    }

    #[test]
    fn serializes_fields_in_schema_order() {
        let json = serde_json::to_string(&Book::new(1, "Dune", "Herbert")).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"title":"Dune","author":"Herbert","available":true}"#
        );
    }

    #[test]
    fn sort_field_parses_case_insensitively() {
        assert_eq!("Title".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!(" author ".parse::<SortField>().unwrap(), SortField::Author);
    }

    #[test]
    fn unknown_sort_field_is_a_validation_error() {
        let err = "year".parse::<SortField>().unwrap_err();
        assert!(matches!(err, ShelfError::Validation(_)));
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn matches_title_or_author() {
        let book = Book::new(1, "Dune", "Frank Herbert");
        assert!(book.matches_lowercase("dun"));
        assert!(book.matches_lowercase("herb"));
        assert!(!book.matches_lowercase("asimov"));
    }
}
