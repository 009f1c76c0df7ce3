//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every shelf operation, whatever the UI.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the matching `commands::*::run`
//! - **Normalizes inputs**: parses sort field names and export formats, trims
//!   search text, applies the configured default sort
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: that belongs in `commands/*.rs` and [`crate::catalog`]
//! - **I/O to the terminal**: no stdout, stderr or formatting
//!
//! ## Generic Over DataStore
//!
//! `ShelfApi<S: DataStore>` is generic over the storage backend:
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`
//!
//! ## Testing Strategy
//!
//! API tests check that raw arguments are turned into the right typed
//! request. Command semantics are tested in the command modules.

use crate::commands::{self, export::ExportTarget, list::ListQuery, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{BookFilter, BookId, SortField};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

/// Raw `list` arguments as a UI collects them.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub search: Option<String>,
    pub available: Option<bool>,
    /// Sort field name; the API default applies when unset.
    pub sort: Option<String>,
    pub descending: bool,
    pub export: Option<PathBuf>,
    /// Overrides the format inferred from the export path's extension.
    pub format: Option<String>,
}

pub struct ShelfApi<S: DataStore> {
    store: S,
    default_sort: SortField,
}

impl<S: DataStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            default_sort: SortField::default(),
        }
    }

    pub fn with_default_sort(mut self, sort: SortField) -> Self {
        self.default_sort = sort;
        self
    }

    pub fn default_sort(&self) -> SortField {
        self.default_sort
    }

    /// Where the collection lives (a path or a `memory://` URI).
    pub fn location(&self) -> String {
        self.store.location()
    }

    pub fn list_books(&self, request: &ListRequest) -> Result<CmdResult> {
        let export = match (&request.export, request.format.as_deref()) {
            (Some(path), format) => Some(ExportTarget::resolve(path.clone(), format)?),
            (None, Some(_)) => {
                return Err(ShelfError::validation(
                    "An export format was given without an export path",
                ))
            }
            (None, None) => None,
        };
        if let Some(target) = &export {
            if same_file(&target.path, Path::new(&self.store.location())) {
                return Err(ShelfError::validation(format!(
                    "Refusing to export over the data file {}",
                    target.path.display()
                )));
            }
        }

        let query = ListQuery {
            filter: BookFilter {
                text: normalize_text(request.search.as_deref()),
                available: request.available,
            },
            sort: self.sort_field(request.sort.as_deref())?,
            descending: request.descending,
            export,
        };
        commands::list::run(&self.store, &query)
    }

    pub fn search_books(
        &self,
        query: &str,
        sort: Option<&str>,
        descending: bool,
    ) -> Result<CmdResult> {
        let term = normalize_text(Some(query))
            .ok_or_else(|| ShelfError::validation("Search query cannot be empty"))?;
        commands::search::run(&self.store, &term, self.sort_field(sort)?, descending)
    }

    pub fn add_book(
        &mut self,
        title: &str,
        author: &str,
        available: Option<bool>,
    ) -> Result<CmdResult> {
        commands::add::run(&mut self.store, title, author, available)
    }

    pub fn toggle_books(&mut self, ids: &[BookId]) -> Result<CmdResult> {
        if ids.is_empty() {
            return Err(ShelfError::validation("No book ids given"));
        }
        commands::toggle::run(&mut self.store, ids)
    }

    pub fn delete_book(&mut self, id: BookId) -> Result<CmdResult> {
        commands::delete::run(&mut self.store, id)
    }

    pub fn import_books(&mut self, path: &Path, dry_run: bool) -> Result<CmdResult> {
        commands::import::run(&mut self.store, path, dry_run)
    }

    pub fn stats(&self) -> Result<CmdResult> {
        commands::stats::run(&self.store)
    }

    fn sort_field(&self, name: Option<&str>) -> Result<SortField> {
        match name {
            Some(name) => name.parse(),
            None => Ok(self.default_sort),
        }
    }
}

fn normalize_text(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
}

/// Compares paths after resolving symlinks and `..`. A path that does not
/// exist yet is resolved through its parent directory.
fn same_file(a: &Path, b: &Path) -> bool {
    canonical(a) == canonical(b)
}

fn canonical(path: &Path) -> PathBuf {
    if let Ok(resolved) = path.canonicalize() {
        return resolved;
    }
    let (Some(parent), Some(name)) = (path.parent(), path.file_name()) else {
        return path.to_path_buf();
    };
    let parent = if parent.as_os_str().is_empty() {
        Path::new(".")
    } else {
        parent
    };
    parent
        .canonicalize()
        .map(|p| p.join(name))
        .unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::store::fs::FileStore;
    use crate::store::memory::InMemoryStore;
    use tempfile::tempdir;

    fn api() -> ShelfApi<InMemoryStore> {
        ShelfApi::new(InMemoryStore::with_books(vec![
            Book::new(1, "Dune", "Herbert"),
            Book::new(2, "Emma", "Austen"),
            Book::new(3, "Beloved", "Morrison"),
        ]))
    }

    fn ids(result: &CmdResult) -> Vec<BookId> {
        result.listed_books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn list_uses_configured_default_sort() {
        let api = api().with_default_sort(SortField::Title);
        let result = api.list_books(&ListRequest::default()).unwrap();
        assert_eq!(ids(&result), vec![3, 1, 2]);
    }

    #[test]
    fn explicit_sort_beats_default() {
        let api = api().with_default_sort(SortField::Title);
        let request = ListRequest {
            sort: Some("Author".into()),
            descending: true,
            ..Default::default()
        };
        assert_eq!(ids(&api.list_books(&request).unwrap()), vec![3, 1, 2]);
    }

    #[test]
    fn unknown_sort_is_validation_error() {
        let request = ListRequest {
            sort: Some("pages".into()),
            ..Default::default()
        };
        assert!(matches!(
            api().list_books(&request),
            Err(ShelfError::Validation(_))
        ));
    }

    #[test]
    fn blank_search_text_does_not_filter() {
        let request = ListRequest {
            search: Some("   ".into()),
            ..Default::default()
        };
        let result = api().list_books(&request).unwrap();
        assert_eq!(result.listed_books.len(), 3);
        assert!(!result.filtered);
    }

    #[test]
    fn format_without_export_path_is_rejected() {
        let request = ListRequest {
            format: Some("csv".into()),
            ..Default::default()
        };
        assert!(matches!(
            api().list_books(&request),
            Err(ShelfError::Validation(_))
        ));
    }

    #[test]
    fn export_format_is_inferred_or_overridden() {
        let dir = tempdir().unwrap();
        let request = ListRequest {
            export: Some(dir.path().join("out.txt")),
            format: Some("CSV".into()),
            ..Default::default()
        };
        api().list_books(&request).unwrap();
        let written = std::fs::read_to_string(dir.path().join("out.txt")).unwrap();
        assert!(written.starts_with("id,title,author,available\n"));

        let request = ListRequest {
            export: Some(dir.path().join("out.xml")),
            ..Default::default()
        };
        assert!(api().list_books(&request).is_err());
    }

    #[test]
    fn export_over_the_data_file_is_rejected() {
        let dir = tempdir().unwrap();
        let data = dir.path().join("books.json");
        let mut lent = Book::new(2, "Emma", "Austen");
        lent.available = false;
        let mut store = FileStore::new(&data);
        store
            .save(&[Book::new(1, "Dune", "Herbert"), lent])
            .unwrap();
        let before = std::fs::read_to_string(&data).unwrap();
        let api = ShelfApi::new(store);

        let as_csv = ListRequest {
            export: Some(data.clone()),
            format: Some("csv".into()),
            ..Default::default()
        };
        assert!(matches!(
            api.list_books(&as_csv),
            Err(ShelfError::Validation(_))
        ));

        let filtered = ListRequest {
            available: Some(true),
            export: Some(dir.path().join(".").join("books.json")),
            ..Default::default()
        };
        assert!(matches!(
            api.list_books(&filtered),
            Err(ShelfError::Validation(_))
        ));

        assert_eq!(std::fs::read_to_string(&data).unwrap(), before);
        assert_eq!(FileStore::new(&data).load().unwrap().len(), 2);
    }

    #[test]
    fn search_trims_and_rejects_empty_query() {
        let api = api();
        let result = api.search_books("  emma ", None, false).unwrap();
        assert_eq!(ids(&result), vec![2]);
        assert!(matches!(
            api.search_books(" ", None, false),
            Err(ShelfError::Validation(_))
        ));
    }

    #[test]
    fn toggle_requires_ids() {
        assert!(api().toggle_books(&[]).is_err());
    }

    #[test]
    fn mutations_go_through_to_the_store() {
        let mut api = api();
        api.add_book("Ivanhoe", "Scott", Some(false)).unwrap();
        api.delete_book(1).unwrap();
        let stats = api.stats().unwrap().stats.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.unavailable, 1);
        assert_eq!(api.location(), "memory://books");
    }
}
