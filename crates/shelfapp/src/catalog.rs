//! # Catalog Operations
//!
//! Pure functions over an in-memory collection. Nothing here touches the
//! filesystem: the command layer loads the collection from a [`DataStore`],
//! runs one of these operations and saves the result back.
//!
//! Mutating operations (`add`, `toggle`, `delete`) work in place on a
//! `Vec<Book>` and return the book they touched. `filter` and `sort` never
//! change stored order; `filter` returns a new vector and `sort` is applied to
//! a display copy by the callers.
//!
//! ## Id Assignment
//!
//! New ids are `max(existing) + 1`, or `1` for an empty collection. The data
//! file is a bare array with no room for a high-water mark, so deleting the
//! highest id lets the next `add` issue it again. Any other id is never
//! reissued while a higher one exists.
//!
//! [`DataStore`]: crate::store::DataStore

use crate::error::{Result, ShelfError};
use crate::model::{Book, BookFilter, BookId, CatalogStats, SortField};
use std::cmp::Ordering;

pub fn next_id(books: &[Book]) -> Result<BookId> {
    books
        .iter()
        .map(|b| b.id)
        .max()
        .unwrap_or(0)
        .checked_add(1)
        .ok_or_else(|| ShelfError::validation("No book ids left"))
}

pub fn add(books: &mut Vec<Book>, title: &str, author: &str) -> Result<Book> {
    let title = title.trim();
    let author = author.trim();
    if title.is_empty() {
        return Err(ShelfError::validation("Title cannot be empty"));
    }
    if author.is_empty() {
        return Err(ShelfError::validation("Author cannot be empty"));
    }

    let book = Book::new(next_id(books)?, title, author);
    books.push(book.clone());
    Ok(book)
}

pub fn toggle(books: &mut [Book], id: BookId) -> Result<Book> {
    let book = books
        .iter_mut()
        .find(|b| b.id == id)
        .ok_or(ShelfError::NotFound(id))?;
    book.available = !book.available;
    Ok(book.clone())
}

pub fn delete(books: &mut Vec<Book>, id: BookId) -> Result<Book> {
    let pos = books
        .iter()
        .position(|b| b.id == id)
        .ok_or(ShelfError::NotFound(id))?;
    Ok(books.remove(pos))
}

pub fn filter(books: &[Book], filter: &BookFilter) -> Vec<Book> {
    let needle = filter.text.as_deref().map(str::to_lowercase);

    books
        .iter()
        .filter(|b| match &needle {
            Some(n) => b.matches_lowercase(n),
            None => true,
        })
        .filter(|b| match filter.available {
            Some(want) => b.available == want,
            None => true,
        })
        .cloned()
        .collect()
}

/// Stable sort; ties keep their relative order in both directions.
pub fn sort(books: &mut [Book], field: SortField, descending: bool) {
    books.sort_by(|a, b| {
        let ord = compare(a, b, field);
        if descending {
            ord.reverse()
        } else {
            ord
        }
    });
}

fn compare(a: &Book, b: &Book, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortField::Author => a.author.to_lowercase().cmp(&b.author.to_lowercase()),
        SortField::Available => a.available.cmp(&b.available),
    }
}

pub fn stats(books: &[Book]) -> CatalogStats {
    let available = books.iter().filter(|b| b.available).count();
    CatalogStats {
        total: books.len(),
        available,
        unavailable: books.len() - available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Book> {
        let mut books = Vec::new();
        add(&mut books, "Dune", "Frank Herbert").unwrap();
        add(&mut books, "Foundation", "Isaac Asimov").unwrap();
        add(&mut books, "emma", "Jane Austen").unwrap();
        add(&mut books, "I, Robot", "Isaac Asimov").unwrap();
        books
    }

    fn ids(books: &[Book]) -> Vec<BookId> {
        books.iter().map(|b| b.id).collect()
    }

    #[test]
    fn first_id_is_one() {
        let mut books = Vec::new();
        let book = add(&mut books, "Dune", "Herbert").unwrap();
        assert_eq!(book.id, 1);
        assert!(book.available);
    }

    #[test]
    fn add_assigns_fresh_increasing_id() {
        let mut books = vec![Book::new(1, "Dune", "Herbert")];
        let book = add(&mut books, "Foundation", "Asimov").unwrap();
        assert_eq!(book.id, 2);
        assert_eq!(books.len(), 2);

        let mut gapped = vec![Book::new(4, "A", "B"), Book::new(9, "C", "D")];
        let book = add(&mut gapped, "E", "F").unwrap();
        assert_eq!(book.id, 10);
        assert!(gapped[..2].iter().all(|b| b.id < book.id));
    }

    #[test]
    fn add_refuses_when_ids_are_exhausted() {
        let mut books = vec![Book::new(BookId::MAX, "Dune", "Herbert")];
        assert!(matches!(next_id(&books), Err(ShelfError::Validation(_))));
        assert!(matches!(
            add(&mut books, "Foundation", "Asimov"),
            Err(ShelfError::Validation(_))
        ));
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn add_trims_and_rejects_empty_fields() {
        let mut books = Vec::new();
        assert!(matches!(
            add(&mut books, "   ", "Herbert"),
            Err(ShelfError::Validation(_))
        ));
        assert!(matches!(
            add(&mut books, "Dune", ""),
            Err(ShelfError::Validation(_))
        ));
        assert!(books.is_empty());

        let book = add(&mut books, "  Dune ", " Herbert").unwrap();
        assert_eq!(book.title, "Dune");
        assert_eq!(book.author, "Herbert");
    }

    #[test]
    fn toggle_twice_restores_availability() {
        let mut books = sample();
        let once = toggle(&mut books, 2).unwrap();
        assert!(!once.available);
        let twice = toggle(&mut books, 2).unwrap();
        assert!(twice.available);
        assert_eq!(books, sample());
    }

    #[test]
    fn toggle_missing_id_is_not_found() {
        let mut books = sample();
        assert!(matches!(toggle(&mut books, 99), Err(ShelfError::NotFound(99))));
    }

    #[test]
    fn delete_then_operate_is_not_found() {
        let mut books = sample();
        let removed = delete(&mut books, 2).unwrap();
        assert_eq!(removed.title, "Foundation");
        assert_eq!(ids(&books), vec![1, 3, 4]);

        assert!(matches!(delete(&mut books, 2), Err(ShelfError::NotFound(2))));
        assert!(matches!(toggle(&mut books, 2), Err(ShelfError::NotFound(2))));
    }

    #[test]
    fn filter_by_text_matches_title_or_author_case_insensitively() {
        let books = sample();
        assert_eq!(ids(&filter(&books, &BookFilter::text("ISAAC"))), vec![2, 4]);
        assert_eq!(ids(&filter(&books, &BookFilter::text("Emm"))), vec![3]);
        assert!(filter(&books, &BookFilter::text("tolkien")).is_empty());
    }

    #[test]
    fn filter_combines_text_and_availability() {
        let mut books = sample();
        toggle(&mut books, 4).unwrap();

        let f = BookFilter {
            text: Some("asimov".into()),
            available: Some(true),
        };
        assert_eq!(ids(&filter(&books, &f)), vec![2]);

        let f = BookFilter {
            text: None,
            available: Some(false),
        };
        assert_eq!(ids(&filter(&books, &f)), vec![4]);
    }

    #[test]
    fn sort_by_title_ignores_case() {
        let mut books = sample();
        sort(&mut books, SortField::Title, false);
        assert_eq!(ids(&books), vec![1, 3, 2, 4]);
    }

    #[test]
    fn descending_title_sort_is_exact_reverse() {
        let mut asc = sample();
        let mut desc = sample();
        sort(&mut asc, SortField::Title, false);
        sort(&mut desc, SortField::Title, true);
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn sort_is_stable_for_ties() {
        let mut books = sample();
        sort(&mut books, SortField::Author, false);
        // Both Asimov books keep insertion order.
        assert_eq!(ids(&books), vec![1, 2, 4, 3]);

        sort(&mut books, SortField::Available, true);
        assert_eq!(ids(&books), vec![1, 2, 4, 3]);
    }

    #[test]
    fn sort_by_availability_puts_unavailable_first() {
        let mut books = sample();
        toggle(&mut books, 3).unwrap();
        sort(&mut books, SortField::Available, false);
        assert_eq!(ids(&books), vec![3, 1, 2, 4]);
    }

    #[test]
    fn stats_counts_availability() {
        let mut books = sample();
        toggle(&mut books, 1).unwrap();
        let s = stats(&books);
        assert_eq!(s.total, 4);
        assert_eq!(s.available, 3);
        assert_eq!(s.unavailable, 1);
        assert_eq!(stats(&[]), CatalogStats::default());
    }
}
