use crate::catalog;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let books = store.load()?;
    Ok(CmdResult::default().with_stats(catalog::stats(&books)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Book, CatalogStats};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_counts() {
        let mut lent = Book::new(2, "Emma", "Austen");
        lent.available = false;
        let store = InMemoryStore::with_books(vec![Book::new(1, "Dune", "Herbert"), lent]);

        let result = run(&store).unwrap();
        assert_eq!(
            result.stats,
            Some(CatalogStats {
                total: 2,
                available: 1,
                unavailable: 1
            })
        );
    }

    #[test]
    fn empty_catalog_is_all_zero() {
        let result = run(&InMemoryStore::new()).unwrap();
        assert_eq!(result.stats, Some(CatalogStats::default()));
    }
}
