use crate::commands::list::{self, ListQuery};
use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::{BookFilter, SortField};
use crate::store::DataStore;

/// `list` restricted to a text filter.
pub fn run<S: DataStore>(
    store: &S,
    term: &str,
    sort: SortField,
    descending: bool,
) -> Result<CmdResult> {
    let query = ListQuery {
        filter: BookFilter::text(term),
        sort,
        descending,
        export: None,
    };
    list::run(store, &query)
}
