use crate::catalog;
use crate::commands::export::{self, ExportTarget};
use crate::commands::{count_books, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{BookFilter, SortField};
use crate::store::DataStore;

#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: BookFilter,
    pub sort: SortField,
    pub descending: bool,
    pub export: Option<ExportTarget>,
}

/// Filter, sort and optionally export. Stored order is never changed.
pub fn run<S: DataStore>(store: &S, query: &ListQuery) -> Result<CmdResult> {
    let books = store.load()?;
    let mut listed = catalog::filter(&books, &query.filter);
    catalog::sort(&mut listed, query.sort, query.descending);

    let mut result = CmdResult::default();
    if let Some(target) = &query.export {
        export::write(target, &listed)?;
        result.add_message(CmdMessage::success(format!(
            "Exported {} to {}",
            count_books(listed.len()),
            target.path.display()
        )));
    }

    result.filtered = !query.filter.is_empty();
    Ok(result.with_listed_books(listed))
}
