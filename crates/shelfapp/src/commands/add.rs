use crate::catalog;
use crate::commands::{yes_no, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Create a book. Creation always yields an available book; asking for
/// `available = Some(false)` toggles the new id right after creation, within
/// the same load/save cycle.
pub fn run<S: DataStore>(
    store: &mut S,
    title: &str,
    author: &str,
    available: Option<bool>,
) -> Result<CmdResult> {
    let mut books = store.load()?;
    let mut book = catalog::add(&mut books, title, author)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Added book #{}: {} by {}",
        book.id, book.title, book.author
    )));

    if available == Some(false) {
        book = catalog::toggle(&mut books, book.id)?;
        result.add_message(CmdMessage::info(format!(
            "Toggled availability for #{} → {}",
            book.id,
            yes_no(book.available)
        )));
    }

    store.save(&books)?;
    tracing::info!(id = book.id, "added book");
    Ok(result.with_affected_books(vec![book]))
}
