use crate::catalog;
use crate::commands::{yes_no, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::BookId;
use crate::store::DataStore;

/// Toggle each id independently. A missing id is reported in the result and
/// does not stop the others; the collection is saved once if anything changed.
pub fn run<S: DataStore>(store: &mut S, ids: &[BookId]) -> Result<CmdResult> {
    let mut books = store.load()?;
    let mut result = CmdResult::default();

    for &id in ids {
        match catalog::toggle(&mut books, id) {
            Ok(book) => {
                result.add_message(CmdMessage::success(format!(
                    "Toggled availability for #{} → {}",
                    book.id,
                    yes_no(book.available)
                )));
                result.affected_books.push(book);
            }
            Err(ShelfError::NotFound(missing)) => {
                tracing::debug!(id = missing, "toggle skipped missing id");
                result.add_message(CmdMessage::error(format!("Book #{} not found.", missing)));
                result.failed_ids.push(missing);
            }
            Err(e) => return Err(e),
        }
    }

    if !result.affected_books.is_empty() {
        store.save(&books)?;
    }
    Ok(result)
}
