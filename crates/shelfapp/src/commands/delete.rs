use crate::catalog;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::BookId;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, id: BookId) -> Result<CmdResult> {
    let mut books = store.load()?;
    let removed = catalog::delete(&mut books, id)?;
    store.save(&books)?;
    tracing::info!(id, "deleted book");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Deleted book #{}: {} by {}",
        removed.id, removed.title, removed.author
    )));
    Ok(result.with_affected_books(vec![removed]))
}
