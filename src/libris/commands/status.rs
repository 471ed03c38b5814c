use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookId, BookStatus};

use super::helpers::position_of;

/// Sets the status of a book. The status is validated before the id is looked up.
pub fn run(books: &mut [Book], id: BookId, new_status: &str) -> Result<CmdResult> {
    let status: BookStatus = new_status.parse()?;
    let index = position_of(books, id)?;

    let book = &mut books[index];
    let old_status = book.status;
    book.status = status;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status of '{}' (ID: {}) changed from '{}' to '{}'",
        book.title, id, old_status, status
    )));
    Ok(result.with_affected_books(vec![book.clone()]))
}
