use crate::commands::CmdResult;
use crate::model::Book;

pub fn run(books: &[Book]) -> CmdResult {
    CmdResult::default().with_listed_books(books.to_vec())
}
