use crate::commands::{CmdMessage, CmdResult};
use crate::model::Book;

use super::helpers::next_id;

pub fn run(books: &mut Vec<Book>, title: &str, author: &str, year: i32) -> CmdResult {
    let book = Book::new(next_id(books), title, author, year);
    books.push(book.clone());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book added: {}", book)));
    result.with_affected_books(vec![book])
}
