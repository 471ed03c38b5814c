use crate::commands::{CmdMessage, CmdResult};
use crate::model::Book;

/// Case-insensitive substring match on title or author, exact match on the year's
/// decimal form. Matches keep collection order.
pub fn run(books: &[Book], query: &str) -> CmdResult {
    let query_lower = query.to_lowercase();

    let matches: Vec<Book> = books
        .iter()
        .filter(|book| {
            book.title.to_lowercase().contains(&query_lower)
                || book.author.to_lowercase().contains(&query_lower)
                || book.year.to_string() == query_lower
        })
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if matches.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "No books found for '{}'",
            query
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} book(s):",
            matches.len()
        )));
        for book in &matches {
            result.add_message(CmdMessage::info(book.to_string()));
        }
    }

    result.with_listed_books(matches)
}
