use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Book, BookId};

use super::helpers::position_of;

pub fn run(books: &mut Vec<Book>, id: BookId) -> Result<CmdResult> {
    let index = position_of(books, id)?;
    let removed = books.remove(index);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book with ID {} removed", id)));
    Ok(result.with_affected_books(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LibrisError;

    #[test]
    fn removes_the_matching_book() {
        let mut books = vec![Book::new(1, "A", "A", 1), Book::new(2, "B", "B", 2)];
        let result = run(&mut books, 1).unwrap();

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 2);
        assert_eq!(result.affected_books[0].title, "A");
    }

    #[test]
    fn missing_id_leaves_books_untouched() {
        let mut books = vec![Book::new(1, "A", "A", 1)];
        let before = books.clone();

        let err = run(&mut books, 42).unwrap_err();
        assert!(matches!(err, LibrisError::BookNotFound(42)));
        assert_eq!(books, before);
    }
}
