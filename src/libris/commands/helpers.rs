use crate::error::{LibrisError, Result};
use crate::model::{Book, BookId};

/// Next id to hand out: one past the current maximum, or 1 for an empty catalog.
pub fn next_id(books: &[Book]) -> BookId {
    books.iter().map(|b| b.id).max().unwrap_or(0) + 1
}

pub fn position_of(books: &[Book], id: BookId) -> Result<usize> {
    books
        .iter()
        .position(|b| b.id == id)
        .ok_or(LibrisError::BookNotFound(id))
}

/// Ids that occur more than once, each reported once, in first-seen order.
pub fn duplicate_ids(books: &[Book]) -> Vec<BookId> {
    let mut seen = Vec::with_capacity(books.len());
    let mut dupes = Vec::new();
    for book in books {
        if seen.contains(&book.id) {
            if !dupes.contains(&book.id) {
                dupes.push(book.id);
            }
        } else {
            seen.push(book.id);
        }
    }
    dupes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_starts_at_one() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn next_id_follows_the_maximum_not_the_length() {
        let books = vec![Book::new(4, "A", "A", 1), Book::new(2, "B", "B", 2)];
        assert_eq!(next_id(&books), 5);
    }

    #[test]
    fn position_of_missing_id_is_not_found() {
        let books = vec![Book::new(1, "A", "A", 1)];
        assert!(matches!(
            position_of(&books, 9),
            Err(LibrisError::BookNotFound(9))
        ));
        assert_eq!(position_of(&books, 1).unwrap(), 0);
    }

    #[test]
    fn finds_duplicate_ids_once() {
        let books = vec![
            Book::new(1, "A", "A", 1),
            Book::new(2, "B", "B", 2),
            Book::new(1, "C", "C", 3),
            Book::new(1, "D", "D", 4),
        ];
        assert_eq!(duplicate_ids(&books), vec![1]);
    }
}
