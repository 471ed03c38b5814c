use super::{decode, encode, DataStore};
use crate::error::{LibrisError, Result};
use crate::model::Book;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Keeps the encoded JSON rather than the books, so loads and saves exercise the
/// same codec as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    raw: Option<String>,
    fail_writes: bool,
    save_count: usize,
    quarantined: Vec<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose current content is `raw`, parsable or not.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Some(raw.into()),
            ..Self::default()
        }
    }

    pub fn with_books(books: &[Book]) -> Result<Self> {
        Ok(Self::with_raw(encode(books)?))
    }

    /// Make every following save fail (or succeed again).
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn stored_books(&self) -> Result<Vec<Book>> {
        match &self.raw {
            Some(raw) => decode(raw.as_bytes()),
            None => Ok(Vec::new()),
        }
    }

    /// Contents moved aside by [`DataStore::quarantine`], oldest first.
    pub fn quarantined(&self) -> &[String] {
        &self.quarantined
    }
}

impl DataStore for InMemoryStore {
    fn load_books(&self) -> Result<Option<Vec<Book>>> {
        self.raw
            .as_deref()
            .map(|raw| decode(raw.as_bytes()))
            .transpose()
    }

    fn save_books(&mut self, books: &[Book]) -> Result<()> {
        if self.fail_writes {
            return Err(LibrisError::Store("write refused".to_string()));
        }
        self.raw = Some(encode(books)?);
        self.save_count += 1;
        Ok(())
    }

    fn quarantine(&mut self) -> Result<Option<PathBuf>> {
        match self.raw.take() {
            Some(raw) => {
                self.quarantined.push(raw);
                Ok(Some(PathBuf::from(format!(
                    "memory.corrupt-{}",
                    self.quarantined.len()
                ))))
            }
            None => Ok(None),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::commands::helpers::next_id;
    use crate::model::BookStatus;

    #[derive(Default)]
    pub struct StoreFixture {
        books: Vec<Book>,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let id = next_id(&self.books);
            self.books.push(Book::new(id, title, author, year));
            self
        }

        pub fn with_checked_out_book(mut self, title: &str, author: &str, year: i32) -> Self {
            let id = next_id(&self.books);
            self.books
                .push(Book::new(id, title, author, year).with_status(BookStatus::CheckedOut));
            self
        }

        pub fn with_books(mut self, count: usize) -> Self {
            for i in 0..count {
                let id = next_id(&self.books);
                self.books.push(Book::new(
                    id,
                    format!("Test Book {}", i + 1),
                    format!("Test Author {}", i + 1),
                    2000 + i as i32,
                ));
            }
            self
        }

        pub fn books(&self) -> &[Book] {
            &self.books
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_books(&self.books).unwrap()
        }
    }
}
