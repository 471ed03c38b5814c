//! # Catalog Facade
//!
//! [`Catalog`] is the single entry point for catalog operations, whatever drives
//! it (the interactive binary, tests, another program).
//!
//! ## Role and Responsibilities
//!
//! The catalog:
//! - **Owns** the in-memory collection, in load/add order
//! - **Dispatches** each operation to its command in `commands/*.rs`
//! - **Persists** the whole collection after every mutation, before returning
//! - **Reports** every outcome through the injected [`Reporter`]
//!
//! ## Failure Signalling
//!
//! Operations never return errors. A failed operation is reported at error level and
//! signalled with `false` (or an empty result); the collection is left unchanged.
//! A failed save is reported too, but the in-memory change stands: memory and disk
//! disagree until the next successful save.
//!
//! The only fallible entry points are the strict constructors, see [`LoadPolicy`].
//!
//! ## Generic Over DataStore and Reporter
//!
//! - Production: `Catalog<FileStore, ConsoleReporter>`
//! - Testing: `Catalog<InMemoryStore, &MessageLog>`

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::{LibrisError, Result};
use crate::model::{Book, BookId};
use crate::report::Reporter;
use crate::store::DataStore;

/// What to do when stored data cannot be read at construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Report the error and start from an empty catalog. The unreadable file is
    /// moved aside before the first save replaces it.
    #[default]
    Lenient,
    /// Fail construction.
    Strict,
}

pub struct Catalog<S: DataStore, R: Reporter> {
    store: S,
    reporter: R,
    books: Vec<Book>,
    unreadable: bool,
}

impl<S: DataStore, R: Reporter> Catalog<S, R> {
    /// Opens the catalog with [`LoadPolicy::Lenient`].
    pub fn open(store: S, reporter: R) -> Self {
        let location = store.location();
        match store.load_books() {
            Ok(books) => Self::loaded(store, reporter, books),
            Err(e) => {
                reporter.error(format!(
                    "Failed to read {}: {}. Starting with an empty catalog.",
                    location, e
                ));
                let unreadable = matches!(e, LibrisError::Serialization(_));
                Self {
                    store,
                    reporter,
                    books: Vec::new(),
                    unreadable,
                }
            }
        }
    }

    /// Opens the catalog, failing if stored data cannot be read.
    pub fn open_strict(store: S, reporter: R) -> Result<Self> {
        let books = store.load_books()?;
        Ok(Self::loaded(store, reporter, books))
    }

    pub fn open_with(store: S, reporter: R, policy: LoadPolicy) -> Result<Self> {
        match policy {
            LoadPolicy::Lenient => Ok(Self::open(store, reporter)),
            LoadPolicy::Strict => Self::open_strict(store, reporter),
        }
    }

    fn loaded(store: S, reporter: R, books: Option<Vec<Book>>) -> Self {
        let books = match books {
            Some(books) => {
                reporter.info(format!(
                    "Loaded {} book(s) from {}",
                    books.len(),
                    store.location()
                ));
                let dupes = commands::helpers::duplicate_ids(&books);
                if !dupes.is_empty() {
                    tracing::warn!(ids = ?dupes, "duplicate book ids in catalog");
                    reporter.warning(format!(
                        "Duplicate book IDs in {}: {:?}. Only the first of each can be removed or updated.",
                        store.location(),
                        dupes
                    ));
                }
                books
            }
            None => {
                reporter.info(format!(
                    "{} not found. Starting with an empty catalog.",
                    store.location()
                ));
                Vec::new()
            }
        };

        Self {
            store,
            reporter,
            books,
            unreadable: false,
        }
    }

    pub fn add_book(&mut self, title: &str, author: &str, year: i32) -> Book {
        let mut result = commands::add::run(&mut self.books, title, author, year);
        self.commit(&result);
        result.affected_books.remove(0)
    }

    pub fn remove_book(&mut self, id: BookId) -> bool {
        let result = commands::remove::run(&mut self.books, id);
        self.settle(result)
    }

    pub fn search_books(&self, query: &str) -> Vec<Book> {
        let result = commands::search::run(&self.books, query);
        self.emit(&result.messages);
        result.listed_books
    }

    pub fn list_books(&self) -> &[Book] {
        &self.books
    }

    /// Owned snapshot of the collection, as produced by the list command.
    pub fn snapshot(&self) -> Vec<Book> {
        commands::list::run(&self.books).listed_books
    }

    pub fn find_book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn update_status(&mut self, id: BookId, new_status: &str) -> bool {
        let result = commands::status::run(&mut self.books, id, new_status);
        self.settle(result)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    fn settle(&mut self, result: Result<CmdResult>) -> bool {
        match result {
            Ok(result) => {
                self.commit(&result);
                true
            }
            Err(e) => {
                self.reporter.error(e.to_string());
                false
            }
        }
    }

    /// Persists a mutation, then reports its messages.
    fn commit(&mut self, result: &CmdResult) {
        if result.is_mutation() {
            self.persist();
        }
        self.emit(&result.messages);
    }

    fn emit(&self, messages: &[CmdMessage]) {
        for message in messages {
            self.reporter.report(message.clone());
        }
    }

    fn persist(&mut self) -> bool {
        if self.unreadable {
            match self.store.quarantine() {
                Ok(moved) => {
                    if let Some(path) = moved {
                        self.reporter.warning(format!(
                            "Unreadable catalog data was moved to {}",
                            path.display()
                        ));
                    }
                    self.unreadable = false;
                }
                Err(e) => {
                    // Never overwrite data we could not read and could not move
                    self.reporter.error(format!(
                        "Failed to move unreadable catalog data aside, changes are not saved: {}",
                        e
                    ));
                    return false;
                }
            }
        }

        match self.store.save_books(&self.books) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(error = %e, "save failed, keeping in-memory changes");
                self.reporter.error(format!(
                    "Failed to save catalog to {}: {}",
                    self.store.location(),
                    e
                ));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::BookStatus;
    use crate::report::MessageLog;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn empty(log: &MessageLog) -> Catalog<InMemoryStore, &MessageLog> {
        Catalog::open(InMemoryStore::new(), log)
    }

    fn search_sample(log: &MessageLog) -> Catalog<InMemoryStore, &MessageLog> {
        let store = StoreFixture::new()
            .with_book("Test Book", "Test Author", 2024)
            .with_book("Another Book", "Another Author", 2023)
            .build();
        Catalog::open(store, log)
    }

    #[test]
    fn missing_data_opens_empty_without_error() {
        let log = MessageLog::new();
        let catalog = empty(&log);

        assert!(catalog.is_empty());
        assert!(log.at_level(MessageLevel::Error).is_empty());
        assert!(log.contains(MessageLevel::Info, "not found"));
    }

    #[test]
    fn loads_existing_books_in_order() {
        let log = MessageLog::new();
        let store = StoreFixture::new().with_books(3).build();
        let catalog = Catalog::open(store, &log);

        let ids: Vec<_> = catalog.list_books().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!(log.contains(MessageLevel::Info, "Loaded 3 book(s)"));
    }

    #[test]
    fn add_assigns_ids_and_persists() {
        let log = MessageLog::new();
        let mut catalog = empty(&log);

        let first = catalog.add_book("Test Book", "Test Author", 2024);
        let second = catalog.add_book("Other", "Someone", 1999);

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, BookStatus::Available);
        assert_eq!(catalog.store().save_count(), 2);
        assert_eq!(catalog.store().stored_books().unwrap(), catalog.snapshot());
        assert!(log.contains(MessageLevel::Success, "Book added: ID: 1"));
    }

    #[test]
    fn add_follows_the_current_maximum() {
        let log = MessageLog::new();
        let store = StoreFixture::new().with_books(4).build();
        let mut catalog = Catalog::open(store, &log);
        assert!(catalog.remove_book(2));

        assert_eq!(catalog.add_book("New", "Author", 2001).id, 5);
    }

    #[test]
    fn remove_existing_book() {
        let log = MessageLog::new();
        let mut catalog = search_sample(&log);

        assert!(catalog.remove_book(1));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.store().stored_books().unwrap().len(), 1);
        assert!(log.contains(MessageLevel::Success, "Book with ID 1 removed"));
    }

    #[test]
    fn remove_missing_book_changes_nothing() {
        let log = MessageLog::new();
        let mut catalog = search_sample(&log);
        let before = catalog.snapshot();

        assert!(!catalog.remove_book(99));
        assert_eq!(catalog.snapshot(), before);
        assert_eq!(catalog.store().save_count(), 0);
        assert!(log.contains(MessageLevel::Error, "Book with ID 99 not found"));
    }

    #[test]
    fn search_examples() {
        let log = MessageLog::new();
        let catalog = search_sample(&log);

        let found = catalog.search_books("Test Book");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Test Book");

        let found = catalog.search_books("Another Author");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].author, "Another Author");

        let found = catalog.search_books("2023");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].year, 2023);

        log.clear();
        assert!(catalog.search_books("nonexistent").is_empty());
        assert!(log.contains(MessageLevel::Error, "No books found for 'nonexistent'"));
    }

    #[test]
    fn search_does_not_persist() {
        let log = MessageLog::new();
        let catalog = search_sample(&log);
        catalog.search_books("Book");
        assert_eq!(catalog.store().save_count(), 0);
    }

    #[test]
    fn update_status_persists_the_change() {
        let log = MessageLog::new();
        let mut catalog = search_sample(&log);

        assert!(catalog.update_status(1, BookStatus::CheckedOut.label()));
        assert_eq!(catalog.find_book(1).unwrap().status, BookStatus::CheckedOut);
        assert_eq!(
            catalog.store().stored_books().unwrap()[0].status,
            BookStatus::CheckedOut
        );
        assert!(log.contains(MessageLevel::Success, "changed from 'в наличии' to 'выдана'"));
    }

    #[test]
    fn checked_out_book_can_be_returned() {
        let log = MessageLog::new();
        let store = StoreFixture::new()
            .with_checked_out_book("Dune", "Frank Herbert", 1965)
            .build();
        let mut catalog = Catalog::open(store, &log);

        assert!(catalog.update_status(1, "available"));
        assert_eq!(catalog.find_book(1).unwrap().status, BookStatus::Available);
        assert!(catalog
            .reporter()
            .contains(MessageLevel::Success, "changed from 'выдана' to 'в наличии'"));
    }

    #[test]
    fn update_status_rejects_unknown_status() {
        let log = MessageLog::new();
        let mut catalog = search_sample(&log);

        for id in [1, 2] {
            assert!(!catalog.update_status(id, "not-a-real-status"));
            assert_eq!(catalog.find_book(id).unwrap().status, BookStatus::Available);
        }
        assert_eq!(catalog.store().save_count(), 0);
        assert!(log.contains(MessageLevel::Error, "Valid statuses: 'в наличии', 'выдана'"));
    }

    #[test]
    fn update_status_of_missing_book_fails() {
        let log = MessageLog::new();
        let mut catalog = search_sample(&log);

        assert!(!catalog.update_status(7, "выдана"));
        assert_eq!(catalog.store().save_count(), 0);
        assert!(log.contains(MessageLevel::Error, "Book with ID 7 not found"));
    }

    #[test]
    fn end_to_end_scenario() {
        let log = MessageLog::new();
        let mut catalog = empty(&log);

        let book = catalog.add_book("A", "B", 2000);
        assert_eq!(book.id, 1);
        assert_eq!(catalog.list_books()[0].status, BookStatus::Available);

        assert!(catalog.update_status(1, "выдана"));
        assert_eq!(
            catalog.store().stored_books().unwrap()[0].status,
            BookStatus::CheckedOut
        );

        assert!(catalog.remove_book(1));
        assert!(catalog.is_empty());
        assert_eq!(catalog.store().raw(), Some("[]"));
    }

    #[test]
    fn failed_save_is_reported_and_memory_keeps_the_change() {
        let log = MessageLog::new();
        let mut catalog = empty(&log);
        catalog.store_mut().set_fail_writes(true);

        let book = catalog.add_book("A", "B", 2000);
        assert_eq!(catalog.find_book(book.id), Some(&book));
        assert!(catalog.store().raw().is_none());
        assert!(log.contains(MessageLevel::Error, "Failed to save catalog to memory"));

        catalog.store_mut().set_fail_writes(false);
        catalog.add_book("C", "D", 2001);
        assert_eq!(catalog.store().stored_books().unwrap().len(), 2);
    }

    #[test]
    fn lenient_open_over_corrupt_data_starts_empty() {
        let log = MessageLog::new();
        let catalog = Catalog::open(InMemoryStore::with_raw("{broken"), &log);

        assert!(catalog.is_empty());
        assert!(log.contains(MessageLevel::Error, "Failed to read memory"));
        // Untouched until something is saved
        assert_eq!(catalog.store().raw(), Some("{broken"));
    }

    #[test]
    fn first_save_after_corrupt_load_moves_the_data_aside() {
        let log = MessageLog::new();
        let mut catalog = Catalog::open(InMemoryStore::with_raw("{broken"), &log);

        catalog.add_book("A", "B", 2000);
        catalog.add_book("C", "D", 2001);

        assert_eq!(catalog.store().quarantined().to_vec(), vec!["{broken".to_string()]);
        assert_eq!(catalog.store().stored_books().unwrap().len(), 2);
        assert!(log.contains(MessageLevel::Warning, "moved to memory.corrupt-1"));
    }

    #[test]
    fn missing_fields_fail_the_whole_load() {
        let log = MessageLog::new();
        let raw = r#"[{"book_id": 1, "title": "A", "author": "B", "year": 1},
                      {"book_id": 2, "title": "C"}]"#;
        let catalog = Catalog::open(InMemoryStore::with_raw(raw), &log);

        assert!(catalog.is_empty());
        assert_eq!(log.at_level(MessageLevel::Error).len(), 1);
    }

    #[test]
    fn strict_open_over_corrupt_data_fails() {
        let log = MessageLog::new();
        let result = Catalog::open_strict(InMemoryStore::with_raw("{broken"), &log);
        assert!(matches!(result, Err(LibrisError::Serialization(_))));

        let result = Catalog::open_with(InMemoryStore::new(), &log, LoadPolicy::Strict);
        assert!(result.unwrap().is_empty());
    }

    #[test]
    fn duplicate_ids_are_reported_on_load() {
        let log = MessageLog::new();
        let books = vec![Book::new(1, "A", "B", 1), Book::new(1, "C", "D", 2)];
        let catalog = Catalog::open(InMemoryStore::with_books(&books).unwrap(), &log);

        assert_eq!(catalog.len(), 2);
        assert!(log.contains(MessageLevel::Warning, "Duplicate book IDs"));
    }
}
