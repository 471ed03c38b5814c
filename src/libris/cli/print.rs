use colored::Colorize;
use libris::api::Catalog;
use libris::commands::{CmdMessage, MessageLevel};
use libris::model::Book;
use libris::report::Reporter;
use libris::store::DataStore;

pub(super) const MENU: [&str; 6] = [
    "Add a book",
    "Remove a book",
    "Search books",
    "List all books",
    "Change book status",
    "Exit",
];

/// Prints reported messages to stdout, colored by level.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&self, message: CmdMessage) {
        print_message(&message);
    }
}

fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.dimmed()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

pub(super) fn print_menu() {
    println!();
    println!("{}", "Available commands:".bold());
    for (i, entry) in MENU.iter().enumerate() {
        println!("{}. {}", i + 1, entry);
    }
}

pub(super) fn print_books<S: DataStore>(catalog: &Catalog<S, ConsoleReporter>) {
    let books: &[Book] = catalog.list_books();
    if books.is_empty() {
        ConsoleReporter.error("The library is empty.");
        return;
    }

    println!();
    println!("{}", "Books:".bold());
    for book in books {
        ConsoleReporter.info(book.to_string());
    }
}
