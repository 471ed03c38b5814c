//! # CLI Layer
//!
//! This module is **one possible client** of the catalog: an interactive menu read
//! from stdin. It is the only place that:
//! - Reads user input and writes to stdout
//! - Turns text into numbers (ids, years)
//! - Decides when the program ends
//!
//! ## Flow
//!
//! 1. `run()` parses flags, installs tracing, builds the context
//! 2. `menu_loop()` prints the menu and dispatches one `handle_*()` per choice
//! 3. A handler either finishes its action or aborts it on bad numeric input,
//!    without calling the catalog
//!
//! Ctrl-C and end of input (Ctrl-D, closed pipe) both count as the user
//! interrupting the program: "Interrupted by user." and a clean exit.

use super::print::{print_books, print_menu, ConsoleReporter, MENU};
use super::setup::{init_tracing, Cli};
use clap::Parser;
use directories::ProjectDirs;
use libris::api::{Catalog, LoadPolicy};
use libris::config::LibrisConfig;
use libris::error::{LibrisError, Result};
use libris::model::{BookId, BookStatus};
use libris::report::Reporter;
use libris::store::fs::FileStore;
use std::io::{self, BufRead, StdinLock, Write};
use std::path::PathBuf;
use std::str::FromStr;

const INTERRUPTED: &str = "Interrupted by user.";

struct AppContext {
    catalog: Catalog<FileStore, ConsoleReporter>,
    input: StdinLock<'static>,
}

impl AppContext {
    /// Prompts and reads one trimmed line. `None` once input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            println!();
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

enum Flow {
    Continue,
    Exit,
    Interrupted,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    init_interrupt();

    let mut ctx = init_context(&cli)?;
    menu_loop(&mut ctx);
    Ok(())
}

/// Ctrl-C ends the session the way end of input does.
fn init_interrupt() {
    let installed = ctrlc::set_handler(|| {
        println!();
        ConsoleReporter.error(INTERRUPTED);
        std::process::exit(0);
    });
    if let Err(e) = installed {
        tracing::warn!(error = %e, "could not install the Ctrl-C handler");
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config_dir = cli.config_dir.clone().or_else(|| {
        ProjectDirs::from("com", "libris", "libris").map(|dirs| dirs.config_dir().to_path_buf())
    });
    let config = match config_dir {
        Some(dir) => LibrisConfig::load(&dir).unwrap_or_else(|e| {
            ConsoleReporter.warning(format!("Ignoring {}: {}", dir.display(), e));
            LibrisConfig::default()
        }),
        None => LibrisConfig::default(),
    };

    let database: PathBuf = cli
        .database
        .clone()
        .unwrap_or_else(|| config.database.clone());
    let policy = if cli.strict {
        LoadPolicy::Strict
    } else {
        config.load_policy()
    };
    tracing::debug!(database = %database.display(), ?policy, "opening catalog");

    let catalog = Catalog::open_with(FileStore::new(database), ConsoleReporter, policy)?;
    Ok(AppContext {
        catalog,
        input: io::stdin().lock(),
    })
}

fn menu_loop(ctx: &mut AppContext) {
    loop {
        print_menu();
        let choice = match ctx.ask("Enter command number: ") {
            Ok(Some(choice)) => choice,
            Ok(None) => {
                ConsoleReporter.error(INTERRUPTED);
                return;
            }
            Err(e) => {
                ConsoleReporter.error(format!("Unexpected error: {}", e));
                return;
            }
        };

        let outcome = match choice.as_str() {
            "1" => handle_add(ctx),
            "2" => handle_remove(ctx),
            "3" => handle_search(ctx),
            "4" => handle_list(ctx),
            "5" => handle_status(ctx),
            "6" => Ok(Flow::Exit),
            _ => Err(LibrisError::Input(format!(
                "Unknown command '{}'. Enter a number from 1 to {}.",
                choice,
                MENU.len()
            ))),
        };

        match outcome {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                ConsoleReporter.info("Goodbye!");
                return;
            }
            Ok(Flow::Interrupted) => {
                ConsoleReporter.error(INTERRUPTED);
                return;
            }
            Err(LibrisError::Input(message)) => ConsoleReporter.error(message),
            Err(e) => ConsoleReporter.error(format!("Unexpected error: {}", e)),
        }
    }
}

fn parse_number<T: FromStr>(input: &str, what: &str) -> Result<T> {
    input
        .parse()
        .map_err(|_| LibrisError::Input(format!("{} must be a number.", what)))
}

fn parse_id(input: &str) -> Result<BookId> {
    input
        .parse()
        .map_err(|_| LibrisError::Input("Book ID must be a positive whole number.".to_string()))
}

fn handle_add(ctx: &mut AppContext) -> Result<Flow> {
    let Some(title) = ctx.ask("Enter the title: ")? else {
        return Ok(Flow::Interrupted);
    };
    let Some(author) = ctx.ask("Enter the author: ")? else {
        return Ok(Flow::Interrupted);
    };
    let Some(year) = ctx.ask("Enter the publication year: ")? else {
        return Ok(Flow::Interrupted);
    };
    let year: i32 = parse_number(&year, "Publication year")?;

    ctx.catalog.add_book(&title, &author, year);
    Ok(Flow::Continue)
}

fn handle_remove(ctx: &mut AppContext) -> Result<Flow> {
    let Some(id) = ctx.ask("Enter the book ID: ")? else {
        return Ok(Flow::Interrupted);
    };
    let id = parse_id(&id)?;

    ctx.catalog.remove_book(id);
    Ok(Flow::Continue)
}

fn handle_search(ctx: &mut AppContext) -> Result<Flow> {
    let Some(query) = ctx.ask("Enter a search query (title, author or year): ")? else {
        return Ok(Flow::Interrupted);
    };

    ctx.catalog.search_books(&query);
    Ok(Flow::Continue)
}

fn handle_list(ctx: &mut AppContext) -> Result<Flow> {
    print_books(&ctx.catalog);
    Ok(Flow::Continue)
}

fn handle_status(ctx: &mut AppContext) -> Result<Flow> {
    let Some(id) = ctx.ask("Enter the book ID: ")? else {
        return Ok(Flow::Interrupted);
    };
    let id = parse_id(&id)?;

    if ctx.catalog.find_book(id).is_none() {
        ConsoleReporter.error(format!("Book with ID {} not found. Try again.", id));
        return Ok(Flow::Continue);
    }

    let prompt = format!(
        "Enter the new status ('{}' or '{}'): ",
        BookStatus::Available,
        BookStatus::CheckedOut
    );
    let Some(status) = ctx.ask(&prompt)? else {
        return Ok(Flow::Interrupted);
    };

    ctx.catalog.update_status(id, &status);
    Ok(Flow::Continue)
}
