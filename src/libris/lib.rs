//! # Libris Architecture
//!
//! Libris is a small library catalog: book records kept in one JSON file and
//! managed through an interactive menu. The catalog is a library first; the
//! menu-driven binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Menu loop, prompts, integer parsing of user input        │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog (api.rs)                                           │
//! │  - Owns the in-memory collection                            │
//! │  - Persists after every mutation, reports every outcome     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure logic over a slice of books                         │
//! │  - Returns CmdResult: affected/listed books and messages    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr. Feedback for the user
//! goes through the [`report::Reporter`] given to the catalog; diagnostics go to
//! `tracing`, which stays silent unless the host installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The catalog facade
//! - [`commands`]: Logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book` and `BookStatus`
//! - [`report`]: The reporting capability
//! - [`config`]: Configuration file
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod report;
pub mod store;
