//! # Shelf Architecture
//!
//! Shelf is a **UI-agnostic library catalog**: a small collection of books
//! persisted as one JSON file. The `shelf` binary is one client of it.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (the `shelf` crate)                                    │
//! │  - Parses arguments, renders output, picks exit codes       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (sort names, export formats, text)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One load, one catalog operation, at most one save        │
//! │  - Returns CmdResult with books and leveled messages        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────┬──────────────────────────────┐
//! │  Catalog (catalog.rs)        │  Storage (store/)            │
//! │  - Pure Vec<Book> operations │  - DataStore trait           │
//! │                              │  - FileStore, InMemoryStore  │
//! └──────────────────────────────┴──────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Terminal I/O in Core
//!
//! Nothing in this crate writes to stdout or stderr or exits the process.
//! Diagnostics go through `tracing`; the client decides where they end up.
//!
//! ## Testing Strategy
//!
//! 1. **Catalog** and **commands**: unit tests over plain vectors and
//!    [`store::memory::InMemoryStore`].
//! 2. **API**: argument normalization.
//! 3. **Store**: file round-trips, corruption and locking against temp dirs
//!    (see `tests/`).

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
