//! # CLI Behavior
//!
//! This is **one possible UI client** for shelf, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and output
//! formatting.
//!
//! ## Naked Execution (`shelf`)
//!
//! Running `shelf` with no arguments is `shelf list`.
//!
//! ## Search
//!
//! - `shelf search <term>`: explicit search command.
//! - `shelf list --search <term>`: the same filter, combinable with
//!   `--available` and `--export`.
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | success |
//! | 1 | configuration or unexpected error |
//! | 2 | invalid input (also clap usage errors) |
//! | 3 | book not found, including partial `toggle` failures |
//! | 4 | corrupt data file |
//! | 5 | I/O error |
//! | 6 | data file locked by another process |
//!
//! ## Module Structure
//!
//! - `commands`: per-command handlers that call the API and print results
//! - `logging`: tracing subscriber setup
//! - `render`: tables, messages and stats
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styles
//! - `templates`: output templates

mod commands;
mod logging;
mod render;
pub mod setup;
mod styles;
mod templates;

pub use commands::run;
