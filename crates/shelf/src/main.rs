//! # Shelf CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, and this
//! file only invokes `cli::run()` and turns errors into exit codes.
//!
//! ## Workspace Structure
//!
//! - `crates/shelfapp/`: the UI-agnostic catalog library
//! - `crates/shelf/`: this CLI, a client of `shelfapp`
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (crates/shelf/src/cli/)                          │
//! │  - clap argument parsing (setup.rs)                         │
//! │  - Context wiring + dispatch (commands.rs)                  │
//! │  - minijinja templates + console styles (render.rs)         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (crates/shelfapp/src/api.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands, catalog and storage (crates/shelfapp/src/)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - Library behavior is tested in `shelfapp`.
//! - `src/cli/` unit tests cover argument parsing and rendering of canned
//!   results.
//! - `tests/cli_e2e.rs` runs the real binary against temp data files.

mod cli;

use std::process::ExitCode;

fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
