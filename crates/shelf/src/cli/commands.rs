//! # CLI Layer
//!
//! The CLI layer is the **only** place that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Picks process exit codes
//! - Handles argument parsing
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: clap turns shell arguments into [`Commands`]
//! 2. **Context Setup**: load configuration and open the store, locked for writers
//! 3. **Dispatch**: one `handle_*` per verb, each calling the API facade
//! 4. **Output**: hand results to `render.rs` and print them
//! 5. **Exit Codes**: partial failures map to a non-zero code without an error

use super::logging;
use super::render::{self, ConfigEntry};
use super::setup::{Cli, Commands};
use clap::Parser;
use shelfapp::api::{ListRequest, ShelfApi};
use shelfapp::commands::CmdResult;
use shelfapp::config::{global_config_file, ShelfConfig, PROJECT_CONFIG_FILE};
use shelfapp::error::{Result, ShelfError};
use shelfapp::init::initialize;
use shelfapp::model::BookId;
use shelfapp::store::fs::FileStore;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    // Naked `shelf` lists the catalog.
    let command = cli.command.unwrap_or(Commands::List {
        search: None,
        available: None,
        sort: None,
        desc: false,
        export: None,
        format: None,
    });

    let cwd = std::env::current_dir().map_err(|e| ShelfError::io(Path::new("."), e))?;

    // `config` must work even when the configuration is broken.
    if let Commands::Config = command {
        return handle_config(&cwd, cli.data.as_deref());
    }

    let mutating = command.is_mutating();
    let mut ctx = initialize(&cwd, cli.data.as_deref(), mutating)?;
    tracing::debug!(command = ?command, mutating, "dispatching");

    let api = &mut ctx.api;
    match command {
        Commands::List {
            search,
            available,
            sort,
            desc,
            export,
            format,
        } => {
            let request = ListRequest {
                search,
                available: available.map(bool::from),
                sort,
                descending: desc,
                export,
                format,
            };
            handle_list(api, &request)
        }
        Commands::Search { query, sort, desc } => {
            handle_search(api, &query, sort.as_deref(), desc)
        }
        Commands::Add {
            title,
            author,
            available,
        } => handle_add(api, &title, &author, available.map(bool::from)),
        Commands::Toggle { ids } => handle_toggle(api, &ids),
        Commands::Delete { id } => handle_delete(api, id),
        Commands::Import { file, dry_run } => handle_import(api, &file, dry_run),
        Commands::Stats => handle_stats(api),
        Commands::Config => handle_config(&cwd, cli.data.as_deref()),
    }
}

fn print_listing(result: &CmdResult) {
    print!(
        "{}",
        render::render_book_list(
            &result.listed_books,
            result.filtered,
            console::colors_enabled()
        )
    );
    render::print_messages(&result.messages);
}

fn handle_list(api: &ShelfApi<FileStore>, request: &ListRequest) -> Result<ExitCode> {
    let result = api.list_books(request)?;
    print_listing(&result);
    Ok(ExitCode::SUCCESS)
}

fn handle_search(
    api: &ShelfApi<FileStore>,
    query: &str,
    sort: Option<&str>,
    descending: bool,
) -> Result<ExitCode> {
    let result = api.search_books(query, sort, descending)?;
    print_listing(&result);
    Ok(ExitCode::SUCCESS)
}

fn handle_add(
    api: &mut ShelfApi<FileStore>,
    title: &str,
    author: &str,
    available: Option<bool>,
) -> Result<ExitCode> {
    let result = api.add_book(title, author, available)?;
    render::print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_toggle(api: &mut ShelfApi<FileStore>, ids: &[BookId]) -> Result<ExitCode> {
    let result = api.toggle_books(ids)?;
    render::print_messages(&result.messages);
    Ok(partial_failure_code(&result))
}

/// Per-item failures are reported as messages; the exit code still says
/// something went wrong.
fn partial_failure_code(result: &CmdResult) -> ExitCode {
    match result.failed_ids.first() {
        Some(id) => ExitCode::from(ShelfError::NotFound(*id).exit_code()),
        None => ExitCode::SUCCESS,
    }
}

fn handle_delete(api: &mut ShelfApi<FileStore>, id: BookId) -> Result<ExitCode> {
    let result = api.delete_book(id)?;
    render::print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_import(api: &mut ShelfApi<FileStore>, file: &Path, dry_run: bool) -> Result<ExitCode> {
    let result = api.import_books(file, dry_run)?;
    render::print_messages(&result.messages);
    Ok(ExitCode::SUCCESS)
}

fn handle_stats(api: &ShelfApi<FileStore>) -> Result<ExitCode> {
    let result = api.stats()?;
    if let Some(stats) = &result.stats {
        print!("{}", render::render_stats(stats, console::colors_enabled()));
    }
    Ok(ExitCode::SUCCESS)
}

/// `shelf config`: resolved values and the files they may come from.
fn handle_config(cwd: &Path, data_override: Option<&Path>) -> Result<ExitCode> {
    let config = ShelfConfig::read(cwd)?;
    let data_file = config.resolve_data_file(cwd, data_override)?;
    let defaults = ShelfConfig::default();

    let data_note = if data_override.is_some() {
        "(from --data)"
    } else if config.data_file.is_some() {
        "(configured)"
    } else {
        "(default)"
    };
    let default_note = |is_default: bool| is_default.then(|| "(default)".to_string());

    let mut entries = vec![
        ConfigEntry {
            key: "data_file",
            value: data_file.display().to_string(),
            note: Some(data_note.to_string()),
        },
        ConfigEntry {
            key: "default_sort",
            value: config.default_sort.clone(),
            note: match config.sort_field() {
                Err(_) => Some("(invalid)".to_string()),
                Ok(_) => default_note(config.default_sort == defaults.default_sort),
            },
        },
        ConfigEntry {
            key: "lock",
            value: config.lock.to_string(),
            note: default_note(config.lock == defaults.lock),
        },
    ];

    let project_file = cwd.join(PROJECT_CONFIG_FILE);
    entries.push(config_file_entry("project_config", project_file));
    if let Some(global) = global_config_file() {
        entries.push(config_file_entry("global_config", global));
    }

    print!(
        "{}",
        render::render_config(&entries, console::colors_enabled())
    );
    Ok(ExitCode::SUCCESS)
}

fn config_file_entry(key: &'static str, path: PathBuf) -> ConfigEntry {
    let note = (!path.exists()).then(|| "(not found)".to_string());
    ConfigEntry {
        key,
        value: path.display().to_string(),
        note,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfapp::commands::CmdMessage;

    #[test]
    fn partial_toggle_failure_uses_not_found_code() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::error("Book #9 not found."));
        result.failed_ids.push(9);
        assert_eq!(partial_failure_code(&result), ExitCode::from(3));
        assert_eq!(
            partial_failure_code(&CmdResult::default()),
            ExitCode::SUCCESS
        );
    }
}
