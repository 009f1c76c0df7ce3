//! # Context Initialization
//!
//! Every CLI invocation starts with [`initialize`], which:
//! 1. Loads [`ShelfConfig`] from the environment and config files.
//! 2. Resolves the data file (`--data` > `data_file` > OS data directory).
//! 3. Opens a [`FileStore`] on it. Mutating commands take the advisory lock
//!    unless `lock = false` is configured; read-only commands never do.
//!
//! The lock is held by the store inside [`ShelfContext::api`] and released
//! when the context is dropped.

use crate::api::ShelfApi;
use crate::config::ShelfConfig;
use crate::error::Result;
use crate::store::fs::FileStore;
use std::path::{Path, PathBuf};

pub struct ShelfContext {
    pub api: ShelfApi<FileStore>,
    pub config: ShelfConfig,
    pub data_file: PathBuf,
}

pub fn initialize(cwd: &Path, data_override: Option<&Path>, mutating: bool) -> Result<ShelfContext> {
    let config = ShelfConfig::load(cwd)?;
    initialize_with(config, cwd, data_override, mutating)
}

/// Like [`initialize`] with an already loaded configuration.
pub fn initialize_with(
    config: ShelfConfig,
    cwd: &Path,
    data_override: Option<&Path>,
    mutating: bool,
) -> Result<ShelfContext> {
    let data_file = config.resolve_data_file(cwd, data_override)?;
    let store = if mutating && config.lock {
        FileStore::locked(&data_file)?
    } else {
        FileStore::new(&data_file)
    };
    tracing::debug!(
        data_file = %data_file.display(),
        locked = store.is_locked(),
        "initialized store"
    );

    let api = ShelfApi::new(store).with_default_sort(config.sort_field()?);
    Ok(ShelfContext {
        api,
        config,
        data_file,
    })
}
