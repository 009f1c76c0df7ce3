//! # Configuration
//!
//! Shelf configuration is loaded with [`confique`] from environment variables
//! and TOML files.
//!
//! ## Storage Hierarchy
//!
//! Values are resolved in priority order:
//! 1. **Environment variables**: `SHELF_DATA_FILE`, `SHELF_DEFAULT_SORT`, `SHELF_LOCK`.
//! 2. **Project config**: `.shelf.toml` in the working directory.
//! 3. **Global config**: `shelf.toml` in the OS config directory (via `directories`).
//! 4. **Compiled defaults**: `#[config(default = ...)]`.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `data_file` | `<data dir>/books.json` | Location of the JSON collection |
//! | `default_sort` | `id` | Sort field for `list` and `search` when `--sort` is absent |
//! | `lock` | `true` | Take `<data_file>.lock` while mutating |
//!
//! The `--data` flag overrides `data_file`. Relative paths are resolved
//! against the working directory.

use crate::error::{Result, ShelfError};
use crate::model::SortField;
use confique::Config;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILE: &str = ".shelf.toml";
pub const GLOBAL_CONFIG_FILE: &str = "shelf.toml";
pub const DEFAULT_DATA_FILE: &str = "books.json";

/// Configuration for shelf, stored in `shelf.toml` / `.shelf.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Path of the JSON collection.
    #[config(env = "SHELF_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// One of: id, title, author, available.
    #[config(env = "SHELF_DEFAULT_SORT", default = "id")]
    pub default_sort: String,

    /// Guard mutating commands with a lock file next to the data file.
    #[config(env = "SHELF_LOCK", default = true)]
    pub lock: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            default_sort: "id".to_string(),
            lock: true,
        }
    }
}

impl ShelfConfig {
    /// Load from the environment, `<cwd>/.shelf.toml` and the global file.
    pub fn load(cwd: &Path) -> Result<Self> {
        let config = Self::read(cwd)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`ShelfConfig::load`], but values are not checked. Only TOML
    /// syntax and type errors fail.
    pub fn read(cwd: &Path) -> Result<Self> {
        let mut builder = Self::builder()
            .env()
            .file(cwd.join(PROJECT_CONFIG_FILE));
        if let Some(global) = global_config_file() {
            builder = builder.file(global);
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Load from explicit files only, highest priority first. Missing files
    /// are skipped.
    pub fn load_files(files: &[PathBuf]) -> Result<Self> {
        let mut builder = Self::builder();
        for file in files {
            builder = builder.file(file);
        }
        let config = builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.sort_field().map(|_| ())
    }

    pub fn sort_field(&self) -> Result<SortField> {
        self.default_sort
            .parse()
            .map_err(|e: ShelfError| ShelfError::Config(format!("default_sort: {}", e)))
    }

    /// `--data` override, then `data_file`, then the OS data directory.
    pub fn resolve_data_file(&self, cwd: &Path, data_override: Option<&Path>) -> Result<PathBuf> {
        let chosen = data_override
            .map(Path::to_path_buf)
            .or_else(|| self.data_file.clone());
        match chosen {
            Some(path) if path.is_absolute() => Ok(path),
            Some(path) => Ok(cwd.join(path)),
            None => default_data_file(),
        }
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "shelf")
}

pub fn global_config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(GLOBAL_CONFIG_FILE))
}

pub fn default_data_file() -> Result<PathBuf> {
    project_dirs()
        .map(|dirs| dirs.data_dir().join(DEFAULT_DATA_FILE))
        .ok_or_else(|| {
            ShelfError::Config(
                "Could not determine a data directory; set data_file or pass --data".to_string(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = ShelfConfig::default();
        assert_eq!(config.default_sort, "id");
        assert!(config.lock);
        assert_eq!(config.data_file, None);
    }

    #[test]
    fn missing_files_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let config = ShelfConfig::load_files(&[dir.path().join("absent.toml")]).unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn earlier_files_take_priority() {
        let dir = tempdir().unwrap();
        let project = dir.path().join(".shelf.toml");
        let global = dir.path().join("shelf.toml");
        fs::write(&project, "default_sort = \"title\"\n").unwrap();
        fs::write(&global, "default_sort = \"author\"\nlock = false\n").unwrap();

        let config = ShelfConfig::load_files(&[project, global]).unwrap();
        assert_eq!(config.sort_field().unwrap(), SortField::Title);
        assert!(!config.lock);
    }

    #[test]
    fn invalid_default_sort_is_a_config_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(".shelf.toml");
        fs::write(&file, "default_sort = \"pages\"\n").unwrap();
        assert!(matches!(
            ShelfConfig::load_files(&[file]),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn read_keeps_invalid_values_for_inspection() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            "default_sort = \"pages\"\n",
        )
        .unwrap();
        let config = ShelfConfig::read(dir.path()).unwrap();
        assert_eq!(config.default_sort, "pages");
        assert!(config.sort_field().is_err());
        assert!(matches!(
            ShelfConfig::load(dir.path()),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let dir = tempdir().unwrap();
        let file = dir.path().join(".shelf.toml");
        fs::write(&file, "lock = maybe\n").unwrap();
        assert!(matches!(
            ShelfConfig::load_files(&[file]),
            Err(ShelfError::Config(_))
        ));
    }

    #[test]
    fn data_override_beats_config_and_relative_paths_use_cwd() {
        let cwd = Path::new("/work");
        let config = ShelfConfig {
            data_file: Some(PathBuf::from("catalog/books.json")),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_data_file(cwd, None).unwrap(),
            PathBuf::from("/work/catalog/books.json")
        );
        assert_eq!(
            config
                .resolve_data_file(cwd, Some(Path::new("/tmp/other.json")))
                .unwrap(),
            PathBuf::from("/tmp/other.json")
        );
    }
}
