//! CSV and JSON writers for `list --export`.
//!
//! JSON output has the exact shape of the data file. CSV output has the header
//! `id,title,author,available` and writes availability as `true` / `false`.

use crate::error::{Result, ShelfError};
use crate::model::Book;
use crate::store::{encode, fs::write_atomic};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Infer the format from the file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        ext.parse().map_err(|_| {
            ShelfError::validation(format!(
                "Cannot infer export format from '{}' (use a .csv or .json file, or pass --format)",
                path.display()
            ))
        })
    }
}

impl FromStr for ExportFormat {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            other => Err(ShelfError::validation(format!(
                "Unsupported export format '{}' (expected csv or json)",
                other
            ))),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => f.write_str("csv"),
            ExportFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub path: PathBuf,
    pub format: ExportFormat,
}

impl ExportTarget {
    /// Explicit format wins over the extension.
    pub fn resolve(path: PathBuf, format: Option<&str>) -> Result<Self> {
        let format = match format {
            Some(name) => name.parse()?,
            None => ExportFormat::from_path(&path)?,
        };
        Ok(Self { path, format })
    }
}

pub fn to_csv(path: &Path, books: &[Book]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let io_err = |e: csv::Error| ShelfError::io(path, e.into());

    writer
        .write_record(["id", "title", "author", "available"])
        .map_err(io_err)?;
    for book in books {
        writer
            .write_record([
                book.id.to_string(),
                book.title.clone(),
                book.author.clone(),
                book.available.to_string(),
            ])
            .map_err(io_err)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ShelfError::io(path, e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| ShelfError::validation(e.to_string()))
}

pub fn to_json(path: &Path, books: &[Book]) -> Result<String> {
    encode(path, books)
}

pub fn write(target: &ExportTarget, books: &[Book]) -> Result<()> {
    let content = match target.format {
        ExportFormat::Csv => to_csv(&target.path, books)?,
        ExportFormat::Json => to_json(&target.path, books)?,
    };

    let name = target
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "export".to_string());
    let tmp = target
        .path
        .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()));
    write_atomic(&target.path, &tmp, &content)?;

    tracing::info!(
        path = %target.path.display(),
        format = %target.format,
        count = books.len(),
        "exported books"
    );
    Ok(())
}
