use crate::catalog;
use crate::commands::{count_books, CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::store::DataStore;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A CSV row that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRow {
    pub line: u64,
    pub title: String,
    pub author: String,
}

/// Rows read from a CSV source, plus one warning per skipped row.
#[derive(Debug, Default)]
pub struct ParsedCsv {
    pub rows: Vec<ImportRow>,
    pub skipped: Vec<String>,
}

/// Parse a CSV whose header has at least `title` and `author` columns.
/// Header names are matched case-insensitively; other columns are ignored.
pub fn parse_csv<R: Read>(source: R) -> Result<ParsedCsv> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| ShelfError::validation(format!("Unreadable CSV header: {}", e)))?
        .clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let (title_col, author_col) = match (column("title"), column("author")) {
        (Some(t), Some(a)) => (t, a),
        _ => {
            return Err(ShelfError::validation(
                "CSV header must contain 'title' and 'author' columns",
            ))
        }
    };

    let mut parsed = ParsedCsv::default();
    for (i, record) in reader.records().enumerate() {
        // Header is line 1.
        let fallback_line = i as u64 + 2;
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                parsed
                    .skipped
                    .push(format!("Line {} skipped: malformed row ({})", line, e));
                continue;
            }
        };
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        let title = record.get(title_col).unwrap_or("");
        let author = record.get(author_col).unwrap_or("");
        let missing = match (title.is_empty(), author.is_empty()) {
            (true, true) => Some("missing title and author"),
            (true, false) => Some("missing title"),
            (false, true) => Some("missing author"),
            (false, false) => None,
        };
        match missing {
            Some(reason) => parsed
                .skipped
                .push(format!("Line {} skipped: {}", line, reason)),
            None => parsed.rows.push(ImportRow {
                line,
                title: title.to_string(),
                author: author.to_string(),
            }),
        }
    }
    Ok(parsed)
}

/// Append every valid row of the CSV file in one load/save cycle.
/// With `dry_run` nothing is saved.
pub fn run<S: DataStore>(store: &mut S, path: &Path, dry_run: bool) -> Result<CmdResult> {
    let file = File::open(path).map_err(|e| ShelfError::io(path, e))?;
    let parsed = parse_csv(file)?;

    let mut books = store.load()?;
    let mut result = CmdResult::default();

    for row in &parsed.rows {
        let book = catalog::add(&mut books, &row.title, &row.author)?;
        let line = if dry_run {
            format!("Would add: {} by {}", book.title, book.author)
        } else {
            format!("Added book #{}: {} by {}", book.id, book.title, book.author)
        };
        result.add_message(CmdMessage::info(line));
        result.affected_books.push(book);
    }
    for warning in &parsed.skipped {
        result.add_message(CmdMessage::warning(warning.clone()));
    }

    let imported = result.affected_books.len();
    let skipped = parsed.skipped.len();
    let skipped_rows = if skipped == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", skipped)
    };

    if dry_run {
        result.add_message(CmdMessage::success(format!(
            "Dry run: would import {}, skipped {}.",
            count_books(imported),
            skipped_rows
        )));
    } else {
        if imported > 0 {
            store.save(&books)?;
        }
        result.add_message(CmdMessage::success(format!(
            "Imported {}, skipped {}.",
            count_books(imported),
            skipped_rows
        )));
    }

    tracing::info!(
        path = %path.display(),
        imported,
        skipped,
        dry_run,
        "import finished"
    );
    Ok(result)
}
