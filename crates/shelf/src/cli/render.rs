//! # Rendering Module
//!
//! Turns library results into terminal text. Data is prepared here (widths,
//! padding, style names) and laid out by the templates in `templates/`.
//!
//! ## Table Layout
//!
//! Book lists are GitHub-style pipe tables:
//!
//! ```text
//! | ID | Title      | Author  | Available |
//! | -- | ---------- | ------- | --------- |
//! | 1  | Dune       | Herbert | Yes       |
//! ```
//!
//! Column widths are measured in terminal cells with `unicode-width`, and
//! padding is emitted outside the styled text so ANSI codes never skew the
//! alignment.
//!
//! ## Streams
//!
//! Info and success messages go to stdout, warnings and errors to stderr.
//! Color is decided per stream.

use super::styles::{names, SHELF_STYLES};
use super::templates::{CONFIG_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE, TABLE_TEMPLATE};
use minijinja::{context, Environment, Value};
use serde::Serialize;
use shelfapp::commands::{count_books, yes_no, CmdMessage, MessageLevel};
use shelfapp::model::{Book, CatalogStats};
use unicode_width::UnicodeWidthStr;

pub const EMPTY_CATALOG: &str = "No books found.";
pub const NO_MATCHES: &str = "No matches.";

const BOOK_HEADERS: [&str; 4] = ["ID", "Title", "Author", "Available"];

#[derive(Serialize)]
struct Cell {
    text: String,
    pad: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
pub struct ConfigEntry {
    pub key: &'static str,
    pub value: String,
    pub note: Option<String>,
}

fn environment(use_color: bool) -> Environment<'static> {
    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        SHELF_STYLES.apply(&name, &value.to_string(), use_color)
    });
    env
}

fn render<S: Serialize>(
    template: &str,
    data: S,
    use_color: bool,
) -> Result<String, minijinja::Error> {
    let mut output = environment(use_color).render_str(template, data)?;
    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

/// A pipe table. Each row holds `(text, style name)` cells, one per header.
pub fn render_table(
    headers: &[&str],
    rows: &[Vec<(String, &'static str)>],
    use_color: bool,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, (text, _)) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(text.width());
            }
        }
    }

    let cell = |text: String, width: usize, style: &'static str| {
        let pad = " ".repeat(width.saturating_sub(text.width()));
        Cell { text, pad, style }
    };

    let mut table: Vec<Vec<Cell>> = Vec::with_capacity(rows.len() + 2);
    table.push(
        headers
            .iter()
            .zip(&widths)
            .map(|(h, w)| cell(h.to_string(), *w, names::HEADER))
            .collect(),
    );
    table.push(
        widths
            .iter()
            .map(|w| cell("-".repeat(*w), *w, names::BORDER))
            .collect(),
    );
    for row in rows {
        table.push(
            row.iter()
                .zip(&widths)
                .map(|((text, style), w)| cell(text.clone(), *w, *style))
                .collect(),
        );
    }

    render(TABLE_TEMPLATE, context! { rows => table }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// The book table followed by a count line, or the empty-state line.
pub fn render_book_list(books: &[Book], filtered: bool, use_color: bool) -> String {
    if books.is_empty() {
        let line = if filtered { NO_MATCHES } else { EMPTY_CATALOG };
        return format!("{}\n", SHELF_STYLES.apply(names::MUTED, line, use_color));
    }

    let rows: Vec<Vec<(String, &'static str)>> = books
        .iter()
        .map(|book| {
            let availability = if book.available {
                names::AVAILABLE
            } else {
                names::UNAVAILABLE
            };
            vec![
                (book.id.to_string(), names::ID),
                (book.title.clone(), names::TITLE),
                (book.author.clone(), names::AUTHOR),
                (yes_no(book.available).to_string(), availability),
            ]
        })
        .collect();

    let mut output = render_table(&BOOK_HEADERS, &rows, use_color);
    output.push_str(&SHELF_STYLES.apply(names::MUTED, &count_books(books.len()), use_color));
    output.push('\n');
    output
}

pub fn render_messages(messages: &[&CmdMessage], use_color: bool) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data: Vec<MessageData> = messages
        .iter()
        .map(|msg| MessageData {
            content: msg.content.clone(),
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect();

    render(MESSAGES_TEMPLATE, context! { messages => data }, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

fn goes_to_stderr(message: &CmdMessage) -> bool {
    matches!(message.level, MessageLevel::Warning | MessageLevel::Error)
}

/// Print info/success to stdout and warning/error to stderr, keeping order
/// within each stream.
pub fn print_messages(messages: &[CmdMessage]) {
    let (errors, regular): (Vec<&CmdMessage>, Vec<&CmdMessage>) =
        messages.iter().partition(|m| goes_to_stderr(m));

    let out = render_messages(&regular, console::colors_enabled());
    if !out.is_empty() {
        print!("{}", out);
    }
    let err = render_messages(&errors, console::colors_enabled_stderr());
    if !err.is_empty() {
        eprint!("{}", err);
    }
}

pub fn render_stats(stats: &CatalogStats, use_color: bool) -> String {
    render(STATS_TEMPLATE, context! { stats => stats }, use_color).unwrap_or_else(|_| {
        format!(
            "Total: {}\nAvailable: {}\nUnavailable: {}\n",
            stats.total, stats.available, stats.unavailable
        )
    })
}

pub fn render_config(entries: &[ConfigEntry], use_color: bool) -> String {
    render(CONFIG_TEMPLATE, context! { entries => entries }, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}
