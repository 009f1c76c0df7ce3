//! Named terminal styles for shelf output.
//!
//! Templates never pick colors. They tag text with a semantic name through the
//! `style` filter (`{{ book.title | style("title") }}`) and the registry below
//! maps the name to a `console::Style`. An empty name leaves the text plain.
//!
//! All styles are registered once through `once_cell::sync::Lazy`.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Style names used in templates and render code.
pub mod names {
    pub const HEADER: &str = "header";
    pub const BORDER: &str = "border";
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const AUTHOR: &str = "author";
    pub const AVAILABLE: &str = "available";
    pub const UNAVAILABLE: &str = "unavailable";
    pub const MUTED: &str = "muted";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

#[derive(Debug, Clone, Default)]
pub struct Styles {
    styles: HashMap<String, Style>,
}

impl Styles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    #[cfg(test)]
    pub fn has(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Apply a named style. Unknown names and `use_color = false` give plain text.
    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.clone().force_styling(true).apply_to(text).to_string(),
            _ => text.to_string(),
        }
    }
}

pub static SHELF_STYLES: Lazy<Styles> = Lazy::new(|| {
    Styles::new()
        .add(names::HEADER, Style::new().bold())
        .add(names::BORDER, Style::new().dim())
        .add(names::ID, Style::new().yellow())
        .add(names::TITLE, Style::new().bold())
        .add(names::AUTHOR, Style::new())
        .add(names::AVAILABLE, Style::new().green())
        .add(names::UNAVAILABLE, Style::new().red())
        .add(names::MUTED, Style::new().dim().italic())
        .add(names::INFO, Style::new())
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow())
        .add(names::ERROR, Style::new().red().bold())
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_returns_text_unchanged() {
        assert_eq!(SHELF_STYLES.apply(names::ERROR, "boom", false), "boom");
    }

    #[test]
    fn color_mode_wraps_in_ansi_codes() {
        let styled = SHELF_STYLES.apply(names::UNAVAILABLE, "No", true);
        assert!(styled.contains("No"));
        assert!(styled.starts_with("\u{1b}["));
    }

    #[test]
    fn unknown_or_empty_name_is_plain() {
        assert_eq!(SHELF_STYLES.apply("", "x", true), "x");
        assert_eq!(SHELF_STYLES.apply("nope", "x", true), "x");
    }

    #[test]
    fn every_name_is_registered() {
        for name in [
            names::HEADER,
            names::BORDER,
            names::ID,
            names::TITLE,
            names::AUTHOR,
            names::AVAILABLE,
            names::UNAVAILABLE,
            names::MUTED,
            names::INFO,
            names::SUCCESS,
            names::WARNING,
            names::ERROR,
        ] {
            assert!(SHELF_STYLES.has(name), "missing style {}", name);
        }
    }
}
