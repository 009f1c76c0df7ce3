//! # CLI Templates
//!
//! Output layout lives in stand-alone minijinja files under `templates/`,
//! embedded here at compile time.
//!
//! Templates emit explicit line breaks and do as little logic as possible.
//! Widths, padding and the choice of style name are computed in `render.rs`
//! and handed to the template as plain values.

pub const TABLE_TEMPLATE: &str = include_str!("templates/table.jinja");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.jinja");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.jinja");
pub const CONFIG_TEMPLATE: &str = include_str!("templates/config.jinja");
