use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    bin_name = "shelf",
    version,
    disable_help_subcommand = true
)]
#[command(about = "A small command-line library catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path of the JSON data file (overrides configuration)
    #[arg(long, global = true, value_name = "PATH", help_heading = "Options")]
    pub data: Option<PathBuf>,

    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, help_heading = "Options")]
    pub verbose: u8,
}

/// Availability as typed on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Availability {
    #[value(alias = "true")]
    Yes,
    #[value(alias = "false")]
    No,
}

impl From<Availability> for bool {
    fn from(value: Availability) -> bool {
        value == Availability::Yes
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List books (the default when no command is given)
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only books whose title or author contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Only available (yes) or lent (no) books
        #[arg(long, value_enum)]
        available: Option<Availability>,

        /// Sort by id, title, author or available
        #[arg(long)]
        sort: Option<String>,

        /// Reverse the sort order
        #[arg(long)]
        desc: bool,

        /// Also write the listed books to a .csv or .json file
        #[arg(long, value_name = "PATH")]
        export: Option<PathBuf>,

        /// Export format, overriding the file extension
        #[arg(long, value_name = "csv|json", requires = "export")]
        format: Option<String>,
    },

    /// Add a book
    #[command(display_order = 2)]
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        author: String,

        /// Mark the new book as lent out with `no`
        #[arg(long, value_enum)]
        available: Option<Availability>,
    },

    /// Flip availability of one or more books
    #[command(display_order = 3)]
    Toggle {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Delete a book
    #[command(alias = "rm", display_order = 4)]
    Delete { id: u64 },

    /// Search titles and authors
    #[command(display_order = 5)]
    Search {
        query: String,

        #[arg(long)]
        sort: Option<String>,

        #[arg(long)]
        desc: bool,
    },

    /// Add books from a CSV file with title and author columns
    #[command(display_order = 6)]
    Import {
        file: PathBuf,

        /// Report what would be added without saving
        #[arg(long)]
        dry_run: bool,
    },

    /// Show availability counts
    #[command(display_order = 7)]
    Stats,

    /// Show the resolved configuration
    #[command(display_order = 8)]
    Config,
}

impl Commands {
    /// Commands that write the data file and therefore take the lock.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            Commands::Add { .. }
                | Commands::Toggle { .. }
                | Commands::Delete { .. }
                | Commands::Import { dry_run: false, .. }
        )
    }
}
