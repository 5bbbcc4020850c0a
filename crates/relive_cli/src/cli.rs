use clap::{Args, Parser, Subcommand};

/// Relive - a local book review journal
#[derive(Parser)]
#[command(name = "relive")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the journal database
    #[arg(long, global = true, env = "RELIVE_DB", default_value = "relive.sqlite3")]
    pub db: String,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, global = true, env = "RELIVE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, global = true, env = "RELIVE_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every review in journal order
    List,
    /// Show one review
    Show {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Write a new review
    Add(AddArgs),
    /// Change fields of an existing review
    Edit(EditArgs),
    /// Delete a review (missing ids are ignored)
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Filter reviews
    Search(SearchArgs),
    /// Show review count and average rating
    Stats,
    /// List tags in use
    Tags,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,

    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub isbn: Option<String>,

    /// Score, usually 1-5
    #[arg(long)]
    pub rating: f64,

    /// Review body
    #[arg(long, default_value = "")]
    pub review: String,

    #[arg(long, default_value = "")]
    pub summary: String,

    #[arg(long)]
    pub quote: Option<String>,

    /// Tag (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Date finished, YYYY-MM-DD (defaults to today)
    #[arg(long)]
    pub read_date: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    #[arg(value_name = "ID")]
    pub id: String,

    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub author: Option<String>,

    #[arg(long, conflicts_with = "clear_isbn")]
    pub isbn: Option<String>,

    #[arg(long)]
    pub clear_isbn: bool,

    #[arg(long)]
    pub rating: Option<f64>,

    #[arg(long)]
    pub review: Option<String>,

    #[arg(long)]
    pub summary: Option<String>,

    #[arg(long, conflicts_with = "clear_quote")]
    pub quote: Option<String>,

    #[arg(long)]
    pub clear_quote: bool,

    /// Replace all tags (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    #[arg(long)]
    pub read_date: Option<String>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Text matched against title, author and review body
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Minimum rating
    #[arg(long)]
    pub min_rating: Option<f64>,

    /// Match any of these tags (repeatable)
    #[arg(short, long, value_name = "TAG")]
    pub tag: Vec<String>,

    /// Earliest read date, inclusive
    #[arg(long)]
    pub from: Option<String>,

    /// Latest read date, inclusive
    #[arg(long)]
    pub to: Option<String>,
}
