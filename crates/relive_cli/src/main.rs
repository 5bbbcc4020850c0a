//! Relive command-line entry point.
//!
//! Opens the journal database, loads the review store once and dispatches
//! one subcommand against it.

mod cli;
mod commands;
mod output;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use log::info;
use output::Output;
use relive_core::db::open_db;
use relive_core::{
    default_log_level, init_logging, LocalReviewRepository, ReviewStore, SqliteKeyValueStore,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    let conn = open_db(&cli.db).with_context(|| format!("failed to open journal `{}`", cli.db))?;
    let mut store = ReviewStore::new(LocalReviewRepository::new(SqliteKeyValueStore::new(&conn)));
    store.load_reviews();
    info!(
        "event=cli_start module=cli status=ok count={}",
        store.total_reviews()
    );

    commands::run(cli.command, &mut store, &Output::new(cli.json))
}
