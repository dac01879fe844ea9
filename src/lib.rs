//! shopcart - match free-text shopping lists against a product catalog

pub mod cli;
pub mod domain;
pub mod infra;
pub mod matching;
pub mod store;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_add, handle_completions, handle_explain, handle_import, handle_learn, handle_list,
        handle_match, handle_remove, handle_show,
    },
};

/// Installs the stderr log subscriber. `RUST_LOG` overrides `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load()?;
    let db_path = config.database_path(cli.db.as_ref());
    let auto_learn = config.auto_learn();

    match &cli.command {
        Command::Import(args) => handle_import(args, &db_path, auto_learn),
        Command::Add(args) => handle_add(args, &db_path, auto_learn),
        Command::Remove(args) => handle_remove(args, &db_path, auto_learn),
        Command::Learn => handle_learn(&db_path),
        Command::List(args) => handle_list(args, &db_path),
        Command::Show(args) => handle_show(args, &db_path),
        Command::Match(args) => handle_match(args, &db_path),
        Command::Explain(args) => handle_explain(args),
        Command::Completions(args) => handle_completions(args),
    }
}
