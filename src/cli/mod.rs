//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::domain::ProductId;
use output::OutputFormat;

/// shopcart - match shopping lists against a product catalog
#[derive(Parser, Debug)]
#[command(name = "shopcart", version, about, long_about = None)]
pub struct Cli {
    /// Catalog database file (overrides config file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import products from a JSON or CSV catalog
    Import(ImportArgs),

    /// Add a single product
    Add(AddArgs),

    /// Remove a product
    Remove(RemoveArgs),

    /// Rebuild and store the stem index
    Learn,

    /// List products with their package sizes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a product and its stems
    Show(ShowArgs),

    /// Match shopping-list lines to products
    Match(MatchArgs),

    /// Print the stems and quantities found in a text
    Explain(ExplainArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `import` command
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Catalog file (`.csv` rows of name,description; anything else is read as JSON)
    pub file: PathBuf,

    /// Skip re-learning the index afterwards
    #[arg(long)]
    pub no_learn: bool,
}

/// Arguments for the `add` command
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Product name
    pub name: String,

    /// Product description
    #[arg(short = 'D', long, default_value = "")]
    pub description: String,

    /// Skip re-learning the index afterwards
    #[arg(long)]
    pub no_learn: bool,
}

/// Arguments for the `remove` command
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Product ID (e.g. 3 or #3)
    pub id: ProductId,

    /// Skip re-learning the index afterwards
    #[arg(long)]
    pub no_learn: bool,
}

/// Arguments for the `ls` command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Product ID (e.g. 3 or #3)
    pub id: ProductId,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `match` command
#[derive(Parser, Debug)]
pub struct MatchArgs {
    /// Shopping-list lines (read from stdin when none are given and no --file)
    pub lines: Vec<String>,

    /// Read lines from a file, one item per line
    #[arg(long, conflicts_with = "lines")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `explain` command
#[derive(Parser, Debug)]
pub struct ExplainArgs {
    /// Text to analyse
    pub text: String,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
