//! CLI type definitions.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "bookstore")]
#[command(about = "Interactive inventory manager for a bookstore catalog", long_about = None)]
pub(crate) struct Cli {
    /// Catalog database file (defaults to ./books_db)
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Config file to read instead of the default location
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Do not insert the stock books when creating a new catalog
    #[arg(long)]
    pub no_seed: bool,

    /// Only show errors in the diagnostic log
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}
