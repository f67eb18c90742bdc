//! bookstore CLI
//!
//! Interactive inventory manager for a bookstore catalog kept in SQLite.

mod cli_types;
mod commands;
mod config;
mod console;
mod error;
mod logging;
mod menu;
mod table;

use std::io;
use std::path::PathBuf;

use bookstore_db::Book;
use clap::Parser;

use cli_types::Cli;
use config::Config;
use console::Console;
pub(crate) use error::CliError;

/// Where the catalog lives and what a freshly created one starts with.
struct StoragePlan {
    db_path: PathBuf,
    seed: Vec<Book>,
}

/// Combine flags and config. `--db` beats the config path; seeding needs
/// both `seed = true` and no `--no-seed`.
fn storage_plan(cli: &Cli, config: &Config) -> StoragePlan {
    let seed = if cli.no_seed || !config.seed {
        Vec::new()
    } else {
        bookstore_db::default_seed()
    };
    StoragePlan {
        db_path: config.database_path(cli.db.clone()),
        seed,
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = config::load_config(cli.config.as_deref())?;
    let StoragePlan { db_path, seed } = storage_plan(&cli, &config);

    let (conn, report) = bookstore_db::open_database(&db_path, &seed)?;
    if report.created {
        log::info!(
            "Created catalog at {} with {} books",
            db_path.display(),
            report.seeded
        );
    }
    log::debug!("Catalog holds {} books", bookstore_db::count_books(&conn)?);

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    menu::run_menu(conn, &mut console)
}
