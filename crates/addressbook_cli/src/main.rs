//! Address book command-line entry point.
//!
//! # Responsibility
//! - Parse exactly one command flag plus store/logging options.
//! - Open the store and dispatch to the matching console handler.

use addressbook_core::{
    default_log_level, init_logging, run_add, run_delete, run_list, run_search, Console,
    ContactService, SqliteContactRepository, Store, DEFAULT_DB_PATH,
};
use anyhow::{Context, Result};
use clap::{Args, Parser};
use log::info;
use std::io;
use std::path::PathBuf;

/// Manage a local address book.
#[derive(Debug, Parser)]
#[command(name = "addressbook", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    action: Action,

    /// Path to the address book store
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DB_PATH)]
    db: PathBuf,

    /// Write rotating log files to this directory
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn or error
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct Action {
    /// Register contacts interactively
    #[arg(short = 'a', long)]
    add: bool,

    /// List every contact
    #[arg(short = 'v', long)]
    view: bool,

    /// Search contacts by name
    #[arg(short = 's', long)]
    search: bool,

    /// Delete a contact by name
    #[arg(short = 'd', long)]
    delete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Add,
    View,
    Search,
    Delete,
}

impl Action {
    fn command(&self) -> Command {
        if self.add {
            Command::Add
        } else if self.view {
            Command::View
        } else if self.search {
            Command::Search
        } else {
            Command::Delete
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(&cli)?;
    run(&cli)
}

fn setup_logging(cli: &Cli) -> Result<()> {
    let log_dir = cli
        .log_dir
        .as_deref()
        .map(std::path::absolute)
        .transpose()
        .context("failed to resolve log directory")?;
    let level = match (&cli.log_level, &log_dir) {
        (Some(level), _) => level.as_str(),
        (None, Some(_)) => default_log_level(),
        (None, None) => "warn",
    };
    let log_dir = log_dir
        .as_deref()
        .map(|dir| {
            dir.to_str()
                .with_context(|| format!("log directory `{}` is not UTF-8", dir.display()))
        })
        .transpose()?;

    init_logging(level, log_dir).map_err(anyhow::Error::msg)
}

fn run(cli: &Cli) -> Result<()> {
    let command = cli.action.command();
    info!(
        "event=cli_start module=cli status=ok command={:?} core_version={}",
        command,
        addressbook_core::core_version()
    );

    let store = Store::open(&cli.db).context("failed to open address book")?;
    let service = ContactService::new(SqliteContactRepository::new(&store));
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match command {
        Command::Add => {
            run_add(&service, &mut console)?;
        }
        Command::View => {
            run_list(&service, &mut console)?;
        }
        Command::Search => {
            run_search(&service, &mut console)?;
        }
        Command::Delete => {
            run_delete(&service, &mut console)?;
        }
    }

    Ok(())
}
