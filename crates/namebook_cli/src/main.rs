//! Command-line caller for the name directory.
//!
//! # Responsibility
//! - Seed a store from an optional JSON fixture and run one operation.
//! - Own user-facing messaging for rejected mutations.

use clap::{Parser, Subcommand};
use log::error;
use namebook_core::{
    core_version, init_logging, load_fixture, ping, LogConfig, NameService, NameStore,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "namebook", version, about = "In-memory full-name directory")]
struct Cli {
    /// JSON fixture (`{"names": [...]}`) used to seed the store.
    #[arg(long)]
    fixture: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error). Defaults by build mode.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print every stored name.
    List,
    /// Look up one full name, ignoring case.
    Find { name: String },
    /// Add one full name verbatim.
    Add { name: String },
    /// Add `FIRST LAST` built from two single-word tokens.
    AddPerson { first: String, last: String },
    /// Rename an entry in place.
    Update { original: String, updated: String },
    /// Remove one entry.
    Remove { name: String },
    /// List entries with the given first name.
    First { name: String },
    /// List entries with the given last name.
    Last { name: String },
    /// Print core linkage info.
    Ping,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let started = LogConfig::from_raw(cli.log_level.as_deref(), log_dir)
            .and_then(|config| init_logging(&config));
        if let Err(err) = started {
            eprintln!("logging disabled: {err}");
        }
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            error!("event=cli_command module=cli status=error");
            eprintln!("{message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let mut service = NameService::new(NameStore::new());
    if let Some(path) = cli.fixture.as_ref() {
        let fixture = load_fixture(path).map_err(|err| err.to_string())?;
        service.load(&fixture);
    }

    let mutated = match cli.command {
        Command::List => {
            print_lines(&service.list());
            false
        }
        Command::Find { name } => {
            let found = service
                .lookup(&name)
                .ok_or_else(|| format!("no entry named `{name}`"))?;
            println!("{found}");
            false
        }
        Command::Add { name } => {
            service.register(&name).map_err(|err| err.to_string())?;
            true
        }
        Command::AddPerson { first, last } => {
            let stored = service
                .add_person(&first, &last)
                .map_err(|err| err.to_string())?;
            println!("added {stored}");
            true
        }
        Command::Update { original, updated } => {
            service
                .rename(&original, &updated)
                .map_err(|err| err.to_string())?;
            true
        }
        Command::Remove { name } => {
            service.unregister(&name).map_err(|err| err.to_string())?;
            true
        }
        Command::First { name } => {
            print_lines(&service.search_by_first_name(&name));
            false
        }
        Command::Last { name } => {
            print_lines(&service.search_by_last_name(&name));
            false
        }
        Command::Ping => {
            println!("namebook_core ping={}", ping());
            println!("namebook_core version={}", core_version());
            false
        }
    };

    if mutated {
        let json = serde_json::to_string_pretty(&service.snapshot())
            .map_err(|err| format!("failed to render names: {err}"))?;
        println!("{json}");
    }

    Ok(())
}

fn print_lines(names: &[String]) {
    for name in names {
        println!("{name}");
    }
}
