//! scratchmark: heading outline operations on plain-text notes.
#![allow(clippy::multiple_crate_versions)]

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use scratchmark::commands::{self, CommandId};
use scratchmark::cursor::{Position, Selection};
use scratchmark::edit_plan::EditPlan;
use scratchmark::host::FileHost;
use scratchmark::{config, datestamp, logging, HeadingEngine};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scratchmark")]
#[command(about = "Heading outline operations on plain-text notes", long_about = None)]
struct Args {
    #[command(subcommand)]
    action: Action,

    /// Heading marker character (overrides scratchmark.toml)
    #[arg(long, global = true)]
    marker: Option<char>,
}

#[derive(Subcommand)]
enum Action {
    /// List available operations and their default hotkeys
    Commands,
    /// Write the final document of a plan saved with --dry-run
    Apply {
        /// Edit plan JSON file
        plan: PathBuf,
    },
    /// Run an operation on a file
    Run {
        /// Operation id, see `scratchmark commands`
        #[arg(value_parser = parse_command)]
        operation: CommandId,

        /// File to edit
        #[arg(value_name = "PATH")]
        file: PathBuf,

        /// Cursor line (0-indexed)
        #[arg(long, short = 'l', default_value_t = 0)]
        line: usize,

        /// Cursor column
        #[arg(long, short = 'c', default_value_t = 0)]
        column: usize,

        /// Selection end line (defaults to the cursor line)
        #[arg(long)]
        to_line: Option<usize>,

        /// Selection end column (defaults to the cursor column)
        #[arg(long)]
        to_column: Option<usize>,

        /// Date to stamp instead of today (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Print the edit plan as JSON instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

fn parse_command(s: &str) -> Result<CommandId, String> {
    CommandId::from_id(s).ok_or_else(|| {
        let known: Vec<&str> = CommandId::ALL.iter().map(|c| c.id()).collect();
        format!("unknown operation '{s}', expected one of: {}", known.join(", "))
    })
}

fn parse_date(s: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if let Some(marker) = args.marker {
        cfg.marker = marker.to_string();
    }
    logging::init(&cfg.log_level);

    match args.action {
        Action::Commands => {
            let json =
                serde_json::to_string_pretty(&commands::registry()).map_err(io::Error::other)?;
            println!("{json}");
        }
        Action::Apply { plan } => {
            let plan = EditPlan::load(&plan).map_err(io::Error::other)?;
            plan.apply().map_err(io::Error::other)?;
        }
        Action::Run {
            operation,
            file,
            line,
            column,
            to_line,
            to_column,
            date,
            dry_run,
        } => {
            let from = Position::new(line, column);
            let to = Position::new(to_line.unwrap_or(line), to_column.unwrap_or(column));
            let engine = HeadingEngine::new(cfg.format()).map_err(io::Error::other)?;
            let today = date.unwrap_or_else(datestamp::today);

            let mut host = FileHost::open(&file, Selection::new(from, to))
                .map_err(io::Error::other)?
                .dry_run(dry_run);
            commands::register_all(&mut host);

            let selection =
                commands::run(&mut host, &engine, operation, today).map_err(io::Error::other)?;

            for message in &host.plan().messages {
                eprintln!("{message}");
            }
            let json = if dry_run {
                serde_json::to_string_pretty(host.plan())
            } else {
                serde_json::to_string_pretty(&selection)
            }
            .map_err(io::Error::other)?;
            println!("{json}");
        }
    }

    Ok(())
}
