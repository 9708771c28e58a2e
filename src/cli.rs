//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::{self, Session};
use itemtrack::output::OutputMode;

/// itemtrack - Track items and events from the terminal
#[derive(Parser, Debug)]
#[command(
    name = "itemtrack",
    version,
    about = "Track items and events from the terminal",
    long_about = "Keep a deduplicated list of items in a JSON file.\n\n\
                  Items with a start time are events; they can be listed in\n\
                  schedule order and searched by description."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Store document to use instead of the configured one
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Allow commands that save the store to drop records skipped as invalid
    #[arg(long, global = true)]
    pub discard_invalid: bool,

    /// Command to run (prints a short hint when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add an item (duplicates are ignored)
    Add {
        /// What the item is about
        description: String,

        /// Tag to attach (repeatable)
        #[arg(short, long = "tag")]
        tags: Vec<String>,

        /// Start time, which makes the item an event
        #[arg(short, long)]
        start: Option<String>,

        /// End time of the event
        #[arg(short, long, requires = "start")]
        end: Option<String>,

        /// Event priority: p0 (critical), p1 (high), p2 (medium), p3 (low)
        #[arg(short, long, requires = "start")]
        priority: Option<String>,
    },

    /// List all items
    List,

    /// Find items whose description contains a query
    Find {
        /// Text to search for
        query: String,

        /// Ignore case when matching
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// List events by start time, then priority
    Events {
        /// Only show events whose description contains this text
        #[arg(long)]
        find: Option<String>,

        /// Ignore case when matching
        #[arg(short, long)]
        ignore_case: bool,
    },

    /// Change an item
    Edit {
        /// Item number, as shown by `list`
        index: usize,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New start time (turns a plain item into an event)
        #[arg(short, long)]
        start: Option<String>,

        /// New end time
        #[arg(short, long)]
        end: Option<String>,

        /// New priority
        #[arg(short, long)]
        priority: Option<String>,
    },

    /// Remove an item
    Remove {
        /// Item number, as shown by `list`
        index: usize,
    },

    /// Validate the store document
    Check,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION"),
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("itemtrack v{}", env!("CARGO_PKG_VERSION"));
            println!("\nRun 'itemtrack --help' for usage");
            println!("Run 'itemtrack add \"something\"' to get started");
        }
        return Ok(());
    };

    if let Command::Version = command {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": env!("CARGO_PKG_VERSION")
                })
            );
        } else {
            println!("itemtrack v{}", env!("CARGO_PKG_VERSION"));
        }
        return Ok(());
    }

    let session = Session::open(cli.file, cli.config.as_deref(), cli.discard_invalid)?;

    match command {
        Command::Add {
            description,
            tags,
            start,
            end,
            priority,
        } => commands::add(
            &session,
            &description,
            tags,
            start.as_deref(),
            end.as_deref(),
            priority.as_deref(),
            output_mode,
        ),
        Command::List => commands::list(&session, output_mode),
        Command::Find { query, ignore_case } => {
            commands::find(&session, &query, ignore_case, output_mode)
        },
        Command::Events { find, ignore_case } => {
            commands::events(&session, find.as_deref(), ignore_case, output_mode)
        },
        Command::Edit {
            index,
            description,
            start,
            end,
            priority,
        } => commands::edit(
            &session,
            index,
            commands::ItemChanges {
                description,
                start,
                end,
                priority,
            },
            output_mode,
        ),
        Command::Remove { index } => commands::remove(&session, index, output_mode),
        Command::Check => commands::check(&session, output_mode),
        Command::Version => Ok(()),
    }
}
