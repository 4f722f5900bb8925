//! `meetq` CLI — resolve meeting windows from a JSON day schedule.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve windows (stdin → stdout, JSON array of {start, end})
//! meetq find < day.json
//!
//! # Read from a file, print one HH:MM-HH:MM line per window
//! meetq find -i day.json --format text
//!
//! # Include which attendees the windows honor
//! meetq find -i day.json --explain
//!
//! # Show the merged busy ranges for everyone in the request
//! meetq busy -i day.json
//! ```
//!
//! The input document holds the day's `events` and the meeting `request`:
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "when": {"start": 540, "end": 570}, "attendees": ["A"]}],
//!   "request": {"duration": 30, "attendees": ["A"], "optional_attendees": ["B"]}
//! }
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::range::clock;
use meeting_finder::{busy_ranges, resolve, Event, MeetingRequest, TimeRange};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetq",
    version,
    about = "Find the windows in a day where a meeting fits"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log resolver decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the windows in which the requested meeting can be held
    Find {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Also report whether optional attendees were honored
        #[arg(long)]
        explain: bool,
    },
    /// Show the merged busy ranges of the requested attendees
    Busy {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// The document read from the input.
#[derive(Deserialize)]
struct Schedule {
    #[serde(default)]
    events: Vec<Event>,
    request: MeetingRequest,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            output,
            format,
            explain,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let availability = resolve(&schedule.events, &schedule.request);
            tracing::info!(
                windows = availability.windows.len(),
                coverage = ?availability.coverage,
                "resolved meeting windows"
            );

            let rendered = match (format, explain) {
                (Format::Json, true) => serde_json::to_string_pretty(&availability)?,
                (Format::Json, false) => serde_json::to_string_pretty(&availability.windows)?,
                (Format::Text, explain) => {
                    let mut text = render_text(&availability.windows);
                    if explain {
                        text.push_str(&format!("coverage: {}\n", availability.coverage.as_str()));
                    }
                    text
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            format,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let busy = busy_ranges(&schedule.events, &schedule.request);

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&busy)?,
                Format::Text => render_text(&busy),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_schedule(path: Option<&str>) -> Result<Schedule> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse schedule JSON")
}

/// One `HH:MM-HH:MM` line per range.
fn render_text(ranges: &[TimeRange]) -> String {
    ranges
        .iter()
        .map(|r| format!("{}-{}\n", clock(r.start()), clock(r.end())))
        .collect()
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
