//! `avail` CLI: compute family availability and rank meeting times from JSON.
//!
//! ## Usage
//!
//! ```sh
//! # Individual and common availability (stdin → stdout)
//! cat query.json | avail availability
//!
//! # Read from file, write to file, override the lattice
//! avail availability -i query.json -o result.json --granularity 15
//!
//! # Rank 60-minute meeting slots for two required attendees
//! avail meet -i query.json --duration 60 --require parent,kid
//!
//! # Load engine settings from a config file and align to a timezone
//! avail meet -i query.json --duration 30 --config engine.json --timezone Europe/Zurich
//! ```
//!
//! A query document holds `start_date`, `end_date`, `roster`, `events`, and the
//! optional `participants` and `config` fields. Set `RUST_LOG=debug` to trace
//! the pipeline on stderr.

use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use availability_engine::{
    calculate_family_availability, find_optimal_meeting_times_in, AvailabilityConfig,
    CalendarEvent, FamilyMember, MemberId,
};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Deserialize;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "avail",
    version,
    about = "Family availability and meeting-time ranking CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log pipeline steps to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute per-member and common availability
    Availability {
        #[command(flatten)]
        query: QueryArgs,
    },
    /// Rank meeting times of a given duration
    Meet {
        #[command(flatten)]
        query: QueryArgs,
        /// Meeting length in minutes
        #[arg(short, long)]
        duration: u32,
        /// Comma-separated member ids that must all attend
        #[arg(long)]
        require: Option<String>,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Query document (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Engine config JSON file; overrides the query's embedded config
    #[arg(long)]
    config: Option<String>,
    /// IANA timezone the lattice and scoring are aligned to
    #[arg(long)]
    timezone: Option<String>,
    /// Slot width in minutes
    #[arg(long)]
    granularity: Option<u32>,
}

/// The JSON document a query is read from.
#[derive(Deserialize)]
struct QueryDocument {
    start_date: NaiveDate,
    end_date: NaiveDate,
    #[serde(default)]
    roster: Vec<FamilyMember>,
    #[serde(default)]
    events: Vec<CalendarEvent>,
    #[serde(default)]
    participants: Option<Vec<MemberId>>,
    #[serde(default)]
    config: Option<AvailabilityConfig>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Availability { query } => {
            let (document, config) = load_query(&query)?;
            let result = calculate_family_availability(
                &document.events,
                &document.roster,
                document.start_date,
                document.end_date,
                document.participants.as_deref(),
                &config,
            )
            .context("Failed to compute availability")?;

            info!("{} common periods", result.common.len());
            let json = serde_json::to_string_pretty(&result)?;
            write_output(query.output.as_deref(), &json)?;
        }
        Commands::Meet {
            query,
            duration,
            require,
        } => {
            let (document, config) = load_query(&query)?;
            let tz = config.timezone()?;
            let result = calculate_family_availability(
                &document.events,
                &document.roster,
                document.start_date,
                document.end_date,
                document.participants.as_deref(),
                &config,
            )
            .context("Failed to compute availability")?;

            let required = parse_member_list(require.as_deref());
            let candidates = find_optimal_meeting_times_in(&result, duration, &required, tz);

            info!("{} meeting candidates", candidates.len());
            let json = serde_json::to_string_pretty(&candidates)?;
            write_output(query.output.as_deref(), &json)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Read the query document and resolve the effective config.
///
/// Precedence, lowest first: defaults, the query's `config`, `--config`, flags.
fn load_query(args: &QueryArgs) -> Result<(QueryDocument, AvailabilityConfig)> {
    let raw = read_input(args.input.as_deref())?;
    let mut document: QueryDocument =
        serde_json::from_str(&raw).context("Failed to parse query document")?;

    let mut config = match &args.config {
        Some(path) => load_config(Path::new(path))?,
        None => document.config.take().unwrap_or_default(),
    };
    if let Some(timezone) = &args.timezone {
        config.timezone = timezone.clone();
    }
    if let Some(granularity) = args.granularity {
        config.granularity_minutes = granularity;
    }
    config.validate().context("Invalid engine configuration")?;

    debug!(
        "Loaded query {} to {} with {} members and {} events",
        document.start_date,
        document.end_date,
        document.roster.len(),
        document.events.len()
    );
    Ok((document, config))
}

fn load_config(path: &Path) -> Result<AvailabilityConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    AvailabilityConfig::from_json_str(&content)
        .with_context(|| format!("Failed to load config file: {}", path.display()))
}

/// `--require parent,kid` produces `["parent", "kid"]`; blanks are dropped.
fn parse_member_list(raw: Option<&str>) -> Vec<MemberId> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(MemberId::from)
            .collect()
    })
    .unwrap_or_default()
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
            println!("{}", content);
        }
    }
    Ok(())
}
