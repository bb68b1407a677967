//! Command-line client for NASA's Astronomy Picture of the Day.
//!
//! # Usage
//!
//! ```bash
//! # Today's picture
//! apod today
//!
//! # Specific days, or N days back
//! apod day 2024-03-15
//! apod day 2024-03-15 2023-07-04
//! apod day --days-ago 3
//!
//! # An inclusive range, or the last N days
//! apod range 2024-01-01 2024-01-07
//! apod range --last 7
//!
//! # Recent entries picked by the API
//! apod recent --count 5
//!
//! # Machine-readable output
//! apod --json today
//! ```
//!
//! # Environment Variables
//!
//! See [`apod_client::config`]. A `.env` file in the working directory is
//! loaded first.

use apod_client::config::{self, ApodConfig};
use apod_client::prelude::*;
use apod_client::utils::dates::{format_naive_date_locale, parse_date};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Browse NASA's Astronomy Picture of the Day.
#[derive(Parser)]
#[command(name = "apod")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print entries as JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show today's entry
    Today,

    /// Show the entries for one or more days
    Day(DayArgs),

    /// Show every entry in a date range
    Range(RangeArgs),

    /// Show entries picked by the API
    Recent {
        /// Number of entries to fetch
        #[arg(short, long, default_value_t = DEFAULT_RECENT_COUNT)]
        count: u32,
    },
}

#[derive(Args)]
#[group(required = true, multiple = false)]
struct DayArgs {
    /// Dates as YYYY-MM-DD, fetched concurrently
    #[arg(value_parser = parse_cli_date)]
    dates: Vec<NaiveDate>,

    /// Days before today (UTC)
    #[arg(long, allow_hyphen_values = true)]
    days_ago: Option<i64>,
}

#[derive(Args)]
struct RangeArgs {
    /// First date, YYYY-MM-DD
    #[arg(value_parser = parse_cli_date, requires = "end", conflicts_with = "last")]
    start: Option<NaiveDate>,

    /// Last date, YYYY-MM-DD (inclusive)
    #[arg(value_parser = parse_cli_date, requires = "start")]
    end: Option<NaiveDate>,

    /// The last N days, today included
    #[arg(long, required_unless_present = "start")]
    last: Option<u32>,
}

fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    init_tracing(&config);
    config.print_summary();

    let client = NasaApodClient::new(&config).context("Failed to build APOD client")?;
    let service = ApodService::new(Arc::new(client));

    let entries = match cli.command {
        Commands::Today => vec![service.latest().await?],
        Commands::Day(args) => match (args.dates.as_slice(), args.days_ago) {
            ([date], _) => vec![service.on(*date).await?],
            ([], Some(days)) => vec![service.days_ago(days).await?],
            ([], None) => anyhow::bail!("either DATES or --days-ago is required"),
            (dates, _) => service.on_dates(dates).await?,
        },
        Commands::Range(args) => match (args.start, args.end, args.last) {
            (Some(start), Some(end), _) => service
                .range(start, end)
                .await
                .with_context(|| format!("Failed to fetch {start}..{end}"))?,
            (_, _, Some(days)) => service.last_days(days).await?,
            _ => anyhow::bail!("either START END or --last is required"),
        },
        Commands::Recent { count } => service.recent(count).await?,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print_entries(&entries);
    }

    Ok(())
}

/// Logs go to stderr so `--json` output stays parseable.
fn init_tracing(config: &ApodConfig) {
    let filter =
        EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn print_entries(entries: &[Apod]) {
    if entries.is_empty() {
        println!("{}", "No entries".yellow());
        return;
    }

    for (idx, apod) in entries.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        print_entry(apod);
    }
}

fn print_entry(apod: &Apod) {
    println!("{}", apod.title.bright_white().bold());
    println!("  {}", format_naive_date_locale(apod.date).cyan());

    let media = match apod.media_type {
        MediaType::Image => apod.media_type.as_str().green(),
        MediaType::Video => apod.media_type.as_str().magenta(),
        MediaType::Other => apod.media_type.as_str().yellow(),
    };
    println!("  Media: {}", media);
    println!("  URL:   {}", apod.url.bright_blue());

    if let Some(ref hdurl) = apod.hdurl {
        println!("  HD:    {}", hdurl.bright_blue());
    }
    if let Some(copyright) = apod.copyright_line() {
        println!("  (c) {}", copyright.dimmed());
    }
}
