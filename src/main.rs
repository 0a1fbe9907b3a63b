// badge-pdf: Print attendee badges and price lists for event registration

use std::fs::File;
use std::io::{BufWriter, Write};
use std::sync::Arc;

use badge_pdf::{
    demo_attendees, load_roster, price_table, price_table_header, to_attendees, Attendee,
    BadgeConfig, BadgeError, Offset, PrintFormatter, PRICE_TABLE_COLUMNS,
};
use chrono::{Local, NaiveDate};
use clap::{Args as ClapArgs, Parser, Subcommand};
use thiserror::Error;
use tracing::{info, warn};

// ============================================================================
// Constants
// ============================================================================

/// Exit status when the PDF was written but some badges are missing
const EXIT_PARTIAL: i32 = 2;

const DEFAULT_LOG_FILTER: &str = "badge_pdf=info";

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read configuration: {0}")]
    ConfigError(String),
    #[error("Failed to read roster file: {0}")]
    RosterError(String),
    #[error("Invalid date format: {0}")]
    DateError(String),
    #[error("{0}")]
    BadgeError(#[from] BadgeError),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

// ============================================================================
// Data Structures
// ============================================================================

/// CLI Arguments
#[derive(Parser, Debug)]
#[command(author, version, about = "Print attendee badges for event registration")]
struct Args {
    /// Badge configuration file (badge definitions and printer offsets)
    #[arg(short, long, global = true, default_value = "badges.json")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one badge per attendee in a roster file
    Badges {
        /// Attendee roster file (JSON array)
        #[arg(short, long)]
        roster: String,

        /// Date ages are calculated for (YYYY-MM-DD format, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        #[command(flatten)]
        print: PrintArgs,
    },

    /// Show prices of every visible badge type by age group
    Prices,

    /// Print adult/youth/child sample badges to calibrate a printer
    TestBadges {
        /// Badge type to print (defaults to every visible badge type)
        #[arg(short, long)]
        badge: Option<String>,

        /// Number of sample badges per badge type (1-3)
        #[arg(short = 'n', long, default_value = "3", value_parser = clap::value_parser!(u8).range(1..=3))]
        count: u8,

        #[command(flatten)]
        print: PrintArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct PrintArgs {
    /// Computer/printer name whose calibration offsets are used
    #[arg(long)]
    device: Option<String>,

    /// Horizontal offset in points (1/72 inch), overrides the device
    #[arg(short = 'x', long, allow_hyphen_values = true)]
    x_offset: Option<i32>,

    /// Vertical offset in points (1/72 inch), overrides the device
    #[arg(short = 'y', long, allow_hyphen_values = true)]
    y_offset: Option<i32>,

    /// Output filename (defaults to badges-{date}.pdf)
    #[arg(short, long)]
    output: Option<String>,
}

/// Outcome of a print command
enum Printed {
    Complete,
    Partial,
}

// ============================================================================
// Main Entry Point
// ============================================================================

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(Printed::Complete) => {}
        Ok(Printed::Partial) => std::process::exit(EXIT_PARTIAL),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Printed, AppError> {
    let args = Args::parse();
    let config = BadgeConfig::load(&args.config).map_err(config_error)?;

    match args.command {
        Command::Badges { roster, date, print } => {
            let as_of = parse_date(&date)?;
            let entries = load_roster(&roster).map_err(roster_error)?;
            let attendees = to_attendees(&entries, &config, as_of).map_err(roster_error)?;
            print_badges(&config, &attendees, as_of, &print)
        }
        Command::Prices => {
            show_prices(&config)?;
            Ok(Printed::Complete)
        }
        Command::TestBadges { badge, count, print } => {
            let attendees = test_attendees(&config, badge.as_deref(), count as usize)?;
            let as_of = Local::now().date_naive();
            print_badges(&config, &attendees, as_of, &print)
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn config_error(e: BadgeError) -> AppError {
    match e {
        BadgeError::ConfigError(msg) => AppError::ConfigError(msg),
        other => AppError::BadgeError(other),
    }
}

fn roster_error(e: BadgeError) -> AppError {
    match e {
        BadgeError::RosterError(msg) => AppError::RosterError(msg),
        other => AppError::BadgeError(other),
    }
}

fn parse_date(date_str: &Option<String>) -> Result<NaiveDate, AppError> {
    match date_str {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| AppError::DateError(s.clone())),
        None => Ok(Local::now().date_naive()),
    }
}

fn test_attendees(
    config: &BadgeConfig,
    badge: Option<&str>,
    count: usize,
) -> Result<Vec<Attendee>, AppError> {
    let categories: Vec<&Arc<_>> = match badge {
        Some(name) => vec![config
            .category(name)
            .ok_or_else(|| AppError::ConfigError(format!("unknown badge type {}", name)))?],
        None => config.visible_categories().collect(),
    };

    Ok(categories
        .into_iter()
        .flat_map(|category| demo_attendees(category, count))
        .collect())
}

// ============================================================================
// Commands
// ============================================================================

fn print_badges(
    config: &BadgeConfig,
    attendees: &[Attendee],
    as_of: NaiveDate,
    print: &PrintArgs,
) -> Result<Printed, AppError> {
    let offset: Offset = config.offset_for(print.device.as_deref(), print.x_offset, print.y_offset)?;

    let output_file = print
        .output
        .clone()
        .unwrap_or_else(|| format!("badges-{}.pdf", as_of.format("%Y-%m-%d")));

    let formatter = PrintFormatter::new(attendees, offset, as_of);

    // Whatever was built is written, even after a failure
    let file = File::create(&output_file)?;
    let mut writer = BufWriter::new(file);
    std::io::copy(&mut formatter.stream(), &mut writer)?;
    writer.flush()?;

    println!("✓ Generated: {}", output_file);
    println!("  Badges: {} of {}", formatter.pages(), attendees.len());
    println!("  Offset: x {} y {}", offset.x, offset.y);
    println!("  Job ID: {}", formatter.job_id());

    match formatter.failure() {
        None => {
            info!(job = formatter.job_id(), pages = formatter.pages(), "badges printed");
            Ok(Printed::Complete)
        }
        Some(e) => {
            eprintln!("Warning: not all badges were generated: {}", e);
            Ok(Printed::Partial)
        }
    }
}

fn show_prices(config: &BadgeConfig) -> Result<(), AppError> {
    let rows = price_table(config.categories.iter().map(Arc::as_ref), &PRICE_TABLE_COLUMNS);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", price_table_header(&PRICE_TABLE_COLUMNS))?;
    for row in &rows {
        for failure in row.failures() {
            warn!(badge = %row.badge, error = %failure, "missing age range");
            eprintln!("Error getting age ranges for badge {}: {}", row.badge, failure);
        }
        writeln!(out, "{}", row.render_line())?;
    }
    Ok(())
}
