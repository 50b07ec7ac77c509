//! `tripslot` CLI — check, annotate, filter and rank itinerary places by
//! opening hours.
//!
//! Place records are read as a JSON array and written back as JSON with an
//! up-to-date `isOpen` field. Fields the engine does not use pass through
//! unchanged.
//!
//! ## Usage
//!
//! ```sh
//! # Annotate places with their open status right now (local clock)
//! tripslot annotate -i places.json
//!
//! # Keep places not confirmed closed on Friday at 23:30
//! tripslot filter -i places.json --date 2026-10-16 --at 23:30
//!
//! # The full slot pipeline, resolving "now" in the destination's timezone
//! tripslot plan -i places.json --tz Europe/Lisbon --open-only --rank
//!
//! # Fill missing hours from category defaults first
//! cat places.json | tripslot rank --backfill --at 12:00
//!
//! # Is a single schedule open?
//! tripslot check --category museum --date 2026-10-12 --at 11:00
//!
//! # Same, as a JSON report
//! tripslot check --category museum --date 2026-10-12 --at 11:00 --json
//!
//! # Print the default schedules
//! tripslot templates nightlife
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use serde::Serialize;
use std::io::{self, Read};
use tripslot_engine::schedule::{parse_date, parse_timezone};
use tripslot_engine::templates::{backfill_opening_hours, default_schedule, Category};
use tripslot_engine::{
    annotate_open_status, filter_open, is_open_at, rank_by_relevance, select_for_slot, OpenResult,
    Place, QueryMoment, SlotOptions, TimeOfDay, WeeklySchedule,
};

#[derive(Parser)]
#[command(
    name = "tripslot",
    version,
    about = "Opening-hours availability for itinerary places"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log engine decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Set each place's isOpen from its schedule
    Annotate {
        #[command(flatten)]
        places: PlacesArgs,
    },
    /// Drop places confirmed closed at the query moment
    Filter {
        #[command(flatten)]
        places: PlacesArgs,
    },
    /// Order places open-first, then by rating
    Rank {
        #[command(flatten)]
        places: PlacesArgs,
    },
    /// Annotate, then optionally filter and rank, as an itinerary slot does
    Plan {
        #[command(flatten)]
        places: PlacesArgs,
        /// Drop places confirmed closed
        #[arg(long)]
        open_only: bool,
        /// Rank the remaining places
        #[arg(long)]
        rank: bool,
    },
    /// Check one weekly schedule (JSON) or a category default
    Check {
        /// Schedule JSON file (reads from stdin if omitted)
        #[arg(short, long, conflicts_with = "category")]
        input: Option<String>,
        /// Use the default schedule of this category instead of reading one
        #[arg(long)]
        category: Option<Category>,
        /// Print a JSON report instead of the bare status
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        moment: MomentArgs,
    },
    /// Print default schedules, for one category or all of them
    Templates { category: Option<Category> },
}

#[derive(Args)]
struct PlacesArgs {
    /// Input JSON array of places (reads from stdin if omitted)
    #[arg(short, long)]
    input: Option<String>,
    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,
    /// Fill missing openingHours from the place's category default
    #[arg(long)]
    backfill: bool,
    #[command(flatten)]
    moment: MomentArgs,
}

#[derive(Args)]
struct MomentArgs {
    /// Query time, HH:MM 24-hour (defaults to now)
    #[arg(long, value_name = "HH:MM")]
    at: Option<TimeOfDay>,
    /// Query date, YYYY-MM-DD (defaults to today)
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date)]
    date: Option<NaiveDate>,
    /// IANA timezone used to resolve "now" (defaults to the local clock)
    #[arg(long, value_name = "ZONE", value_parser = parse_timezone)]
    tz: Option<Tz>,
}

/// `check --json` output.
#[derive(Serialize)]
struct CheckReport {
    date: NaiveDate,
    time: TimeOfDay,
    weekday: String,
    status: OpenResult,
}

impl MomentArgs {
    /// Fill whatever part of the moment was not given from "now", read once.
    fn resolve(&self) -> QueryMoment {
        let now = match self.tz {
            Some(tz) => QueryMoment::now_in(tz),
            None => QueryMoment::now_local(),
        };
        QueryMoment::new(self.date.unwrap_or(now.date), self.at.unwrap_or(now.time))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match cli.command {
        Commands::Annotate { places } => {
            run_places(&places, annotate_open_status)?;
        }
        Commands::Filter { places } => {
            run_places(&places, filter_open)?;
        }
        Commands::Rank { places } => {
            run_places(&places, rank_by_relevance)?;
        }
        Commands::Plan {
            places,
            open_only,
            rank,
        } => {
            let options = SlotOptions { open_only, rank };
            run_places(&places, |p, m| select_for_slot(p, m, options))?;
        }
        Commands::Check {
            input,
            category,
            json,
            moment,
        } => {
            let schedule: Option<WeeklySchedule> = match category {
                Some(category) => Some(default_schedule(category).clone()),
                None => {
                    let raw = read_input(input.as_deref())?;
                    serde_json::from_str(&raw).context("Failed to parse weekly schedule JSON")?
                }
            };
            let moment = moment.resolve();
            let result = is_open_at(schedule.as_ref(), moment);
            log::info!(
                "{} {} ({:?}): {}",
                moment.date,
                moment.time,
                moment.weekday(),
                result.as_str()
            );
            if json {
                let report = CheckReport {
                    date: moment.date,
                    time: moment.time,
                    weekday: moment.weekday().to_string(),
                    status: result,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", result.as_str());
            }
        }
        Commands::Templates { category } => {
            let value = match category {
                Some(category) => serde_json::to_value(default_schedule(category))?,
                None => {
                    let mut all = serde_json::Map::new();
                    for category in Category::ALL {
                        all.insert(
                            category.to_string(),
                            serde_json::to_value(default_schedule(category))?,
                        );
                    }
                    serde_json::Value::Object(all)
                }
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }

    Ok(())
}

/// Read places, apply `op` at the resolved moment, write the result.
fn run_places<F>(args: &PlacesArgs, op: F) -> Result<()>
where
    F: FnOnce(&[Place], QueryMoment) -> Vec<Place>,
{
    let raw = read_input(args.input.as_deref())?;
    let mut places = parse_places(&raw)?;
    if args.backfill {
        places = backfill_opening_hours(&places);
    }

    let moment = args.moment.resolve();
    log::debug!(
        "evaluating {} places at {} {} ({:?})",
        places.len(),
        moment.date,
        moment.time,
        moment.weekday()
    );

    let result = op(&places, moment);
    let json = serde_json::to_string_pretty(&result).context("Failed to serialize places")?;
    write_output(args.output.as_deref(), &json)
}

/// Parse a JSON array of places. Elements that are not valid place records
/// are skipped with a warning so the rest of the batch still goes through.
fn parse_places(raw: &str) -> Result<Vec<Place>> {
    let values: Vec<serde_json::Value> =
        serde_json::from_str(raw).context("Expected a JSON array of places")?;

    let mut places = Vec::with_capacity(values.len());
    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<Place>(value) {
            Ok(place) => places.push(place),
            Err(e) => log::warn!("skipping place #{}: {}", index, e),
        }
    }
    Ok(places)
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
