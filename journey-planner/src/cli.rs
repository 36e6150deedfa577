//! Command-line front end.
//!
//! Defines the arguments with `clap` and renders query results as plain
//! text lines. Kept separate from `main` so the parsing and formatting can
//! be tested without spawning a process.

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};

use crate::domain::{InvalidArgument, Station, Time};
use crate::planner::{Departure, Hop, JourneyPlanner, PlannerConfig};
use crate::timetable::{Timetable, TimetableError};

/// Answer journey questions over a JSON timetable.
#[derive(Debug, Parser)]
#[command(name = "journey-planner", version)]
pub struct CliConfig {
    /// Path to the JSON timetable file
    #[arg(long, value_name = "FILE", env = "JOURNEY_PLANNER_TIMETABLE")]
    pub timetable: PathBuf,

    /// Maximum number of entries on a departure board
    #[arg(long, global = true, default_value_t = PlannerConfig::default().board_limit)]
    pub board_limit: usize,

    #[command(subcommand)]
    pub command: Command,
}

impl CliConfig {
    /// Planner configuration from the parsed options.
    pub fn planner_config(&self) -> PlannerConfig {
        PlannerConfig::new(self.board_limit)
    }
}

/// A query to run against the timetable.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// List every station
    Stations,
    /// Trains calling at STATION
    TrainsAt {
        #[arg(value_parser = parse_station)]
        station: Station,
    },
    /// Every departure from STATION
    Departures {
        #[arg(value_parser = parse_station)]
        station: Station,
    },
    /// Next departures from STATION, in time order
    Board {
        #[arg(value_parser = parse_station)]
        station: Station,
    },
    /// Onward hops from STATION with their travel times
    Hops {
        #[arg(value_parser = parse_station)]
        station: Station,
    },
    /// Is TO at most one stop after FROM on some train?
    ShortTrip {
        #[arg(value_parser = parse_station)]
        from: Station,
        #[arg(value_parser = parse_station)]
        to: Station,
    },
    /// First departure from STATION at or after a time (default: now)
    Next {
        #[arg(value_parser = parse_station)]
        station: Station,
        #[arg(value_name = "HH:MM", value_parser = parse_time)]
        after: Option<Time>,
    },
    /// Write the timetable back out with times in HH:MM form
    Export {
        #[arg(value_name = "FILE")]
        output: PathBuf,
    },
}

fn parse_station(s: &str) -> Result<Station, InvalidArgument> {
    Station::new(s)
}

fn parse_time(s: &str) -> Result<Time, InvalidArgument> {
    Time::parse_hhmm(s)
}

/// Run a command against a loaded timetable and render its output lines.
pub fn run(
    timetable: Timetable,
    config: PlannerConfig,
    command: &Command,
) -> Result<Vec<String>, TimetableError> {
    if let Command::Export { output } = command {
        timetable.save(output)?;
        return Ok(vec![format!(
            "wrote {} train(s) to {}",
            timetable.len(),
            output.display()
        )]);
    }

    let planner = timetable.into_planner(config);
    Ok(execute(&planner, command))
}

/// Run a query command and render its result as output lines.
///
/// Set-valued results are sorted so output is stable between runs.
pub fn execute(planner: &JourneyPlanner, command: &Command) -> Vec<String> {
    match command {
        Command::Stations => {
            let mut stations: Vec<&Station> = planner.stations().iter().collect();
            stations.sort();
            stations.iter().map(|s| s.to_string()).collect()
        }
        Command::TrainsAt { station } => {
            let mut trains: Vec<_> = planner.trains_at(station).into_iter().collect();
            trains.sort_by_key(|train| train.number());
            trains.iter().map(|train| train.to_string()).collect()
        }
        Command::Departures { station } => {
            let mut departures: Vec<Departure> =
                planner.departures(station).into_iter().collect();
            departures.sort_by_key(|d| (d.time, d.train.number()));
            departures.iter().map(format_departure).collect()
        }
        Command::Board { station } => planner
            .departure_board(station)
            .iter()
            .map(format_departure)
            .collect(),
        Command::Hops { station } => {
            let mut hops: Vec<Hop> = planner.hops_from(station).into_iter().collect();
            hops.sort_by_key(|hop| (hop.departure, hop.train.number()));
            hops.iter().map(format_hop).collect()
        }
        Command::ShortTrip { from, to } => {
            let answer = if planner.is_short_trip(from, to) {
                "yes"
            } else {
                "no"
            };
            vec![format!("{from} -> {to}: {answer}")]
        }
        Command::Next { station, after } => {
            let after = after.unwrap_or_else(|| Time::from_naive_time(Local::now().time()));
            match planner.next_departure(station, after) {
                Some(departure) => vec![format_departure(&departure)],
                None => vec![format!("no departure from {station} at or after {after}")],
            }
        }
        Command::Export { .. } => Vec::new(),
    }
}

fn format_departure(departure: &Departure) -> String {
    format!("{}  {}", departure.time, departure.train)
}

fn format_hop(hop: &Hop) -> String {
    format!(
        "{}  {} -> {} {} ({} min)",
        hop.departure,
        hop.train.info(),
        hop.to,
        hop.arrival,
        hop.minutes()
    )
}
