//! Train types.
//!
//! A `Train` is a numbered service with an ordered schedule of stops.
//! The schedule is validated once at construction so that the planner can
//! rely on it being non-trivial and chronologically ordered.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{InvalidArgument, Station, Time};

/// What kind of train this is, and its service number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TrainInfo {
    /// Long-distance express; some sets carry Wi-Fi.
    InterCityExpress {
        number: u32,
        #[serde(default)]
        has_wifi: bool,
    },
    /// Regional express.
    RegionalExpress { number: u32 },
    /// Stopping regional service.
    Regional { number: u32 },
}

impl TrainInfo {
    /// Returns the service number.
    pub fn number(&self) -> u32 {
        match self {
            TrainInfo::InterCityExpress { number, .. }
            | TrainInfo::RegionalExpress { number }
            | TrainInfo::Regional { number } => *number,
        }
    }

    /// Returns true if the train has on-board Wi-Fi.
    pub fn has_wifi(&self) -> bool {
        matches!(self, TrainInfo::InterCityExpress { has_wifi: true, .. })
    }

    /// Short category code used on departure boards.
    pub fn category(&self) -> &'static str {
        match self {
            TrainInfo::InterCityExpress { .. } => "ICE",
            TrainInfo::RegionalExpress { .. } => "RE",
            TrainInfo::Regional { .. } => "RB",
        }
    }
}

impl fmt::Display for TrainInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.category(), self.number())
    }
}

/// One entry of a train's schedule: the train is at `station` at `time`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stop {
    pub time: Time,
    pub station: Station,
}

impl Stop {
    /// Creates a new stop.
    pub fn new(time: Time, station: Station) -> Self {
        Self { time, station }
    }
}

/// A train with its complete schedule.
///
/// # Invariants
///
/// - The schedule has at least two stops
/// - Stop times strictly increase along the schedule
///
/// A train may call at the same station more than once (loops,
/// out-and-back workings); each visit is its own stop.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::{Station, Stop, Time, Train, TrainInfo};
///
/// let munich = Station::new("Munich").unwrap();
/// let nuremberg = Station::new("Nuremberg").unwrap();
///
/// let train = Train::new(
///     TrainInfo::InterCityExpress { number: 724, has_wifi: true },
///     vec![
///         Stop::new(Time::new(8, 50).unwrap(), munich.clone()),
///         Stop::new(Time::new(10, 0).unwrap(), nuremberg.clone()),
///     ],
/// )
/// .unwrap();
///
/// assert_eq!(train.destination().time, Time::new(10, 0).unwrap());
/// assert!(train.calls_at(&munich));
/// assert!(train.calls_at(&nuremberg));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TrainDto")]
pub struct Train {
    info: TrainInfo,
    schedule: Vec<Stop>,
}

impl Train {
    /// Construct a train, validating its schedule.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the schedule has fewer than two stops
    /// - a stop's time is not strictly after the previous stop's time
    pub fn new(info: TrainInfo, schedule: Vec<Stop>) -> Result<Self, InvalidArgument> {
        if schedule.len() < 2 {
            return Err(InvalidArgument::new(format!(
                "schedule of {info} must contain at least two stops"
            )));
        }

        for pair in schedule.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            if next.time <= prev.time {
                return Err(InvalidArgument::new(format!(
                    "schedule of {info} goes backwards: {} at {} is not after {} at {}",
                    next.station, next.time, prev.station, prev.time
                )));
            }
        }

        Ok(Self { info, schedule })
    }

    /// Returns the train's identity.
    pub fn info(&self) -> &TrainInfo {
        &self.info
    }

    /// Returns the service number.
    pub fn number(&self) -> u32 {
        self.info.number()
    }

    /// Returns all stops in schedule order.
    pub fn schedule(&self) -> &[Stop] {
        &self.schedule
    }

    /// Returns the stations in stop order, including repeat visits.
    pub fn stations(&self) -> impl Iterator<Item = &Station> + '_ {
        self.schedule.iter().map(|stop| &stop.station)
    }

    /// Returns the distinct stations this train calls at.
    pub fn station_set(&self) -> HashSet<&Station> {
        self.stations().collect()
    }

    /// Does this train call at the given station?
    pub fn calls_at(&self, station: &Station) -> bool {
        self.stations().any(|s| s == station)
    }

    /// Returns the first stop.
    pub fn origin(&self) -> &Stop {
        // Non-empty by construction
        &self.schedule[0]
    }

    /// Returns the last stop.
    pub fn destination(&self) -> &Stop {
        &self.schedule[self.schedule.len() - 1]
    }
}

impl fmt::Display for Train {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = self.origin();
        let destination = self.destination();
        write!(
            f,
            "{} ({} {} -> {} {})",
            self.info, origin.station, origin.time, destination.station, destination.time
        )
    }
}

/// Unvalidated train as found in timetable data.
#[derive(Deserialize)]
struct TrainDto {
    info: TrainInfo,
    schedule: Vec<Stop>,
}

impl TryFrom<TrainDto> for Train {
    type Error = InvalidArgument;

    fn try_from(dto: TrainDto) -> Result<Self, Self::Error> {
        Train::new(dto.info, dto.schedule)
    }
}
