//! Journey queries over a fixed set of trains.
//!
//! The planner is built once from a train set and never changes afterwards.
//! Every query is a pure filter or traversal over that snapshot, so a
//! single planner can be shared freely between readers.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info, trace};

use super::config::PlannerConfig;
use crate::domain::{Station, Time, Train};

/// A train leaving a station at a given time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Departure {
    pub time: Time,
    pub train: Arc<Train>,
}

/// Two consecutive stops of one train.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Hop {
    pub from: Station,
    pub to: Station,
    pub departure: Time,
    pub arrival: Time,
    pub train: Arc<Train>,
}

impl Hop {
    /// Travel time between the two stops, in minutes.
    pub fn minutes(&self) -> i64 {
        self.arrival.difference(&self.departure)
    }
}

/// Query engine over an immutable set of trains.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::{Station, Stop, Time, Train, TrainInfo};
/// use journey_planner::planner::JourneyPlanner;
///
/// let station = |name: &str| Station::new(name).unwrap();
/// let stop = |h: u32, m: u32, name: &str| Stop::new(Time::new(h, m).unwrap(), station(name));
///
/// let train = Train::new(
///     TrainInfo::Regional { number: 1 },
///     vec![stop(8, 0, "A"), stop(8, 10, "B"), stop(8, 20, "C")],
/// )
/// .unwrap();
///
/// let planner = JourneyPlanner::new([train]);
/// assert_eq!(planner.stations().len(), 3);
/// assert!(planner.is_short_trip(&station("A"), &station("C")));
/// assert!(!planner.is_short_trip(&station("C"), &station("A")));
/// ```
#[derive(Debug, Clone)]
pub struct JourneyPlanner {
    trains: HashSet<Arc<Train>>,
    /// Union of every train's stations, computed once.
    stations: HashSet<Station>,
    config: PlannerConfig,
}

impl JourneyPlanner {
    /// Build a planner with the default configuration.
    ///
    /// Accepts owned trains or shared `Arc<Train>`s. Equal trains collapse
    /// into one.
    pub fn new<I, T>(trains: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arc<Train>>,
    {
        Self::with_config(trains, PlannerConfig::default())
    }

    /// Build a planner with the given configuration.
    pub fn with_config<I, T>(trains: I, config: PlannerConfig) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Arc<Train>>,
    {
        let trains: HashSet<Arc<Train>> = trains.into_iter().map(Into::into).collect();
        let stations: HashSet<Station> = trains
            .iter()
            .flat_map(|train| train.station_set().into_iter().cloned())
            .collect();

        info!(
            trains = trains.len(),
            stations = stations.len(),
            "journey planner initialised"
        );

        Self {
            trains,
            stations,
            config,
        }
    }

    /// Returns every station served by at least one train.
    pub fn stations(&self) -> &HashSet<Station> {
        &self.stations
    }

    /// Returns the train set.
    pub fn trains(&self) -> &HashSet<Arc<Train>> {
        &self.trains
    }

    /// Trains that call at `station`.
    pub fn trains_at(&self, station: &Station) -> HashSet<Arc<Train>> {
        let result: HashSet<Arc<Train>> = self
            .trains
            .iter()
            .filter(|train| train.calls_at(station))
            .cloned()
            .collect();

        trace!(%station, count = result.len(), "trains at station");
        result
    }

    /// Every `(time, train)` pair at which a train is at `station`.
    ///
    /// A train calling at the station more than once contributes one
    /// departure per visit.
    pub fn departures(&self, station: &Station) -> HashSet<Departure> {
        let result: HashSet<Departure> = self
            .trains
            .iter()
            .flat_map(|train| {
                train
                    .schedule()
                    .iter()
                    .filter(move |stop| &stop.station == station)
                    .map(move |stop| Departure {
                        time: stop.time,
                        train: Arc::clone(train),
                    })
            })
            .collect();

        trace!(%station, count = result.len(), "departures from station");
        result
    }

    /// Can `to` be reached from `from` on a single train with at most one
    /// stop in between?
    ///
    /// Only the first visit of each train to `from` is considered. A trip
    /// from a station to itself is never short.
    pub fn is_short_trip(&self, from: &Station, to: &Station) -> bool {
        if from == to {
            return false;
        }

        let short = self
            .trains
            .iter()
            .any(|train| reaches_within_one_stop(train, from, to));

        debug!(%from, %to, short, "short trip check");
        short
    }

    /// Hops leaving `station`: each stop there paired with the train's
    /// next stop.
    pub fn hops_from(&self, station: &Station) -> HashSet<Hop> {
        self.trains
            .iter()
            .flat_map(|train| {
                train
                    .schedule()
                    .windows(2)
                    .filter(move |pair| &pair[0].station == station)
                    .map(move |pair| Hop {
                        from: pair[0].station.clone(),
                        to: pair[1].station.clone(),
                        departure: pair[0].time,
                        arrival: pair[1].time,
                        train: Arc::clone(train),
                    })
            })
            .collect()
    }

    /// The earliest departure from `station` at or after `after`.
    ///
    /// Departures at the same time are ordered by train number.
    pub fn next_departure(&self, station: &Station, after: Time) -> Option<Departure> {
        self.departures(station)
            .into_iter()
            .filter(|departure| departure.time >= after)
            .min_by_key(|departure| (departure.time, departure.train.number()))
    }

    /// Departures from `station` in time order, limited to the configured
    /// board size.
    pub fn departure_board(&self, station: &Station) -> Vec<Departure> {
        let mut board: Vec<Departure> = self.departures(station).into_iter().collect();
        board.sort_by_key(|departure| (departure.time, departure.train.number()));
        board.truncate(self.config.board_limit);
        board
    }
}

/// Does `train`, from its first call at `from`, reach `to` at the next
/// stop or the one after?
fn reaches_within_one_stop(train: &Train, from: &Station, to: &Station) -> bool {
    let schedule = train.schedule();
    let Some(start) = schedule.iter().position(|stop| &stop.station == from) else {
        return false;
    };

    let rest = &schedule[start..];
    [1, 2]
        .into_iter()
        .any(|offset| rest.get(offset).is_some_and(|stop| &stop.station == to))
}
