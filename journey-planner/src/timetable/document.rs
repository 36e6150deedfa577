//! JSON timetable document.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::error::TimetableError;
use crate::domain::{InvalidArgument, Train};
use crate::planner::{JourneyPlanner, PlannerConfig};

/// A list of trains, as stored on disk.
///
/// # Examples
///
/// ```
/// use journey_planner::timetable::Timetable;
///
/// let json = r#"{
///     "trains": [{
///         "info": {"kind": "RegionalExpress", "number": 4012},
///         "schedule": [
///             {"time": "08:00", "station": "Munich"},
///             {"time": "08:45", "station": "Augsburg"}
///         ]
///     }]
/// }"#;
///
/// let timetable = Timetable::from_json_str(json).unwrap();
/// assert_eq!(timetable.len(), 1);
///
/// // The train list must be present
/// assert!(Timetable::from_json_str(r#"{"trains": null}"#).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Timetable {
    trains: Vec<Train>,
}

/// Raw document; `trains` is optional here so that absence is reported as
/// an invalid argument rather than a parse error.
#[derive(Deserialize)]
struct TimetableDto {
    #[serde(default)]
    trains: Option<Vec<Train>>,
}

impl Timetable {
    /// Create a timetable from a list of trains.
    pub fn new(trains: Vec<Train>) -> Self {
        Self { trains }
    }

    /// Parse a timetable from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, TimetableError> {
        let dto: TimetableDto = serde_json::from_str(json)?;
        let trains = dto
            .trains
            .ok_or_else(|| InvalidArgument::new("timetable must list its trains"))?;
        Ok(Self { trains })
    }

    /// Read a timetable from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TimetableError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| TimetableError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let timetable = Self::from_json_str(&contents)?;
        info!(path = %path.display(), trains = timetable.len(), "loaded timetable");
        Ok(timetable)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, TimetableError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the timetable to a JSON file.
    ///
    /// Creates parent directories if they don't exist.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TimetableError> {
        let path = path.as_ref();
        let io_error = |source: std::io::Error| TimetableError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }

        let json = self.to_json_pretty()?;
        std::fs::write(path, json).map_err(io_error)?;

        debug!(path = %path.display(), trains = self.len(), "saved timetable");
        Ok(())
    }

    /// Returns the trains.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    /// Returns the number of trains.
    pub fn len(&self) -> usize {
        self.trains.len()
    }

    /// Returns true if there are no trains.
    pub fn is_empty(&self) -> bool {
        self.trains.is_empty()
    }

    /// Build a planner over this timetable's trains.
    pub fn into_planner(self, config: PlannerConfig) -> JourneyPlanner {
        JourneyPlanner::with_config(self.trains, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Station, Stop, Time, TrainInfo};
    use tempfile::tempdir;

    const EXAMPLE: &str = r#"{
        "trains": [
            {
                "info": {"kind": "InterCityExpress", "number": 724, "has_wifi": true},
                "schedule": [
                    {"time": "08:00", "station": "A"},
                    {"time": "08:10", "station": "B"},
                    {"time": "08:20", "station": "C"}
                ]
            },
            {
                "info": {"kind": "Regional", "number": 5032},
                "schedule": [
                    {"time": {"hours": 9, "minutes": 0}, "station": "A"},
                    {"time": "09:15", "station": "C"}
                ]
            }
        ]
    }"#;

    fn station(name: &str) -> Station {
        Station::new(name).unwrap()
    }

    fn make_timetable() -> Timetable {
        let train = Train::new(
            TrainInfo::RegionalExpress { number: 1 },
            vec![
                Stop::new(Time::new(8, 0).unwrap(), station("A")),
                Stop::new(Time::new(8, 30).unwrap(), station("B")),
            ],
        )
        .unwrap();
        Timetable::new(vec![train])
    }

    #[test]
    fn parse_example() {
        let timetable = Timetable::from_json_str(EXAMPLE).unwrap();
        assert_eq!(timetable.len(), 2);
        assert!(!timetable.is_empty());
        assert_eq!(timetable.trains()[0].number(), 724);
        assert!(timetable.trains()[0].info().has_wifi());
    }

    #[test]
    fn into_planner() {
        let planner = Timetable::from_json_str(EXAMPLE)
            .unwrap()
            .into_planner(PlannerConfig::default());

        assert_eq!(planner.stations().len(), 3);
        assert_eq!(planner.trains_at(&station("A")).len(), 2);
        assert!(planner.is_short_trip(&station("A"), &station("C")));
        assert!(!planner.is_short_trip(&station("B"), &station("A")));
    }

    #[test]
    fn empty_train_list_is_valid() {
        let timetable = Timetable::from_json_str(r#"{"trains": []}"#).unwrap();
        assert!(timetable.is_empty());
    }

    #[test]
    fn absent_train_list_rejected() {
        let err = Timetable::from_json_str(r#"{"trains": null}"#).unwrap_err();
        assert!(matches!(err, TimetableError::Invalid(_)));

        let err = Timetable::from_json_str("{}").unwrap_err();
        assert!(matches!(err, TimetableError::Invalid(_)));
    }

    #[test]
    fn invalid_contents_rejected() {
        let json = r#"{"trains": [{
            "info": {"kind": "Regional", "number": 1},
            "schedule": [
                {"time": "25:00", "station": "A"},
                {"time": "09:15", "station": "C"}
            ]
        }]}"#;
        let err = Timetable::from_json_str(json).unwrap_err();
        assert!(matches!(err, TimetableError::Json { .. }));
        assert!(err.to_string().contains("hours must be in 0..24, got 25"));
    }

    #[test]
    fn malformed_json_rejected() {
        let err = Timetable::from_json_str("not json").unwrap_err();
        assert!(matches!(err, TimetableError::Json { .. }));
    }

    #[test]
    fn save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("timetable.json");

        let timetable = make_timetable();
        timetable.save(&path).unwrap();

        let loaded = Timetable::from_path(&path).unwrap();
        assert_eq!(loaded, timetable);
    }

    #[test]
    fn save_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("timetable.json");

        make_timetable().save(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn saved_times_use_hhmm() {
        let json = make_timetable().to_json_pretty().unwrap();
        assert!(json.contains(r#""08:30""#));
    }

    #[test]
    fn load_missing_file() {
        let dir = tempdir().unwrap();
        let err = Timetable::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, TimetableError::Io { .. }));
    }
}
