//! Station type.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::InvalidArgument;

/// A station on the network, identified by its name.
///
/// The planner treats stations as opaque keys: two stations are the same
/// station exactly when their names are equal. A `Station` always has a
/// non-blank name.
///
/// # Examples
///
/// ```
/// use journey_planner::domain::Station;
///
/// let munich = Station::new("Munich").unwrap();
/// assert_eq!(munich.name(), "Munich");
///
/// // Blank names are rejected
/// assert!(Station::new("").is_err());
/// assert!(Station::new("   ").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Station(String);

impl Station {
    /// Create a station from its name.
    ///
    /// Surrounding whitespace is trimmed; a name that is empty after
    /// trimming is rejected.
    pub fn new(name: &str) -> Result<Self, InvalidArgument> {
        let name = name.trim();
        if name.is_empty() {
            return Err(InvalidArgument::new("station name must not be empty"));
        }
        Ok(Station(name.to_string()))
    }

    /// Returns the station name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Station {
    type Error = InvalidArgument;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Station::new(&name)
    }
}

impl From<Station> for String {
    fn from(station: Station) -> Self {
        station.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
