use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// Numeric identifier for a charging station within a request.
pub type StationId = i64;

/// Ambient conditions reported by a station, used as predictor
/// features. All fields are optional; scoring substitutes the
/// documented defaults when absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StationConditions {
    /// Ambient temperature in degrees Celsius.
    pub temperature: Option<f64>,
    /// Relative humidity percentage.
    pub humidity: Option<f64>,
    /// Current utilisation of the station, 0-100.
    pub current_load: Option<f64>,
}

/// A charging station supplied by the host process. Read-only to the
/// planner; nothing in this crate mutates station data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub location: Coordinate,
    #[serde(default)]
    pub conditions: StationConditions,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl Station {
    /// Convenience constructor for a station with no reported
    /// conditions or amenities.
    pub fn new(id: StationId, name: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id,
            name: name.into(),
            location,
            conditions: StationConditions::default(),
            amenities: Vec::new(),
        }
    }
}
