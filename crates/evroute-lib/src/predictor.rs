//! Seam to the external availability model.
//!
//! The trained statistical model that predicts whether a station will
//! have a free charger lives outside this crate. The planner only sees
//! it as an [`AvailabilityPredictor`] handle owned by the host process,
//! which replaces the global mutable model state of earlier designs
//! with an explicit session object.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;
use thiserror::Error;

use crate::station::Station;

/// Probability substituted when the predictor fails or returns an
/// out-of-range value. Scoring marks the result as degraded whenever
/// this fallback is used.
pub const NEUTRAL_AVAILABILITY: f64 = 0.5;

/// Defaults applied when a station does not report conditions.
const DEFAULT_TEMPERATURE: f64 = 25.0;
const DEFAULT_HUMIDITY: f64 = 60.0;
const DEFAULT_LOAD: f64 = 50.0;

/// Fixed feature vector consumed by the availability model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AvailabilityFeatures {
    /// Hour of day, 0-23.
    pub hour_of_day: u32,
    /// Day of week, 0 = Monday through 6 = Sunday.
    pub day_of_week: u32,
    /// Traffic level on a 0-100 scale.
    pub traffic_level: f64,
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity percentage.
    pub humidity: f64,
    /// Station utilisation, 0-100.
    pub battery_level: f64,
}

impl AvailabilityFeatures {
    /// Build the feature vector for a station at a point in time,
    /// substituting defaults for unreported conditions.
    pub fn for_station(station: &Station, time: DateTime<Utc>, traffic_level: f64) -> Self {
        Self {
            hour_of_day: time.hour(),
            day_of_week: time.weekday().num_days_from_monday(),
            traffic_level,
            temperature: station.conditions.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            humidity: station.conditions.humidity.unwrap_or(DEFAULT_HUMIDITY),
            battery_level: station.conditions.current_load.unwrap_or(DEFAULT_LOAD),
        }
    }
}

/// Errors surfaced by the external availability predictor.
///
/// These never abort a planning request; scoring recovers with
/// [`NEUTRAL_AVAILABILITY`] and flags the plan as degraded.
#[derive(Debug, Clone, Error)]
pub enum PredictorError {
    /// The predictor could not be reached or failed internally.
    #[error("availability predictor unavailable: {reason}")]
    Unavailable { reason: String },

    /// The predictor returned a value outside [0, 1].
    #[error("availability predictor returned invalid probability {value}")]
    InvalidProbability { value: f64 },
}

/// Handle to the external availability model.
///
/// Implementations must be pure from the planner's point of view: no
/// mutation of station data, and safe to share across concurrent
/// planning requests.
pub trait AvailabilityPredictor: Send + Sync {
    /// Predict the probability, in [0, 1], that the station described
    /// by `features` has a free charger.
    fn predict(&self, features: &AvailabilityFeatures) -> Result<f64, PredictorError>;
}

/// Validate a raw predictor output, converting out-of-range or
/// non-finite values into [`PredictorError::InvalidProbability`].
pub(crate) fn validate_probability(value: f64) -> Result<f64, PredictorError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(PredictorError::InvalidProbability { value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::Coordinate;
    use crate::station::StationConditions;
    use chrono::TimeZone;

    #[test]
    fn features_apply_documented_defaults() {
        let station = Station::new(1, "Hyderabad Central", Coordinate::new(17.385, 78.4867));
        // Wednesday 14:30 UTC.
        let time = Utc.with_ymd_and_hms(2025, 6, 4, 14, 30, 0).unwrap();

        let features = AvailabilityFeatures::for_station(&station, time, 50.0);
        assert_eq!(features.hour_of_day, 14);
        assert_eq!(features.day_of_week, 2);
        assert_eq!(features.temperature, 25.0);
        assert_eq!(features.humidity, 60.0);
        assert_eq!(features.battery_level, 50.0);
    }

    #[test]
    fn features_prefer_reported_conditions() {
        let mut station = Station::new(2, "Mumbai Central", Coordinate::new(19.076, 72.8777));
        station.conditions = StationConditions {
            temperature: Some(31.0),
            humidity: Some(82.0),
            current_load: Some(90.0),
        };
        let time = Utc.with_ymd_and_hms(2025, 6, 7, 9, 0, 0).unwrap();

        let features = AvailabilityFeatures::for_station(&station, time, 75.0);
        assert_eq!(features.temperature, 31.0);
        assert_eq!(features.humidity, 82.0);
        assert_eq!(features.battery_level, 90.0);
        assert_eq!(features.day_of_week, 5);
    }

    #[test]
    fn probability_validation_rejects_out_of_range() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(1.0).is_ok());
        assert!(validate_probability(-0.01).is_err());
        assert!(validate_probability(1.5).is_err());
        assert!(validate_probability(f64::NAN).is_err());
    }
}
