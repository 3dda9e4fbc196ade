// Shared fixtures for evroute-lib integration tests.
#![allow(dead_code)]

use evroute_lib::{
    AvailabilityFeatures, AvailabilityPredictor, Coordinate, PredictorError, Station,
};

pub const BANGALORE: Coordinate = Coordinate {
    latitude: 12.9716,
    longitude: 77.5946,
};
pub const CHENNAI: Coordinate = Coordinate {
    latitude: 13.0827,
    longitude: 80.2707,
};
pub const HYDERABAD: Coordinate = Coordinate {
    latitude: 17.385,
    longitude: 78.4867,
};
pub const MUMBAI: Coordinate = Coordinate {
    latitude: 19.076,
    longitude: 72.8777,
};
pub const DELHI: Coordinate = Coordinate {
    latitude: 28.6139,
    longitude: 77.209,
};

/// The five-city reference station set.
pub fn sample_stations() -> Vec<Station> {
    vec![
        Station::new(0, "Bangalore Central", BANGALORE),
        Station::new(1, "Chennai Central", CHENNAI),
        Station::new(2, "Hyderabad Central", HYDERABAD),
        Station::new(3, "Mumbai Central", MUMBAI),
        Station::new(4, "Delhi Central", DELHI),
    ]
}

/// Predictor returning the same probability for every station.
pub struct FixedPredictor(pub f64);

impl AvailabilityPredictor for FixedPredictor {
    fn predict(&self, _: &AvailabilityFeatures) -> Result<f64, PredictorError> {
        Ok(self.0)
    }
}

/// Predictor that always fails, simulating an unreachable model.
pub struct FailingPredictor;

impl AvailabilityPredictor for FailingPredictor {
    fn predict(&self, _: &AvailabilityFeatures) -> Result<f64, PredictorError> {
        Err(PredictorError::Unavailable {
            reason: "model process not running".to_string(),
        })
    }
}

/// Predictor that returns a probability outside [0, 1].
pub struct OutOfRangePredictor(pub f64);

impl AvailabilityPredictor for OutOfRangePredictor {
    fn predict(&self, _: &AvailabilityFeatures) -> Result<f64, PredictorError> {
        Ok(self.0)
    }
}
