//! Weighted multi-criterion scoring of candidate charging stations.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::geo::Coordinate;
use crate::predictor::{
    validate_probability, AvailabilityFeatures, AvailabilityPredictor, NEUTRAL_AVAILABILITY,
};
use crate::station::Station;

/// Amenity count at which the amenity sub-score saturates.
const AMENITY_SATURATION: f64 = 10.0;

/// Relative weights for the four scoring criteria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreWeights {
    pub distance: f64,
    pub route_deviation: f64,
    pub availability: f64,
    pub amenities: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            distance: 0.3,
            route_deviation: 0.2,
            availability: 0.3,
            amenities: 0.2,
        }
    }
}

/// Context a candidate station is scored against.
#[derive(Debug, Clone, Copy)]
pub struct ScoreContext {
    /// Final destination of the journey.
    pub destination: Coordinate,
    /// Time the charge stop would happen.
    pub time: DateTime<Utc>,
    /// Traffic level on a 0-100 scale.
    pub traffic_level: f64,
    /// Full-charge range of the vehicle in kilometers.
    pub battery_range_km: f64,
    pub weights: ScoreWeights,
}

/// Score breakdown for one candidate station.
///
/// The distance and route-deviation components go negative when a
/// station sits far out relative to the battery range; that is
/// intentional and unclamped so marginal stations rank below closer,
/// more direct alternatives. The amenity component saturates at 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StationScore {
    pub total: f64,
    pub distance: f64,
    pub route_deviation: f64,
    pub availability: f64,
    pub amenities: f64,
    /// Set when the availability predictor failed and the neutral
    /// fallback probability was substituted.
    pub degraded: bool,
}

/// Score a candidate station from `current` against the context.
///
/// Pure aside from the predictor call; station data is never mutated.
pub fn score_station(
    station: &Station,
    current: Coordinate,
    ctx: &ScoreContext,
    predictor: &dyn AvailabilityPredictor,
) -> StationScore {
    let to_station = current.distance_to(&station.location);
    let station_to_dest = station.location.distance_to(&ctx.destination);
    let direct = current.distance_to(&ctx.destination);

    let distance = 1.0 - to_station / ctx.battery_range_km;
    let route_deviation =
        1.0 - (to_station + station_to_dest - direct).abs() / ctx.battery_range_km;

    let features = AvailabilityFeatures::for_station(station, ctx.time, ctx.traffic_level);
    let (availability, degraded) = match predictor
        .predict(&features)
        .and_then(validate_probability)
    {
        Ok(probability) => (probability, false),
        Err(error) => {
            tracing::warn!(
                station = station.id,
                %error,
                "availability predictor failed; using neutral fallback"
            );
            (NEUTRAL_AVAILABILITY, true)
        }
    };

    let amenities = (station.amenities.len() as f64 / AMENITY_SATURATION).min(1.0);

    let total = ctx.weights.distance * distance
        + ctx.weights.route_deviation * route_deviation
        + ctx.weights.availability * availability
        + ctx.weights.amenities * amenities;

    StationScore {
        total,
        distance,
        route_deviation,
        availability,
        amenities,
        degraded,
    }
}
