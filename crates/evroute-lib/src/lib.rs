//! Evroute library entry points.
//!
//! This crate plans charging stops for battery-limited electric
//! vehicles: a nearest-station search over geodesic distances, and a
//! greedy multi-stop planner that scores candidate stations by
//! distance, route deviation, predicted availability, and amenities.
//! Station data, coordinates, and the trained availability model are
//! supplied by the host process; higher-level consumers should only
//! depend on the functions exported here instead of reimplementing
//! behavior.

#![deny(warnings)]

pub mod car;
pub mod error;
pub mod geo;
pub mod predictor;
pub mod routing;
pub mod scoring;
pub mod search;
pub mod station;

pub use car::{CarCatalog, CarModel};
pub use error::{Error, Result};
pub use geo::Coordinate;
pub use predictor::{
    AvailabilityFeatures, AvailabilityPredictor, PredictorError, NEUTRAL_AVAILABILITY,
};
pub use routing::{plan_route, PlanOutcome, RechargePolicy, RoutePlan, RouteRequest};
pub use scoring::{score_station, ScoreContext, ScoreWeights, StationScore};
pub use search::{find_nearest, nearest_station, NearestStation};
pub use station::{Station, StationConditions, StationId};
