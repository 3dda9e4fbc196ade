//! Greedy multi-stop route planning.
//!
//! This module provides:
//! - [`RouteRequest`] - High-level planning request
//! - [`RechargePolicy`] - Range regained at each charging stop
//! - [`RoutePlan`] / [`PlanOutcome`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//!
//! The planner repeatedly picks the best-scoring station within the
//! current battery range until the destination is reachable on a single
//! charge. Failure to complete is a normal result, not an error: the
//! returned plan carries the stops accumulated so far together with an
//! outcome describing why planning stopped.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::predictor::AvailabilityPredictor;
use crate::scoring::{score_station, ScoreContext, ScoreWeights};
use crate::station::Station;

/// Neutral mid-point traffic level used when the host supplies none.
const DEFAULT_TRAFFIC_LEVEL: f64 = 50.0;

/// Range regained by the vehicle at a charging stop.
///
/// Only a full recharge is modelled today; the policy is an explicit
/// enum so partial-charge or time-cost variants can slot in without
/// touching the planning loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RechargePolicy {
    /// The battery is restored to full range at every stop.
    #[default]
    FullRecharge,
}

impl RechargePolicy {
    /// Range available after recharging, given the car's full range.
    pub fn range_after_stop(&self, car_range_km: f64) -> f64 {
        match self {
            RechargePolicy::FullRecharge => car_range_km,
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub start: Coordinate,
    pub end: Coordinate,
    /// Full-charge range of the vehicle in kilometers.
    pub car_range_km: f64,
    /// Departure time; `None` means the time the request is planned.
    pub departure: Option<DateTime<Utc>>,
    /// Traffic level on a 0-100 scale.
    pub traffic_level: f64,
    pub recharge_policy: RechargePolicy,
    pub weights: ScoreWeights,
    /// Absolute deadline for the planning computation itself. When it
    /// passes mid-search the planner returns what it has with
    /// [`PlanOutcome::DeadlineExceeded`].
    pub deadline: Option<Instant>,
}

impl RouteRequest {
    /// Request with default traffic, weights, and recharge policy.
    pub fn new(start: Coordinate, end: Coordinate, car_range_km: f64) -> Self {
        Self {
            start,
            end,
            car_range_km,
            departure: None,
            traffic_level: DEFAULT_TRAFFIC_LEVEL,
            recharge_policy: RechargePolicy::default(),
            weights: ScoreWeights::default(),
            deadline: None,
        }
    }

    pub fn with_departure(mut self, departure: DateTime<Utc>) -> Self {
        self.departure = Some(departure);
        self
    }

    pub fn with_traffic_level(mut self, traffic_level: f64) -> Self {
        self.traffic_level = traffic_level;
        self
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Why the planner stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanOutcome {
    /// The destination is reachable from the last stop (or directly).
    Complete,
    /// No station was within range; the plan is the maximal feasible
    /// prefix and the journey cannot be completed as requested.
    NoReachableStation,
    /// The iteration safety bound fired before the destination came
    /// into range, typically because the best candidate stopped making
    /// forward progress.
    IterationLimit,
    /// The caller-supplied deadline passed during candidate scoring.
    DeadlineExceeded,
}

impl PlanOutcome {
    /// Whether the plan reaches the destination.
    pub fn is_complete(&self) -> bool {
        matches!(self, PlanOutcome::Complete)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    /// Charging stops in travel order. Empty with a `Complete` outcome
    /// means the destination was already within range.
    pub stops: Vec<Station>,
    /// Driven distance across all hops, including the final leg to the
    /// destination when the plan is complete.
    pub total_distance_km: f64,
    pub outcome: PlanOutcome,
    /// Set when any candidate was scored with the neutral availability
    /// fallback because the predictor failed.
    pub degraded: bool,
}

impl RoutePlan {
    /// Number of charging stops in the plan.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }
}

fn validate_coordinate(coordinate: Coordinate) -> Result<()> {
    if coordinate.is_valid() {
        Ok(())
    } else {
        Err(Error::InvalidCoordinate {
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        })
    }
}

fn deadline_passed(deadline: Option<Instant>) -> bool {
    deadline.is_some_and(|deadline| Instant::now() >= deadline)
}

/// Compute a multi-stop route from `request.start` to `request.end`.
///
/// Greedy selection: each iteration scores every station within the
/// current range and commits to the strictly best-scoring one, with
/// ties broken towards the earliest station in the input list so
/// results are reproducible. A full recharge (per the request's
/// [`RechargePolicy`]) is assumed at each stop.
///
/// The loop is bounded to `stations.len() + 1` iterations as a guard
/// against inputs where the best candidate makes no forward progress,
/// such as a station coincident with the current position.
pub fn plan_route(
    request: &RouteRequest,
    stations: &[Station],
    predictor: &dyn AvailabilityPredictor,
) -> Result<RoutePlan> {
    validate_coordinate(request.start)?;
    validate_coordinate(request.end)?;

    if !request.car_range_km.is_finite() || request.car_range_km <= 0.0 {
        return Err(Error::NonPositiveRange {
            range_km: request.car_range_km,
        });
    }

    let ctx = ScoreContext {
        destination: request.end,
        time: request.departure.unwrap_or_else(Utc::now),
        traffic_level: request.traffic_level,
        battery_range_km: request.car_range_km,
        weights: request.weights,
    };

    let mut current = request.start;
    let mut remaining_range = request.car_range_km;
    let mut remaining_distance = current.distance_to(&request.end);

    let mut stops: Vec<Station> = Vec::new();
    let mut driven = 0.0;
    let mut degraded = false;

    let max_iterations = stations.len() + 1;
    let mut iterations = 0;

    while remaining_range < remaining_distance {
        iterations += 1;
        if iterations > max_iterations {
            tracing::debug!(
                stops = stops.len(),
                "iteration bound reached before destination came into range"
            );
            return Ok(RoutePlan {
                stops,
                total_distance_km: driven,
                outcome: PlanOutcome::IterationLimit,
                degraded,
            });
        }

        let mut best: Option<(usize, f64, f64)> = None;
        for (index, station) in stations.iter().enumerate() {
            if deadline_passed(request.deadline) {
                tracing::debug!(stops = stops.len(), "planning deadline exceeded");
                return Ok(RoutePlan {
                    stops,
                    total_distance_km: driven,
                    outcome: PlanOutcome::DeadlineExceeded,
                    degraded,
                });
            }

            let hop = current.distance_to(&station.location);
            if hop > remaining_range {
                continue;
            }

            let score = score_station(station, current, &ctx, predictor);
            degraded |= score.degraded;

            // Strict comparison keeps the earliest index on ties.
            if best.is_none_or(|(_, best_total, _)| score.total > best_total) {
                best = Some((index, score.total, hop));
            }
        }

        let Some((index, total, hop)) = best else {
            tracing::debug!(stops = stops.len(), "no station within remaining range");
            return Ok(RoutePlan {
                stops,
                total_distance_km: driven,
                outcome: PlanOutcome::NoReachableStation,
                degraded,
            });
        };

        let selected = &stations[index];
        tracing::debug!(
            station = selected.id,
            score = total,
            hop_km = hop,
            "selected charging stop"
        );

        stops.push(selected.clone());
        driven += hop;
        current = selected.location;
        remaining_range = request.recharge_policy.range_after_stop(request.car_range_km);
        remaining_distance = current.distance_to(&request.end);
    }

    Ok(RoutePlan {
        stops,
        total_distance_km: driven + remaining_distance,
        outcome: PlanOutcome::Complete,
        degraded,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_uses_neutral_traffic() {
        let request = RouteRequest::new(
            Coordinate::new(12.9, 77.5),
            Coordinate::new(28.6, 77.2),
            300.0,
        );
        assert_eq!(request.traffic_level, 50.0);
        assert_eq!(request.recharge_policy, RechargePolicy::FullRecharge);
        assert!(request.departure.is_none());
        assert!(request.deadline.is_none());
    }

    #[test]
    fn full_recharge_restores_full_range() {
        assert_eq!(RechargePolicy::FullRecharge.range_after_stop(412.5), 412.5);
    }

    #[test]
    fn outcome_completeness() {
        assert!(PlanOutcome::Complete.is_complete());
        assert!(!PlanOutcome::NoReachableStation.is_complete());
        assert!(!PlanOutcome::IterationLimit.is_complete());
        assert!(!PlanOutcome::DeadlineExceeded.is_complete());
    }
}
