//! Nearest-station search over the virtual start/station graph.
//!
//! The graph has one synthetic start node plus one node per station.
//! Every pair of nodes is connected by its great-circle distance, so
//! the search is Dijkstra's algorithm that settles nodes in order of
//! tentative distance and stops at the first station popped from the
//! frontier. With direct start-to-station edges always present and all
//! weights non-negative, that first settled station is the one nearest
//! to the start by direct distance; relays through other stations exist
//! in the model but can never win. This mirrors the observable
//! behaviour callers depend on and is deliberately not "upgraded" to an
//! exhaustive multi-hop search.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::geo::Coordinate;
use crate::station::Station;

/// Node in the virtual search graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Node {
    Start,
    Station(usize),
}

/// Result of a nearest-station search.
#[derive(Debug, Clone, Serialize)]
pub struct NearestStation {
    /// The nearest station by settled distance.
    pub station: Station,
    /// Settled distance from the start in kilometers.
    pub distance_km: f64,
    /// Predecessor chain from the start to the station, start node
    /// excluded, in travel order. Ends with `station` itself.
    pub path: Vec<Station>,
}

/// Find the nearest charging station to `start`.
///
/// Returns `None` when `stations` is empty; the search itself never
/// fails. Ties between equidistant stations break towards the lower
/// station index, so results are reproducible for a fixed input order.
pub fn find_nearest(start: Coordinate, stations: &[Station]) -> Option<NearestStation> {
    let mut distances = vec![f64::INFINITY; stations.len()];
    let mut visited = vec![false; stations.len()];
    let mut parents: Vec<Option<Node>> = vec![None; stations.len()];
    let mut start_visited = false;

    let mut queue = BinaryHeap::new();
    queue.push(QueueEntry::new(Node::Start, 0.0));

    while let Some(entry) = queue.pop() {
        let current = match entry.node {
            Node::Start => {
                if start_visited {
                    continue;
                }
                start_visited = true;
                start
            }
            Node::Station(index) => {
                if visited[index] {
                    continue;
                }
                visited[index] = true;
                // First non-start node settled: this is the nearest
                // station. Reconstruct the predecessor chain and stop.
                return Some(NearestStation {
                    station: stations[index].clone(),
                    distance_km: entry.cost.0,
                    path: reconstruct_path(&parents, stations, index),
                });
            }
        };

        for (index, station) in stations.iter().enumerate() {
            if visited[index] {
                continue;
            }
            let next_cost = entry.cost.0 + current.distance_to(&station.location);
            if next_cost < distances[index] {
                distances[index] = next_cost;
                parents[index] = Some(entry.node);
                queue.push(QueueEntry::new(Node::Station(index), next_cost));
            }
        }
    }

    None
}

/// Nearest-station search with input validation.
///
/// Unlike [`find_nearest`], an empty station list is an error here: a
/// caller asking "where is the nearest station" expects an answer, so
/// the absence of any candidate is surfaced as [`Error::NoStations`]
/// rather than silently returning nothing.
pub fn nearest_station(start: Coordinate, stations: &[Station]) -> Result<NearestStation> {
    if !start.is_valid() {
        return Err(Error::InvalidCoordinate {
            latitude: start.latitude,
            longitude: start.longitude,
        });
    }

    find_nearest(start, stations).ok_or(Error::NoStations)
}

fn reconstruct_path(
    parents: &[Option<Node>],
    stations: &[Station],
    goal: usize,
) -> Vec<Station> {
    let mut path = Vec::new();
    let mut current = Some(Node::Station(goal));
    while let Some(Node::Station(index)) = current {
        path.push(stations[index].clone());
        current = parents[index];
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    node: Node,
    cost: FloatOrd,
}

impl QueueEntry {
    fn new(node: Node, cost: f64) -> Self {
        Self {
            node,
            cost: FloatOrd(cost),
        }
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost;
        // equal costs break towards the lower node index.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
