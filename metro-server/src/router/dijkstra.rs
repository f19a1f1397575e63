//! Single-source shortest paths.
//!
//! Standard Dijkstra over the whole reachable component, with a binary
//! min-heap and lazy deletion: an improved tentative distance pushes a new
//! heap entry, and entries that are stale by the time they are popped are
//! skipped. All working state (tentative distances, predecessor map, heap)
//! is private to one invocation; the shared `Network` is only read.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::trace;

use super::weight::WeightPolicy;
use crate::network::Network;

/// A computed route: the stations visited in order, endpoints inclusive,
/// and the total cost under the weight policy the search ran with.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePath {
    pub stations: Vec<String>,
    pub cost: f64,
}

impl RoutePath {
    /// Number of segments travelled: stations visited minus one.
    pub fn segment_count(&self) -> usize {
        self.stations.len().saturating_sub(1)
    }
}

/// Pending heap entry. Ordered as a min-heap on cost; ties break on the
/// station name only to keep the ordering total.
struct QueueEntry<'a> {
    cost: f64,
    station: &'a str,
}

impl PartialEq for QueueEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueueEntry<'_> {}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so that BinaryHeap pops the smallest cost first.
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.station.cmp(&self.station))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the cheapest route from `start` to `end` under `policy`.
///
/// Returns `None` when `end` is not reachable from `start`. `start == end`
/// yields the single-station route with cost 0. Callers are expected to have
/// validated that both names exist in the network; an unknown `end` simply
/// comes back unreachable.
///
/// Among routes of equal cost the choice is arbitrary (pop order decides).
pub fn shortest_path<'a, W: WeightPolicy>(
    network: &'a Network,
    start: &'a str,
    end: &str,
    policy: &W,
) -> Option<RoutePath> {
    // A station absent from `best` has tentative distance infinity.
    let mut best: HashMap<&'a str, f64> = HashMap::new();
    let mut predecessor: HashMap<&'a str, &'a str> = HashMap::new();
    let mut queue: BinaryHeap<QueueEntry<'a>> = BinaryHeap::new();

    best.insert(start, 0.0);
    queue.push(QueueEntry {
        cost: 0.0,
        station: start,
    });

    while let Some(QueueEntry { cost, station }) = queue.pop() {
        if best.get(station).is_some_and(|&known| cost > known) {
            continue; // stale entry
        }

        for neighbor in network.neighbors(station) {
            let next_cost = cost + policy.cost_of(neighbor.distance_km);
            let improves = match best.get(neighbor.station.as_str()) {
                Some(&known) => next_cost < known,
                None => true,
            };
            if improves {
                best.insert(&neighbor.station, next_cost);
                predecessor.insert(&neighbor.station, station);
                queue.push(QueueEntry {
                    cost: next_cost,
                    station: &neighbor.station,
                });
            }
        }
    }

    let cost = *best.get(end)?;
    let stations = reconstruct(&predecessor, start, end)?;

    trace!(
        start,
        end,
        cost,
        segments = stations.len() - 1,
        "shortest path found"
    );

    Some(RoutePath { stations, cost })
}

/// Walk the predecessor map backward from `end` and return the forward path.
///
/// The walk terminates: a predecessor always has a strictly smaller distance
/// from the start, so the chain cannot cycle. A chain that does not end at
/// `start` means `end` was never reached; reporting that as `None` keeps a
/// degenerate partial path from escaping.
fn reconstruct(
    predecessor: &HashMap<&str, &str>,
    start: &str,
    end: &str,
) -> Option<Vec<String>> {
    let mut stations = vec![end.to_string()];
    let mut current = end;

    while let Some(&previous) = predecessor.get(current) {
        stations.push(previous.to_string());
        current = previous;
    }

    if current != start {
        return None;
    }

    stations.reverse();
    Some(stations)
}
