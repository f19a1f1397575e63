//! Point-to-point route queries.
//!
//! The facade validates the station names, runs the shortest-path engine
//! once per weight policy and derives the presentation-ready figures. Each
//! query is a pure function of the immutable network and the two names;
//! nothing is retained between queries.

use tracing::debug;

use crate::network::Network;
use crate::router::{DistanceWeight, UnitWeight, shortest_path};

/// Assumed average train speed for the travel-time estimate, km/h.
pub const AVERAGE_SPEED_KMH: f64 = 35.0;

/// Dwell time charged per station on the route, hours.
pub const DWELL_HOURS_PER_STATION: f64 = 0.03;

/// Errors a route query can report.
///
/// Both are per-query outcomes: the shared network is unaffected and later
/// queries proceed normally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The name is blank or does not occur anywhere in the network
    #[error("unknown station: {0:?}")]
    UnknownStation(String),

    /// Both stations exist but no sequence of segments connects them
    #[error("no route between {from} and {to}")]
    Unreachable { from: String, to: String },
}

/// The distance-minimal route.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceRoute {
    /// Stations visited in order, endpoints inclusive
    pub stations: Vec<String>,

    /// Total physical length in kilometres
    pub length_km: f64,

    /// Estimated travel time in hours: riding time at the average speed
    /// plus dwell time per station on this route
    pub eta_hours: f64,
}

/// The route visiting the fewest stations.
#[derive(Debug, Clone, PartialEq)]
pub struct FewestStopsRoute {
    /// Stations visited in order, endpoints inclusive
    pub stations: Vec<String>,

    /// Segments travelled: stations visited minus one
    pub stops: usize,
}

/// Answer to a point-to-point query: both optimisation targets, computed
/// independently over the same network.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    pub distance_optimal: DistanceRoute,
    pub fewest_stops: FewestStopsRoute,
}

/// Plan a route between two stations, by name.
///
/// Names are trimmed before lookup. A blank name and a name that occurs
/// nowhere in the network are both reported as [`RouteError::UnknownStation`].
pub fn plan(network: &Network, from: &str, to: &str) -> Result<RoutePlan, RouteError> {
    let from = validate_station(network, from)?;
    let to = validate_station(network, to)?;

    let unreachable = || RouteError::Unreachable {
        from: from.to_string(),
        to: to.to_string(),
    };

    // The two sub-queries are independent; either policy may run first.
    let by_distance = shortest_path(network, from, to, &DistanceWeight).ok_or_else(unreachable)?;
    let by_stops = shortest_path(network, from, to, &UnitWeight).ok_or_else(unreachable)?;

    let eta_hours = by_distance.cost / AVERAGE_SPEED_KMH
        + by_distance.stations.len() as f64 * DWELL_HOURS_PER_STATION;

    debug!(
        from,
        to,
        length_km = by_distance.cost,
        stops = by_stops.segment_count(),
        "route planned"
    );

    Ok(RoutePlan {
        distance_optimal: DistanceRoute {
            length_km: by_distance.cost,
            eta_hours,
            stations: by_distance.stations,
        },
        fewest_stops: FewestStopsRoute {
            stops: by_stops.segment_count(),
            stations: by_stops.stations,
        },
    })
}

/// Trim a queried name and check it against the network's station set.
fn validate_station<'a>(network: &Network, name: &'a str) -> Result<&'a str, RouteError> {
    let name = name.trim();
    if name.is_empty() || !network.contains(name) {
        return Err(RouteError::UnknownStation(name.to_string()));
    }
    Ok(name)
}
