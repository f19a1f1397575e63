//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::query::RoutePlan;

/// Query parameters for a route lookup.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Departure station name
    pub from: String,

    /// Destination station name
    pub to: String,
}

/// The distance-minimal alternative.
#[derive(Debug, Serialize)]
pub struct DistanceRouteDto {
    /// Stations visited in order
    pub stations: Vec<String>,

    /// Total length in kilometres
    pub length_km: f64,

    /// Estimated travel time in hours
    pub eta_hours: f64,
}

/// The fewest-stops alternative.
#[derive(Debug, Serialize)]
pub struct FewestStopsDto {
    /// Stations visited in order
    pub stations: Vec<String>,

    /// Stations visited, endpoints included
    pub station_count: usize,

    /// Segments travelled
    pub stops: usize,
}

/// Response for a route lookup.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Route minimising physical distance
    pub distance_optimal: DistanceRouteDto,

    /// Route minimising stations visited
    pub fewest_stops: FewestStopsDto,
}

impl RouteResponse {
    /// Build the wire representation of a route plan.
    pub fn from_plan(plan: RoutePlan) -> Self {
        Self {
            distance_optimal: DistanceRouteDto {
                stations: plan.distance_optimal.stations,
                length_km: plan.distance_optimal.length_km,
                eta_hours: plan.distance_optimal.eta_hours,
            },
            fewest_stops: FewestStopsDto {
                station_count: plan.fewest_stops.stations.len(),
                stops: plan.fewest_stops.stops,
                stations: plan.fewest_stops.stations,
            },
        }
    }
}

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}
