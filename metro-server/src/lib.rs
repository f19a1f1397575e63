//! Metro route query server.
//!
//! Answers point-to-point queries over a fixed metro network: the
//! distance-minimal route and the route with the fewest stops between
//! two stations.

pub mod network;
pub mod query;
pub mod router;
pub mod web;
