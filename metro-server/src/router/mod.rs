//! Shortest-path engine for the metro network.
//!
//! One Dijkstra traversal serves both query flavours; a weight policy
//! supplied by the caller decides what a segment costs, so the stored
//! distances are never rewritten between runs.

mod dijkstra;
mod weight;

pub use dijkstra::{RoutePath, shortest_path};
pub use weight::{DistanceWeight, UnitWeight, WeightPolicy};
