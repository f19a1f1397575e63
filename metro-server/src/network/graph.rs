//! The in-memory network graph.

use std::collections::HashMap;

/// An adjacency entry: a directly connected station and the physical
/// length of the connecting segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// Name of the neighbouring station
    pub station: String,

    /// Segment length in kilometres
    pub distance_km: f64,
}

/// An undirected weighted graph of metro stations.
///
/// Station names are compared by exact string match. The adjacency relation
/// is symmetric by construction: inserting a segment records it in both
/// directions with the same weight. Inserting a segment between a pair that
/// already has one overwrites the old weight (last write wins) rather than
/// creating a multi-edge.
#[derive(Debug, Default)]
pub struct Network {
    adjacency: HashMap<String, Vec<Neighbor>>,
    segment_count: usize,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a segment between `a` and `b`, in both directions.
    ///
    /// If the pair is already connected, the stored weight is replaced.
    pub fn add_segment(&mut self, a: &str, b: &str, distance_km: f64) {
        let inserted = self.upsert(a, b, distance_km);
        self.upsert(b, a, distance_km);
        if inserted {
            self.segment_count += 1;
        }
    }

    /// Insert or overwrite one direction of a segment. Returns `true` if the
    /// neighbour entry did not exist before.
    fn upsert(&mut self, from: &str, to: &str, distance_km: f64) -> bool {
        let neighbors = self.adjacency.entry(from.to_string()).or_default();
        match neighbors.iter_mut().find(|n| n.station == to) {
            Some(existing) => {
                existing.distance_km = distance_km;
                false
            }
            None => {
                neighbors.push(Neighbor {
                    station: to.to_string(),
                    distance_km,
                });
                true
            }
        }
    }

    /// Whether the station occurs anywhere in the network.
    pub fn contains(&self, station: &str) -> bool {
        self.adjacency.contains_key(station)
    }

    /// Stations directly connected to `station`. Empty for unknown stations.
    pub fn neighbors(&self, station: &str) -> &[Neighbor] {
        self.adjacency
            .get(station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// All station names, in no particular order.
    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of distinct stations.
    pub fn station_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct segments (station pairs).
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }
}
