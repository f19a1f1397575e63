//! Segment weight policies.
//!
//! The policies are stateless and read the stored segment length without
//! modifying it, so both can run against the same shared `Network` in any
//! order.

/// Maps a segment to the cost accumulated for traversing it.
pub trait WeightPolicy {
    fn cost_of(&self, distance_km: f64) -> f64;
}

/// Real-world policy: a segment costs its physical length. Minimising this
/// yields the distance-optimal route.
#[derive(Debug, Clone, Copy, Default)]
pub struct DistanceWeight;

impl WeightPolicy for DistanceWeight {
    fn cost_of(&self, distance_km: f64) -> f64 {
        distance_km
    }
}

/// Hop-counting policy: every segment costs 1, so the cheapest route is the
/// one with the fewest stops.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitWeight;

impl WeightPolicy for UnitWeight {
    fn cost_of(&self, _distance_km: f64) -> f64 {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_weight_returns_stored_length() {
        assert_eq!(DistanceWeight.cost_of(3.7), 3.7);
        assert_eq!(DistanceWeight.cost_of(0.0), 0.0);
    }

    #[test]
    fn unit_weight_ignores_stored_length() {
        assert_eq!(UnitWeight.cost_of(3.7), 1.0);
        assert_eq!(UnitWeight.cost_of(100.0), 1.0);
    }
}
