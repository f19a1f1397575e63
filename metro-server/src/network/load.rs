//! Loading the network description file.
//!
//! The format is one segment per line, three fields separated by a
//! full-width comma: `station1，station2，distance`, with the distance in
//! kilometres. There is no header row and line order is insignificant.

use std::fs;
use std::path::Path;

use tracing::info;

use super::error::LoadError;
use super::graph::Network;

/// Field separator used by the description format (U+FF0C FULLWIDTH COMMA).
const FIELD_SEPARATOR: char = '，';

/// Read and parse a network description file.
pub fn load(path: impl AsRef<Path>) -> Result<Network, LoadError> {
    let text = fs::read_to_string(path)?;
    parse(&text)
}

/// Parse a network description.
///
/// Fails on the first malformed line; no partial network is returned.
/// Station names are trimmed but otherwise taken verbatim, so a misspelt
/// name simply becomes a separate node.
pub fn parse(text: &str) -> Result<Network, LoadError> {
    let mut network = Network::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let fields: Vec<&str> = raw.trim().split(FIELD_SEPARATOR).collect();
        let [a, b, distance] = fields.as_slice() else {
            return Err(LoadError::Parse {
                line,
                reason: format!(
                    "expected 3 fields separated by '{FIELD_SEPARATOR}', got {}",
                    fields.len()
                ),
            });
        };

        let a = a.trim();
        let b = b.trim();
        let distance = distance.trim();

        let distance_km: f64 = distance.parse().map_err(|_| LoadError::Parse {
            line,
            reason: format!("invalid distance {distance:?}"),
        })?;
        if !distance_km.is_finite() || distance_km < 0.0 {
            return Err(LoadError::Parse {
                line,
                reason: format!("distance must be a non-negative number, got {distance:?}"),
            });
        }

        network.add_segment(a, b, distance_km);
    }

    info!(
        stations = network.station_count(),
        segments = network.segment_count(),
        "network loaded"
    );

    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_valid_description() {
        let network = parse("A，B，1.0\nB，C，2.0\nA，C，5.0\n").unwrap();

        assert_eq!(network.station_count(), 3);
        assert_eq!(network.segment_count(), 3);
        assert_eq!(network.neighbors("A").len(), 2);
        assert_eq!(network.neighbors("B").len(), 2);
    }

    #[test]
    fn adjacency_symmetry_roundtrip() {
        let network = parse("A，B，1.5\nB，C，2.5\n").unwrap();

        for station in ["A", "B", "C"] {
            for neighbor in network.neighbors(station) {
                let back = network
                    .neighbors(&neighbor.station)
                    .iter()
                    .find(|n| n.station == station)
                    .expect("reverse entry missing");
                assert_eq!(back.distance_km, neighbor.distance_km);
            }
        }
    }

    #[test]
    fn last_write_wins_for_duplicate_pairs() {
        let network = parse("A，B，1.0\nA，B，9.0\n").unwrap();

        assert_eq!(network.segment_count(), 1);
        assert_eq!(network.neighbors("A")[0].distance_km, 9.0);
        assert_eq!(network.neighbors("B")[0].distance_km, 9.0);
    }

    #[test]
    fn fields_and_lines_are_trimmed() {
        let network = parse("  A ， B ， 1.0  \n").unwrap();

        assert!(network.contains("A"));
        assert!(network.contains("B"));
        assert_eq!(network.neighbors("A")[0].distance_km, 1.0);
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = parse("A，B，1.0\nA，B\n").unwrap_err();
        match err {
            LoadError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn extra_field_is_rejected() {
        assert!(parse("A，B，C，1.0\n").is_err());
    }

    #[test]
    fn ascii_comma_is_not_a_separator() {
        assert!(parse("A,B,1.0\n").is_err());
    }

    #[test]
    fn blank_interior_line_is_rejected() {
        assert!(parse("A，B，1.0\n\nB，C，2.0\n").is_err());
    }

    #[test]
    fn non_numeric_distance_is_rejected() {
        let err = parse("A，B，far\n").unwrap_err();
        match err {
            LoadError::Parse { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("far"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_and_non_finite_distances_are_rejected() {
        assert!(parse("A，B，-1.0\n").is_err());
        assert!(parse("A，B，NaN\n").is_err());
        assert!(parse("A，B，inf\n").is_err());
    }

    #[test]
    fn zero_distance_is_accepted() {
        let network = parse("A，B，0\n").unwrap();
        assert_eq!(network.neighbors("A")[0].distance_km, 0.0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "A，B，1.0\nB，C，2.0\n").unwrap();

        let network = load(file.path()).unwrap();
        assert_eq!(network.station_count(), 3);
        assert_eq!(network.segment_count(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load("/nonexistent/network.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
