//! Network loading error types.

/// Errors raised while loading the network description.
///
/// Any error aborts the load; a partial graph is never produced.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The description file could not be read
    #[error("failed to read network file: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the description did not parse
    #[error("malformed network data at line {line}: {reason}")]
    Parse { line: usize, reason: String },
}
