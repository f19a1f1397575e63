//! The metro network graph and its loader.
//!
//! The network is parsed from a text description once at startup and is
//! read-only afterwards. Queries share one `Network` and never mutate it.

mod error;
mod graph;
mod load;

pub use error::LoadError;
pub use graph::{Neighbor, Network};
pub use load::{load, parse};
