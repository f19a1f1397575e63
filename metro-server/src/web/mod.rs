//! Web layer for the metro route query server.
//!
//! Provides the HTTP endpoint the front end calls with two station names;
//! route computation itself lives in [`crate::query`].

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
