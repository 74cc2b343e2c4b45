//! Web layer for the metro route planner.
//!
//! HTML pages for picking a route and browsing the network, a full-screen
//! map endpoint that the pages embed, and a small JSON API.

mod dto;
mod routes;
mod state;
pub mod templates;

pub use dto::*;
pub use routes::{AppError, create_router, map_url};
pub use state::AppState;
pub use templates::*;
