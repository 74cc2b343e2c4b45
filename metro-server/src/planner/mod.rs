//! Route planner.
//!
//! Finds the shortest station sequence between two stations of the
//! [`MetroNetwork`](crate::network::MetroNetwork) and annotates each station
//! with the line being travelled and whether the passenger changes line.

mod plan;
mod route;

pub use plan::{PlanError, Planner};
pub use route::{Leg, Route, RouteStep};
