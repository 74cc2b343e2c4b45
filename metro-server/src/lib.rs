//! Surat Metro route planner server.
//!
//! A web application that answers: "how do I get from this metro station
//! to that one, and where do I change lines?" and draws the answer on a
//! map over the real track geometry.

pub mod config;
pub mod domain;
pub mod geometry;
pub mod map;
pub mod network;
pub mod planner;
pub mod trace;
pub mod web;
