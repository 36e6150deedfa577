//! Journey planner queries.
//!
//! This module answers questions about a fixed train set: which trains
//! call at a station, when they leave it, and whether two stations are
//! close together on some train's route.

mod config;
mod journey_planner;

pub use config::PlannerConfig;
pub use journey_planner::{Departure, Hop, JourneyPlanner};
