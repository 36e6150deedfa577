//! Railway journey planner.
//!
//! Models a small railway network and answers: which trains call at a
//! station, when they leave it, and whether two stations are at most one
//! stop apart on some train.

pub mod cli;
pub mod domain;
pub mod planner;
pub mod timetable;
