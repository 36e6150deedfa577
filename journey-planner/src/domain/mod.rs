//! Domain types for the journey planner.
//!
//! This module contains the core domain model types that represent
//! validated timetable data. All types enforce their invariants at
//! construction time, so code that receives these types can trust their
//! validity.

mod error;
mod station;
mod time;
mod train;

pub use error::InvalidArgument;
pub use station::Station;
pub use time::Time;
pub use train::{Stop, Train, TrainInfo};
