//! Timetable documents.
//!
//! A timetable is a JSON file listing trains and their schedules. It is
//! the interchange format the planner is loaded from.

mod document;
mod error;

pub use document::Timetable;
pub use error::TimetableError;
