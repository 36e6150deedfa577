//! Configuration for the journey planner.

/// Configuration parameters for planner queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of entries on a departure board.
    pub board_limit: usize,
}

impl PlannerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(board_limit: usize) -> Self {
        Self { board_limit }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self { board_limit: 10 }
    }
}
