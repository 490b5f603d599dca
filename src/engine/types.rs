use serde::Serialize;

use crate::assign::{Assignment, RunStatistics};

/// Assignments plus summary statistics for one matching run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchOutcome {
    /// Placements in commit order (primary pass first, then fallbacks).
    pub assignments: Vec<Assignment>,
    /// Run summary.
    pub statistics: RunStatistics,
}
