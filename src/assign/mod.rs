//! Capacity-constrained assignment.
//!
//! A single-pass greedy walk over the score matrix, followed by a fallback
//! pass that places leftover students with default-flagged supervisors. Kept
//! deliberately greedy: upgrading to an optimal bipartite matching would
//! change documented outputs.

pub mod solver;
pub mod types;

#[cfg(test)]
mod tests;

pub use solver::greedy_assign;
pub use types::{Assignment, AssignmentScore, RunStatistics};
