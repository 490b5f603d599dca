use serde::Serialize;

use crate::matrix::round2;
use crate::model::{Student, Supervisor};

/// Score attached to an assignment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssignmentScore {
    /// Blended matrix score from the primary greedy pass.
    Scored(f64),
    /// Fallback placement with a default supervisor; carries no number.
    Default,
}

impl AssignmentScore {
    /// Numeric value, if any.
    pub fn numeric(&self) -> Option<f64> {
        match self {
            AssignmentScore::Scored(value) => Some(*value),
            AssignmentScore::Default => None,
        }
    }

    /// Returns `true` for fallback placements.
    pub fn is_default(&self) -> bool {
        matches!(self, AssignmentScore::Default)
    }
}

impl std::fmt::Display for AssignmentScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentScore::Scored(value) => write!(f, "{value:.2}"),
            AssignmentScore::Default => write!(f, "Default Assignment"),
        }
    }
}

impl Serialize for AssignmentScore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            AssignmentScore::Scored(value) => serializer.serialize_f64(*value),
            AssignmentScore::Default => serializer.serialize_str("Default Assignment"),
        }
    }
}

/// One student placed with one supervisor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    /// The placed student.
    pub student: Student,
    /// The receiving supervisor.
    pub supervisor: Supervisor,
    /// Blended score or the default-placement marker.
    pub score: AssignmentScore,
}

/// Summary counters for one matching run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunStatistics {
    /// Students submitted.
    pub total_students: usize,
    /// Students placed (primary or fallback).
    pub assigned: usize,
    /// Students left without a supervisor.
    pub unassigned: usize,
    /// Two-decimal mean of numeric scores; `None` when every placement was a
    /// default (or none exist), never NaN.
    pub average_score: Option<f64>,
}

impl RunStatistics {
    /// Derives statistics from an assignment list.
    pub fn from_assignments(total_students: usize, assignments: &[Assignment]) -> Self {
        let assigned = assignments.len();

        let numeric: Vec<f64> = assignments
            .iter()
            .filter_map(|assignment| assignment.score.numeric())
            .collect();

        let average_score = if numeric.is_empty() {
            None
        } else {
            Some(round2(numeric.iter().sum::<f64>() / numeric.len() as f64))
        };

        Self {
            total_students,
            assigned,
            unassigned: total_students.saturating_sub(assigned),
            average_score,
        }
    }
}
