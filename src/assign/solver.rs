use std::cmp::Ordering;

use tracing::{debug, info};

use crate::matrix::ScoreMatrix;
use crate::model::{Student, Supervisor};

use super::types::{Assignment, AssignmentScore};

/// Greedy capacity-constrained assignment over a score matrix.
///
/// Phase 1 walks all positive-score pairs in descending score order (a
/// stable sort over student-major enumeration, so equal scores keep their
/// original order) and commits each pair whose student is still free and
/// whose supervisor has capacity left. No backtracking: a student can lose
/// their best supervisor to an earlier, higher-scoring pair.
///
/// Phase 2 places each remaining student with the first default-flagged
/// supervisor (in input order) that has room, marked
/// [`AssignmentScore::Default`]. Students that still fit nowhere stay
/// unassigned for this run.
///
/// The matrix dimensions must match the record slices.
pub fn greedy_assign(
    students: &[Student],
    supervisors: &[Supervisor],
    matrix: &ScoreMatrix,
) -> Vec<Assignment> {
    let mut assignments = Vec::new();
    let mut student_taken = vec![false; students.len()];
    let mut remaining_capacity: Vec<u32> = supervisors.iter().map(|s| s.capacity).collect();

    let mut ranked: Vec<(usize, usize, f64)> = matrix
        .entries()
        .filter(|&(_, _, score)| score > 0.0)
        .collect();
    ranked.sort_by(|a, b| b.2.partial_cmp(&a.2).unwrap_or(Ordering::Equal));

    for (stu_idx, sup_idx, score) in ranked {
        if student_taken[stu_idx] || remaining_capacity[sup_idx] == 0 {
            continue;
        }

        student_taken[stu_idx] = true;
        remaining_capacity[sup_idx] -= 1;
        assignments.push(Assignment {
            student: students[stu_idx].clone(),
            supervisor: supervisors[sup_idx].clone(),
            score: AssignmentScore::Scored(score),
        });
    }

    debug!(assigned = assignments.len(), "Primary greedy pass complete");

    let default_supervisors: Vec<usize> = supervisors
        .iter()
        .enumerate()
        .filter(|(_, supervisor)| supervisor.is_default)
        .map(|(index, _)| index)
        .collect();

    for (stu_idx, student) in students.iter().enumerate() {
        if student_taken[stu_idx] {
            continue;
        }

        for &sup_idx in &default_supervisors {
            if remaining_capacity[sup_idx] > 0 {
                remaining_capacity[sup_idx] -= 1;
                student_taken[stu_idx] = true;
                assignments.push(Assignment {
                    student: student.clone(),
                    supervisor: supervisors[sup_idx].clone(),
                    score: AssignmentScore::Default,
                });
                break;
            }
        }
    }

    info!(
        total = students.len(),
        assigned = assignments.len(),
        "Assignment complete"
    );

    assignments
}
