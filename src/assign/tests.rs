use crate::matrix::ScoreMatrix;
use crate::model::{Student, Supervisor};

use super::solver::greedy_assign;
use super::types::{Assignment, AssignmentScore, RunStatistics};

fn student(id: &str) -> Student {
    Student {
        id: id.to_string(),
        name: format!("Student {id}"),
        primary_subject: "Finance".to_string(),
        secondary_subject: None,
        methodology_needs: vec![],
        abstract_text: "abstract".to_string(),
    }
}

fn supervisor(id: &str, capacity: u32, is_default: bool) -> Supervisor {
    Supervisor {
        id: id.to_string(),
        name: format!("Supervisor {id}"),
        capacity,
        confidence: Default::default(),
        will_not_supervise: vec![],
        research_interests: "interests".to_string(),
        is_default,
    }
}

fn assignment_for<'a>(assignments: &'a [Assignment], student_id: &str) -> Option<&'a Assignment> {
    assignments.iter().find(|a| a.student.id == student_id)
}

#[test]
fn test_single_pair_assigned() {
    let students = vec![student("S001")];
    let supervisors = vec![supervisor("SUP001", 1, false)];
    let mut matrix = ScoreMatrix::new(1, 1);
    matrix.set(0, 0, 7.04);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].student.id, "S001");
    assert_eq!(assignments[0].supervisor.id, "SUP001");
    assert_eq!(assignments[0].score, AssignmentScore::Scored(7.04));
}

#[test]
fn test_capacity_exhaustion_higher_score_wins() {
    let students = vec![student("S001"), student("S002")];
    let supervisors = vec![supervisor("SUP001", 1, false)];
    let mut matrix = ScoreMatrix::new(2, 1);
    matrix.set(0, 0, 8.0);
    matrix.set(1, 0, 9.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].student.id, "S002");

    let stats = RunStatistics::from_assignments(students.len(), &assignments);
    assert_eq!(stats.assigned, 1);
    assert_eq!(stats.unassigned, 1);
}

#[test]
fn test_capacity_never_exceeded() {
    let students = vec![student("S001"), student("S002"), student("S003")];
    let supervisors = vec![supervisor("SUP001", 2, false)];
    let mut matrix = ScoreMatrix::new(3, 1);
    matrix.set(0, 0, 9.0);
    matrix.set(1, 0, 8.0);
    matrix.set(2, 0, 7.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    let count = assignments
        .iter()
        .filter(|a| a.supervisor.id == "SUP001")
        .count();
    assert_eq!(count, 2);
}

#[test]
fn test_student_assigned_at_most_once() {
    let students = vec![student("S001")];
    let supervisors = vec![supervisor("SUP001", 5, false), supervisor("SUP002", 5, false)];
    let mut matrix = ScoreMatrix::new(1, 2);
    matrix.set(0, 0, 9.0);
    matrix.set(0, 1, 8.5);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].supervisor.id, "SUP001");
}

#[test]
fn test_zero_scores_never_assigned_in_primary_pass() {
    let students = vec![student("S001")];
    let supervisors = vec![supervisor("SUP001", 5, false)];
    let matrix = ScoreMatrix::new(1, 1);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert!(assignments.is_empty());
}

#[test]
fn test_tie_break_keeps_enumeration_order() {
    // equal scores: the student-major entry (S001, SUP001) commits first
    let students = vec![student("S001"), student("S002")];
    let supervisors = vec![supervisor("SUP001", 1, false)];
    let mut matrix = ScoreMatrix::new(2, 1);
    matrix.set(0, 0, 5.0);
    matrix.set(1, 0, 5.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].student.id, "S001");
}

#[test]
fn test_fallback_to_default_supervisor() {
    let students = vec![student("S001"), student("S002")];
    let supervisors = vec![
        supervisor("SUP001", 1, false),
        supervisor("SUP005", 10, true),
    ];
    let mut matrix = ScoreMatrix::new(2, 2);
    matrix.set(0, 0, 9.0);
    matrix.set(1, 0, 8.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert_eq!(assignments.len(), 2);

    let fallback = assignment_for(&assignments, "S002").unwrap();
    assert_eq!(fallback.supervisor.id, "SUP005");
    assert_eq!(fallback.score, AssignmentScore::Default);
}

#[test]
fn test_fallback_respects_default_order_and_capacity() {
    let students = vec![student("S001"), student("S002"), student("S003")];
    let supervisors = vec![
        supervisor("SUP004", 1, true),
        supervisor("SUP005", 1, true),
    ];
    let matrix = ScoreMatrix::new(3, 2);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    // first default fills first; third student fits nowhere
    assert_eq!(assignments.len(), 2);
    assert_eq!(
        assignment_for(&assignments, "S001").unwrap().supervisor.id,
        "SUP004"
    );
    assert_eq!(
        assignment_for(&assignments, "S002").unwrap().supervisor.id,
        "SUP005"
    );
    assert!(assignment_for(&assignments, "S003").is_none());
}

#[test]
fn test_default_capacity_shared_with_primary_pass() {
    // the default supervisor's capacity is consumed by a primary assignment
    let students = vec![student("S001"), student("S002")];
    let supervisors = vec![supervisor("SUP005", 1, true)];
    let mut matrix = ScoreMatrix::new(2, 1);
    matrix.set(0, 0, 9.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0].score, AssignmentScore::Scored(9.0));
}

#[test]
fn test_zero_capacity_supervisor_never_used() {
    let students = vec![student("S001")];
    let supervisors = vec![supervisor("SUP001", 0, true)];
    let mut matrix = ScoreMatrix::new(1, 1);
    matrix.set(0, 0, 9.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);

    assert!(assignments.is_empty());
}

#[test]
fn test_statistics_average_excludes_defaults() {
    let students = vec![student("S001"), student("S002"), student("S003")];
    let supervisors = vec![
        supervisor("SUP001", 2, false),
        supervisor("SUP005", 5, true),
    ];
    let mut matrix = ScoreMatrix::new(3, 2);
    matrix.set(0, 0, 8.0);
    matrix.set(1, 0, 6.0);

    let assignments = greedy_assign(&students, &supervisors, &matrix);
    let stats = RunStatistics::from_assignments(students.len(), &assignments);

    assert_eq!(stats.total_students, 3);
    assert_eq!(stats.assigned, 3);
    assert_eq!(stats.unassigned, 0);
    assert_eq!(stats.average_score, Some(7.0));
}

#[test]
fn test_statistics_all_defaults_have_no_average() {
    let students = vec![student("S001")];
    let supervisors = vec![supervisor("SUP005", 5, true)];
    let matrix = ScoreMatrix::new(1, 1);

    let assignments = greedy_assign(&students, &supervisors, &matrix);
    let stats = RunStatistics::from_assignments(students.len(), &assignments);

    assert_eq!(stats.assigned, 1);
    assert_eq!(stats.average_score, None);
}

#[test]
fn test_statistics_empty_assignments() {
    let stats = RunStatistics::from_assignments(2, &[]);

    assert_eq!(stats.assigned, 0);
    assert_eq!(stats.unassigned, 2);
    assert_eq!(stats.average_score, None);
}

#[test]
fn test_score_display() {
    assert_eq!(AssignmentScore::Scored(7.04).to_string(), "7.04");
    assert_eq!(AssignmentScore::Scored(5.0).to_string(), "5.00");
    assert_eq!(AssignmentScore::Default.to_string(), "Default Assignment");
}

#[test]
fn test_score_serialization() {
    let scored = serde_json::to_value(AssignmentScore::Scored(7.04)).unwrap();
    assert_eq!(scored, serde_json::json!(7.04));

    let default = serde_json::to_value(AssignmentScore::Default).unwrap();
    assert_eq!(default, serde_json::json!("Default Assignment"));
}

#[test]
fn test_score_numeric_accessors() {
    assert_eq!(AssignmentScore::Scored(7.0).numeric(), Some(7.0));
    assert_eq!(AssignmentScore::Default.numeric(), None);
    assert!(AssignmentScore::Default.is_default());
    assert!(!AssignmentScore::Scored(1.0).is_default());
}
