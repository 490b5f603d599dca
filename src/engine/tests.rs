use crate::config::{Config, MatchOptions};
use crate::embedding::MockEmbedder;
use crate::model::{Student, Supervisor};
use crate::rerank::MockJudge;

use super::error::EngineError;
use super::{MatchingEngine, run_matching};

fn student(id: &str, abstract_text: &str) -> Student {
    Student {
        id: id.to_string(),
        name: format!("Student {id}"),
        primary_subject: "Finance".to_string(),
        secondary_subject: None,
        methodology_needs: vec![],
        abstract_text: abstract_text.to_string(),
    }
}

fn supervisor(id: &str, capacity: u32, interests: &str) -> Supervisor {
    Supervisor {
        id: id.to_string(),
        name: format!("Supervisor {id}"),
        capacity,
        confidence: [("finance".to_string(), 5)].into_iter().collect(),
        will_not_supervise: vec![],
        research_interests: interests.to_string(),
        is_default: false,
    }
}

fn engine() -> MatchingEngine<MockEmbedder, MockJudge> {
    MatchingEngine::new(
        MockEmbedder::new(),
        MockJudge::fixed(5.0),
        MatchOptions::default(),
    )
}

#[tokio::test]
async fn test_empty_students_fails() {
    let err = engine()
        .run(&[], &[supervisor("SUP001", 5, "interests")])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::EmptyInput { records: "student" }
    ));
}

#[tokio::test]
async fn test_empty_supervisors_fails() {
    let err = engine()
        .run(&[student("S001", "abstract")], &[])
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        EngineError::EmptyInput {
            records: "supervisor"
        }
    ));
}

#[tokio::test]
async fn test_missing_credential_fails_before_scoring() {
    let config = Config::default();
    assert!(config.api_key.is_none());

    let err = run_matching(
        &config,
        &[student("S001", "abstract")],
        &[supervisor("SUP001", 5, "interests")],
    )
    .await
    .unwrap_err();

    assert!(matches!(err, EngineError::MissingCredential));
}

#[tokio::test]
async fn test_single_pair_end_to_end() {
    // similarity 5, judgment 8, rule 7.0 -> final 7.04, assigned
    let students = vec![student("S001", "merger performance")];
    let supervisors = vec![supervisor("SUP001", 1, "corporate finance")];

    let mut embedder = MockEmbedder::new();
    embedder.insert("merger performance", vec![1.0, 0.0]);
    embedder.insert("corporate finance", vec![0.0, 1.0]);

    let engine = MatchingEngine::new(embedder, MockJudge::fixed(8.0), MatchOptions::default());
    let outcome = engine.run(&students, &supervisors).await.unwrap();

    assert_eq!(outcome.assignments.len(), 1);
    let assignment = &outcome.assignments[0];
    assert_eq!(assignment.student.id, "S001");
    assert_eq!(assignment.supervisor.id, "SUP001");
    assert_eq!(assignment.score.numeric(), Some(7.04));

    assert_eq!(outcome.statistics.total_students, 1);
    assert_eq!(outcome.statistics.assigned, 1);
    assert_eq!(outcome.statistics.unassigned, 0);
    assert_eq!(outcome.statistics.average_score, Some(7.04));
}

#[tokio::test]
async fn test_dimension_mismatch_is_fatal() {
    let students = vec![student("S001", "merger performance")];
    let supervisors = vec![supervisor("SUP001", 1, "corporate finance")];

    let mut embedder = MockEmbedder::new();
    embedder.insert("merger performance", vec![1.0, 0.0, 0.0]);
    embedder.insert("corporate finance", vec![0.0, 1.0]);

    let engine = MatchingEngine::new(embedder, MockJudge::fixed(8.0), MatchOptions::default());
    let err = engine.run(&students, &supervisors).await.unwrap_err();

    assert!(matches!(err, EngineError::Matrix(_)));
}

#[tokio::test]
async fn test_capacity_exhaustion_without_default() {
    // both students want the only capacity-1 supervisor; no defaults exist
    let students = vec![
        student("S001", "abstract close"),
        student("S002", "abstract far"),
    ];
    let supervisors = vec![supervisor("SUP001", 1, "supervisor interests")];

    let mut embedder = MockEmbedder::new();
    embedder.insert("abstract close", vec![1.0, 0.0]);
    embedder.insert("abstract far", vec![0.0, 1.0]);
    embedder.insert("supervisor interests", vec![1.0, 0.0]);

    let engine = MatchingEngine::new(embedder, MockJudge::fixed(8.0), MatchOptions::default());
    let outcome = engine.run(&students, &supervisors).await.unwrap();

    assert_eq!(outcome.statistics.assigned, 1);
    assert_eq!(outcome.statistics.unassigned, 1);
    assert_eq!(outcome.assignments[0].student.id, "S001");
}
