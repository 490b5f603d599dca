use crate::constants::{
    CONFIDENCE_SCALE, DEFAULT_CONFIDENCE, METHODOLOGY_WEIGHT, NEUTRAL_METHODOLOGY_SCORE,
    SCORE_SCALE, SECONDARY_SUBJECT_WEIGHT, SUBJECT_WEIGHT, WEAK_PRIMARY_PENALTY,
    WEAK_PRIMARY_THRESHOLD,
};
use crate::model::{Student, Supervisor};

/// Deterministic subject/methodology fit on the 0-10 scale.
///
/// Subject expertise dominates (70%): the supervisor's confidence in the
/// student's primary subject (unrecorded tags count as 1), plus 0.3x their
/// confidence in the secondary subject when the student names one.
/// Methodology (30%) is the mean confidence over the student's methodology
/// tags that the supervisor records; listed-but-unmatched needs score a
/// neutral 3, and a student with no listed needs contributes no methodology
/// term. A primary-subject confidence below 2 cuts the result to 30%;
/// methodology alignment alone cannot rescue a supervisor outside their
/// domain.
///
/// The result is intentionally not clamped: strong secondary-subject overlap
/// can push it slightly past 10.
pub fn rule_based_score(student: &Student, supervisor: &Supervisor) -> f64 {
    let primary_confidence = supervisor
        .confidence_for(&student.primary_subject)
        .map_or(DEFAULT_CONFIDENCE, f64::from);

    let secondary_contribution = student.secondary_subject_tag().map_or(0.0, |tag| {
        SECONDARY_SUBJECT_WEIGHT
            * supervisor
                .confidence_for(tag)
                .map_or(DEFAULT_CONFIDENCE, f64::from)
    });

    let subject_score = primary_confidence + secondary_contribution;

    let needs: Vec<&str> = student
        .methodology_needs
        .iter()
        .map(|tag| tag.trim())
        .filter(|tag| !tag.is_empty())
        .collect();

    let matched: Vec<f64> = needs
        .iter()
        .filter_map(|tag| supervisor.confidence_for(tag))
        .map(f64::from)
        .collect();

    let methodology_score = if needs.is_empty() {
        0.0
    } else if matched.is_empty() {
        NEUTRAL_METHODOLOGY_SCORE
    } else {
        matched.iter().sum::<f64>() / matched.len() as f64
    };

    let raw = SUBJECT_WEIGHT * subject_score + METHODOLOGY_WEIGHT * methodology_score;
    let mut score = raw / CONFIDENCE_SCALE * SCORE_SCALE;

    if primary_confidence < WEAK_PRIMARY_THRESHOLD {
        score *= WEAK_PRIMARY_PENALTY;
    }

    score
}
