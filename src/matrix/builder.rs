use std::cmp::Ordering;
use std::collections::HashMap;

use futures_util::stream::{self, StreamExt};
use tracing::{debug, info, warn};

use crate::config::MatchOptions;
use crate::constants::{
    JUDGMENT_FALLBACK_SCORE, JUDGMENT_WEIGHT, RULE_WEIGHT, SEMANTIC_WEIGHT, SIMILARITY_WEIGHT,
};
use crate::embedding::Embedder;
use crate::model::{Student, Supervisor};
use crate::rerank::Judge;
use crate::scoring::rule_based_score;
use crate::similarity::{cosine_similarity, to_match_scale};

use super::error::MatrixError;
use super::types::{ScoreMatrix, round2};

/// Builds the blended score matrix from records plus external signals.
pub struct ScoreMatrixBuilder<'a, E, J> {
    embedder: &'a E,
    judge: &'a J,
    options: &'a MatchOptions,
}

impl<E, J> std::fmt::Debug for ScoreMatrixBuilder<'_, E, J> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoreMatrixBuilder")
            .field("options", &self.options)
            .finish()
    }
}

impl<'a, E: Embedder, J: Judge> ScoreMatrixBuilder<'a, E, J> {
    /// Creates a builder over injected capabilities.
    pub fn new(embedder: &'a E, judge: &'a J, options: &'a MatchOptions) -> Self {
        Self {
            embedder,
            judge,
            options,
        }
    }

    /// Builds the full matrix.
    ///
    /// Embedding and judgment faults are substituted per the recoverable
    /// policy (similarity 0, judgment fallback 5); only mixed embedding
    /// dimensions abort.
    pub async fn build(
        &self,
        students: &[Student],
        supervisors: &[Supervisor],
    ) -> Result<ScoreMatrix, MatrixError> {
        info!(
            students = students.len(),
            supervisors = supervisors.len(),
            top_k = self.options.top_k,
            "Building score matrix"
        );

        let student_embeddings = self
            .fetch_embeddings(
                students
                    .iter()
                    .map(|s| (s.id.as_str(), s.abstract_text.as_str())),
            )
            .await;
        let supervisor_embeddings = self
            .fetch_embeddings(
                supervisors
                    .iter()
                    .map(|s| (s.id.as_str(), s.research_interests.as_str())),
            )
            .await;

        // Similarity pass. Excluded pairs stay at 0 and never become
        // candidates; so do pairs missing either embedding.
        let mut excluded = vec![vec![false; supervisors.len()]; students.len()];
        let mut similarity = vec![vec![0.0f64; supervisors.len()]; students.len()];

        for (stu_idx, student) in students.iter().enumerate() {
            for (sup_idx, supervisor) in supervisors.iter().enumerate() {
                if supervisor.excludes(&student.primary_subject) {
                    excluded[stu_idx][sup_idx] = true;
                    continue;
                }

                if let (Some(stu_emb), Some(sup_emb)) = (
                    &student_embeddings[stu_idx],
                    &supervisor_embeddings[sup_idx],
                ) {
                    let cosine = cosine_similarity(stu_emb, sup_emb)?;
                    similarity[stu_idx][sup_idx] = to_match_scale(cosine);
                }
            }
        }

        // Top-K positive-similarity students per supervisor go to the judge;
        // the stable sort keeps original student order on ties.
        let mut candidates: Vec<(usize, usize)> = Vec::new();
        for sup_idx in 0..supervisors.len() {
            let mut valid: Vec<(usize, f64)> = (0..students.len())
                .filter(|&stu_idx| {
                    !excluded[stu_idx][sup_idx] && similarity[stu_idx][sup_idx] > 0.0
                })
                .map(|stu_idx| (stu_idx, similarity[stu_idx][sup_idx]))
                .collect();

            valid.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

            candidates.extend(
                valid
                    .iter()
                    .take(self.options.top_k)
                    .map(|&(stu_idx, _)| (stu_idx, sup_idx)),
            );
        }

        let judgments = self.fetch_judgments(students, supervisors, &candidates).await;

        let mut matrix = ScoreMatrix::new(students.len(), supervisors.len());
        for (stu_idx, student) in students.iter().enumerate() {
            for (sup_idx, supervisor) in supervisors.iter().enumerate() {
                if excluded[stu_idx][sup_idx] {
                    continue;
                }

                let similarity_score = similarity[stu_idx][sup_idx];
                let semantic = match judgments.get(&(stu_idx, sup_idx)) {
                    Some(&judgment) => {
                        JUDGMENT_WEIGHT * judgment + SIMILARITY_WEIGHT * similarity_score
                    }
                    None => similarity_score,
                };

                let rule_score = rule_based_score(student, supervisor);
                let blended = SEMANTIC_WEIGHT * semantic + RULE_WEIGHT * rule_score;

                matrix.set(stu_idx, sup_idx, round2(blended));
            }
        }

        debug!(pairs = matrix.entries().count(), "Score matrix complete");

        Ok(matrix)
    }

    /// Fetches embeddings for `(record id, text)` pairs concurrently.
    ///
    /// Completions land in per-record slots, so unordered arrival cannot
    /// reorder results. A failed fetch leaves `None` and logs a warning.
    async fn fetch_embeddings<'t>(
        &self,
        texts: impl Iterator<Item = (&'t str, &'t str)>,
    ) -> Vec<Option<Vec<f32>>> {
        let model = self.options.embedding_model.as_str();
        let tasks: Vec<(usize, &str, &str)> = texts
            .enumerate()
            .map(|(index, (id, text))| (index, id, text))
            .collect();
        let count = tasks.len();

        let results = stream::iter(tasks.into_iter().map(|(index, id, text)| async move {
            match self.embedder.embed(text, model).await {
                Ok(vector) => (index, Some(vector)),
                Err(error) => {
                    warn!(record = id, %error, "Embedding fetch failed; similarity treated as 0");
                    (index, None)
                }
            }
        }))
        .buffer_unordered(self.options.concurrency)
        .collect::<Vec<_>>()
        .await;

        let mut slots: Vec<Option<Vec<f32>>> = vec![None; count];
        for (index, vector) in results {
            slots[index] = vector;
        }

        slots
    }

    /// Judges candidate pairs concurrently, substituting the neutral
    /// fallback on any failure. Never aborts the run.
    async fn fetch_judgments(
        &self,
        students: &[Student],
        supervisors: &[Supervisor],
        candidates: &[(usize, usize)],
    ) -> HashMap<(usize, usize), f64> {
        if candidates.is_empty() {
            return HashMap::new();
        }

        debug!(pairs = candidates.len(), "Re-ranking candidate pairs");

        let model = self.options.reranker_model.as_str();

        stream::iter(candidates.iter().map(|&(stu_idx, sup_idx)| {
            let student = &students[stu_idx];
            let supervisor = &supervisors[sup_idx];
            async move {
                let score = match self
                    .judge
                    .judge(&student.abstract_text, &supervisor.research_interests, model)
                    .await
                {
                    Ok(score) => score,
                    Err(error) => {
                        warn!(
                            student = %student.id,
                            supervisor = %supervisor.id,
                            %error,
                            "Judgment failed; substituting neutral fallback"
                        );
                        JUDGMENT_FALLBACK_SCORE
                    }
                };
                ((stu_idx, sup_idx), score)
            }
        }))
        .buffer_unordered(self.options.concurrency)
        .collect::<HashMap<_, _>>()
        .await
    }
}
