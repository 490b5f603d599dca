/// Dense |students| x |supervisors| grid of final blended scores.
///
/// Entries are two-decimal scores on the 0-10 scale; hard-excluded pairs
/// (and pairs with no signal at all) hold the 0.0 sentinel. Ephemeral:
/// rebuilt from scratch each run.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreMatrix {
    students: usize,
    supervisors: usize,
    scores: Vec<f64>,
}

impl ScoreMatrix {
    /// Creates a zeroed matrix.
    pub fn new(students: usize, supervisors: usize) -> Self {
        Self {
            students,
            supervisors,
            scores: vec![0.0; students * supervisors],
        }
    }

    /// Number of student rows.
    pub fn student_count(&self) -> usize {
        self.students
    }

    /// Number of supervisor columns.
    pub fn supervisor_count(&self) -> usize {
        self.supervisors
    }

    /// Score for one pair. Panics on out-of-bounds indices.
    pub fn get(&self, student: usize, supervisor: usize) -> f64 {
        self.scores[student * self.supervisors + supervisor]
    }

    /// Sets the score for one pair. Panics on out-of-bounds indices.
    pub fn set(&mut self, student: usize, supervisor: usize, score: f64) {
        self.scores[student * self.supervisors + supervisor] = score;
    }

    /// Iterates `(student, supervisor, score)` in student-major order.
    ///
    /// This order defines the tie-break for equal scores downstream.
    pub fn entries(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        (0..self.students).flat_map(move |student| {
            (0..self.supervisors).map(move |supervisor| {
                (student, supervisor, self.get(student, supervisor))
            })
        })
    }
}

/// Rounds to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
