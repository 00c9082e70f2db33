use chrono::{DateTime, Utc};

use crate::model::result::PASS_MARK_PERCENT;

/// One past quiz attempt as reported by the progress service.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptSummary {
    pub quiz_name: String,
    pub score: f64,
    pub attempt_number: u32,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Aggregated progress for the signed-in student.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentProgress {
    pub total_quizzes: u32,
    pub completed_quizzes: u32,
    pub average_score: f64,
    pub recent_attempts: Vec<AttemptSummary>,
}

impl StudentProgress {
    /// Share of available quizzes completed, in percent.
    #[must_use]
    pub fn completion_percent(&self) -> f64 {
        if self.total_quizzes == 0 {
            return 0.0;
        }
        let completed = self.completed_quizzes.min(self.total_quizzes);
        f64::from(completed) / f64::from(self.total_quizzes) * 100.0
    }
}

/// Row of the teacher analytics table.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassProgressRow {
    pub student_name: String,
    pub score: f64,
    pub badges: Vec<String>,
    pub progress: f64,
}

impl ClassProgressRow {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.score >= PASS_MARK_PERCENT
    }
}

/// Aggregate over the analytics rows of a class.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassOverview {
    pub students: usize,
    pub average_score: f64,
    pub passed: usize,
}

impl ClassOverview {
    #[must_use]
    pub fn from_rows(rows: &[ClassProgressRow]) -> Self {
        if rows.is_empty() {
            return Self::default();
        }
        let total: f64 = rows.iter().map(|row| row.score).sum();
        #[allow(clippy::cast_precision_loss)]
        let average_score = total / rows.len() as f64;
        Self {
            students: rows.len(),
            average_score,
            passed: rows.iter().filter(|row| row.passed()).count(),
        }
    }
}
