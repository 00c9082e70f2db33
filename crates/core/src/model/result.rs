use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum QuizResultError {
    #[error("score {0} is outside 0..=100")]
    ScoreOutOfRange(f64),

    #[error("correct answers ({correct}) exceed total questions ({total})")]
    CorrectExceedsTotal { correct: u32, total: u32 },
}

/// Percentage at or above which an attempt counts as passed.
pub const PASS_MARK_PERCENT: f64 = 70.0;

/// Scoring service verdict for one submitted attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuizResult {
    score_percent: f64,
    correct_answers: u32,
    total_questions: u32,
}

impl QuizResult {
    /// # Errors
    ///
    /// Returns `QuizResultError` when the score is not a percentage or the
    /// correct count exceeds the total.
    pub fn new(
        score_percent: f64,
        correct_answers: u32,
        total_questions: u32,
    ) -> Result<Self, QuizResultError> {
        if !(0.0..=100.0).contains(&score_percent) {
            return Err(QuizResultError::ScoreOutOfRange(score_percent));
        }
        if correct_answers > total_questions {
            return Err(QuizResultError::CorrectExceedsTotal {
                correct: correct_answers,
                total: total_questions,
            });
        }
        Ok(Self {
            score_percent,
            correct_answers,
            total_questions,
        })
    }

    #[must_use]
    pub fn score_percent(&self) -> f64 {
        self.score_percent
    }

    #[must_use]
    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    #[must_use]
    pub fn total_questions(&self) -> u32 {
        self.total_questions
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.score_percent >= PASS_MARK_PERCENT
    }

    /// Percentage implied by the counts.
    #[must_use]
    pub fn computed_percent(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.correct_answers) / f64::from(self.total_questions) * 100.0
    }

    /// Whether the reported score agrees with the counts within `tolerance` points.
    #[must_use]
    pub fn is_consistent(&self, tolerance: f64) -> bool {
        (self.computed_percent() - self.score_percent).abs() <= tolerance
    }
}
