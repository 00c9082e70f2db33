use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{AnswerMap, OptionKey, Question, Quiz, QuizResult};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz has not been started")]
    NotStarted,

    #[error("quiz already started")]
    AlreadyStarted,

    #[error("quiz already completed")]
    Completed,

    #[error("a submission is already in flight")]
    AlreadySubmitting,

    #[error("no submission is in flight")]
    NotSubmitting,

    #[error("question {index} does not exist (quiz has {count})")]
    QuestionOutOfRange { index: usize, count: usize },

    #[error("option {key} is not offered by question {index}")]
    UnknownOption { index: usize, key: OptionKey },

    #[error("time is up; answers can no longer change")]
    TimeUp,
}

//
// ─── STATE ────────────────────────────────────────────────────────────────────
//

/// Lifecycle of one quiz attempt. Exactly one variant is active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionState {
    NotStarted,
    InProgress {
        remaining_seconds: u32,
        current_question_index: usize,
    },
    Completed {
        score: f64,
        correct_count: u32,
    },
}

/// What caused a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    User,
    Timeout,
}

/// Outcome of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Countdown decremented; seconds left.
    Running(u32),
    /// Countdown just reached zero; the caller must auto-submit.
    Expired,
    /// Nothing to do (not running, or already at zero).
    Idle,
}

/// Answers captured when a submission begins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionTicket {
    pub trigger: SubmitTrigger,
    pub answers: AnswerMap,
}

//
// ─── SESSION ──────────────────────────────────────────────────────────────────
//

/// Timed quiz attempt: countdown, navigation, answers and single-flight submission.
///
/// All transitions go through `&mut self`; callers that share a session between
/// the clock and the user serialize access with a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    quiz: Quiz,
    state: SessionState,
    answers: AnswerMap,
    submitting: Option<SubmitTrigger>,
    result: Option<QuizResult>,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    #[must_use]
    pub fn new(quiz: Quiz) -> Self {
        Self {
            quiz,
            state: SessionState::NotStarted,
            answers: AnswerMap::new(),
            submitting: None,
            result: None,
            started_at: None,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    #[must_use]
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn submitting(&self) -> Option<SubmitTrigger> {
        self.submitting
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.state, SessionState::InProgress { .. })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        matches!(self.state, SessionState::Completed { .. })
    }

    #[must_use]
    pub fn remaining_seconds(&self) -> Option<u32> {
        match self.state {
            SessionState::InProgress {
                remaining_seconds, ..
            } => Some(remaining_seconds),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::InProgress {
                current_question_index,
                ..
            } => Some(current_question_index),
            _ => None,
        }
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|index| self.quiz.question(index))
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 == self.quiz.question_count())
    }

    /// Begin the countdown at the quiz time limit on the first question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadyStarted` or `SessionError::Completed`
    /// if the session has left `NotStarted`.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SessionError> {
        match self.state {
            SessionState::NotStarted => {
                self.state = SessionState::InProgress {
                    remaining_seconds: self.quiz.time_limit_seconds(),
                    current_question_index: 0,
                };
                self.started_at = Some(now);
                Ok(())
            }
            SessionState::InProgress { .. } => Err(SessionError::AlreadyStarted),
            SessionState::Completed { .. } => Err(SessionError::Completed),
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Tick::Expired` exactly once, on the transition to zero.
    pub fn tick(&mut self) -> Tick {
        let SessionState::InProgress {
            remaining_seconds,
            current_question_index,
        } = self.state
        else {
            return Tick::Idle;
        };
        if remaining_seconds == 0 {
            return Tick::Idle;
        }
        let remaining = remaining_seconds - 1;
        self.state = SessionState::InProgress {
            remaining_seconds: remaining,
            current_question_index,
        };
        if remaining == 0 {
            Tick::Expired
        } else {
            Tick::Running(remaining)
        }
    }

    fn in_progress(&self) -> Result<(u32, usize), SessionError> {
        match self.state {
            SessionState::NotStarted => Err(SessionError::NotStarted),
            SessionState::InProgress {
                remaining_seconds,
                current_question_index,
            } => Ok((remaining_seconds, current_question_index)),
            SessionState::Completed { .. } => Err(SessionError::Completed),
        }
    }

    fn set_index(&mut self, remaining_seconds: u32, index: usize) -> usize {
        self.state = SessionState::InProgress {
            remaining_seconds,
            current_question_index: index,
        };
        index
    }

    /// Move to the next question; stays put on the last one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` unless the session is in progress.
    pub fn next(&mut self) -> Result<usize, SessionError> {
        let (remaining, index) = self.in_progress()?;
        let last = self.quiz.question_count().saturating_sub(1);
        Ok(self.set_index(remaining, (index + 1).min(last)))
    }

    /// Move to the previous question; stays put on the first one.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` unless the session is in progress.
    pub fn previous(&mut self) -> Result<usize, SessionError> {
        let (remaining, index) = self.in_progress()?;
        Ok(self.set_index(remaining, index.saturating_sub(1)))
    }

    /// Jump to `index`, clamped to the valid question range.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` unless the session is in progress.
    pub fn go_to(&mut self, index: usize) -> Result<usize, SessionError> {
        let (remaining, _) = self.in_progress()?;
        let last = self.quiz.question_count().saturating_sub(1);
        Ok(self.set_index(remaining, index.min(last)))
    }

    /// Record the selected option for a question, replacing any previous choice.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::QuestionOutOfRange` / `UnknownOption` for invalid
    /// input, `AlreadySubmitting` while answers are being delivered, `TimeUp`
    /// once the countdown has reached zero, and a lifecycle error unless the
    /// session is in progress.
    pub fn select_answer(
        &mut self,
        question_index: usize,
        key: OptionKey,
    ) -> Result<Option<OptionKey>, SessionError> {
        let (remaining, _) = self.in_progress()?;
        if remaining == 0 {
            return Err(SessionError::TimeUp);
        }
        if self.submitting.is_some() {
            return Err(SessionError::AlreadySubmitting);
        }
        let count = self.quiz.question_count();
        let question = self
            .quiz
            .question(question_index)
            .ok_or(SessionError::QuestionOutOfRange {
                index: question_index,
                count,
            })?;
        if !question.has_option(&key) {
            return Err(SessionError::UnknownOption {
                index: question_index,
                key,
            });
        }
        Ok(self.answers.select(question_index, key))
    }

    /// Claim the single submission slot and snapshot the answers.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::AlreadySubmitting` if another trigger holds the
    /// slot, and a lifecycle error unless the session is in progress.
    pub fn begin_submit(&mut self, trigger: SubmitTrigger) -> Result<SubmissionTicket, SessionError> {
        self.in_progress()?;
        if self.submitting.is_some() {
            return Err(SessionError::AlreadySubmitting);
        }
        self.submitting = Some(trigger);
        Ok(SubmissionTicket {
            trigger,
            answers: self.answers.clone(),
        })
    }

    /// Finish the in-flight submission with the scoring service verdict.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitting` if no submission was begun.
    pub fn complete_submission(
        &mut self,
        result: QuizResult,
        now: DateTime<Utc>,
    ) -> Result<(), SessionError> {
        self.in_progress()?;
        if self.submitting.take().is_none() {
            return Err(SessionError::NotSubmitting);
        }
        self.state = SessionState::Completed {
            score: result.score_percent(),
            correct_count: result.correct_answers(),
        };
        self.result = Some(result);
        self.completed_at = Some(now);
        Ok(())
    }

    /// Release the submission slot after a failed delivery; answers are kept.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotSubmitting` if no submission was begun.
    pub fn fail_submission(&mut self) -> Result<SubmitTrigger, SessionError> {
        self.in_progress()?;
        self.submitting.take().ok_or(SessionError::NotSubmitting)
    }
}
