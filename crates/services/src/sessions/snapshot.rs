use learn_core::model::{AnswerMap, QuizResult, QuizSession, SessionState, SubmitTrigger};

/// Progress of the submission as seen by observers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    InFlight(SubmitTrigger),
    /// Last attempt failed; answers are intact and the user may retry.
    Failed {
        trigger: SubmitTrigger,
        message: String,
    },
}

impl SubmitStatus {
    #[must_use]
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitStatus::InFlight(_))
    }

    #[must_use]
    pub fn failure(&self) -> Option<&str> {
        match self {
            SubmitStatus::Failed { message, .. } => Some(message),
            _ => None,
        }
    }
}

/// Point-in-time view of a running quiz, published after every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSnapshot {
    pub state: SessionState,
    pub answers: AnswerMap,
    pub submit: SubmitStatus,
    pub result: Option<QuizResult>,
}

impl QuizSnapshot {
    #[must_use]
    pub fn capture(session: &QuizSession, submit: &SubmitStatus) -> Self {
        Self {
            state: session.state(),
            answers: session.answers().clone(),
            submit: submit.clone(),
            result: session.result().copied(),
        }
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

    /// Time ran out and the automatic submission did not go through.
    #[must_use]
    pub fn expired_unsubmitted(&self) -> bool {
        self.remaining_seconds() == Some(0) && !self.submit.is_in_flight()
    }
}
