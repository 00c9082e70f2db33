use std::sync::Arc;

use learn_core::model::{Language, Quiz, QuizId, QuizSummary};
use tracing::{info, warn};

use crate::api::QuizApi;
use crate::config::DEFAULT_TIME_LIMIT_MINUTES;
use crate::error::{LoadError, QueryError};

/// Quiz catalog and quiz loading.
#[derive(Clone)]
pub struct QuizService {
    api: Arc<dyn QuizApi>,
    default_time_limit_minutes: u32,
}

impl QuizService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizApi>) -> Self {
        Self {
            api,
            default_time_limit_minutes: DEFAULT_TIME_LIMIT_MINUTES,
        }
    }

    #[must_use]
    pub fn with_default_time_limit(mut self, minutes: u32) -> Self {
        self.default_time_limit_minutes = minutes.max(1);
        self
    }

    /// List the quizzes available to the student.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` when the catalog cannot be fetched.
    pub async fn catalog(&self, language: Option<Language>) -> Result<Vec<QuizSummary>, QueryError> {
        let items = self.api.list_quizzes(language).await?;
        Ok(items.into_iter().map(|item| item.into_summary()).collect())
    }

    /// Fetch and validate a quiz definition.
    ///
    /// Nothing is returned unless the whole quiz is usable, so a failed load
    /// never leaves a half-built session behind.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::NotFound` for unknown quizzes,
    /// `LoadError::Invalid(QuizError::NoQuestions)` for empty quizzes and
    /// `LoadError::Api` for transport or decoding failures.
    #[tracing::instrument(level = "info", skip(self))]
    pub async fn load(&self, id: QuizId) -> Result<Quiz, LoadError> {
        let dto = self.api.fetch_quiz(id).await.inspect_err(|err| {
            warn!(error = %err, "quiz fetch failed");
        })?;
        let quiz = dto.into_quiz(self.default_time_limit_minutes)?;
        info!(
            questions = quiz.question_count(),
            time_limit_secs = quiz.time_limit_seconds(),
            "quiz loaded"
        );
        Ok(quiz)
    }
}
