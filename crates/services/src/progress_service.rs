use std::sync::Arc;

use learn_core::model::{ClassOverview, ClassProgressRow, QuizId, StudentProgress};

use crate::api::ProgressApi;
use crate::error::QueryError;

/// Rows and aggregate shown on the teacher dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassReport {
    pub rows: Vec<ClassProgressRow>,
    pub overview: ClassOverview,
}

#[derive(Clone)]
pub struct ProgressService {
    api: Arc<dyn ProgressApi>,
}

impl ProgressService {
    #[must_use]
    pub fn new(api: Arc<dyn ProgressApi>) -> Self {
        Self { api }
    }

    /// Progress of the signed-in student.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` when the progress service fails.
    pub async fn my_progress(&self) -> Result<StudentProgress, QueryError> {
        Ok(self.api.my_progress().await?.into_progress())
    }

    /// Class analytics, optionally narrowed to a single quiz.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` when the analytics service fails or the
    /// account is not a teacher.
    pub async fn class_report(&self, quiz_id: Option<QuizId>) -> Result<ClassReport, QueryError> {
        let rows: Vec<ClassProgressRow> = self
            .api
            .class_dashboard(quiz_id)
            .await?
            .into_iter()
            .map(ClassProgressRow::from)
            .collect();
        let overview = ClassOverview::from_rows(&rows);
        Ok(ClassReport { rows, overview })
    }
}
