use std::sync::Arc;

use learn_core::model::{Language, Lesson, VideoId};
use tracing::debug;

use crate::api::VideoApi;
use crate::error::QueryError;
use crate::video_progress_service::VideoProgressReporter;

/// Video lessons and their progress reporting.
#[derive(Clone)]
pub struct LessonService {
    api: Arc<dyn VideoApi>,
}

impl LessonService {
    #[must_use]
    pub fn new(api: Arc<dyn VideoApi>) -> Self {
        Self { api }
    }

    /// Lessons available in `language`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::Api` when the content service fails.
    pub async fn catalog(&self, language: Language) -> Result<Vec<Lesson>, QueryError> {
        let items = self.api.list_videos(Some(language)).await?;
        Ok(items.into_iter().map(|item| item.into_lesson()).collect())
    }

    /// A single lesson, looked up in the catalog for `language`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::NotFound` when the catalog has no such lesson and
    /// `QueryError::Api` when the content service fails.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn lesson(&self, id: VideoId, language: Language) -> Result<Lesson, QueryError> {
        let lesson = self
            .catalog(language)
            .await?
            .into_iter()
            .find(|lesson| lesson.id == id)
            .ok_or(QueryError::NotFound)?;
        debug!(playable = lesson.is_playable(), "lesson loaded");
        Ok(lesson)
    }

    /// Reporter for one playback of `video`.
    #[must_use]
    pub fn reporter(&self, video: VideoId) -> VideoProgressReporter {
        VideoProgressReporter::new(Arc::clone(&self.api), video)
    }
}
