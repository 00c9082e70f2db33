use std::sync::{Arc, Mutex, PoisonError};

use learn_core::model::{Language, ProgressThrottle, VideoId, VideoProgress};
use tracing::{debug, warn};

use crate::api::VideoApi;
use crate::api::wire::VideoProgressBody;

/// Reports playback progress for one video, throttled to interval boundaries.
///
/// Reporting failures are logged and otherwise ignored; playback must never
/// be interrupted by them.
pub struct VideoProgressReporter {
    api: Arc<dyn VideoApi>,
    video: VideoId,
    throttle: Mutex<ProgressThrottle>,
}

impl VideoProgressReporter {
    #[must_use]
    pub fn new(api: Arc<dyn VideoApi>, video: VideoId) -> Self {
        Self::with_throttle(api, video, ProgressThrottle::default())
    }

    #[must_use]
    pub fn with_throttle(api: Arc<dyn VideoApi>, video: VideoId, throttle: ProgressThrottle) -> Self {
        Self {
            api,
            video,
            throttle: Mutex::new(throttle),
        }
    }

    /// Feed a playback position. Returns the progress that was sent, if any.
    pub async fn on_time_update(
        &self,
        position_secs: f64,
        duration_secs: f64,
        language: Language,
    ) -> Option<VideoProgress> {
        let progress = self
            .throttle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .observe(position_secs, duration_secs, language)?;
        let body = VideoProgressBody::from(progress);
        match self.api.report_progress(self.video, &body).await {
            Ok(()) => {
                debug!(video = %self.video, watched = progress.watch_time_seconds, "video progress reported");
            }
            Err(err) => {
                warn!(video = %self.video, error = %err, "video progress report failed");
            }
        }
        Some(progress)
    }

    /// Forget the last reported boundary after a seek.
    pub fn on_seek(&self) {
        self.throttle
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .reset();
    }
}
