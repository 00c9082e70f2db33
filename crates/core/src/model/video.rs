use crate::model::ids::VideoId;
use crate::model::language::{Language, LocalizedText};

/// Default spacing between progress reports, in seconds of playback.
pub const DEFAULT_REPORT_INTERVAL_SECS: u64 = 10;

/// Playback progress sent to the content service.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoProgress {
    pub watch_time_seconds: u64,
    pub completion_percentage: f64,
    pub language: Language,
}

/// A video lesson as listed by the content service.
///
/// `video_url` is already resolved for the language the list was requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub id: VideoId,
    pub title: LocalizedText,
    pub description: LocalizedText,
    pub category: String,
    pub video_url: String,
    pub duration_minutes: Option<u32>,
    pub completed: bool,
    /// Last reported completion, 0–100.
    pub progress_percentage: f64,
}

impl Lesson {
    /// Lessons without a source are listed but cannot be played.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.video_url.trim().is_empty()
    }
}

/// Decides when playback position changes are worth reporting.
///
/// A report is produced when playback sits on an interval boundary
/// (`floor(position) % interval == 0`), at most once per boundary.
#[derive(Debug, Clone)]
pub struct ProgressThrottle {
    interval_secs: u64,
    last_boundary: Option<u64>,
}

impl Default for ProgressThrottle {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_INTERVAL_SECS)
    }
}

impl ProgressThrottle {
    #[must_use]
    pub fn new(interval_secs: u64) -> Self {
        Self {
            interval_secs: interval_secs.max(1),
            last_boundary: None,
        }
    }

    /// Feed a playback position; returns the progress to report, if any.
    pub fn observe(
        &mut self,
        position_secs: f64,
        duration_secs: f64,
        language: Language,
    ) -> Option<VideoProgress> {
        if !(position_secs > 0.0 && duration_secs > 0.0) || !position_secs.is_finite() {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let whole = position_secs.floor() as u64;
        if whole == 0 || whole % self.interval_secs != 0 || self.last_boundary == Some(whole) {
            return None;
        }
        self.last_boundary = Some(whole);
        let completion_percentage = (position_secs / duration_secs * 100.0).clamp(0.0, 100.0);
        Some(VideoProgress {
            watch_time_seconds: whole,
            completion_percentage,
            language,
        })
    }

    /// Forget the last boundary, e.g. after the viewer seeks or switches video.
    pub fn reset(&mut self) {
        self.last_boundary = None;
    }
}
