//! JSON shapes exchanged with the learning platform API.
//!
//! Decoding is lenient where the backend has shipped more than one shape
//! (bare vs enveloped quiz, array vs paginated list); conversion into domain
//! types is strict.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use learn_core::model::{
    AttemptSummary, AuthSession, AuthToken, ClassProgressRow, Difficulty, Language, Lesson,
    LocalizedText, OptionKey, Question, QuestionId, Quiz, QuizError, QuizId, QuizResult,
    QuizResultError, QuizSummary, StudentProgress, UserError, UserId, UserInfo, UserRole,
    VideoId, VideoProgress,
};

//
// ─── QUIZ DETAIL ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct QuestionDto {
    pub id: u64,
    #[serde(alias = "text")]
    pub text_en: String,
    #[serde(default)]
    pub text_hi: Option<String>,
    #[serde(default)]
    pub text_pa: Option<String>,
    pub options: BTreeMap<String, String>,
    #[serde(default)]
    pub subject: String,
}

impl QuestionDto {
    /// # Errors
    ///
    /// Returns `QuizError` for blank option keys or an empty option set.
    pub fn into_question(self) -> Result<Question, QuizError> {
        let options = self
            .options
            .into_iter()
            .map(|(key, text)| OptionKey::new(key).map(|key| (key, text)))
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Question::new(
            QuestionId::new(self.id),
            LocalizedText::new(self.text_en, self.text_hi, self.text_pa),
            options,
            self.subject,
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct QuizDetailDto {
    pub id: u64,
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub time_limit: Option<u32>,
    #[serde(default)]
    pub questions: Vec<QuestionDto>,
}

impl QuizDetailDto {
    /// Build a domain quiz, using `default_minutes` when no limit was sent.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty quiz and other
    /// `QuizError` variants for invalid questions or limits.
    pub fn into_quiz(self, default_minutes: u32) -> Result<Quiz, QuizError> {
        if self.questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        let questions = self
            .questions
            .into_iter()
            .map(QuestionDto::into_question)
            .collect::<Result<Vec<_>, _>>()?;
        Quiz::new(
            QuizId::new(self.id),
            self.name,
            self.subject,
            self.time_limit.unwrap_or(default_minutes),
            questions,
        )
    }
}

/// `GET /quizzes/{id}/` answers either `{ "quiz": {...} }` or the bare quiz.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizDetailEnvelope {
    Wrapped { quiz: QuizDetailDto },
    Bare(QuizDetailDto),
}

impl QuizDetailEnvelope {
    #[must_use]
    pub fn into_inner(self) -> QuizDetailDto {
        match self {
            QuizDetailEnvelope::Wrapped { quiz } | QuizDetailEnvelope::Bare(quiz) => quiz,
        }
    }
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct QuizListItemDto {
    pub id: u64,
    #[serde(alias = "name")]
    pub title: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default, alias = "duration")]
    pub time_limit: Option<u32>,
    #[serde(default, alias = "difficulty_level")]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub question_count: Option<usize>,
    #[serde(default)]
    pub questions: Option<Vec<IgnoredAny>>,
}

impl QuizListItemDto {
    #[must_use]
    pub fn into_summary(self) -> QuizSummary {
        let question_count = self
            .question_count
            .or_else(|| self.questions.as_ref().map(Vec::len))
            .unwrap_or(0);
        QuizSummary {
            id: QuizId::new(self.id),
            title: self.title,
            subject: self.subject,
            question_count,
            time_limit_minutes: self.time_limit,
            difficulty: self.difficulty.as_deref().and_then(parse_difficulty),
        }
    }
}

fn parse_difficulty(raw: &str) -> Option<Difficulty> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "easy" => Some(Difficulty::Easy),
        "medium" => Some(Difficulty::Medium),
        "hard" => Some(Difficulty::Hard),
        _ => None,
    }
}

/// `GET /quizzes/` answers either a plain array or a paginated page.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuizListResponse {
    List(Vec<QuizListItemDto>),
    Page { results: Vec<QuizListItemDto> },
}

impl QuizListResponse {
    #[must_use]
    pub fn into_items(self) -> Vec<QuizListItemDto> {
        match self {
            QuizListResponse::List(items) | QuizListResponse::Page { results: items } => items,
        }
    }
}

//
// ─── SUBMISSION ───────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SubmitRequest {
    pub answers: BTreeMap<String, String>,
    pub offline_mode: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SubmitResponse {
    pub score: f64,
    #[serde(default)]
    pub correct_answers: Option<u32>,
    #[serde(default)]
    pub total_questions: Option<u32>,
}

impl SubmitResponse {
    /// Convert to a domain result, filling missing counts from the quiz size.
    ///
    /// # Errors
    ///
    /// Returns `QuizResultError` when the score or counts are out of range.
    pub fn into_result(self, question_count: usize) -> Result<QuizResult, QuizResultError> {
        let total = self
            .total_questions
            .unwrap_or_else(|| u32::try_from(question_count).unwrap_or(u32::MAX));
        let correct = self.correct_answers.unwrap_or_else(|| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let estimate = (self.score / 100.0 * f64::from(total)).round().max(0.0) as u32;
            estimate.min(total)
        });
        QuizResult::new(self.score, correct, total)
    }
}

//
// ─── AUTH ─────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NestedUserDto {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// Students and teachers come back as profiles wrapping a nested `user`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfoDto {
    pub id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub user: Option<NestedUserDto>,
}

impl UserInfoDto {
    #[must_use]
    pub fn into_user(self) -> UserInfo {
        let nested = self.user.unwrap_or_default();
        let pick = |flat: String, inner: String| if flat.is_empty() { inner } else { flat };
        UserInfo {
            id: UserId::new(self.id),
            username: pick(self.username, nested.username),
            first_name: pick(self.first_name, nested.first_name),
            last_name: pick(self.last_name, nested.last_name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_info: UserInfoDto,
    pub role: String,
}

impl LoginResponse {
    /// # Errors
    ///
    /// Returns `UserError` for an empty token or an unknown role.
    pub fn into_session(self) -> Result<AuthSession, UserError> {
        Ok(AuthSession {
            token: AuthToken::new(self.token)?,
            user: self.user_info.into_user(),
            role: UserRole::parse(&self.role)?,
        })
    }
}

//
// ─── PROGRESS ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct AttemptDto {
    #[serde(alias = "quiz_title", alias = "quiz")]
    pub quiz_name: String,
    pub score: f64,
    #[serde(default)]
    pub attempt_number: u32,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressResponse {
    #[serde(default)]
    pub total_quizzes: u32,
    #[serde(default)]
    pub completed_quizzes: u32,
    #[serde(default)]
    pub average_score: f64,
    #[serde(default)]
    pub recent_attempts: Vec<AttemptDto>,
}

impl ProgressResponse {
    #[must_use]
    pub fn into_progress(self) -> StudentProgress {
        StudentProgress {
            total_quizzes: self.total_quizzes,
            completed_quizzes: self.completed_quizzes,
            average_score: self.average_score,
            recent_attempts: self
                .recent_attempts
                .into_iter()
                .map(|attempt| AttemptSummary {
                    quiz_name: attempt.quiz_name,
                    score: attempt.score,
                    attempt_number: attempt.attempt_number,
                    completed_at: attempt.completed_at,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClassProgressDto {
    pub student_name: String,
    pub score: f64,
    #[serde(default)]
    pub badges: Vec<String>,
    #[serde(default)]
    pub progress: f64,
}

impl From<ClassProgressDto> for ClassProgressRow {
    fn from(dto: ClassProgressDto) -> Self {
        Self {
            student_name: dto.student_name,
            score: dto.score,
            badges: dto.badges,
            progress: dto.progress,
        }
    }
}

//
// ─── VIDEO ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Deserialize)]
pub struct VideoDto {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub title_hi: Option<String>,
    #[serde(default)]
    pub title_pa: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_hi: Option<String>,
    #[serde(default)]
    pub description_pa: Option<String>,
    #[serde(default)]
    pub category_name: String,
    #[serde(default)]
    pub video_url: String,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default)]
    pub progress_percentage: f64,
}

impl VideoDto {
    #[must_use]
    pub fn into_lesson(self) -> Lesson {
        let progress_percentage = if self.progress_percentage.is_finite() {
            self.progress_percentage.clamp(0.0, 100.0)
        } else {
            0.0
        };
        Lesson {
            id: VideoId::new(self.id),
            title: LocalizedText::new(self.title, self.title_hi, self.title_pa),
            description: LocalizedText::new(
                self.description,
                self.description_hi,
                self.description_pa,
            ),
            category: self.category_name,
            video_url: self.video_url.trim().to_string(),
            duration_minutes: self.duration_minutes,
            completed: self.is_completed,
            progress_percentage,
        }
    }
}

/// `GET /videos/` answers `{ "videos": [...] }`; a bare array is accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum VideoListResponse {
    Wrapped { videos: Vec<VideoDto> },
    List(Vec<VideoDto>),
}

impl VideoListResponse {
    #[must_use]
    pub fn into_items(self) -> Vec<VideoDto> {
        match self {
            VideoListResponse::Wrapped { videos } | VideoListResponse::List(videos) => videos,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct VideoProgressBody {
    pub watch_time_seconds: u64,
    pub completion_percentage: f64,
    pub language: Language,
}

impl From<VideoProgress> for VideoProgressBody {
    fn from(progress: VideoProgress) -> Self {
        Self {
            watch_time_seconds: progress.watch_time_seconds,
            completion_percentage: progress.completion_percentage,
            language: progress.language,
        }
    }
}

/// `{ "error": "..." }` body used by the backend for failures.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
}

impl ErrorBody {
    #[must_use]
    pub fn message(self) -> Option<String> {
        self.error
            .or(self.detail)
            .filter(|message| !message.trim().is_empty())
    }
}
