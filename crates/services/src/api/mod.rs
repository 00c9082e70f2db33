//! REST seams. Services depend on these traits; `ApiClient` is the HTTP
//! implementation and tests plug in fakes.

mod client;
mod credentials;
pub mod wire;

use async_trait::async_trait;

use learn_core::model::{AnswerMap, Language, QuizId, VideoId};

use crate::error::ApiError;
use wire::{
    ClassProgressDto, LoginRequest, LoginResponse, ProgressResponse, QuizDetailDto,
    QuizListItemDto, RegisterRequest, SubmitResponse, VideoDto, VideoProgressBody,
};

pub use client::{ApiClient, error_for_status, requires_auth};
pub use credentials::Credentials;

#[async_trait]
pub trait QuizApi: Send + Sync {
    /// `GET /quizzes/`, optionally filtered by language.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status or decoding failures.
    async fn list_quizzes(&self, language: Option<Language>)
    -> Result<Vec<QuizListItemDto>, ApiError>;

    /// `GET /quizzes/{id}/`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` for unknown quizzes and other `ApiError`
    /// variants on transport or decoding failures.
    async fn fetch_quiz(&self, id: QuizId) -> Result<QuizDetailDto, ApiError>;

    /// `POST /quizzes/{id}/submit/`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` when the scoring service rejects or cannot be reached.
    async fn submit_answers(&self, id: QuizId, answers: &AnswerMap)
    -> Result<SubmitResponse, ApiError>;
}

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError::Auth` for invalid credentials.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the account cannot be created.
    async fn register_student(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::Validation` when the account cannot be created.
    async fn register_teacher(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError` if the server could not revoke the token.
    async fn logout(&self) -> Result<(), ApiError>;
}

#[async_trait]
pub trait ProgressApi: Send + Sync {
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status or decoding failures.
    async fn my_progress(&self) -> Result<ProgressResponse, ApiError>;

    /// # Errors
    ///
    /// Returns `ApiError::Auth` for non-teacher accounts.
    async fn class_dashboard(&self, quiz_id: Option<QuizId>)
    -> Result<Vec<ClassProgressDto>, ApiError>;
}

#[async_trait]
pub trait VideoApi: Send + Sync {
    /// `GET /videos/`, with URLs resolved for `language` when given.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport, status or decoding failures.
    async fn list_videos(&self, language: Option<Language>) -> Result<Vec<VideoDto>, ApiError>;

    /// `POST /videos/{id}/progress/`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport or status failures.
    async fn report_progress(&self, video: VideoId, body: &VideoProgressBody)
    -> Result<(), ApiError>;
}
