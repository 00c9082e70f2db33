//! Shared error types for the services crate.

use thiserror::Error;

use learn_core::model::{QuizError, QuizResultError, SessionError, UserError, UserRole};
use storage::repository::StorageError;
use storage::sqlite::SqliteInitError;

/// Failures talking to the learning platform API.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Request could not be delivered or timed out.
    #[error("network error: {0}")]
    Network(String),
    #[error("not found")]
    NotFound,
    /// Server rejected the payload (HTTP 400 and friends).
    #[error("{0}")]
    Validation(String),
    /// Invalid credentials or an expired token.
    #[error("{0}")]
    Auth(String),
    #[error("request failed with status {status}: {message}")]
    Status {
        status: reqwest::StatusCode,
        message: String,
    },
    /// Response body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("invalid request url: {0}")]
    Url(#[from] url::ParseError),
}

impl ApiError {
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Form-level problems detected before or after talking to the server.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("incorrect account type: expected {expected}, got {actual}")]
    WrongRole { expected: UserRole, actual: UserRole },
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted while loading a quiz for a session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("quiz not found")]
    NotFound,
    #[error(transparent)]
    Invalid(#[from] QuizError),
    #[error(transparent)]
    Api(ApiError),
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::NotFound => LoadError::NotFound,
            other => LoadError::Api(other),
        }
    }
}

/// Errors emitted while driving a quiz session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Result(#[from] QuizResultError),
    #[error("submission timed out")]
    Timeout,
    #[error("quiz session was closed")]
    Detached,
}

/// Errors emitted by catalog and progress queries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QueryError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Quiz(#[from] QuizError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}
