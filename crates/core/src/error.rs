use thiserror::Error;

use crate::model::{LanguageError, QuizError, QuizResultError, SessionError, UserError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Quiz(#[from] QuizError),
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Result(#[from] QuizResultError),
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    Language(#[from] LanguageError),
}
