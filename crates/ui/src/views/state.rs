use dioxus::prelude::*;
use learn_core::model::Language;
use services::{ApiError, AuthError, LoadError, QueryError, SubmitError, ValidationError};

use crate::vm::Msg;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    Network,
    NotFound,
    Unauthorized,
}

impl ViewError {
    #[must_use]
    pub fn message(self, language: Language) -> &'static str {
        match self {
            ViewError::Unknown => Msg::SomethingWentWrong.text(language),
            ViewError::Network => Msg::NetworkProblem.text(language),
            ViewError::NotFound => Msg::QuizNotFound.text(language),
            ViewError::Unauthorized => Msg::SessionExpired.text(language),
        }
    }
}

impl From<&ApiError> for ViewError {
    fn from(err: &ApiError) -> Self {
        match err {
            ApiError::Network(_) => ViewError::Network,
            ApiError::NotFound => ViewError::NotFound,
            ApiError::Auth(_) => ViewError::Unauthorized,
            _ => ViewError::Unknown,
        }
    }
}

impl From<&QueryError> for ViewError {
    fn from(err: &QueryError) -> Self {
        match err {
            QueryError::NotFound => ViewError::NotFound,
            QueryError::Api(api) => api.into(),
            _ => ViewError::Unknown,
        }
    }
}

impl From<&LoadError> for ViewError {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::NotFound => ViewError::NotFound,
            LoadError::Api(api) => api.into(),
            _ => ViewError::Unknown,
        }
    }
}

/// Inline notice for a failed sign-in or registration.
///
/// Server messages (`{"error": ...}`) are shown as sent; local validation
/// uses the localized strings.
#[must_use]
pub fn auth_error_message(err: &AuthError, language: Language) -> String {
    match err {
        AuthError::Validation(ValidationError::WrongRole { .. }) => {
            Msg::WrongAccountType.text(language).to_string()
        }
        AuthError::Validation(ValidationError::PasswordMismatch) => {
            Msg::PasswordsDiffer.text(language).to_string()
        }
        AuthError::Validation(ValidationError::MissingField(_)) => {
            Msg::FillAllFields.text(language).to_string()
        }
        AuthError::Api(ApiError::Auth(message) | ApiError::Validation(message)) => message.clone(),
        AuthError::Api(api) => ViewError::from(api).message(language).to_string(),
        _ => Msg::SomethingWentWrong.text(language).to_string(),
    }
}

/// Notice shown when a manual submission fails. Losing a race to the clock
/// is not an error worth showing.
#[must_use]
pub fn submit_error_message(err: &SubmitError, language: Language) -> Option<String> {
    match err {
        SubmitError::Session(_) | SubmitError::Detached => None,
        SubmitError::Timeout => Some(Msg::SubmitFailed.text(language).to_string()),
        SubmitError::Api(api) if api.is_network() => {
            Some(Msg::SubmitFailed.text(language).to_string())
        }
        SubmitError::Api(ApiError::Validation(message)) => Some(message.clone()),
        _ => Some(Msg::SubmitFailed.text(language).to_string()),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
