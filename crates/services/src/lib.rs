#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod auth_service;
pub mod config;
pub mod error;
pub mod lesson_service;
pub mod preferences_service;
pub mod progress_service;
pub mod quiz_service;
pub mod sessions;
pub mod video_progress_service;

pub use learn_core::Clock;

pub use app_services::{AppServices, Backends};
pub use auth_service::{
    AuthService, LoginForm, RouteAccess, StudentRegistration, TeacherRegistration, route_access,
};
pub use config::{ApiConfig, ConfigError, RetryPolicy};
pub use error::{
    ApiError, AppServicesError, AuthError, LoadError, QueryError, SubmitError, ValidationError,
};
pub use lesson_service::LessonService;
pub use preferences_service::PreferencesService;
pub use progress_service::{ClassReport, ProgressService};
pub use quiz_service::QuizService;
pub use sessions::{QuizRunner, QuizSnapshot, RunnerConfig, SubmitStatus};
pub use video_progress_service::VideoProgressReporter;
