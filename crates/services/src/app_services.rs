use std::sync::Arc;

use learn_core::model::Quiz;
use storage::repository::Storage;

use crate::Clock;
use crate::api::{ApiClient, AuthApi, Credentials, ProgressApi, QuizApi, VideoApi};
use crate::auth_service::AuthService;
use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::lesson_service::LessonService;
use crate::preferences_service::PreferencesService;
use crate::progress_service::ProgressService;
use crate::quiz_service::QuizService;
use crate::sessions::{QuizRunner, RunnerConfig};

/// API implementations the services talk to.
#[derive(Clone)]
pub struct Backends {
    pub quizzes: Arc<dyn QuizApi>,
    pub auth: Arc<dyn AuthApi>,
    pub progress: Arc<dyn ProgressApi>,
    pub videos: Arc<dyn VideoApi>,
}

impl Backends {
    #[must_use]
    pub fn http(client: ApiClient) -> Self {
        let client = Arc::new(client);
        Self {
            quizzes: client.clone(),
            auth: client.clone(),
            progress: client.clone(),
            videos: client,
        }
    }
}

/// Assembles app-facing services.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    runner_config: RunnerConfig,
    backends: Backends,
    auth: Arc<AuthService>,
    quizzes: Arc<QuizService>,
    progress: Arc<ProgressService>,
    lessons: Arc<LessonService>,
    preferences: Arc<PreferencesService>,
}

impl AppServices {
    /// Build services backed by `SQLite` storage and the HTTP API, restoring
    /// any persisted session.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization, client setup or
    /// session restore fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: &ApiConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Self::with_http(storage, clock, config).await
    }

    /// Same as `new_sqlite` with state kept in memory only.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if client setup fails.
    pub async fn new_in_memory(clock: Clock, config: &ApiConfig) -> Result<Self, AppServicesError> {
        Self::with_http(Storage::in_memory(), clock, config).await
    }

    async fn with_http(
        storage: Storage,
        clock: Clock,
        config: &ApiConfig,
    ) -> Result<Self, AppServicesError> {
        let credentials = Credentials::new();
        let client = ApiClient::new(config, credentials.clone())?;
        let services = Self::from_parts(storage, Backends::http(client), credentials, clock, config);
        services.auth.restore().await?;
        Ok(services)
    }

    /// Wire services over explicit backends.
    #[must_use]
    pub fn from_parts(
        storage: Storage,
        backends: Backends,
        credentials: Credentials,
        clock: Clock,
        config: &ApiConfig,
    ) -> Self {
        let auth = Arc::new(AuthService::new(
            clock,
            Arc::clone(&backends.auth),
            Arc::clone(&storage.sessions),
            credentials,
        ));
        let quizzes = Arc::new(
            QuizService::new(Arc::clone(&backends.quizzes))
                .with_default_time_limit(config.default_time_limit_minutes),
        );
        let progress = Arc::new(ProgressService::new(Arc::clone(&backends.progress)));
        let lessons = Arc::new(LessonService::new(Arc::clone(&backends.videos)));
        let preferences = Arc::new(PreferencesService::new(Arc::clone(&storage.preferences)));
        Self {
            clock,
            runner_config: RunnerConfig::from(config),
            backends,
            auth,
            quizzes,
            progress,
            lessons,
            preferences,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn auth(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    /// New runner for a loaded quiz. The runner is idle until `start`.
    #[must_use]
    pub fn quiz_runner(&self, quiz: Quiz) -> QuizRunner {
        QuizRunner::new(
            quiz,
            Arc::clone(&self.backends.quizzes),
            self.clock,
            self.runner_config,
        )
    }

    #[must_use]
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

}
