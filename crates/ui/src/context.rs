use std::sync::Arc;

use dioxus::prelude::*;
use learn_core::model::{Language, Quiz};
use services::{
    AppServices, AuthService, LessonService, PreferencesService, ProgressService, QuizRunner,
    QuizService,
};

pub trait UiApp: Send + Sync {
    /// Language shown before the user picks one in this run.
    fn initial_language(&self) -> Language;

    fn auth(&self) -> Arc<AuthService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn progress(&self) -> Arc<ProgressService>;
    fn lessons(&self) -> Arc<LessonService>;
    fn preferences(&self) -> Arc<PreferencesService>;
    fn quiz_runner(&self, quiz: Quiz) -> QuizRunner;
}

/// `UiApp` over a fully wired `AppServices`.
#[derive(Clone)]
pub struct ServicesApp {
    services: AppServices,
    language: Language,
}

impl ServicesApp {
    #[must_use]
    pub fn new(services: AppServices, language: Language) -> Self {
        Self { services, language }
    }
}

impl UiApp for ServicesApp {
    fn initial_language(&self) -> Language {
        self.language
    }

    fn auth(&self) -> Arc<AuthService> {
        self.services.auth()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn progress(&self) -> Arc<ProgressService> {
        self.services.progress()
    }

    fn lessons(&self) -> Arc<LessonService> {
        self.services.lessons()
    }

    fn preferences(&self) -> Arc<PreferencesService> {
        self.services.preferences()
    }

    fn quiz_runner(&self, quiz: Quiz) -> QuizRunner {
        self.services.quiz_runner(quiz)
    }
}

#[derive(Clone)]
pub struct AppContext {
    app: Arc<dyn UiApp>,
    initial_language: Language,
    auth: Arc<AuthService>,
    quizzes: Arc<QuizService>,
    progress: Arc<ProgressService>,
    lessons: Arc<LessonService>,
    preferences: Arc<PreferencesService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            app: Arc::clone(app),
            initial_language: app.initial_language(),
            auth: app.auth(),
            quizzes: app.quizzes(),
            progress: app.progress(),
            lessons: app.lessons(),
            preferences: app.preferences(),
        }
    }

    #[must_use]
    pub fn initial_language(&self) -> Language {
        self.initial_language
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
    pub fn lessons(&self) -> Arc<LessonService> {
        Arc::clone(&self.lessons)
    }

    #[must_use]
    pub fn preferences(&self) -> Arc<PreferencesService> {
        Arc::clone(&self.preferences)
    }

    /// Fresh runner for `quiz`; dropping it stops its clock.
    #[must_use]
    pub fn quiz_runner(&self, quiz: Quiz) -> QuizRunner {
        self.app.quiz_runner(quiz)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Reactive state shared by every view: display language and a one-shot
/// notice carried across a redirect.
#[derive(Clone, Copy)]
pub struct UiState {
    pub language: Signal<Language>,
    pub notice: Signal<Option<String>>,
}

impl UiState {
    /// Show `message` on the next view that takes the notice.
    pub fn flash(mut self, message: impl Into<String>) {
        self.notice.set(Some(message.into()));
    }
}

/// Install `UiState` for the subtree. Call once near the root.
pub fn use_ui_state_provider(initial_language: Language) -> UiState {
    use_context_provider(|| UiState {
        language: Signal::new(initial_language),
        notice: Signal::new(None),
    })
}

#[must_use]
pub fn use_ui_state() -> UiState {
    use_context::<UiState>()
}

/// Notice flashed by the previous view, consumed on first render.
#[must_use]
pub fn use_flash_notice() -> Option<String> {
    let state = use_ui_state();
    let notice = use_hook(|| state.notice.peek().clone());
    use_effect(move || {
        let mut pending = state.notice;
        if pending.peek().is_some() {
            pending.set(None);
        }
    });
    notice
}

/// Current display language.
#[must_use]
pub fn use_language() -> Language {
    let state = use_ui_state();
    (state.language)()
}
