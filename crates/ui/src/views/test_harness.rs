use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use learn_core::model::{
    AnswerMap, AuthSession, AuthToken, Language, QuizId, UserId, UserInfo, UserRole, VideoId,
};
use learn_core::time::fixed_now;
use serde_json::{Value, json};
use services::api::wire::{
    ClassProgressDto, LoginRequest, LoginResponse, ProgressResponse, QuizDetailDto,
    QuizListItemDto, RegisterRequest, SubmitResponse, VideoDto, VideoListResponse,
    VideoProgressBody,
};
use services::api::{AuthApi, Credentials, ProgressApi, QuizApi, VideoApi};
use services::{ApiConfig, ApiError, AppServices, Backends, Clock};
use storage::repository::{SessionStore, Storage};

use crate::context::{ServicesApp, UiApp, UiState, build_app_context, use_ui_state_provider};
use crate::views::auth::AuthTestHandles;
use crate::views::lessons::{LessonTestHandles, PlaybackPosition};
use crate::views::quiz::{QuizIntent, QuizTestHandles};
use crate::views::{
    GetStartedView, LessonView, LessonsView, QuizCenterView, QuizView, StudentDashboardView,
    StudentLoginView, TeacherDashboardView,
};

/// Option key the fake scoring service treats as correct.
pub(crate) const CORRECT_KEY: &str = "B";

/// In-process stand-in for the learning platform API.
#[derive(Default)]
pub(crate) struct FakeApi {
    pub(crate) quiz: Mutex<Option<Value>>,
    /// Quizzes served by id ahead of `quiz`.
    pub(crate) quizzes_by_id: Mutex<BTreeMap<u64, Value>>,
    pub(crate) catalog: Mutex<Vec<Value>>,
    pub(crate) submissions: Mutex<Vec<BTreeMap<String, String>>>,
    pub(crate) fail_submit: Mutex<Option<String>>,
    pub(crate) login_response: Mutex<Option<Value>>,
    pub(crate) progress: Mutex<Value>,
    pub(crate) dashboard: Mutex<Vec<Value>>,
    pub(crate) videos: Mutex<Vec<Value>>,
    pub(crate) video_reports: Mutex<Vec<(VideoId, VideoProgressBody)>>,
}

impl FakeApi {
    fn question_count(&self) -> u32 {
        self.quiz
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|quiz| quiz["questions"].as_array().map(Vec::len))
            .map_or(0, |count| u32::try_from(count).unwrap())
    }

    fn auth_response(&self) -> Result<LoginResponse, ApiError> {
        let response = self.login_response.lock().unwrap().clone();
        match response {
            Some(value) => Ok(serde_json::from_value(value).unwrap()),
            None => Err(ApiError::Auth("Invalid credentials".into())),
        }
    }
}

#[async_trait]
impl QuizApi for FakeApi {
    async fn list_quizzes(
        &self,
        _language: Option<Language>,
    ) -> Result<Vec<QuizListItemDto>, ApiError> {
        Ok(self
            .catalog
            .lock()
            .unwrap()
            .iter()
            .map(|item| serde_json::from_value(item.clone()).unwrap())
            .collect())
    }

    async fn fetch_quiz(&self, id: QuizId) -> Result<QuizDetailDto, ApiError> {
        let by_id = self.quizzes_by_id.lock().unwrap().get(&id.value()).cloned();
        let quiz = by_id.or_else(|| self.quiz.lock().unwrap().clone());
        quiz.map(|value| serde_json::from_value(value).unwrap())
            .ok_or(ApiError::NotFound)
    }

    async fn submit_answers(
        &self,
        _id: QuizId,
        answers: &AnswerMap,
    ) -> Result<SubmitResponse, ApiError> {
        if let Some(message) = self.fail_submit.lock().unwrap().clone() {
            return Err(ApiError::Network(message));
        }
        let wire = answers.to_wire();
        let total = self.question_count();
        let correct = u32::try_from(wire.values().filter(|key| *key == CORRECT_KEY).count())
            .unwrap();
        self.submissions.lock().unwrap().push(wire);
        let score = (f64::from(correct) / f64::from(total) * 1000.0).round() / 10.0;
        Ok(serde_json::from_value(json!({
            "score": score,
            "correct_answers": correct,
            "total_questions": total,
        }))
        .unwrap())
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.auth_response()
    }

    async fn register_student(&self, _request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.auth_response()
    }

    async fn register_teacher(&self, _request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.auth_response()
    }

    async fn logout(&self) -> Result<(), ApiError> {
        Ok(())
    }
}

#[async_trait]
impl ProgressApi for FakeApi {
    async fn my_progress(&self) -> Result<ProgressResponse, ApiError> {
        Ok(serde_json::from_value(self.progress.lock().unwrap().clone()).unwrap_or_default())
    }

    async fn class_dashboard(
        &self,
        _quiz_id: Option<QuizId>,
    ) -> Result<Vec<ClassProgressDto>, ApiError> {
        Ok(self
            .dashboard
            .lock()
            .unwrap()
            .iter()
            .map(|row| serde_json::from_value(row.clone()).unwrap())
            .collect())
    }
}

#[async_trait]
impl VideoApi for FakeApi {
    async fn list_videos(&self, _language: Option<Language>) -> Result<Vec<VideoDto>, ApiError> {
        let listing: VideoListResponse =
            serde_json::from_value(json!({ "videos": self.videos.lock().unwrap().clone() }))
                .unwrap();
        Ok(listing.into_items())
    }

    async fn report_progress(
        &self,
        video: VideoId,
        body: &VideoProgressBody,
    ) -> Result<(), ApiError> {
        self.video_reports.lock().unwrap().push((video, *body));
        Ok(())
    }
}

pub(crate) fn quiz_json(id: u64, questions: u64) -> Value {
    named_quiz_json(id, "Computer Basics", questions)
}

pub(crate) fn named_quiz_json(id: u64, name: &str, questions: u64) -> Value {
    let questions: Vec<Value> = (1..=questions)
        .map(|q| {
            json!({
                "id": q,
                "text_en": format!("Question {q}"),
                "text_hi": format!("प्रश्न {q}"),
                "options": {"A": "Mouse", "B": "Keyboard", "C": "Monitor"},
                "subject": "computer_basics"
            })
        })
        .collect();
    json!({
        "id": id,
        "name": name,
        "subject": "computer_basics",
        "time_limit": 10,
        "questions": questions,
    })
}

pub(crate) fn login_json(role: &str) -> Value {
    json!({
        "token": "tok-ui",
        "role": role,
        "user_info": {"id": 5, "username": "simran", "first_name": "Simran", "last_name": "Kaur"}
    })
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum ViewKind {
    GetStarted,
    StudentLogin,
    StudentDashboard,
    QuizCenter,
    Quiz(u64),
    Lessons,
    Lesson(u64),
    TeacherDashboard,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<ServicesApp>,
    view: ViewKind,
    quiz_handles: QuizTestHandles,
    auth_handles: AuthTestHandles,
    lesson_handles: LessonTestHandles,
    ui_slot: Rc<RefCell<Option<UiState>>>,
    view_slot: Rc<RefCell<Option<Signal<ViewKind>>>>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    let ui = use_ui_state_provider(ctx.initial_language());
    use_hook(|| *props.ui_slot.borrow_mut() = Some(ui));
    let view = use_context_provider(|| Signal::new(props.view));
    use_hook(|| *props.view_slot.borrow_mut() = Some(view));
    use_context_provider(|| props.quiz_handles.clone());
    use_context_provider(|| props.auth_handles.clone());
    use_context_provider(|| props.lesson_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<Signal<ViewKind>>();
    match view() {
        ViewKind::GetStarted => rsx! { GetStartedView {} },
        ViewKind::StudentLogin => rsx! { StudentLoginView {} },
        ViewKind::StudentDashboard => rsx! { StudentDashboardView {} },
        ViewKind::QuizCenter => rsx! { QuizCenterView {} },
        ViewKind::Quiz(id) => rsx! { QuizView { id } },
        ViewKind::Lessons => rsx! { LessonsView {} },
        ViewKind::Lesson(id) => rsx! { LessonView { id } },
        ViewKind::TeacherDashboard => rsx! { TeacherDashboardView {} },
    }
}

pub(crate) struct ViewHarness {
    pub(crate) dom: VirtualDom,
    pub(crate) api: Arc<FakeApi>,
    pub(crate) services: AppServices,
    pub(crate) quiz_handles: QuizTestHandles,
    pub(crate) auth_handles: AuthTestHandles,
    pub(crate) lesson_handles: LessonTestHandles,
    ui_slot: Rc<RefCell<Option<UiState>>>,
    view_slot: Rc<RefCell<Option<Signal<ViewKind>>>>,
}

impl ViewHarness {
    pub(crate) fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub(crate) async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drive until pending tasks settle (loads, submissions).
    pub(crate) async fn settle(&mut self) {
        for _ in 0..8 {
            self.drive_async().await;
        }
    }

    pub(crate) fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Notice waiting to be shown by the next view.
    pub(crate) fn pending_notice(&self) -> Option<String> {
        let ui = (*self.ui_slot.borrow()).expect("ui state installed");
        self.dom.in_runtime(|| ui.notice.peek().clone())
    }

    /// Swap the rendered view, as a route change with new params would.
    pub(crate) fn show(&self, view: ViewKind) {
        let mut slot = (*self.view_slot.borrow()).expect("view signal installed");
        self.dom.in_runtime(|| slot.set(view));
    }

    /// Feed a playback position as the video element's `timeupdate` would.
    pub(crate) fn play_to(&self, position: f64, duration: f64) {
        let on_progress = self.lesson_handles.on_progress();
        self.dom
            .in_runtime(|| on_progress.call(PlaybackPosition { position, duration }));
    }

    pub(crate) fn seek(&self) {
        let on_seek = self.lesson_handles.on_seek();
        self.dom.in_runtime(|| on_seek.call(()));
    }

    pub(crate) fn quiz(&self, intent: QuizIntent) {
        let dispatch = self.quiz_handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
    }

    pub(crate) fn auth_submit(&self) {
        let submit = self.auth_handles.submit();
        self.dom.in_runtime(|| submit.call(()));
    }

    pub(crate) fn auth_fields(&self, username: &str, password: &str) {
        let fields = self.auth_handles.fields();
        self.dom.in_runtime(|| {
            let mut user = fields.username;
            let mut pass = fields.password;
            user.set(username.to_string());
            pass.set(password.to_string());
        });
    }
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

/// Persist and restore a session so guarded views render for `role`.
pub(crate) async fn sign_in(services: &AppServices, storage: &Storage, role: UserRole) {
    let session = AuthSession {
        token: AuthToken::new("tok-ui").unwrap(),
        user: UserInfo {
            id: UserId::new(5),
            username: "simran".into(),
            first_name: "Simran".into(),
            last_name: "Kaur".into(),
        },
        role,
    };
    storage
        .sessions
        .save_session(&session, fixed_now())
        .await
        .expect("save session");
    services.auth().restore().await.expect("restore session");
}

pub(crate) async fn setup_view_harness(
    view: ViewKind,
    role: Option<UserRole>,
    api: FakeApi,
) -> ViewHarness {
    let storage = Storage::in_memory();
    let api = Arc::new(api);
    let backends = Backends {
        quizzes: api.clone(),
        auth: api.clone(),
        progress: api.clone(),
        videos: api.clone(),
    };
    let services = AppServices::from_parts(
        storage.clone(),
        backends,
        Credentials::new(),
        Clock::fixed(fixed_now()),
        &ApiConfig::default(),
    );
    if let Some(role) = role {
        sign_in(&services, &storage, role).await;
    }

    let quiz_handles = QuizTestHandles::default();
    let auth_handles = AuthTestHandles::default();
    let lesson_handles = LessonTestHandles::default();
    let ui_slot = Rc::new(RefCell::new(None));
    let view_slot = Rc::new(RefCell::new(None));
    let app = Arc::new(ServicesApp::new(services.clone(), Language::En));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            quiz_handles: quiz_handles.clone(),
            auth_handles: auth_handles.clone(),
            lesson_handles: lesson_handles.clone(),
            ui_slot: ui_slot.clone(),
            view_slot: view_slot.clone(),
        },
    );

    ViewHarness {
        dom,
        api,
        services,
        quiz_handles,
        auth_handles,
        lesson_handles,
        ui_slot,
        view_slot,
    }
}
