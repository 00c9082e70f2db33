#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};

use learn_core::model::{AnswerMap, Language, OptionKey, Quiz, QuizId, VideoId};
use services::ApiError;
use services::api::wire::{
    ClassProgressDto, LoginRequest, LoginResponse, ProgressResponse, QuizDetailDto,
    QuizListItemDto, RegisterRequest, SubmitResponse, VideoDto, VideoProgressBody,
};
use services::api::{AuthApi, ProgressApi, QuizApi, VideoApi};

/// Option key the fake scoring service treats as correct.
pub const CORRECT_KEY: &str = "B";

pub fn key(value: &str) -> OptionKey {
    OptionKey::new(value).unwrap()
}

pub fn quiz_json(id: u64, questions: u64, minutes: Option<u32>) -> Value {
    let questions: Vec<Value> = (1..=questions)
        .map(|q| {
            json!({
                "id": q,
                "text_en": format!("Question {q}"),
                "text_hi": format!("प्रश्न {q}"),
                "options": {"A": "first", "B": "second", "C": "third", "D": "fourth"},
                "subject": "digital_literacy"
            })
        })
        .collect();
    let mut quiz = json!({
        "id": id,
        "name": "Internet Basics",
        "subject": "digital_literacy",
        "questions": questions,
    });
    if let Some(minutes) = minutes {
        quiz["time_limit"] = json!(minutes);
    }
    quiz
}

pub fn build_quiz(id: u64, questions: u64, minutes: u32) -> Quiz {
    let dto: QuizDetailDto = serde_json::from_value(quiz_json(id, questions, Some(minutes))).unwrap();
    dto.into_quiz(10).unwrap()
}

pub fn login_json(role: &str) -> Value {
    json!({
        "token": "9944b09199c62bcf9418ad846dd0e4bbdfc6ee4b",
        "role": role,
        "user_info": {"id": 12, "username": "simran", "first_name": "Simran", "last_name": "Kaur"}
    })
}

/// In-process stand-in for every REST seam.
#[derive(Default)]
pub struct FakeApi {
    pub quiz: Mutex<Option<Value>>,
    pub catalog: Mutex<Value>,
    pub submissions: Mutex<Vec<BTreeMap<String, String>>>,
    pub submit_failures: Mutex<VecDeque<ApiError>>,
    pub submit_delay: Mutex<Duration>,
    pub login_response: Mutex<Option<Value>>,
    pub login_calls: AtomicUsize,
    pub register_requests: Mutex<Vec<Value>>,
    pub logout_fails: AtomicBool,
    pub logout_calls: AtomicUsize,
    pub progress: Mutex<Value>,
    pub dashboard: Mutex<Value>,
    pub dashboard_queries: Mutex<Vec<Option<QuizId>>>,
    pub videos: Mutex<Value>,
    pub video_queries: Mutex<Vec<Option<Language>>>,
    pub video_reports: Mutex<Vec<(VideoId, VideoProgressBody)>>,
    pub video_fails: AtomicBool,
}

impl FakeApi {
    pub fn with_quiz(quiz: Value) -> Self {
        let api = Self::default();
        *api.quiz.lock().unwrap() = Some(quiz);
        api
    }

    pub fn fail_next_submit(&self, err: ApiError) {
        self.submit_failures.lock().unwrap().push_back(err);
    }

    pub fn set_submit_delay(&self, delay: Duration) {
        *self.submit_delay.lock().unwrap() = delay;
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    fn question_total(&self) -> u32 {
        self.quiz
            .lock()
            .unwrap()
            .as_ref()
            .and_then(|quiz| quiz["questions"].as_array().map(Vec::len))
            .and_then(|len| u32::try_from(len).ok())
            .unwrap_or(0)
    }
}

#[async_trait]
impl QuizApi for FakeApi {
    async fn list_quizzes(
        &self,
        _language: Option<Language>,
    ) -> Result<Vec<QuizListItemDto>, ApiError> {
        let catalog = self.catalog.lock().unwrap().clone();
        let response: services::api::wire::QuizListResponse =
            serde_json::from_value(catalog).map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(response.into_items())
    }

    async fn fetch_quiz(&self, id: QuizId) -> Result<QuizDetailDto, ApiError> {
        let quiz = self.quiz.lock().unwrap().clone();
        match quiz {
            Some(value) if value["id"] == json!(id.value()) => {
                serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
            }
            _ => Err(ApiError::NotFound),
        }
    }

    async fn submit_answers(
        &self,
        _id: QuizId,
        answers: &AnswerMap,
    ) -> Result<SubmitResponse, ApiError> {
        self.submissions.lock().unwrap().push(answers.to_wire());
        let delay = *self.submit_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if let Some(err) = self.submit_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        let total = self.question_total();
        let correct = u32::try_from(
            answers
                .iter()
                .filter(|(_, key)| key.as_str() == CORRECT_KEY)
                .count(),
        )
        .unwrap();
        let score = if total == 0 {
            0.0
        } else {
            (f64::from(correct) / f64::from(total) * 1000.0).round() / 10.0
        };
        Ok(SubmitResponse {
            score,
            correct_answers: Some(correct),
            total_questions: Some(total),
        })
    }
}

#[async_trait]
impl AuthApi for FakeApi {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let response = self.login_response.lock().unwrap().clone();
        match response {
            Some(value) => {
                serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
            }
            None => Err(ApiError::Auth("Invalid credentials".into())),
        }
    }

    async fn register_student(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.register_requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        serde_json::from_value(login_json("student")).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn register_teacher(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.register_requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request).unwrap());
        serde_json::from_value(login_json("teacher")).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        if self.logout_fails.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ProgressApi for FakeApi {
    async fn my_progress(&self) -> Result<ProgressResponse, ApiError> {
        let value = self.progress.lock().unwrap().clone();
        serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
    }

    async fn class_dashboard(
        &self,
        quiz_id: Option<QuizId>,
    ) -> Result<Vec<ClassProgressDto>, ApiError> {
        self.dashboard_queries.lock().unwrap().push(quiz_id);
        let value = self.dashboard.lock().unwrap().clone();
        serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))
    }
}

#[async_trait]
impl VideoApi for FakeApi {
    async fn list_videos(&self, language: Option<Language>) -> Result<Vec<VideoDto>, ApiError> {
        self.video_queries.lock().unwrap().push(language);
        let value = self.videos.lock().unwrap().clone();
        if value.is_null() {
            return Ok(Vec::new());
        }
        let listing: services::api::wire::VideoListResponse =
            serde_json::from_value(value).map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(listing.into_items())
    }

    async fn report_progress(
        &self,
        video: VideoId,
        body: &VideoProgressBody,
    ) -> Result<(), ApiError> {
        self.video_reports.lock().unwrap().push((video, *body));
        if self.video_fails.load(Ordering::SeqCst) {
            return Err(ApiError::Network("offline".into()));
        }
        Ok(())
    }
}
