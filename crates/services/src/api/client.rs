use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use learn_core::model::{AnswerMap, Language, QuizId, VideoId};

use super::credentials::Credentials;
use super::wire::{
    ClassProgressDto, ErrorBody, LoginRequest, LoginResponse, ProgressResponse, QuizDetailDto,
    QuizDetailEnvelope, QuizListItemDto, QuizListResponse, RegisterRequest, SubmitRequest,
    SubmitResponse, VideoDto, VideoListResponse, VideoProgressBody,
};
use super::{AuthApi, ProgressApi, QuizApi, VideoApi};
use crate::config::ApiConfig;
use crate::error::ApiError;

const LOGIN_PATH: &str = "auth/login/";
const REGISTER_PATH: &str = "auth/register/";
const REGISTER_TEACHER_PATH: &str = "auth/register/teacher/";
const LOGOUT_PATH: &str = "auth/logout/";

/// Endpoints that must be called without the token header.
const PUBLIC_PATHS: [&str; 3] = [LOGIN_PATH, REGISTER_PATH, REGISTER_TEACHER_PATH];

#[must_use]
pub fn requires_auth(path: &str) -> bool {
    let path = path.trim_start_matches('/');
    !PUBLIC_PATHS.contains(&path)
}

/// Map a non-success response onto the error taxonomy.
#[must_use]
pub fn error_for_status(status: StatusCode, body: &str) -> ApiError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(ErrorBody::message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_string()
        });
    match status {
        StatusCode::NOT_FOUND => ApiError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ApiError::Auth(message),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::Validation(message),
        _ => ApiError::Status { status, message },
    }
}

/// HTTP client for the learning platform REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl ApiClient {
    /// Build a client with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network` if the HTTP client cannot be constructed.
    pub fn new(config: &ApiConfig, credentials: Credentials) -> Result<Self, ApiError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            credentials,
        })
    }

    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Ok(Url::parse(&format!(
            "{}/{}",
            self.base_url,
            path.trim_start_matches('/')
        ))?)
    }

    fn authorize(&self, path: &str, builder: RequestBuilder) -> RequestBuilder {
        if !requires_auth(path) {
            return builder;
        }
        match self.credentials.token() {
            Some(token) => builder.header(AUTHORIZATION, format!("Token {}", token.expose())),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let mut url = self.endpoint(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        let response = self.authorize(path, self.http.get(url)).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let response = self
            .authorize(path, self.http.post(url))
            .json(body)
            .send()
            .await?;
        decode(response).await
    }

    async fn post_discard<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.endpoint(path)?;
        let response = self
            .authorize(path, self.http.post(url))
            .json(body)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(error_for_status(status, &text))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let bytes = response.bytes().await?;
    if !status.is_success() {
        return Err(error_for_status(status, &String::from_utf8_lossy(&bytes)));
    }
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Malformed(e.to_string()))
}

#[async_trait]
impl QuizApi for ApiClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_quizzes(
        &self,
        language: Option<Language>,
    ) -> Result<Vec<QuizListItemDto>, ApiError> {
        let query: Vec<(&str, String)> = language
            .map(|lang| ("lang", lang.code().to_string()))
            .into_iter()
            .collect();
        let response: QuizListResponse = self.get_json("quizzes/", &query).await?;
        Ok(response.into_items())
    }

    #[tracing::instrument(level = "debug", skip(self))]
    async fn fetch_quiz(&self, id: QuizId) -> Result<QuizDetailDto, ApiError> {
        let envelope: QuizDetailEnvelope = self.get_json(&format!("quizzes/{id}/"), &[]).await?;
        Ok(envelope.into_inner())
    }

    #[tracing::instrument(level = "debug", skip(self, answers), fields(answered = answers.len()))]
    async fn submit_answers(
        &self,
        id: QuizId,
        answers: &AnswerMap,
    ) -> Result<SubmitResponse, ApiError> {
        let body = SubmitRequest {
            answers: answers.to_wire(),
            offline_mode: false,
        };
        self.post_json(&format!("quizzes/{id}/submit/"), &body).await
    }
}

#[async_trait]
impl AuthApi for ApiClient {
    #[tracing::instrument(level = "debug", skip(self, request), fields(username = %request.username))]
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(LOGIN_PATH, request).await
    }

    #[tracing::instrument(level = "debug", skip(self, request), fields(username = %request.username))]
    async fn register_student(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(REGISTER_PATH, request).await
    }

    #[tracing::instrument(level = "debug", skip(self, request), fields(username = %request.username))]
    async fn register_teacher(&self, request: &RegisterRequest) -> Result<LoginResponse, ApiError> {
        self.post_json(REGISTER_TEACHER_PATH, request).await
    }

    async fn logout(&self) -> Result<(), ApiError> {
        self.post_discard(LOGOUT_PATH, &serde_json::json!({})).await
    }
}

#[async_trait]
impl ProgressApi for ApiClient {
    async fn my_progress(&self) -> Result<ProgressResponse, ApiError> {
        self.get_json("my-progress/", &[]).await
    }

    async fn class_dashboard(
        &self,
        quiz_id: Option<QuizId>,
    ) -> Result<Vec<ClassProgressDto>, ApiError> {
        let query: Vec<(&str, String)> = quiz_id
            .map(|id| ("quiz_id", id.to_string()))
            .into_iter()
            .collect();
        self.get_json("dashboard/", &query).await
    }
}

#[async_trait]
impl VideoApi for ApiClient {
    #[tracing::instrument(level = "debug", skip(self))]
    async fn list_videos(&self, language: Option<Language>) -> Result<Vec<VideoDto>, ApiError> {
        let query: Vec<(&str, String)> = language
            .map(|lang| ("lang", lang.code().to_string()))
            .into_iter()
            .collect();
        let response: VideoListResponse = self.get_json("videos/", &query).await?;
        Ok(response.into_items())
    }

    async fn report_progress(
        &self,
        video: VideoId,
        body: &VideoProgressBody,
    ) -> Result<(), ApiError> {
        self.post_discard(&format!("videos/{video}/progress/"), body)
            .await
    }
}
