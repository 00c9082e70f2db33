use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError};
use std::time::Duration;

use learn_core::model::{
    AnswerMap, OptionKey, Quiz, QuizId, QuizResult, QuizSession, SubmitTrigger, Tick,
};
use tokio::sync::{Mutex, MutexGuard, watch};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use super::snapshot::{QuizSnapshot, SubmitStatus};
use crate::Clock;
use crate::api::QuizApi;
use crate::config::{ApiConfig, DEFAULT_REQUEST_TIMEOUT, RetryPolicy};
use crate::error::{ApiError, SubmitError};

/// Timing and retry knobs for a running quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub tick: Duration,
    pub submit_timeout: Duration,
    pub retry: RetryPolicy,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_secs(1),
            submit_timeout: DEFAULT_REQUEST_TIMEOUT,
            retry: RetryPolicy::None,
        }
    }
}

impl From<&ApiConfig> for RunnerConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            submit_timeout: config.request_timeout,
            retry: config.submit_retry,
            ..Self::default()
        }
    }
}

struct Inner {
    session: QuizSession,
    submit: SubmitStatus,
}

/// State shared between the runner, its clock task and in-flight submissions.
#[derive(Clone)]
struct Core {
    inner: Arc<Mutex<Inner>>,
    snapshots: Arc<watch::Sender<QuizSnapshot>>,
    detached: Arc<AtomicBool>,
    api: Arc<dyn QuizApi>,
    clock: Clock,
    config: RunnerConfig,
}

impl Core {
    fn publish(&self, inner: &Inner) {
        self.snapshots
            .send_replace(QuizSnapshot::capture(&inner.session, &inner.submit));
    }

    fn is_detached(&self) -> bool {
        self.detached.load(Ordering::Acquire)
    }

    async fn lock(&self) -> Result<MutexGuard<'_, Inner>, SubmitError> {
        if self.is_detached() {
            return Err(SubmitError::Detached);
        }
        Ok(self.inner.lock().await)
    }

    async fn tick(&self) -> Tick {
        let mut inner = self.inner.lock().await;
        let tick = inner.session.tick();
        if tick != Tick::Idle {
            self.publish(&inner);
        }
        tick
    }

    async fn submit(&self, trigger: SubmitTrigger) -> Result<QuizResult, SubmitError> {
        let (ticket, quiz_id, question_count) = {
            let mut inner = self.lock().await?;
            let ticket = inner.session.begin_submit(trigger)?;
            inner.submit = SubmitStatus::InFlight(trigger);
            self.publish(&inner);
            let quiz = inner.session.quiz();
            (ticket, quiz.id(), quiz.question_count())
        };
        info!(?trigger, answered = ticket.answers.len(), "submitting quiz");

        let outcome = self
            .deliver(quiz_id, &ticket.answers, question_count)
            .await;

        if self.is_detached() {
            debug!("quiz runner closed during submission; result dropped");
            return Err(SubmitError::Detached);
        }

        let mut inner = self.inner.lock().await;
        match outcome {
            Ok(result) => {
                inner.session.complete_submission(result, self.clock.now())?;
                inner.submit = SubmitStatus::Idle;
                self.publish(&inner);
                info!(
                    score = result.score_percent(),
                    correct = result.correct_answers(),
                    total = result.total_questions(),
                    "quiz completed"
                );
                Ok(result)
            }
            Err(err) => {
                inner.session.fail_submission()?;
                inner.submit = SubmitStatus::Failed {
                    trigger,
                    message: err.to_string(),
                };
                self.publish(&inner);
                warn!(error = %err, ?trigger, "quiz submission failed");
                Err(err)
            }
        }
    }

    async fn deliver(
        &self,
        quiz_id: QuizId,
        answers: &AnswerMap,
        question_count: usize,
    ) -> Result<QuizResult, SubmitError> {
        let attempts = self.config.retry.max_attempts();
        let mut attempt = 1;
        loop {
            let err = match tokio::time::timeout(
                self.config.submit_timeout,
                self.api.submit_answers(quiz_id, answers),
            )
            .await
            {
                Ok(Ok(response)) => return Ok(response.into_result(question_count)?),
                Ok(Err(err)) => SubmitError::Api(err),
                Err(_) => SubmitError::Timeout,
            };
            if attempt >= attempts || !is_retryable(&err) || self.is_detached() {
                return Err(err);
            }
            debug!(attempt, error = %err, "retrying quiz submission");
            attempt += 1;
            tokio::time::sleep(self.config.retry.delay()).await;
        }
    }
}

fn is_retryable(err: &SubmitError) -> bool {
    match err {
        SubmitError::Timeout => true,
        SubmitError::Api(ApiError::Network(_)) => true,
        SubmitError::Api(ApiError::Status { status, .. }) => status.is_server_error(),
        _ => false,
    }
}

/// Drives one timed quiz attempt: the one-second countdown, navigation,
/// answer selection and the single submission.
///
/// Dropping the runner stops the clock; a submission still in flight at that
/// point no longer changes any state.
pub struct QuizRunner {
    core: Core,
    quiz: Quiz,
    ticker: std::sync::Mutex<Option<JoinHandle<()>>>,
}

impl QuizRunner {
    #[must_use]
    pub fn new(quiz: Quiz, api: Arc<dyn QuizApi>, clock: Clock, config: RunnerConfig) -> Self {
        let session = QuizSession::new(quiz.clone());
        let submit = SubmitStatus::Idle;
        let (snapshots, _) = watch::channel(QuizSnapshot::capture(&session, &submit));
        Self {
            core: Core {
                inner: Arc::new(Mutex::new(Inner { session, submit })),
                snapshots: Arc::new(snapshots),
                detached: Arc::new(AtomicBool::new(false)),
                api,
                clock,
                config,
            },
            quiz,
            ticker: std::sync::Mutex::new(None),
        }
    }

    #[must_use]
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<QuizSnapshot> {
        self.core.snapshots.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        self.core.snapshots.borrow().clone()
    }

    /// Start the attempt and the countdown. Must be called inside a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Session` if the quiz was already started.
    pub async fn start(&self) -> Result<(), SubmitError> {
        {
            let mut inner = self.core.lock().await?;
            inner.session.start(self.core.clock.now())?;
            self.core.publish(&inner);
        }
        info!(
            quiz = %self.quiz.id(),
            time_limit_secs = self.quiz.time_limit_seconds(),
            "quiz started"
        );
        let handle = tokio::spawn(run_clock(self.core.clone()));
        let mut slot = self.ticker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.replace(handle) {
            previous.abort();
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SubmitError::Session` for invalid selections or when the quiz
    /// is not in progress.
    pub async fn select_answer(
        &self,
        question_index: usize,
        key: OptionKey,
    ) -> Result<Option<OptionKey>, SubmitError> {
        let mut inner = self.core.lock().await?;
        let replaced = inner.session.select_answer(question_index, key)?;
        self.core.publish(&inner);
        Ok(replaced)
    }

    /// # Errors
    ///
    /// Returns `SubmitError::Session` unless the quiz is in progress.
    pub async fn next(&self) -> Result<usize, SubmitError> {
        self.navigate(QuizSession::next).await
    }

    /// # Errors
    ///
    /// Returns `SubmitError::Session` unless the quiz is in progress.
    pub async fn previous(&self) -> Result<usize, SubmitError> {
        self.navigate(QuizSession::previous).await
    }

    /// # Errors
    ///
    /// Returns `SubmitError::Session` unless the quiz is in progress.
    pub async fn go_to(&self, index: usize) -> Result<usize, SubmitError> {
        self.navigate(|session| session.go_to(index)).await
    }

    async fn navigate(
        &self,
        step: impl FnOnce(&mut QuizSession) -> Result<usize, learn_core::model::SessionError>,
    ) -> Result<usize, SubmitError> {
        let mut inner = self.core.lock().await?;
        let index = step(&mut inner.session)?;
        self.core.publish(&inner);
        Ok(index)
    }

    /// Submit on the user's behalf.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Session(AlreadySubmitting | Completed)` when
    /// another submission won, and API or timeout errors when delivery fails;
    /// in that case the quiz stays in progress with its answers.
    pub async fn submit(&self) -> Result<QuizResult, SubmitError> {
        self.core.submit(SubmitTrigger::User).await
    }

    fn stop_clock(&self) {
        let mut slot = self.ticker.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}

impl Drop for QuizRunner {
    fn drop(&mut self) {
        self.core.detached.store(true, Ordering::Release);
        self.stop_clock();
    }
}

async fn run_clock(core: Core) {
    let period = core.config.tick;
    let mut interval = tokio::time::interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        if core.is_detached() {
            break;
        }
        match core.tick().await {
            Tick::Running(_) => {}
            Tick::Expired => {
                info!("time is up; submitting automatically");
                if let Err(err) = core.submit(SubmitTrigger::Timeout).await {
                    debug!(error = %err, "automatic submission did not complete");
                }
                break;
            }
            Tick::Idle => break,
        }
    }
}
