use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use learn_core::model::{OptionKey, QuizId};
use services::{QuizRunner, QuizSnapshot};
use tracing::debug;

use crate::context::{AppContext, use_language, use_ui_state};
use crate::routes::Route;
use crate::views::guard::{RequireRole, STUDENT_ONLY};
use crate::views::state::submit_error_message;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{
    IntroVm, Msg, NavDotVm, OptionVm, QuestionVm, QuizVm, ResultVm, RunningVm, build_quiz_vm,
};

/// User actions on the quiz page.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizIntent {
    Start,
    Select { question: usize, key: OptionKey },
    Next,
    Previous,
    GoTo(usize),
    Submit,
    Retake,
}

#[component]
pub fn QuizView(id: u64) -> Element {
    // Keyed on the id so switching quizzes remounts the attempt with a fresh
    // load and runner.
    rsx! {
        RequireRole { roles: STUDENT_ONLY,
            for id in [id] {
                QuizAttempt { key: "{id}", id }
            }
        }
    }
}

#[component]
fn QuizAttempt(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let language = use_language();
    let navigator = use_navigator();
    let runner = use_signal(|| None::<Arc<QuizRunner>>);
    let snapshot = use_signal(|| None::<QuizSnapshot>);
    let notice = use_signal(|| None::<String>);

    let resource = use_resource(move || {
        let ctx = ctx.clone();
        let mut runner = runner;
        let mut snapshot = snapshot;
        async move {
            match ctx.quizzes().load(QuizId::new(id)).await {
                Ok(quiz) => {
                    let fresh = Arc::new(ctx.quiz_runner(quiz));
                    snapshot.set(Some(fresh.snapshot()));
                    runner.set(Some(fresh));
                    Ok(())
                }
                Err(err) => {
                    let view_error = ViewError::from(&err);
                    let language = *ui.language.peek();
                    let message = match view_error {
                        ViewError::NotFound => Msg::QuizNotFound,
                        _ => Msg::QuizUnavailable,
                    };
                    ui.flash(message.text(language));
                    navigator.replace(Route::QuizCenter {});
                    Err(view_error)
                }
            }
        }
    });
    let state = view_state_from_resource(&resource);

    // Mirror runner snapshots (clock ticks, auto-submit) into the view.
    use_effect(move || {
        let Some(active) = runner() else {
            return;
        };
        let mut updates = active.subscribe();
        let mut snapshot = snapshot;
        spawn(async move {
            while updates.changed().await.is_ok() {
                let next = updates.borrow_and_update().clone();
                snapshot.set(Some(next));
            }
        });
    });

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut runner = runner;
        let mut snapshot = snapshot;
        let mut notice = notice;
        if intent == QuizIntent::Retake {
            // Dropping the old runner stops its clock.
            runner.set(None);
            snapshot.set(None);
            notice.set(None);
            let mut resource = resource;
            resource.restart();
            return;
        }
        let Some(active) = runner.peek().clone() else {
            return;
        };
        spawn(async move {
            let outcome = match intent.clone() {
                QuizIntent::Start => active.start().await,
                QuizIntent::Select { question, key } => {
                    active.select_answer(question, key).await.map(|_| ())
                }
                QuizIntent::Next => active.next().await.map(|_| ()),
                QuizIntent::Previous => active.previous().await.map(|_| ()),
                QuizIntent::GoTo(index) => active.go_to(index).await.map(|_| ()),
                QuizIntent::Submit => active.submit().await.map(|_| ()),
                QuizIntent::Retake => Ok(()),
            };
            match outcome {
                Ok(()) => {
                    if matches!(intent, QuizIntent::Start | QuizIntent::Submit) {
                        notice.set(None);
                    }
                }
                // Submission failures are carried by the snapshot.
                Err(err) if intent == QuizIntent::Submit => {
                    debug!(error = %err, "submit attempt ended without a result");
                }
                Err(err) => {
                    let language = *ui.language.peek();
                    notice.set(submit_error_message(&err, language));
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let vm = {
        let runner = runner.read();
        let snapshot = snapshot.read();
        match (runner.as_ref(), snapshot.as_ref()) {
            (Some(runner), Some(snapshot)) => Some(build_quiz_vm(runner.quiz(), snapshot, language)),
            _ => None,
        }
    };

    rsx! {
        div { class: "page quiz",
            if let Some(message) = notice() {
                p { class: "notice notice-error", role: "alert", "{message}" }
            }
            match (state, vm) {
                (_, Some(QuizVm::Intro(intro))) => rsx! {
                    QuizIntro { intro, on_intent: dispatch }
                },
                (_, Some(QuizVm::Running(running))) => rsx! {
                    QuizRunning { running, on_intent: dispatch }
                },
                (_, Some(QuizVm::Completed(result))) => rsx! {
                    QuizCompleted { result, on_intent: dispatch }
                },
                (ViewState::Error(err), None) => rsx! {
                    p { class: "notice notice-error", "{err.message(language)}" }
                },
                _ => rsx! {
                    p { "{Msg::Loading.text(language)}" }
                },
            }
        }
    }
}

#[component]
fn QuizIntro(intro: IntroVm, on_intent: Callback<QuizIntent>) -> Element {
    let language = use_language();
    rsx! {
        section { class: "quiz-intro",
            h2 { "{intro.title}" }
            p { class: "quiz-subject", "{intro.subject}" }
            p { class: "quiz-meta",
                "{intro.question_count} {Msg::Questions.text(language)} · {Msg::TimeLimit.text(language)}: {intro.time_limit}"
            }
            button {
                id: "quiz-start",
                class: "btn btn-primary",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "{Msg::StartQuiz.text(language)}"
            }
        }
    }
}

#[component]
fn QuizRunning(running: RunningVm, on_intent: Callback<QuizIntent>) -> Element {
    let language = use_language();
    let submitting = running.submitting;
    let timer_class = if running.low_time { "timer timer-low" } else { "timer" };

    rsx! {
        section { class: "quiz-running",
            div { class: "quiz-status",
                span { class: timer_class, role: "timer",
                    "{Msg::TimeLeft.text(language)}: {running.countdown}"
                }
                span { class: "quiz-answered", "{running.answered} / {running.total}" }
            }
            if running.time_up {
                p { class: "notice notice-warning", "{Msg::TimeUp.text(language)}" }
            }
            if let Some(question) = running.question {
                QuestionCard { question, submitting, on_intent }
            }
            ol { class: "question-dots",
                for dot in running.dots {
                    li { key: "{dot.index}",
                        button {
                            class: dot_class(&dot),
                            disabled: submitting,
                            onclick: move |_| on_intent.call(QuizIntent::GoTo(dot.index)),
                            "{dot.number}"
                        }
                    }
                }
            }
            if let Some(detail) = running.failure {
                div { class: "notice notice-error", role: "alert",
                    p { "{Msg::SubmitFailed.text(language)}" }
                    p { class: "notice-detail", "{detail}" }
                    button {
                        id: "quiz-retry-submit",
                        class: "btn btn-primary",
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        "{Msg::RetrySubmit.text(language)}"
                    }
                }
            }
        }
    }
}

fn dot_class(dot: &NavDotVm) -> &'static str {
    match (dot.current, dot.answered) {
        (true, _) => "dot current",
        (false, true) => "dot answered",
        (false, false) => "dot",
    }
}

#[component]
fn QuestionCard(question: QuestionVm, submitting: bool, on_intent: Callback<QuizIntent>) -> Element {
    let language = use_language();
    let index = question.index;
    rsx! {
        article { class: "question",
            p { class: "question-position", "{question.position}" }
            h3 { class: "question-text", "{question.text}" }
            ul { class: "options",
                for option in question.options {
                    OptionButton {
                        key: "{option.key}",
                        question: index,
                        option,
                        disabled: question.locked,
                        on_intent,
                    }
                }
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    disabled: question.is_first || submitting,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "{Msg::Previous.text(language)}"
                }
                if question.is_last {
                    button {
                        id: "quiz-submit",
                        class: "btn btn-primary",
                        disabled: submitting,
                        onclick: move |_| on_intent.call(QuizIntent::Submit),
                        if submitting {
                            "{Msg::Submitting.text(language)}"
                        } else {
                            "{Msg::Submit.text(language)}"
                        }
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        disabled: submitting,
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "{Msg::Next.text(language)}"
                    }
                }
            }
        }
    }
}

#[component]
fn OptionButton(
    question: usize,
    option: OptionVm,
    disabled: bool,
    on_intent: Callback<QuizIntent>,
) -> Element {
    let key = option.key.clone();
    rsx! {
        li {
            button {
                class: if option.selected { "option selected" } else { "option" },
                aria_pressed: "{option.selected}",
                disabled,
                onclick: move |_| on_intent.call(QuizIntent::Select {
                    question,
                    key: key.clone(),
                }),
                span { class: "option-key", "{option.key}" }
                span { class: "option-label", "{option.label}" }
            }
        }
    }
}

#[component]
fn QuizCompleted(result: ResultVm, on_intent: Callback<QuizIntent>) -> Element {
    let language = use_language();
    let verdict = if result.passed {
        Msg::Passed
    } else {
        Msg::KeepPracticing
    };
    rsx! {
        section { class: "quiz-result",
            h2 { "{Msg::QuizComplete.text(language)}" }
            p { class: "score", "{result.score}" }
            p { class: "correct", "{result.correct}" }
            p { class: if result.passed { "verdict pass" } else { "verdict fail" }, "{verdict.text(language)}" }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| on_intent.call(QuizIntent::Retake),
                    "{Msg::Retake.text(language)}"
                }
                Link { class: "btn btn-primary", to: Route::QuizCenter {}, "{Msg::BackToQuizzes.text(language)}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: std::rc::Rc<std::cell::RefCell<Option<Callback<QuizIntent>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    fn register(&self, dispatch: Callback<QuizIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }
}
