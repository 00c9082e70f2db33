use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_language};
use crate::routes::Route;
use crate::views::guard::{RequireRole, STUDENT_ONLY};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{Msg, StudentProgressVm, map_student_progress};

#[component]
pub fn StudentDashboardView() -> Element {
    rsx! {
        RequireRole { roles: STUDENT_ONLY, StudentDashboard {} }
    }
}

#[component]
fn StudentDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let progress = ctx.progress();
    let greeting = ctx
        .auth()
        .current_session()
        .map(|session| session.user.display_name())
        .unwrap_or_default();

    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            progress
                .my_progress()
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            h2 { "{Msg::StudentDashboard.text(language)}" }
            p { class: "welcome", "{greeting}" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "{Msg::Loading.text(language)}" }
                },
                ViewState::Ready(data) => {
                    let vm: StudentProgressVm = map_student_progress(&data, language);
                    rsx! {
                        div { class: "stats",
                            div { class: "stat",
                                span { class: "stat-label", "{Msg::QuizzesCompleted.text(language)}" }
                                span { class: "stat-value", "{vm.completed}" }
                                progress { max: "100", value: "{vm.completion_percent:.0}" }
                            }
                            div { class: "stat",
                                span { class: "stat-label", "{Msg::AverageScore.text(language)}" }
                                span { class: "stat-value", "{vm.average}" }
                            }
                        }
                        h3 { "{Msg::RecentAttempts.text(language)}" }
                        if vm.attempts.is_empty() {
                            p { "{Msg::NoAttempts.text(language)}" }
                        } else {
                            ul { class: "attempts",
                                for attempt in vm.attempts {
                                    li {
                                        span { class: "attempt-quiz", "{attempt.quiz_name}" }
                                        span { class: "attempt-score", "{attempt.score}" }
                                        span { class: "attempt-number", "{attempt.attempt}" }
                                        if let Some(at) = attempt.completed_at {
                                            span { class: "attempt-date", "{at}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice notice-error", "{err.message(language)}" }
                    button {
                        class: "btn btn-secondary",
                        onclick: move |_| {
                            let mut resource = resource;
                            resource.restart();
                        },
                        "{Msg::Retry.text(language)}"
                    }
                },
            }
            Link { class: "btn btn-primary", to: Route::QuizCenter {}, "{Msg::BrowseQuizzes.text(language)}" }
        }
    }
}
