use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_flash_notice, use_language, use_ui_state};
use crate::routes::Route;
use crate::views::guard::{RequireRole, STUDENT_ONLY};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{Msg, QuizCardVm, map_quiz_cards};

#[component]
pub fn QuizCenterView() -> Element {
    rsx! {
        RequireRole { roles: STUDENT_ONLY, QuizCenter {} }
    }
}

#[component]
fn QuizCenter() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let ui = use_ui_state();
    let flashed = use_flash_notice();
    let quizzes = ctx.quizzes();

    // Re-fetches when the language changes; the catalog is filtered server-side.
    let resource = use_resource(move || {
        let quizzes = quizzes.clone();
        let language = (ui.language)();
        async move {
            quizzes
                .catalog(Some(language))
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page quiz-center",
            h2 { "{Msg::QuizCenter.text(language)}" }
            if let Some(message) = flashed {
                p { class: "notice notice-warning", role: "alert", "{message}" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "{Msg::Loading.text(language)}" }
                },
                ViewState::Ready(items) => {
                    let cards = map_quiz_cards(&items, language);
                    rsx! {
                        if cards.is_empty() {
                            p { "{Msg::NoQuizzes.text(language)}" }
                        } else {
                            ul { class: "quiz-grid",
                                for card in cards {
                                    QuizCard { key: "{card.id}", card }
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
        }
    }
}

#[component]
fn QuizCard(card: QuizCardVm) -> Element {
    let language = use_language();
    rsx! {
        li { class: "quiz-card",
            h3 { "{card.title}" }
            p { class: "quiz-subject", "{card.subject}" }
            p { class: "quiz-meta", "{card.meta}" }
            if let Some(difficulty) = card.difficulty {
                span { class: "badge", "{difficulty}" }
            }
            Link { class: "btn btn-primary", to: Route::StudentQuiz { id: card.id },
                "{Msg::TakeQuiz.text(language)}"
            }
        }
    }
}
