use std::sync::Arc;

use dioxus::document::eval;
use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use learn_core::model::VideoId;
use serde::Deserialize;
use tracing::debug;

use crate::context::{AppContext, use_flash_notice, use_language, use_ui_state};
use crate::routes::Route;
use crate::views::guard::{RequireRole, STUDENT_ONLY};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonCardVm, LessonPlayerVm, Msg, map_lesson_cards, map_lesson_player};

const PLAYER_ID: &str = "lesson-video";

// `duration` is NaN until metadata has loaded.
const PLAYBACK_SCRIPT: &str = r#"
    const video = document.getElementById("lesson-video");
    if (!video) { return { position: 0, duration: 0 }; }
    return { position: video.currentTime || 0, duration: video.duration || 0 };
"#;

/// Playback position read from the video element, in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub(crate) struct PlaybackPosition {
    pub(crate) position: f64,
    pub(crate) duration: f64,
}

async fn read_playback() -> Option<PlaybackPosition> {
    eval(PLAYBACK_SCRIPT).join::<PlaybackPosition>().await.ok()
}

#[component]
pub fn LessonsView() -> Element {
    rsx! {
        RequireRole { roles: STUDENT_ONLY, LessonList {} }
    }
}

#[component]
fn LessonList() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let ui = use_ui_state();
    let flashed = use_flash_notice();
    let lessons = ctx.lessons();

    // Video URLs are resolved per language, so refetch when it changes.
    let resource = use_resource(move || {
        let lessons = lessons.clone();
        let language = (ui.language)();
        async move {
            lessons
                .catalog(language)
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page lessons",
            h2 { "{Msg::Lessons.text(language)}" }
            if let Some(message) = flashed {
                p { class: "notice notice-warning", role: "alert", "{message}" }
            }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "{Msg::Loading.text(language)}" }
                },
                ViewState::Ready(items) => {
                    let cards = map_lesson_cards(&items, language);
                    rsx! {
                        if cards.is_empty() {
                            p { "{Msg::NoLessons.text(language)}" }
                        } else {
                            ul { class: "lesson-grid",
                                for card in cards {
                                    LessonCard { key: "{card.id}", card }
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
fn LessonCard(card: LessonCardVm) -> Element {
    let language = use_language();
    rsx! {
        li { class: if card.completed { "lesson-card completed" } else { "lesson-card" },
            h3 { "{card.title}" }
            p { class: "lesson-category", "{card.category}" }
            if !card.meta.is_empty() {
                p { class: "lesson-meta", "{card.meta}" }
            }
            Link { class: "btn btn-primary", to: Route::StudentLesson { id: card.id },
                "{Msg::WatchLesson.text(language)}"
            }
        }
    }
}

#[component]
pub fn LessonView(id: u64) -> Element {
    // Keyed like the quiz page: a new id gets a fresh reporter.
    rsx! {
        RequireRole { roles: STUDENT_ONLY,
            for id in [id] {
                LessonPlayback { key: "{id}", id }
            }
        }
    }
}

#[component]
fn LessonPlayback(id: u64) -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let language = use_language();
    let navigator = use_navigator();
    let lessons = ctx.lessons();
    let video = VideoId::new(id);
    let reporter = use_hook({
        let lessons = lessons.clone();
        move || Arc::new(lessons.reporter(video))
    });

    let resource = use_resource(move || {
        let lessons = lessons.clone();
        let language = (ui.language)();
        async move {
            match lessons.lesson(video, language).await {
                Ok(lesson) => Ok(lesson),
                Err(err) => {
                    let view_error = ViewError::from(&err);
                    if view_error == ViewError::NotFound {
                        ui.flash(Msg::LessonNotFound.text(language));
                        navigator.replace(Route::Lessons {});
                    }
                    Err(view_error)
                }
            }
        }
    });
    let state = view_state_from_resource(&resource);

    let on_progress = {
        let reporter = Arc::clone(&reporter);
        use_callback(move |playback: PlaybackPosition| {
            let reporter = Arc::clone(&reporter);
            let language = *ui.language.peek();
            spawn(async move {
                reporter
                    .on_time_update(playback.position, playback.duration, language)
                    .await;
            });
        })
    };
    let on_seek = use_callback(move |()| reporter.on_seek());

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(on_progress, on_seek);
            }
        }
    }

    rsx! {
        div { class: "page lesson",
            match state {
                ViewState::Ready(lesson) => rsx! {
                    LessonPlayerCard {
                        player: map_lesson_player(&lesson, language),
                        on_progress,
                        on_seek,
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "notice notice-error", "{err.message(language)}" }
                    Link { class: "btn btn-secondary", to: Route::Lessons {},
                        "{Msg::BackToLessons.text(language)}"
                    }
                },
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "{Msg::Loading.text(language)}" }
                },
            }
        }
    }
}

#[component]
fn LessonPlayerCard(
    player: LessonPlayerVm,
    on_progress: Callback<PlaybackPosition>,
    on_seek: Callback<()>,
) -> Element {
    let language = use_language();
    rsx! {
        section { class: "lesson-player",
            h2 { "{player.title}" }
            if let Some(source) = player.source {
                video {
                    id: PLAYER_ID,
                    class: "lesson-video",
                    src: "{source}",
                    controls: true,
                    preload: "metadata",
                    ontimeupdate: move |_| {
                        spawn(async move {
                            match read_playback().await {
                                Some(playback) => on_progress.call(playback),
                                None => debug!("playback position unavailable"),
                            }
                        });
                    },
                    onseeked: move |_| on_seek.call(()),
                }
            } else {
                p { class: "notice notice-warning", "{Msg::VideoUnavailable.text(language)}" }
            }
            if !player.description.is_empty() {
                p { class: "lesson-description", "{player.description}" }
            }
            Link { class: "btn btn-secondary", to: Route::Lessons {},
                "{Msg::BackToLessons.text(language)}"
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    callbacks: std::rc::Rc<
        std::cell::RefCell<Option<(Callback<PlaybackPosition>, Callback<()>)>>,
    >,
}

#[cfg(test)]
impl LessonTestHandles {
    fn register(&self, on_progress: Callback<PlaybackPosition>, on_seek: Callback<()>) {
        *self.callbacks.borrow_mut() = Some((on_progress, on_seek));
    }

    pub(crate) fn on_progress(&self) -> Callback<PlaybackPosition> {
        (*self.callbacks.borrow()).expect("lesson callbacks registered").0
    }

    pub(crate) fn on_seek(&self) -> Callback<()> {
        (*self.callbacks.borrow()).expect("lesson callbacks registered").1
    }
}
