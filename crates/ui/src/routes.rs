use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_navigator, use_route};
use learn_core::model::{Language, UserRole};
use tracing::warn;

use crate::context::{AppContext, use_language, use_ui_state};
use crate::views::{
    GetStartedView, LessonView, LessonsView, QuizCenterView, QuizView, StudentDashboardView,
    StudentLoginView, TeacherDashboardView, TeacherLoginView,
};
use crate::vm::Msg;

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::GetStarted {})]
    #[layout(Layout)]
        #[route("/get-started", GetStartedView)] GetStarted {},
        #[route("/student/login", StudentLoginView)] StudentLogin {},
        #[route("/teacher/login", TeacherLoginView)] TeacherLogin {},
        #[route("/student/dashboard", StudentDashboardView)] StudentDashboard {},
        #[route("/student/quiz-center", QuizCenterView)] QuizCenter {},
        #[route("/student/quiz/:id", QuizView)] StudentQuiz { id: u64 },
        #[route("/student/lessons", LessonsView)] Lessons {},
        #[route("/student/lessons/:id", LessonView)] StudentLesson { id: u64 },
        #[route("/teacher/dashboard", TeacherDashboardView)] TeacherDashboard {},
}

/// Landing route after sign-in, and the target when a signed-in user opens a
/// page meant for another role.
#[must_use]
pub fn dashboard_for(role: UserRole) -> Route {
    match role {
        UserRole::Student => Route::StudentDashboard {},
        UserRole::Teacher => Route::TeacherDashboard {},
        UserRole::Admin => Route::GetStarted {},
    }
}

#[component]
fn Layout() -> Element {
    // Re-render the header on navigation so it reflects sign-in and sign-out.
    let _route = use_route::<Route>();
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let navigator = use_navigator();
    let session = ctx.auth().current_session();

    let on_logout = {
        let auth = ctx.auth();
        use_callback(move |()| {
            let auth = auth.clone();
            spawn(async move {
                if let Err(err) = auth.logout().await {
                    warn!(error = %err, "logout did not complete cleanly");
                }
                navigator.replace(Route::GetStarted {});
            });
        })
    };

    rsx! {
        div { class: "app",
            header { class: "topbar",
                Link { class: "brand", to: Route::GetStarted {}, "{Msg::AppTitle.text(language)}" }
                if let Some(session) = session.as_ref() {
                    nav { class: "topnav",
                        match session.role {
                            UserRole::Student => rsx! {
                                Link { to: Route::StudentDashboard {}, "{Msg::StudentDashboard.text(language)}" }
                                Link { to: Route::QuizCenter {}, "{Msg::QuizCenter.text(language)}" }
                                Link { to: Route::Lessons {}, "{Msg::Lessons.text(language)}" }
                            },
                            UserRole::Teacher => rsx! {
                                Link { to: Route::TeacherDashboard {}, "{Msg::TeacherDashboard.text(language)}" }
                            },
                            UserRole::Admin => rsx! {},
                        }
                    }
                }
                LanguageSwitcher {}
                if let Some(session) = session.as_ref() {
                    div { class: "account",
                        span { class: "account-name", "{session.user.display_name()}" }
                        button {
                            class: "btn btn-secondary",
                            onclick: move |_| on_logout.call(()),
                            "{Msg::Logout.text(language)}"
                        }
                    }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn LanguageSwitcher() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state();
    let current = use_language();

    let choose = {
        let preferences = ctx.preferences();
        use_callback(move |language: Language| {
            let mut selected = ui.language;
            selected.set(language);
            let preferences = preferences.clone();
            spawn(async move {
                if let Err(err) = preferences.set_language(language).await {
                    warn!(error = %err, "could not persist language preference");
                }
            });
        })
    };

    rsx! {
        div { class: "lang-switch", role: "group",
            for language in Language::ALL {
                button {
                    key: "{language.code()}",
                    class: if language == current { "lang active" } else { "lang" },
                    lang: "{language.code()}",
                    onclick: move |_| choose.call(language),
                    "{language.native_label()}"
                }
            }
        }
    }
}
