use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::{AppContext, use_language};
use crate::routes::{Route, dashboard_for};
use crate::vm::Msg;

#[component]
pub fn GetStartedView() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let session = ctx.auth().current_session();

    rsx! {
        div { class: "page get-started",
            h1 { "{Msg::AppTitle.text(language)}" }
            p { class: "tagline", "{Msg::Tagline.text(language)}" }
            match session {
                Some(session) => rsx! {
                    p { class: "welcome", "{session.user.display_name()}" }
                    Link { class: "btn btn-primary", to: dashboard_for(session.role),
                        "{Msg::GoToDashboard.text(language)}"
                    }
                },
                None => rsx! {
                    div { class: "role-choice",
                        Link { class: "btn btn-primary", to: Route::StudentLogin {},
                            "{Msg::ImStudent.text(language)}"
                        }
                        Link { class: "btn btn-secondary", to: Route::TeacherLogin {},
                            "{Msg::ImTeacher.text(language)}"
                        }
                    }
                },
            }
        }
    }
}
