use dioxus::prelude::*;
use dioxus_router::Router;

use crate::context::{AppContext, use_ui_state_provider};
use crate::routes::Route;
use crate::vm::Msg;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let ui = use_ui_state_provider(ctx.initial_language());
    let language = (ui.language)();

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{Msg::AppTitle.text(language)}" }

        div { class: "app-root", lang: "{language.code()}",
            ErrorBoundary {
                handle_error: move |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "{Msg::SomethingWentWrong.text(language)}" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
