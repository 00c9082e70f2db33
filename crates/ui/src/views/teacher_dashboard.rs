use dioxus::prelude::*;

use crate::context::{AppContext, use_language};
use crate::views::guard::{RequireRole, TEACHER_ONLY};
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ClassRowVm, Msg, map_class_report};

#[component]
pub fn TeacherDashboardView() -> Element {
    rsx! {
        RequireRole { roles: TEACHER_ONLY, TeacherDashboard {} }
    }
}

#[component]
fn TeacherDashboard() -> Element {
    let ctx = use_context::<AppContext>();
    let language = use_language();
    let progress = ctx.progress();

    let resource = use_resource(move || {
        let progress = progress.clone();
        async move {
            progress
                .class_report(None)
                .await
                .map_err(|err| ViewError::from(&err))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page dashboard",
            h2 { "{Msg::TeacherDashboard.text(language)}" }
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "{Msg::Loading.text(language)}" }
                },
                ViewState::Ready(report) => {
                    let vm = map_class_report(&report);
                    rsx! {
                        div { class: "stats",
                            div { class: "stat",
                                span { class: "stat-label", "{Msg::Students.text(language)}" }
                                span { class: "stat-value", "{vm.students}" }
                            }
                            div { class: "stat",
                                span { class: "stat-label", "{Msg::AverageScore.text(language)}" }
                                span { class: "stat-value", "{vm.average}" }
                            }
                            div { class: "stat",
                                span { class: "stat-label", "{Msg::PassedCount.text(language)}" }
                                span { class: "stat-value", "{vm.passed}" }
                            }
                        }
                        if vm.rows.is_empty() {
                            p { "{Msg::NoStudents.text(language)}" }
                        } else {
                            table { class: "class-table",
                                thead {
                                    tr {
                                        th { "{Msg::Student.text(language)}" }
                                        th { "{Msg::Score.text(language)}" }
                                        th { "{Msg::Badges.text(language)}" }
                                        th { "{Msg::Progress.text(language)}" }
                                    }
                                }
                                tbody {
                                    for row in vm.rows {
                                        ClassRow { row }
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
        }
    }
}

#[component]
fn ClassRow(row: ClassRowVm) -> Element {
    rsx! {
        tr { class: if row.passed { "row-pass" } else { "row-fail" },
            td { "{row.student_name}" }
            td { class: "score", "{row.score}" }
            td { "{row.badges}" }
            td { "{row.progress}" }
        }
    }
}
