use dioxus::prelude::*;
use dioxus_router::use_navigator;
use learn_core::model::UserRole;
use services::RouteAccess;

use crate::context::AppContext;
use crate::routes::{Route, dashboard_for};

pub const STUDENT_ONLY: &[UserRole] = &[UserRole::Student];
pub const TEACHER_ONLY: &[UserRole] = &[UserRole::Teacher];

/// Renders `children` only for a signed-in user holding one of `roles`;
/// everyone else is redirected.
#[component]
pub fn RequireRole(roles: &'static [UserRole], children: Element) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let access = ctx.auth().access(roles);

    use_effect(move || match access {
        RouteAccess::Allow => {}
        RouteAccess::GetStarted => {
            navigator.replace(Route::GetStarted {});
        }
        RouteAccess::Dashboard(role) => {
            navigator.replace(dashboard_for(role));
        }
    });

    if access == RouteAccess::Allow {
        children
    } else {
        rsx! {}
    }
}
