mod auth;
mod get_started;
mod guard;
mod lessons;
mod quiz;
mod quiz_center;
mod state;
mod student_dashboard;
mod teacher_dashboard;

pub use auth::{StudentLoginView, TeacherLoginView};
pub use get_started::GetStartedView;
pub use guard::{RequireRole, STUDENT_ONLY, TEACHER_ONLY};
pub use lessons::{LessonView, LessonsView};
pub use quiz::{QuizIntent, QuizView};
pub use quiz_center::QuizCenterView;
pub use state::{
    ViewError, ViewState, auth_error_message, submit_error_message, view_state_from_resource,
};
pub use student_dashboard::StudentDashboardView;
pub use teacher_dashboard::TeacherDashboardView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
