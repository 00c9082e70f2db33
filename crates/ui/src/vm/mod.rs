mod dashboard_vm;
mod lesson_vm;
mod quiz_vm;
mod strings;
mod time_fmt;

pub use dashboard_vm::{
    AttemptVm, ClassReportVm, ClassRowVm, QuizCardVm, StudentProgressVm, map_class_report,
    map_quiz_cards, map_student_progress,
};
pub use lesson_vm::{LessonCardVm, LessonPlayerVm, map_lesson_cards, map_lesson_player};
pub use quiz_vm::{
    IntroVm, LOW_TIME_SECS, NavDotVm, OptionVm, QuestionVm, QuizVm, ResultVm, RunningVm,
    build_quiz_vm,
};
pub use strings::Msg;
pub use time_fmt::{format_countdown, format_datetime, format_percent};
