use learn_core::model::{Language, Lesson};

use crate::vm::strings::Msg;
use crate::vm::time_fmt::format_percent;

#[derive(Clone, Debug, PartialEq)]
pub struct LessonCardVm {
    pub id: u64,
    pub title: String,
    pub category: String,
    pub meta: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LessonPlayerVm {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// `None` when the lesson has no source for this language.
    pub source: Option<String>,
}

#[must_use]
pub fn map_lesson_cards(lessons: &[Lesson], language: Language) -> Vec<LessonCardVm> {
    lessons
        .iter()
        .map(|lesson| {
            let mut parts = Vec::new();
            if let Some(minutes) = lesson.duration_minutes {
                parts.push(format!("{minutes} {}", Msg::Minutes.text(language)));
            }
            if lesson.progress_percentage > 0.0 {
                parts.push(format!(
                    "{} {}",
                    format_percent(lesson.progress_percentage),
                    Msg::Watched.text(language)
                ));
            }
            LessonCardVm {
                id: lesson.id.value(),
                title: lesson.title.get(language).to_string(),
                category: lesson.category.clone(),
                meta: parts.join(" · "),
                completed: lesson.completed,
            }
        })
        .collect()
}

#[must_use]
pub fn map_lesson_player(lesson: &Lesson, language: Language) -> LessonPlayerVm {
    LessonPlayerVm {
        id: lesson.id.value(),
        title: lesson.title.get(language).to_string(),
        description: lesson.description.get(language).to_string(),
        source: lesson.is_playable().then(|| lesson.video_url.clone()),
    }
}
