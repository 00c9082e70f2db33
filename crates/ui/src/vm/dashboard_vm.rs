use learn_core::model::{Language, QuizSummary, StudentProgress};
use services::ClassReport;

use crate::vm::strings::Msg;
use crate::vm::time_fmt::{format_datetime, format_percent};

#[derive(Clone, Debug, PartialEq)]
pub struct QuizCardVm {
    pub id: u64,
    pub title: String,
    pub subject: String,
    pub meta: String,
    pub difficulty: Option<String>,
}

#[must_use]
pub fn map_quiz_cards(items: &[QuizSummary], language: Language) -> Vec<QuizCardVm> {
    items
        .iter()
        .map(|item| {
            let mut meta = format!("{} {}", item.question_count, Msg::Questions.text(language));
            if let Some(minutes) = item.time_limit_minutes {
                meta.push_str(&format!(" · {minutes} {}", Msg::Minutes.text(language)));
            }
            QuizCardVm {
                id: item.id.value(),
                title: item.title.clone(),
                subject: item.subject.clone(),
                meta,
                difficulty: item
                    .difficulty
                    .map(|difficulty| difficulty.label().get(language).to_string()),
            }
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct AttemptVm {
    pub quiz_name: String,
    pub score: String,
    pub attempt: String,
    pub completed_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StudentProgressVm {
    pub completed: String,
    pub completion_percent: f64,
    pub average: String,
    pub attempts: Vec<AttemptVm>,
}

#[must_use]
pub fn map_student_progress(progress: &StudentProgress, language: Language) -> StudentProgressVm {
    StudentProgressVm {
        completed: format!("{} / {}", progress.completed_quizzes, progress.total_quizzes),
        completion_percent: progress.completion_percent(),
        average: format_percent(progress.average_score),
        attempts: progress
            .recent_attempts
            .iter()
            .map(|attempt| AttemptVm {
                quiz_name: attempt.quiz_name.clone(),
                score: format_percent(attempt.score),
                attempt: format!("{} {}", Msg::Attempt.text(language), attempt.attempt_number),
                completed_at: attempt.completed_at.map(format_datetime),
            })
            .collect(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassRowVm {
    pub student_name: String,
    pub score: String,
    pub badges: String,
    pub progress: String,
    pub passed: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ClassReportVm {
    pub students: usize,
    pub average: String,
    pub passed: usize,
    pub rows: Vec<ClassRowVm>,
}

#[must_use]
pub fn map_class_report(report: &ClassReport) -> ClassReportVm {
    ClassReportVm {
        students: report.overview.students,
        average: format_percent(report.overview.average_score),
        passed: report.overview.passed,
        rows: report
            .rows
            .iter()
            .map(|row| ClassRowVm {
                student_name: row.student_name.clone(),
                score: format_percent(row.score),
                badges: if row.badges.is_empty() {
                    "-".to_string()
                } else {
                    row.badges.join(", ")
                },
                progress: format_percent(row.progress),
                passed: row.passed(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use learn_core::model::{
        AttemptSummary, ClassOverview, ClassProgressRow, Difficulty, QuizId,
    };
    use learn_core::time::fixed_now;

    use super::*;

    #[test]
    fn quiz_cards_localize_meta_and_difficulty() {
        let items = vec![QuizSummary {
            id: QuizId::new(4),
            title: "Using Email".into(),
            subject: "communication".into(),
            question_count: 5,
            time_limit_minutes: Some(10),
            difficulty: Some(Difficulty::Easy),
        }];
        let cards = map_quiz_cards(&items, Language::Hi);
        assert_eq!(cards[0].id, 4);
        assert_eq!(cards[0].meta, "5 प्रश्न · 10 मिनट");
        assert_eq!(cards[0].difficulty.as_deref(), Some("आसान"));
    }

    #[test]
    fn student_progress_lists_attempts() {
        let progress = StudentProgress {
            total_quizzes: 4,
            completed_quizzes: 2,
            average_score: 72.5,
            recent_attempts: vec![AttemptSummary {
                quiz_name: "Internet Basics".into(),
                score: 80.0,
                attempt_number: 2,
                completed_at: Some(fixed_now()),
            }],
        };
        let vm = map_student_progress(&progress, Language::En);
        assert_eq!(vm.completed, "2 / 4");
        assert_eq!(vm.average, "72.5%");
        assert_eq!(vm.attempts[0].attempt, "Attempt 2");
        assert_eq!(vm.attempts[0].completed_at.as_deref(), Some("2023-11-14 22:13"));
    }

    #[test]
    fn class_rows_flag_passes() {
        let rows = vec![
            ClassProgressRow {
                student_name: "Gurpreet".into(),
                score: 85.0,
                badges: vec!["Quick learner".into()],
                progress: 60.0,
            },
            ClassProgressRow {
                student_name: "Asha".into(),
                score: 40.0,
                badges: Vec::new(),
                progress: 20.0,
            },
        ];
        let report = ClassReport {
            overview: ClassOverview::from_rows(&rows),
            rows,
        };
        let vm = map_class_report(&report);
        assert_eq!(vm.students, 2);
        assert_eq!(vm.passed, 1);
        assert_eq!(vm.average, "62.5%");
        assert!(vm.rows[0].passed);
        assert_eq!(vm.rows[1].badges, "-");
    }
}
