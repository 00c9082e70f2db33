use learn_core::model::{Language, OptionKey, Quiz, SessionState};
use services::QuizSnapshot;

use crate::vm::strings::Msg;
use crate::vm::time_fmt::{format_countdown, format_percent};

/// Seconds left at which the countdown is highlighted.
pub const LOW_TIME_SECS: u32 = 60;

#[derive(Clone, Debug, PartialEq)]
pub struct OptionVm {
    pub key: OptionKey,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavDotVm {
    pub index: usize,
    pub number: usize,
    pub answered: bool,
    pub current: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QuestionVm {
    pub index: usize,
    pub position: String,
    pub text: String,
    pub options: Vec<OptionVm>,
    pub is_first: bool,
    pub is_last: bool,
    /// Options cannot change: time is up or answers are being submitted.
    pub locked: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct IntroVm {
    pub title: String,
    pub subject: String,
    pub question_count: usize,
    pub time_limit: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RunningVm {
    pub countdown: String,
    pub low_time: bool,
    pub time_up: bool,
    pub question: Option<QuestionVm>,
    pub dots: Vec<NavDotVm>,
    pub answered: usize,
    pub total: usize,
    pub submitting: bool,
    pub failure: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    pub score: String,
    pub correct: String,
    pub passed: bool,
}

/// What the quiz page renders for the current snapshot.
#[derive(Clone, Debug, PartialEq)]
pub enum QuizVm {
    Intro(IntroVm),
    Running(RunningVm),
    Completed(ResultVm),
}

#[must_use]
pub fn build_quiz_vm(quiz: &Quiz, snapshot: &QuizSnapshot, language: Language) -> QuizVm {
    match snapshot.state {
        SessionState::NotStarted => QuizVm::Intro(IntroVm {
            title: quiz.name().to_string(),
            subject: quiz.subject().to_string(),
            question_count: quiz.question_count(),
            time_limit: format!(
                "{} {}",
                quiz.time_limit_minutes(),
                Msg::Minutes.text(language)
            ),
        }),
        SessionState::InProgress {
            remaining_seconds,
            current_question_index,
        } => QuizVm::Running(running_vm(
            quiz,
            snapshot,
            remaining_seconds,
            current_question_index,
            language,
        )),
        SessionState::Completed {
            score,
            correct_count,
        } => {
            let (score, correct, total) = snapshot.result.map_or(
                (score, correct_count, quiz.question_count()),
                |result| {
                    (
                        result.score_percent(),
                        result.correct_answers(),
                        result.total_questions() as usize,
                    )
                },
            );
            QuizVm::Completed(ResultVm {
                score: format_percent(score),
                correct: format!("{correct} / {total} {}", Msg::Correct.text(language)),
                passed: snapshot.result.map_or(
                    score >= learn_core::model::PASS_MARK_PERCENT,
                    |result| result.passed(),
                ),
            })
        }
    }
}

fn running_vm(
    quiz: &Quiz,
    snapshot: &QuizSnapshot,
    remaining_seconds: u32,
    current: usize,
    language: Language,
) -> RunningVm {
    let total = quiz.question_count();
    let time_up = remaining_seconds == 0;
    let submitting = snapshot.submit.is_in_flight();
    let question = quiz.question(current).map(|question| QuestionVm {
        index: current,
        position: format!("{} / {total}", current + 1),
        text: question.text_in(language).to_string(),
        options: question
            .options()
            .map(|(key, label)| OptionVm {
                key: key.clone(),
                label: label.to_string(),
                selected: snapshot.answers.get(current) == Some(key),
            })
            .collect(),
        is_first: current == 0,
        is_last: current + 1 >= total,
        locked: time_up || submitting,
    });
    let dots = (0..total)
        .map(|index| NavDotVm {
            index,
            number: index + 1,
            answered: snapshot.answers.is_answered(index),
            current: index == current,
        })
        .collect();
    RunningVm {
        countdown: format_countdown(remaining_seconds),
        low_time: remaining_seconds <= LOW_TIME_SECS,
        time_up,
        question,
        dots,
        answered: snapshot.answers.len(),
        total,
        submitting,
        failure: snapshot.submit.failure().map(str::to_string),
    }
}
