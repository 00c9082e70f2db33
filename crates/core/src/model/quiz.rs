use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{QuestionId, QuizId};
use crate::model::language::{Language, LocalizedText};

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("no questions found")]
    NoQuestions,

    #[error("question {question} has no options")]
    NoOptions { question: QuestionId },

    #[error("option key must not be empty")]
    EmptyOptionKey,

    #[error("time limit must be at least one minute")]
    InvalidTimeLimit,

    #[error("quiz name must not be empty")]
    EmptyName,
}

//
// ─── OPTION KEY ───────────────────────────────────────────────────────────────
//

/// Key of an answer option ("A", "B", ...).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionKey(String);

impl OptionKey {
    /// The key is kept verbatim: the server matches submitted answers
    /// against the exact key it sent.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::EmptyOptionKey` for blank keys.
    pub fn new(key: impl Into<String>) -> Result<Self, QuizError> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(QuizError::EmptyOptionKey);
        }
        Ok(Self(key))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OptionKey({})", self.0)
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A single multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    text: LocalizedText,
    options: BTreeMap<OptionKey, String>,
    subject: String,
}

impl Question {
    /// # Errors
    ///
    /// Returns `QuizError::NoOptions` when `options` is empty.
    pub fn new(
        id: QuestionId,
        text: LocalizedText,
        options: BTreeMap<OptionKey, String>,
        subject: impl Into<String>,
    ) -> Result<Self, QuizError> {
        if options.is_empty() {
            return Err(QuizError::NoOptions { question: id });
        }
        Ok(Self {
            id,
            text,
            options,
            subject: subject.into(),
        })
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &LocalizedText {
        &self.text
    }

    #[must_use]
    pub fn text_in(&self, language: Language) -> &str {
        self.text.get(language)
    }

    /// Options in display order (sorted by key).
    pub fn options(&self) -> impl Iterator<Item = (&OptionKey, &str)> {
        self.options.iter().map(|(key, text)| (key, text.as_str()))
    }

    #[must_use]
    pub fn has_option(&self, key: &OptionKey) -> bool {
        self.options.contains_key(key)
    }

    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }
}

//
// ─── QUIZ ─────────────────────────────────────────────────────────────────────
//

/// A loaded quiz definition. Immutable for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quiz {
    id: QuizId,
    name: String,
    subject: String,
    time_limit_minutes: u32,
    questions: Vec<Question>,
}

impl Quiz {
    /// Validate and build a quiz.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::NoQuestions` for an empty question list,
    /// `QuizError::InvalidTimeLimit` for a zero time limit and
    /// `QuizError::EmptyName` for a blank name.
    pub fn new(
        id: QuizId,
        name: impl Into<String>,
        subject: impl Into<String>,
        time_limit_minutes: u32,
        questions: Vec<Question>,
    ) -> Result<Self, QuizError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(QuizError::EmptyName);
        }
        if questions.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if time_limit_minutes == 0 {
            return Err(QuizError::InvalidTimeLimit);
        }
        Ok(Self {
            id,
            name,
            subject: subject.into(),
            time_limit_minutes,
            questions,
        })
    }

    #[must_use]
    pub fn id(&self) -> QuizId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> u32 {
        self.time_limit_minutes
    }

    /// Countdown start value for a session.
    #[must_use]
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_minutes.saturating_mul(60)
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}

//
// ─── CATALOG ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn label(self) -> LocalizedText {
        match self {
            Difficulty::Easy => LocalizedText::new("Easy", Some("आसान".into()), Some("ਆਸਾਨ".into())),
            Difficulty::Medium => {
                LocalizedText::new("Medium", Some("मध्यम".into()), Some("ਮੱਧਮ".into()))
            }
            Difficulty::Hard => {
                LocalizedText::new("Hard", Some("कठिन".into()), Some("ਮੁਸ਼ਕਿਲ".into()))
            }
        }
    }
}

/// Entry of the quiz center listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    pub subject: String,
    pub question_count: usize,
    pub time_limit_minutes: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(keys: &[&str]) -> BTreeMap<OptionKey, String> {
        keys.iter()
            .map(|key| (OptionKey::new(*key).unwrap(), format!("Option {key}")))
            .collect()
    }

    fn question(id: u64) -> Question {
        Question::new(
            QuestionId::new(id),
            LocalizedText::english(format!("Question {id}")),
            options(&["A", "B", "C", "D"]),
            "digital_literacy",
        )
        .unwrap()
    }

    #[test]
    fn quiz_without_questions_is_rejected() {
        let err = Quiz::new(QuizId::new(1), "Basics", "computers", 5, Vec::new()).unwrap_err();
        assert_eq!(err, QuizError::NoQuestions);
        assert_eq!(err.to_string(), "no questions found");
    }

    #[test]
    fn time_limit_is_converted_to_seconds() {
        let quiz = Quiz::new(QuizId::new(1), "Basics", "computers", 3, vec![question(1)]).unwrap();
        assert_eq!(quiz.time_limit_seconds(), 180);
        assert_eq!(quiz.question_count(), 1);
    }

    #[test]
    fn zero_minute_quiz_is_rejected() {
        let err = Quiz::new(QuizId::new(1), "Basics", "computers", 0, vec![question(1)]).unwrap_err();
        assert_eq!(err, QuizError::InvalidTimeLimit);
    }

    #[test]
    fn question_requires_options() {
        let err = Question::new(
            QuestionId::new(9),
            LocalizedText::english("Empty"),
            BTreeMap::new(),
            "maths",
        )
        .unwrap_err();
        assert_eq!(err, QuizError::NoOptions { question: QuestionId::new(9) });
    }

    #[test]
    fn options_iterate_in_key_order() {
        let q = Question::new(
            QuestionId::new(1),
            LocalizedText::english("Order"),
            options(&["C", "A", "B"]),
            "maths",
        )
        .unwrap();
        let keys: Vec<_> = q.options().map(|(key, _)| key.as_str().to_string()).collect();
        assert_eq!(keys, vec!["A", "B", "C"]);
    }

    #[test]
    fn blank_option_key_is_rejected() {
        assert_eq!(OptionKey::new("  ").unwrap_err(), QuizError::EmptyOptionKey);
        assert_eq!(OptionKey::new("").unwrap_err(), QuizError::EmptyOptionKey);
    }

    #[test]
    fn option_keys_are_kept_verbatim() {
        assert_eq!(OptionKey::new(" A").unwrap().as_str(), " A");
        assert_ne!(OptionKey::new("A ").unwrap(), OptionKey::new("A").unwrap());
    }
}
