use std::collections::BTreeMap;

use crate::model::quiz::OptionKey;

/// Selected option per question index.
///
/// Single-select: recording an answer for an already answered question
/// replaces the previous choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    selections: BTreeMap<usize, OptionKey>,
}

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `key` for `question_index`, returning the replaced selection.
    pub fn select(&mut self, question_index: usize, key: OptionKey) -> Option<OptionKey> {
        self.selections.insert(question_index, key)
    }

    #[must_use]
    pub fn get(&self, question_index: usize) -> Option<&OptionKey> {
        self.selections.get(&question_index)
    }

    #[must_use]
    pub fn is_answered(&self, question_index: usize) -> bool {
        self.selections.contains_key(&question_index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &OptionKey)> {
        self.selections.iter().map(|(index, key)| (*index, key))
    }

    /// Wire form: question index as a string key, option key as value.
    #[must_use]
    pub fn to_wire(&self) -> BTreeMap<String, String> {
        self.selections
            .iter()
            .map(|(index, key)| (index.to_string(), key.as_str().to_string()))
            .collect()
    }
}
