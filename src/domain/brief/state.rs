//! Accumulated interview answers.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::answer::AnswerValue;

/// Answers collected so far, keyed by question key.
///
/// Keys are ordered so serialization is stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BriefState(BTreeMap<String, AnswerValue>);

impl BriefState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&AnswerValue> {
        self.0.get(key)
    }

    /// Records an answer, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: AnswerValue) {
        self.0.insert(key.into(), value);
    }

    /// True when the key holds a non-empty value.
    pub fn is_answered(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(AnswerValue::is_answered)
    }

    /// Returns a non-empty scalar answer.
    pub fn scalar(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(AnswerValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// Returns a list answer, empty if missing.
    pub fn list(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(AnswerValue::List(items)) => items.clone(),
            Some(AnswerValue::Text(s)) if !s.is_empty() => vec![s.clone()],
            _ => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, AnswerValue)> for BriefState {
    fn from_iter<T: IntoIterator<Item = (String, AnswerValue)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
