//! Answer values and the free-text answer parser.

use serde::{Deserialize, Serialize};

use super::question::AnswerKind;

/// A parsed answer, stored in the brief under its question key.
///
/// Serializes untagged so a brief reads as a plain JSON object of strings
/// and string arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Text(String),
    List(Vec<String>),
}

impl AnswerValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Empty strings and empty lists do not count as answers.
    pub fn is_answered(&self) -> bool {
        match self {
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Renders the value for prompts and summaries. Lists are comma-joined.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text(s) => s.clone(),
            Self::List(items) => items.join(", "),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Text(_) => None,
            Self::List(items) => Some(items),
        }
    }
}

/// Converts a raw user reply into a value of the requested kind.
///
/// Never fails. A scalar is the trimmed text, possibly empty. A list is the
/// comma-separated segments, trimmed, with empty segments removed; order and
/// duplicates are kept.
pub fn parse_answer(kind: AnswerKind, raw: &str) -> AnswerValue {
    match kind {
        AnswerKind::Scalar => AnswerValue::Text(raw.trim().to_string()),
        AnswerKind::List => AnswerValue::List(
            raw.split(',')
                .map(str::trim)
                .filter(|segment| !segment.is_empty())
                .map(String::from)
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    mod scalar {
        use super::*;

        #[test]
        fn trims_surrounding_whitespace() {
            assert_eq!(
                parse_answer(AnswerKind::Scalar, "  hello  "),
                AnswerValue::text("hello")
            );
        }

        #[test]
        fn keeps_commas_verbatim() {
            assert_eq!(
                parse_answer(AnswerKind::Scalar, "10-30k, maybe more"),
                AnswerValue::text("10-30k, maybe more")
            );
        }

        #[test]
        fn blank_input_is_stored_but_unanswered() {
            let value = parse_answer(AnswerKind::Scalar, "   ");
            assert_eq!(value, AnswerValue::text(""));
            assert!(!value.is_answered());
        }
    }

    mod list {
        use super::*;

        #[test]
        fn splits_trims_and_keeps_duplicates() {
            assert_eq!(
                parse_answer(AnswerKind::List, "a, b, b, "),
                AnswerValue::list(["a", "b", "b"])
            );
        }

        #[test]
        fn text_without_commas_is_single_element() {
            assert_eq!(
                parse_answer(AnswerKind::List, " spreadsheet "),
                AnswerValue::list(["spreadsheet"])
            );
        }

        #[test]
        fn only_separators_is_empty_list() {
            let value = parse_answer(AnswerKind::List, " , ,, ");
            assert_eq!(value, AnswerValue::List(vec![]));
            assert!(!value.is_answered());
        }

        #[test]
        fn display_joins_with_comma_space() {
            assert_eq!(
                AnswerValue::list(["catalog", "cart"]).display_text(),
                "catalog, cart"
            );
        }
    }

    mod serde_shape {
        use super::*;

        #[test]
        fn text_serializes_as_plain_string() {
            let json = serde_json::to_string(&AnswerValue::text("SMBs")).unwrap();
            assert_eq!(json, "\"SMBs\"");
        }

        #[test]
        fn list_deserializes_from_array() {
            let value: AnswerValue = serde_json::from_str(r#"["a","b"]"#).unwrap();
            assert_eq!(value, AnswerValue::list(["a", "b"]));
        }
    }

    proptest! {
        #[test]
        fn list_segments_are_never_blank_or_padded(raw in ".{0,64}") {
            if let AnswerValue::List(items) = parse_answer(AnswerKind::List, &raw) {
                for item in items {
                    prop_assert!(!item.is_empty());
                    prop_assert_eq!(item.trim(), item.as_str());
                    prop_assert!(!item.contains(','));
                }
            } else {
                prop_assert!(false, "list kind must parse to a list");
            }
        }

        #[test]
        fn scalar_is_idempotent(raw in ".{0,64}") {
            let once = parse_answer(AnswerKind::Scalar, &raw).display_text();
            let twice = parse_answer(AnswerKind::Scalar, &once).display_text();
            prop_assert_eq!(once, twice);
        }
    }
}
