//! Sequence normalization
//!
//! Every metric in this crate compares ordered sequences of symbols. Callers
//! hand in either text, which is split into its characters (or grapheme
//! clusters), or a list of tokens, which is used as-is. Both forms end up as
//! a [`Sequence`] of `&str` symbols, so a text can be compared against a token
//! list symbol by symbol.

use crate::error::{DistanceError, Result};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use smallvec::SmallVec;
use std::hash::Hash;
use unicode_segmentation::UnicodeSegmentation;

/// How text inputs are split into symbols
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segmentation {
    /// One symbol per Unicode scalar value
    #[default]
    Chars,
    /// One symbol per extended grapheme cluster (emoji sequences, combining marks)
    Graphemes,
}

/// A comparable input: text or an ordered list of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input<'a> {
    /// Split into symbols according to a [`Segmentation`]
    Text(&'a str),
    /// Passed through unchanged, one symbol per token
    Tokens(Vec<&'a str>),
}

impl<'a> Input<'a> {
    /// Resolve a dynamically typed value into an input.
    ///
    /// Strings become [`Input::Text`], arrays of strings become
    /// [`Input::Tokens`]. Anything else is not comparable.
    ///
    /// # Errors
    ///
    /// Returns [`DistanceError::TypeMismatch`] for numbers, booleans, null,
    /// objects, and arrays holding anything other than strings.
    pub fn from_value(value: &'a Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(Input::Text(s)),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::String(s) => Ok(s.as_str()),
                    other => Err(DistanceError::TypeMismatch(format!(
                        "array containing {}",
                        value_kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>>>()
                .map(Input::Tokens),
            other => Err(DistanceError::TypeMismatch(value_kind(other).to_string())),
        }
    }

    /// Produce the symbol sequence for this input.
    #[must_use]
    pub fn normalize(&self, segmentation: Segmentation) -> Sequence<'a> {
        match self {
            Input::Text(s) => Sequence::from_text(s, segmentation),
            Input::Tokens(tokens) => tokens.iter().copied().collect(),
        }
    }
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Input::Text(s)
    }
}

impl<'a> From<&'a [&'a str]> for Input<'a> {
    fn from(tokens: &'a [&'a str]) -> Self {
        Input::Tokens(tokens.to_vec())
    }
}

impl<'a> From<&'a [String]> for Input<'a> {
    fn from(tokens: &'a [String]) -> Self {
        Input::Tokens(tokens.iter().map(String::as_str).collect())
    }
}

impl<'a> From<Vec<&'a str>> for Input<'a> {
    fn from(tokens: Vec<&'a str>) -> Self {
        Input::Tokens(tokens)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalized ordered sequence of symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Sequence<'a> {
    symbols: SmallVec<[&'a str; 32]>,
}

impl<'a> Sequence<'a> {
    /// Split text into symbols.
    #[must_use]
    pub fn from_text(text: &'a str, segmentation: Segmentation) -> Self {
        let symbols = match segmentation {
            Segmentation::Chars => text
                .char_indices()
                .map(|(i, c)| &text[i..i + c.len_utf8()])
                .collect(),
            Segmentation::Graphemes => text.graphemes(true).collect(),
        };
        Self { symbols }
    }

    #[must_use]
    pub fn symbols(&self) -> &[&'a str] {
        &self.symbols
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl<'a> FromIterator<&'a str> for Sequence<'a> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl<'a> From<&'a str> for Sequence<'a> {
    fn from(text: &'a str) -> Self {
        Sequence::from_text(text, Segmentation::Chars)
    }
}

/// Assign a dense id to every distinct symbol of `a` and `b`.
///
/// Ids follow first appearance, scanning `a` then `b`, so the map length is
/// the size of the shared alphabet.
#[must_use]
pub fn symbol_ids<'t, T: Eq + Hash>(a: &'t [T], b: &'t [T]) -> AHashMap<&'t T, usize> {
    let mut ids: AHashMap<&T, usize> = AHashMap::with_capacity((a.len() + b.len()).min(64));
    for symbol in a.iter().chain(b.iter()) {
        let next = ids.len();
        ids.entry(symbol).or_insert(next);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_splits_into_chars() {
        let seq = Input::from("abc").normalize(Segmentation::Chars);
        assert_eq!(seq.symbols(), &["a", "b", "c"]);
    }

    #[test]
    fn test_tokens_pass_through() {
        let tokens = ["ACGT", "TTAG"];
        let seq = Input::from(&tokens[..]).normalize(Segmentation::Chars);
        assert_eq!(seq.symbols(), &["ACGT", "TTAG"]);
    }

    #[test]
    fn test_multibyte_chars() {
        let seq = Sequence::from("café");
        assert_eq!(seq.len(), 4);
        assert_eq!(seq.symbols()[3], "é");
    }

    #[test]
    fn test_graphemes() {
        // e + combining acute accent is two chars but one grapheme
        let text = "cafe\u{0301}";
        assert_eq!(Sequence::from_text(text, Segmentation::Chars).len(), 5);
        assert_eq!(Sequence::from_text(text, Segmentation::Graphemes).len(), 4);
    }

    #[test]
    fn test_from_value() {
        let text = json!("rick");
        assert_eq!(Input::from_value(&text), Ok(Input::Text("rick")));

        let tokens = json!(["a", "bc"]);
        assert_eq!(
            Input::from_value(&tokens),
            Ok(Input::Tokens(vec!["a", "bc"]))
        );
    }

    #[test]
    fn test_from_value_type_mismatch() {
        assert!(matches!(
            Input::from_value(&json!(42)),
            Err(DistanceError::TypeMismatch(_))
        ));
        assert!(matches!(
            Input::from_value(&json!({"a": 1})),
            Err(DistanceError::TypeMismatch(_))
        ));
        let err = Input::from_value(&json!(["a", 1])).unwrap_err();
        assert!(err.to_string().contains("array containing number"));
    }

    #[test]
    fn test_symbol_ids() {
        let a: Vec<char> = "abca".chars().collect();
        let b: Vec<char> = "cd".chars().collect();
        let ids = symbol_ids(&a, &b);
        assert_eq!(ids.len(), 4);
        assert_eq!(ids[&'a'], 0);
        assert_eq!(ids[&'d'], 3);
    }

    #[test]
    fn test_empty() {
        assert!(Sequence::from("").is_empty());
        assert!(Input::Tokens(Vec::new()).normalize(Segmentation::Chars).is_empty());
    }
}
