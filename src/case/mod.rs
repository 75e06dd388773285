//! Canonical case-style formatting.
//!
//! One tokenizer ([`tokenizer::split_words`]) detects word boundaries; each
//! style only selects a post-tokenization transform and join separator, so
//! the boundary rules can never drift between formatters.

pub mod tokenizer;
pub mod validate;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why an input was rejected under the strict policy.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CaseError {
    #[error("input must be a string")]
    InvalidInputType,
    #[error("input must be a non-empty string")]
    EmptyInput,
    #[error("input must contain at least one alphanumeric character")]
    NoAlphanumericContent,
}

/// The four canonical case styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Camel,
    Kebab,
    Snake,
    Dot,
}

impl CaseStyle {
    /// Join separator, `None` for camelCase.
    pub fn separator(self) -> Option<char> {
        match self {
            CaseStyle::Camel => None,
            CaseStyle::Kebab => Some('-'),
            CaseStyle::Snake => Some('_'),
            CaseStyle::Dot => Some('.'),
        }
    }

    /// Policy the style uses unless the caller overrides it: camelCase
    /// rejects malformed input, the separator styles emit the empty-string
    /// sentinel.
    pub fn default_policy(self) -> Policy {
        match self {
            CaseStyle::Camel => Policy::Strict,
            CaseStyle::Kebab | CaseStyle::Snake | CaseStyle::Dot => Policy::Lenient,
        }
    }
}

impl FromStr for CaseStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(CaseStyle::Camel),
            "kebab" => Ok(CaseStyle::Kebab),
            "snake" => Ok(CaseStyle::Snake),
            "dot" => Ok(CaseStyle::Dot),
            _ => Err(format!("Unknown case style: {s}")),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Camel => write!(f, "camel"),
            CaseStyle::Kebab => write!(f, "kebab"),
            CaseStyle::Snake => write!(f, "snake"),
            CaseStyle::Dot => write!(f, "dot"),
        }
    }
}

/// How a formatter treats malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// Fail with a [`CaseError`].
    Strict,
    /// Return the empty-string sentinel.
    Lenient,
}

impl FromStr for Policy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(Policy::Strict),
            "lenient" => Ok(Policy::Lenient),
            _ => Err(format!("Unknown policy: {s}")),
        }
    }
}

/// A case-style formatter: one style, one validation policy.
///
/// Stateless and pure; a single instance may be shared across threads.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    style: CaseStyle,
    policy: Policy,
}

impl Formatter {
    /// Formatter with the style's default policy.
    pub fn new(style: CaseStyle) -> Self {
        Self {
            style,
            policy: style.default_policy(),
        }
    }

    /// Formatter with an explicit policy.
    pub fn with_policy(style: CaseStyle, policy: Policy) -> Self {
        Self { style, policy }
    }

    pub fn style(&self) -> CaseStyle {
        self.style
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Convert `input` to this formatter's style.
    ///
    /// Under [`Policy::Lenient`] this never fails: blank or
    /// alphanumeric-free input yields `Ok("")`.
    pub fn format(&self, input: &str) -> Result<String, CaseError> {
        match self.policy {
            Policy::Strict => self.convert(input),
            Policy::Lenient => Ok(self.convert(input).unwrap_or_default()),
        }
    }

    /// Convert a dynamic value, rejecting nulls and non-strings.
    ///
    /// Under [`Policy::Lenient`] non-textual values also collapse to the
    /// empty-string sentinel.
    pub fn format_value(&self, value: &Value) -> Result<String, CaseError> {
        let result = validate::as_text(value).and_then(|s| self.convert(s));
        match self.policy {
            Policy::Strict => result,
            Policy::Lenient => Ok(result.unwrap_or_default()),
        }
    }

    fn convert(&self, input: &str) -> Result<String, CaseError> {
        let trimmed = validate::non_blank(input)?;

        // A single-token camel run is already canonical output; re-tokenizing
        // it would only churn the allocation.
        if self.style == CaseStyle::Camel && is_canonical_camel(trimmed) {
            return Ok(trimmed.to_string());
        }

        let words = tokenizer::split_words(trimmed);
        if words.is_empty() {
            return Err(CaseError::NoAlphanumericContent);
        }

        Ok(match self.style.separator() {
            None => assemble_camel(&words),
            Some(sep) => {
                let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
                lowered.join(&sep.to_string())
            }
        })
    }
}

/// `true` when the trimmed input is a lowercase-led run of letters/digits,
/// i.e. already a canonical camelCase token.
fn is_canonical_camel(s: &str) -> bool {
    let mut bytes = s.bytes();
    matches!(bytes.next(), Some(first) if first.is_ascii_lowercase())
        && bytes.all(|b| b.is_ascii_alphanumeric())
}

/// First word fully lowercased; each following word capitalized, except
/// digit-led words which stay lowercased as-is.
fn assemble_camel(words: &[&str]) -> String {
    let mut out = String::with_capacity(words.iter().map(|w| w.len()).sum());
    out.push_str(&words[0].to_lowercase());

    for word in &words[1..] {
        let lower = word.to_lowercase();
        match lower.chars().next() {
            Some(first) if first.is_ascii_alphabetic() => {
                out.push(first.to_ascii_uppercase());
                out.push_str(&lower[1..]);
            }
            _ => out.push_str(&lower),
        }
    }

    out
}

/// Convert a dynamic value to camelCase (strict).
pub fn to_camel_case(value: &Value) -> Result<String, CaseError> {
    Formatter::new(CaseStyle::Camel).format_value(value)
}

/// Convert a dynamic value to kebab-case (lenient).
pub fn to_kebab_case(value: &Value) -> String {
    Formatter::new(CaseStyle::Kebab)
        .format_value(value)
        .unwrap_or_default()
}

/// Convert a dynamic value to snake_case (lenient).
pub fn to_snake_case(value: &Value) -> String {
    Formatter::new(CaseStyle::Snake)
        .format_value(value)
        .unwrap_or_default()
}

/// Convert a dynamic value to dot.case (lenient).
pub fn to_dot_case(value: &Value) -> String {
    Formatter::new(CaseStyle::Dot)
        .format_value(value)
        .unwrap_or_default()
}
