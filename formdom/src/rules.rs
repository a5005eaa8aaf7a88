//! Reusable validation rules for text values.

use std::sync::Arc;

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A predicate over a text value plus the message reported when it fails.
///
/// Attach rules to a [`TextFieldItem`](crate::items::TextFieldItem) as hard
/// (failure blocks submission) or soft (failure only warns).
#[derive(Clone)]
pub struct TextRule {
    predicate: Predicate,
    message: String,
}

impl TextRule {
    /// Build a rule from a custom predicate.
    pub fn custom(
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
        message: impl Into<String>,
    ) -> Self {
        Self {
            predicate: Arc::new(predicate),
            message: message.into(),
        }
    }

    /// Require minimum length (in characters).
    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Self::custom(move |value| value.chars().count() >= min, message)
    }

    /// Require maximum length (in characters).
    pub fn max_length(max: usize, message: impl Into<String>) -> Self {
        Self::custom(move |value| value.chars().count() <= max, message)
    }

    /// Require the value to match a regex pattern.
    ///
    /// Panics when the pattern does not compile.
    pub fn pattern(pattern: &str, message: impl Into<String>) -> Self {
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        Self::custom(move |value| re.is_match(value), message)
    }

    /// Require a valid email address.
    pub fn email(message: impl Into<String>) -> Self {
        Self::custom(
            |value| {
                if value.is_empty() {
                    true // Empty is valid; use a required field for non-empty
                } else {
                    email_address::EmailAddress::is_valid(value)
                }
            },
            message,
        )
    }

    /// Check the value against the predicate.
    pub fn is_satisfied_by(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    /// The message reported on failure.
    pub fn message(&self) -> &str {
        &self.message
    }
}
