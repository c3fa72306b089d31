//! Rendering configuration for conjunctions.

use serde::{Deserialize, Serialize};

/// Controls how a [`ConjunctionMatcher`](crate::ConjunctionMatcher) renders
/// its description and its itemized mismatches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConjunctionStyle {
    /// Text before the first member description.
    pub start: String,
    /// Text between member descriptions.
    pub separator: String,
    /// Text after the last member description.
    pub end: String,
    /// Text between the mismatch descriptions of failing members.
    pub mismatch_separator: String,
}

/// Continuation indent that lines up with the `"     but: "` label of a failure message.
const MULTILINE_SEPARATOR: &str = "\n          and ";

impl Default for ConjunctionStyle {
    fn default() -> Self {
        Self::inline()
    }
}

impl ConjunctionStyle {
    /// Single-line rendering: `("x" and "y")`, mismatches joined with ` and `.
    pub fn inline() -> Self {
        Self {
            start: "(".into(),
            separator: " and ".into(),
            end: ")".into(),
            mismatch_separator: " and ".into(),
        }
    }

    /// One member per line, each continuation introduced by an indented `and`.
    pub fn multiline() -> Self {
        Self {
            start: String::new(),
            separator: MULTILINE_SEPARATOR.into(),
            end: String::new(),
            mismatch_separator: MULTILINE_SEPARATOR.into(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_delimiters(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start = start.into();
        self.end = end.into();
        self
    }

    pub fn with_mismatch_separator(mut self, separator: impl Into<String>) -> Self {
        self.mismatch_separator = separator.into();
        self
    }
}
