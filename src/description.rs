//! Text sinks that matchers describe themselves into.

use std::fmt;

use crate::matcher::SelfDescribing;

/// Append-only sink for matcher descriptions.
///
/// Only [`append_text`](Description::append_text) is required; the chaining
/// helpers (`text`, `value`, `description_of`, `list`) live on
/// `dyn Description` so every backend gets them for free.
pub trait Description {
    /// Append literal text.
    fn append_text(&mut self, text: &str);
}

impl<'a> dyn Description + 'a {
    /// Append literal text.
    pub fn text(&mut self, text: &str) -> &mut Self {
        self.append_text(text);
        self
    }

    /// Append a value using its `Debug` rendering, so strings come out quoted.
    pub fn value<V: fmt::Debug + ?Sized>(&mut self, value: &V) -> &mut Self {
        self.append_text(&format!("{:?}", value));
        self
    }

    /// Append the description of a nested matcher.
    pub fn description_of<S: SelfDescribing + ?Sized>(&mut self, item: &S) -> &mut Self {
        item.describe_to(self);
        self
    }

    /// Append the descriptions of `items` between `start` and `end`, joined by `separator`.
    pub fn list<I>(&mut self, start: &str, separator: &str, end: &str, items: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: SelfDescribing,
    {
        self.append_text(start);
        for (index, item) in items.into_iter().enumerate() {
            if index > 0 {
                self.append_text(separator);
            }
            item.describe_to(self);
        }
        self.append_text(end);
        self
    }
}

impl Description for String {
    fn append_text(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Plain-text description backed by a `String` buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringDescription {
    buffer: String,
}

impl StringDescription {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the description of `item`.
    pub fn of<S: SelfDescribing + ?Sized>(item: &S) -> String {
        let mut description = Self::new();
        item.describe_to(&mut description);
        description.buffer
    }

    /// Render why `actual` fails `matcher`.
    pub fn mismatch<T, M>(matcher: &M, actual: &T) -> String
    where
        T: ?Sized,
        M: crate::Matcher<T> + ?Sized,
    {
        let mut description = Self::new();
        matcher.describe_mismatch(actual, &mut description);
        description.buffer
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn into_string(self) -> String {
        self.buffer
    }
}

impl Description for StringDescription {
    fn append_text(&mut self, text: &str) {
        self.buffer.push_str(text);
    }
}

impl fmt::Display for StringDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// Discards everything appended to it.
///
/// For callers that need a matcher to run its describe path but only care
/// about the boolean outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullDescription;

impl Description for NullDescription {
    fn append_text(&mut self, _text: &str) {}
}
