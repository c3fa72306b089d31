//! AND-composition of matchers with itemized mismatch reporting.

use std::convert::TryFrom;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::description::Description;
use crate::errors::ComposeError;
use crate::matcher::{Matcher, SelfDescribing, SharedMatcher};
use crate::style::ConjunctionStyle;

/// Matches a value only when every member matcher does.
///
/// Unlike a plain `all_of`, the mismatch description lists *every* failing
/// member in sequence order, not just the first one, so a single failed
/// assertion reports all broken fields at once.
///
/// Instances are immutable: [`and`](ConjunctionMatcher::and) returns a new
/// conjunction and leaves the receiver untouched. Members are held behind
/// `Arc`, so extending a chain shares the existing members instead of
/// copying them.
///
/// ```
/// use matcher_compose::{compose, contains_string, ends_with, starts_with, Matcher};
///
/// let matcher = compose(starts_with("x"))
///     .and(contains_string("y"))
///     .and(ends_with("z"));
/// assert!(matcher.matches("xyz"));
/// assert!(!matcher.matches("xz"));
/// ```
pub struct ConjunctionMatcher<T: ?Sized> {
    description: Option<String>,
    matchers: Vec<SharedMatcher<T>>,
    style: ConjunctionStyle,
}

impl<T: ?Sized> ConjunctionMatcher<T> {
    /// # Panics
    ///
    /// Panics if `matchers` is empty.
    pub(crate) fn new(description: Option<String>, matchers: Vec<SharedMatcher<T>>) -> Self {
        assert!(
            !matchers.is_empty(),
            "a conjunction needs at least one matcher"
        );
        Self {
            description,
            matchers,
            style: ConjunctionStyle::default(),
        }
    }

    /// A new conjunction with `matcher` appended to this one's members.
    pub fn and<M>(&self, matcher: M) -> Self
    where
        M: Matcher<T> + Send + Sync + 'static,
    {
        let shared: SharedMatcher<T> = Arc::new(matcher);
        self.and_shared(shared)
    }

    /// Like [`and`](Self::and), for a matcher that is already shared.
    pub fn and_shared(&self, matcher: SharedMatcher<T>) -> Self {
        let mut matchers = Vec::with_capacity(self.matchers.len() + 1);
        matchers.extend(self.matchers.iter().cloned());
        matchers.push(matcher);
        Self {
            description: self.description.clone(),
            matchers,
            style: self.style.clone(),
        }
    }

    /// A new conjunction with the same members rendered with `style`.
    pub fn with_style(&self, style: ConjunctionStyle) -> Self {
        Self {
            description: self.description.clone(),
            matchers: self.matchers.clone(),
            style,
        }
    }

    pub fn style(&self) -> &ConjunctionStyle {
        &self.style
    }

    pub fn members(&self) -> &[SharedMatcher<T>] {
        &self.matchers
    }

    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Always `false`; a conjunction cannot be built without members.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl<T: ?Sized> Clone for ConjunctionMatcher<T> {
    fn clone(&self) -> Self {
        Self {
            description: self.description.clone(),
            matchers: self.matchers.clone(),
            style: self.style.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for ConjunctionMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConjunctionMatcher")
            .field("description", &self.description)
            .field("members", &self.matchers.len())
            .field("style", &self.style)
            .finish()
    }
}

impl<T: ?Sized> TryFrom<Vec<SharedMatcher<T>>> for ConjunctionMatcher<T> {
    type Error = ComposeError;

    fn try_from(matchers: Vec<SharedMatcher<T>>) -> Result<Self, Self::Error> {
        if matchers.is_empty() {
            return Err(ComposeError::EmptyConjunction);
        }
        Ok(Self::new(None, matchers))
    }
}

impl<T: ?Sized> SelfDescribing for ConjunctionMatcher<T> {
    fn describe_to(&self, description: &mut dyn Description) {
        if let Some(text) = &self.description {
            description.text(text).text(" ");
        }
        description.list(
            &self.style.start,
            &self.style.separator,
            &self.style.end,
            &self.matchers,
        );
    }
}

impl<T: ?Sized> Matcher<T> for ConjunctionMatcher<T> {
    fn matches(&self, actual: &T) -> bool {
        self.matchers.iter().all(|matcher| matcher.matches(actual))
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        let mut failures = 0usize;
        for matcher in self.matchers.iter().filter(|m| !m.matches(actual)) {
            if failures > 0 {
                description.text(&self.style.mismatch_separator);
            }
            matcher.describe_mismatch(actual, description);
            failures += 1;
        }
        trace!(
            failures,
            members = self.matchers.len(),
            "described conjunction mismatch"
        );
    }
}
