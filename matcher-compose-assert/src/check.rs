//! Running a single matcher against a value.

use std::fmt;

use matcher_compose::Matcher;
use thiserror::Error;

use crate::formatter::format_failure;

/// A value that did not satisfy a matcher, with both sides rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub struct MatchFailure {
    /// Optional context supplied by the caller.
    pub reason: Option<String>,
    /// The matcher's description of what it expected.
    pub expected: String,
    /// The matcher's explanation of why the value failed.
    pub actual: String,
}

impl fmt::Display for MatchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_failure(
            self.reason.as_deref(),
            &self.expected,
            &self.actual,
        ))
    }
}

impl MatchFailure {
    fn capture<T, M>(reason: Option<String>, actual: &T, matcher: &M) -> Self
    where
        T: ?Sized,
        M: Matcher<T> + ?Sized,
    {
        let mut expected = String::new();
        matcher.describe_to(&mut expected);
        let mut mismatch = String::new();
        matcher.describe_mismatch(actual, &mut mismatch);
        Self {
            reason,
            expected,
            actual: mismatch,
        }
    }
}

/// Run `matcher` against `actual`, rendering a [`MatchFailure`] on mismatch.
pub fn check<T, M>(actual: &T, matcher: &M) -> Result<(), MatchFailure>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(actual) {
        Ok(())
    } else {
        Err(MatchFailure::capture(None, actual, matcher))
    }
}

/// Like [`check`], with `reason` prefixed to the failure message.
pub fn check_with_reason<T, M>(
    reason: impl Into<String>,
    actual: &T,
    matcher: &M,
) -> Result<(), MatchFailure>
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if matcher.matches(actual) {
        Ok(())
    } else {
        Err(MatchFailure::capture(Some(reason.into()), actual, matcher))
    }
}

/// Panic with an `Expected: ... but: ...` message unless `actual` satisfies `matcher`.
#[track_caller]
pub fn assert_that<T, M>(actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Err(failure) = check(actual, matcher) {
        panic!("\n{}", failure);
    }
}

/// Like [`assert_that`], with `reason` prefixed to the panic message.
#[track_caller]
pub fn assert_that_with_reason<T, M>(reason: &str, actual: &T, matcher: &M)
where
    T: ?Sized,
    M: Matcher<T> + ?Sized,
{
    if let Err(failure) = check_with_reason(reason, actual, matcher) {
        panic!("\n{}", failure);
    }
}
