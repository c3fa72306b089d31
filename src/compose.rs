//! Entry points for building composed matchers.

use std::fmt;
use std::sync::Arc;

use crate::conjunction::ConjunctionMatcher;
use crate::core_matchers::{equal_to, EqualTo};
use crate::feature::FeatureMatcher;
use crate::matcher::{Matcher, SharedMatcher};

/// Start a conjunction with `matcher`; chain further members with
/// [`ConjunctionMatcher::and`].
///
/// ```
/// use matcher_compose::{compose, contains_string, ends_with, starts_with, Matcher};
///
/// let matcher = compose(starts_with("x")).and(contains_string("y")).and(ends_with("z"));
/// assert!(matcher.matches("xyz"));
/// ```
pub fn compose<T, M>(matcher: M) -> ConjunctionMatcher<T>
where
    T: ?Sized,
    M: Matcher<T> + Send + Sync + 'static,
{
    let shared: SharedMatcher<T> = Arc::new(matcher);
    ConjunctionMatcher::new(None, vec![shared])
}

/// Like [`compose`], with `description` rendered before the member list,
/// e.g. `a person with (title "x" and ...)`.
pub fn compose_described<T, M>(description: impl Into<String>, matcher: M) -> ConjunctionMatcher<T>
where
    T: ?Sized,
    M: Matcher<T> + Send + Sync + 'static,
{
    let shared: SharedMatcher<T> = Arc::new(matcher);
    ConjunctionMatcher::new(Some(description.into()), vec![shared])
}

/// Match the feature `extractor` pulls out of a value against `matcher`.
///
/// `name` both introduces the expectation and labels the actual feature
/// value in mismatches.
///
/// ```
/// use matcher_compose::{equal_to, has_feature, Matcher, StringDescription};
///
/// struct Person {
///     first_name: String,
/// }
///
/// let matcher = has_feature("firstName", |p: &Person| p.first_name.clone(), equal_to("y".to_string()));
/// let person = Person { first_name: "y2".to_string() };
/// assert!(!matcher.matches(&person));
/// assert_eq!(StringDescription::mismatch(&matcher, &person), "firstName was \"y2\"");
/// ```
pub fn has_feature<T, U, F, M>(
    name: impl Into<String>,
    extractor: F,
    matcher: M,
) -> FeatureMatcher<T, U, F, M>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    let name = name.into();
    FeatureMatcher::new(name.clone(), name, extractor, matcher)
}

/// Like [`has_feature`], with a separate `description` for the expectation
/// and `name` for labelling the actual value.
pub fn has_described_feature<T, U, F, M>(
    description: impl Into<String>,
    name: impl Into<String>,
    extractor: F,
    matcher: M,
) -> FeatureMatcher<T, U, F, M>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    FeatureMatcher::new(description, name, extractor, matcher)
}

/// Shorthand for `has_feature(name, extractor, equal_to(expected))`.
pub fn has_feature_value<T, U, F>(
    name: impl Into<String>,
    extractor: F,
    expected: U,
) -> FeatureMatcher<T, U, F, EqualTo<U>>
where
    T: ?Sized,
    U: PartialEq + fmt::Debug,
    F: Fn(&T) -> U,
{
    has_feature(name, extractor, equal_to(expected))
}
