//! Leaf matchers: equality, ordering, substrings and ad-hoc predicates.
//!
//! Every leaf renders its mismatch as `was <actual>`, with `actual` in its
//! `Debug` form.

use std::cmp::Ordering;
use std::fmt;

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

/// Matches values equal to an expected value. Created by [`equal_to`].
#[derive(Debug, Clone, PartialEq)]
pub struct EqualTo<V> {
    expected: V,
}

/// Matches values equal to `expected`.
pub fn equal_to<V: PartialEq + fmt::Debug>(expected: V) -> EqualTo<V> {
    EqualTo { expected }
}

impl<V: fmt::Debug> SelfDescribing for EqualTo<V> {
    fn describe_to(&self, description: &mut dyn Description) {
        description.value(&self.expected);
    }
}

impl<V: PartialEq + fmt::Debug> Matcher<V> for EqualTo<V> {
    fn matches(&self, actual: &V) -> bool {
        *actual == self.expected
    }

    fn describe_mismatch(&self, actual: &V, description: &mut dyn Description) {
        description.text("was ").value(actual);
    }
}

/// Matches every value. Created by [`anything`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Anything;

/// Matches every value; useful as a placeholder in a composed chain.
pub fn anything() -> Anything {
    Anything
}

impl SelfDescribing for Anything {
    fn describe_to(&self, description: &mut dyn Description) {
        description.text("ANYTHING");
    }
}

impl<T: ?Sized> Matcher<T> for Anything {
    fn matches(&self, _actual: &T) -> bool {
        true
    }

    fn describe_mismatch(&self, _actual: &T, _description: &mut dyn Description) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubstringRelation {
    StartsWith,
    EndsWith,
    Contains,
}

impl SubstringRelation {
    fn holds(self, actual: &str, substring: &str) -> bool {
        match self {
            SubstringRelation::StartsWith => actual.starts_with(substring),
            SubstringRelation::EndsWith => actual.ends_with(substring),
            SubstringRelation::Contains => actual.contains(substring),
        }
    }

    fn phrase(self) -> &'static str {
        match self {
            SubstringRelation::StartsWith => "a string starting with ",
            SubstringRelation::EndsWith => "a string ending with ",
            SubstringRelation::Contains => "a string containing ",
        }
    }
}

/// Matches strings by prefix, suffix or containment.
///
/// Created by [`starts_with`], [`ends_with`] and [`contains_string`]; works
/// for any `T: AsRef<str>`, so both `str` and `String` features can use it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstringMatcher {
    relation: SubstringRelation,
    substring: String,
}

/// Matches strings that start with `prefix`.
pub fn starts_with(prefix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        relation: SubstringRelation::StartsWith,
        substring: prefix.into(),
    }
}

/// Matches strings that end with `suffix`.
pub fn ends_with(suffix: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        relation: SubstringRelation::EndsWith,
        substring: suffix.into(),
    }
}

/// Matches strings that contain `substring` anywhere.
pub fn contains_string(substring: impl Into<String>) -> SubstringMatcher {
    SubstringMatcher {
        relation: SubstringRelation::Contains,
        substring: substring.into(),
    }
}

impl SelfDescribing for SubstringMatcher {
    fn describe_to(&self, description: &mut dyn Description) {
        description
            .text(self.relation.phrase())
            .value(self.substring.as_str());
    }
}

impl<T: AsRef<str> + ?Sized> Matcher<T> for SubstringMatcher {
    fn matches(&self, actual: &T) -> bool {
        self.relation.holds(actual.as_ref(), &self.substring)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        description.text("was ").value(actual.as_ref());
    }
}

/// Matches values strictly above or below a bound.
///
/// Created by [`greater_than`] and [`less_than`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderingMatcher<V> {
    bound: V,
    expected: Ordering,
}

/// Matches values strictly greater than `bound`.
pub fn greater_than<V: PartialOrd + fmt::Debug>(bound: V) -> OrderingMatcher<V> {
    OrderingMatcher {
        bound,
        expected: Ordering::Greater,
    }
}

/// Matches values strictly less than `bound`.
pub fn less_than<V: PartialOrd + fmt::Debug>(bound: V) -> OrderingMatcher<V> {
    OrderingMatcher {
        bound,
        expected: Ordering::Less,
    }
}

impl<V: fmt::Debug> SelfDescribing for OrderingMatcher<V> {
    fn describe_to(&self, description: &mut dyn Description) {
        let relation = match self.expected {
            Ordering::Greater => "a value greater than ",
            Ordering::Less => "a value less than ",
            Ordering::Equal => "a value equal to ",
        };
        description.text(relation).value(&self.bound);
    }
}

impl<V: PartialOrd + fmt::Debug> Matcher<V> for OrderingMatcher<V> {
    fn matches(&self, actual: &V) -> bool {
        // Incomparable values (NaN) never match.
        actual.partial_cmp(&self.bound) == Some(self.expected)
    }

    fn describe_mismatch(&self, actual: &V, description: &mut dyn Description) {
        description.text("was ").value(actual);
    }
}

/// Matches values accepted by an arbitrary predicate. Created by [`satisfies`].
pub struct Satisfies<F> {
    description: String,
    predicate: F,
}

/// Matches values for which `predicate` returns `true`; `description` names the condition.
pub fn satisfies<T, F>(description: impl Into<String>, predicate: F) -> Satisfies<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    Satisfies {
        description: description.into(),
        predicate,
    }
}

impl<F> fmt::Debug for Satisfies<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfies")
            .field("description", &self.description)
            .finish()
    }
}

impl<F> SelfDescribing for Satisfies<F> {
    fn describe_to(&self, description: &mut dyn Description) {
        description.text(&self.description);
    }
}

impl<T, F> Matcher<T> for Satisfies<F>
where
    T: fmt::Debug + ?Sized,
    F: Fn(&T) -> bool,
{
    fn matches(&self, actual: &T) -> bool {
        (self.predicate)(actual)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        description.text("was ").value(actual);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StringDescription;

    #[test]
    fn test_equal_to() {
        let matcher = equal_to("y".to_string());
        assert!(matcher.matches(&"y".to_string()));
        assert!(!matcher.matches(&"y2".to_string()));
        assert_eq!(StringDescription::of(&matcher), "\"y\"");
        assert_eq!(
            StringDescription::mismatch(&matcher, &"y2".to_string()),
            "was \"y2\""
        );
    }

    #[test]
    fn test_anything_matches_everything() {
        let matcher = anything();
        assert!(Matcher::<str>::matches(&matcher, "whatever"));
        assert!(Matcher::<i32>::matches(&matcher, &0));
        assert_eq!(StringDescription::of(&matcher), "ANYTHING");
    }

    #[test]
    fn test_substring_matchers() {
        assert!(starts_with("x").matches("xyz"));
        assert!(!starts_with("y").matches("xyz"));
        assert!(ends_with("z").matches(&"xyz".to_string()));
        assert!(contains_string("y").matches("xyz"));
        assert!(!contains_string("q").matches("xyz"));

        assert_eq!(
            StringDescription::of(&ends_with("z")),
            "a string ending with \"z\""
        );
        assert_eq!(
            StringDescription::of(&contains_string("y")),
            "a string containing \"y\""
        );
        assert_eq!(
            StringDescription::mismatch(&contains_string("q"), "xyz"),
            "was \"xyz\""
        );
    }

    #[test]
    fn test_ordering_matchers() {
        assert!(greater_than(3).matches(&4));
        assert!(!greater_than(3).matches(&3));
        assert!(less_than(3).matches(&2));
        assert!(!less_than(1.0).matches(&f64::NAN));
        assert_eq!(StringDescription::of(&greater_than(3)), "a value greater than 3");
        assert_eq!(StringDescription::of(&less_than(3)), "a value less than 3");
        assert_eq!(StringDescription::mismatch(&less_than(3), &5), "was 5");
    }

    #[test]
    fn test_satisfies() {
        let even = satisfies("an even number", |n: &i32| n % 2 == 0);
        assert!(even.matches(&4));
        assert!(!even.matches(&5));
        assert_eq!(StringDescription::of(&even), "an even number");
        assert_eq!(StringDescription::mismatch(&even, &5), "was 5");
    }
}
