//! Matching a named feature extracted from a larger value.

use std::fmt;
use std::marker::PhantomData;

use crate::description::Description;
use crate::matcher::{Matcher, SelfDescribing};

/// Matches a value by extracting one feature from it and delegating to a
/// sub-matcher over that feature.
///
/// Mismatches are reported against the feature name and the *extracted*
/// value (`firstName was "y2"`), never against the enclosing object.
///
/// The extractor must be total. If it panics, the panic propagates to the
/// caller untouched; a feature that may be absent should be extracted as an
/// `Option` and matched by a matcher over that `Option`.
///
/// The extractor runs on every `matches` and every `describe_mismatch`, so
/// inside a conjunction it is called more than once per assertion. Keep it
/// pure; a clone per call is expected.
pub struct FeatureMatcher<T: ?Sized, U, F, M> {
    feature_description: String,
    feature_name: String,
    extractor: F,
    matcher: M,
    marker: PhantomData<fn(&T) -> U>,
}

impl<T, U, F, M> FeatureMatcher<T, U, F, M>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    /// `feature_description` prefixes the expectation, `feature_name`
    /// labels the actual value in mismatches.
    pub fn new(
        feature_description: impl Into<String>,
        feature_name: impl Into<String>,
        extractor: F,
        matcher: M,
    ) -> Self {
        Self {
            feature_description: feature_description.into(),
            feature_name: feature_name.into(),
            extractor,
            matcher,
            marker: PhantomData,
        }
    }

    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    pub fn feature_description(&self) -> &str {
        &self.feature_description
    }
}

impl<T: ?Sized, U, F, M: fmt::Debug> fmt::Debug for FeatureMatcher<T, U, F, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureMatcher")
            .field("feature_description", &self.feature_description)
            .field("feature_name", &self.feature_name)
            .field("matcher", &self.matcher)
            .finish()
    }
}

impl<T, U, F, M> SelfDescribing for FeatureMatcher<T, U, F, M>
where
    T: ?Sized,
    M: SelfDescribing,
{
    fn describe_to(&self, description: &mut dyn Description) {
        description
            .text(&self.feature_description)
            .text(" ")
            .description_of(&self.matcher);
    }
}

impl<T, U, F, M> Matcher<T> for FeatureMatcher<T, U, F, M>
where
    T: ?Sized,
    F: Fn(&T) -> U,
    M: Matcher<U>,
{
    fn matches(&self, actual: &T) -> bool {
        self.matcher.matches(&(self.extractor)(actual))
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        let feature = (self.extractor)(actual);
        description.text(&self.feature_name).text(" ");
        self.matcher.describe_mismatch(&feature, description);
    }
}
