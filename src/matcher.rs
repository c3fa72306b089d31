//! The matcher capability and its blanket impls.

use std::sync::Arc;

use crate::description::Description;

/// Something that can describe itself into a [`Description`].
pub trait SelfDescribing {
    fn describe_to(&self, description: &mut dyn Description);
}

/// A predicate over `T` that can explain both what it expects and why a
/// given value failed it.
///
/// Conjunctions and feature matchers are themselves matchers, so matcher
/// trees nest to any depth.
pub trait Matcher<T: ?Sized>: SelfDescribing {
    /// Whether `actual` satisfies this matcher.
    fn matches(&self, actual: &T) -> bool;

    /// Explain why `actual` does not satisfy this matcher.
    ///
    /// Only meaningful when [`matches`](Matcher::matches) returns `false`.
    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description);
}

/// A type-erased matcher that can be shared between composed matchers and threads.
pub type SharedMatcher<T> = Arc<dyn Matcher<T> + Send + Sync>;

impl<S: SelfDescribing + ?Sized> SelfDescribing for &S {
    fn describe_to(&self, description: &mut dyn Description) {
        (**self).describe_to(description)
    }
}

impl<S: SelfDescribing + ?Sized> SelfDescribing for Box<S> {
    fn describe_to(&self, description: &mut dyn Description) {
        (**self).describe_to(description)
    }
}

impl<S: SelfDescribing + ?Sized> SelfDescribing for Arc<S> {
    fn describe_to(&self, description: &mut dyn Description) {
        (**self).describe_to(description)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for &M {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        (**self).describe_mismatch(actual, description)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Box<M> {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        (**self).describe_mismatch(actual, description)
    }
}

impl<T: ?Sized, M: Matcher<T> + ?Sized> Matcher<T> for Arc<M> {
    fn matches(&self, actual: &T) -> bool {
        (**self).matches(actual)
    }

    fn describe_mismatch(&self, actual: &T, description: &mut dyn Description) {
        (**self).describe_mismatch(actual, description)
    }
}
