//! Composable matchers with field-level mismatch diagnostics.
//!
//! Combine independent checks over a value into one matcher that evaluates
//! all of them and reports *every* failing check, and match complex values
//! field by field through named feature extractors.
//!
//! ## Core Types
//!
//! - [`Matcher`] / [`SelfDescribing`] - the matcher capability
//! - [`Description`] / [`StringDescription`] / [`NullDescription`] - description sinks
//! - [`ConjunctionMatcher`] - AND-composition with itemized mismatches
//! - [`FeatureMatcher`] - matches a named feature of a value
//! - [`ConjunctionStyle`] - how conjunctions render
//!
//! ## Example
//!
//! ```
//! use matcher_compose::{compose, equal_to, has_feature, Matcher, StringDescription};
//!
//! #[derive(Debug)]
//! struct Person {
//!     title: String,
//!     first_name: String,
//! }
//!
//! let matcher = compose(has_feature("title", |p: &Person| p.title.clone(), equal_to("Ms".to_string())))
//!     .and(has_feature("firstName", |p: &Person| p.first_name.clone(), equal_to("Ada".to_string())));
//!
//! let person = Person { title: "Mr".to_string(), first_name: "Ada".to_string() };
//! assert!(!matcher.matches(&person));
//! assert_eq!(StringDescription::mismatch(&matcher, &person), "title was \"Mr\"");
//! ```

mod compose;
mod conjunction;
mod core_matchers;
mod description;
mod errors;
mod feature;
mod matcher;
mod style;

pub use compose::{compose, compose_described, has_described_feature, has_feature, has_feature_value};
pub use conjunction::ConjunctionMatcher;
pub use core_matchers::{
    anything, contains_string, ends_with, equal_to, greater_than, less_than, satisfies, starts_with,
    Anything, EqualTo, OrderingMatcher, Satisfies, SubstringMatcher,
};
pub use description::{Description, NullDescription, StringDescription};
pub use errors::ComposeError;
pub use feature::FeatureMatcher;
pub use matcher::{Matcher, SelfDescribing, SharedMatcher};
pub use style::ConjunctionStyle;

#[cfg(test)]
mod tests {
    mod laws;
    mod nesting;
    mod person;
}
