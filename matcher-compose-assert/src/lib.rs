//! Assertion harness for matcher-compose.
//!
//! Runs composed matchers against values and turns mismatches into readable
//! failures, either immediately ([`assert_that`]) or collected across many
//! checks ([`Verifier`]).
//!
//! ## Modules
//!
//! - [`check`] - run one matcher, render `Expected: ... but: ...`
//! - [`verifier`] - soft assertions over many named checks
//! - [`failures`] - expected failures tracking via TOML
//! - [`formatter`] - failure and summary rendering
//! - [`errors`] - error types for the harness
//!
//! ## Example
//!
//! ```should_panic
//! use matcher_compose::{compose, equal_to, has_feature};
//! use matcher_compose_assert::assert_that;
//!
//! struct Person {
//!     first_name: String,
//!     last_name: String,
//! }
//!
//! let person = Person { first_name: "y2".to_string(), last_name: "z2".to_string() };
//! assert_that(
//!     &person,
//!     &compose(has_feature("firstName", |p: &Person| p.first_name.clone(), equal_to("y".to_string())))
//!         .and(has_feature("lastName", |p: &Person| p.last_name.clone(), equal_to("z".to_string()))),
//! );
//! // Expected: (firstName "y" and lastName "z")
//! //      but: firstName was "y2" and lastName was "z2"
//! ```

pub mod check;
pub mod errors;
pub mod failures;
pub mod formatter;
pub mod verifier;

pub use check::{assert_that, assert_that_with_reason, check, check_with_reason, MatchFailure};
pub use errors::{AssertError, AssertResult};
pub use failures::{ExpectedFailures, FailureEntry, FailureState};
pub use formatter::{format_failure, format_summary};
pub use verifier::{CheckOutcome, CheckStatus, Verifier, VerifyReport};
