//! Soft assertions: run many named checks, report every failure at the end.

use matcher_compose::Matcher;
use tracing::{debug, warn};

use crate::check::{check, MatchFailure};
use crate::errors::{AssertError, AssertResult};
use crate::failures::{ExpectedFailures, FailureState};
use crate::formatter::format_summary;

/// Result of a single named check.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub name: String,
    pub status: CheckStatus,
}

/// Outcome of a check.
#[derive(Debug, Clone)]
pub enum CheckStatus {
    Passed,
    Failed {
        failure: MatchFailure,
        state: FailureState,
    },
}

impl CheckOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self.status, CheckStatus::Failed { .. })
    }
}

/// Tally of a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Checks verified.
    pub total: usize,
    /// Checks whose matcher accepted the value.
    pub passed: usize,
    /// Failed checks listed in the expected-failures file.
    pub expected_failures: usize,
    /// Failed checks not listed anywhere.
    pub regressions: usize,
}

impl VerifyReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// No check regressed; expected failures do not count against the run.
    pub fn success(&self) -> bool {
        self.regressions == 0
    }

    /// Tally a check whose matcher accepted the value.
    pub fn record_pass(&mut self) {
        self.total += 1;
        self.passed += 1;
    }

    /// Tally a rejected check under its expected-failure classification.
    pub fn record_failure(&mut self, state: FailureState) {
        self.total += 1;
        match state {
            FailureState::Known | FailureState::Pending => {
                self.expected_failures += 1;
            }
            FailureState::Regression => {
                self.regressions += 1;
            }
        }
    }
}

/// Collects the outcome of many checks instead of panicking on the first.
///
/// ```
/// use matcher_compose::{equal_to, greater_than};
/// use matcher_compose_assert::Verifier;
///
/// let mut verifier = Verifier::new();
/// verifier.verify("answer", &42, &equal_to(42));
/// verifier.verify("count", &0, &greater_than(0));
///
/// let report = verifier.report();
/// assert_eq!(report.passed, 1);
/// assert_eq!(report.regressions, 1);
/// assert!(verifier.finish().is_err());
/// ```
#[derive(Debug, Default)]
pub struct Verifier {
    expected: ExpectedFailures,
    outcomes: Vec<CheckOutcome>,
}

impl Verifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures of checks listed in `expected` are not regressions.
    pub fn with_expected_failures(expected: ExpectedFailures) -> Self {
        Self {
            expected,
            outcomes: Vec::new(),
        }
    }

    /// Run `matcher` against `actual` and record the outcome under `name`.
    ///
    /// Returns whether the check passed.
    pub fn verify<T, M>(&mut self, name: impl Into<String>, actual: &T, matcher: &M) -> bool
    where
        T: ?Sized,
        M: Matcher<T> + ?Sized,
    {
        let name = name.into();
        let status = match check(actual, matcher) {
            Ok(()) => CheckStatus::Passed,
            Err(failure) => {
                let state = self.expected.is_expected(&name);
                debug!(check = %name, ?state, mismatch = %failure.actual, "check failed");
                CheckStatus::Failed { failure, state }
            }
        };
        let passed = !matches!(status, CheckStatus::Failed { .. });
        self.outcomes.push(CheckOutcome { name, status });
        passed
    }

    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    pub fn report(&self) -> VerifyReport {
        let mut report = VerifyReport::new();
        for outcome in &self.outcomes {
            match &outcome.status {
                CheckStatus::Passed => report.record_pass(),
                CheckStatus::Failed { state, .. } => report.record_failure(*state),
            }
        }
        report
    }

    pub fn summary(&self) -> String {
        format_summary(&self.report(), &self.outcomes)
    }

    /// Finish the run, failing if any check regressed.
    pub fn finish(self) -> AssertResult<VerifyReport> {
        let report = self.report();
        if report.success() {
            return Ok(report);
        }

        warn!(
            regressions = report.regressions,
            total = report.total,
            "verification finished with regressions"
        );
        Err(AssertError::Regressions {
            count: report.regressions,
            summary: format_summary(&report, &self.outcomes),
        })
    }
}
