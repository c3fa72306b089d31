//! Failure message and summary rendering.

use std::fmt::Write;

use unicode_width::UnicodeWidthStr;

use crate::failures::FailureState;
use crate::verifier::{CheckOutcome, CheckStatus, VerifyReport};

/// Render a failed match in the familiar two-line layout:
///
/// ```text
/// Expected: (title "x1" and firstName "y")
///      but: title was "x2"
/// ```
///
/// The labels are ten columns wide, which is also the indent of
/// [`ConjunctionStyle::multiline`](matcher_compose::ConjunctionStyle::multiline),
/// so multi-line mismatches stay aligned under `but:`.
pub fn format_failure(reason: Option<&str>, expected: &str, actual: &str) -> String {
    let mut output = String::new();

    if let Some(reason) = reason {
        writeln!(output, "{}", reason).unwrap();
    }
    writeln!(output, "Expected: {}", expected).unwrap();
    write!(output, "     but: {}", actual).unwrap();

    output
}

/// Render a verification summary: a status line, then one line per failed
/// check with its mismatch.
pub fn format_summary(report: &VerifyReport, outcomes: &[CheckOutcome]) -> String {
    let mut output = String::new();

    let status = if report.success() { "PASS" } else { "FAIL" };
    write!(
        output,
        "{}: {} checks, {} passed, {} expected failures, {} regressions",
        status, report.total, report.passed, report.expected_failures, report.regressions
    )
    .unwrap();

    let failed: Vec<_> = outcomes
        .iter()
        .filter_map(|outcome| match &outcome.status {
            CheckStatus::Failed { failure, state } => Some((outcome, failure, *state)),
            CheckStatus::Passed => None,
        })
        .collect();

    let name_width = failed
        .iter()
        .map(|(outcome, _, _)| UnicodeWidthStr::width(outcome.name.as_str()))
        .max()
        .unwrap_or(0);
    // "  ✗ " + name column + two spaces
    let continuation = format!("\n{}", " ".repeat(name_width + 6));

    for (outcome, failure, state) in failed {
        let marker = match state {
            FailureState::Regression => "\u{2717}", // cross mark
            FailureState::Known | FailureState::Pending => "~",
        };
        let padding = name_width - UnicodeWidthStr::width(outcome.name.as_str());
        write!(
            output,
            "\n  {} {}{}  {}",
            marker,
            outcome.name,
            " ".repeat(padding),
            failure.actual.replace('\n', &continuation)
        )
        .unwrap();
    }

    output
}
