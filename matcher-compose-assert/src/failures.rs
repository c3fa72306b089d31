//! Expected failures tracking via TOML file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::errors::{AssertError, AssertResult};

/// Checks that are allowed to fail without counting as regressions.
///
/// ```toml
/// [[known]]
/// check = "person.title"
/// reason = "Titles are not normalized yet"
///
/// [[pending]]
/// check = "person.address"
/// added = "2026-10-01"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpectedFailures {
    /// Checks whose failure is accepted for now.
    #[serde(default)]
    pub known: Vec<FailureEntry>,
    /// Checks expected to start passing once a fix lands.
    #[serde(default)]
    pub pending: Vec<FailureEntry>,
}

/// One check that may fail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEntry {
    /// Name the check was verified under.
    pub check: String,
    /// Why the check is allowed to fail.
    #[serde(default)]
    pub reason: Option<String>,
    /// When the entry was added, as `YYYY-MM-DD`.
    #[serde(default)]
    pub added: Option<String>,
    /// Tracking issue for the fix.
    #[serde(default)]
    pub issue: Option<String>,
}

/// How a failed check is classified against [`ExpectedFailures`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureState {
    /// Listed under `known`.
    Known,
    /// Listed under `pending`.
    Pending,
    /// Not listed; the failure is a regression.
    Regression,
}

impl ExpectedFailures {
    /// Read the expected failures for a test suite. A missing file allows none.
    pub fn load(path: &Path) -> AssertResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| AssertError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| AssertError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Parse an expected-failures document.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Classify a failure of the check named `check`.
    pub fn is_expected(&self, check: &str) -> FailureState {
        if self.known.iter().any(|entry| entry.check == check) {
            return FailureState::Known;
        }

        if self.pending.iter().any(|entry| entry.check == check) {
            return FailureState::Pending;
        }

        FailureState::Regression
    }

    /// Number of checks allowed to fail, known and pending together.
    pub fn count(&self) -> usize {
        self.known.len() + self.pending.len()
    }

    /// The entry that allows `check` to fail, if any.
    pub fn get_entry(&self, check: &str) -> Option<&FailureEntry> {
        self.known
            .iter()
            .chain(self.pending.iter())
            .find(|entry| entry.check == check)
    }
}
