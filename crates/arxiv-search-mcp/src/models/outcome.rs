//! Result shapes returned by a search.

use serde::{Deserialize, Serialize};

/// Marker for the `status` field of a [`FailureResult`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureStatus {
    #[default]
    Failed,
}

/// Uniform failure record: `{"status": "failed", "reason": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureResult {
    pub status: FailureStatus,
    pub reason: String,
}

impl FailureResult {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { status: FailureStatus::Failed, reason: reason.into() }
    }
}

/// Outcome of one search call.
///
/// Serializes untagged: either the upstream JSON as received, or a
/// [`FailureResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    /// Upstream response body, unmodified.
    Found(serde_json::Value),
    /// The call could not be completed.
    Failed(FailureResult),
}

impl SearchOutcome {
    #[must_use]
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed(FailureResult::new(reason))
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Upstream body, if the call succeeded.
    #[must_use]
    pub const fn value(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Found(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Failure record, if the call failed.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureResult> {
        match self {
            Self::Found(_) => None,
            Self::Failed(failure) => Some(failure),
        }
    }
}
