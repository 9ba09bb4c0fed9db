use serde::Serialize;
use thiserror::Error;

use liturgia_core::RecordError;

/// The only failure an engine operation surfaces to its caller: a source
/// response that could not be decoded at all.
///
/// Everything else (bad input, an unreachable source, single bad rows)
/// degrades into a [`Resolution`] carrying [`CalendarIssue`]s.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Event source broke its contract: {0}")]
    ContractViolation(#[from] RecordError),
}

/// A recoverable problem met while answering a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarIssue {
    /// The given date could not be read; today was used instead.
    InvalidDateFormat { input: String },
    /// The event source failed; the answer holds no events.
    EventSourceUnavailable { reason: String },
    /// A record broke the event contract and was left out of the answer.
    MalformedRecord { reason: String },
}

/// A value together with the issues met while producing it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution<T> {
    pub value: T,
    pub issues: Vec<CalendarIssue>,
}

impl<T> Resolution<T> {
    pub fn clean(value: T) -> Self {
        Self {
            value,
            issues: Vec::new(),
        }
    }

    pub fn degraded(value: T, issue: CalendarIssue) -> Self {
        Self {
            value,
            issues: vec![issue],
        }
    }

    pub fn is_degraded(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Resolution<U> {
        Resolution {
            value: f(self.value),
            issues: self.issues,
        }
    }

    /// Split off the value, moving the issues into `issues`.
    pub fn take(self, issues: &mut Vec<CalendarIssue>) -> T {
        issues.extend(self.issues);
        self.value
    }
}
