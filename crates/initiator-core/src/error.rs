//! Unified error handling for Initiator Core.
//!
//! Wraps domain and application errors behind one type that carries a
//! display category and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Initiator Core operations.
#[derive(Debug, Error, Clone)]
pub enum InitiatorError {
    /// Validation failures raised before any side effect.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Orchestration failures (filesystem, processes, prompts, steps).
    #[error(transparent)]
    Application(#[from] ApplicationError),
}

impl InitiatorError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// True when the user declined to continue.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Application(ApplicationError::Cancelled { .. }))
    }
}

/// Error categories for UI display and exit code mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input, rejected before anything touched the disk.
    Validation,
    /// A precondition on the environment did not hold (not a directory, declined prompt).
    Precondition,
    NotFound,
    /// An external tool or build step failed.
    Execution,
    /// Filesystem or state failures that are not the user's doing.
    Internal,
}

/// Convenient result type alias.
pub type InitiatorResult<T> = Result<T, InitiatorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_errors_keep_their_category() {
        let err: InitiatorError = DomainError::InvalidName {
            name: "a b".into(),
            reason: "whitespace".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(!err.suggestions().is_empty());
    }

    #[test]
    fn cancelled_is_detected() {
        let err: InitiatorError = ApplicationError::Cancelled {
            reason: "declined".into(),
        }
        .into();

        assert!(err.is_cancelled());
        assert_eq!(err.category(), ErrorCategory::Precondition);
    }

    #[test]
    fn step_failures_are_execution_errors() {
        let err: InitiatorError = ApplicationError::StepFailed {
            step: "Initialize Go module".into(),
            index: 1,
            total: 5,
            target: PathBuf::from("/tmp/demo"),
            reason: "boom".into(),
        }
        .into();

        assert_eq!(err.category(), ErrorCategory::Execution);
        assert!(err.to_string().contains("Initialize Go module"));
    }
}
