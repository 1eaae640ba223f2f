//! Unified error handling for Stackplan Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with rich context and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::{DomainError, PlanRule};

/// Root error type for Stackplan Core operations.
#[derive(Debug, Error, Clone)]
pub enum StackplanError {
    /// Errors from the domain layer (address plan and packaging rules).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Unexpected internal errors (bugs).
    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl StackplanError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Run 'stackplan config list' to see the effective settings".into(),
            ],
            Self::Internal { .. } => vec!["This appears to be a bug in Stackplan".into()],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// The violated address plan rule, when this is an invalid-plan error.
    pub fn plan_rule(&self) -> Option<PlanRule> {
        match self {
            Self::Domain(e) => e.plan_rule(),
            _ => None,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

/// Convenient result type alias.
pub type StackplanResult<T> = Result<T, StackplanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_category_is_carried_over() {
        let err: StackplanError = DomainError::MissingAsset { asset: "ca.pem" }.into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.plan_rule(), None);
    }

    #[test]
    fn plan_rule_exposed_for_invalid_plans() {
        let err: StackplanError = DomainError::MissingRequiredField { field: "keyName" }.into();
        assert_eq!(err.plan_rule(), Some(PlanRule::MissingField));
        assert_eq!(err.to_string(), "keyName must be set");
    }

    #[test]
    fn application_error_keeps_its_suggestions() {
        let err: StackplanError = ApplicationError::OutputExists {
            path: "stack.json".into(),
        }
        .into();
        assert!(err.suggestions().iter().any(|s| s.contains("--force")));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }
}
