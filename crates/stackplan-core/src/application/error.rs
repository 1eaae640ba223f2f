//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Address plan and packaging errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The description document could not be read or parsed.
    #[error("Failed to load {path}: {reason}")]
    LoadFailed { path: PathBuf, reason: String },

    /// A security artifact could not be read from the asset directory.
    #[error("Failed to read security asset {path}: {reason}")]
    AssetLoadFailed { path: PathBuf, reason: String },

    /// A template file could not be read.
    #[error("Failed to read template {path}: {reason}")]
    TemplateReadFailed { path: PathBuf, reason: String },

    /// Template rendering failed.
    #[error("Failed to render {template}: {reason}")]
    RenderingFailed { template: String, reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Rendered output already exists and overwriting was not requested.
    #[error("Output already exists at {path}")]
    OutputExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LoadFailed { path, .. } => vec![
                format!("Check that {} exists and is valid YAML", path.display()),
                "Run 'stackplan init' to write a starting description".into(),
            ],
            Self::AssetLoadFailed { path, .. } => vec![
                format!("Missing or unreadable: {}", path.display()),
                "Point --assets-dir at the directory holding the generated certificates".into(),
            ],
            Self::TemplateReadFailed { path, .. } => vec![
                format!("Failed to read: {}", path.display()),
                "Check the template paths in your configuration".into(),
            ],
            Self::RenderingFailed { template, .. } => vec![
                format!("Check the placeholders used in {template}"),
                "Placeholder names must match the rendering data keys exactly".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::OutputExists { path } => vec![
                format!("File already exists: {}", path.display()),
                "Use --force to overwrite".into(),
            ],
            Self::LockPoisoned => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LoadFailed { .. } => ErrorCategory::Validation,
            Self::AssetLoadFailed { .. } | Self::TemplateReadFailed { .. } => {
                ErrorCategory::NotFound
            }
            Self::RenderingFailed { .. } => ErrorCategory::Validation,
            Self::FilesystemError { .. } | Self::LockPoisoned => ErrorCategory::Internal,
            Self::OutputExists { .. } => ErrorCategory::Validation,
        }
    }
}
