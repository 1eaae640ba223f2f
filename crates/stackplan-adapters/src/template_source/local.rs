//! Reads template text from disk.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument};

use stackplan_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::StackplanResult,
};

/// Production template source using `std::fs`.
///
/// Relative paths are resolved against `root` when one is set, otherwise
/// against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalTemplateSource {
    root: Option<PathBuf>,
}

impl LocalTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative template paths against `root`.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.root {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl TemplateSource for LocalTemplateSource {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn read(&self, path: &Path) -> StackplanResult<String> {
        let full = self.resolve(path);
        let text = fs::read_to_string(&full).map_err(|e| ApplicationError::TemplateReadFailed {
            path: full.clone(),
            reason: e.to_string(),
        })?;
        debug!(bytes = text.len(), "Template read");
        Ok(text)
    }
}
