//! In-memory template source for testing.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use stackplan_core::{
    application::{ApplicationError, ports::TemplateSource},
    error::StackplanResult,
};

/// Thread-safe in-memory template source.
#[derive(Debug, Clone, Default)]
pub struct MemoryTemplateSource {
    inner: Arc<RwLock<HashMap<PathBuf, String>>>,
}

impl MemoryTemplateSource {
    /// Create a new empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_template(self, path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        // A fresh source cannot be poisoned.
        let _ = self.insert(path, text);
        self
    }

    /// Add or replace a template.
    pub fn insert(&self, path: impl Into<PathBuf>, text: impl Into<String>) -> StackplanResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.insert(path.into(), text.into());
        Ok(())
    }

    /// Get the number of templates.
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.len()).unwrap_or(0)
    }

    /// Check if source is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TemplateSource for MemoryTemplateSource {
    fn read(&self, path: &Path) -> StackplanResult<String> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::LockPoisoned)?;
        inner.get(path).cloned().ok_or_else(|| {
            ApplicationError::TemplateReadFailed {
                path: path.to_path_buf(),
                reason: "no such template".into(),
            }
            .into()
        })
    }
}
