//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::{debug, instrument};

use stackplan_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{StackplanError, StackplanResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> StackplanResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    #[instrument(skip(self, content), fields(path = %path.display(), bytes = content.len()))]
    fn write_file(&self, path: &Path, content: &[u8]) -> StackplanResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;
        debug!("File written");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> StackplanError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {operation}: {e}"),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_bytes_under_new_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("out/stacks");
        let file = dir.join("stack.json");
        let fs = LocalFilesystem::new();

        fs.create_dir_all(&dir).unwrap();
        fs.write_file(&file, b"{}").unwrap();

        assert!(fs.exists(&file));
        assert_eq!(std::fs::read(&file).unwrap(), b"{}");
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let temp = TempDir::new().unwrap();
        let err = LocalFilesystem::new()
            .write_file(&temp.path().join("missing/stack.json"), b"{}")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to write file"));
    }
}
