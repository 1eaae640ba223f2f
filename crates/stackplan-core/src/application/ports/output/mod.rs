//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stackplan-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{ClusterDescription, SecurityAssetBundle};
use crate::error::StackplanResult;

/// Port for loading a cluster description document.
///
/// Implemented by:
/// - `stackplan_adapters::YamlDescriptionLoader`
///
/// Implementations return the *default-filled* description: built-in
/// defaults overlaid with whatever the document sets. They do not validate
/// the address plan.
#[cfg_attr(test, mockall::automock)]
pub trait DescriptionSource: Send + Sync {
    fn load(&self, path: &Path) -> StackplanResult<ClusterDescription>;
}

/// Port for loading the security artifacts that get packaged into the config.
///
/// Implemented by:
/// - `stackplan_adapters::DirectoryAssetLoader`
#[cfg_attr(test, mockall::automock)]
pub trait AssetSource: Send + Sync {
    fn load(&self, dir: &Path) -> StackplanResult<SecurityAssetBundle>;
}

/// Port for reading template text.
///
/// Implemented by:
/// - `stackplan_adapters::LocalTemplateSource` (production)
/// - `stackplan_adapters::MemoryTemplateSource` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateSource: Send + Sync {
    fn read(&self, path: &Path) -> StackplanResult<String>;
}

/// Port for template rendering.
///
/// Implemented by:
/// - `stackplan_adapters::SimpleRenderer` (placeholder substitution)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `data` as the only context.
    ///
    /// # Arguments
    ///
    /// * `name` - Template name used in error messages
    /// * `template` - Raw template text
    /// * `data` - Rendering data object
    fn render(
        &self,
        name: &str,
        template: &str,
        data: &serde_json::Value,
    ) -> StackplanResult<String>;
}

/// Port for filesystem operations on rendered output.
///
/// Implemented by:
/// - `stackplan_adapters::LocalFilesystem` (production)
/// - `stackplan_adapters::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StackplanResult<()>;

    /// Write bytes to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &[u8]) -> StackplanResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}
