//! Infrastructure adapters for Stackplan.
//!
//! This crate implements the ports defined in `stackplan-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod assets;
pub mod description;
pub mod filesystem;
pub mod renderer;
pub mod template_source;

// Re-export commonly used adapters
pub use assets::DirectoryAssetLoader;
pub use description::YamlDescriptionLoader;
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::{PlaceholderError, SimpleRenderer};
pub use template_source::{LocalTemplateSource, MemoryTemplateSource};
