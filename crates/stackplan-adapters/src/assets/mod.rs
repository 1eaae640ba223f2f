//! Security asset adapters.

mod directory;

pub use directory::DirectoryAssetLoader;
