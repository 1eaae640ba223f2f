//! Reads the security asset bundle from a directory of PEM files.

use std::{fs, path::Path};

use tracing::{debug, instrument};

use stackplan_core::{
    application::{ApplicationError, ports::AssetSource},
    domain::{AssetName, SecurityAssetBundle},
    error::StackplanResult,
};

/// Loads the eight fixed artifacts from `<dir>/<file name>`.
///
/// All-or-nothing: the first file that cannot be read aborts the load.
/// Contents are taken as raw bytes and never parsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryAssetLoader;

impl DirectoryAssetLoader {
    pub fn new() -> Self {
        Self
    }
}

impl AssetSource for DirectoryAssetLoader {
    #[instrument(skip(self), fields(dir = %dir.display()))]
    fn load(&self, dir: &Path) -> StackplanResult<SecurityAssetBundle> {
        let mut bundle = SecurityAssetBundle::new();
        for name in AssetName::ALL {
            let path = dir.join(name.file_name());
            let contents = fs::read(&path).map_err(|e| ApplicationError::AssetLoadFailed {
                path: path.clone(),
                reason: e.to_string(),
            })?;
            debug!(asset = %name, bytes = contents.len(), "Asset read");
            bundle.insert(name, contents);
        }
        Ok(bundle)
    }
}
