//! YAML cluster description loader.
//!
//! The document is deserialised into [`ClusterOverrides`] (every key
//! optional, unknown keys ignored) and overlaid on the built-in defaults.
//! An empty document, or one holding only comments, yields the defaults.
//!
//! ```yaml
//! clusterName: prod
//! externalDNSName: k8s.example.com
//! keyName: ops
//! region: us-west-2
//! availabilityZone: us-west-2a
//! workerCount: 3
//! ```

use std::{fs, path::Path};

use tracing::{debug, instrument};

use stackplan_core::{
    application::{ApplicationError, ports::DescriptionSource},
    domain::{ClusterDescription, ClusterOverrides},
    error::StackplanResult,
};

/// Loads cluster descriptions from YAML files.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlDescriptionLoader;

impl YamlDescriptionLoader {
    /// Loader that overlays documents on [`ClusterDescription::default`].
    pub fn new() -> Self {
        Self
    }

    /// Parse description text that was already read from `path`.
    ///
    /// `path` is only used in error messages.
    pub fn parse(&self, path: &Path, text: &str) -> StackplanResult<ClusterDescription> {
        let load_failed = |reason: String| ApplicationError::LoadFailed {
            path: path.to_path_buf(),
            reason,
        };

        let document: serde_yaml::Value =
            serde_yaml::from_str(text).map_err(|e| load_failed(e.to_string()))?;

        if document.is_null() {
            debug!("Empty description document, using defaults");
            return Ok(ClusterDescription::default());
        }

        let overrides: ClusterOverrides =
            serde_yaml::from_value(document).map_err(|e| load_failed(e.to_string()))?;
        Ok(ClusterDescription::default().overlay(overrides))
    }
}

impl DescriptionSource for YamlDescriptionLoader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> StackplanResult<ClusterDescription> {
        let text = fs::read_to_string(path).map_err(|e| ApplicationError::LoadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let description = self.parse(path, &text)?;
        debug!(cluster = %description.cluster_name, "Description loaded");
        Ok(description)
    }
}
