//! Plan Service - load, validate, and resolve a cluster description.
//!
//! Separated from StackService so that validation can run without any
//! template or renderer adapters configured.

use std::path::Path;

use tracing::{debug, info, instrument};

use crate::{
    application::ports::{AssetSource, DescriptionSource},
    domain::{AddressPlan, AddressPlanValidator, ClusterDescription, ConfigResolver, ResolvedConfig},
    error::{StackplanError, StackplanResult},
};

/// Service for description validation and config resolution.
pub struct PlanService {
    descriptions: Box<dyn DescriptionSource>,
    assets: Box<dyn AssetSource>,
}

impl PlanService {
    /// Create a new plan service.
    pub fn new(descriptions: Box<dyn DescriptionSource>, assets: Box<dyn AssetSource>) -> Self {
        Self {
            descriptions,
            assets,
        }
    }

    /// Load a description and run the pre-flight address plan check.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn validate(&self, path: &Path) -> StackplanResult<(ClusterDescription, AddressPlan)> {
        let description = self.descriptions.load(path)?;
        let plan = AddressPlanValidator::validate(&description).map_err(StackplanError::Domain)?;
        info!(
            cluster = %description.cluster_name,
            vpc = %plan.vpc,
            pods = %plan.pods,
            services = %plan.services,
            "Address plan is valid"
        );
        Ok((description, plan))
    }

    /// Validate, load assets, and resolve.
    ///
    /// Assets are only read once the plan has passed.
    #[instrument(skip(self), fields(path = %path.display(), assets = %assets_dir.display()))]
    pub fn resolve(&self, path: &Path, assets_dir: &Path) -> StackplanResult<ResolvedConfig> {
        let (description, _) = self.validate(path)?;

        let bundle = self.assets.load(assets_dir)?;
        debug!(count = bundle.len(), "Security assets loaded");

        let config =
            ConfigResolver::resolve(&description, &bundle).map_err(StackplanError::Domain)?;
        debug!(
            encoded_len = config.tls_config().encoded_len(),
            "Security assets compacted"
        );
        Ok(config)
    }
}
