//! Config resolution: attach derived endpoints and packaged assets.

use crate::domain::{
    entities::{ClusterDescription, Endpoints, ResolvedConfig, SecurityAssetBundle},
    error::DomainError,
};

/// Builds the [`ResolvedConfig`] handed to the rendering collaborator.
///
/// Expects a description that already passed
/// [`crate::domain::AddressPlanValidator`]; it does not re-validate.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Resolve `description` against `assets`.
    ///
    /// The description is copied; the caller keeps its own value. A
    /// compaction failure aborts with no partial result.
    pub fn resolve(
        description: &ClusterDescription,
        assets: &SecurityAssetBundle,
    ) -> Result<ResolvedConfig, DomainError> {
        let endpoints = Endpoints::derive(description);
        let tls_config = assets.compact()?;
        Ok(ResolvedConfig::new(
            description.clone(),
            endpoints,
            tls_config,
        ))
    }
}
