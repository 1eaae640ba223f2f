//! `ResolvedConfig`: a validated description plus everything derived from it.

use serde::Serialize;

use crate::domain::entities::{assets::CompactAssetBundle, cluster::ClusterDescription};

/// Port of the coordination store (etcd) on the controller.
pub const ETCD_PORT: u16 = 2379;
/// Plaintext API server port on the controller.
pub const API_INSECURE_PORT: u16 = 8080;
/// TLS API server port on the controller.
pub const API_SECURE_PORT: u16 = 443;

// ── Endpoints ─────────────────────────────────────────────────────────────────

/// Service URLs derived from the controller address and external DNS name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    #[serde(rename = "ETCDEndpoints")]
    pub etcd: String,
    #[serde(rename = "APIServers")]
    pub api_servers: String,
    #[serde(rename = "SecureAPIServers")]
    pub secure_api_servers: String,
    #[serde(rename = "APIServerEndpoint")]
    pub external_api: String,
}

impl Endpoints {
    /// Pure string formatting; no lookups.
    pub fn derive(description: &ClusterDescription) -> Self {
        let controller = &description.controller_ip;
        Self {
            etcd: format!("http://{controller}:{ETCD_PORT}"),
            api_servers: format!("http://{controller}:{API_INSECURE_PORT}"),
            secure_api_servers: format!("https://{controller}:{API_SECURE_PORT}"),
            external_api: format!("https://{}", description.external_dns_name),
        }
    }
}

// ── ResolvedConfig ────────────────────────────────────────────────────────────

/// The data object handed to the rendering collaborator.
///
/// Serializes flat: the description's rendering keys, the four endpoint
/// keys, and `TLSConfig` holding the compacted assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    #[serde(flatten)]
    cluster: ClusterDescription,
    #[serde(flatten)]
    endpoints: Endpoints,
    #[serde(rename = "TLSConfig")]
    tls_config: CompactAssetBundle,
}

impl ResolvedConfig {
    pub(crate) fn new(
        cluster: ClusterDescription,
        endpoints: Endpoints,
        tls_config: CompactAssetBundle,
    ) -> Self {
        Self {
            cluster,
            endpoints,
            tls_config,
        }
    }

    pub fn cluster(&self) -> &ClusterDescription {
        &self.cluster
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn tls_config(&self) -> &CompactAssetBundle {
        &self.tls_config
    }

    /// Replace the machine image published as `AMI`.
    pub fn with_ami(mut self, ami: impl Into<String>) -> Self {
        self.cluster.ami = ami.into();
        self
    }

    /// Consume the config and hand back the description it wraps.
    pub fn into_cluster(self) -> ClusterDescription {
        self.cluster
    }
}
