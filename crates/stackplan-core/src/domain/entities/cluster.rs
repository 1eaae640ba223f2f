//! The `ClusterDescription` aggregate and its document overlay.
//!
//! A description is built in two explicit steps:
//!
//! 1. [`ClusterDescription::default`] produces the built-in defaults.
//! 2. [`ClusterDescription::overlay`] applies a [`ClusterOverrides`] value
//!    (the schema-driven image of the user's document) and returns a *new*
//!    description. Present override fields win field-by-field; absent fields
//!    keep the default.
//!
//! Neither step validates. Validation is a separate pre-flight gate, see
//! [`crate::domain::AddressPlanValidator`].
//!
//! # Two serde shapes
//!
//! - [`ClusterOverrides`] uses the *document* keys (`vpcCIDR`,
//!   `externalDNSName`, ...). Unknown document keys are ignored.
//! - [`ClusterDescription`] serializes with the *rendering* keys (`VPCCIDR`,
//!   `ExternalDNSName`, ...). Those keys are the contract with the template
//!   files; renaming one is a breaking change.

use serde::{Deserialize, Serialize};

// ── Aggregate ─────────────────────────────────────────────────────────────────

/// The user-facing declaration of a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterDescription {
    // identity
    #[serde(rename = "ClusterName")]
    pub cluster_name: String,
    #[serde(rename = "ExternalDNSName")]
    pub external_dns_name: String,
    #[serde(rename = "KeyName")]
    pub key_name: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "AvailabilityZone")]
    pub availability_zone: String,
    #[serde(rename = "ReleaseChannel")]
    pub release_channel: String,
    /// Machine image for every node. Empty unless the document or the
    /// caller sets it; nothing derives it from the release channel.
    #[serde(rename = "AMI")]
    pub ami: String,

    // compute
    #[serde(rename = "ControllerInstanceType")]
    pub controller_instance_type: String,
    #[serde(rename = "ControllerRootVolumeSize")]
    pub controller_root_volume_size: u32,
    #[serde(rename = "WorkerCount")]
    pub worker_count: u32,
    #[serde(rename = "WorkerInstanceType")]
    pub worker_instance_type: String,
    #[serde(rename = "WorkerRootVolumeSize")]
    pub worker_root_volume_size: u32,
    #[serde(rename = "WorkerSpotPrice")]
    pub worker_spot_price: String,

    // addressing
    #[serde(rename = "VPCCIDR")]
    pub vpc_cidr: String,
    #[serde(rename = "InstanceCIDR")]
    pub instance_cidr: String,
    #[serde(rename = "ControllerIP")]
    pub controller_ip: String,
    #[serde(rename = "PodCIDR")]
    pub pod_cidr: String,
    #[serde(rename = "ServiceCIDR")]
    pub service_cidr: String,
    #[serde(rename = "KubernetesServiceIP")]
    pub kubernetes_service_ip: String,
    #[serde(rename = "DNSServiceIP")]
    pub dns_service_ip: String,
    #[serde(rename = "K8sVer")]
    pub kubernetes_version: String,
}

impl Default for ClusterDescription {
    fn default() -> Self {
        Self {
            cluster_name: "kubernetes".into(),
            external_dns_name: String::new(),
            key_name: String::new(),
            region: String::new(),
            availability_zone: String::new(),
            release_channel: "alpha".into(),
            ami: String::new(),
            controller_instance_type: "m3.medium".into(),
            controller_root_volume_size: 30,
            worker_count: 1,
            worker_instance_type: "m3.medium".into(),
            worker_root_volume_size: 30,
            worker_spot_price: String::new(),
            vpc_cidr: "10.0.0.0/16".into(),
            instance_cidr: "10.0.0.0/24".into(),
            controller_ip: "10.0.0.50".into(),
            pod_cidr: "10.2.0.0/16".into(),
            service_cidr: "10.3.0.0/24".into(),
            kubernetes_service_ip: "10.3.0.1".into(),
            dns_service_ip: "10.3.0.10".into(),
            kubernetes_version: "v1.1.4".into(),
        }
    }
}

impl ClusterDescription {
    /// Return a new description with every present override applied.
    ///
    /// `self` is left untouched.
    pub fn overlay(&self, overrides: ClusterOverrides) -> Self {
        let base = self.clone();
        Self {
            cluster_name: overrides.cluster_name.unwrap_or(base.cluster_name),
            external_dns_name: overrides
                .external_dns_name
                .unwrap_or(base.external_dns_name),
            key_name: overrides.key_name.unwrap_or(base.key_name),
            region: overrides.region.unwrap_or(base.region),
            availability_zone: overrides
                .availability_zone
                .unwrap_or(base.availability_zone),
            release_channel: overrides.release_channel.unwrap_or(base.release_channel),
            ami: overrides.ami.unwrap_or(base.ami),
            controller_instance_type: overrides
                .controller_instance_type
                .unwrap_or(base.controller_instance_type),
            controller_root_volume_size: overrides
                .controller_root_volume_size
                .unwrap_or(base.controller_root_volume_size),
            worker_count: overrides.worker_count.unwrap_or(base.worker_count),
            worker_instance_type: overrides
                .worker_instance_type
                .unwrap_or(base.worker_instance_type),
            worker_root_volume_size: overrides
                .worker_root_volume_size
                .unwrap_or(base.worker_root_volume_size),
            worker_spot_price: overrides
                .worker_spot_price
                .unwrap_or(base.worker_spot_price),
            vpc_cidr: overrides.vpc_cidr.unwrap_or(base.vpc_cidr),
            instance_cidr: overrides.instance_cidr.unwrap_or(base.instance_cidr),
            controller_ip: overrides.controller_ip.unwrap_or(base.controller_ip),
            pod_cidr: overrides.pod_cidr.unwrap_or(base.pod_cidr),
            service_cidr: overrides.service_cidr.unwrap_or(base.service_cidr),
            kubernetes_service_ip: overrides
                .kubernetes_service_ip
                .unwrap_or(base.kubernetes_service_ip),
            dns_service_ip: overrides.dns_service_ip.unwrap_or(base.dns_service_ip),
            kubernetes_version: overrides
                .kubernetes_version
                .unwrap_or(base.kubernetes_version),
        }
    }
}

// ── Overrides ─────────────────────────────────────────────────────────────────

/// Schema-driven image of a cluster description document.
///
/// Every field is optional: a missing key keeps the default value. Keys not
/// listed here are ignored rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterOverrides {
    #[serde(rename = "clusterName", skip_serializing_if = "Option::is_none")]
    pub cluster_name: Option<String>,
    #[serde(rename = "externalDNSName", skip_serializing_if = "Option::is_none")]
    pub external_dns_name: Option<String>,
    #[serde(rename = "keyName", skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,
    #[serde(rename = "region", skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(rename = "availabilityZone", skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(rename = "releaseChannel", skip_serializing_if = "Option::is_none")]
    pub release_channel: Option<String>,
    #[serde(rename = "ami", skip_serializing_if = "Option::is_none")]
    pub ami: Option<String>,
    #[serde(
        rename = "controllerInstanceType",
        skip_serializing_if = "Option::is_none"
    )]
    pub controller_instance_type: Option<String>,
    #[serde(
        rename = "controllerRootVolumeSize",
        skip_serializing_if = "Option::is_none"
    )]
    pub controller_root_volume_size: Option<u32>,
    #[serde(rename = "workerCount", skip_serializing_if = "Option::is_none")]
    pub worker_count: Option<u32>,
    #[serde(rename = "workerInstanceType", skip_serializing_if = "Option::is_none")]
    pub worker_instance_type: Option<String>,
    #[serde(
        rename = "workerRootVolumeSize",
        skip_serializing_if = "Option::is_none"
    )]
    pub worker_root_volume_size: Option<u32>,
    #[serde(rename = "workerSpotPrice", skip_serializing_if = "Option::is_none")]
    pub worker_spot_price: Option<String>,
    #[serde(rename = "vpcCIDR", skip_serializing_if = "Option::is_none")]
    pub vpc_cidr: Option<String>,
    #[serde(rename = "instanceCIDR", skip_serializing_if = "Option::is_none")]
    pub instance_cidr: Option<String>,
    #[serde(rename = "controllerIP", skip_serializing_if = "Option::is_none")]
    pub controller_ip: Option<String>,
    #[serde(rename = "podCIDR", skip_serializing_if = "Option::is_none")]
    pub pod_cidr: Option<String>,
    #[serde(rename = "serviceCIDR", skip_serializing_if = "Option::is_none")]
    pub service_cidr: Option<String>,
    #[serde(rename = "kubernetesServiceIP", skip_serializing_if = "Option::is_none")]
    pub kubernetes_service_ip: Option<String>,
    #[serde(rename = "dnsServiceIP", skip_serializing_if = "Option::is_none")]
    pub dns_service_ip: Option<String>,
    #[serde(rename = "kubernetesVersion", skip_serializing_if = "Option::is_none")]
    pub kubernetes_version: Option<String>,
}

impl From<&ClusterDescription> for ClusterOverrides {
    /// Every field present; used to write a description back out as a document.
    fn from(d: &ClusterDescription) -> Self {
        Self {
            cluster_name: Some(d.cluster_name.clone()),
            external_dns_name: Some(d.external_dns_name.clone()),
            key_name: Some(d.key_name.clone()),
            region: Some(d.region.clone()),
            availability_zone: Some(d.availability_zone.clone()),
            release_channel: Some(d.release_channel.clone()),
            ami: Some(d.ami.clone()),
            controller_instance_type: Some(d.controller_instance_type.clone()),
            controller_root_volume_size: Some(d.controller_root_volume_size),
            worker_count: Some(d.worker_count),
            worker_instance_type: Some(d.worker_instance_type.clone()),
            worker_root_volume_size: Some(d.worker_root_volume_size),
            worker_spot_price: Some(d.worker_spot_price.clone()),
            vpc_cidr: Some(d.vpc_cidr.clone()),
            instance_cidr: Some(d.instance_cidr.clone()),
            controller_ip: Some(d.controller_ip.clone()),
            pod_cidr: Some(d.pod_cidr.clone()),
            service_cidr: Some(d.service_cidr.clone()),
            kubernetes_service_ip: Some(d.kubernetes_service_ip.clone()),
            dns_service_ip: Some(d.dns_service_ip.clone()),
            kubernetes_version: Some(d.kubernetes_version.clone()),
        }
    }
}
