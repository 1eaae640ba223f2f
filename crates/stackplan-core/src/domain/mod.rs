// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Stackplan.
//!
//! This module contains pure logic: address plan validation, description
//! defaults and overlay, endpoint derivation, and asset compaction. All
//! document loading, template text, and rendering concerns are handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Observability belongs to the application and CLI layers
//! - **Immutable values**: Descriptions and resolved configs are never
//!   mutated after construction
//!
// Public API - what the world sees
pub mod compaction;
pub mod entities;
pub mod error;
pub mod value_objects;

mod resolver;
mod validation;

// Re-exports for convenience
pub use entities::{
    assets::{CompactAssetBundle, SecurityAssetBundle},
    cluster::{ClusterDescription, ClusterOverrides},
    resolved::{Endpoints, ResolvedConfig},
};

pub use error::{DomainError, ErrorCategory, PlanRule};

pub use value_objects::{AssetName, Role};

pub use resolver::ConfigResolver;
pub use validation::{AddressPlan, AddressPlanValidator};

#[cfg(test)]
mod tests {
    use super::*;

    fn described() -> ClusterDescription {
        ClusterDescription::default().overlay(ClusterOverrides {
            external_dns_name: Some("k8s.example.com".into()),
            key_name: Some("ops".into()),
            region: Some("us-west-2".into()),
            availability_zone: Some("us-west-2a".into()),
            ..ClusterOverrides::default()
        })
    }

    fn bundle() -> SecurityAssetBundle {
        AssetName::ALL
            .into_iter()
            .map(|name| (name, format!("pem for {name}").into_bytes()))
            .collect()
    }

    // ========================================================================
    // Value Object Tests
    // ========================================================================

    #[test]
    fn asset_names_map_files_to_template_keys() {
        assert_eq!(AssetName::CaCert.file_name(), "ca.pem");
        assert_eq!(AssetName::ApiServerKey.template_key(), "APIServerKey");
        assert_eq!(AssetName::AdminKey.to_string(), "admin-key.pem");
    }

    #[test]
    fn role_user_data_keys() {
        assert_eq!(Role::Worker.user_data_key(), "UserDataWorker");
        assert_eq!(Role::Controller.user_data_key(), "UserDataController");
    }

    // ========================================================================
    // Description Tests
    // ========================================================================

    #[test]
    fn defaults_match_documented_plan() {
        let d = ClusterDescription::default();
        assert_eq!(d.cluster_name, "kubernetes");
        assert_eq!(d.vpc_cidr, "10.0.0.0/16");
        assert_eq!(d.dns_service_ip, "10.3.0.10");
        assert_eq!(d.worker_count, 1);
        assert!(d.external_dns_name.is_empty());
    }

    #[test]
    fn overlay_wins_field_by_field() {
        let base = ClusterDescription::default();
        let merged = base.overlay(ClusterOverrides {
            worker_count: Some(3),
            pod_cidr: Some("172.16.0.0/16".into()),
            ..ClusterOverrides::default()
        });

        assert_eq!(merged.worker_count, 3);
        assert_eq!(merged.pod_cidr, "172.16.0.0/16");
        assert_eq!(merged.service_cidr, base.service_cidr);
        // the base value is untouched
        assert_eq!(base.worker_count, 1);
    }

    #[test]
    fn overlay_of_full_overrides_reproduces_description() {
        let d = described();
        let again = ClusterDescription::default().overlay(ClusterOverrides::from(&d));
        assert_eq!(again, d);
    }

    #[test]
    fn ami_defaults_to_empty_and_follows_document() {
        assert!(ClusterDescription::default().ami.is_empty());

        let d = described().overlay(ClusterOverrides {
            ami: Some("ami-0123abcd".into()),
            ..ClusterOverrides::default()
        });
        assert_eq!(d.ami, "ami-0123abcd");
    }

    // ========================================================================
    // Resolver Tests
    // ========================================================================

    #[test]
    fn endpoints_derived_from_controller_and_dns_name() {
        let config = ConfigResolver::resolve(&described(), &bundle()).unwrap();
        let e = config.endpoints();
        assert_eq!(e.etcd, "http://10.0.0.50:2379");
        assert_eq!(e.api_servers, "http://10.0.0.50:8080");
        assert_eq!(e.secure_api_servers, "https://10.0.0.50:443");
        assert_eq!(e.external_api, "https://k8s.example.com");
    }

    #[test]
    fn resolve_copies_description() {
        let d = described();
        let config = ConfigResolver::resolve(&d, &bundle()).unwrap();
        assert_eq!(config.cluster(), &d);
        assert_eq!(config.into_cluster(), d);
    }

    #[test]
    fn resolve_fails_without_complete_bundle() {
        let partial = SecurityAssetBundle::new().with_asset(AssetName::CaCert, "ca");
        let err = ConfigResolver::resolve(&described(), &partial).unwrap_err();
        assert_eq!(err, DomainError::MissingAsset { asset: "ca-key.pem" });
        assert!(!err.is_invalid_plan());
    }

    #[test]
    fn with_ami_replaces_published_image() {
        let config = ConfigResolver::resolve(&described(), &bundle())
            .unwrap()
            .with_ami("ami-feedface");
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["AMI"], "ami-feedface");
        assert_eq!(config.cluster().cluster_name, "kubernetes");
    }

    #[test]
    fn resolved_config_serializes_flat_contract() {
        let config = ConfigResolver::resolve(&described(), &bundle()).unwrap();
        let value = serde_json::to_value(&config).unwrap();

        for key in [
            "ClusterName",
            "ExternalDNSName",
            "VPCCIDR",
            "ControllerIP",
            "K8sVer",
            "AMI",
            "WorkerCount",
            "ETCDEndpoints",
            "APIServers",
            "SecureAPIServers",
            "APIServerEndpoint",
        ] {
            assert!(value.get(key).is_some(), "missing key {key}");
        }
        assert_eq!(value["WorkerCount"], 1);
        assert_eq!(value["AMI"], "");
        assert_eq!(value["TLSConfig"].as_object().unwrap().len(), 8);
        assert!(value["TLSConfig"]["CACert"].is_string());
    }

    // ========================================================================
    // Error Tests
    // ========================================================================

    #[test]
    fn plan_errors_are_validation_category() {
        let err = DomainError::MissingRequiredField { field: "region" };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert_eq!(err.plan_rule(), Some(PlanRule::MissingField));
        assert!(err.suggestions().iter().any(|s| s.contains("region")));
    }

    #[test]
    fn plan_error_messages_name_offending_values() {
        let err = DomainError::PodServiceRangeOverlap {
            service_cidr: "10.2.0.0/24".into(),
            pod_cidr: "10.2.0.0/16".into(),
        };
        assert_eq!(
            err.to_string(),
            "serviceCIDR (10.2.0.0/24) overlaps with podCIDR (10.2.0.0/16)"
        );
    }

    #[test]
    fn missing_asset_is_not_found() {
        let err = DomainError::MissingAsset { asset: "ca.pem" };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert_eq!(err.plan_rule(), None);
    }
}
