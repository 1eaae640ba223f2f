//! Address plan validation.
//!
//! A cluster's networks must form one consistent containment hierarchy
//! before anything is provisioned:
//!
//! ```text
//! vpcCIDR ⊇ instanceCIDR ∋ controllerIP
//! podCIDR      (outside vpcCIDR, disjoint from serviceCIDR)
//! serviceCIDR  (outside vpcCIDR) ∋ kubernetesServiceIP, dnsServiceIP
//! ```
//!
//! Overlap is judged by *network address containment*: range B overlaps
//! range A when A contains B's network address. Two ranges that intersect
//! without either network address falling inside the other are not
//! detected.

use std::net::IpAddr;

use ipnetwork::IpNetwork;

use crate::domain::{entities::ClusterDescription, error::DomainError};

/// Parsed networks of a description that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressPlan {
    pub vpc: IpNetwork,
    pub instances: IpNetwork,
    pub controller: IpAddr,
    pub pods: IpNetwork,
    pub services: IpNetwork,
    pub kubernetes_service: IpAddr,
    pub dns_service: IpAddr,
}

/// Pre-flight gate for cluster descriptions.
///
/// Rules run in a fixed order and the first failure is returned; there is no
/// partial reporting.
pub struct AddressPlanValidator;

impl AddressPlanValidator {
    /// Check required fields, then the address plan.
    pub fn validate(description: &ClusterDescription) -> Result<AddressPlan, DomainError> {
        Self::check_required_fields(description)?;
        Self::check_address_plan(description)
    }

    /// Identity fields with no usable default.
    pub fn check_required_fields(d: &ClusterDescription) -> Result<(), DomainError> {
        let required = [
            ("externalDNSName", &d.external_dns_name),
            ("keyName", &d.key_name),
            ("region", &d.region),
            ("availabilityZone", &d.availability_zone),
            ("clusterName", &d.cluster_name),
        ];
        match required.into_iter().find(|(_, value)| value.is_empty()) {
            Some((field, _)) => Err(DomainError::MissingRequiredField { field }),
            None => Ok(()),
        }
    }

    /// Containment rules only; identity fields are not looked at.
    pub fn check_address_plan(d: &ClusterDescription) -> Result<AddressPlan, DomainError> {
        let vpc = parse_cidr("vpcCIDR", &d.vpc_cidr)?;
        let instances = parse_cidr("instanceCIDR", &d.instance_cidr)?;
        if !vpc.contains(instances.network()) {
            return Err(DomainError::InstanceRangeOutsideVpc {
                vpc_cidr: d.vpc_cidr.clone(),
                instance_cidr: d.instance_cidr.clone(),
            });
        }

        let controller = parse_ip("controllerIP", &d.controller_ip)?;
        if !instances.contains(controller) {
            return Err(DomainError::ControllerOutsideInstanceRange {
                instance_cidr: d.instance_cidr.clone(),
                controller_ip: d.controller_ip.clone(),
            });
        }

        let pods = parse_cidr("podCIDR", &d.pod_cidr)?;
        if vpc.contains(pods.network()) {
            return Err(DomainError::PodRangeOverlapsVpc {
                vpc_cidr: d.vpc_cidr.clone(),
                pod_cidr: d.pod_cidr.clone(),
            });
        }

        let services = parse_cidr("serviceCIDR", &d.service_cidr)?;
        if vpc.contains(services.network()) {
            return Err(DomainError::ServiceRangeOverlapsVpc {
                vpc_cidr: d.vpc_cidr.clone(),
                service_cidr: d.service_cidr.clone(),
            });
        }
        if pods.contains(services.network()) || services.contains(pods.network()) {
            return Err(DomainError::PodServiceRangeOverlap {
                service_cidr: d.service_cidr.clone(),
                pod_cidr: d.pod_cidr.clone(),
            });
        }

        let kubernetes_service =
            service_address(&services, d, "kubernetesServiceIP", &d.kubernetes_service_ip)?;
        let dns_service = service_address(&services, d, "dnsServiceIP", &d.dns_service_ip)?;

        Ok(AddressPlan {
            vpc,
            instances,
            controller,
            pods,
            services,
            kubernetes_service,
            dns_service,
        })
    }
}

// ── parsing helpers ───────────────────────────────────────────────────────────

/// A CIDR must spell out its prefix length; a bare address is rejected.
fn parse_cidr(field: &'static str, value: &str) -> Result<IpNetwork, DomainError> {
    if !value.contains('/') {
        return Err(DomainError::MalformedCidr {
            field,
            value: value.to_string(),
            reason: "missing prefix length".into(),
        });
    }
    value
        .parse::<IpNetwork>()
        .map_err(|e| DomainError::MalformedCidr {
            field,
            value: value.to_string(),
            reason: e.to_string(),
        })
}

/// IPv4-mapped IPv6 addresses (`::ffff:a.b.c.d`) are read as IPv4.
fn parse_ip(field: &'static str, value: &str) -> Result<IpAddr, DomainError> {
    value
        .parse::<IpAddr>()
        .map(|addr| addr.to_canonical())
        .map_err(|_| DomainError::MalformedAddress {
            field,
            value: value.to_string(),
        })
}

fn service_address(
    services: &IpNetwork,
    d: &ClusterDescription,
    field: &'static str,
    value: &str,
) -> Result<IpAddr, DomainError> {
    let addr = parse_ip(field, value)?;
    if !services.contains(addr) {
        return Err(DomainError::ServiceAddressOutsideRange {
            field,
            service_cidr: d.service_cidr.clone(),
            address: value.to_string(),
        });
    }
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::PlanRule;

    fn valid() -> ClusterDescription {
        ClusterDescription {
            external_dns_name: "k8s.example.com".into(),
            key_name: "ops".into(),
            region: "us-west-2".into(),
            availability_zone: "us-west-2a".into(),
            ..ClusterDescription::default()
        }
    }

    fn rule_of(d: &ClusterDescription) -> PlanRule {
        AddressPlanValidator::validate(d)
            .unwrap_err()
            .plan_rule()
            .unwrap()
    }

    #[test]
    fn default_addressing_is_valid() {
        let plan = AddressPlanValidator::validate(&valid()).unwrap();
        assert_eq!(plan.controller.to_string(), "10.0.0.50");
        assert_eq!(plan.services.prefix(), 24);
    }

    #[test]
    fn required_fields_reported_in_order() {
        let d = ClusterDescription {
            key_name: String::new(),
            region: String::new(),
            ..valid()
        };
        assert_eq!(
            AddressPlanValidator::validate(&d).unwrap_err(),
            DomainError::MissingRequiredField { field: "keyName" }
        );
    }

    #[test]
    fn empty_cluster_name_is_missing() {
        let d = ClusterDescription {
            cluster_name: String::new(),
            ..valid()
        };
        assert_eq!(
            AddressPlanValidator::validate(&d).unwrap_err(),
            DomainError::MissingRequiredField {
                field: "clusterName"
            }
        );
    }

    #[test]
    fn bare_address_is_not_a_cidr() {
        let d = ClusterDescription {
            vpc_cidr: "10.0.0.0".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::MalformedCidr);
    }

    #[test]
    fn garbage_instance_cidr_is_malformed() {
        let d = ClusterDescription {
            instance_cidr: "10.0.0.0/33".into(),
            ..valid()
        };
        match AddressPlanValidator::validate(&d).unwrap_err() {
            DomainError::MalformedCidr { field, value, .. } => {
                assert_eq!(field, "instanceCIDR");
                assert_eq!(value, "10.0.0.0/33");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn instance_range_outside_vpc() {
        let d = ClusterDescription {
            instance_cidr: "10.1.0.0/24".into(),
            controller_ip: "10.1.0.50".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::InstanceRangeOutsideVpc);
    }

    #[test]
    fn malformed_controller_address() {
        let d = ClusterDescription {
            controller_ip: "10.0.0.500".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::MalformedAddress);
    }

    #[test]
    fn controller_outside_instance_range() {
        let d = ClusterDescription {
            controller_ip: "10.0.1.50".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::ControllerOutsideInstanceRange);
    }

    #[test]
    fn pod_range_inside_vpc() {
        let d = ClusterDescription {
            pod_cidr: "10.0.128.0/17".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::PodRangeOverlapsVpc);
    }

    #[test]
    fn service_range_inside_vpc() {
        let d = ClusterDescription {
            service_cidr: "10.0.200.0/24".into(),
            kubernetes_service_ip: "10.0.200.1".into(),
            dns_service_ip: "10.0.200.10".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::ServiceRangeOverlapsVpc);
    }

    #[test]
    fn service_range_inside_pod_range() {
        let d = ClusterDescription {
            service_cidr: "10.2.0.0/24".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::PodServiceRangeOverlap);
    }

    #[test]
    fn pod_range_inside_service_range() {
        let d = ClusterDescription {
            pod_cidr: "10.3.0.0/25".into(),
            service_cidr: "10.3.0.0/16".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::PodServiceRangeOverlap);
    }

    #[test]
    fn kubernetes_service_address_outside_range() {
        let d = ClusterDescription {
            kubernetes_service_ip: "10.4.0.1".into(),
            ..valid()
        };
        match AddressPlanValidator::validate(&d).unwrap_err() {
            DomainError::ServiceAddressOutsideRange { field, address, .. } => {
                assert_eq!(field, "kubernetesServiceIP");
                assert_eq!(address, "10.4.0.1");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn dns_service_address_outside_range() {
        let d = ClusterDescription {
            dns_service_ip: "10.3.1.10".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::ServiceAddressOutsideRange);
    }

    #[test]
    fn malformed_dns_service_address() {
        let d = ClusterDescription {
            dns_service_ip: "dns".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::MalformedAddress);
    }

    #[test]
    fn first_failure_wins() {
        // Both the controller and the DNS address are wrong; the controller
        // rule runs first.
        let d = ClusterDescription {
            controller_ip: "192.168.0.1".into(),
            dns_service_ip: "8.8.8.8".into(),
            ..valid()
        };
        assert_eq!(rule_of(&d), PlanRule::ControllerOutsideInstanceRange);
    }

    #[test]
    fn partial_overlap_escapes_network_address_check() {
        let d = ClusterDescription {
            vpc_cidr: "10.0.128.0/17".into(),
            instance_cidr: "10.0.128.0/24".into(),
            controller_ip: "10.0.128.50".into(),
            pod_cidr: "10.0.0.0/16".into(),
            ..valid()
        };
        // The pod range contains the whole VPC, yet its network address is
        // outside the VPC, so the plan passes.
        assert!(AddressPlanValidator::validate(&d).is_ok());
    }

    #[test]
    fn mixed_families_never_contain_each_other() {
        let d = ClusterDescription {
            pod_cidr: "fd00::/64".into(),
            ..valid()
        };
        assert!(AddressPlanValidator::validate(&d).is_ok());
    }

    #[test]
    fn ipv4_mapped_addresses_are_read_as_ipv4() {
        let d = ClusterDescription {
            controller_ip: "::ffff:10.0.0.50".into(),
            dns_service_ip: "::ffff:10.3.0.10".into(),
            ..valid()
        };
        let plan = AddressPlanValidator::validate(&d).unwrap();
        assert_eq!(plan.controller.to_string(), "10.0.0.50");
        assert_eq!(plan.dns_service.to_string(), "10.3.0.10");
    }
}
