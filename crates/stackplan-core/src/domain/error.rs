// ============================================================================
// domain/error.rs - ADDRESS PLAN + PACKAGING ERRORS
// ============================================================================

use std::fmt;

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (the same failure may be reported by several layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
///
/// Every variant except the packaging ones is an *invalid plan*: the
/// description was rejected before any infrastructure was touched. Use
/// [`DomainError::plan_rule`] to match on the rule that fired without
/// depending on the message text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Invalid plan: required identity fields
    // ========================================================================
    #[error("{field} must be set")]
    MissingRequiredField { field: &'static str },

    // ========================================================================
    // Invalid plan: address containment
    // ========================================================================
    #[error("invalid {field} '{value}': {reason}")]
    MalformedCidr {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("vpcCIDR ({vpc_cidr}) does not contain instanceCIDR ({instance_cidr})")]
    InstanceRangeOutsideVpc {
        vpc_cidr: String,
        instance_cidr: String,
    },

    #[error("invalid {field}: '{value}' is not an IP address")]
    MalformedAddress { field: &'static str, value: String },

    #[error("instanceCIDR ({instance_cidr}) does not contain controllerIP ({controller_ip})")]
    ControllerOutsideInstanceRange {
        instance_cidr: String,
        controller_ip: String,
    },

    #[error("vpcCIDR ({vpc_cidr}) overlaps with podCIDR ({pod_cidr})")]
    PodRangeOverlapsVpc { vpc_cidr: String, pod_cidr: String },

    #[error("vpcCIDR ({vpc_cidr}) overlaps with serviceCIDR ({service_cidr})")]
    ServiceRangeOverlapsVpc {
        vpc_cidr: String,
        service_cidr: String,
    },

    #[error("serviceCIDR ({service_cidr}) overlaps with podCIDR ({pod_cidr})")]
    PodServiceRangeOverlap {
        service_cidr: String,
        pod_cidr: String,
    },

    #[error("serviceCIDR ({service_cidr}) does not contain {field} ({address})")]
    ServiceAddressOutsideRange {
        field: &'static str,
        service_cidr: String,
        address: String,
    },

    // ========================================================================
    // Asset packaging
    // ========================================================================
    #[error("security asset '{asset}' is missing from the bundle")]
    MissingAsset { asset: &'static str },

    #[error("failed to compact '{subject}': {reason}")]
    CompactionFailed { subject: String, reason: String },
}

/// The address-plan rule that rejected a description.
///
/// Rules are evaluated in declaration order; the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlanRule {
    MissingField,
    MalformedCidr,
    InstanceRangeOutsideVpc,
    MalformedAddress,
    ControllerOutsideInstanceRange,
    PodRangeOverlapsVpc,
    ServiceRangeOverlapsVpc,
    PodServiceRangeOverlap,
    ServiceAddressOutsideRange,
}

impl PlanRule {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingField => "missing-field",
            Self::MalformedCidr => "malformed-cidr",
            Self::InstanceRangeOutsideVpc => "instance-range-outside-vpc",
            Self::MalformedAddress => "malformed-address",
            Self::ControllerOutsideInstanceRange => "controller-outside-instance-range",
            Self::PodRangeOverlapsVpc => "pod-range-overlaps-vpc",
            Self::ServiceRangeOverlapsVpc => "service-range-overlaps-vpc",
            Self::PodServiceRangeOverlap => "pod-service-range-overlap",
            Self::ServiceAddressOutsideRange => "service-address-outside-range",
        }
    }
}

impl fmt::Display for PlanRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DomainError {
    /// The plan rule this error reports, or `None` for packaging errors.
    pub fn plan_rule(&self) -> Option<PlanRule> {
        match self {
            Self::MissingRequiredField { .. } => Some(PlanRule::MissingField),
            Self::MalformedCidr { .. } => Some(PlanRule::MalformedCidr),
            Self::InstanceRangeOutsideVpc { .. } => Some(PlanRule::InstanceRangeOutsideVpc),
            Self::MalformedAddress { .. } => Some(PlanRule::MalformedAddress),
            Self::ControllerOutsideInstanceRange { .. } => {
                Some(PlanRule::ControllerOutsideInstanceRange)
            }
            Self::PodRangeOverlapsVpc { .. } => Some(PlanRule::PodRangeOverlapsVpc),
            Self::ServiceRangeOverlapsVpc { .. } => Some(PlanRule::ServiceRangeOverlapsVpc),
            Self::PodServiceRangeOverlap { .. } => Some(PlanRule::PodServiceRangeOverlap),
            Self::ServiceAddressOutsideRange { .. } => Some(PlanRule::ServiceAddressOutsideRange),
            Self::MissingAsset { .. } | Self::CompactionFailed { .. } => None,
        }
    }

    /// Whether this error rejected the address plan (as opposed to packaging).
    pub fn is_invalid_plan(&self) -> bool {
        self.plan_rule().is_some()
    }

    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingRequiredField { field } => vec![
                format!("Add '{field}' to your cluster description"),
                "Identity fields have no default value".into(),
            ],
            Self::MalformedCidr { field, .. } => vec![
                format!("'{field}' must be a network in CIDR notation"),
                "Example: 10.0.0.0/16".into(),
            ],
            Self::MalformedAddress { field, .. } => vec![
                format!("'{field}' must be a single IP address"),
                "Example: 10.0.0.50".into(),
            ],
            Self::InstanceRangeOutsideVpc { vpc_cidr, .. } => vec![
                format!("Choose an instanceCIDR inside {vpc_cidr}"),
                "Instances are launched in a subnet of the VPC".into(),
            ],
            Self::ControllerOutsideInstanceRange { instance_cidr, .. } => {
                vec![format!("Choose a controllerIP inside {instance_cidr}")]
            }
            Self::PodRangeOverlapsVpc { .. } | Self::ServiceRangeOverlapsVpc { .. } => vec![
                "Pod and service addressing must live outside the VPC".into(),
                "Pick a range that does not start inside vpcCIDR".into(),
            ],
            Self::PodServiceRangeOverlap { .. } => {
                vec!["podCIDR and serviceCIDR must not contain one another".into()]
            }
            Self::ServiceAddressOutsideRange {
                field,
                service_cidr,
                ..
            } => vec![format!("Choose a {field} inside {service_cidr}")],
            Self::MissingAsset { asset } => vec![
                format!("Place '{asset}' in the security asset directory"),
                "Generate the certificates before rendering the stack".into(),
            ],
            Self::CompactionFailed { .. } => vec!["Check that the asset files are readable".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingAsset { .. } => ErrorCategory::NotFound,
            Self::CompactionFailed { .. } => ErrorCategory::Internal,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
