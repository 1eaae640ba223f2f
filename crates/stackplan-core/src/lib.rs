//! Stackplan Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for Stackplan, a
//! tool that checks a cluster description's network address plan and renders
//! it into a cloud infrastructure stack template.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         stackplan-cli (CLI)             │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │      (PlanService, StackService)        │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Descriptions, Assets, Templates, FS)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   stackplan-adapters (Infrastructure)   │
//! │ (YamlDescriptionLoader, SimpleRenderer) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ClusterDescription, AddressPlan, ...)  │
//! │         No I/O, no logging              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stackplan_core::domain::{AddressPlanValidator, ClusterDescription, ClusterOverrides};
//!
//! let description = ClusterDescription::default().overlay(ClusterOverrides {
//!     external_dns_name: Some("k8s.example.com".into()),
//!     key_name: Some("ops".into()),
//!     region: Some("us-west-2".into()),
//!     availability_zone: Some("us-west-2a".into()),
//!     ..ClusterOverrides::default()
//! });
//!
//! let plan = AddressPlanValidator::validate(&description).unwrap();
//! assert!(plan.vpc.contains(plan.controller));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        PlanService, StackService, StackTemplateOptions,
        ports::{AssetSource, DescriptionSource, Filesystem, TemplateRenderer, TemplateSource},
    };
    pub use crate::domain::{
        AddressPlan, AddressPlanValidator, AssetName, ClusterDescription, ClusterOverrides,
        ConfigResolver, Endpoints, ResolvedConfig, Role, SecurityAssetBundle,
    };
    pub use crate::error::{StackplanError, StackplanResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
