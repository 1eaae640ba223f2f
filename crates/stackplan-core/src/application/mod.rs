//! Application layer for Stackplan.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (PlanService, StackService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All validation and resolution rules live in
//! `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{PlanService, StackService, StackTemplateOptions};

// Re-export port traits (for adapter implementation)
pub use ports::{AssetSource, DescriptionSource, Filesystem, TemplateRenderer, TemplateSource};

pub use error::ApplicationError;
