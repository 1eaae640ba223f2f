//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "validate a description" or "render a stack".

pub mod plan_service;
pub mod stack_service;

pub use plan_service::PlanService;
pub use stack_service::{StackService, StackTemplateOptions};
