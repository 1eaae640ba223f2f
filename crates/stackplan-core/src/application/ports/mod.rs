//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stackplan-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `DescriptionSource`: Cluster description documents
//!   - `AssetSource`: Security artifact directories
//!   - `TemplateSource`: Template text
//!   - `TemplateRenderer`: Template rendering
//!   - `Filesystem`: Rendered output
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{AssetSource, DescriptionSource, Filesystem, TemplateRenderer, TemplateSource};
