//! Template text adapters.

mod local;
mod memory;

pub use local::LocalTemplateSource;
pub use memory::MemoryTemplateSource;
