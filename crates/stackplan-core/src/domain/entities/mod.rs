pub mod assets;
pub mod cluster;
pub mod resolved;

pub use crate::domain::DomainError;
pub use assets::{CompactAssetBundle, SecurityAssetBundle};
pub use cluster::{ClusterDescription, ClusterOverrides};
pub use resolved::{Endpoints, ResolvedConfig};
