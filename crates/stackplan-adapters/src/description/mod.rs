//! Cluster description document adapters.

mod yaml;

pub use yaml::YamlDescriptionLoader;
