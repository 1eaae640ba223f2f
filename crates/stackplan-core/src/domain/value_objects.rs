//! Domain value objects: AssetName, Role.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! This file's only job is to define the types and their string
//! representations.

use serde::{Deserialize, Serialize};
use std::fmt;

// ── AssetName ─────────────────────────────────────────────────────────────────

/// Logical name of one packaged security artifact.
///
/// The serde representation is the key the artifact is published under in
/// the rendering data (`TLSConfig.CACert`, ...). Declaration order is the
/// order artifacts are compacted and serialized in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AssetName {
    #[serde(rename = "CACert")]
    CaCert,
    #[serde(rename = "CAKey")]
    CaKey,
    #[serde(rename = "APIServerCert")]
    ApiServerCert,
    #[serde(rename = "APIServerKey")]
    ApiServerKey,
    #[serde(rename = "WorkerCert")]
    WorkerCert,
    #[serde(rename = "WorkerKey")]
    WorkerKey,
    #[serde(rename = "AdminCert")]
    AdminCert,
    #[serde(rename = "AdminKey")]
    AdminKey,
}

impl AssetName {
    /// Every artifact a complete bundle carries.
    pub const ALL: [AssetName; 8] = [
        Self::CaCert,
        Self::CaKey,
        Self::ApiServerCert,
        Self::ApiServerKey,
        Self::WorkerCert,
        Self::WorkerKey,
        Self::AdminCert,
        Self::AdminKey,
    ];

    /// File name of the artifact inside the asset directory.
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::CaCert => "ca.pem",
            Self::CaKey => "ca-key.pem",
            Self::ApiServerCert => "apiserver.pem",
            Self::ApiServerKey => "apiserver-key.pem",
            Self::WorkerCert => "worker.pem",
            Self::WorkerKey => "worker-key.pem",
            Self::AdminCert => "admin.pem",
            Self::AdminKey => "admin-key.pem",
        }
    }

    /// Key used in the rendering data.
    pub const fn template_key(&self) -> &'static str {
        match self {
            Self::CaCert => "CACert",
            Self::CaKey => "CAKey",
            Self::ApiServerCert => "APIServerCert",
            Self::ApiServerKey => "APIServerKey",
            Self::WorkerCert => "WorkerCert",
            Self::WorkerKey => "WorkerKey",
            Self::AdminCert => "AdminCert",
            Self::AdminKey => "AdminKey",
        }
    }
}

impl fmt::Display for AssetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}

// ── Role ──────────────────────────────────────────────────────────────────────

/// Compute role of a cluster node; each role gets its own bootstrap document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Controller,
    Worker,
}

impl Role {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Controller => "controller",
            Self::Worker => "worker",
        }
    }

    /// Key under which the role's compressed bootstrap document is published
    /// to the stack template.
    pub const fn user_data_key(&self) -> &'static str {
        match self {
            Self::Controller => "UserDataController",
            Self::Worker => "UserDataWorker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
