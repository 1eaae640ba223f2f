//! Security asset bundles, raw and compacted.
//!
//! The core never inspects certificate or key contents. It only checks that
//! every logical artifact is present and packages the bytes.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{compaction, error::DomainError, value_objects::AssetName};

// ── Raw bundle ────────────────────────────────────────────────────────────────

/// Raw security artifacts keyed by logical name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityAssetBundle {
    assets: BTreeMap<AssetName, Vec<u8>>,
}

impl SecurityAssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_asset(mut self, name: AssetName, contents: impl Into<Vec<u8>>) -> Self {
        self.insert(name, contents);
        self
    }

    /// Insert or replace one artifact.
    pub fn insert(&mut self, name: AssetName, contents: impl Into<Vec<u8>>) {
        self.assets.insert(name, contents.into());
    }

    pub fn get(&self, name: AssetName) -> Option<&[u8]> {
        self.assets.get(&name).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetName, &[u8])> {
        self.assets.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Logical names with no artifact in this bundle.
    pub fn missing(&self) -> Vec<AssetName> {
        AssetName::ALL
            .into_iter()
            .filter(|name| !self.assets.contains_key(name))
            .collect()
    }

    /// Compress and encode every artifact.
    ///
    /// All-or-nothing: the first missing or unencodable artifact aborts.
    pub fn compact(&self) -> Result<CompactAssetBundle, DomainError> {
        let mut encoded = BTreeMap::new();
        for name in AssetName::ALL {
            let contents = self
                .get(name)
                .ok_or(DomainError::MissingAsset {
                    asset: name.file_name(),
                })?;
            encoded.insert(name, compaction::compress(name.file_name(), contents)?);
        }
        Ok(CompactAssetBundle { encoded })
    }
}

impl FromIterator<(AssetName, Vec<u8>)> for SecurityAssetBundle {
    fn from_iter<I: IntoIterator<Item = (AssetName, Vec<u8>)>>(iter: I) -> Self {
        Self {
            assets: iter.into_iter().collect(),
        }
    }
}

// ── Compacted bundle ──────────────────────────────────────────────────────────

/// Transport form of a [`SecurityAssetBundle`].
///
/// Serializes as an object keyed by [`AssetName::template_key`], each value a
/// gzip + base64 string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CompactAssetBundle {
    encoded: BTreeMap<AssetName, String>,
}

impl CompactAssetBundle {
    pub fn get(&self, name: AssetName) -> Option<&str> {
        self.encoded.get(&name).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (AssetName, &str)> {
        self.encoded.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Total size of the encoded text across all artifacts.
    pub fn encoded_len(&self) -> usize {
        self.encoded.values().map(String::len).sum()
    }

    /// Restore the original bytes of every artifact.
    pub fn decompact(&self) -> Result<SecurityAssetBundle, DomainError> {
        self.encoded
            .iter()
            .map(|(name, text)| Ok((*name, compaction::decompress(name.file_name(), text)?)))
            .collect()
    }
}
