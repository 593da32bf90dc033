//! Manifest entity - maps logical asset paths to fingerprinted output paths
//!
//! The manifest is a pure data structure; I/O is handled by the store module.
//! It holds two indexes: `assets` (logical path -> fingerprinted path) and
//! `files` (fingerprinted path -> metadata record). For every record in
//! `files`, `assets[record.logical_path]` must equal the record's own key;
//! records violating this are stale leftovers from a prior build and are
//! pruned during merge.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::digest::digest;

/// Normalize a path for manifest storage (always use forward slashes).
pub(crate) fn normalize_manifest_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Strip the base root prefix (and a single leading separator) from a path.
///
/// Mirrors how asset pipelines relativize output paths against their
/// destination root before recording them.
pub fn relative_to_root(path: &Path, base_root: &Path) -> String {
    let path = normalize_manifest_path(path);
    let base = normalize_manifest_path(base_root);
    let stripped = path.strip_prefix(base.as_str()).unwrap_or(&path);
    let stripped = stripped.strip_prefix('/').unwrap_or(stripped);
    stripped.to_string()
}

/// Metadata recorded for one fingerprinted file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    /// Original, content-independent identifier of the asset
    pub logical_path: String,
    /// Modification time of the original source file (ISO 8601 in JSON)
    pub mtime: DateTime<Utc>,
    /// Byte length of the asset content
    pub size: u64,
    /// Hex-encoded content hash
    pub digest: String,
}

/// The persisted manifest: logical path index plus per-file metadata.
///
/// `BTreeMap` keeps output key order stable so persisted manifests diff
/// cleanly across builds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Map of logical path -> fingerprinted relative path
    #[serde(default)]
    pub assets: BTreeMap<String, String>,
    /// Map of fingerprinted relative path -> file record
    #[serde(default)]
    pub files: BTreeMap<String, FileRecord>,
}

impl Manifest {
    /// Create a new empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the manifest has no entries
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty() && self.files.is_empty()
    }

    /// Get the number of logical assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Look up the fingerprinted path for a logical asset
    pub fn resolve(&self, logical_path: &str) -> Option<&str> {
        self.assets.get(logical_path).map(String::as_str)
    }

    /// Record one processed asset in the in-progress snapshot.
    ///
    /// `fingerprinted_path` is relativized against `base_root` before being
    /// stored. The same logical path recorded twice in one batch keeps the
    /// later entry.
    pub fn add_entry(
        &mut self,
        logical_path: &str,
        fingerprinted_path: &Path,
        content: &[u8],
        mtime: DateTime<Utc>,
        base_root: &Path,
    ) {
        let relative = relative_to_root(fingerprinted_path, base_root);
        self.files.insert(
            relative.clone(),
            FileRecord {
                logical_path: logical_path.to_string(),
                mtime,
                size: content.len() as u64,
                digest: digest(content),
            },
        );
        self.assets.insert(logical_path.to_string(), relative);
    }

    /// Reconcile a fresh snapshot against a previously persisted manifest.
    ///
    /// Union with new-wins semantics on both indexes, then prune every file
    /// record whose logical path now resolves to a different fingerprinted
    /// path. Assets absent from the new snapshot survive untouched; only
    /// records superseded by a changed fingerprint are removed.
    pub fn merge(old: Manifest, new: Manifest) -> Manifest {
        let mut assets = old.assets;
        assets.extend(new.assets);

        let mut files = old.files;
        files.extend(new.files);

        files.retain(|fingerprinted, record| {
            assets.get(&record.logical_path).map(String::as_str) == Some(fingerprinted.as_str())
        });

        Manifest { assets, files }
    }
}
