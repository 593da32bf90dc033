//! Manifest persistence - JSON load and atomic save
//!
//! A missing manifest is not an error (merge starts from empty); any other
//! read or parse failure propagates so a corrupted manifest is never
//! silently replaced by an empty one.

use std::io::Write;
use std::path::Path;

use crate::error::{StampError, StampResult};
use crate::manifest::Manifest;

/// Load a previously persisted manifest.
///
/// Returns `Ok(None)` when no manifest exists at `path`.
pub fn load(path: &Path) -> StampResult<Option<Manifest>> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StampError::ManifestLoad {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        }
    };

    let manifest = serde_json::from_str(&content).map_err(|e| StampError::ManifestLoad {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    Ok(Some(manifest))
}

/// Persist a manifest as pretty-printed JSON (two-space indentation).
pub fn save(path: &Path, manifest: &Manifest) -> StampResult<()> {
    let mut json = serde_json::to_string_pretty(manifest)?;
    json.push('\n');

    atomic_write(path, json.as_bytes()).map_err(|source| StampError::ManifestWrite {
        path: path.to_path_buf(),
        source,
    })
}

/// Write content to a file atomically.
///
/// Uses the tempfile + rename pattern; the temporary file lives in the
/// destination directory so the rename stays on one filesystem. Parent
/// directories are created as needed.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent)?;

    let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
    tmp.write_all(content)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
