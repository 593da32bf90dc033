//! Fingerprint renamer
//!
//! Derives the fingerprinted filename for an asset: the content hash is
//! embedded between the base name and the extension, and the directory
//! component is preserved unchanged.

use std::path::{Path, PathBuf};

use crate::digest::digest;

/// Derive the fingerprinted path for `original` with the given content.
///
/// `css/app.css` with hash `abc` becomes `css/app-abc.css`. Files without an
/// extension get the hash appended to the name. Empty content still hashes
/// deterministically.
pub fn fingerprint_path(original: &Path, content: &[u8]) -> PathBuf {
    let hash = digest(content);
    let stem = original
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("");

    let filename = match original.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{stem}-{hash}.{ext}"),
        None => format!("{stem}-{hash}"),
    };

    match original.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(filename),
        _ => PathBuf::from(filename),
    }
}
