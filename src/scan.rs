//! Source tree scanner - collects files into batch inputs
//!
//! Walks the source root recursively and materializes each regular file as
//! a fully buffered `AssetInput`. Hidden entries are skipped, `stamp.toml`
//! is never treated as an asset, and an optional `.stampignore` file at the
//! source root excludes paths using gitignore semantics.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use ignore::gitignore::{Gitignore, GitignoreBuilder};

use crate::config::CONFIG_FILE;
use crate::error::{StampError, StampResult};
use crate::models::{AssetContent, AssetInput};

/// Name of the optional exclusion pattern file at the source root
pub const IGNORE_FILE: &str = ".stampignore";

/// Collect every regular file under `root` as a buffered asset input.
///
/// Paths listed in `skip` (e.g. the manifest itself, when it lives inside
/// the source tree) are excluded. Results are sorted by path so batch
/// processing order is deterministic.
pub fn collect_assets(root: &Path, skip: &[PathBuf]) -> StampResult<Vec<AssetInput>> {
    let matcher = load_ignore_patterns(root)?;

    let mut inputs = Vec::new();
    walk(root, root, &matcher, skip, &mut inputs)?;
    inputs.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(inputs)
}

fn walk(
    dir: &Path,
    root: &Path,
    matcher: &Gitignore,
    skip: &[PathBuf],
    inputs: &mut Vec<AssetInput>,
) -> StampResult<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_dir = path.is_dir();

        let is_hidden = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with('.'));
        if is_hidden {
            continue;
        }

        let rel = path.strip_prefix(root).unwrap_or(&path);
        if matcher.matched_path_or_any_parents(rel, is_dir).is_ignore() {
            continue;
        }

        if is_dir {
            walk(&path, root, matcher, skip, inputs)?;
            continue;
        }

        if path.file_name().is_some_and(|name| name == CONFIG_FILE) {
            continue;
        }
        if skip.contains(&path) {
            continue;
        }

        let metadata = entry.metadata()?;
        let mtime = DateTime::<Utc>::from(metadata.modified()?);
        let content = std::fs::read(&path)?;

        inputs.push(AssetInput {
            path,
            base_root: root.to_path_buf(),
            content: AssetContent::Buffer(content),
            mtime,
        });
    }

    Ok(())
}

/// Load `.stampignore` from the source root, or an empty matcher.
fn load_ignore_patterns(root: &Path) -> StampResult<Gitignore> {
    let path = root.join(IGNORE_FILE);
    if !path.exists() {
        return Ok(Gitignore::empty());
    }

    let mut builder = GitignoreBuilder::new(root);
    if let Some(e) = builder.add(&path) {
        return Err(StampError::InvalidIgnoreFile {
            file: path,
            message: e.to_string(),
        });
    }

    builder.build().map_err(|e| StampError::InvalidIgnoreFile {
        file: path,
        message: e.to_string(),
    })
}
