//! Batch pipeline - accumulates fingerprinted assets into a manifest snapshot
//!
//! Each run owns a fresh `Batch`; assets are processed strictly one at a
//! time and the snapshot is produced once at end-of-batch. There is no
//! module-level state.

use std::collections::BTreeMap;

use crate::error::{StampError, StampResult};
use crate::manifest::{relative_to_root, Manifest};
use crate::models::{AssetContent, AssetInput, StampedAsset};
use crate::rename::fingerprint_path;

/// Per-run accumulator of stamped assets.
#[derive(Debug, Default)]
pub struct Batch {
    /// Keyed by logical path; a duplicate logical path in one run keeps the
    /// later entry, matching manifest insertion semantics.
    stamped: BTreeMap<String, StampedAsset>,
    skipped: usize,
}

impl Batch {
    /// Create a new empty batch
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input asset through the fingerprint renamer.
    ///
    /// Buffered content is stamped and accumulated. Empty placeholder
    /// entries pass through untouched (counted, not stamped). Streamed
    /// content is a hard error: the batch must not produce a partial
    /// manifest from it.
    pub fn process(&mut self, input: AssetInput) -> StampResult<()> {
        let content = match input.content {
            AssetContent::Buffer(bytes) => bytes,
            AssetContent::Empty => {
                self.skipped += 1;
                return Ok(());
            }
            AssetContent::Stream => {
                return Err(StampError::UnsupportedInput { path: input.path });
            }
        };

        let fingerprinted_path = fingerprint_path(&input.path, &content);
        let logical_path = relative_to_root(&input.path, &input.base_root);

        self.stamped.insert(
            logical_path.clone(),
            StampedAsset {
                original_path: input.path,
                fingerprinted_path,
                logical_path,
                base_root: input.base_root,
                content,
                mtime: input.mtime,
            },
        );

        Ok(())
    }

    /// Stamped assets accumulated so far, in logical path order.
    pub fn stamped(&self) -> impl Iterator<Item = &StampedAsset> {
        self.stamped.values()
    }

    /// Number of stamped assets
    pub fn len(&self) -> usize {
        self.stamped.len()
    }

    /// Check if no assets were stamped
    pub fn is_empty(&self) -> bool {
        self.stamped.is_empty()
    }

    /// Number of empty placeholder entries passed through
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Finish the batch, producing the manifest snapshot for this run.
    pub fn finish(self) -> Manifest {
        let mut manifest = Manifest::new();
        for asset in self.stamped.into_values() {
            manifest.add_entry(
                &asset.logical_path,
                &asset.fingerprinted_path,
                &asset.content,
                asset.mtime,
                &asset.base_root,
            );
        }
        manifest
    }
}
