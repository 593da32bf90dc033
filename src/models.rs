//! Core data models for Stamp
//!
//! Input assets as handed over by the enumeration collaborator, and the
//! stamped form they take after fingerprinting.

use std::path::PathBuf;

use chrono::{DateTime, Utc};

/// How an asset's content arrives from the input side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetContent {
    /// Fully materialized bytes, ready to fingerprint
    Buffer(Vec<u8>),
    /// Placeholder entry with no content; passes through without stamping
    Empty,
    /// Streamed content; rejected - fingerprinting needs the whole byte
    /// sequence up front
    Stream,
}

/// One asset handed to a batch run.
#[derive(Debug, Clone)]
pub struct AssetInput {
    /// Path of the original source file
    pub path: PathBuf,
    /// Root against which manifest paths are relativized
    pub base_root: PathBuf,
    /// Asset content
    pub content: AssetContent,
    /// Modification time of the original source file
    pub mtime: DateTime<Utc>,
}

/// A fingerprinted asset, pending manifest accumulation and output.
///
/// Keeps the original path so callers can still refer back to the source
/// file after the rename decision is made.
#[derive(Debug, Clone)]
pub struct StampedAsset {
    /// Original source path
    pub original_path: PathBuf,
    /// Full fingerprinted path (original directory, hashed filename)
    pub fingerprinted_path: PathBuf,
    /// Logical path relative to the base root
    pub logical_path: String,
    /// Base root used for relativization
    pub base_root: PathBuf,
    /// Asset content bytes
    pub content: Vec<u8>,
    /// Modification time of the original source file
    pub mtime: DateTime<Utc>,
}
