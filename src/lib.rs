//! Stamp - asset fingerprinting and manifest tool
//!
//! Stamp renames static files to embed a content hash in the filename and
//! maintains a JSON manifest mapping logical asset paths to their
//! fingerprinted output paths. Browsers can cache fingerprinted files
//! forever; application code resolves logical names through the manifest.

pub mod config;
pub mod digest;
pub mod error;
pub mod manifest;
pub mod models;
pub mod pipeline;
pub mod rename;
pub mod scan;
pub mod store;

// Re-exports for convenience
pub use config::{Config, ConfigWarning};
pub use digest::digest;
pub use error::{StampError, StampResult};
pub use manifest::{relative_to_root, FileRecord, Manifest};
pub use models::{AssetContent, AssetInput, StampedAsset};
pub use pipeline::Batch;
pub use rename::fingerprint_path;
pub use scan::collect_assets;
