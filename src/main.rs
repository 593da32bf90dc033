//! Stamp CLI - asset fingerprinting and manifest tool
//!
//! Usage: stamp <COMMAND>
//!
//! Commands:
//!   run      Fingerprint assets and write the manifest
//!   resolve  Resolve a logical path against an existing manifest

mod cli;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Result};
use clap::Parser;

use stamp::{collect_assets, relative_to_root, store, Batch, Config, Manifest};

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            source,
            out,
            manifest,
            merge,
            dry_run,
        } => cmd_run(&source, &out, manifest, merge, dry_run, cli.verbose),
        Commands::Resolve {
            logical_path,
            manifest,
        } => cmd_resolve(&logical_path, &manifest),
    }
}

fn cmd_run(
    source: &Path,
    out: &Path,
    manifest_flag: Option<PathBuf>,
    merge_flag: bool,
    dry_run: bool,
    verbose: u8,
) -> Result<()> {
    let (config, warnings) = Config::load_or_default(source)?;
    for warning in &warnings {
        eprintln!(
            "warning: unknown config key '{}' in {}",
            warning.key,
            warning.file.display()
        );
    }

    // CLI flags override stamp.toml values.
    let manifest_rel = manifest_flag.unwrap_or(config.manifest);
    let merge = merge_flag || config.merge;
    let manifest_path = out.join(manifest_rel);

    let inputs = collect_assets(source, std::slice::from_ref(&manifest_path))?;

    let mut batch = Batch::new();
    for input in inputs {
        batch.process(input)?;
    }

    if dry_run {
        for asset in batch.stamped() {
            println!(
                "{} -> {}",
                asset.logical_path,
                relative_to_root(&asset.fingerprinted_path, &asset.base_root)
            );
        }
        println!("dry run: {} assets, nothing written", batch.len());
        return Ok(());
    }

    // Load the prior manifest before touching the output tree, so a corrupt
    // manifest aborts the run with nothing written.
    let previous = if merge { store::load(&manifest_path)? } else { None };

    for asset in batch.stamped() {
        let rel = relative_to_root(&asset.fingerprinted_path, &asset.base_root);
        let dest = out.join(&rel);
        store::atomic_write(&dest, &asset.content)?;
        if verbose > 0 {
            println!("  {} -> {}", asset.logical_path, rel);
        }
    }

    let stamped = batch.len();
    let snapshot = batch.finish();
    let final_manifest = match previous {
        Some(old) => Manifest::merge(old, snapshot),
        None => snapshot,
    };

    store::save(&manifest_path, &final_manifest)?;
    println!("Stamped {} assets -> {}", stamped, manifest_path.display());

    Ok(())
}

fn cmd_resolve(logical_path: &str, manifest_path: &Path) -> Result<()> {
    let manifest = store::load(manifest_path)?
        .ok_or_else(|| anyhow!("no manifest found at {}", manifest_path.display()))?;

    match manifest.resolve(logical_path) {
        Some(fingerprinted) => {
            println!("{fingerprinted}");
            Ok(())
        }
        None => bail!(
            "'{}' not found in {}",
            logical_path,
            manifest_path.display()
        ),
    }
}
