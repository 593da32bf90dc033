//! Property tests for manifest merge reconciliation.

use std::collections::BTreeSet;
use std::path::Path;

use proptest::prelude::*;

use stamp::{digest, Manifest};

/// Build a manifest whose entries satisfy the assets/files cross-reference
/// invariant by construction: each stem becomes one logical asset with a
/// fingerprint derived from `generation`.
fn consistent_manifest(stems: &BTreeSet<String>, generation: u8) -> Manifest {
    let mut manifest = Manifest::new();
    for stem in stems {
        let content = format!("{stem}:{generation}");
        manifest.add_entry(
            &format!("{stem}.css"),
            &Path::new("/out").join(format!("{stem}-{}.css", digest(content.as_bytes()))),
            content.as_bytes(),
            "2026-08-30T12:00:00Z".parse().unwrap(),
            Path::new("/out"),
        );
    }
    manifest
}

fn stems() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-z]{1,8}", 0..12)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging with an empty manifest is the identity, both ways.
    #[test]
    fn property_merge_empty_identity(stems in stems()) {
        let manifest = consistent_manifest(&stems, 1);
        prop_assert_eq!(
            Manifest::merge(manifest.clone(), Manifest::new()),
            manifest.clone()
        );
        prop_assert_eq!(Manifest::merge(Manifest::new(), manifest.clone()), manifest);
    }

    /// PROPERTY: merge is idempotent.
    #[test]
    fn property_merge_idempotent(stems in stems()) {
        let manifest = consistent_manifest(&stems, 1);
        prop_assert_eq!(Manifest::merge(manifest.clone(), manifest.clone()), manifest);
    }

    /// PROPERTY: after any merge of consistent manifests, every file record
    /// cross-references its own key through the assets index.
    #[test]
    fn property_merge_preserves_invariant(old in stems(), new in stems()) {
        let merged = Manifest::merge(
            consistent_manifest(&old, 1),
            consistent_manifest(&new, 2),
        );
        for (fingerprinted, record) in &merged.files {
            prop_assert_eq!(merged.resolve(&record.logical_path), Some(fingerprinted.as_str()));
        }
    }

    /// PROPERTY: every logical asset from either side survives the merge,
    /// and assets from the new side always win.
    #[test]
    fn property_merge_union_new_wins(old in stems(), new in stems()) {
        let old_manifest = consistent_manifest(&old, 1);
        let new_manifest = consistent_manifest(&new, 2);
        let merged = Manifest::merge(old_manifest.clone(), new_manifest.clone());

        for stem in old.union(&new) {
            let logical = format!("{stem}.css");
            let expected = if new.contains(stem) {
                new_manifest.resolve(&logical)
            } else {
                old_manifest.resolve(&logical)
            };
            prop_assert_eq!(merged.resolve(&logical), expected);
        }
        prop_assert_eq!(merged.files.len(), merged.assets.len());
    }

    /// PROPERTY: superseded fingerprints never survive - a stem present on
    /// both sides keeps only its new file record.
    #[test]
    fn property_merge_prunes_superseded(old in stems(), new in stems()) {
        let old_manifest = consistent_manifest(&old, 1);
        let merged = Manifest::merge(
            old_manifest.clone(),
            consistent_manifest(&new, 2),
        );

        for stem in old.intersection(&new) {
            let stale = old_manifest.resolve(&format!("{stem}.css")).unwrap();
            prop_assert!(!merged.files.contains_key(stale));
        }
    }
}
