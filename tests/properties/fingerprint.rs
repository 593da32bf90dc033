//! Property tests for the digest engine and fingerprint renamer.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use stamp::{digest, fingerprint_path};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: digest is pure - the same bytes always hash the same.
    #[test]
    fn property_digest_is_deterministic(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(digest(&content), digest(&content));
    }

    /// PROPERTY: digest output is always 64 lowercase hex characters.
    #[test]
    fn property_digest_is_hex(content in proptest::collection::vec(any::<u8>(), 0..512)) {
        let d = digest(&content);
        prop_assert_eq!(d.len(), 64);
        prop_assert!(d.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    /// PROPERTY: renaming preserves the extension.
    #[test]
    fn property_rename_preserves_extension(
        stem in "[a-z][a-z0-9_]{0,15}",
        ext in "[a-z]{1,4}",
        content in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let original = PathBuf::from(format!("{stem}.{ext}"));
        let fingerprinted = fingerprint_path(&original, &content);
        prop_assert_eq!(
            fingerprinted.extension().and_then(|e| e.to_str()),
            Some(ext.as_str())
        );
    }

    /// PROPERTY: renaming preserves the directory component.
    #[test]
    fn property_rename_preserves_directory(
        dir in "[a-z]{1,8}(/[a-z]{1,8}){0,2}",
        stem in "[a-z]{1,8}",
        content in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let original = PathBuf::from(format!("{dir}/{stem}.css"));
        let fingerprinted = fingerprint_path(&original, &content);
        prop_assert_eq!(fingerprinted.parent(), Some(Path::new(dir.as_str())));
    }

    /// PROPERTY: the fingerprinted name embeds the content digest.
    #[test]
    fn property_rename_embeds_digest(
        stem in "[a-z]{1,8}",
        content in proptest::collection::vec(any::<u8>(), 0..128),
    ) {
        let original = PathBuf::from(format!("{stem}.js"));
        let fingerprinted = fingerprint_path(&original, &content);
        let name = fingerprinted.file_name().unwrap().to_str().unwrap().to_string();
        prop_assert_eq!(name, format!("{}-{}.js", stem, digest(&content)));
    }
}
