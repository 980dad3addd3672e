//! Property tests for content fingerprints and slugs.

use std::path::PathBuf;

use proptest::prelude::*;

use lessonpack::{ContentHash, Slug};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// Same bytes, same fingerprint; always 64 lowercase hex characters.
    #[test]
    fn fingerprint_is_deterministic_and_well_formed(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
        let first = ContentHash::from_bytes(&bytes);
        let second = ContentHash::from_bytes(&bytes);

        prop_assert_eq!(&first, &second);
        prop_assert!(first.is_well_formed());
        prop_assert_eq!(first.as_str().len(), 64);
    }

    /// A single appended byte changes the fingerprint.
    #[test]
    fn fingerprint_tracks_every_byte(bytes in proptest::collection::vec(any::<u8>(), 0..512), extra in any::<u8>()) {
        let mut longer = bytes.clone();
        longer.push(extra);
        prop_assert_ne!(ContentHash::from_bytes(&bytes), ContentHash::from_bytes(&longer));
    }

    /// Line endings are part of the content.
    #[test]
    fn fingerprint_does_not_normalize_newlines(lines in proptest::collection::vec("[a-z]{1,10}", 2..6)) {
        let unix = lines.join("\n");
        let windows = lines.join("\r\n");
        prop_assert_ne!(ContentHash::from_bytes(unix.as_bytes()), ContentHash::from_bytes(windows.as_bytes()));
    }

    /// The slug is the file stem however deep the document sits.
    #[test]
    fn slug_ignores_directory_depth(
        dirs in proptest::collection::vec("[a-z]{1,8}", 0..5),
        name in "[a-z][a-z0-9_]{0,15}",
    ) {
        let mut path: PathBuf = dirs.iter().collect();
        path.push(format!("{name}.md"));

        prop_assert_eq!(Slug::from_path(&path), Some(Slug::new(name)));
    }
}
