//! Property tests for source-to-mirror path mapping.

use std::path::{Component, Path, PathBuf};

use proptest::prelude::*;

use mirrorwatch::{map_to_mirror, MirrorLayout};

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        8 => proptest::string::string_regex("[A-Za-z0-9._ -]{1,12}").unwrap(),
        1 => Just("..".to_string()),
        1 => Just(".".to_string()),
    ]
}

fn absolute_source() -> impl Strategy<Value = PathBuf> {
    proptest::collection::vec(segment(), 0..=6)
        .prop_map(|segments| PathBuf::from(format!("/{}", segments.join("/"))))
}

fn has_parent_dir(path: &Path) -> bool {
    path.components().any(|c| matches!(c, Component::ParentDir))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the mapped path always lives under the mirror directory.
    #[test]
    fn property_destination_stays_under_mirror(source in absolute_source()) {
        let mirror = Path::new("/backup");
        let dest = map_to_mirror(&source, mirror, MirrorLayout::Rooted);

        prop_assert!(dest.starts_with(mirror), "{} escaped {}", dest.display(), mirror.display());
        prop_assert!(!has_parent_dir(&dest));
    }

    /// PROPERTY: mapping is a pure function of its inputs.
    #[test]
    fn property_mapping_is_deterministic(source in absolute_source()) {
        let mirror = Path::new("/backup");
        prop_assert_eq!(
            map_to_mirror(&source, mirror, MirrorLayout::Rooted),
            map_to_mirror(&source, mirror, MirrorLayout::Rooted)
        );
    }

    /// PROPERTY: a plain absolute path keeps every segment, in order.
    #[test]
    fn property_plain_segments_are_preserved(
        segments in proptest::collection::vec("[A-Za-z0-9_-]{1,12}", 1..=5)
    ) {
        let source = PathBuf::from(format!("/{}", segments.join("/")));
        let dest = map_to_mirror(&source, Path::new("/backup"), MirrorLayout::Rooted);

        let expected: PathBuf = std::iter::once("/backup".to_string()).chain(segments).collect();
        prop_assert_eq!(dest, expected);
    }

    /// PROPERTY: the drive letter never becomes part of the mirrored path.
    #[test]
    fn property_drive_letter_is_dropped(
        drive in "[A-Z]",
        segments in proptest::collection::vec("[A-Za-z0-9_-]{1,12}", 1..=4)
    ) {
        let source = PathBuf::from(format!("{drive}:/{}", segments.join("/")));
        let dest = map_to_mirror(&source, Path::new("/backup"), MirrorLayout::DriveLetter);

        prop_assert!(dest.starts_with("/backup"));
        let drive_prefix = format!("{drive}:");
        prop_assert!(!dest.to_string_lossy().contains(drive_prefix.as_str()));
        prop_assert!(dest.ends_with(segments.join("/")));
    }
}
