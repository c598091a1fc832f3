//! Mirror path mapping
//!
//! Maps a source path onto its location inside the mirror directory. The
//! full source path (minus its root or drive) is reproduced under the mirror,
//! so `/data/a.txt` mirrored into `/backup` lands at `/backup/data/a.txt`.

use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};

/// How the root of a source path is stripped before joining
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorLayout {
    /// Drive-letter platforms: `D:\data\a.txt` loses its `D:` prefix
    DriveLetter,
    /// Rooted platforms: `/data/a.txt` loses its leading `/`
    Rooted,
}

impl MirrorLayout {
    /// Layout for the platform this binary was built for
    pub const fn native() -> Self {
        if cfg!(windows) {
            MirrorLayout::DriveLetter
        } else {
            MirrorLayout::Rooted
        }
    }
}

impl Default for MirrorLayout {
    fn default() -> Self {
        Self::native()
    }
}

/// Compute the mirror destination for `source`.
///
/// Pure: the result depends only on the arguments. The result always stays
/// inside `mirror_dir`; `..` segments cannot climb above it.
pub fn map_to_mirror(source: &Path, mirror_dir: &Path, layout: MirrorLayout) -> PathBuf {
    match layout {
        MirrorLayout::DriveLetter => match strip_drive(source) {
            Some(rest) => {
                let segments = rest
                    .split(['\\', '/'])
                    .filter(|s| !s.is_empty())
                    .map(OsStr::new);
                join_segments(mirror_dir, segments)
            }
            None => join_segments(mirror_dir, normal_segments(source)),
        },
        MirrorLayout::Rooted => join_segments(mirror_dir, normal_segments(source)),
    }
}

/// Return the remainder after a leading `X:` drive designator
fn strip_drive(source: &Path) -> Option<&str> {
    let text = source.to_str()?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => Some(&text[2..]),
        _ => None,
    }
}

fn normal_segments(source: &Path) -> impl Iterator<Item = &OsStr> {
    source.components().filter_map(|component| match component {
        Component::Normal(part) => Some(part),
        Component::ParentDir => Some(OsStr::new("..")),
        Component::Prefix(_) | Component::RootDir | Component::CurDir => None,
    })
}

fn join_segments<'a>(mirror_dir: &Path, segments: impl Iterator<Item = &'a OsStr>) -> PathBuf {
    let mut relative: Vec<&OsStr> = Vec::new();
    for segment in segments {
        match segment.to_str() {
            Some(".") => {}
            Some("..") => {
                relative.pop();
            }
            _ => relative.push(segment),
        }
    }

    let mut dest = mirror_dir.to_path_buf();
    dest.extend(relative);
    dest
}
