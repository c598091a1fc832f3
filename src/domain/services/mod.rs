//! Domain services

pub mod mirror_path;

pub use mirror_path::{map_to_mirror, MirrorLayout};
