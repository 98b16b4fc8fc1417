//! Gallery roots and their kinds, shared by config loading and generation.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory name suffix that marks a zine collection when no kind is given.
pub const ZINE_MARKER: &str = "zines";

/// Shape of a gallery root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryKind {
    /// A directory of images, indexed as one flat list.
    Standard,
    /// A directory of issues, each indexed on its own with a cover and pages.
    ZineCollection,
}

impl GalleryKind {
    /// Classify a path by the naming convention: a last component ending
    /// in `zines` is a zine collection, anything else is standard.
    pub fn from_path(path: &Path) -> Self {
        let is_zines = path
            .file_name()
            .is_some_and(|name| name.to_string_lossy().ends_with(ZINE_MARKER));
        if is_zines {
            GalleryKind::ZineCollection
        } else {
            GalleryKind::Standard
        }
    }
}

/// A configured gallery directory with its resolved kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryRoot {
    pub path: PathBuf,
    pub kind: GalleryKind,
}

impl GalleryRoot {
    pub fn standard(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: GalleryKind::Standard,
        }
    }

    pub fn zine_collection(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: GalleryKind::ZineCollection,
        }
    }
}
