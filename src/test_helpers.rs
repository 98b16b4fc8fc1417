//! Shared test utilities for the gallery-index test suite.
//!
//! Provides fixture builders that lay out galleries in a temp directory and
//! readers that parse the generated index files back.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_reference_site();
//! let issue = make_issue(&tmp.path().join("images/zines"), "Issue 2", &["1.png"]);
//! // ... run the generator ...
//! assert_eq!(read_zine(&issue).cover, "1.png");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::index::{StandardIndex, ZineIndex, INDEX_FILENAME};
use crate::scan::IMAGE_EXTENSIONS;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create empty files named `names` inside `dir`. Content is irrelevant:
/// images are recognized by extension only.
pub fn touch(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), "fake image").unwrap();
    }
}

/// Create `<parent>/<name>/` holding `files` and return its path.
pub fn make_issue(parent: &Path, name: &str, files: &[&str]) -> PathBuf {
    let dir = parent.join(name);
    fs::create_dir_all(&dir).unwrap();
    touch(&dir, files);
    dir
}

/// Lay out the reference site in a temp directory:
///
/// ```text
/// images/
/// ├── street/      001.jpg, 002.png, notes.txt
/// ├── voyage/      Tokyo.webp
/// └── zines/
///     ├── Issue 1/ 10.png, 2.png, 1.png
///     └── empty/
/// ```
///
/// `portrait` and `concert` are deliberately absent.
pub fn setup_reference_site() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let images = tmp.path().join("images");
    make_issue(&images, "street", &["001.jpg", "002.png", "notes.txt"]);
    make_issue(&images, "voyage", &["Tokyo.webp"]);
    make_issue(&images.join("zines"), "Issue 1", &["10.png", "2.png", "1.png"]);
    make_issue(&images.join("zines"), "empty", &[]);
    tmp
}

pub fn default_extensions() -> Vec<String> {
    IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect()
}

// =========================================================================
// Index readers — panic with a clear message on a missing file
// =========================================================================

/// Raw contents of `<dir>/index.json`.
pub fn read_index(dir: &Path) -> String {
    let path = dir.join(INDEX_FILENAME);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("could not read {}: {e}", path.display()))
}

/// Filenames in a standard index, sorted. Enumeration order is not stable
/// across file systems, so tests compare as a set.
pub fn read_standard_sorted(dir: &Path) -> Vec<String> {
    let index: StandardIndex = serde_json::from_str(&read_index(dir)).unwrap();
    let mut images = index.images;
    images.sort();
    images
}

pub fn read_zine(dir: &Path) -> ZineIndex {
    serde_json::from_str(&read_index(dir)).unwrap()
}
