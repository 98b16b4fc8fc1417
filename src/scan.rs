//! Directory enumeration.
//!
//! Only direct children are ever listed; galleries are one level deep and
//! zine collections two. Image files are recognized by extension alone:
//!
//! ```text
//! images/street/
//! ├── index.json         # ignored (not an image)
//! ├── 001-dawn.JPG       # image (case-insensitive match)
//! ├── notes.txt          # ignored
//! └── raw/               # ignored (directories are never images)
//! ```
//!
//! [`list_images`] keeps the order the file system yields entries in; callers
//! that need a stable order sort afterwards. [`list_subdirs`] always returns
//! sub-directories in natural order.
//!
//! Every name that ends up in an index must be valid UTF-8. A listed image or
//! issue directory whose name is not fails with [`ScanError::NonUtf8Name`];
//! non-image files are never decoded, so their names don't matter.

use crate::naming;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Failed to read directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("File name is not valid UTF-8: {}", .0.display())]
    NonUtf8Name(PathBuf),
}

/// Accepted image extensions, lowercase and without the leading dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// Whether `name` ends with `.<ext>` for one of `extensions`, ignoring case.
///
/// `extensions` must already be lowercase without the dot, as produced by
/// config loading.
pub fn has_image_extension(name: &str, extensions: &[String]) -> bool {
    let lower = name.to_lowercase();
    extensions.iter().any(|ext| {
        lower
            .strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Direct children of `dir`, unsorted.
fn children(dir: &Path) -> WalkDir {
    WalkDir::new(dir).min_depth(1).max_depth(1)
}

/// Filenames of the image files directly inside `dir`, in enumeration order.
///
/// Symlinks count when they resolve to a regular file.
pub fn list_images(dir: &Path, extensions: &[String]) -> Result<Vec<String>, ScanError> {
    let mut images = Vec::new();
    for entry in children(dir) {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        // Invalid bytes only turn into U+FFFD, so the suffix match is unaffected.
        if !has_image_extension(&entry.file_name().to_string_lossy(), extensions) {
            continue;
        }
        images.push(dir_name(entry.path())?);
    }
    Ok(images)
}

/// Sub-directories directly inside `dir`, in natural order of their names.
///
/// Plain files are skipped silently. A sub-directory whose name is not
/// valid UTF-8 is an error, since the name becomes the issue title.
pub fn list_subdirs(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let walker = children(dir).sort_by(|a, b| {
        naming::natural_cmp(&a.file_name().to_string_lossy(), &b.file_name().to_string_lossy())
    });
    let mut subdirs = Vec::new();
    for entry in walker {
        let entry = entry?;
        if entry.path().is_dir() {
            dir_name(entry.path())?;
            subdirs.push(entry.into_path());
        }
    }
    Ok(subdirs)
}

/// Base name of `path`, which must be valid UTF-8.
pub fn dir_name(path: &Path) -> Result<String, ScanError> {
    path.file_name()
        .unwrap_or(path.as_os_str())
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| ScanError::NonUtf8Name(path.to_path_buf()))
}
