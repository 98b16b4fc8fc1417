//! Index file records and their JSON encoding.
//!
//! Two shapes are written, both pretty-printed with 2-space indentation,
//! UTF-8 with non-ASCII characters left as-is, and no trailing newline:
//!
//! ```text
//! images/street/index.json            ["a.jpg", "b.png"]
//!
//! images/zines/Issue 1/index.json     {
//!                                       "cover": "1.png",
//!                                       "pages": ["1.png", "2.png"],
//!                                       "title": { "fr": "Issue 1", "en": "Issue 1" }
//!                                     }
//! ```
//!
//! Field order in the structs below is the key order in the output.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default name of every generated file.
pub const INDEX_FILENAME: &str = "index.json";

#[derive(Error, Debug)]
pub enum IndexError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Index of a standard gallery: a flat list of filenames.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StandardIndex {
    pub images: Vec<String>,
}

/// Index of one zine issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZineIndex {
    /// First page in natural order.
    pub cover: String,
    pub pages: Vec<String>,
    pub title: ZineTitle,
}

/// Bilingual title. Both languages carry the directory name; there is no
/// translation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZineTitle {
    pub fr: String,
    pub en: String,
}

impl ZineTitle {
    pub fn untranslated(name: &str) -> Self {
        Self {
            fr: name.to_string(),
            en: name.to_string(),
        }
    }
}

impl ZineIndex {
    /// Build the record for an issue from its already-sorted pages.
    ///
    /// Returns `None` when there are no pages: an issue without a cover is
    /// never written.
    pub fn from_pages(name: &str, pages: Vec<String>) -> Option<Self> {
        let cover = pages.first()?.clone();
        Some(Self {
            cover,
            pages,
            title: ZineTitle::untranslated(name),
        })
    }
}

/// Encode a record exactly as it is written to disk.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, IndexError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Write `value` as `<dir>/<filename>`, replacing any existing file.
///
/// Returns the path written.
pub fn write_index<T: Serialize>(
    dir: &Path,
    filename: &str,
    value: &T,
) -> Result<PathBuf, IndexError> {
    let json = to_json(value)?;
    let path = dir.join(filename);
    fs::write(&path, json).map_err(|source| IndexError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
