//! Index generation.
//!
//! Walks the configured gallery roots in order and writes one index file per
//! standard gallery and one per zine issue:
//!
//! ```text
//! images/
//! ├── street/                      # Standard
//! │   ├── a.jpg
//! │   ├── b.png
//! │   └── index.json               ← ["a.jpg", "b.png"]
//! └── zines/                       # ZineCollection
//!     ├── Issue 1/
//!     │   ├── 1.png
//!     │   ├── 10.png
//!     │   ├── 2.png
//!     │   └── index.json           ← cover 1.png, pages [1, 2, 10]
//!     └── drafts/                  # no images → skipped with a warning
//! ```
//!
//! ## Ordering
//!
//! Standard galleries keep file-system enumeration order, untouched. Zine
//! pages are sorted with [`naming::natural_cmp`], so their output is stable
//! across runs.
//!
//! ## Failure Handling
//!
//! A missing root or an issue with no images is reported as a warning
//! [`GenerateEvent`] and skipped; the run continues. Any read or write error
//! on an existing directory aborts the run.

use crate::config::IndexConfig;
use crate::index::{self, IndexError, StandardIndex, ZineIndex, INDEX_FILENAME};
use crate::naming;
use crate::scan::{self, ScanError, IMAGE_EXTENSIONS};
use crate::types::{GalleryKind, GalleryRoot};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Index error: {0}")]
    Index(#[from] IndexError),
}

/// Settings shared by every root in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Lowercase extensions without the dot.
    pub extensions: Vec<String>,
    pub index_filename: String,
    /// Compute every index and emit events, but write nothing.
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            index_filename: INDEX_FILENAME.to_string(),
            dry_run: false,
        }
    }
}

impl From<&IndexConfig> for GenerateOptions {
    fn from(config: &IndexConfig) -> Self {
        Self {
            extensions: config.extensions.clone(),
            index_filename: config.index_filename.clone(),
            dry_run: false,
        }
    }
}

/// Progress of a run, one event per root or issue handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateEvent {
    /// A standard gallery index was written (or would be, in a dry run).
    StandardWritten { path: PathBuf, count: usize },
    /// A zine issue index was written (or would be, in a dry run).
    ZineWritten { path: PathBuf, count: usize },
    /// A configured root does not exist as a directory.
    MissingRoot { path: PathBuf },
    /// A zine issue directory holds no images.
    EmptyZine { path: PathBuf },
}

impl GenerateEvent {
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            GenerateEvent::MissingRoot { .. } | GenerateEvent::EmptyZine { .. }
        )
    }
}

/// Totals for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateReport {
    /// Index files written, in order.
    pub indexed: Vec<PathBuf>,
    /// Images listed across all written indexes.
    pub images: usize,
    /// Roots and issues skipped with a warning.
    pub skipped: usize,
}

impl GenerateReport {
    fn record(&mut self, event: &GenerateEvent) {
        match event {
            GenerateEvent::StandardWritten { path, count }
            | GenerateEvent::ZineWritten { path, count } => {
                self.indexed.push(path.clone());
                self.images += count;
            }
            GenerateEvent::MissingRoot { .. } | GenerateEvent::EmptyZine { .. } => {
                self.skipped += 1;
            }
        }
    }
}

/// Generate indexes for every root in order.
///
/// `on_event` is called as soon as each root or issue is handled, so output
/// stays in order even if a later root fails.
pub fn generate(
    roots: &[GalleryRoot],
    options: &GenerateOptions,
    mut on_event: impl FnMut(&GenerateEvent),
) -> Result<GenerateReport, GenerateError> {
    let mut report = GenerateReport::default();
    let mut emit = |event: GenerateEvent| {
        report.record(&event);
        on_event(&event);
    };

    for root in roots {
        if !root.path.is_dir() {
            emit(GenerateEvent::MissingRoot {
                path: root.path.clone(),
            });
            continue;
        }
        match root.kind {
            GalleryKind::Standard => generate_standard(&root.path, options, &mut emit)?,
            GalleryKind::ZineCollection => generate_zines(&root.path, options, &mut emit)?,
        }
    }

    Ok(report)
}

/// List the images of a standard gallery, in enumeration order.
pub fn build_standard_index(
    dir: &Path,
    extensions: &[String],
) -> Result<StandardIndex, GenerateError> {
    let images = scan::list_images(dir, extensions)?;
    Ok(StandardIndex { images })
}

/// Build the index of one zine issue, or `None` if it has no images.
pub fn build_zine_index(
    issue_dir: &Path,
    extensions: &[String],
) -> Result<Option<ZineIndex>, GenerateError> {
    let mut pages = scan::list_images(issue_dir, extensions)?;
    naming::sort_naturally(&mut pages);
    Ok(ZineIndex::from_pages(&scan::dir_name(issue_dir)?, pages))
}

fn generate_standard(
    dir: &Path,
    options: &GenerateOptions,
    emit: &mut impl FnMut(GenerateEvent),
) -> Result<(), GenerateError> {
    let index = build_standard_index(dir, &options.extensions)?;
    let path = write_or_plan(dir, options, &index)?;
    emit(GenerateEvent::StandardWritten {
        path,
        count: index.images.len(),
    });
    Ok(())
}

fn generate_zines(
    root: &Path,
    options: &GenerateOptions,
    emit: &mut impl FnMut(GenerateEvent),
) -> Result<(), GenerateError> {
    for issue_dir in scan::list_subdirs(root)? {
        let Some(index) = build_zine_index(&issue_dir, &options.extensions)? else {
            emit(GenerateEvent::EmptyZine { path: issue_dir });
            continue;
        };
        let path = write_or_plan(&issue_dir, options, &index)?;
        emit(GenerateEvent::ZineWritten {
            path,
            count: index.pages.len(),
        });
    }
    Ok(())
}

/// Write the index unless this is a dry run. Returns the index file path
/// either way.
fn write_or_plan<T: serde::Serialize>(
    dir: &Path,
    options: &GenerateOptions,
    value: &T,
) -> Result<PathBuf, GenerateError> {
    if options.dry_run {
        // Still encode, so a dry run catches serialization failures too.
        index::to_json(value)?;
        return Ok(dir.join(&options.index_filename));
    }
    Ok(index::write_index(dir, &options.index_filename, value)?)
}
