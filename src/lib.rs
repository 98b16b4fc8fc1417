//! # Gallery Index
//!
//! Writes `index.json` files into image gallery directories so a static site
//! can list images without directory listings at runtime. The filesystem is
//! the data source; the generated files are the only output.
//!
//! # Gallery Kinds
//!
//! Each configured root is one of two kinds:
//!
//! ```text
//! Standard        images/street/index.json          ["a.jpg", "b.png"]
//! ZineCollection  images/zines/<issue>/index.json   {cover, pages, title}
//! ```
//!
//! A zine collection is a directory of issues; each issue is a directory of
//! pages. Pages are sorted in natural order (`2.png` before `10.png`) and the
//! first page is the cover.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`generate`] | Runs the configured roots: existence check, standard and zine indexing |
//! | [`scan`] | Lists image files and issue directories |
//! | [`naming`] | Natural sort key for page filenames |
//! | [`index`] | Index records and their JSON encoding |
//! | [`config`] | `gallery-index.toml` loading, merging, and validation |
//! | [`types`] | `GalleryRoot` and `GalleryKind` |
//! | [`output`] | CLI output formatting for run events |
//!
//! # Design Decisions
//!
//! ## Explicit Gallery Kinds
//!
//! Every root carries a [`types::GalleryKind`]. The old convention (a path
//! ending in `zines` is a zine collection) survives only as the default for
//! config entries that omit `kind`.
//!
//! ## Full Regeneration
//!
//! Every run rewrites every index file from scratch. Galleries are small and
//! the output is a pure function of the directory contents, so there is no
//! cache and nothing to merge.
//!
//! ## Skip, Don't Fail
//!
//! A missing gallery or an issue without images is reported and skipped.
//! Read and write errors on directories that do exist abort the run.

pub mod config;
pub mod generate;
pub mod index;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
