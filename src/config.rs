//! Generator configuration.
//!
//! Loads `gallery-index.toml` from the base directory. Stock defaults are
//! overridden by whatever the file sets; a missing file means stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! extensions = ["jpg", "jpeg", "png", "webp"]
//! index_filename = "index.json"
//!
//! [[galleries]]
//! path = "images/street"
//! kind = "standard"
//!
//! [[galleries]]
//! path = "images/zines"
//! kind = "zine_collection"
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key by key, arrays replace wholesale. Setting `galleries`
//! replaces the whole stock list:
//!
//! ```toml
//! [[galleries]]
//! path = "photos/zines"    # kind inferred: ends with "zines"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::index::INDEX_FILENAME;
use crate::scan::IMAGE_EXTENSIONS;
use crate::types::{GalleryKind, GalleryRoot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Config file looked up in the base directory.
pub const CONFIG_FILENAME: &str = "gallery-index.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `gallery-index.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndexConfig {
    /// Accepted image extensions, matched case-insensitively.
    pub extensions: Vec<String>,
    /// Name of the file written into each gallery or issue directory.
    pub index_filename: String,
    /// Gallery roots, processed in order.
    pub galleries: Vec<GalleryEntry>,
}

/// One configured gallery root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GalleryEntry {
    /// Path relative to the base directory (or absolute).
    pub path: String,
    /// Explicit kind. When absent, inferred with [`GalleryKind::from_path`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<GalleryKind>,
}

impl GalleryEntry {
    fn new(path: &str, kind: GalleryKind) -> Self {
        Self {
            path: path.to_string(),
            kind: Some(kind),
        }
    }

    pub fn resolved_kind(&self) -> GalleryKind {
        self.kind
            .unwrap_or_else(|| GalleryKind::from_path(Path::new(&self.path)))
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            extensions: IMAGE_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            index_filename: INDEX_FILENAME.to_string(),
            galleries: vec![
                GalleryEntry::new("images/street", GalleryKind::Standard),
                GalleryEntry::new("images/voyage", GalleryKind::Standard),
                GalleryEntry::new("images/portrait", GalleryKind::Standard),
                GalleryEntry::new("images/concert", GalleryKind::Standard),
                GalleryEntry::new("images/zines", GalleryKind::ZineCollection),
            ],
        }
    }
}

impl IndexConfig {
    /// Lowercase extensions and strip a leading dot, so `".JPG"` and `"jpg"`
    /// mean the same thing.
    pub fn normalize(&mut self) {
        for ext in &mut self.extensions {
            *ext = ext.trim_start_matches('.').to_lowercase();
        }
    }

    /// Validate config values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.extensions.is_empty() {
            return Err(ConfigError::Validation(
                "extensions must not be empty".into(),
            ));
        }
        if let Some(ext) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.contains('.'))
        {
            return Err(ConfigError::Validation(format!(
                "invalid extension {ext:?}: must be non-empty with no inner dots"
            )));
        }
        if self.index_filename.is_empty()
            || self.index_filename.contains('/')
            || self.index_filename.contains('\\')
        {
            return Err(ConfigError::Validation(
                "index_filename must be a plain file name".into(),
            ));
        }
        if self.galleries.iter().any(|g| g.path.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "galleries.path must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Resolve gallery entries against `base` into roots with explicit kinds.
    pub fn gallery_roots(&self, base: &Path) -> Vec<GalleryRoot> {
        self.galleries
            .iter()
            .map(|entry| GalleryRoot {
                path: base.join(&entry.path),
                kind: entry.resolved_kind(),
            })
            .collect()
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(IndexConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `gallery-index.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(dir: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize, normalize
/// and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<IndexConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let mut config: IndexConfig = merged.try_into()?;
    config.normalize();
    config.validate()?;
    Ok(config)
}

/// Load config from `gallery-index.toml` in `dir`, falling back to stock
/// defaults.
pub fn load_config(dir: &Path) -> Result<IndexConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(dir)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `gallery-index.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gallery-index configuration
# ===========================
# All settings are optional. Values shown below are the defaults.
# Place this file as gallery-index.toml in the directory you run from
# (or the one passed with --root). Unknown keys cause an error.

# Image extensions to index, matched case-insensitively.
extensions = ["jpg", "jpeg", "png", "webp"]

# Name of the file written into every gallery and zine issue.
index_filename = "index.json"

# ---------------------------------------------------------------------------
# Galleries
# ---------------------------------------------------------------------------
# Paths are relative to this file's directory. Listing any gallery replaces
# the whole default list.
#
# kind = "standard"         -> one flat index.json listing the images
# kind = "zine_collection"  -> one index.json per sub-directory (issue), with
#                              pages in natural order, a cover and a title
#
# When kind is omitted, a path ending in "zines" is a zine collection and
# anything else is standard.

[[galleries]]
path = "images/street"
kind = "standard"

[[galleries]]
path = "images/voyage"
kind = "standard"

[[galleries]]
path = "images/portrait"
kind = "standard"

[[galleries]]
path = "images/concert"
kind = "standard"

[[galleries]]
path = "images/zines"
kind = "zine_collection"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_config(dir: &Path, content: &str) {
        fs::write(dir.join(CONFIG_FILENAME), content).unwrap();
    }

    #[test]
    fn default_config_has_reference_galleries() {
        let config = IndexConfig::default();
        let paths: Vec<&str> = config.galleries.iter().map(|g| g.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "images/street",
                "images/voyage",
                "images/portrait",
                "images/concert",
                "images/zines"
            ]
        );
        assert_eq!(
            config.galleries[4].kind,
            Some(GalleryKind::ZineCollection)
        );
    }

    #[test]
    fn default_config_has_extensions_and_filename() {
        let config = IndexConfig::default();
        assert_eq!(config.extensions, vec!["jpg", "jpeg", "png", "webp"]);
        assert_eq!(config.index_filename, "index.json");
    }

    #[test]
    fn stock_config_toml_matches_defaults() {
        let config: IndexConfig = toml::from_str(stock_config_toml()).unwrap();
        assert_eq!(config, IndexConfig::default());
    }

    // =========================================================================
    // load_config tests
    // =========================================================================

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config, IndexConfig::default());
    }

    #[test]
    fn partial_config_keeps_default_galleries() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), r#"extensions = ["jpg", "gif"]"#);

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.extensions, vec!["jpg", "gif"]);
        assert_eq!(config.galleries.len(), 5);
    }

    #[test]
    fn galleries_replace_defaults() {
        let tmp = TempDir::new().unwrap();
        write_config(
            tmp.path(),
            r#"
[[galleries]]
path = "photos/travel"

[[galleries]]
path = "photos/zines"
"#,
        );

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.galleries.len(), 2);
        assert_eq!(config.galleries[0].resolved_kind(), GalleryKind::Standard);
        assert_eq!(
            config.galleries[1].resolved_kind(),
            GalleryKind::ZineCollection
        );
    }

    #[test]
    fn explicit_kind_overrides_naming_convention() {
        let tmp = TempDir::new().unwrap();
        write_config(
            tmp.path(),
            r#"
[[galleries]]
path = "photos/issues"
kind = "zine_collection"

[[galleries]]
path = "photos/zines"
kind = "standard"
"#,
        );

        let roots = load_config(tmp.path()).unwrap().gallery_roots(tmp.path());
        assert_eq!(roots[0].kind, GalleryKind::ZineCollection);
        assert_eq!(roots[1].kind, GalleryKind::Standard);
    }

    #[test]
    fn extensions_are_normalized() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), r#"extensions = [".JPG", "Png"]"#);

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.extensions, vec!["jpg", "png"]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), "extension = [\"jpg\"]");
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let tmp = TempDir::new().unwrap();
        write_config(
            tmp.path(),
            "[[galleries]]\npath = \"a\"\nkind = \"magazine\"\n",
        );
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_error() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), "this is not [valid toml");
        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn empty_extensions_rejected() {
        let config = IndexConfig {
            extensions: vec![],
            ..IndexConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn dotted_extension_rejected() {
        let config = IndexConfig {
            extensions: vec!["tar.gz".into()],
            ..IndexConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn index_filename_with_separator_rejected() {
        let config = IndexConfig {
            index_filename: "sub/index.json".into(),
            ..IndexConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_gallery_path_rejected() {
        let tmp = TempDir::new().unwrap();
        write_config(tmp.path(), "[[galleries]]\npath = \"  \"\n");
        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn gallery_roots_are_joined_to_base() {
        let roots = IndexConfig::default().gallery_roots(Path::new("/srv/site"));
        assert_eq!(roots.len(), 5);
        assert_eq!(roots[0].path, PathBuf::from("/srv/site/images/street"));
        assert_eq!(roots[4].kind, GalleryKind::ZineCollection);
    }

    // =========================================================================
    // merge_toml tests
    // =========================================================================

    #[test]
    fn merge_overrides_scalars_and_keeps_rest() {
        let base: toml::Value = toml::from_str("a = 1\nb = 2").unwrap();
        let overlay: toml::Value = toml::from_str("b = 3").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["a"].as_integer(), Some(1));
        assert_eq!(merged["b"].as_integer(), Some(3));
    }

    #[test]
    fn merge_replaces_arrays() {
        let base: toml::Value = toml::from_str("xs = [1, 2, 3]").unwrap();
        let overlay: toml::Value = toml::from_str("xs = [9]").unwrap();
        let merged = merge_toml(base, overlay);
        assert_eq!(merged["xs"].as_array().unwrap().len(), 1);
    }
}
