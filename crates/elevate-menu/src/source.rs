//! Menu source file loading.
//!
//! A source is either a bare array of [`MenuNode`]s or an object with a
//! `children` array (the shape of a CMS navigation field). JSON and YAML are
//! supported, chosen by file extension.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::node::MenuNode;

/// Error loading a menu source.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The file could not be read.
    #[error("Failed to read menu source {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid JSON.
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The file is not valid YAML.
    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// The extension is neither `.json`, `.yaml` nor `.yml`.
    #[error("Unsupported menu source format: {0}")]
    UnsupportedFormat(PathBuf),
}

/// Supported source encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Yaml,
}

impl SourceFormat {
    /// Detect the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSource {
    Entries(Vec<MenuNode>),
    Navigation { children: Vec<MenuNode> },
}

impl From<RawSource> for Vec<MenuNode> {
    fn from(raw: RawSource) -> Self {
        match raw {
            RawSource::Entries(entries) | RawSource::Navigation { children: entries } => entries,
        }
    }
}

/// Parse menu entries from a string.
pub fn parse_menu(content: &str, format: SourceFormat, path: &Path) -> Result<Vec<MenuNode>, SourceError> {
    let raw: RawSource = match format {
        SourceFormat::Json => serde_json::from_str(content).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?,
        SourceFormat::Yaml => serde_yaml::from_str(content).map_err(|source| SourceError::Yaml {
            path: path.to_path_buf(),
            source,
        })?,
    };
    Ok(raw.into())
}

/// Load menu entries from a JSON or YAML file.
pub fn load_menu(path: &Path) -> Result<Vec<MenuNode>, SourceError> {
    let format =
        SourceFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_menu(&content, format, path)?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "Loaded menu source");
    Ok(entries)
}
