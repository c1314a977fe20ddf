//! Path identifiers for menu nodes.
//!
//! A [`PathId`] encodes a node's position as zero-based sibling indices
//! from the top level down, displayed dash-joined (`"0-2-1"` is the second
//! child of the third child of the first top-level item). The prefix of
//! length N identifies the ancestor at depth N.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Error returned when a path string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePathError {
    /// The path string was empty.
    #[error("menu path cannot be empty")]
    Empty,
    /// A segment was not a non-negative integer.
    #[error("invalid menu path segment '{segment}' in '{path}'")]
    InvalidSegment {
        /// Full path string.
        path: String,
        /// Offending segment.
        segment: String,
    },
}

/// Stable identity of a menu node within one tree.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PathId(Vec<usize>);

impl PathId {
    /// Path of a top-level item.
    #[must_use]
    pub fn top_level(index: usize) -> Self {
        Self(vec![index])
    }

    /// Path of this node's child at `index`.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut segments = Vec::with_capacity(self.0.len() + 1);
        segments.extend_from_slice(&self.0);
        segments.push(index);
        Self(segments)
    }

    /// Path of the parent node, `None` for top-level items.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.0.len() <= 1 {
            return None;
        }
        Some(Self(self.0[..self.0.len() - 1].to_vec()))
    }

    /// Depth of the node (1 for top-level items).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Index among siblings.
    #[must_use]
    pub fn index(&self) -> usize {
        self.0.last().copied().unwrap_or_default()
    }

    /// Whether `self` is `other` or one of its ancestors.
    ///
    /// Compares whole segments, so `"1"` is not an ancestor of `"10"`.
    #[must_use]
    pub fn is_ancestor_or_self_of(&self, other: &PathId) -> bool {
        other.0.starts_with(&self.0)
    }
}

impl fmt::Display for PathId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for PathId {
    type Err = ParsePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParsePathError::Empty);
        }
        s.split('-')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| ParsePathError::InvalidSegment {
                        path: s.to_owned(),
                        segment: segment.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

impl Serialize for PathId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
