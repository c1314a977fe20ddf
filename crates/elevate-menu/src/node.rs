//! Menu data as authored in the CMS.

use serde::{Deserialize, Deserializer, Serialize};

use crate::anchor::is_anchor_link;

/// One navigation entry from the menu source.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuNode {
    /// Display text.
    pub label: String,
    /// Destination. Empty or whitespace means the entry is not a link.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    /// Link target, `_blank` opens a new tab.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link_target: Option<String>,
    /// Child entries in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl MenuNode {
    /// Create a leaf entry.
    #[must_use]
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            link_target: None,
            children: Vec::new(),
        }
    }

    /// Set the link target.
    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.link_target = Some(target.into());
        self
    }

    /// Set the children.
    #[must_use]
    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    /// Whether the entry renders as a link.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.trim().is_empty()
    }

    /// Whether the entry links to an in-page anchor.
    #[must_use]
    pub fn is_anchor_link(&self) -> bool {
        is_anchor_link(&self.url)
    }

    /// Whether the rendered link carries `target="_blank" rel="noopener"`.
    ///
    /// Anchor links never open in a new tab.
    #[must_use]
    pub fn opens_in_new_tab(&self) -> bool {
        self.has_url() && self.link_target.as_deref() == Some("_blank") && !self.is_anchor_link()
    }
}
