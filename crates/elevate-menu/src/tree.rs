//! Arena-backed menu tree.
//!
//! # Architecture
//!
//! Rendered nodes are stored in a flat `Vec<TreeItem>` in depth-first
//! order with parent/children relationships tracked by [`NodeId`] indices.
//! This provides:
//! - O(1) parent, first-child and sibling lookups for keyboard navigation
//! - O(1) [`PathId`] lookups via `path_index` `HashMap`
//! - O(d) ancestor checks where d is the node depth
//!
//! Only nodes within `max_depth` are stored. Deeper data is dropped while
//! building, but each item remembers whether its source entry had children.

use std::collections::HashMap;

use crate::node::MenuNode;
use crate::path::PathId;

/// Index of a node in a [`MenuTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Arena index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A rendered menu node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeItem {
    /// Source entry without its children.
    entry: MenuNode,
    path: PathId,
    has_children: bool,
}

impl TreeItem {
    /// Display text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.entry.label
    }

    /// Destination URL as authored.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.entry.url
    }

    /// Link target as authored.
    #[must_use]
    pub fn link_target(&self) -> Option<&str> {
        self.entry.link_target.as_deref()
    }

    /// Position in the tree.
    #[must_use]
    pub fn path(&self) -> &PathId {
        &self.path
    }

    /// Depth, 1 for top-level items.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.path.depth()
    }

    /// Whether the source entry has children, rendered or not.
    #[must_use]
    pub fn has_children(&self) -> bool {
        self.has_children
    }

    /// Whether the item renders as a link.
    #[must_use]
    pub fn has_url(&self) -> bool {
        self.entry.has_url()
    }

    /// Whether the item links to an in-page anchor.
    #[must_use]
    pub fn is_anchor_link(&self) -> bool {
        self.entry.is_anchor_link()
    }

    /// Whether the item's link opens in a new tab.
    #[must_use]
    pub fn opens_in_new_tab(&self) -> bool {
        self.entry.opens_in_new_tab()
    }
}

/// Depth-capped menu tree with index-based links.
#[derive(Clone, Debug)]
pub struct MenuTree {
    items: Vec<TreeItem>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
    roots: Vec<NodeId>,
    path_index: HashMap<PathId, NodeId>,
    max_depth: usize,
}

impl MenuTree {
    /// Build a tree from menu entries, keeping nodes up to `max_depth`.
    ///
    /// A `max_depth` of 0 is treated as 1: the top level always renders.
    #[must_use]
    pub fn build(entries: &[MenuNode], max_depth: usize) -> Self {
        let mut tree = Self {
            items: Vec::new(),
            children: Vec::new(),
            parents: Vec::new(),
            roots: Vec::new(),
            path_index: HashMap::new(),
            max_depth: max_depth.max(1),
        };

        for (index, entry) in entries.iter().enumerate() {
            let id = tree.insert(entry, PathId::top_level(index), None);
            tree.roots.push(id);
        }

        tracing::debug!(
            nodes = tree.items.len(),
            max_depth = tree.max_depth,
            "Built menu tree"
        );
        tree
    }

    /// Insert `entry` and its renderable descendants depth-first.
    fn insert(&mut self, entry: &MenuNode, path: PathId, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.items.len());
        let depth = path.depth();

        self.items.push(TreeItem {
            entry: MenuNode {
                label: entry.label.clone(),
                url: entry.url.clone(),
                link_target: entry.link_target.clone(),
                children: Vec::new(),
            },
            path: path.clone(),
            has_children: !entry.children.is_empty(),
        });
        self.children.push(Vec::new());
        self.parents.push(parent);
        self.path_index.insert(path.clone(), id);

        if depth < self.max_depth {
            for (index, child) in entry.children.iter().enumerate() {
                let child_id = self.insert(child, path.child(index), Some(id));
                self.children[id.0].push(child_id);
            }
        }

        id
    }

    /// Maximum rendered depth.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Number of rendered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the tree has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a node.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &TreeItem {
        &self.items[id.0]
    }

    /// Path of a node.
    #[must_use]
    pub fn path(&self, id: NodeId) -> &PathId {
        &self.items[id.0].path
    }

    /// Look up a node by path.
    #[must_use]
    pub fn find(&self, path: &PathId) -> Option<NodeId> {
        self.path_index.get(path).copied()
    }

    /// Top-level nodes.
    #[must_use]
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Rendered children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    /// Parent of a node, `None` at the top level.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// First rendered child.
    #[must_use]
    pub fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.children[id.0].first().copied()
    }

    /// Nodes sharing the parent of `id`, including `id`.
    #[must_use]
    pub fn siblings(&self, id: NodeId) -> &[NodeId] {
        match self.parents[id.0] {
            Some(parent) => &self.children[parent.0],
            None => &self.roots,
        }
    }

    /// Next sibling, wrapping to the first one.
    #[must_use]
    pub fn next_sibling_wrapping(&self, id: NodeId) -> NodeId {
        let siblings = self.siblings(id);
        let position = self.items[id.0].path.index();
        siblings
            .get(position + 1)
            .or_else(|| siblings.first())
            .copied()
            .unwrap_or(id)
    }

    /// Previous sibling, wrapping to the last one.
    #[must_use]
    pub fn previous_sibling_wrapping(&self, id: NodeId) -> NodeId {
        let siblings = self.siblings(id);
        let position = self.items[id.0].path.index();
        position
            .checked_sub(1)
            .and_then(|previous| siblings.get(previous))
            .or_else(|| siblings.last())
            .copied()
            .unwrap_or(id)
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    #[must_use]
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parents[id.0];
        }
        false
    }

    /// All node ids in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.items.len()).map(NodeId)
    }
}
