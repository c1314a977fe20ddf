//! Mutable menu state slices.

use std::collections::BTreeSet;

use crate::tree::NodeId;

/// Nodes whose flyout submenu is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleMenuItems(BTreeSet<NodeId>);

impl VisibleMenuItems {
    /// Whether the node's flyout is showing.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    pub(crate) fn insert(&mut self, id: NodeId) -> bool {
        self.0.insert(id)
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> bool {
        self.0.remove(&id)
    }

    pub(crate) fn retain(&mut self, keep: impl FnMut(&NodeId) -> bool) {
        self.0.retain(keep);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// Number of open flyouts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether every flyout is closed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Open flyouts in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

/// Stack of submenus drilled into on mobile.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggeredMenuItems(Vec<NodeId>);

impl TriggeredMenuItems {
    /// Whether the node's submenu was drilled into.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    /// Push a node unless it is already on the stack.
    pub(crate) fn push(&mut self, id: NodeId) -> bool {
        if self.0.contains(&id) {
            return false;
        }
        self.0.push(id);
        true
    }

    pub(crate) fn pop(&mut self) -> Option<NodeId> {
        self.0.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// Stack depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the top level is showing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries from the outermost to the innermost.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}
