//! Menu tree state machine.
//!
//! [`Menu`] owns every piece of mutable navigation state for one menu
//! instance: open flyouts, the mobile triggered stack, the focused item and
//! the registry of rendered element handles. Views are computed from it by
//! the renderer and never hold state of their own.
//!
//! # Keyboard routing
//!
//! | Target | Key | Action |
//! |---|---|---|
//! | nav | `ArrowDown` | focus `"0"` |
//! | nav | other | nothing |
//! | item | `Tab` | close all flyouts, default tabbing proceeds |
//! | item | `Escape` | close all flyouts, focus nav with `tabindex=0` |
//! | item | `Space` | click the item's link |
//! | item | `ArrowUp` | focus parent (top level stays) |
//! | item | `ArrowDown` | focus first child (leaf stays) |
//! | item | `ArrowLeft` | previous sibling, wrapping to the last |
//! | item | `ArrowRight` | next sibling, wrapping to the first |
//!
//! Flyout visibility for `ArrowUp`/`ArrowDown` is updated before focus moves
//! so a newly focused item is never inside a closed flyout.

use crate::anchor::{anchor_from_url, scroll_to_anchor};
use crate::host::{Document, ElementHandle};
use crate::keyboard::{Key, KeyOutcome, KeyTarget};
use crate::node::MenuNode;
use crate::options::MenuOptions;
use crate::path::PathId;
use crate::registry::NodeRegistry;
use crate::state::{TriggeredMenuItems, VisibleMenuItems};
use crate::tree::{MenuTree, NodeId};

/// Deferred anchor scroll, run once the mobile panel has started closing.
///
/// Returns whether the target was found.
pub type PendingScroll = Box<dyn FnOnce(&mut dyn Document) -> bool>;

/// Result of clicking an item's link or span.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Regular link, the browser navigates.
    FollowLink,
    /// Anchor link scrolled immediately (default prevented).
    Scrolled {
        /// Extracted `#fragment`.
        anchor: String,
        /// Whether the target element exists.
        found: bool,
    },
    /// Anchor link handed to the mobile panel (default prevented).
    ScrollDeferred {
        /// Extracted `#fragment`.
        anchor: String,
    },
    /// Mobile span opened its submenu.
    SubmenuTriggered,
    /// Nothing happens.
    Ignored,
}

/// Navigation state for one menu instance.
pub struct Menu<H> {
    tree: MenuTree,
    options: MenuOptions,
    registry: NodeRegistry<H>,
    visible: VisibleMenuItems,
    triggered: TriggeredMenuItems,
    focused: Option<NodeId>,
}

impl<H> Menu<H> {
    /// Build a menu over `entries`, capped at `options.max_depth`.
    #[must_use]
    pub fn new(entries: &[MenuNode], options: MenuOptions) -> Self {
        Self {
            tree: MenuTree::build(entries, options.max_depth),
            options,
            registry: NodeRegistry::new(),
            visible: VisibleMenuItems::default(),
            triggered: TriggeredMenuItems::default(),
            focused: None,
        }
    }

    /// Rendered tree.
    #[must_use]
    pub fn tree(&self) -> &MenuTree {
        &self.tree
    }

    /// Menu options.
    #[must_use]
    pub fn options(&self) -> &MenuOptions {
        &self.options
    }

    /// Element handle registry.
    #[must_use]
    pub fn registry(&self) -> &NodeRegistry<H> {
        &self.registry
    }

    /// Open flyouts.
    #[must_use]
    pub fn visible_menu_items(&self) -> &VisibleMenuItems {
        &self.visible
    }

    /// Mobile triggered stack.
    #[must_use]
    pub fn triggered_menu_items(&self) -> &TriggeredMenuItems {
        &self.triggered
    }

    /// Paths of open flyouts, depth-first.
    #[must_use]
    pub fn visible_paths(&self) -> Vec<PathId> {
        self.visible.iter().map(|id| self.tree.path(id).clone()).collect()
    }

    /// Paths on the mobile triggered stack, outermost first.
    #[must_use]
    pub fn triggered_paths(&self) -> Vec<PathId> {
        self.triggered
            .iter()
            .map(|id| self.tree.path(id).clone())
            .collect()
    }

    /// Item currently holding keyboard focus.
    #[must_use]
    pub fn focused_item(&self) -> Option<&PathId> {
        self.focused.map(|id| self.tree.path(id))
    }

    /// Register the handle of a rendered item.
    pub fn register_item(&mut self, path: PathId, handle: H) {
        if self.tree.find(&path).is_none() {
            tracing::debug!(path = %path, "Registered handle for untracked menu path");
        }
        self.registry.register(path, handle);
    }

    /// Register the root nav element handle.
    pub fn register_nav(&mut self, handle: H) {
        self.registry.register_nav(handle);
    }

    /// Register a handle for every rendered item.
    pub fn mount(&mut self, mut make_handle: impl FnMut(&PathId) -> H) {
        for id in self.tree.iter() {
            let path = self.tree.path(id);
            self.registry.register(path.clone(), make_handle(path));
        }
    }

    /// Record that an item received focus.
    pub fn handle_focus(&mut self, path: &PathId) {
        match self.tree.find(path) {
            Some(id) => self.focused = Some(id),
            None => tracing::warn!(path = %path, "Focus on unknown menu path"),
        }
    }

    /// Record that the focused item lost focus.
    pub fn handle_blur(&mut self) {
        self.focused = None;
    }

    /// Pointer entered an item.
    ///
    /// Opens the item's flyout and closes every flyout that is not one of
    /// its ancestors, so moving to another branch collapses the old one.
    pub fn mouse_enter(&mut self, path: &PathId) {
        let Some(id) = self.find_or_warn(path) else {
            return;
        };
        if self.visible.contains(id) {
            return;
        }

        self.visible.insert(id);
        let tree = &self.tree;
        self.visible
            .retain(|&open| tree.is_ancestor_or_self(open, id));
    }

    /// Pointer left an item. Closes only that item's flyout.
    pub fn mouse_leave(&mut self, path: &PathId) {
        if let Some(id) = self.tree.find(path) {
            self.visible.remove(id);
        }
    }

    /// Close every flyout.
    pub fn reset_visible_menu_items(&mut self) {
        self.visible.clear();
    }

    /// Open the item's submenu on the mobile stack.
    ///
    /// Returns `false` if the item is unknown, has no children or is
    /// already on the stack.
    pub fn trigger(&mut self, path: &PathId) -> bool {
        let Some(id) = self.find_or_warn(path) else {
            return false;
        };
        if !self.tree.get(id).has_children() {
            return false;
        }
        self.triggered.push(id)
    }

    /// Go back one level on the mobile stack.
    pub fn go_back(&mut self) -> Option<PathId> {
        self.triggered.pop().map(|id| self.tree.path(id).clone())
    }

    /// Return to the top level on the mobile stack.
    pub fn reset_triggered_menu_items(&mut self) {
        self.triggered.clear();
    }

    /// Handle a click on an item's link or span.
    ///
    /// Anchor links never navigate: the target is scrolled into view. On
    /// mobile, when `mobile_anchor_click` is given, the scroll is handed to
    /// it instead so the panel can close first.
    pub fn click_item(
        &mut self,
        path: &PathId,
        document: &mut dyn Document,
        mobile_anchor_click: Option<&mut dyn FnMut(PendingScroll)>,
    ) -> ClickOutcome {
        let Some(id) = self.find_or_warn(path) else {
            return ClickOutcome::Ignored;
        };
        let item = self.tree.get(id);

        if item.has_url() {
            if !item.is_anchor_link() {
                return ClickOutcome::FollowLink;
            }

            let anchor = anchor_from_url(item.url());
            if self.options.is_mobile_menu
                && let Some(defer) = mobile_anchor_click
            {
                let target = anchor.clone();
                defer(Box::new(move |document: &mut dyn Document| {
                    scroll_to_anchor(document, &target)
                }));
                return ClickOutcome::ScrollDeferred { anchor };
            }

            let found = scroll_to_anchor(document, &anchor);
            return ClickOutcome::Scrolled { anchor, found };
        }

        if self.options.is_mobile_menu && item.has_children() && self.triggered.push(id) {
            return ClickOutcome::SubmenuTriggered;
        }

        ClickOutcome::Ignored
    }

    fn find_or_warn(&self, path: &PathId) -> Option<NodeId> {
        let id = self.tree.find(path);
        if id.is_none() {
            tracing::warn!(path = %path, "Unknown menu path");
        }
        id
    }
}

impl<H: ElementHandle> Menu<H> {
    /// Route a keydown on the nav element or one of its items.
    pub fn handle_keydown(&mut self, target: &KeyTarget, key: Key) -> KeyOutcome {
        match target {
            KeyTarget::Nav => {
                if key == Key::ArrowDown
                    && let Some(&first) = self.tree.roots().first()
                {
                    self.focus_node(first, None);
                }
                KeyOutcome::default()
            }
            KeyTarget::Item(path) => self.handle_item_keydown(path, key),
        }
    }

    fn handle_item_keydown(&mut self, path: &PathId, key: Key) -> KeyOutcome {
        if key == Key::Tab {
            self.visible.clear();
            return KeyOutcome::default();
        }

        let mut outcome = KeyOutcome::consumed();
        let Some(current) = self.find_or_warn(path) else {
            return outcome;
        };

        match key {
            Key::ArrowDown => {
                self.visible.insert(current);
            }
            Key::ArrowUp => {
                if let Some(parent) = self.tree.parent(current) {
                    self.visible.remove(parent);
                }
            }
            _ => {}
        }

        match key {
            Key::Escape => {
                self.visible.clear();
                if let Some(nav) = self.registry.nav() {
                    nav.set_tab_index(0);
                    nav.focus();
                }
                self.focused = None;
            }
            Key::Space => {
                if let Some(handle) = self.registry.lookup(path) {
                    handle.click();
                }
                outcome.clicked = Some(path.clone());
            }
            Key::ArrowUp => {
                let target = self.tree.parent(current).unwrap_or(current);
                self.focus_node(target, Some(current));
            }
            Key::ArrowDown => {
                let target = self.tree.first_child(current).unwrap_or(current);
                self.focus_node(target, Some(current));
            }
            Key::ArrowLeft => {
                let target = self.tree.previous_sibling_wrapping(current);
                self.focus_node(target, Some(current));
            }
            Key::ArrowRight => {
                let target = self.tree.next_sibling_wrapping(current);
                self.focus_node(target, Some(current));
            }
            Key::Tab | Key::Other => {}
        }

        outcome
    }

    /// Focus `target`, falling back to `current` when `target` has no handle.
    fn focus_node(&mut self, target: NodeId, current: Option<NodeId>) {
        let resolved = if self.registry.lookup(self.tree.path(target)).is_some() {
            Some(target)
        } else {
            current
        };
        let Some(resolved) = resolved else {
            return;
        };
        let Some(handle) = self.registry.lookup(self.tree.path(resolved)) else {
            return;
        };

        handle.focus();
        self.focused = Some(resolved);
        tracing::debug!(path = %self.tree.path(resolved), "Moved menu focus");
    }
}
