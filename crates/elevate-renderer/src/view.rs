//! Computed views of a menu.
//!
//! Views are plain data derived from [`Menu`](elevate_menu::Menu) state.
//! They hold no state of their own and are rebuilt after every change.

use elevate_menu::PathId;

/// Root nav element and its item list.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MenuView {
    /// `tabindex` of the nav element.
    pub tab_index: i32,
    /// `aria-label` of the nav element.
    pub aria_label: String,
    /// Classes of the `<ul role="menu">` list.
    pub list_classes: Vec<String>,
    /// Top-level items.
    pub items: Vec<ItemView>,
}

/// One `<li role="menuitem">`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ItemView {
    /// Node identity.
    pub path: PathId,
    /// Depth, 1 for top-level items.
    pub depth: usize,
    /// Display text.
    pub label: String,
    /// Classes of the `<li>`.
    pub classes: Vec<String>,
    /// Link or span.
    pub link: LinkView,
    /// Whether the submenu arrow renders.
    pub arrow: bool,
    /// `aria-expanded`, present only on items with children.
    pub aria_expanded: Option<bool>,
    /// Nested list, present when children render.
    pub submenu: Option<SubmenuView>,
}

/// Item link (`<a>`) or non-interactive span.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LinkView {
    /// Destination, `None` renders a span.
    pub href: Option<String>,
    /// Whether `target="_blank" rel="noopener"` is set.
    pub new_tab: bool,
    /// Classes of the link or span.
    pub classes: Vec<String>,
}

/// Nested `<ul>` of an item.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SubmenuView {
    /// Classes of the `<ul>`.
    pub classes: Vec<String>,
    /// Inline display, set only for flyout submenus.
    pub display: Option<SubmenuDisplay>,
    /// Child items.
    pub items: Vec<ItemView>,
}

/// Inline `display` of a flyout submenu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SubmenuDisplay {
    Block,
    None,
}

impl SubmenuDisplay {
    /// CSS value.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::None => "none",
        }
    }
}

impl MenuView {
    /// Find an item view by path.
    #[must_use]
    pub fn find(&self, path: &PathId) -> Option<&ItemView> {
        find_in(&self.items, path)
    }
}

fn find_in<'a>(items: &'a [ItemView], path: &PathId) -> Option<&'a ItemView> {
    items.iter().find_map(|item| {
        if &item.path == path {
            return Some(item);
        }
        if !item.path.is_ancestor_or_self_of(path) {
            return None;
        }
        item.submenu
            .as_ref()
            .and_then(|submenu| find_in(&submenu.items, path))
    })
}
