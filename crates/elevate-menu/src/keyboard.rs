//! Keyboard input types.

use std::str::FromStr;

use crate::path::PathId;

/// Keys the menu reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Space,
    Escape,
    Tab,
    /// Any key the menu does not handle.
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value.
    ///
    /// The space bar reports `" "`, which maps to [`Key::Space`].
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowUp" => Self::ArrowUp,
            "ArrowDown" => Self::ArrowDown,
            "ArrowLeft" => Self::ArrowLeft,
            "ArrowRight" => Self::ArrowRight,
            " " | "Space" => Self::Space,
            "Escape" => Self::Escape,
            "Tab" => Self::Tab,
            _ => Self::Other,
        }
    }
}

impl FromStr for Key {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_dom_key(s))
    }
}

/// Element that received a keydown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyTarget {
    /// The root nav element itself.
    Nav,
    /// A menu item.
    Item(PathId),
}

/// What the host should do with the original keyboard event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Stop the event from bubbling to the nav element.
    pub stop_propagation: bool,
    /// Suppress the browser default (scrolling, tabbing).
    pub prevent_default: bool,
    /// Item whose link received a synthesized click.
    ///
    /// Hosts that do not dispatch DOM clicks from
    /// [`ElementHandle::click`](crate::ElementHandle::click) route this to
    /// [`Menu::click_item`](crate::Menu::click_item).
    pub clicked: Option<PathId>,
}

impl KeyOutcome {
    /// Outcome for a key the menu consumed.
    #[must_use]
    pub(crate) fn consumed() -> Self {
        Self {
            stop_propagation: true,
            prevent_default: true,
            clicked: None,
        }
    }
}
