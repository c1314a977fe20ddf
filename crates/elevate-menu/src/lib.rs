//! Accessible multi-level navigation menu.
//!
//! This crate holds the headless core of the Elevate navigation menu: the
//! depth-capped menu tree, the keyboard navigation state machine, flyout
//! visibility tracking and the mobile triggered-submenu stack.
//!
//! # Architecture
//!
//! - [`MenuNode`] is the authored data, loaded with [`load_menu`]
//! - [`MenuTree`] stores rendered nodes in an arena keyed by [`NodeId`],
//!   with [`PathId`] as the stable external identity
//! - [`Menu`] owns all mutable state and routes keyboard, mouse and click
//!   events
//! - [`ElementHandle`] and [`Document`] are the host seams; rendered items
//!   register their handles in the menu's [`NodeRegistry`]
//! - [`mock`] provides recording test doubles (behind the `mock` feature)
//!
//! # Example
//!
//! ```ignore
//! use elevate_menu::{Key, KeyTarget, Menu, MenuOptions, load_menu};
//!
//! let entries = load_menu(Path::new("menu.json"))?;
//! let mut menu = Menu::new(&entries, MenuOptions::default());
//! menu.mount(|path| host.element_for(path));
//! menu.handle_keydown(&KeyTarget::Nav, Key::ArrowDown);
//! ```

mod anchor;
mod host;
mod keyboard;
mod menu;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod node;
mod options;
mod path;
mod registry;
mod source;
mod state;
mod tree;

pub use anchor::{anchor_from_url, is_anchor_link, scroll_to_anchor};
pub use host::{Document, ElementHandle};
pub use keyboard::{Key, KeyOutcome, KeyTarget};
pub use menu::{ClickOutcome, Menu, PendingScroll};
pub use node::MenuNode;
pub use options::{Flow, LinkStyleVariant, MenuOptions, SizeOption};
pub use path::{ParsePathError, PathId};
pub use registry::NodeRegistry;
pub use source::{SourceError, SourceFormat, load_menu, parse_menu};
pub use state::{TriggeredMenuItems, VisibleMenuItems};
pub use tree::{MenuTree, NodeId, TreeItem};
