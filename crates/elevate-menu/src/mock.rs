//! Mock host implementation for testing.
//!
//! Provides [`MockHandle`] and [`MockDocument`], which record every host
//! interaction into a shared [`HostLog`] so tests can assert on ordering.
//!
//! # Example
//!
//! ```ignore
//! use elevate_menu::{Menu, MenuOptions};
//! use elevate_menu::mock::{HostLog, MockHandle, sample_entries};
//!
//! let log = HostLog::default();
//! let mut menu = Menu::new(&sample_entries(), MenuOptions::default());
//! menu.mount(|path| MockHandle::new(path.to_string(), log.clone()));
//! menu.register_nav(MockHandle::new("nav", log.clone()));
//! ```

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::host::{Document, ElementHandle};
use crate::node::MenuNode;

/// One recorded host interaction.
#[derive(Clone, Debug, PartialEq)]
pub enum HostEvent {
    /// Element received focus.
    Focus(String),
    /// Element received a synthesized click.
    Click(String),
    /// Element `tabindex` changed.
    TabIndex(String, i32),
    /// Scroll-into-view lookup.
    ScrollIntoView {
        /// Selector that was looked up.
        selector: String,
        /// Whether an element matched.
        found: bool,
    },
    /// Window scrolled to a vertical offset.
    WindowScroll(f64),
    /// Body inline style property changed (empty value means removed).
    BodyStyle {
        /// CSS property name.
        property: String,
        /// New value.
        value: String,
    },
}

/// Shared, ordered record of host interactions.
#[derive(Clone, Debug, Default)]
pub struct HostLog(Rc<RefCell<Vec<HostEvent>>>);

impl HostLog {
    /// Append an event.
    pub fn push(&self, event: HostEvent) {
        self.0.borrow_mut().push(event);
    }

    /// Snapshot of all events so far.
    #[must_use]
    pub fn events(&self) -> Vec<HostEvent> {
        self.0.borrow().clone()
    }

    /// Remove and return all events.
    #[must_use]
    pub fn take(&self) -> Vec<HostEvent> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    /// Element ids that received focus, in order.
    #[must_use]
    pub fn focused(&self) -> Vec<String> {
        self.0
            .borrow()
            .iter()
            .filter_map(|event| match event {
                HostEvent::Focus(id) => Some(id.clone()),
                _ => None,
            })
            .collect()
    }
}

/// Element handle that records interactions.
#[derive(Clone, Debug)]
pub struct MockHandle {
    id: String,
    log: HostLog,
}

impl MockHandle {
    /// Create a handle named `id` writing into `log`.
    #[must_use]
    pub fn new(id: impl Into<String>, log: HostLog) -> Self {
        Self {
            id: id.into(),
            log,
        }
    }

    /// Element id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl ElementHandle for MockHandle {
    fn focus(&self) {
        self.log.push(HostEvent::Focus(self.id.clone()));
    }

    fn click(&self) {
        self.log.push(HostEvent::Click(self.id.clone()));
    }

    fn set_tab_index(&self, index: i32) {
        self.log.push(HostEvent::TabIndex(self.id.clone(), index));
    }
}

/// In-memory document with a fixed set of scroll targets.
#[derive(Debug)]
pub struct MockDocument {
    targets: HashSet<String>,
    log: HostLog,
}

impl MockDocument {
    /// Create a document without any targets.
    #[must_use]
    pub fn new(log: HostLog) -> Self {
        Self {
            targets: HashSet::new(),
            log,
        }
    }

    /// Add an element matching `selector`.
    #[must_use]
    pub fn with_target(mut self, selector: impl Into<String>) -> Self {
        self.targets.insert(selector.into());
        self
    }

    /// Shared interaction log.
    #[must_use]
    pub fn log(&self) -> &HostLog {
        &self.log
    }
}

impl Document for MockDocument {
    fn scroll_into_view(&mut self, selector: &str) -> bool {
        let found = self.targets.contains(selector);
        self.log.push(HostEvent::ScrollIntoView {
            selector: selector.to_owned(),
            found,
        });
        found
    }
}

/// Three-level menu used across tests and benchmarks.
///
/// ```text
/// 0 Products (/products)
///   0-0 Hub (/products/hub)
///     0-0-0 Pricing (/products/hub#pricing)
///     0-0-1 Features (/products/hub/features, new tab)
///   0-1 Apps (/products/apps)
///   0-2 Integrations (no url)
/// 1 About (no url)
///   1-0 Team (#team)
///   1-1 Careers (/careers)
/// 2 Contact (/contact)
/// ```
#[must_use]
pub fn sample_entries() -> Vec<MenuNode> {
    vec![
        MenuNode::new("Products", "/products").with_children(vec![
            MenuNode::new("Hub", "/products/hub").with_children(vec![
                MenuNode::new("Pricing", "/products/hub#pricing"),
                MenuNode::new("Features", "/products/hub/features").with_target("_blank"),
            ]),
            MenuNode::new("Apps", "/products/apps"),
            MenuNode::new("Integrations", ""),
        ]),
        MenuNode::new("About", "").with_children(vec![
            MenuNode::new("Team", "#team"),
            MenuNode::new("Careers", "/careers"),
        ]),
        MenuNode::new("Contact", "/contact"),
    ]
}
