//! Mock viewport for testing.
//!
//! [`MockViewport`] extends [`MockDocument`] with a scroll position, body
//! styles and element heights, recording changes into the shared
//! [`HostLog`].

use std::collections::HashMap;

use elevate_menu::Document;
use elevate_menu::mock::{HostEvent, HostLog, MockDocument};

use crate::viewport::Viewport;

/// In-memory viewport.
#[derive(Debug)]
pub struct MockViewport {
    document: MockDocument,
    scroll_y: f64,
    body: HashMap<String, String>,
    heights: HashMap<String, f64>,
}

impl MockViewport {
    #[must_use]
    pub fn new(log: HostLog) -> Self {
        Self {
            document: MockDocument::new(log),
            scroll_y: 0.0,
            body: HashMap::new(),
            heights: HashMap::new(),
        }
    }

    /// Add an element matching `selector` that anchors can scroll to.
    #[must_use]
    pub fn with_target(mut self, selector: impl Into<String>) -> Self {
        self.document = self.document.with_target(selector);
        self
    }

    /// Add an element with a rendered height.
    #[must_use]
    pub fn with_height(mut self, selector: impl Into<String>, height: f64) -> Self {
        self.heights.insert(selector.into(), height);
        self
    }

    /// Start scrolled to `y`.
    #[must_use]
    pub fn with_scroll_y(mut self, y: f64) -> Self {
        self.scroll_y = y;
        self
    }

    /// Current inline body style property.
    #[must_use]
    pub fn body_style(&self, property: &str) -> Option<&str> {
        self.body.get(property).map(String::as_str)
    }

    /// Shared interaction log.
    #[must_use]
    pub fn log(&self) -> &HostLog {
        self.document.log()
    }
}

impl Document for MockViewport {
    fn scroll_into_view(&mut self, selector: &str) -> bool {
        self.document.scroll_into_view(selector)
    }
}

impl Viewport for MockViewport {
    fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    fn scroll_to(&mut self, y: f64) {
        self.scroll_y = y;
        self.log().push(HostEvent::WindowScroll(y));
    }

    fn set_body_style(&mut self, property: &str, value: &str) {
        if value.is_empty() {
            self.body.remove(property);
        } else {
            self.body.insert(property.to_owned(), value.to_owned());
        }
        self.log().push(HostEvent::BodyStyle {
            property: property.to_owned(),
            value: value.to_owned(),
        });
    }

    fn element_height(&self, selector: &str) -> Option<f64> {
        self.heights.get(selector).copied()
    }
}
