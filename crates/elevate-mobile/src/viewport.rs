//! Window and body access needed by the panel.

use elevate_menu::Document;

/// Selector of the site header whose height sizes the panel.
pub const HEADER_SELECTOR: &str = ".hs-elevate-site-header";
/// Selector of the slide-out button container.
pub const BUTTON_CONTAINER_SELECTOR: &str = ".hs-elevate-site-header__mobile-button-container";
/// Selector of the mobile language switcher button.
pub const LANGUAGE_SWITCHER_SELECTOR: &str = ".hs-elevate-site-header__language-switcher-button";

/// Browser window as seen by the mobile panel.
pub trait Viewport: Document {
    /// Current vertical scroll offset.
    fn scroll_y(&self) -> f64;

    /// Scroll the window to a vertical offset.
    fn scroll_to(&mut self, y: f64);

    /// Set an inline style property on `<body>`. An empty value removes it.
    fn set_body_style(&mut self, property: &str, value: &str);

    /// Rendered height of the element matching `selector`.
    fn element_height(&self, selector: &str) -> Option<f64>;
}

/// Observed heights of the elements around the panel. Missing elements
/// read as 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LayoutHeights {
    pub header: f64,
    pub button_container: f64,
    pub language_switcher: f64,
}

impl LayoutHeights {
    /// Read all heights from the viewport.
    #[must_use]
    pub fn observe(viewport: &dyn Viewport) -> Self {
        Self {
            header: viewport.element_height(HEADER_SELECTOR).unwrap_or_default(),
            button_container: viewport
                .element_height(BUTTON_CONTAINER_SELECTOR)
                .unwrap_or_default(),
            language_switcher: viewport
                .element_height(LANGUAGE_SWITCHER_SELECTOR)
                .unwrap_or_default(),
        }
    }
}
