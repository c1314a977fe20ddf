//! In-page anchor link handling.

use url::Url;

use crate::host::Document;

/// Whether a menu URL points at an in-page anchor.
#[must_use]
pub fn is_anchor_link(url: &str) -> bool {
    url.contains('#')
}

/// Extract the `#fragment` part of a URL.
///
/// Absolute URLs are parsed and yield their fragment (empty when the
/// fragment is missing or empty). Relative URLs and bare `#fragment`
/// strings fall back to slicing from the first `#`.
///
/// # Examples
///
/// ```
/// use elevate_menu::anchor_from_url;
///
/// assert_eq!(anchor_from_url("https://example.com/page#section"), "#section");
/// assert_eq!(anchor_from_url("/page#section"), "#section");
/// assert_eq!(anchor_from_url("not-a-url"), "");
/// ```
#[must_use]
pub fn anchor_from_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => parsed
            .fragment()
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| format!("#{fragment}"))
            .unwrap_or_default(),
        Err(_) => url
            .find('#')
            .map(|index| url[index..].to_owned())
            .unwrap_or_default(),
    }
}

/// Smooth-scroll the element matching `anchor` into view.
///
/// Returns `false` and logs a warning when the target does not exist.
pub fn scroll_to_anchor(document: &mut dyn Document, anchor: &str) -> bool {
    if anchor.is_empty() || !document.scroll_into_view(anchor) {
        tracing::warn!(anchor, "Anchor target not found");
        return false;
    }
    true
}
