//! Host environment seams.
//!
//! The menu never touches a DOM directly. Hosts implement these traits to
//! receive focus, click and scroll requests.

/// Handle to a rendered element owned by the host.
///
/// Handles take `&self` so hosts can hand out cheap references to
/// elements they own, the way a DOM ref does.
pub trait ElementHandle {
    /// Move keyboard focus to the element.
    fn focus(&self);

    /// Dispatch a click on the element.
    fn click(&self);

    /// Set the element's `tabindex`.
    fn set_tab_index(&self, _index: i32) {}
}

/// Document-level operations needed by menu links.
pub trait Document {
    /// Smooth-scroll the element matching `selector` into view.
    ///
    /// Returns `false` when no element matches.
    fn scroll_into_view(&mut self, selector: &str) -> bool;
}
