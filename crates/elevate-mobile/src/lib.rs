//! Mobile slide-out panel for the Elevate navigation menu.
//!
//! [`MobilePanel`] wraps a mobile-mode [`elevate_menu::Menu`] and adds the
//! panel lifecycle on top: hamburger toggling, body scroll locking, the
//! settle and close timers, the back button and the deferred anchor scroll.
//!
//! Timers never run on their own. Hosts call [`MobilePanel::poll_timers`]
//! once [`MobilePanel::next_deadline`] has passed; tests and the CLI drive
//! time with [`ManualClock`].
//!
//! # Example
//!
//! ```ignore
//! use elevate_mobile::{MobilePanel, PanelOptions, SystemClock};
//!
//! let mut panel = MobilePanel::new(&entries, menu_options, PanelOptions::default(), SystemClock);
//! panel.toggle(&mut viewport);
//! // later, from the host's event loop
//! panel.poll_timers(&mut viewport);
//! ```

mod clock;
mod html;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
mod panel;
mod viewport;

pub use clock::{Clock, ManualClock, SystemClock};
pub use panel::{MobileColors, MobilePanel, MobilePanelState, PanelOptions, PanelPhase};
pub use viewport::{
    BUTTON_CONTAINER_SELECTOR, HEADER_SELECTOR, LANGUAGE_SWITCHER_SELECTOR, LayoutHeights, Viewport,
};
