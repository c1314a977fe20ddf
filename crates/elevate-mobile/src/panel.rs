//! Mobile slide-out panel controller.
//!
//! # Lifecycle
//!
//! ```text
//! Closed --toggle--> Opening --settle timer--> Open
//!   ^                                            |
//!   +--close timer-- Closing <------toggle-------+
//! ```
//!
//! Opening locks body scrolling at the current offset; closing restores it
//! and scrolls the window back. Timers are deadlines polled against a
//! [`Clock`]. Only one timer is armed at a time, so every transition
//! cancels whatever was pending before it.
//!
//! A mobile anchor click closes the panel and parks the scroll in a
//! one-shot slot that runs as soon as the panel is no longer animating.

use std::time::{Duration, Instant};

use elevate_menu::{ClickOutcome, Menu, MenuNode, MenuOptions, PathId, PendingScroll};
use elevate_renderer::CssVar;

use crate::clock::{Clock, SystemClock};
use crate::viewport::{LayoutHeights, Viewport};

const CONTAINER_CLASS: &str = "hs-elevate-site-header__menu-container";
const CONTAINER_SLIDING_CLASS: &str = "hs-elevate-site-header__menu-container--is-sliding";
const CONTAINER_HIDDEN_CLASS: &str = "hs-elevate-site-header__menu-container--is-hidden";
const HAMBURGER_CLASS: &str = "hs-elevate-site-header__hamburger-menu";
const HAMBURGER_ACTIVE_CLASS: &str = "hs-elevate-site-header__hamburger-menu--active";

/// Panel colors, applied as custom properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileColors {
    pub text: String,
    pub text_hover: String,
    pub background: String,
    pub accent: String,
}

impl Default for MobileColors {
    fn default() -> Self {
        Self {
            text: "#09152B".to_owned(),
            text_hover: "#09152B".to_owned(),
            background: "#FFFFFF".to_owned(),
            accent: "#F2F4F7".to_owned(),
        }
    }
}

/// Panel timing and appearance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelOptions {
    /// Delay between showing the panel and starting the slide animation.
    pub settle_delay: Duration,
    /// Length of the close transition.
    pub close_delay: Duration,
    pub colors: MobileColors,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(100),
            close_delay: Duration::from_millis(300),
            colors: MobileColors::default(),
        }
    }
}

/// Raw panel flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MobilePanelState {
    /// Toggled open by the hamburger.
    pub is_animating: bool,
    /// Slide-in animation running.
    pub is_menu_sliding: bool,
    /// Panel displayed at all.
    pub show_menu: bool,
    /// Close transition running.
    pub is_closing: bool,
}

/// Lifecycle phase derived from [`MobilePanelState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PanelPhase {
    Closed,
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TimerKind {
    Settle,
    Close,
}

#[derive(Clone, Copy, Debug)]
struct Timer {
    kind: TimerKind,
    deadline: Instant,
}

/// Mobile slide-out panel wrapping a mobile [`Menu`].
pub struct MobilePanel<H, C = SystemClock> {
    menu: Menu<H>,
    clock: C,
    options: PanelOptions,
    state: MobilePanelState,
    timer: Option<Timer>,
    pending: Option<PendingScroll>,
    preserved_scroll_y: f64,
    heights: LayoutHeights,
}

impl<H, C: Clock> MobilePanel<H, C> {
    /// Create a closed panel.
    ///
    /// `menu_options` are converted with [`MenuOptions::into_mobile`].
    #[must_use]
    pub fn new(entries: &[MenuNode], menu_options: MenuOptions, options: PanelOptions, clock: C) -> Self {
        Self {
            menu: Menu::new(entries, menu_options.into_mobile()),
            clock,
            options,
            state: MobilePanelState::default(),
            timer: None,
            pending: None,
            preserved_scroll_y: 0.0,
            heights: LayoutHeights::default(),
        }
    }

    /// Mobile menu.
    #[must_use]
    pub fn menu(&self) -> &Menu<H> {
        &self.menu
    }

    /// Mobile menu, for keyboard and hover routing.
    pub fn menu_mut(&mut self) -> &mut Menu<H> {
        &mut self.menu
    }

    /// Timer clock.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Panel options.
    #[must_use]
    pub fn options(&self) -> &PanelOptions {
        &self.options
    }

    /// Raw flags.
    #[must_use]
    pub fn state(&self) -> MobilePanelState {
        self.state
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> PanelPhase {
        let state = self.state;
        if !state.show_menu {
            PanelPhase::Closed
        } else if state.is_closing {
            PanelPhase::Closing
        } else if state.is_menu_sliding {
            PanelPhase::Open
        } else {
            PanelPhase::Opening
        }
    }

    /// Whether a deferred anchor scroll is waiting.
    #[must_use]
    pub fn has_pending_scroll(&self) -> bool {
        self.pending.is_some()
    }

    /// When the armed timer fires, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.map(|timer| timer.deadline)
    }

    /// Hamburger click.
    ///
    /// Always returns the menu to its top level, then opens or closes the
    /// panel.
    pub fn toggle(&mut self, viewport: &mut dyn Viewport) {
        self.menu.reset_triggered_menu_items();
        self.state.is_animating = !self.state.is_animating;

        if self.state.is_animating {
            self.open(viewport);
        } else if self.state.show_menu {
            self.close(viewport);
        }

        self.run_pending(viewport);
    }

    fn open(&mut self, viewport: &mut dyn Viewport) {
        self.state.show_menu = true;
        self.state.is_closing = false;

        self.preserved_scroll_y = viewport.scroll_y();
        viewport.set_body_style("overflow", "hidden");
        viewport.set_body_style("position", "fixed");
        viewport.set_body_style("width", "100%");
        viewport.set_body_style("height", "100%");
        viewport.set_body_style("top", &format!("-{}px", self.preserved_scroll_y));

        self.arm(TimerKind::Settle, self.options.settle_delay);
        tracing::debug!(scroll_y = self.preserved_scroll_y, "Opening mobile menu");
    }

    fn close(&mut self, viewport: &mut dyn Viewport) {
        self.state.is_closing = true;
        self.state.is_menu_sliding = false;

        for property in ["overflow", "position", "width", "height", "top"] {
            viewport.set_body_style(property, "");
        }
        viewport.scroll_to(self.preserved_scroll_y);

        self.arm(TimerKind::Close, self.options.close_delay);
        tracing::debug!(scroll_y = self.preserved_scroll_y, "Closing mobile menu");
    }

    fn arm(&mut self, kind: TimerKind, delay: Duration) {
        if let Some(previous) = self.timer.replace(Timer {
            kind,
            deadline: self.clock.now() + delay,
        }) {
            tracing::debug!(cancelled = ?previous.kind, "Cancelled mobile menu timer");
        }
    }

    /// Fire the armed timer if its deadline has passed.
    ///
    /// Returns whether a timer fired.
    pub fn poll_timers(&mut self, viewport: &mut dyn Viewport) -> bool {
        let now = self.clock.now();
        let Some(timer) = self.timer.filter(|timer| timer.deadline <= now) else {
            return false;
        };
        self.timer = None;

        match timer.kind {
            TimerKind::Settle => self.state.is_menu_sliding = true,
            TimerKind::Close => {
                self.state.show_menu = false;
                self.state.is_closing = false;
            }
        }
        tracing::debug!(timer = ?timer.kind, phase = ?self.phase(), "Mobile menu timer fired");

        self.run_pending(viewport);
        true
    }

    /// Close the panel and defer `scroll` until it stops animating.
    pub fn defer_anchor_scroll(&mut self, scroll: PendingScroll, viewport: &mut dyn Viewport) {
        if self.pending.replace(scroll).is_some() {
            tracing::debug!("Replaced pending anchor scroll");
        }
        self.toggle(viewport);
    }

    fn run_pending(&mut self, viewport: &mut dyn Viewport) {
        if self.state.is_animating {
            return;
        }
        if let Some(scroll) = self.pending.take() {
            let found = scroll(&mut *viewport);
            tracing::debug!(found, "Ran deferred anchor scroll");
        }
    }

    /// Click on an item's link or span inside the panel.
    ///
    /// Anchor links close the panel before scrolling.
    pub fn click_item(&mut self, path: &PathId, viewport: &mut dyn Viewport) -> ClickOutcome {
        let mut deferred: Option<PendingScroll> = None;
        let outcome = self.menu.click_item(
            path,
            &mut *viewport,
            Some(&mut |scroll: PendingScroll| deferred = Some(scroll)),
        );
        if let Some(scroll) = deferred {
            self.defer_anchor_scroll(scroll, viewport);
        }
        outcome
    }

    /// Click on an item's submenu arrow.
    pub fn click_arrow(&mut self, path: &PathId) -> bool {
        self.menu.trigger(path)
    }

    /// Back button. No-op at the top level.
    pub fn go_back(&mut self) -> Option<PathId> {
        self.menu.go_back()
    }

    /// Whether the back button shows.
    #[must_use]
    pub fn back_button_visible(&self) -> bool {
        !self.menu.triggered_menu_items().is_empty()
    }

    /// Re-read layout heights from the viewport.
    pub fn observe_layout(&mut self, viewport: &dyn Viewport) {
        self.heights = LayoutHeights::observe(viewport);
    }

    /// Last observed layout heights.
    #[must_use]
    pub fn heights(&self) -> LayoutHeights {
        self.heights
    }

    /// Color and size custom properties of the panel wrapper.
    #[must_use]
    pub fn css_vars(&self) -> Vec<CssVar> {
        let colors = &self.options.colors;
        vec![
            CssVar::new("--hsElevate--mobileMenu__textColor", colors.text.clone()),
            CssVar::new("--hsElevate--mobileMenu__hover--textColor", colors.text_hover.clone()),
            CssVar::new("--hsElevate--mobileMenu__backgroundColor", colors.background.clone()),
            CssVar::new("--hsElevate--mobileMenu__accentColor", colors.accent.clone()),
            CssVar::new("--hsElevate--mobileMenu__height", format!("{}px", self.heights.header)),
            CssVar::new(
                "--hsElevate--mobileMenuButtonContainer__height",
                format!("{}px", self.heights.button_container),
            ),
            CssVar::new(
                "--hsElevate--mobileMenuLanguageSwitcher__height",
                format!("{}px", self.heights.language_switcher),
            ),
        ]
    }

    /// Classes of the menu container.
    #[must_use]
    pub fn container_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![CONTAINER_CLASS];
        if self.state.is_menu_sliding {
            classes.push(CONTAINER_SLIDING_CLASS);
        }
        if !self.state.show_menu {
            classes.push(CONTAINER_HIDDEN_CLASS);
        }
        classes
    }

    /// Classes of the hamburger button.
    #[must_use]
    pub fn hamburger_classes(&self) -> Vec<&'static str> {
        let mut classes = vec![HAMBURGER_CLASS];
        if self.state.show_menu {
            classes.push(HAMBURGER_ACTIVE_CLASS);
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use elevate_menu::Document;
    use elevate_menu::mock::{HostEvent, HostLog, MockHandle, sample_entries};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::clock::ManualClock;
    use crate::mock::MockViewport;
    use crate::viewport::{BUTTON_CONTAINER_SELECTOR, HEADER_SELECTOR};

    type Panel = MobilePanel<MockHandle, ManualClock>;

    fn path(s: &str) -> PathId {
        s.parse().unwrap()
    }

    fn panel() -> Panel {
        MobilePanel::new(
            &sample_entries(),
            MenuOptions::default(),
            PanelOptions::default(),
            ManualClock::new(),
        )
    }

    fn advance(panel: &mut Panel, viewport: &mut MockViewport, ms: u64) -> bool {
        panel.clock().advance(Duration::from_millis(ms));
        panel.poll_timers(viewport)
    }

    fn open(panel: &mut Panel, viewport: &mut MockViewport) {
        panel.toggle(viewport);
        advance(panel, viewport, 100);
        assert_eq!(panel.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_menu_is_forced_into_mobile_mode() {
        let panel = panel();
        let options = panel.menu().options();
        assert!(options.is_mobile_menu);
        assert!(!options.flyouts);
        assert_eq!(options.additional_classes, vec!["hs-elevate-site-header__menu"]);
    }

    #[test]
    fn test_open_locks_body_then_slides_after_settle_delay() {
        let log = HostLog::default();
        let mut viewport = MockViewport::new(log.clone()).with_scroll_y(420.0);
        let mut panel = panel();

        panel.toggle(&mut viewport);

        assert_eq!(panel.phase(), PanelPhase::Opening);
        assert_eq!(viewport.body_style("overflow"), Some("hidden"));
        assert_eq!(viewport.body_style("position"), Some("fixed"));
        assert_eq!(viewport.body_style("top"), Some("-420px"));

        assert!(!advance(&mut panel, &mut viewport, 99));
        assert!(!panel.state().is_menu_sliding);
        assert!(advance(&mut panel, &mut viewport, 1));
        assert_eq!(panel.phase(), PanelPhase::Open);
        assert_eq!(panel.next_deadline(), None);
    }

    #[test]
    fn test_close_restores_body_and_hides_after_close_delay() {
        let log = HostLog::default();
        let mut viewport = MockViewport::new(log.clone()).with_scroll_y(420.0);
        let mut panel = panel();
        open(&mut panel, &mut viewport);
        let _ = log.take();

        panel.toggle(&mut viewport);

        assert_eq!(panel.phase(), PanelPhase::Closing);
        assert!(!panel.state().is_menu_sliding);
        assert_eq!(viewport.body_style("overflow"), None);
        assert_eq!(viewport.body_style("top"), None);
        assert_eq!(log.events().last(), Some(&HostEvent::WindowScroll(420.0)));

        assert!(!advance(&mut panel, &mut viewport, 299));
        assert!(advance(&mut panel, &mut viewport, 1));
        assert_eq!(panel.phase(), PanelPhase::Closed);
        assert_eq!(panel.state(), MobilePanelState::default());
    }

    #[test]
    fn test_reopen_while_closing_cancels_close_timer() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();
        open(&mut panel, &mut viewport);

        panel.toggle(&mut viewport);
        advance(&mut panel, &mut viewport, 150);
        panel.toggle(&mut viewport);
        assert_eq!(panel.phase(), PanelPhase::Opening);

        // The old close deadline passes without hiding the panel
        advance(&mut panel, &mut viewport, 100);
        assert_eq!(panel.phase(), PanelPhase::Open);
        advance(&mut panel, &mut viewport, 300);
        assert_eq!(panel.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_close_before_settle_cancels_slide() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();

        panel.toggle(&mut viewport);
        advance(&mut panel, &mut viewport, 50);
        panel.toggle(&mut viewport);
        advance(&mut panel, &mut viewport, 60);

        assert!(!panel.state().is_menu_sliding);
        assert_eq!(panel.phase(), PanelPhase::Closing);
    }

    #[test]
    fn test_every_toggle_resets_triggered_stack() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();

        for _ in 0..3 {
            panel.click_arrow(&path("0"));
            panel.click_arrow(&path("0-0"));
            assert_eq!(panel.menu().triggered_paths().len(), 2);

            panel.toggle(&mut viewport);
            assert!(panel.menu().triggered_paths().is_empty());
            advance(&mut panel, &mut viewport, 400);
        }
    }

    #[test]
    fn test_anchor_click_scrolls_once_after_panel_stops_animating() {
        let log = HostLog::default();
        let mut viewport = MockViewport::new(log.clone()).with_target("#team");
        let mut panel = panel();
        open(&mut panel, &mut viewport);
        let _ = log.take();

        let outcome = panel.click_item(&path("1-0"), &mut viewport);

        assert_eq!(
            outcome,
            ClickOutcome::ScrollDeferred {
                anchor: "#team".to_owned()
            }
        );
        assert!(!panel.state().is_animating);
        assert!(!panel.has_pending_scroll());
        let scrolls = |log: &HostLog| {
            log.events()
                .into_iter()
                .filter(|event| matches!(event, HostEvent::ScrollIntoView { .. }))
                .count()
        };
        assert_eq!(scrolls(&log), 1);

        // The scroll runs after the body is restored
        let events = log.events();
        assert!(matches!(events.last(), Some(HostEvent::ScrollIntoView { found: true, .. })));

        advance(&mut panel, &mut viewport, 300);
        panel.toggle(&mut viewport);
        panel.toggle(&mut viewport);
        assert_eq!(scrolls(&log), 1);
    }

    #[test]
    fn test_deferred_scroll_waits_while_animating() {
        let log = HostLog::default();
        let mut viewport = MockViewport::new(log.clone()).with_target("#team");
        let mut panel = panel();

        // Deferring while closed opens the panel, so the scroll must wait
        panel.defer_anchor_scroll(
            Box::new(|document: &mut dyn Document| document.scroll_into_view("#team")),
            &mut viewport,
        );
        assert!(panel.state().is_animating);
        assert!(panel.has_pending_scroll());

        advance(&mut panel, &mut viewport, 1000);
        assert!(panel.has_pending_scroll());

        panel.toggle(&mut viewport);
        assert!(!panel.has_pending_scroll());
        assert_eq!(
            log.events().last(),
            Some(&HostEvent::ScrollIntoView {
                selector: "#team".to_owned(),
                found: true,
            })
        );
    }

    #[test]
    fn test_regular_link_does_not_close_panel() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();
        open(&mut panel, &mut viewport);

        let outcome = panel.click_item(&path("2"), &mut viewport);

        assert_eq!(outcome, ClickOutcome::FollowLink);
        assert_eq!(panel.phase(), PanelPhase::Open);
    }

    #[test]
    fn test_span_click_and_back() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();
        open(&mut panel, &mut viewport);
        assert!(!panel.back_button_visible());

        assert_eq!(panel.click_item(&path("1"), &mut viewport), ClickOutcome::SubmenuTriggered);
        assert!(panel.back_button_visible());

        assert_eq!(panel.go_back(), Some(path("1")));
        assert_eq!(panel.go_back(), None);
        assert!(!panel.back_button_visible());
    }

    #[test]
    fn test_css_vars_use_observed_heights() {
        let viewport = MockViewport::new(HostLog::default())
            .with_height(HEADER_SELECTOR, 72.0)
            .with_height(BUTTON_CONTAINER_SELECTOR, 48.5);
        let mut panel = panel();
        panel.observe_layout(&viewport);

        let vars: Vec<(&str, String)> = panel
            .css_vars()
            .into_iter()
            .map(|var| (var.name, var.value))
            .collect();

        assert_eq!(
            vars,
            vec![
                ("--hsElevate--mobileMenu__textColor", "#09152B".to_owned()),
                ("--hsElevate--mobileMenu__hover--textColor", "#09152B".to_owned()),
                ("--hsElevate--mobileMenu__backgroundColor", "#FFFFFF".to_owned()),
                ("--hsElevate--mobileMenu__accentColor", "#F2F4F7".to_owned()),
                ("--hsElevate--mobileMenu__height", "72px".to_owned()),
                ("--hsElevate--mobileMenuButtonContainer__height", "48.5px".to_owned()),
                ("--hsElevate--mobileMenuLanguageSwitcher__height", "0px".to_owned()),
            ]
        );
    }

    #[test]
    fn test_container_and_hamburger_classes() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();
        assert_eq!(
            panel.container_classes(),
            vec![CONTAINER_CLASS, CONTAINER_HIDDEN_CLASS]
        );
        assert_eq!(panel.hamburger_classes(), vec![HAMBURGER_CLASS]);

        open(&mut panel, &mut viewport);
        assert_eq!(
            panel.container_classes(),
            vec![CONTAINER_CLASS, CONTAINER_SLIDING_CLASS]
        );
        assert_eq!(
            panel.hamburger_classes(),
            vec![HAMBURGER_CLASS, HAMBURGER_ACTIVE_CLASS]
        );
    }
}
