//! Panel markup.

use elevate_renderer::{HtmlBackend, MenuRenderer, escape_html};

use crate::clock::Clock;
use crate::panel::MobilePanel;

const BACK_BUTTON_CLASS: &str = "hs-elevate-site-header__back-button";
const BACK_BUTTON_ICON_CLASS: &str = "hs-elevate-site-header__back-button-icon";

fn back_button() -> String {
    format!(
        r#"<button type="button" class="{BACK_BUTTON_CLASS}">{}Back</button>"#,
        HtmlBackend::arrow_svg(&[BACK_BUTTON_ICON_CLASS])
    )
}

impl<H, C: Clock> MobilePanel<H, C> {
    /// Render the hamburger and the slide-out container with its menu.
    #[must_use]
    pub fn render_html(&self) -> String {
        let back = if self.back_button_visible() {
            back_button()
        } else {
            String::new()
        };
        format!(
            concat!(
                r#"<div class="hs-elevate-site-header__mobile-menu" style="{style}">"#,
                r#"<div class="{hamburger}" tab-index="1"><div></div><div></div><div></div></div>"#,
                r#"<div class="{container}">{back}{menu}</div>"#,
                "</div>"
            ),
            style = escape_html(&HtmlBackend::style(&self.css_vars())),
            hamburger = self.hamburger_classes().join(" "),
            container = self.container_classes().join(" "),
            back = back,
            menu = HtmlBackend::render_menu(&MenuRenderer::new(self.menu()).render()),
        )
    }
}

#[cfg(test)]
mod tests {
    use elevate_menu::MenuOptions;
    use elevate_menu::mock::{HostLog, MockHandle, sample_entries};

    use crate::clock::ManualClock;
    use crate::mock::MockViewport;
    use crate::panel::{MobilePanel, PanelOptions};

    fn panel() -> MobilePanel<MockHandle, ManualClock> {
        MobilePanel::new(
            &sample_entries(),
            MenuOptions::default(),
            PanelOptions::default(),
            ManualClock::new(),
        )
    }

    #[test]
    fn test_closed_panel_markup() {
        let html = panel().render_html();

        assert!(html.starts_with(
            r#"<div class="hs-elevate-site-header__mobile-menu" style="--hsElevate--mobileMenu__textColor: #09152B;"#
        ));
        assert!(html.contains(r#"<div class="hs-elevate-site-header__hamburger-menu" tab-index="1">"#));
        assert!(html.contains(
            r#"<div class="hs-elevate-site-header__menu-container hs-elevate-site-header__menu-container--is-hidden"><nav"#
        ));
        assert!(html.contains("hs-elevate-menu--mobile"));
        assert!(!html.contains("back-button"));
    }

    #[test]
    fn test_open_panel_with_triggered_submenu() {
        let mut viewport = MockViewport::new(HostLog::default());
        let mut panel = panel();
        panel.toggle(&mut viewport);
        panel.click_arrow(&"0".parse().unwrap());

        let html = panel.render_html();

        assert!(html.contains("hs-elevate-site-header__hamburger-menu--active"));
        assert!(html.contains(r#"<button type="button" class="hs-elevate-site-header__back-button"><svg "#));
        assert!(html.contains(r#"class="hs-elevate-site-header__back-button-icon"><path"#));
        assert!(html.contains("</svg>Back</button><nav"));
        assert!(html.contains("hs-elevate-menu__menu-item--triggered"));
    }
}
