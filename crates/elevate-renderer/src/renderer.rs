//! Recursive view computation.

use elevate_menu::{Menu, NodeId, TreeItem};

use crate::view::{ItemView, LinkView, MenuView, SubmenuDisplay, SubmenuView};

const MENU_CLASS: &str = "hs-elevate-menu";
const MOBILE_CLASS: &str = "hs-elevate-menu--mobile";
const DESKTOP_CLASS: &str = "hs-elevate-menu--desktop";
const HAS_CHILDREN_CLASS: &str = "hs-elevate-menu--has-children";
const TRIGGERED_CLASS: &str = "hs-elevate-menu__menu-item--triggered";
const LINK_CLASS: &str = "hs-elevate-menu__menu-item-link";
const SPAN_CLASS: &str = "hs-elevate-menu__menu-item-span";
const SUBMENU_CLASS: &str = "hs-elevate-menu__submenu";
const FLYOUT_SUBMENU_CLASS: &str = "hs-elevate-menu__flyout-submenu";
const MOBILE_SUBMENU_CLASS: &str = "hs-elevate-menu__flyout-submenu--mobile";

/// Computes [`MenuView`]s from a menu's current state.
///
/// # Example
///
/// ```ignore
/// let view = MenuRenderer::new(&menu).render();
/// let html = HtmlBackend::render_menu(&view);
/// ```
pub struct MenuRenderer<'a, H> {
    menu: &'a Menu<H>,
}

impl<'a, H> MenuRenderer<'a, H> {
    #[must_use]
    pub fn new(menu: &'a Menu<H>) -> Self {
        Self { menu }
    }

    /// Render the nav element and every tracked item.
    #[must_use]
    pub fn render(&self) -> MenuView {
        let options = self.menu.options();

        let mut list_classes = vec![
            MENU_CLASS.to_owned(),
            options.flow.class().to_owned(),
            if options.is_mobile_menu {
                MOBILE_CLASS
            } else {
                DESKTOP_CLASS
            }
            .to_owned(),
        ];
        list_classes.extend(options.additional_classes.iter().cloned());

        MenuView {
            tab_index: 0,
            aria_label: options.navigation_aria_label.clone(),
            list_classes,
            items: self
                .menu
                .tree()
                .roots()
                .iter()
                .map(|&id| self.render_item(id))
                .collect(),
        }
    }

    fn render_item(&self, id: NodeId) -> ItemView {
        let tree = self.menu.tree();
        let options = self.menu.options();
        let item = tree.get(id);
        let depth = item.depth();
        let visible = self.menu.visible_menu_items().contains(id);

        let mut classes = Vec::new();
        if item.has_children() {
            classes.push(HAS_CHILDREN_CLASS.to_owned());
            if options.is_mobile_menu && self.menu.triggered_menu_items().contains(id) {
                classes.push(TRIGGERED_CLASS.to_owned());
            }
        }

        let arrow = (options.flyouts || options.is_mobile_menu)
            && item.has_children()
            && depth != tree.max_depth();

        let children = tree.children(id);
        let submenu = (!children.is_empty()).then(|| SubmenuView {
            classes: self.submenu_classes(),
            display: options.flyouts.then_some(if visible {
                SubmenuDisplay::Block
            } else {
                SubmenuDisplay::None
            }),
            items: children.iter().map(|&child| self.render_item(child)).collect(),
        });

        ItemView {
            path: item.path().clone(),
            depth,
            label: item.label().to_owned(),
            classes,
            link: self.link_view(item),
            arrow,
            aria_expanded: item.has_children().then_some(visible),
            submenu,
        }
    }

    fn link_view(&self, item: &TreeItem) -> LinkView {
        let options = self.menu.options();
        let level_classes = if item.depth() == 1 {
            options.top_level_item_classes.as_deref()
        } else {
            options.sub_menu_item_classes.as_deref()
        };

        let mut classes = vec![options.link_style_variant.class().to_owned()];
        classes.extend(level_classes.map(str::to_owned));

        if item.has_url() {
            classes.push(LINK_CLASS.to_owned());
            LinkView {
                href: Some(item.url().to_owned()),
                new_tab: item.opens_in_new_tab(),
                classes,
            }
        } else {
            classes.push(SPAN_CLASS.to_owned());
            LinkView {
                href: None,
                new_tab: false,
                classes,
            }
        }
    }

    fn submenu_classes(&self) -> Vec<String> {
        let options = self.menu.options();
        let mut classes = vec![SUBMENU_CLASS.to_owned()];
        if options.flyouts {
            classes.push(FLYOUT_SUBMENU_CLASS.to_owned());
        }
        if options.is_mobile_menu {
            classes.push(MOBILE_SUBMENU_CLASS.to_owned());
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use elevate_menu::mock::{MockHandle, sample_entries};
    use elevate_menu::{Flow, LinkStyleVariant, MenuOptions, PathId};
    use pretty_assertions::assert_eq;

    use super::*;

    fn path(s: &str) -> PathId {
        s.parse().unwrap()
    }

    fn menu(options: MenuOptions) -> Menu<MockHandle> {
        Menu::new(&sample_entries(), options)
    }

    fn flyout_options() -> MenuOptions {
        MenuOptions {
            flow: Flow::Horizontal,
            flyouts: true,
            navigation_aria_label: "Main".to_owned(),
            additional_classes: vec!["hs-elevate-horizontal-menu__menu".to_owned()],
            ..MenuOptions::default()
        }
    }

    #[test]
    fn test_nav_and_list_classes() {
        let view = MenuRenderer::new(&menu(flyout_options())).render();

        assert_eq!(view.tab_index, 0);
        assert_eq!(view.aria_label, "Main");
        assert_eq!(
            view.list_classes,
            vec![
                "hs-elevate-menu",
                "hs-elevate-menu--horizontal",
                "hs-elevate-menu--desktop",
                "hs-elevate-horizontal-menu__menu",
            ]
        );
        assert_eq!(view.items.len(), 3);
    }

    #[test]
    fn test_link_and_span_classes() {
        let options = MenuOptions {
            link_style_variant: LinkStyleVariant::SecondaryLinks,
            top_level_item_classes: Some("top".to_owned()),
            sub_menu_item_classes: Some("sub".to_owned()),
            ..MenuOptions::default()
        };
        let view = MenuRenderer::new(&menu(options)).render();

        let products = view.find(&path("0")).unwrap();
        assert_eq!(products.link.href.as_deref(), Some("/products"));
        assert_eq!(
            products.link.classes,
            vec!["hs-elevate-link--secondary", "top", "hs-elevate-menu__menu-item-link"]
        );

        let integrations = view.find(&path("0-2")).unwrap();
        assert_eq!(integrations.link.href, None);
        assert_eq!(
            integrations.link.classes,
            vec!["hs-elevate-link--secondary", "sub", "hs-elevate-menu__menu-item-span"]
        );
    }

    #[test]
    fn test_new_tab_only_for_blank_target() {
        let view = MenuRenderer::new(&menu(MenuOptions::default())).render();
        assert!(view.find(&path("0-0-1")).unwrap().link.new_tab);
        assert!(!view.find(&path("0-0-0")).unwrap().link.new_tab);
    }

    #[test]
    fn test_flyout_visibility_and_aria_expanded() {
        let mut menu = menu(flyout_options());
        menu.mouse_enter(&path("0"));
        let view = MenuRenderer::new(&menu).render();

        let products = view.find(&path("0")).unwrap();
        assert_eq!(products.aria_expanded, Some(true));
        let submenu = products.submenu.as_ref().unwrap();
        assert_eq!(submenu.display, Some(SubmenuDisplay::Block));
        assert_eq!(
            submenu.classes,
            vec!["hs-elevate-menu__submenu", "hs-elevate-menu__flyout-submenu"]
        );

        let hub = view.find(&path("0-0")).unwrap();
        assert_eq!(hub.aria_expanded, Some(false));
        assert_eq!(hub.submenu.as_ref().unwrap().display, Some(SubmenuDisplay::None));

        assert_eq!(view.find(&path("2")).unwrap().aria_expanded, None);
    }

    #[test]
    fn test_no_inline_display_without_flyouts() {
        let view = MenuRenderer::new(&menu(MenuOptions::default())).render();
        let submenu = view.find(&path("0")).unwrap().submenu.as_ref().unwrap();
        assert_eq!(submenu.display, None);
        assert_eq!(submenu.classes, vec!["hs-elevate-menu__submenu"]);
    }

    #[test]
    fn test_arrow_needs_flyouts_or_mobile_and_room_below() {
        let view = MenuRenderer::new(&menu(MenuOptions::default())).render();
        assert!(!view.find(&path("0")).unwrap().arrow);

        let view = MenuRenderer::new(&menu(flyout_options())).render();
        assert!(view.find(&path("0")).unwrap().arrow);
        assert!(view.find(&path("0-0")).unwrap().arrow);
        assert!(!view.find(&path("0-1")).unwrap().arrow);

        let capped = MenuOptions {
            max_depth: 2,
            ..flyout_options()
        };
        let view = MenuRenderer::new(&menu(capped)).render();
        assert!(!view.find(&path("0-0")).unwrap().arrow);
    }

    #[test]
    fn test_mobile_arrow_without_flyouts() {
        let options = MenuOptions::default().into_mobile();
        assert!(!options.flyouts);
        let view = MenuRenderer::new(&menu(options)).render();
        assert!(view.find(&path("0")).unwrap().arrow);
        assert!(view.find(&path("0-0")).unwrap().arrow);
        assert!(!view.find(&path("0-1")).unwrap().arrow);
        assert!(!view.find(&path("2")).unwrap().arrow);

        let capped = MenuOptions {
            max_depth: 2,
            ..MenuOptions::default()
        }
        .into_mobile();
        let view = MenuRenderer::new(&menu(capped)).render();
        assert!(view.find(&path("0")).unwrap().arrow);
        assert!(!view.find(&path("0-0")).unwrap().arrow);
    }

    #[test]
    fn test_depth_cap_stops_recursion() {
        let options = MenuOptions {
            max_depth: 1,
            ..MenuOptions::default()
        };
        let view = MenuRenderer::new(&menu(options)).render();

        assert!(view.items.iter().all(|item| item.submenu.is_none()));
        // Data children still mark the item
        assert_eq!(
            view.find(&path("0")).unwrap().classes,
            vec!["hs-elevate-menu--has-children"]
        );
    }

    #[test]
    fn test_mobile_triggered_class() {
        let mut menu = menu(MenuOptions::default().into_mobile());
        menu.trigger(&path("1"));
        let view = MenuRenderer::new(&menu).render();

        assert_eq!(
            view.find(&path("1")).unwrap().classes,
            vec!["hs-elevate-menu--has-children", "hs-elevate-menu__menu-item--triggered"]
        );
        assert_eq!(
            view.find(&path("1")).unwrap().submenu.as_ref().unwrap().classes,
            vec!["hs-elevate-menu__submenu", "hs-elevate-menu__flyout-submenu--mobile"]
        );
        assert!(view.list_classes.contains(&"hs-elevate-menu--mobile".to_owned()));
        assert!(view.list_classes.contains(&"hs-elevate-site-header__menu".to_owned()));
    }

    #[test]
    fn test_empty_menu() {
        let menu: Menu<MockHandle> = Menu::new(&[], MenuOptions::default());
        let view = MenuRenderer::new(&menu).render();
        assert!(view.items.is_empty());
    }
}
