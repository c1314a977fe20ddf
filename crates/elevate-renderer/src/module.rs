//! Menu module wrapper: spacing variables and the editor placeholder.

use elevate_menu::{Menu, SizeOption};

use crate::renderer::MenuRenderer;
use crate::util::CssVar;
use crate::view::MenuView;

const COLUMN_GAP_VAR: &str = "--hsElevate--menu--topLevel__gap";
const PADDING_VERTICAL_VAR: &str = "--hsElevate--menuItem__paddingVertical";
const PADDING_HORIZONTAL_VAR: &str = "--hsElevate--menuItem__paddingHorizontal";
const ITEM_GAP_VAR: &str = "--hsElevate--menuItem__gap";

/// Spacing choices of the menu module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuSpacing {
    /// Gap between top-level items.
    pub column_gap: SizeOption,
    /// Padding inside each item.
    pub item_padding: SizeOption,
    /// Vertical gap between nested items.
    pub item_vertical_gap: SizeOption,
}

fn spacing_var(token: u8) -> String {
    format!("var(--hsElevate--spacing--{token}, {token}px)")
}

/// Map a size option onto spacing tokens for `[small, medium, large]`.
fn size_value(size: SizeOption, tokens: [u8; 3]) -> String {
    match size {
        SizeOption::None => "0".to_owned(),
        SizeOption::Small => spacing_var(tokens[0]),
        SizeOption::Medium => spacing_var(tokens[1]),
        SizeOption::Large => spacing_var(tokens[2]),
    }
}

impl MenuSpacing {
    /// CSS custom properties for the module wrapper.
    #[must_use]
    pub fn css_vars(&self) -> Vec<CssVar> {
        vec![
            CssVar::new(PADDING_VERTICAL_VAR, size_value(self.item_padding, [4, 12, 16])),
            CssVar::new(PADDING_HORIZONTAL_VAR, size_value(self.item_padding, [4, 8, 16])),
            CssVar::new(COLUMN_GAP_VAR, size_value(self.column_gap, [16, 32, 56])),
            CssVar::new(ITEM_GAP_VAR, size_value(self.item_vertical_gap, [8, 16, 24])),
        ]
    }
}

/// Editor placeholder text shown for an empty menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Placeholder {
    pub title: String,
    pub description: String,
}

/// Module-level rendering options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModuleOptions {
    pub spacing: MenuSpacing,
    /// Whether the page is open in the CMS editor.
    pub editor_mode: bool,
    pub placeholder: Placeholder,
}

/// What the module wrapper contains.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ModuleContent {
    Menu(MenuView),
    Placeholder(Placeholder),
    /// Empty menu outside the editor renders nothing.
    Empty,
}

/// Menu module wrapper view.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ModuleView {
    /// Inline custom properties of the wrapper.
    pub css_vars: Vec<CssVar>,
    pub content: ModuleContent,
}

/// Render the menu module around `menu`.
#[must_use]
pub fn render_module<H>(menu: &Menu<H>, options: &ModuleOptions) -> ModuleView {
    let content = if !menu.tree().is_empty() {
        ModuleContent::Menu(MenuRenderer::new(menu).render())
    } else if options.editor_mode {
        ModuleContent::Placeholder(options.placeholder.clone())
    } else {
        ModuleContent::Empty
    };

    ModuleView {
        css_vars: options.spacing.css_vars(),
        content,
    }
}

#[cfg(test)]
mod tests {
    use elevate_menu::MenuOptions;
    use elevate_menu::mock::{MockHandle, sample_entries};
    use pretty_assertions::assert_eq;

    use super::*;

    fn vars(spacing: MenuSpacing) -> Vec<(&'static str, String)> {
        spacing
            .css_vars()
            .into_iter()
            .map(|var| (var.name, var.value))
            .collect()
    }

    #[test]
    fn test_default_spacing_is_small() {
        assert_eq!(
            vars(MenuSpacing::default()),
            vec![
                (PADDING_VERTICAL_VAR, "var(--hsElevate--spacing--4, 4px)".to_owned()),
                (PADDING_HORIZONTAL_VAR, "var(--hsElevate--spacing--4, 4px)".to_owned()),
                (COLUMN_GAP_VAR, "var(--hsElevate--spacing--16, 16px)".to_owned()),
                (ITEM_GAP_VAR, "var(--hsElevate--spacing--8, 8px)".to_owned()),
            ]
        );
    }

    #[test]
    fn test_none_and_large() {
        let spacing = MenuSpacing {
            column_gap: SizeOption::Large,
            item_padding: SizeOption::None,
            item_vertical_gap: SizeOption::Large,
        };
        assert_eq!(
            vars(spacing),
            vec![
                (PADDING_VERTICAL_VAR, "0".to_owned()),
                (PADDING_HORIZONTAL_VAR, "0".to_owned()),
                (COLUMN_GAP_VAR, "var(--hsElevate--spacing--56, 56px)".to_owned()),
                (ITEM_GAP_VAR, "var(--hsElevate--spacing--24, 24px)".to_owned()),
            ]
        );
    }

    #[test]
    fn test_medium_padding_differs_per_axis() {
        let spacing = MenuSpacing {
            item_padding: SizeOption::Medium,
            ..MenuSpacing::default()
        };
        let vars = vars(spacing);
        assert_eq!(vars[0].1, "var(--hsElevate--spacing--12, 12px)");
        assert_eq!(vars[1].1, "var(--hsElevate--spacing--8, 8px)");
    }

    #[test]
    fn test_empty_menu_in_editor_shows_placeholder() {
        let menu: Menu<MockHandle> = Menu::new(&[], MenuOptions::default());
        let options = ModuleOptions {
            editor_mode: true,
            placeholder: Placeholder {
                title: "No menu".to_owned(),
                description: "Pick a menu".to_owned(),
            },
            ..ModuleOptions::default()
        };

        let view = render_module(&menu, &options);

        assert_eq!(view.content, ModuleContent::Placeholder(options.placeholder));
    }

    #[test]
    fn test_empty_menu_outside_editor_is_empty() {
        let menu: Menu<MockHandle> = Menu::new(&[], MenuOptions::default());
        let view = render_module(&menu, &ModuleOptions::default());
        assert_eq!(view.content, ModuleContent::Empty);
    }

    #[test]
    fn test_non_empty_menu_renders_in_editor() {
        let menu: Menu<MockHandle> = Menu::new(&sample_entries(), MenuOptions::default());
        let options = ModuleOptions {
            editor_mode: true,
            ..ModuleOptions::default()
        };
        assert!(matches!(render_module(&menu, &options).content, ModuleContent::Menu(_)));
    }
}
