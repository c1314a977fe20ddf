//! HTML backend for menu views.
//!
//! Produces the static markup of the nav element, its items and the module
//! wrapper. Event wiring is the host's job; items carry `data-menu-path` so
//! the host can map DOM events back to [`PathId`](elevate_menu::PathId)s.

use std::fmt::Write;

use crate::module::{ModuleContent, ModuleView, Placeholder};
use crate::util::{CssVar, escape_html, join_classes};
use crate::view::{ItemView, MenuView, SubmenuView};

const ARROW_PATH: &str = "M7.11807 7.61797C7.45986 7.27617 7.45986 6.72109 7.11807 6.3793L1.86807 1.1293C1.52627 0.787499 0.971191 0.787499 0.629395 1.1293C0.287598 1.47109 0.287598 2.02617 0.629395 2.36797L5.26143 7L0.632129 11.632C0.290332 11.9738 0.290332 12.5289 0.632129 12.8707C0.973926 13.2125 1.529 13.2125 1.8708 12.8707L7.1208 7.6207L7.11807 7.61797Z";
const ARROW_FILL: &str = "#09152B";

/// HTML render backend.
///
/// Produces:
/// - `<nav>` with `<ul role="menu">` for the menu
/// - `<li role="menuitem">` per item with an `<a>` or `<span>` link
/// - the submenu arrow as inline SVG
/// - a wrapper `<div>` with spacing custom properties for the module
pub struct HtmlBackend;

impl HtmlBackend {
    /// Render the nav element.
    #[must_use]
    pub fn render_menu(view: &MenuView) -> String {
        let mut out = String::new();
        write!(
            out,
            r#"<nav tabindex="{}" aria-label="{}"><ul role="menu" class="{}">"#,
            view.tab_index,
            escape_html(&view.aria_label),
            escape_html(&join_classes(&view.list_classes))
        )
        .unwrap();
        for item in &view.items {
            Self::item(item, &mut out);
        }
        out.push_str("</ul></nav>");
        out
    }

    /// Render the module wrapper and its content.
    #[must_use]
    pub fn render_module(view: &ModuleView) -> String {
        let content = match &view.content {
            ModuleContent::Menu(menu) => Self::render_menu(menu),
            ModuleContent::Placeholder(placeholder) => Self::placeholder(placeholder),
            ModuleContent::Empty => return String::new(),
        };
        format!(
            r#"<div class="hs-elevate-horizontal-menu" style="{}">{content}</div>"#,
            escape_html(&Self::style(&view.css_vars))
        )
    }

    /// Inline style declaration list for custom properties.
    #[must_use]
    pub fn style(vars: &[CssVar]) -> String {
        vars.iter()
            .map(|var| format!("{}: {};", var.name, var.value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Arrow SVG, with `classes` on the `<svg>` element.
    #[must_use]
    pub fn arrow_svg(classes: &[&str]) -> String {
        let class = if classes.is_empty() {
            String::new()
        } else {
            format!(r#" class="{}""#, escape_html(&classes.join(" ")))
        };
        format!(
            r#"<svg width="8" height="14" viewBox="0 0 8 14" fill="none" xmlns="http://www.w3.org/2000/svg"{class}><path class="hs-elevate-menu__arrow-path" d="{ARROW_PATH}" fill="{ARROW_FILL}"/></svg>"#
        )
    }

    fn placeholder(placeholder: &Placeholder) -> String {
        format!(
            r#"<div class="hs-elevate-placeholder"><h5>{}</h5><p>{}</p></div>"#,
            escape_html(&placeholder.title),
            escape_html(&placeholder.description)
        )
    }

    fn item(item: &ItemView, out: &mut String) {
        out.push_str("<li");
        if !item.classes.is_empty() {
            write!(out, r#" class="{}""#, escape_html(&join_classes(&item.classes))).unwrap();
        }
        write!(
            out,
            r#" data-hs-elevate-menuitem-depth="{}" data-menu-path="{}" tabindex="-1" role="menuitem">"#,
            item.depth, item.path
        )
        .unwrap();

        out.push_str(r#"<div class="hs-elevate-menu__menu-item-link-container">"#);
        let classes = escape_html(&join_classes(&item.link.classes));
        let expanded = item
            .aria_expanded
            .map(|expanded| format!(r#" aria-expanded="{expanded}""#))
            .unwrap_or_default();
        match &item.link.href {
            Some(href) => {
                let target = if item.link.new_tab {
                    r#" target="_blank" rel="noopener""#
                } else {
                    ""
                };
                write!(
                    out,
                    r#"<a class="{classes}" tabindex="-1"{expanded} href="{}"{target}>{}</a>"#,
                    escape_html(href),
                    escape_html(&item.label)
                )
                .unwrap();
            }
            None => {
                write!(
                    out,
                    r#"<span class="{classes}" tabindex="-1"{expanded}>{}</span>"#,
                    escape_html(&item.label)
                )
                .unwrap();
            }
        }
        if item.arrow {
            write!(out, r#"<span class="hs-elevate-menu__arrow">{}</span>"#, Self::arrow_svg(&[])).unwrap();
        }
        out.push_str("</div>");

        if let Some(submenu) = &item.submenu {
            Self::submenu(submenu, out);
        }
        out.push_str("</li>");
    }

    fn submenu(submenu: &SubmenuView, out: &mut String) {
        write!(out, r#"<ul class="{}""#, escape_html(&join_classes(&submenu.classes))).unwrap();
        if let Some(display) = submenu.display {
            write!(out, r#" style="display: {}""#, display.as_str()).unwrap();
        }
        out.push('>');
        for child in &submenu.items {
            Self::item(child, out);
        }
        out.push_str("</ul>");
    }
}
