//! View computation and HTML output for the Elevate navigation menu.
//!
//! This crate turns the state held by an [`elevate_menu::Menu`] into
//! plain views and markup.
//!
//! # Architecture
//!
//! - [`MenuRenderer`] walks the menu tree depth-first and produces a
//!   [`MenuView`]: link vs. span, classes, arrow, `aria-expanded` and flyout
//!   visibility per item
//! - [`render_module`] wraps a menu with spacing custom properties, or the
//!   editor placeholder when the menu is empty
//! - [`HtmlBackend`] serializes views to HTML
//!
//! Enable the `serde` feature to serialize views as JSON.
//!
//! # Example
//!
//! ```ignore
//! use elevate_renderer::{HtmlBackend, MenuRenderer};
//!
//! let view = MenuRenderer::new(&menu).render();
//! let html = HtmlBackend::render_menu(&view);
//! ```

mod html;
mod module;
mod renderer;
mod util;
mod view;

pub use html::HtmlBackend;
pub use module::{MenuSpacing, ModuleContent, ModuleOptions, ModuleView, Placeholder, render_module};
pub use renderer::MenuRenderer;
pub use util::{CssVar, escape_html};
pub use view::{ItemView, LinkView, MenuView, SubmenuDisplay, SubmenuView};
