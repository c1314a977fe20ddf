//! `render` command implementation.

use std::path::PathBuf;

use clap::{Args, ValueEnum};
use elevate_config::CliSettings;
use elevate_menu::{Menu, MenuNode, MenuOptions};
use elevate_mobile::{MobilePanel, MobilePanelState, PanelOptions, PanelPhase, SystemClock};
use elevate_renderer::{
    CssVar, HtmlBackend, MenuRenderer, MenuView, ModuleOptions, ModuleView, render_module,
};
use serde::Serialize;

use super::{load_menu_entries, module_options, panel_options};
use crate::error::CliError;
use crate::output::Output;

/// Output format of the `render` command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Format {
    #[default]
    Html,
    Json,
}

/// Arguments for the render command.
#[derive(Args)]
pub(crate) struct RenderArgs {
    /// Path to configuration file (default: auto-discover elevate.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Menu source file (JSON or YAML), overrides config.
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Maximum rendered depth, overrides config.
    #[arg(long)]
    max_depth: Option<usize>,

    /// Render the mobile slide-out panel instead of the desktop module.
    #[arg(long)]
    mobile: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Html)]
    format: Format,
}

/// Mobile panel snapshot for JSON output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MobileView {
    phase: PanelPhase,
    state: MobilePanelState,
    css_vars: Vec<CssVar>,
    back_button: bool,
    menu: MenuView,
}

impl RenderArgs {
    /// Execute the render command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or the menu source cannot be loaded.
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let cli_settings = CliSettings {
            source: self.source.clone(),
            max_depth: self.max_depth,
        };
        let (config, entries) = load_menu_entries(self.config.as_deref(), &cli_settings)?;
        output.detail(&format!(
            "Rendering {} top-level items from {}",
            entries.len(),
            config.source_path.display()
        ));

        let rendered = if self.mobile {
            render_mobile(
                &entries,
                config.menu.menu_options(),
                panel_options(&config.mobile),
                self.format,
            )?
        } else {
            render_desktop(
                &entries,
                config.menu.menu_options(),
                &module_options(&config.menu),
                self.format,
            )?
        };

        output.result(&rendered)?;
        Ok(())
    }
}

fn render_desktop(
    entries: &[MenuNode],
    menu_options: MenuOptions,
    module_options: &ModuleOptions,
    format: Format,
) -> Result<String, CliError> {
    let menu: Menu<()> = Menu::new(entries, menu_options);
    let view: ModuleView = render_module(&menu, module_options);
    Ok(match format {
        Format::Html => HtmlBackend::render_module(&view),
        Format::Json => serde_json::to_string_pretty(&view)?,
    })
}

fn render_mobile(
    entries: &[MenuNode],
    menu_options: MenuOptions,
    panel_options: PanelOptions,
    format: Format,
) -> Result<String, CliError> {
    let panel: MobilePanel<()> = MobilePanel::new(entries, menu_options, panel_options, SystemClock);
    Ok(match format {
        Format::Html => panel.render_html(),
        Format::Json => serde_json::to_string_pretty(&MobileView {
            phase: panel.phase(),
            state: panel.state(),
            css_vars: panel.css_vars(),
            back_button: panel.back_button_visible(),
            menu: MenuRenderer::new(panel.menu()).render(),
        })?,
    })
}
