//! CLI command implementations.

mod render;
mod simulate;

use std::path::Path;
use std::time::Duration;

use elevate_config::{CliSettings, Config, MenuConfig, MobileConfig};
use elevate_menu::{MenuNode, load_menu};
use elevate_mobile::{MobileColors, PanelOptions};
use elevate_renderer::{MenuSpacing, ModuleOptions, Placeholder};

use crate::error::CliError;

pub(crate) use render::RenderArgs;
pub(crate) use simulate::SimulateArgs;

/// Load configuration and the menu entries it points at.
fn load_menu_entries(
    config_path: Option<&Path>,
    settings: &CliSettings,
) -> Result<(Config, Vec<MenuNode>), CliError> {
    let config = Config::load(config_path, Some(settings))?;
    tracing::debug!(source = %config.source_path.display(), "Loading menu");
    let entries = load_menu(&config.source_path)?;
    Ok((config, entries))
}

/// Module wrapper options from the `[menu]` section.
fn module_options(menu: &MenuConfig) -> ModuleOptions {
    ModuleOptions {
        spacing: MenuSpacing {
            column_gap: menu.column_gap,
            item_padding: menu.item_padding,
            item_vertical_gap: menu.item_vertical_gap,
        },
        editor_mode: menu.editor_mode,
        placeholder: Placeholder {
            title: menu.placeholder_title.clone(),
            description: menu.placeholder_description.clone(),
        },
    }
}

/// Panel options from the `[mobile]` section.
fn panel_options(mobile: &MobileConfig) -> PanelOptions {
    PanelOptions {
        settle_delay: Duration::from_millis(mobile.settle_delay_ms),
        close_delay: Duration::from_millis(mobile.close_delay_ms),
        colors: MobileColors {
            text: mobile.text_color.clone(),
            text_hover: mobile.text_hover_color.clone(),
            background: mobile.background_color.clone(),
            accent: mobile.accent_color.clone(),
        },
    }
}
