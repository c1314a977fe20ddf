//! Configuration management for Elevate.
//!
//! Parses `elevate.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `menu.source`
//! - `menu.aria_label`
//! - `menu.placeholder_title`
//! - `menu.placeholder_description`
//! - `mobile.*_color`

mod expand;

use std::path::{Path, PathBuf};

use elevate_menu::{Flow, LinkStyleVariant, MenuOptions, SizeOption};
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the menu source file.
    pub source: Option<PathBuf>,
    /// Override the maximum rendered depth.
    pub max_depth: Option<usize>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "elevate.toml";

/// Deepest menu the config accepts.
const MAX_MENU_DEPTH: usize = 16;

/// Longest panel delay the config accepts.
const MAX_DELAY_MS: u64 = 5000;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Menu configuration.
    pub menu: MenuConfig,
    /// Mobile panel configuration.
    pub mobile: MobileConfig,

    /// Resolved menu source path (set after loading).
    #[serde(skip)]
    pub source_path: PathBuf,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Menu configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Menu source file, relative to the config file.
    pub source: String,
    /// Maximum rendered depth.
    pub max_depth: usize,
    /// Top-level layout direction.
    pub flow: Flow,
    /// Desktop flyout submenus.
    pub flyouts: bool,
    /// Link style variant.
    pub link_style: LinkStyleVariant,
    /// `aria-label` of the nav element.
    pub aria_label: String,
    /// Gap between top-level items.
    pub column_gap: SizeOption,
    /// Padding inside each item.
    pub item_padding: SizeOption,
    /// Vertical gap between nested items.
    pub item_vertical_gap: SizeOption,
    /// Render as if inside the CMS editor.
    pub editor_mode: bool,
    /// Placeholder title for an empty menu in the editor.
    pub placeholder_title: String,
    /// Placeholder description for an empty menu in the editor.
    pub placeholder_description: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            source: "menu.json".to_owned(),
            max_depth: 3,
            flow: Flow::Horizontal,
            flyouts: true,
            link_style: LinkStyleVariant::default(),
            aria_label: String::new(),
            column_gap: SizeOption::default(),
            item_padding: SizeOption::default(),
            item_vertical_gap: SizeOption::default(),
            editor_mode: false,
            placeholder_title: "Menu".to_owned(),
            placeholder_description: "Select a menu to display.".to_owned(),
        }
    }
}

impl MenuConfig {
    /// Desktop menu options described by this section.
    #[must_use]
    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            max_depth: self.max_depth,
            flow: self.flow,
            flyouts: self.flyouts,
            link_style_variant: self.link_style,
            navigation_aria_label: self.aria_label.clone(),
            ..MenuOptions::default()
        }
    }
}

/// Mobile panel configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct MobileConfig {
    /// Delay before the slide-in animation starts.
    pub settle_delay_ms: u64,
    /// Length of the close transition.
    pub close_delay_ms: u64,
    /// Menu text color.
    pub text_color: String,
    /// Menu text color on hover.
    pub text_hover_color: String,
    /// Panel background color.
    pub background_color: String,
    /// Accent color for triggered items.
    pub accent_color: String,
}

impl Default for MobileConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            close_delay_ms: 300,
            text_color: "#09152B".to_owned(),
            text_hover_color: "#09152B".to_owned(),
            background_color: "#FFFFFF".to_owned(),
            accent_color: "#F2F4F7".to_owned(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`menu.source`").
        field: String,
        /// Error message (e.g., "${`MENU_FILE`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a delay to stay within [`MAX_DELAY_MS`].
fn require_delay(value: u64, field: &str) -> Result<(), ConfigError> {
    if value > MAX_DELAY_MS {
        return Err(ConfigError::Validation(format!(
            "{field} cannot exceed {MAX_DELAY_MS}"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `elevate.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails or
    /// the final values are invalid.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(source) = &settings.source {
            self.source_path.clone_from(source);
        }
        if let Some(max_depth) = settings.max_depth {
            self.menu.max_depth = max_depth;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let menu = MenuConfig::default();
        Self {
            source_path: base.join(&menu.source),
            menu,
            mobile: MobileConfig::default(),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Called automatically after loading from file and after CLI overrides.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_menu()?;
        self.validate_mobile()?;
        Ok(())
    }

    fn validate_menu(&self) -> Result<(), ConfigError> {
        let depth = self.menu.max_depth;
        if depth == 0 {
            return Err(ConfigError::Validation(
                "menu.max_depth must be greater than 0".to_owned(),
            ));
        }
        if depth > MAX_MENU_DEPTH {
            return Err(ConfigError::Validation(format!(
                "menu.max_depth cannot exceed {MAX_MENU_DEPTH}"
            )));
        }
        require_non_empty(&self.menu.source, "menu.source")?;
        Ok(())
    }

    fn validate_mobile(&self) -> Result<(), ConfigError> {
        let mobile = &self.mobile;
        require_delay(mobile.settle_delay_ms, "mobile.settle_delay_ms")?;
        require_delay(mobile.close_delay_ms, "mobile.close_delay_ms")?;
        require_non_empty(&mobile.text_color, "mobile.text_color")?;
        require_non_empty(&mobile.text_hover_color, "mobile.text_hover_color")?;
        require_non_empty(&mobile.background_color, "mobile.background_color")?;
        require_non_empty(&mobile.accent_color, "mobile.accent_color")?;
        Ok(())
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        let menu = &mut self.menu;
        menu.source = expand::expand_env(&menu.source, "menu.source")?;
        menu.aria_label = expand::expand_env(&menu.aria_label, "menu.aria_label")?;
        menu.placeholder_title = expand::expand_env(&menu.placeholder_title, "menu.placeholder_title")?;
        menu.placeholder_description =
            expand::expand_env(&menu.placeholder_description, "menu.placeholder_description")?;

        let mobile = &mut self.mobile;
        mobile.text_color = expand::expand_env(&mobile.text_color, "mobile.text_color")?;
        mobile.text_hover_color = expand::expand_env(&mobile.text_hover_color, "mobile.text_hover_color")?;
        mobile.background_color = expand::expand_env(&mobile.background_color, "mobile.background_color")?;
        mobile.accent_color = expand::expand_env(&mobile.accent_color, "mobile.accent_color")?;

        Ok(())
    }

    /// Resolve the menu source relative to the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        self.source_path = config_dir.join(&self.menu.source);
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn assert_validation_error(config: &Config, needle: &str) {
        let err = config.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        assert!(err.to_string().contains(needle), "{err} should mention {needle}");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default_with_base(Path::new("/site"));
        assert_eq!(config.source_path, PathBuf::from("/site/menu.json"));
        assert_eq!(config.menu.max_depth, 3);
        assert_eq!(config.menu.flow, Flow::Horizontal);
        assert!(config.menu.flyouts);
        assert_eq!(config.mobile.settle_delay_ms, 100);
        assert_eq!(config.mobile.close_delay_ms, 300);
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.menu.source, "menu.json");
        assert_eq!(config.mobile.background_color, "#FFFFFF");
    }

    #[test]
    fn test_parse_menu_config() {
        let toml = r#"
[menu]
source = "nav/main.yaml"
max_depth = 2
flow = "vertical"
flyouts = false
link_style = "secondary_links"
aria_label = "Main navigation"
column_gap = "large"
item_padding = "none"
item_vertical_gap = "medium"
editor_mode = true
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let menu = &config.menu;
        assert_eq!(menu.source, "nav/main.yaml");
        assert_eq!(menu.max_depth, 2);
        assert_eq!(menu.flow, Flow::Vertical);
        assert!(!menu.flyouts);
        assert_eq!(menu.link_style, LinkStyleVariant::SecondaryLinks);
        assert_eq!(menu.column_gap, SizeOption::Large);
        assert_eq!(menu.item_padding, SizeOption::None);
        assert_eq!(menu.item_vertical_gap, SizeOption::Medium);
        assert!(menu.editor_mode);
        assert_eq!(menu.placeholder_title, "Menu");
    }

    #[test]
    fn test_parse_mobile_config() {
        let toml = r##"
[mobile]
close_delay_ms = 450
accent_color = "#EEEEEE"
"##;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.mobile.close_delay_ms, 450);
        assert_eq!(config.mobile.settle_delay_ms, 100);
        assert_eq!(config.mobile.accent_color, "#EEEEEE");
    }

    #[test]
    fn test_unknown_flow_is_parse_error() {
        let result = toml::from_str::<Config>("[menu]\nflow = \"diagonal\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_menu_options() {
        let toml = r#"
[menu]
max_depth = 2
aria_label = "Footer"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        let options = config.menu.menu_options();
        assert_eq!(options.max_depth, 2);
        assert_eq!(options.flow, Flow::Horizontal);
        assert!(options.flyouts);
        assert!(!options.is_mobile_menu);
        assert_eq!(options.navigation_aria_label, "Footer");
    }

    #[test]
    fn test_validate_max_depth_bounds() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.menu.max_depth = 0;
        assert_validation_error(&config, "menu.max_depth");

        config.menu.max_depth = 17;
        assert_validation_error(&config, "cannot exceed 16");

        config.menu.max_depth = 16;
        config.validate().unwrap();
    }

    #[test]
    fn test_validate_close_delay() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.mobile.close_delay_ms = 5001;
        assert_validation_error(&config, "mobile.close_delay_ms");
    }

    #[test]
    fn test_validate_empty_color() {
        let mut config = Config::default_with_base(Path::new("/site"));
        config.mobile.text_hover_color = String::new();
        assert_validation_error(&config, "mobile.text_hover_color");
    }

    #[test]
    fn test_resolve_paths() {
        let mut config: Config = toml::from_str("[menu]\nsource = \"nav/main.json\"\n").unwrap();
        config.resolve_paths(Path::new("/project"));
        assert_eq!(config.source_path, PathBuf::from("/project/nav/main.json"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elevate.toml");
        fs::write(&path, "[menu]\nsource = \"menus/header.yaml\"\nmax_depth = 2\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.source_path, dir.path().join("menus/header.yaml"));
        assert_eq!(config.menu.max_depth, 2);
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_expands_env_vars() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("ELEVATE_CONFIG_TEST_MENU", "footer");
        }
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elevate.toml");
        fs::write(
            &path,
            "[menu]\nsource = \"${ELEVATE_CONFIG_TEST_MENU}.json\"\naria_label = \"${ELEVATE_CONFIG_TEST_UNSET:-Footer}\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.source_path, dir.path().join("footer.json"));
        assert_eq!(config.menu.aria_label, "Footer");
        unsafe {
            std::env::remove_var("ELEVATE_CONFIG_TEST_MENU");
        }
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elevate.toml");
        fs::write(&path, "[menu]\nmax_depth = 0\n").unwrap();

        let err = Config::load(Some(&path), None).unwrap_err();

        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let err = Config::load(Some(Path::new("/nonexistent/elevate.toml")), None).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_apply_cli_settings() {
        let mut config = Config::default_with_base(Path::new("/site"));
        let overrides = CliSettings {
            source: Some(PathBuf::from("/custom/menu.yaml")),
            max_depth: Some(5),
        };

        config.apply_cli_settings(&overrides);

        assert_eq!(config.source_path, PathBuf::from("/custom/menu.yaml"));
        assert_eq!(config.menu.max_depth, 5);
        assert_eq!(config.menu.source, "menu.json"); // Unchanged
    }

    #[test]
    fn test_cli_settings_are_validated() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("elevate.toml");
        fs::write(&path, "").unwrap();
        let overrides = CliSettings {
            max_depth: Some(0),
            ..Default::default()
        };

        let err = Config::load(Some(&path), Some(&overrides)).unwrap_err();

        assert!(err.to_string().contains("menu.max_depth"));
    }
}
