//! Caller-supplied menu options.

use serde::{Deserialize, Serialize};

/// Layout direction of the top level. Only affects CSS classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    Horizontal,
    #[default]
    Vertical,
}

impl Flow {
    /// CSS class for the menu list.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Horizontal => "hs-elevate-menu--horizontal",
            Self::Vertical => "hs-elevate-menu--vertical",
        }
    }
}

/// Link style variant. Only affects CSS classes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkStyleVariant {
    #[default]
    PrimaryLinks,
    SecondaryLinks,
}

impl LinkStyleVariant {
    /// CSS class for item links.
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::PrimaryLinks => "hs-elevate-link--primary",
            Self::SecondaryLinks => "hs-elevate-link--secondary",
        }
    }
}

/// Spacing size choice used by the menu spacing variables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeOption {
    None,
    #[default]
    Small,
    Medium,
    Large,
}

/// Options for one menu instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuOptions {
    /// Maximum rendered depth, at least 1.
    pub max_depth: usize,
    /// Layout direction.
    pub flow: Flow,
    /// Desktop hover/click flyout submenus.
    pub flyouts: bool,
    /// Link style variant.
    pub link_style_variant: LinkStyleVariant,
    /// Mobile triggered/back-stack behavior instead of desktop flyouts.
    pub is_mobile_menu: bool,
    /// `aria-label` of the nav element.
    pub navigation_aria_label: String,
    /// Extra classes on the menu list.
    pub additional_classes: Vec<String>,
    /// Extra classes on top-level item links.
    pub top_level_item_classes: Option<String>,
    /// Extra classes on nested item links.
    pub sub_menu_item_classes: Option<String>,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            max_depth: 3,
            flow: Flow::default(),
            flyouts: false,
            link_style_variant: LinkStyleVariant::default(),
            is_mobile_menu: false,
            navigation_aria_label: String::new(),
            additional_classes: Vec::new(),
            top_level_item_classes: None,
            sub_menu_item_classes: None,
        }
    }
}

impl MenuOptions {
    /// Options for the mobile slide-out menu derived from these ones.
    ///
    /// The mobile menu always flows vertically without flyouts.
    #[must_use]
    pub fn into_mobile(self) -> Self {
        let mut additional_classes = self.additional_classes;
        additional_classes.push("hs-elevate-site-header__menu".to_owned());
        Self {
            flow: Flow::Vertical,
            flyouts: false,
            is_mobile_menu: true,
            additional_classes,
            ..self
        }
    }
}
