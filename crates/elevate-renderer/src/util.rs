//! Shared helpers for view output.

/// Escape special characters for HTML text and attribute values.
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#x27;"),
            _ => result.push(c),
        }
    }
    result
}

/// One CSS custom property set inline on an element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CssVar {
    /// Property name including the leading `--`.
    pub name: &'static str,
    /// Property value.
    pub value: String,
}

impl CssVar {
    /// Create a custom property.
    #[must_use]
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Join non-empty class names with single spaces.
pub(crate) fn join_classes<S: AsRef<str>>(classes: &[S]) -> String {
    classes
        .iter()
        .map(AsRef::as_ref)
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
