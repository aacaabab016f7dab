use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Colours and class names for whatever draws the picker.
///
/// The engine never reads these; they travel with the configuration so a
/// renderer gets defaults merged with the user's overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Appearance {
    pub colors: Colors,
    /// Extra class names keyed by element ("month", "button", ...)
    pub classes: BTreeMap<String, String>,
}

/// CSS-style colour strings. Missing keys fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colors {
    pub selected: String,
    pub selected_hover: String,
    pub border: String,
    pub background: String,
    pub hover: String,
    pub disabled: String,
}

impl Default for Colors {
    fn default() -> Self {
        Self {
            selected: "rgb(244, 114, 49)".to_string(),
            selected_hover: "rgb(255, 141, 74)".to_string(),
            border: "#e4e7e7".to_string(),
            background: "white".to_string(),
            hover: "#e4e7e7".to_string(),
            disabled: "gray".to_string(),
        }
    }
}

impl Appearance {
    pub fn class(&self, element: &str) -> Option<&str> {
        self.classes.get(element).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_colors_merge_over_defaults() {
        let appearance: Appearance =
            serde_json::from_str(r#"{ "colors": { "selected": "navy" } }"#).unwrap();

        assert_eq!(appearance.colors.selected, "navy");
        assert_eq!(appearance.colors.border, Colors::default().border);
        assert!(appearance.classes.is_empty());
    }

    #[test]
    fn test_classes_lookup() {
        let appearance: Appearance =
            serde_json::from_str(r#"{ "classes": { "month": "picker-month" } }"#).unwrap();

        assert_eq!(appearance.class("month"), Some("picker-month"));
        assert_eq!(appearance.class("button"), None);
        assert_eq!(appearance.colors, Colors::default());
    }
}
