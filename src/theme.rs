use serde::{Deserialize, Serialize};

pub const THEME_STORAGE_KEY: &str = "portfolio_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Class placed on `<html>`; tailwind runs with `darkMode: "class"`.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "Switch to dark theme",
            Theme::Dark => "Switch to light theme",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_stored_representation() {
        // values already in visitors' localStorage must keep parsing
        assert_eq!(serde_json::to_string(&Theme::Light).unwrap(), "\"light\"");
        let t: Theme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(t, Theme::Dark);
        assert!(serde_json::from_str::<Theme>("\"sepia\"").is_err());
    }

    #[test]
    fn test_class_matches_name() {
        assert_eq!(Theme::Light.class(), "light");
        assert!(Theme::Dark.is_dark());
    }
}
