//! UI theme preference

use iced::Theme;

/// Default theme name used when the preference is unset or unknown
pub const DEFAULT_THEME_NAME: &str = "Dark";

/// Persisted theme preference, stored by iced theme name
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ThemePreference(pub String);

impl Default for ThemePreference {
    fn default() -> Self {
        Self(DEFAULT_THEME_NAME.to_string())
    }
}

impl ThemePreference {
    /// Resolve the preference to an iced theme
    ///
    /// Unknown names fall back to the default theme so a stale config
    /// never breaks startup.
    pub fn to_iced_theme(&self) -> Theme {
        Theme::ALL
            .iter()
            .find(|theme| theme.to_string() == self.0)
            .cloned()
            .unwrap_or(Theme::Dark)
    }
}

impl From<Theme> for ThemePreference {
    fn from(theme: Theme) -> Self {
        Self(theme.to_string())
    }
}

/// All selectable themes for the settings picker
pub fn all_themes() -> Vec<Theme> {
    Theme::ALL.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let preference = ThemePreference::default();
        assert_eq!(preference.0, DEFAULT_THEME_NAME);
    }

    #[test]
    fn test_to_iced_theme_known_name() {
        let preference = ThemePreference("Light".to_string());
        assert_eq!(preference.to_iced_theme().to_string(), "Light");
    }

    #[test]
    fn test_to_iced_theme_unknown_name_falls_back() {
        let preference = ThemePreference("NoSuchTheme".to_string());
        let theme = preference.to_iced_theme();
        assert_eq!(theme.to_string(), Theme::Dark.to_string());
    }

    #[test]
    fn test_all_themes_contains_default() {
        let themes = all_themes();
        assert!(
            themes
                .iter()
                .any(|theme| theme.to_string() == DEFAULT_THEME_NAME)
        );
    }

    #[test]
    fn test_from_theme_roundtrips() {
        let preference = ThemePreference::from(Theme::Nord);
        assert_eq!(preference.0, "Nord");
        assert_eq!(preference.to_iced_theme().to_string(), "Nord");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let preference = ThemePreference("Nord".to_string());
        let json = serde_json::to_string(&preference).expect("serialize");
        let deserialized: ThemePreference = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(preference, deserialized);
    }
}
