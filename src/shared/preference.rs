// Persisted theme preference record

use serde::{Deserialize, Serialize};

use super::theme::{ColorRole, ThemeMode};

/// Per-role overrides. An empty string means "inherit from the mode default".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomColors {
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
}

impl CustomColors {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::BackgroundColor => &self.background_color,
            ColorRole::TextColor => &self.text_color,
            ColorRole::AccentColor => &self.accent_color,
        }
    }

    pub fn set(&mut self, role: ColorRole, value: String) {
        match role {
            ColorRole::BackgroundColor => self.background_color = value,
            ColorRole::TextColor => self.text_color = value,
            ColorRole::AccentColor => self.accent_color = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_overridden(&self, role: ColorRole) -> bool {
        !self.get(role).is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ThemePreference {
    pub is_dark: bool,
    pub custom: CustomColors,
}

impl ThemePreference {
    pub fn mode(&self) -> ThemeMode {
        ThemeMode::from_dark(self.is_dark)
    }
}
