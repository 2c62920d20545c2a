// Shared theme definitions and the color resolver

use serde::{Deserialize, Serialize};

use super::preference::CustomColors;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "Light",
            ThemeMode::Dark => "Dark",
        }
    }

    pub fn defaults(self) -> &'static ThemeDefaults {
        match self {
            ThemeMode::Light => &LIGHT_DEFAULTS,
            ThemeMode::Dark => &DARK_DEFAULTS,
        }
    }
}

/// One of the three overridable color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    BackgroundColor,
    TextColor,
    AccentColor,
}

impl ColorRole {
    pub const ALL: [ColorRole; 3] = [
        ColorRole::BackgroundColor,
        ColorRole::TextColor,
        ColorRole::AccentColor,
    ];

    /// Key used for this role in the persisted record.
    pub fn key(self) -> &'static str {
        match self {
            ColorRole::BackgroundColor => "backgroundColor",
            ColorRole::TextColor => "textColor",
            ColorRole::AccentColor => "accentColor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColorRole::BackgroundColor => "Background Color",
            ColorRole::TextColor => "Text Color",
            ColorRole::AccentColor => "Accent Color",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|role| role.key() == key)
    }
}

/// Built-in color triple for one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeDefaults {
    pub background_color: &'static str,
    pub text_color: &'static str,
    pub accent_color: &'static str,
}

impl ThemeDefaults {
    pub fn get(&self, role: ColorRole) -> &'static str {
        match role {
            ColorRole::BackgroundColor => self.background_color,
            ColorRole::TextColor => self.text_color,
            ColorRole::AccentColor => self.accent_color,
        }
    }
}

pub const LIGHT_DEFAULTS: ThemeDefaults = ThemeDefaults {
    background_color: "#ffffff",
    text_color: "#1a1a1a",
    accent_color: "#0066cc",
};

pub const DARK_DEFAULTS: ThemeDefaults = ThemeDefaults {
    background_color: "#1a1a1a",
    text_color: "#ffffff",
    accent_color: "#66b3ff",
};

/// The resolved colors actually shown. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectiveTheme {
    pub background_color: String,
    pub text_color: String,
    pub accent_color: String,
}

impl EffectiveTheme {
    pub fn get(&self, role: ColorRole) -> &str {
        match role {
            ColorRole::BackgroundColor => &self.background_color,
            ColorRole::TextColor => &self.text_color,
            ColorRole::AccentColor => &self.accent_color,
        }
    }
}

impl From<&ThemeDefaults> for EffectiveTheme {
    fn from(defaults: &ThemeDefaults) -> Self {
        Self {
            background_color: defaults.background_color.to_string(),
            text_color: defaults.text_color.to_string(),
            accent_color: defaults.accent_color.to_string(),
        }
    }
}

/// Compute the effective colors: a non-empty override wins verbatim, otherwise the
/// default of the current mode.
pub fn resolve(is_dark: bool, custom: &CustomColors) -> EffectiveTheme {
    let defaults = ThemeMode::from_dark(is_dark).defaults();
    let pick = |role: ColorRole| {
        let value = custom.get(role);
        if value.is_empty() {
            defaults.get(role).to_string()
        } else {
            value.to_string()
        }
    };

    EffectiveTheme {
        background_color: pick(ColorRole::BackgroundColor),
        text_color: pick(ColorRole::TextColor),
        accent_color: pick(ColorRole::AccentColor),
    }
}

/// Parse `#rgb` or `#rrggbb` into components. Used by the front-ends to turn a
/// style value into a toolkit color; the core itself never validates colors.
pub fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }
    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}
