// TUI-specific theme with ratatui colors, read from the applied style variables

use ratatui::style::Color;

use crate::shared::{parse_hex_color, StyleSheet, StyleVariable, ThemeMode};

pub struct Theme {
    pub mode: ThemeMode,
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub muted: Color,
}

impl Theme {
    pub fn from_sheet(sheet: &StyleSheet, mode: ThemeMode) -> Self {
        let defaults = mode.defaults();
        Self {
            mode,
            background: style_color(sheet, StyleVariable::Background, defaults.background_color),
            foreground: style_color(sheet, StyleVariable::Text, defaults.text_color),
            accent: style_color(sheet, StyleVariable::Accent, defaults.accent_color),
            muted: match mode {
                ThemeMode::Light => Color::Indexed(244),
                ThemeMode::Dark => Color::Indexed(245),
            },
        }
    }
}

/// Terminal color for a style value. Hex and ratatui color names are understood;
/// anything else shows the mode default.
pub fn parse_color(value: &str) -> Option<Color> {
    parse_hex_color(value)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .or_else(|| value.trim().parse::<Color>().ok())
}

fn style_color(sheet: &StyleSheet, var: StyleVariable, fallback: &str) -> Color {
    sheet
        .color(var)
        .and_then(parse_color)
        .or_else(|| parse_color(fallback))
        .unwrap_or(Color::Reset)
}
