// Window colors for the iced GUI, read from the applied style variables

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Theme as IcedTheme};

use crate::shared::{parse_hex_color, StyleSheet, StyleVariable, ThemeMode};

/// The three style variables as iced colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetColors {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
}

impl SheetColors {
    pub fn from_sheet(sheet: &StyleSheet, mode: ThemeMode) -> Self {
        let defaults = mode.defaults();
        Self {
            background: style_color(sheet, StyleVariable::Background, defaults.background_color),
            text: style_color(sheet, StyleVariable::Text, defaults.text_color),
            accent: style_color(sheet, StyleVariable::Accent, defaults.accent_color),
        }
    }

    /// Text color blended halfway towards the background, for hints.
    pub fn muted(&self) -> Color {
        Color::from_rgb(
            (self.text.r + self.background.r) / 2.0,
            (self.text.g + self.background.g) / 2.0,
            (self.text.b + self.background.b) / 2.0,
        )
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    parse_hex_color(value).map(|(r, g, b)| Color::from_rgb8(r, g, b))
}

fn style_color(sheet: &StyleSheet, var: StyleVariable, fallback: &str) -> Color {
    sheet
        .color(var)
        .and_then(parse_color)
        .or_else(|| parse_color(fallback))
        .unwrap_or(Color::BLACK)
}

/// Get the iced theme for the current colors
pub fn get_iced_theme(colors: &SheetColors, mode: ThemeMode) -> IcedTheme {
    IcedTheme::custom(
        format!("Theme Switcher ({})", mode.label()),
        Palette {
            background: colors.background,
            text: colors.text,
            primary: colors.accent,
            success: Color::from_rgb(0.4, 0.8, 0.4),
            danger: Color::from_rgb(0.9, 0.3, 0.3),
        },
    )
}

/// Page container: background and text from the style variables
pub fn page_style(colors: &SheetColors) -> container::Style {
    container::Style {
        background: Some(colors.background.into()),
        text_color: Some(colors.text),
        ..Default::default()
    }
}

/// Preview panel bordered with the accent color
pub fn preview_style(colors: &SheetColors) -> container::Style {
    container::Style {
        background: Some(colors.background.into()),
        border: Border {
            color: colors.accent,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Small square showing a color value
pub fn swatch_style(color: Option<Color>, colors: &SheetColors) -> container::Style {
    container::Style {
        background: color.map(Into::into),
        border: Border {
            color: colors.muted(),
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Reset button: accent background with background-colored text
pub fn reset_button(colors: &SheetColors, status: button::Status) -> button::Style {
    let background = if matches!(status, button::Status::Hovered | button::Status::Pressed) {
        Color {
            a: 0.8,
            ..colors.accent
        }
    } else {
        colors.accent
    };

    button::Style {
        background: Some(background.into()),
        text_color: colors.background,
        border: Border {
            color: colors.accent,
            width: 0.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

pub fn color_input_style(colors: &SheetColors, status: text_input::Status) -> text_input::Style {
    let border_color = if matches!(status, text_input::Status::Focused) {
        colors.accent
    } else {
        colors.muted()
    };

    text_input::Style {
        background: colors.background.into(),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 4.0.into(),
        },
        icon: colors.text,
        placeholder: colors.muted(),
        value: colors.text,
        selection: Color {
            a: 0.3,
            ..colors.accent
        },
    }
}
