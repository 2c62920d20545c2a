// Message types for iced application

use iced::keyboard;

use crate::shared::ColorRole;

#[derive(Debug, Clone)]
pub enum Message {
    // Theme mode checkbox
    DarkModeToggled(bool),
    ToggleTheme,

    // Color inputs: edits stay local until submitted
    ColorInputChanged(ColorRole, String),
    ColorSubmitted(ColorRole),

    ResetColors,

    // Keyboard events
    KeyPressed(keyboard::Key, keyboard::Modifiers),
}
