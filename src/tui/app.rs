use ratatui::{
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
    widgets::{Block, Borders},
};
use std::collections::HashMap;
use tui_textarea::{CursorMove, TextArea};

use super::action::Action;
use super::theme::Theme;
use crate::shared::{
    ColorRole, Config, FileStorage, KeyValueStorage, StyleSheet, ThemeController,
};

/// A focusable row in the controls panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    DarkMode,
    Color(ColorRole),
    Reset,
}

impl Control {
    pub const ALL: [Control; 5] = [
        Control::DarkMode,
        Control::Color(ColorRole::BackgroundColor),
        Control::Color(ColorRole::TextColor),
        Control::Color(ColorRole::AccentColor),
        Control::Reset,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

pub struct App<'a, S = FileStorage> {
    pub controller: ThemeController<S, StyleSheet>,
    pub focus: Control,

    // Color entry
    pub editing: Option<ColorRole>,
    pub color_input: TextArea<'a>,

    pub should_quit: bool,
    pub key_map: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl<'a> App<'a, FileStorage> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(ThemeController::new(config.preference_store(), StyleSheet::new()))
    }
}

impl<'a, S: KeyValueStorage> App<'a, S> {
    pub fn new(controller: ThemeController<S, StyleSheet>) -> Self {
        // Key Binding Init
        let mut key_map = HashMap::new();
        key_map.insert((KeyCode::Char('q'), KeyModifiers::CONTROL), Action::Quit);
        key_map.insert((KeyCode::Char('q'), KeyModifiers::NONE), Action::Quit);
        key_map.insert((KeyCode::Esc, KeyModifiers::NONE), Action::Quit);
        key_map.insert((KeyCode::Char('t'), KeyModifiers::CONTROL), Action::ToggleTheme);
        key_map.insert((KeyCode::Char('r'), KeyModifiers::CONTROL), Action::ResetColors);
        key_map.insert((KeyCode::Tab, KeyModifiers::NONE), Action::FocusNext);
        key_map.insert((KeyCode::Down, KeyModifiers::NONE), Action::FocusNext);
        key_map.insert((KeyCode::Char('j'), KeyModifiers::NONE), Action::FocusNext);
        key_map.insert((KeyCode::BackTab, KeyModifiers::SHIFT), Action::FocusPrev);
        key_map.insert((KeyCode::Up, KeyModifiers::NONE), Action::FocusPrev);
        key_map.insert((KeyCode::Char('k'), KeyModifiers::NONE), Action::FocusPrev);
        key_map.insert((KeyCode::Enter, KeyModifiers::NONE), Action::Activate);
        key_map.insert((KeyCode::Char(' '), KeyModifiers::NONE), Action::Activate);

        Self {
            controller,
            focus: Control::DarkMode,
            editing: None,
            color_input: TextArea::default(),
            should_quit: false,
            key_map,
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::from_sheet(self.controller.sink(), self.controller.mode())
    }

    pub fn action_for(&self, key: &KeyEvent) -> Action {
        self.key_map
            .get(&(key.code, key.modifiers))
            .copied()
            .unwrap_or(Action::None)
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(role) = self.editing {
            match key.code {
                KeyCode::Enter => self.commit_edit(role),
                KeyCode::Esc => self.cancel_edit(),
                _ => {
                    self.color_input.input(key);
                }
            }
            return;
        }

        match self.action_for(&key) {
            Action::Quit => self.should_quit = true,
            Action::ToggleTheme => self.controller.toggle_theme(),
            Action::ResetColors => self.controller.reset_colors(),
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Activate => self.activate(),
            Action::None => {}
        }
    }

    fn activate(&mut self) {
        match self.focus {
            Control::DarkMode => self.controller.toggle_theme(),
            Control::Color(role) => self.begin_edit(role),
            Control::Reset => self.controller.reset_colors(),
        }
    }

    /// Open the color entry prefilled with the color currently shown for `role`.
    pub fn begin_edit(&mut self, role: ColorRole) {
        let mut input = TextArea::new(vec![self.controller.picker_value(role)]);
        input.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} (Enter: apply, Esc: cancel) ", role.label())),
        );
        input.move_cursor(CursorMove::End);

        self.color_input = input;
        self.editing = Some(role);
        self.focus = Control::Color(role);
    }

    fn commit_edit(&mut self, role: ColorRole) {
        let value = self.color_input.lines().join("");
        self.editing = None;
        // An unchanged entry keeps the role inheriting from the mode default.
        if value != self.controller.picker_value(role) {
            self.controller.handle_color_change(role, value);
        }
    }

    fn cancel_edit(&mut self) {
        self.editing = None;
    }
}
