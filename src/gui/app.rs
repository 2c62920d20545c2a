// iced GUI application for themeswitch

use iced::keyboard::{self, Key};
use iced::widget::{button, checkbox, column, container, row, text, text_input, Column, Space};
use iced::{Element, Font, Length, Subscription, Task, Theme};

use crate::shared::{
    AppController, ColorRole, Config, FileStorage, KeyValueStorage, StyleSheet, ThemeController,
};

use super::message::Message;
use super::theme::{
    color_input_style, get_iced_theme, page_style, parse_color, preview_style, reset_button,
    swatch_style, SheetColors,
};

const FONT_SIZE: u16 = 14;
const HEADING_SIZE: u16 = 18;
const PREVIEW_HEADING_SIZE: u16 = 20;
const STATUS_SIZE: u16 = 12;
const CHECKBOX_SIZE: u16 = 16;
const SWATCH_SIZE: f32 = 28.0;

/// The desktop application as launched by the binary.
pub type DesktopGui = ThemeSwitcherGui<FileStorage>;

pub struct ThemeSwitcherGui<S = FileStorage> {
    controller: ThemeController<S, StyleSheet>,
    // Text typed into each color input, committed on submit
    drafts: [String; 3],
    colors: SheetColors,
}

impl DesktopGui {
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        config.init_logging();
        log::info!("Using preference storage at {}", config.storage_path.display());

        let controller: AppController =
            ThemeController::new(config.preference_store(), StyleSheet::new());
        (Self::with_controller(controller), Task::none())
    }
}

impl<S: KeyValueStorage> ThemeSwitcherGui<S> {
    pub fn with_controller(controller: ThemeController<S, StyleSheet>) -> Self {
        let mut app = Self {
            controller,
            drafts: Default::default(),
            colors: SheetColors::from_sheet(&StyleSheet::new(), Default::default()),
        };
        app.refresh();
        app
    }

    fn draft_index(role: ColorRole) -> usize {
        match role {
            ColorRole::BackgroundColor => 0,
            ColorRole::TextColor => 1,
            ColorRole::AccentColor => 2,
        }
    }

    pub fn draft(&self, role: ColorRole) -> &str {
        &self.drafts[Self::draft_index(role)]
    }

    /// Re-read colors from the style variables and reset the inputs to the
    /// effective colors, after every controller change.
    fn refresh(&mut self) {
        self.colors = SheetColors::from_sheet(self.controller.sink(), self.controller.mode());
        for role in ColorRole::ALL {
            self.drafts[Self::draft_index(role)] = self.controller.picker_value(role);
        }
    }

    pub fn controller(&self) -> &ThemeController<S, StyleSheet> {
        &self.controller
    }

    pub fn colors(&self) -> SheetColors {
        self.colors
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DarkModeToggled(is_dark) => {
                self.controller.set_dark(is_dark);
                self.refresh();
            }
            Message::ToggleTheme => {
                self.controller.toggle_theme();
                self.refresh();
            }
            Message::ColorInputChanged(role, value) => {
                self.drafts[Self::draft_index(role)] = value;
            }
            Message::ColorSubmitted(role) => {
                let value = self.draft(role).to_string();
                // An unchanged entry keeps the role inheriting from the mode default.
                if value != self.controller.picker_value(role) {
                    self.controller.handle_color_change(role, value);
                }
                self.refresh();
            }
            Message::ResetColors => {
                self.controller.reset_colors();
                self.refresh();
            }
            Message::KeyPressed(key, modifiers) => {
                return self.handle_key(key, modifiers);
            }
        }
        Task::none()
    }

    fn handle_key(&mut self, key: Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        match key.as_ref() {
            Key::Character("t") if modifiers.control() => {
                return self.update(Message::ToggleTheme);
            }
            Key::Character("r") if modifiers.control() => {
                return self.update(Message::ResetColors);
            }
            Key::Character("q") if modifiers.control() => {
                return iced::exit();
            }
            _ => {}
        }
        Task::none()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        keyboard::on_key_press(|key, modifiers| Some(Message::KeyPressed(key, modifiers)))
    }

    pub fn view(&self) -> Element<'_, Message> {
        let colors = self.colors;

        let dark_mode = checkbox("Dark Mode", self.controller.is_dark())
            .on_toggle(Message::DarkModeToggled)
            .size(CHECKBOX_SIZE)
            .text_size(FONT_SIZE);

        let color_rows: Vec<Element<'_, Message>> =
            ColorRole::ALL.into_iter().map(|role| self.view_color_row(role)).collect();

        let reset = button(text("Reset to Default Colors").size(FONT_SIZE))
            .on_press(Message::ResetColors)
            .padding([8, 16])
            .style(move |_theme, status| reset_button(&colors, status));

        let customize = column![
            text("Customize Theme").size(HEADING_SIZE).color(colors.text),
            Column::with_children(color_rows).spacing(12),
            reset,
        ]
        .spacing(16);

        let content = column![
            dark_mode,
            customize,
            self.view_preview(),
            Space::with_height(Length::Fill),
            self.view_status_bar(),
        ]
        .spacing(20)
        .padding(24);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| page_style(&colors))
            .into()
    }

    fn view_color_row(&self, role: ColorRole) -> Element<'_, Message> {
        let colors = self.colors;
        let swatch_color = parse_color(&self.controller.picker_value(role));

        let input = text_input("#rrggbb", self.draft(role))
            .on_input(move |value| Message::ColorInputChanged(role, value))
            .on_submit(Message::ColorSubmitted(role))
            .padding(6)
            .size(FONT_SIZE)
            .font(Font::MONOSPACE)
            .width(Length::Fixed(120.0))
            .style(move |_theme, status| color_input_style(&colors, status));

        let swatch = container(Space::new(SWATCH_SIZE, SWATCH_SIZE))
            .style(move |_theme| swatch_style(swatch_color, &colors));

        row![
            text(format!("{}:", role.label())).size(FONT_SIZE).color(colors.text),
            Space::with_width(Length::Fill),
            swatch,
            input,
        ]
        .spacing(10)
        .align_y(iced::Alignment::Center)
        .into()
    }

    fn view_preview(&self) -> Element<'_, Message> {
        let colors = self.colors;

        let content = column![
            text("Theme Preview").size(PREVIEW_HEADING_SIZE).color(colors.text),
            text("This is the text").size(FONT_SIZE).color(colors.text),
            text("This is Link").size(FONT_SIZE).color(colors.accent),
        ]
        .spacing(12);

        container(content)
            .width(Length::Fill)
            .padding(16)
            .style(move |_theme| preview_style(&colors))
            .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let colors = self.colors;

        row![
            text("Enter: Apply color | Ctrl+T: Theme | Ctrl+R: Reset | Ctrl+Q: Quit")
                .size(STATUS_SIZE)
                .color(colors.muted()),
            Space::with_width(Length::Fill),
            text(format!("[{}]", self.controller.mode().label()))
                .size(STATUS_SIZE)
                .color(colors.accent),
        ]
        .into()
    }

    pub fn theme(&self) -> Theme {
        get_iced_theme(&self.colors, self.controller.mode())
    }

    pub fn title(&self) -> String {
        format!("Theme Switcher - {}", self.controller.mode().label())
    }
}
