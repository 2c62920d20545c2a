// themeswitch GUI - iced-based graphical theme switcher

use themeswitch::gui::app::DesktopGui;

fn main() -> iced::Result {
    iced::application(DesktopGui::title, DesktopGui::update, DesktopGui::view)
        .subscription(DesktopGui::subscription)
        .theme(DesktopGui::theme)
        .window_size((520.0, 560.0))
        .run_with(DesktopGui::new)
}
