// themeswitch library - shared theme core plus TUI and GUI front-ends

// Shared modules (used by both TUI and GUI)
pub mod shared;

// TUI module (ratatui-based interface)
pub mod tui;

// GUI module (iced-based interface)
pub mod gui;
