// TUI (Terminal User Interface) module for themeswitch
// Built with ratatui for terminal-based rendering

pub mod action;
pub mod app;
pub mod theme;
pub mod ui;

// Re-export commonly used types
pub use action::Action;
pub use app::{App, Control};
pub use ui::{ui, get_layout_chunks};
