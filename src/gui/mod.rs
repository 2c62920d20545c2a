// GUI module for iced-based interface

pub mod app;
pub mod message;
pub mod theme;
