// Shared modules used by both TUI and GUI

pub mod config;
pub mod controller;
pub mod preference;
pub mod storage;
pub mod store;
pub mod style;
pub mod theme;

// Re-export commonly used types
pub use config::Config;
pub use controller::ThemeController;
pub use preference::{CustomColors, ThemePreference};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{PersistenceError, PreferenceStore, PREFERENCES_KEY};
pub use style::{StyleSheet, StyleSink, StyleVariable};
pub use theme::{
    parse_hex_color, resolve, ColorRole, EffectiveTheme, ThemeDefaults, ThemeMode, DARK_DEFAULTS,
    LIGHT_DEFAULTS,
};

/// Controller wired to on-disk storage and an in-process style sheet, as both
/// front-ends use it.
pub type AppController = ThemeController<FileStorage, StyleSheet>;
