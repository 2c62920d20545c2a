// Runtime configuration: where preferences and logs live, and logger setup

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;

use super::storage::FileStorage;
use super::store::{PreferenceStore, PREFERENCES_KEY};

/// Overrides the storage file location.
pub const STORAGE_PATH_ENV: &str = "THEMESWITCH_STORAGE";
/// Overrides the slot name inside the storage file.
pub const STORAGE_KEY_ENV: &str = "THEMESWITCH_KEY";

const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub storage_path: PathBuf,
    pub storage_key: String,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: home_file(".themeswitch_storage.json"),
            storage_key: PREFERENCES_KEY.to_string(),
            log_path: home_file(".themeswitch.log"),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(path) = env::var_os(STORAGE_PATH_ENV).filter(|p| !p.is_empty()) {
            config.storage_path = PathBuf::from(path);
        }
        if let Ok(key) = env::var(STORAGE_KEY_ENV) {
            if !key.trim().is_empty() {
                config.storage_key = key;
            }
        }

        config
    }

    pub fn preference_store(&self) -> PreferenceStore<FileStorage> {
        PreferenceStore::with_key(FileStorage::new(&self.storage_path), self.storage_key.clone())
    }

    /// Log to stderr, filtered by `RUST_LOG`.
    pub fn init_logging(&self) {
        let _ = logger_builder().try_init();
    }

    /// Log to the log file instead of stderr, for when the terminal is owned by
    /// the UI. Falls back to discarding output if the file cannot be opened.
    pub fn init_file_logging(&self) {
        let mut builder = logger_builder();
        match OpenOptions::new().create(true).append(true).open(&self.log_path) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Off);
            }
        }
        let _ = builder.try_init();
    }
}

fn logger_builder() -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
}

fn home_file(name: &str) -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(name)
}
