// Theme controller: owns the preference state and drives resolve -> apply -> save

use super::preference::ThemePreference;
use super::storage::KeyValueStorage;
use super::store::PreferenceStore;
use super::style::{StyleSink, StyleVariable};
use super::theme::{resolve, ColorRole, EffectiveTheme, ThemeMode};

/// Binds a [`ThemePreference`] to a style sink and a preference store.
///
/// Every mutating action ends in a sync step, which resolves the
/// effective colors, applies them to the sink and persists the record, in that
/// order. The sink is only ever written through [`ThemeController::apply`].
#[derive(Debug)]
pub struct ThemeController<S, K> {
    preference: ThemePreference,
    store: PreferenceStore<S>,
    sink: K,
}

impl<S: KeyValueStorage, K: StyleSink> ThemeController<S, K> {
    /// Load saved preferences (falling back to the initial light state) and run
    /// the first resolve/apply/save pass.
    pub fn new(store: PreferenceStore<S>, sink: K) -> Self {
        let preference = match store.load() {
            Some(saved) => {
                log::info!(
                    "Loaded theme preferences ({} mode)",
                    saved.mode().label()
                );
                saved
            }
            None => ThemePreference::default(),
        };

        let mut controller = Self {
            preference,
            store,
            sink,
        };
        controller.sync();
        controller
    }

    pub fn toggle_theme(&mut self) {
        self.preference.is_dark = !self.preference.is_dark;
        log::debug!("Theme mode set to {}", self.mode().label());
        self.sync();
    }

    /// Checkbox-style setter; does nothing when already in the requested mode.
    pub fn set_dark(&mut self, is_dark: bool) {
        if self.preference.is_dark != is_dark {
            self.toggle_theme();
        }
    }

    /// Override one color role. The value is stored verbatim.
    pub fn handle_color_change(&mut self, role: ColorRole, value: impl Into<String>) {
        let value = value.into();
        log::debug!("Custom {} set to {:?}", role.key(), value);
        self.preference.custom.set(role, value);
        self.sync();
    }

    pub fn reset_colors(&mut self) {
        self.preference.custom.clear();
        log::debug!("Custom colors reset");
        self.sync();
    }

    /// Write the resolved colors into the style variables.
    pub fn apply(&mut self, theme: &EffectiveTheme) {
        for role in ColorRole::ALL {
            self.sink
                .set_property(StyleVariable::for_role(role).name(), theme.get(role));
        }
    }

    fn sync(&mut self) {
        let theme = self.effective_theme();
        self.apply(&theme);
        self.store.save(&self.preference);
    }

    pub fn effective_theme(&self) -> EffectiveTheme {
        resolve(self.preference.is_dark, &self.preference.custom)
    }

    /// Value shown by the color control for `role`: the effective color.
    pub fn picker_value(&self, role: ColorRole) -> String {
        self.effective_theme().get(role).to_string()
    }

    pub fn preference(&self) -> &ThemePreference {
        &self.preference
    }

    pub fn is_dark(&self) -> bool {
        self.preference.is_dark
    }

    pub fn mode(&self) -> ThemeMode {
        self.preference.mode()
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn store(&self) -> &PreferenceStore<S> {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{MemoryStorage, StorageError};
    use crate::shared::store::PREFERENCES_KEY;
    use crate::shared::preference::CustomColors;
    use crate::shared::style::StyleSheet;
    use crate::shared::theme::{DARK_DEFAULTS, LIGHT_DEFAULTS};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records every write so ordering and count can be checked.
    #[derive(Default)]
    struct RecordingSink {
        writes: Vec<(String, String)>,
    }

    impl StyleSink for RecordingSink {
        fn set_property(&mut self, name: &str, value: &str) {
            self.writes.push((name.to_string(), value.to_string()));
        }
    }

    /// Storage whose writes can be switched off.
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: bool,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Unavailable("quota exceeded".to_string()));
            }
            self.inner.set(key, value)
        }
    }

    /// Sink and storage appending to one shared log, to check call order.
    type EventLog = Rc<RefCell<Vec<String>>>;

    struct LoggingSink(EventLog);

    impl StyleSink for LoggingSink {
        fn set_property(&mut self, name: &str, _value: &str) {
            self.0.borrow_mut().push(format!("apply {}", name));
        }
    }

    struct LoggingStorage(EventLog);

    impl KeyValueStorage for LoggingStorage {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            self.0.borrow_mut().push(format!("save {}", key));
            Ok(())
        }
    }

    fn fresh() -> ThemeController<MemoryStorage, StyleSheet> {
        ThemeController::new(PreferenceStore::new(MemoryStorage::new()), StyleSheet::new())
    }

    fn saved(controller: &ThemeController<impl KeyValueStorage, impl StyleSink>) -> Option<ThemePreference> {
        controller.store().load()
    }

    #[test]
    fn test_initial_state_applies_light_defaults() {
        let controller = fresh();
        assert!(!controller.is_dark());
        assert_eq!(controller.effective_theme(), EffectiveTheme::from(&LIGHT_DEFAULTS));

        let sheet = controller.sink();
        assert_eq!(sheet.get("--bg-color"), Some("#ffffff"));
        assert_eq!(sheet.get("--text-color"), Some("#1a1a1a"));
        assert_eq!(sheet.get("--accent-color"), Some("#0066cc"));

        // Initial pass also persists.
        assert_eq!(saved(&controller), Some(ThemePreference::default()));
    }

    #[test]
    fn test_toggle_theme_applies_dark_defaults() {
        let mut controller = fresh();
        controller.toggle_theme();

        assert!(controller.is_dark());
        assert_eq!(controller.effective_theme(), EffectiveTheme::from(&DARK_DEFAULTS));
        assert_eq!(controller.sink().get("--bg-color"), Some("#1a1a1a"));
        assert_eq!(controller.sink().get("--text-color"), Some("#ffffff"));
        assert_eq!(controller.sink().get("--accent-color"), Some("#66b3ff"));
        assert_eq!(saved(&controller).map(|p| p.is_dark), Some(true));
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut controller = fresh();
        controller.handle_color_change(ColorRole::TextColor, "#333333");
        let before = controller.effective_theme();

        controller.toggle_theme();
        controller.toggle_theme();

        assert!(!controller.is_dark());
        assert_eq!(controller.effective_theme(), before);
    }

    #[test]
    fn test_color_change_overrides_single_role() {
        let mut controller = fresh();
        controller.handle_color_change(ColorRole::AccentColor, "#ff0000");

        let theme = controller.effective_theme();
        assert_eq!(theme.background_color, "#ffffff");
        assert_eq!(theme.text_color, "#1a1a1a");
        assert_eq!(theme.accent_color, "#ff0000");
        assert_eq!(controller.sink().get("--accent-color"), Some("#ff0000"));
        assert_eq!(controller.picker_value(ColorRole::AccentColor), "#ff0000");
        assert_eq!(controller.picker_value(ColorRole::BackgroundColor), "#ffffff");

        let persisted = saved(&controller).unwrap();
        assert_eq!(persisted.custom.accent_color, "#ff0000");
    }

    #[test]
    fn test_color_change_accepts_any_string() {
        let mut controller = fresh();
        controller.handle_color_change(ColorRole::BackgroundColor, "rebeccapurple");
        assert_eq!(controller.sink().get("--bg-color"), Some("rebeccapurple"));
    }

    #[test]
    fn test_override_survives_mode_toggle() {
        let mut controller = fresh();
        controller.handle_color_change(ColorRole::BackgroundColor, "#abcdef");
        controller.toggle_theme();

        let theme = controller.effective_theme();
        assert_eq!(theme.background_color, "#abcdef");
        assert_eq!(theme.text_color, DARK_DEFAULTS.text_color);
    }

    #[test]
    fn test_reset_colors_restores_mode_defaults() {
        let mut controller = fresh();
        controller.toggle_theme();
        for role in ColorRole::ALL {
            controller.handle_color_change(role, "#010203");
        }

        controller.reset_colors();

        assert!(controller.is_dark());
        assert_eq!(controller.effective_theme(), EffectiveTheme::from(&DARK_DEFAULTS));
        assert_eq!(saved(&controller).unwrap().custom, CustomColors::default());
    }

    #[test]
    fn test_set_dark_is_idempotent() {
        let mut controller = fresh();
        controller.set_dark(false);
        assert!(!controller.is_dark());
        controller.set_dark(true);
        controller.set_dark(true);
        assert!(controller.is_dark());
    }

    #[test]
    fn test_loads_saved_preferences() {
        let stored = r##"{"isDark":true,"custom":{"backgroundColor":"","textColor":"#eeeeee","accentColor":""}}"##;
        let controller = ThemeController::new(
            PreferenceStore::new(MemoryStorage::with_slot(PREFERENCES_KEY, stored)),
            StyleSheet::new(),
        );

        assert!(controller.is_dark());
        assert_eq!(controller.preference().custom.text_color, "#eeeeee");
        assert_eq!(controller.sink().get("--text-color"), Some("#eeeeee"));
        assert_eq!(controller.sink().get("--bg-color"), Some("#1a1a1a"));
    }

    #[test]
    fn test_malformed_saved_data_falls_back_to_initial_state() {
        let controller = ThemeController::new(
            PreferenceStore::new(MemoryStorage::with_slot(PREFERENCES_KEY, "not json at all")),
            StyleSheet::new(),
        );

        assert_eq!(controller.preference(), &ThemePreference::default());
        assert_eq!(controller.effective_theme(), EffectiveTheme::from(&LIGHT_DEFAULTS));
        // The bad record is overwritten by the initial pass.
        assert_eq!(saved(&controller), Some(ThemePreference::default()));
    }

    #[test]
    fn test_apply_writes_exactly_three_variables_per_change() {
        let mut controller =
            ThemeController::new(PreferenceStore::new(MemoryStorage::new()), RecordingSink::default());
        assert_eq!(controller.sink().writes.len(), 3);

        controller.toggle_theme();
        let writes = &controller.sink().writes;
        assert_eq!(writes.len(), 6);
        assert_eq!(
            writes[3..],
            [
                ("--bg-color".to_string(), "#1a1a1a".to_string()),
                ("--text-color".to_string(), "#ffffff".to_string()),
                ("--accent-color".to_string(), "#66b3ff".to_string()),
            ]
        );
    }

    #[test]
    fn test_every_change_applies_before_saving() {
        let log = EventLog::default();
        let mut controller = ThemeController::new(
            PreferenceStore::new(LoggingStorage(log.clone())),
            LoggingSink(log.clone()),
        );
        let expected = [
            "apply --bg-color",
            "apply --text-color",
            "apply --accent-color",
            "save theme-preferences",
        ];
        assert_eq!(*log.borrow(), expected);

        log.borrow_mut().clear();
        controller.toggle_theme();
        assert_eq!(*log.borrow(), expected);

        log.borrow_mut().clear();
        controller.handle_color_change(ColorRole::TextColor, "#222222");
        controller.reset_colors();
        assert_eq!(*log.borrow(), [expected, expected].concat());
    }

    #[test]
    fn test_write_failure_keeps_session_state() {
        let mut controller = ThemeController::new(
            PreferenceStore::new(FlakyStorage::default()),
            StyleSheet::new(),
        );

        controller.store.storage_mut().fail_writes = true;
        controller.toggle_theme();
        assert!(controller.is_dark());
        assert_eq!(controller.sink().get("--bg-color"), Some("#1a1a1a"));
        assert_eq!(saved(&controller).map(|p| p.is_dark), Some(false));

        controller.store.storage_mut().fail_writes = false;
        controller.handle_color_change(ColorRole::AccentColor, "#00ff00");
        let persisted = saved(&controller).unwrap();
        assert!(persisted.is_dark);
        assert_eq!(persisted.custom.accent_color, "#00ff00");
    }
}
