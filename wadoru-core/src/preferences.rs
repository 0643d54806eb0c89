use crate::config::{DEFAULT_KEYBOARD, DEFAULT_LANG, keys};
use crate::difficulty::Difficulty;
use crate::keyboard::KeyboardLayout;
use crate::setting::{PersistedValue, Setting};
use crate::storage::SettingsStorage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::rc::Rc;

/// Settings service over one storage backend.
///
/// Construct once at startup and hand it to whatever needs preferences.
/// Clones share the same backend; equality is backend identity.
#[derive(Clone)]
pub struct Preferences {
    storage: Rc<dyn SettingsStorage>,
}

impl Preferences {
    pub fn new(storage: impl SettingsStorage + 'static) -> Self {
        Self {
            storage: Rc::new(storage),
        }
    }

    #[must_use]
    pub fn from_shared(storage: Rc<dyn SettingsStorage>) -> Self {
        Self { storage }
    }

    pub fn open<T>(&self, setting: Setting<T>) -> PersistedValue<T>
    where
        T: Serialize + DeserializeOwned + Clone,
    {
        PersistedValue::open(setting, Rc::clone(&self.storage))
    }

    /// Dark theme; the default follows the host color scheme.
    #[must_use]
    pub const fn dark(prefers_dark: bool) -> Setting<bool> {
        Setting::new(keys::DARK, prefers_dark)
    }

    #[must_use]
    pub const fn color_blind() -> Setting<bool> {
        Setting::new(keys::COLOR_BLIND, false)
    }

    #[must_use]
    pub const fn difficulty() -> Setting<Difficulty> {
        Setting::new(keys::DIFFICULTY, Difficulty::Normal)
    }

    #[must_use]
    pub fn keyboard() -> Setting<String> {
        Setting::new(keys::KEYBOARD, DEFAULT_KEYBOARD.to_string())
    }

    #[must_use]
    pub const fn enter_left() -> Setting<bool> {
        Setting::new(keys::ENTER_LEFT, false)
    }

    #[must_use]
    pub fn lang() -> Setting<String> {
        Setting::new(keys::LANG, DEFAULT_LANG.to_string())
    }

    /// Keyboard template handed to the game, with enter placed per preference.
    #[must_use]
    pub fn keyboard_layout(template: &str, enter_left: bool) -> String {
        KeyboardLayout::parse_or_default(template)
            .compose(enter_left)
            .to_template()
    }
}

impl PartialEq for Preferences {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.storage, &other.storage)
    }
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences").finish_non_exhaustive()
    }
}
