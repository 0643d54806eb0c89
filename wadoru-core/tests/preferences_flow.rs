use std::cell::Cell;
use std::rc::Rc;
use wadoru_core::{
    Difficulty, KeyboardPreset, MemoryStorage, NavAction, Page, Preferences, SettingsStorage,
    StorageError,
};

/// Storage that starts rejecting writes after a quota is used up.
struct QuotaStorage {
    inner: MemoryStorage,
    writes_left: Cell<usize>,
}

impl SettingsStorage for QuotaStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let left = self.writes_left.get();
        if left == 0 {
            return Err(StorageError::Backend("QuotaExceededError".into()));
        }
        self.writes_left.set(left - 1);
        self.inner.write(key, value)
    }
}

#[test]
fn settings_survive_a_reload() {
    let storage: Rc<dyn SettingsStorage> = Rc::new(MemoryStorage::new());
    let prefs = Preferences::from_shared(storage.clone());

    let mut difficulty = prefs.open(Preferences::difficulty());
    difficulty.set(Difficulty::Hard);
    let mut keyboard = prefs.open(Preferences::keyboard());
    keyboard.set(KeyboardPreset::Colemak.template().to_string());
    let mut enter_left = prefs.open(Preferences::enter_left());
    enter_left.update(|v| !v);

    let reloaded = Preferences::from_shared(storage);
    assert_eq!(*reloaded.open(Preferences::difficulty()).get(), Difficulty::Hard);
    let template = reloaded.open(Preferences::keyboard()).get().clone();
    assert_eq!(
        Preferences::keyboard_layout(&template, *reloaded.open(Preferences::enter_left()).get()),
        "qwfpgjluy-arstdhneio-EzxcvbkmB"
    );
}

#[test]
fn writes_past_quota_are_dropped_but_session_keeps_value() {
    let storage: Rc<dyn SettingsStorage> = Rc::new(QuotaStorage {
        inner: MemoryStorage::new(),
        writes_left: Cell::new(1),
    });
    let prefs = Preferences::from_shared(storage.clone());

    let mut dark = prefs.open(Preferences::dark(false));
    dark.set(true);
    let mut color_blind = prefs.open(Preferences::color_blind());
    color_blind.set(true);
    assert!(*color_blind.get());

    let reloaded = Preferences::from_shared(storage);
    assert!(*reloaded.open(Preferences::dark(false)).get());
    assert!(!*reloaded.open(Preferences::color_blind()).get());
}

#[test]
fn corrupted_entries_fall_back_per_key() {
    let prefs = Preferences::new(MemoryStorage::with_entries([
        ("dark", "{oops"),
        ("difficulty", "\"hard\""),
        ("keyboard", "\"abc\""),
    ]));
    assert!(*prefs.open(Preferences::dark(true)).get());
    assert_eq!(*prefs.open(Preferences::difficulty()).get(), Difficulty::Normal);
    let broken_template = prefs.open(Preferences::keyboard()).get().clone();
    assert_eq!(
        Preferences::keyboard_layout(&broken_template, false),
        KeyboardPreset::Gojuon.template()
    );
}

#[test]
fn navigation_never_persists() {
    let page = Page::default()
        .navigate(NavAction::OpenSettings)
        .navigate(NavAction::Close)
        .navigate(NavAction::OpenAbout);
    assert_eq!(page, Page::About);
    assert_eq!(Page::default(), Page::Game);
}
