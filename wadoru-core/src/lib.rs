//! Platform-agnostic logic for the Wadoru front end.
//!
//! Everything here is free of browser APIs so it can be exercised on the host:
//! persisted preferences, the keyboard layout model, page navigation, difficulty
//! levels and the daily puzzle seed.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod keyboard;
pub mod page;
pub mod preferences;
pub mod seed;
pub mod setting;
pub mod storage;

pub use config::MAX_GUESSES;
pub use difficulty::Difficulty;
pub use error::{LayoutError, SettingError, StorageError};
pub use keyboard::{Key, KeyboardLayout, KeyboardPreset};
pub use page::{NavAction, NavControl, Page};
pub use preferences::Preferences;
pub use seed::{PuzzleLink, QueryFlags, today_seed};
pub use setting::{PersistedValue, Setting};
pub use storage::{MemoryStorage, SettingsStorage};
