//! Named, typed, persisted preferences.
//!
//! A [`Setting`] describes where a value lives and what to use when nothing
//! usable is stored. A [`PersistedValue`] is the live in-memory mirror: reads
//! happen once when it is opened, and every update is written straight back.
//! Storage and parse failures never reach the caller; they are logged and
//! collapsed to the default (on read) or ignored (on write).

use crate::error::SettingError;
use crate::storage::SettingsStorage;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<T> {
    key: &'static str,
    default: T,
}

impl<T> Setting<T> {
    pub const fn new(key: &'static str, default: T) -> Self {
        Self { key, default }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn default_value(&self) -> &T {
        &self.default
    }
}

impl<T> Setting<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Read and decode the stored value.
    ///
    /// Absent and empty entries are `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored text is not valid JSON for `T`.
    pub fn read<S>(&self, storage: &S) -> Result<Option<T>, SettingError>
    where
        S: SettingsStorage + ?Sized,
    {
        let raw = storage
            .read(self.key)
            .map_err(|source| SettingError::Storage {
                key: self.key,
                source,
            })?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(text) => serde_json::from_str(text)
                .map(Some)
                .map_err(|source| SettingError::Malformed {
                    key: self.key,
                    source,
                }),
        }
    }

    /// Stored value, or the default when it is absent or unreadable.
    pub fn load<S>(&self, storage: &S) -> T
    where
        S: SettingsStorage + ?Sized,
    {
        match self.read(storage) {
            Ok(Some(value)) => value,
            Ok(None) => self.default.clone(),
            Err(err) => {
                log::debug!("falling back to default: {err}");
                self.default.clone()
            }
        }
    }

    /// Encode and store `value`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value cannot be encoded or the backend rejects the write.
    pub fn write<S>(&self, storage: &S, value: &T) -> Result<(), SettingError>
    where
        S: SettingsStorage + ?Sized,
    {
        let text = serde_json::to_string(value).map_err(|source| SettingError::Malformed {
            key: self.key,
            source,
        })?;
        storage
            .write(self.key, &text)
            .map_err(|source| SettingError::Storage {
                key: self.key,
                source,
            })
    }

    /// Best-effort [`Self::write`]; failures are logged and dropped.
    pub fn persist<S>(&self, storage: &S, value: &T)
    where
        S: SettingsStorage + ?Sized,
    {
        if let Err(err) = self.write(storage, value) {
            log::warn!("preference not saved: {err}");
        }
    }
}

/// Live value of a [`Setting`] bound to a storage backend.
pub struct PersistedValue<T> {
    setting: Setting<T>,
    storage: Rc<dyn SettingsStorage>,
    current: T,
}

impl<T> PersistedValue<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Materialize `setting` from `storage`.
    pub fn open(setting: Setting<T>, storage: Rc<dyn SettingsStorage>) -> Self {
        let current = setting.load(storage.as_ref());
        Self {
            setting,
            storage,
            current,
        }
    }

    #[must_use]
    pub const fn get(&self) -> &T {
        &self.current
    }

    #[must_use]
    pub const fn setting(&self) -> &Setting<T> {
        &self.setting
    }

    /// Replace the value in memory, then persist it.
    ///
    /// The in-memory value changes even when the write fails.
    pub fn set(&mut self, value: T) {
        self.current = value;
        self.setting.persist(self.storage.as_ref(), &self.current);
    }

    /// Functional update against the latest in-memory value.
    pub fn update(&mut self, f: impl FnOnce(&T) -> T) {
        let next = f(&self.current);
        self.set(next);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistedValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersistedValue")
            .field("key", &self.setting.key)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}
