use thiserror::Error;

/// Failure reported by a [`crate::SettingsStorage`] backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage error: {0}")]
    Backend(String),
}

/// Failure while reading or writing a single persisted setting.
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("storage error for `{key}`: {source}")]
    Storage {
        key: &'static str,
        #[source]
        source: StorageError,
    },
    #[error("malformed value for `{key}`: {source}")]
    Malformed {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Reason a keyboard template could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("keyboard template is empty")]
    Empty,
    #[error("keyboard row {0} is empty")]
    EmptyRow(usize),
    #[error("keyboard template has no `{0}` key")]
    MissingKey(char),
    #[error("keyboard template has more than one `{0}` key")]
    DuplicateKey(char),
}
