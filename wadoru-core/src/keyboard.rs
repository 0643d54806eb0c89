//! On-screen keyboard layouts.
//!
//! Layouts are stored as compact templates (`-` between rows, `E` for the
//! confirm key, `B` for backspace, a full-width space for a gap) so that
//! previously saved preferences keep working. Everything else works on the
//! parsed [`KeyboardLayout`].

use crate::config::DEFAULT_KEYBOARD;
use crate::error::LayoutError;
use std::fmt;
use std::str::FromStr;

pub const ROW_SEPARATOR: char = '-';
pub const ENTER: char = 'E';
pub const BACKSPACE: char = 'B';
pub const SPACER: char = '\u{3000}';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
    Spacer,
}

impl Key {
    #[must_use]
    pub const fn from_char(c: char) -> Self {
        match c {
            ENTER => Self::Enter,
            BACKSPACE => Self::Backspace,
            SPACER => Self::Spacer,
            other => Self::Letter(other),
        }
    }

    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Letter(c) => c,
            Self::Enter => ENTER,
            Self::Backspace => BACKSPACE,
            Self::Spacer => SPACER,
        }
    }

    /// Enter and backspace trade places; every other key stays.
    #[must_use]
    pub const fn swapped(self) -> Self {
        match self {
            Self::Enter => Self::Backspace,
            Self::Backspace => Self::Enter,
            other => other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayout {
    rows: Vec<Vec<Key>>,
}

impl KeyboardLayout {
    /// Parse a stored template.
    ///
    /// # Errors
    ///
    /// Returns an error if the template or one of its rows is empty, or if it
    /// does not contain exactly one enter and one backspace key.
    pub fn parse(template: &str) -> Result<Self, LayoutError> {
        if template.is_empty() {
            return Err(LayoutError::Empty);
        }
        let rows: Vec<Vec<Key>> = template
            .split(ROW_SEPARATOR)
            .map(|row| row.chars().map(Key::from_char).collect())
            .collect();
        if let Some(idx) = rows.iter().position(Vec::is_empty) {
            return Err(LayoutError::EmptyRow(idx));
        }
        let layout = Self { rows };
        for key in [Key::Enter, Key::Backspace] {
            match layout.keys().filter(|k| *k == key).count() {
                0 => return Err(LayoutError::MissingKey(key.as_char())),
                1 => {}
                _ => return Err(LayoutError::DuplicateKey(key.as_char())),
            }
        }
        Ok(layout)
    }

    /// Parse `template`, falling back to the 50音 layout when it is unusable.
    #[must_use]
    pub fn parse_or_default(template: &str) -> Self {
        Self::parse(template).unwrap_or_else(|err| {
            log::warn!("ignoring stored keyboard layout: {err}");
            Self::default()
        })
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<Key>] {
        &self.rows
    }

    pub fn keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Effective layout for the enter-left preference.
    ///
    /// With `enter_left` the enter and backspace keys exchange positions;
    /// otherwise the layout is returned unchanged.
    #[must_use]
    pub fn compose(&self, enter_left: bool) -> Self {
        if !enter_left {
            return self.clone();
        }
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(|k| k.swapped()).collect())
                .collect(),
        }
    }

    #[must_use]
    pub fn to_template(&self) -> String {
        self.to_string()
    }
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self::parse(DEFAULT_KEYBOARD).unwrap_or_else(|_| Self { rows: Vec::new() })
    }
}

impl fmt::Display for KeyboardLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, row) in self.rows.iter().enumerate() {
            if idx > 0 {
                write!(f, "{ROW_SEPARATOR}")?;
            }
            for key in row {
                write!(f, "{}", key.as_char())?;
            }
        }
        Ok(())
    }
}

impl FromStr for KeyboardLayout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Layouts offered in the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyboardPreset {
    Gojuon,
    Qwerty,
    Azerty,
    Qwertz,
    Dvorak,
    Colemak,
}

impl KeyboardPreset {
    pub const ALL: [Self; 6] = [
        Self::Gojuon,
        Self::Qwerty,
        Self::Azerty,
        Self::Qwertz,
        Self::Dvorak,
        Self::Colemak,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gojuon => "50音配列",
            Self::Qwerty => "QWERTY",
            Self::Azerty => "AZERTY",
            Self::Qwertz => "QWERTZ",
            Self::Dvorak => "Dvorak",
            Self::Colemak => "Colemak",
        }
    }

    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::Gojuon => DEFAULT_KEYBOARD,
            Self::Qwerty => "qwertyuiop-asdfghjkl-BzxcvbnmE",
            Self::Azerty => "azertyuiop-qsdfghjklm-BwxcvbnE",
            Self::Qwertz => "qwertzuiop-asdfghjkl-ByxcvbnmE",
            Self::Dvorak => "BpyfgcrlE-aoeuidhtns-qjkxbmwvz",
            Self::Colemak => "qwfpgjluy-arstdhneio-BzxcvbkmE",
        }
    }

    #[must_use]
    pub fn from_template(template: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.template() == template)
    }
}
