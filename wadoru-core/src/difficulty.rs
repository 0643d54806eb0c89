use serde::{Deserialize, Serialize};

/// Rule stringency for guess validation, stored as `0..=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "i64", into = "u8")]
pub enum Difficulty {
    #[default]
    Normal,
    Hard,
    UltraHard,
}

/// How the page title is drawn for a difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleStyle {
    Plain,
    Emphasized { italic: bool },
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Normal, Self::Hard, Self::UltraHard];

    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Hard => 1,
            Self::UltraHard => 2,
        }
    }

    /// Clamp an arbitrary integer into the supported range.
    #[must_use]
    pub const fn from_level(level: i64) -> Self {
        match level {
            i64::MIN..=0 => Self::Normal,
            1 => Self::Hard,
            _ => Self::UltraHard,
        }
    }

    /// Stable identifier used in translation keys.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Hard => "hard",
            Self::UltraHard => "ultra",
        }
    }

    #[must_use]
    pub const fn title_style(self) -> TitleStyle {
        match self {
            Self::Normal => TitleStyle::Plain,
            Self::Hard => TitleStyle::Emphasized { italic: false },
            Self::UltraHard => TitleStyle::Emphasized { italic: true },
        }
    }
}

impl From<i64> for Difficulty {
    fn from(level: i64) -> Self {
        Self::from_level(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_outside_range_are_clamped() {
        assert_eq!(Difficulty::from_level(-3), Difficulty::Normal);
        assert_eq!(Difficulty::from_level(1), Difficulty::Hard);
        assert_eq!(Difficulty::from_level(9), Difficulty::UltraHard);
        for d in Difficulty::ALL {
            assert_eq!(Difficulty::from_level(i64::from(d.level())), d);
        }
    }

    #[test]
    fn serde_uses_plain_integers() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "1");
        assert_eq!(
            serde_json::from_str::<Difficulty>("2").unwrap(),
            Difficulty::UltraHard
        );
        assert_eq!(
            serde_json::from_str::<Difficulty>("5").unwrap(),
            Difficulty::UltraHard
        );
        assert!(serde_json::from_str::<Difficulty>("1.5").is_err());
        assert!(serde_json::from_str::<Difficulty>("\"hard\"").is_err());
    }

    #[test]
    fn only_normal_has_plain_title() {
        assert_eq!(Difficulty::Normal.title_style(), TitleStyle::Plain);
        assert_eq!(
            Difficulty::Hard.title_style(),
            TitleStyle::Emphasized { italic: false }
        );
        assert_eq!(
            Difficulty::UltraHard.title_style(),
            TitleStyle::Emphasized { italic: true }
        );
    }
}
