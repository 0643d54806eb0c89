/// Top-level view currently on screen. Never persisted; every load starts at [`Page::Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Game,
    About,
    Settings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    OpenAbout,
    OpenSettings,
    Close,
}

/// A button in the top-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavControl {
    pub emoji: &'static str,
    /// Translation key for the accessible label.
    pub label_key: &'static str,
    pub action: NavAction,
}

const GAME_CONTROLS: &[NavControl] = &[
    NavControl {
        emoji: "❓",
        label_key: "nav.about",
        action: NavAction::OpenAbout,
    },
    NavControl {
        emoji: "⚙️",
        label_key: "nav.settings",
        action: NavAction::OpenSettings,
    },
];

const OVERLAY_CONTROLS: &[NavControl] = &[NavControl {
    emoji: "❌",
    label_key: "nav.close",
    action: NavAction::Close,
}];

impl Page {
    pub const ALL: [Self; 3] = [Self::Game, Self::About, Self::Settings];

    /// Page reached from `self` by `action`.
    ///
    /// Opening a panel only works from the game; anywhere else it is ignored.
    #[must_use]
    pub const fn navigate(self, action: NavAction) -> Self {
        match (self, action) {
            (Self::Game, NavAction::OpenAbout) => Self::About,
            (Self::Game, NavAction::OpenSettings) => Self::Settings,
            (_, NavAction::Close) => Self::Game,
            (page, _) => page,
        }
    }

    #[must_use]
    pub const fn controls(self) -> &'static [NavControl] {
        match self {
            Self::Game => GAME_CONTROLS,
            Self::About | Self::Settings => OVERLAY_CONTROLS,
        }
    }

    #[must_use]
    pub const fn is_game(self) -> bool {
        matches!(self, Self::Game)
    }
}
