//! Compile-time constants shared by the core and the web front end.

/// Number of guesses handed to the game board.
pub const MAX_GUESSES: usize = 6;

/// Default keyboard template: the 50音 grid with backspace and enter on the last row.
pub const DEFAULT_KEYBOARD: &str = "わらやまはなたさかあ-ゐり　みひにちしきい-　るゆむふぬつすくう-ゑれ　めへねてせけえ-をろよもほのとそこお-Bん゛゜LーE";

/// Class applied to `<body>` while the dark theme is active.
pub const DARK_BODY_CLASS: &str = "dark";

/// Body transition enabled once the first paint is done.
pub const BODY_TRANSITION: &str = "0.3s background-color ease-out";

/// Delay before enabling [`BODY_TRANSITION`].
pub const TRANSITION_DELAY_MS: u32 = 1;

/// Storage keys for every persisted preference.
pub mod keys {
    pub const DARK: &str = "dark";
    pub const COLOR_BLIND: &str = "colorblind";
    pub const DIFFICULTY: &str = "difficulty";
    pub const KEYBOARD: &str = "keyboard";
    pub const ENTER_LEFT: &str = "enter-left";
    pub const LANG: &str = "lang";
}

/// Language used when nothing has been saved.
pub const DEFAULT_LANG: &str = "ja";

/// Body class for the given theme.
#[must_use]
pub const fn body_class(dark: bool) -> &'static str {
    if dark { DARK_BODY_CLASS } else { "" }
}
