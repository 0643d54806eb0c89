use crate::app::state::AppState;
use crate::hooks::SettingHandle;
use wadoru_core::{Difficulty, NavAction};
use yew::prelude::*;

pub struct AppHandlers {
    pub navigate: Callback<NavAction>,
    pub toggle_dark: Callback<()>,
    pub toggle_color_blind: Callback<()>,
    pub set_difficulty: Callback<Difficulty>,
    pub set_keyboard: Callback<String>,
    pub toggle_enter_left: Callback<()>,
    pub set_lang: Callback<String>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            navigate: build_navigate(state),
            toggle_dark: state.dark.toggler(),
            toggle_color_blind: state.color_blind.toggler(),
            set_difficulty: state.difficulty.setter(),
            set_keyboard: state.keyboard.setter(),
            toggle_enter_left: state.enter_left.toggler(),
            set_lang: build_lang_change(&state.lang),
        }
    }
}

pub fn build_navigate(state: &AppState) -> Callback<NavAction> {
    let page = state.page.clone();
    Callback::from(move |action: NavAction| {
        page.set(page.navigate(action));
    })
}

pub fn build_lang_change(lang: &SettingHandle<String>) -> Callback<String> {
    let lang = lang.clone();
    Callback::from(move |code: String| {
        crate::i18n::set_lang(&code);
        lang.set(code);
    })
}
