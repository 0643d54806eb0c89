use crate::hooks::{SettingHandle, use_setting};
use chrono::NaiveDate;
use wadoru_core::{Difficulty, Page, Preferences, QueryFlags};
use yew::prelude::*;

#[derive(Clone)]
pub struct AppState {
    pub page: UseStateHandle<Page>,
    pub dark: SettingHandle<bool>,
    pub color_blind: SettingHandle<bool>,
    pub difficulty: SettingHandle<Difficulty>,
    pub keyboard: SettingHandle<String>,
    pub enter_left: SettingHandle<bool>,
    pub lang: SettingHandle<String>,
    pub query: UseStateHandle<QueryFlags>,
    pub today: UseStateHandle<NaiveDate>,
}

#[hook]
pub fn use_app_state(preferences: &Preferences) -> AppState {
    let prefers_dark = use_state(crate::dom::prefers_dark_scheme);
    AppState {
        page: use_state(Page::default),
        dark: use_setting(preferences, Preferences::dark(*prefers_dark)),
        color_blind: use_setting(preferences, Preferences::color_blind()),
        difficulty: use_setting(preferences, Preferences::difficulty()),
        keyboard: use_setting(preferences, Preferences::keyboard()),
        enter_left: use_setting(preferences, Preferences::enter_left()),
        lang: use_setting(preferences, Preferences::lang()),
        query: use_state(|| QueryFlags::parse(&crate::dom::query_string())),
        today: use_state(crate::dom::today),
    }
}

impl AppState {
    /// Layout template handed to the game board.
    #[must_use]
    pub fn keyboard_layout(&self) -> String {
        Preferences::keyboard_layout(&self.keyboard.get(), self.enter_left.get())
    }
}
