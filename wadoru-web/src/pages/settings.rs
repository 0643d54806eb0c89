use crate::i18n::{locales, t};
use wadoru_core::{Difficulty, KeyboardPreset};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct SettingsPageProps {
    pub dark: bool,
    pub color_blind: bool,
    pub difficulty: Difficulty,
    pub keyboard: AttrValue,
    pub enter_left: bool,
    pub lang: AttrValue,
    pub on_toggle_dark: Callback<()>,
    pub on_toggle_color_blind: Callback<()>,
    pub on_difficulty: Callback<Difficulty>,
    pub on_keyboard: Callback<String>,
    pub on_toggle_enter_left: Callback<()>,
    pub on_lang: Callback<String>,
}

fn toggle(cb: &Callback<()>) -> Callback<Event> {
    let cb = cb.clone();
    Callback::from(move |_| cb.emit(()))
}

fn select_value(cb: &Callback<String>) -> Callback<Event> {
    let cb = cb.clone();
    Callback::from(move |e: Event| {
        if let Some(sel) = e.target_dyn_into::<HtmlSelectElement>() {
            cb.emit(sel.value());
        }
    })
}

#[function_component(SettingsPage)]
pub fn settings_page(props: &SettingsPageProps) -> Html {
    let on_difficulty = {
        let cb = props.on_difficulty.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            match input.value().parse::<i64>() {
                Ok(level) => cb.emit(Difficulty::from_level(level)),
                Err(err) => log::debug!("ignoring difficulty input: {err}"),
            }
        })
    };
    let slug = props.difficulty.slug();

    html! {
        <div class="Settings" data-testid="settings-screen">
            <div class="Settings-setting">
                <input
                    id="dark-setting"
                    type="checkbox"
                    checked={props.dark}
                    onchange={toggle(&props.on_toggle_dark)}
                />
                <label for="dark-setting">{ t("settings.dark") }</label>
            </div>
            <div class="Settings-setting">
                <input
                    id="colorblind-setting"
                    type="checkbox"
                    checked={props.color_blind}
                    onchange={toggle(&props.on_toggle_color_blind)}
                />
                <label for="colorblind-setting">{ t("settings.color_blind") }</label>
            </div>
            <div class="Settings-setting">
                <input
                    id="difficulty-setting"
                    type="range"
                    min="0"
                    max="2"
                    value={props.difficulty.level().to_string()}
                    oninput={on_difficulty}
                />
                <div>
                    <label for="difficulty-setting">{ t("settings.difficulty_label") }</label>
                    { "\u{a0}" }
                    <strong>{ t(&format!("difficulty.name.{slug}")) }</strong>
                    <div
                        class="Settings-difficulty-help"
                        style="font-size: 14px; height: 70px; margin-left: 8px; margin-top: 8px"
                    >
                        { t(&format!("difficulty.help.{slug}")) }
                    </div>
                </div>
            </div>
            <div class="Settings-setting">
                <label for="keyboard-setting">{ t("settings.keyboard_label") }</label>
                <select
                    name="keyboard-setting"
                    id="keyboard-setting"
                    value={props.keyboard.clone()}
                    onchange={select_value(&props.on_keyboard)}
                >
                    { for KeyboardPreset::ALL.iter().map(|preset| html! {
                        <option
                            value={preset.template()}
                            selected={props.keyboard.as_str() == preset.template()}
                        >
                            { preset.label() }
                        </option>
                    }) }
                </select>
                <input
                    style="margin-left: 20px"
                    id="enter-left-setting"
                    type="checkbox"
                    checked={props.enter_left}
                    onchange={toggle(&props.on_toggle_enter_left)}
                />
                <label for="enter-left-setting">{ t("settings.enter_left") }</label>
            </div>
            <div class="Settings-setting">
                <label for="lang-setting">{ t("settings.language_label") }</label>
                <select
                    id="lang-setting"
                    value={props.lang.clone()}
                    onchange={select_value(&props.on_lang)}
                >
                    { for locales().iter().map(|meta| html! {
                        <option value={meta.code} selected={props.lang.as_str() == meta.code}>
                            { meta.name }
                        </option>
                    }) }
                </select>
            </div>
        </div>
    }
}
