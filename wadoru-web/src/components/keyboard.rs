use crate::i18n::t;
use wadoru_core::{Key, KeyboardLayout};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Effective layout template, already composed for enter placement.
    pub layout: AttrValue,
    #[prop_or_default]
    pub on_key: Callback<Key>,
}

fn key_view(key: Key, on_key: &Callback<Key>) -> Html {
    let onclick = {
        let on_key = on_key.clone();
        Callback::from(move |_| on_key.emit(key))
    };
    match key {
        Key::Spacer => html! { <div class="Game-keyboard-spacer" /> },
        Key::Letter(c) => html! {
            <button class="Game-keyboard-button" data-key={c.to_string()} {onclick}>
                { c.to_string() }
            </button>
        },
        Key::Enter => html! {
            <button class="Game-keyboard-button Game-keyboard-button-wide" data-key="Enter" {onclick}>
                { t("keyboard.enter") }
            </button>
        },
        Key::Backspace => html! {
            <button class="Game-keyboard-button Game-keyboard-button-wide" data-key="Backspace" {onclick}>
                { t("keyboard.backspace") }
            </button>
        },
    }
}

#[function_component(Keyboard)]
pub fn keyboard(p: &Props) -> Html {
    let layout = KeyboardLayout::parse_or_default(&p.layout);
    html! {
        <div class="Game-keyboard" role="group" aria-label={t("keyboard.label")}>
            { for layout.rows().iter().map(|row| html! {
                <div class="Game-keyboard-row">
                    { for row.iter().map(|key| key_view(*key, &p.on_key)) }
                </div>
            }) }
        </div>
    }
}
