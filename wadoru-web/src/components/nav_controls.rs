use crate::i18n::t;
use wadoru_core::{NavAction, Page};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub page: Page,
    pub on_navigate: Callback<NavAction>,
}

#[function_component(NavControls)]
pub fn nav_controls(p: &Props) -> Html {
    html! {
        <div class="top-right">
            { for p.page.controls().iter().map(|control| {
                let label = t(control.label_key);
                let on_navigate = p.on_navigate.clone();
                let action = control.action;
                html! {
                    <button
                        class="emoji-link"
                        title={label.clone()}
                        aria-label={label}
                        onclick={Callback::from(move |_| on_navigate.emit(action))}
                    >
                        { control.emoji }
                    </button>
                }
            }) }
        </div>
    }
}
