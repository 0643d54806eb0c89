use crate::i18n::t;
use wadoru_core::Difficulty;
use wadoru_core::difficulty::TitleStyle;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub difficulty: Difficulty,
}

/// Page heading; harder modes highlight the difficulty in the name.
#[function_component(Title)]
pub fn title(p: &Props) -> Html {
    match p.difficulty.title_style() {
        TitleStyle::Plain => html! { <h1>{ t("title.plain") }</h1> },
        TitleStyle::Emphasized { italic } => {
            let style = if italic {
                "color: #e66; font-style: italic"
            } else {
                "color: #e66"
            };
            let emphasis = t(&format!("title.{}", p.difficulty.slug()));
            html! {
                <h1>
                    <span style={style}>{ emphasis }</span>
                    { t("title.suffix") }
                </h1>
            }
        }
    }
}
