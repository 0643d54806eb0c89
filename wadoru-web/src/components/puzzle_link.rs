use crate::i18n::t;
use wadoru_core::PuzzleLink as Link;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub link: Link,
    pub visible: bool,
}

/// Top-left switch between today's puzzle and a random one.
#[function_component(PuzzleLink)]
pub fn puzzle_link(p: &Props) -> Html {
    let visibility = if p.visible { "visible" } else { "hidden" };
    html! {
        <div class="puzzle-link" style={format!("position: absolute; left: 5px; top: 5px; visibility: {visibility}")}>
            <a href={p.link.href.clone()}>{ t(p.link.label_key) }</a>
        </div>
    }
}
