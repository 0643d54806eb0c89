use crate::i18n::{t, tr};
use std::collections::BTreeMap;
use wadoru_core::MAX_GUESSES;
use yew::prelude::*;

#[function_component(About)]
pub fn about() -> Html {
    let count = MAX_GUESSES.to_string();
    let vars = BTreeMap::from([("count", count.as_str())]);
    html! {
        <div class="App-about" data-testid="about-screen">
            <h2>{ t("about.title") }</h2>
            <p>{ tr("about.goal", Some(&vars)) }</p>
            <p>{ t("about.feedback") }</p>
            <ul>
                <li class="letter-correct">{ t("about.green") }</li>
                <li class="letter-elsewhere">{ t("about.yellow") }</li>
                <li class="letter-absent">{ t("about.gray") }</li>
            </ul>
            <p>{ t("about.daily") }</p>
        </div>
    }
}
