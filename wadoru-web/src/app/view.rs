use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::{nav_controls::NavControls, puzzle_link::PuzzleLink, title::Title};
use crate::pages::{about::About, game::Game, settings::SettingsPage};
use wadoru_core::{MAX_GUESSES, Page, PuzzleLink as Link};
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let page = *state.page;
    let difficulty = state.difficulty.get();
    let color_blind = state.color_blind.get();
    let container_class = classes!("App-container", color_blind.then_some("color-blind"));
    let link = Link::for_query(&state.query, *state.today);

    let panel = match page {
        Page::Game => Html::default(),
        Page::About => html! { <About /> },
        Page::Settings => html! {
            <SettingsPage
                dark={state.dark.get()}
                color_blind={color_blind}
                difficulty={difficulty}
                keyboard={state.keyboard.get()}
                enter_left={state.enter_left.get()}
                lang={state.lang.get()}
                on_toggle_dark={handlers.toggle_dark.clone()}
                on_toggle_color_blind={handlers.toggle_color_blind.clone()}
                on_difficulty={handlers.set_difficulty.clone()}
                on_keyboard={handlers.set_keyboard.clone()}
                on_toggle_enter_left={handlers.toggle_enter_left.clone()}
                on_lang={handlers.set_lang.clone()}
            />
        },
    };

    html! {
        <div class={container_class}>
            <Title {difficulty} />
            <NavControls {page} on_navigate={handlers.navigate.clone()} />
            <PuzzleLink {link} visible={page.is_game()} />
            { panel }
            <Game
                max_guesses={MAX_GUESSES}
                hidden={!page.is_game()}
                {difficulty}
                {color_blind}
                keyboard_layout={state.keyboard_layout()}
            />
        </div>
    }
}
