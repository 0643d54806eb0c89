//! Host for the gameplay board.
//!
//! Guess validation and scoring live outside this crate; this component owns
//! the props contract the board is driven with and draws the on-screen keyboard.

use crate::components::keyboard::Keyboard;
use wadoru_core::{Difficulty, Key};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct GameProps {
    pub max_guesses: usize,
    /// Kept mounted while another page is shown so the board keeps its state.
    pub hidden: bool,
    pub difficulty: Difficulty,
    pub color_blind: bool,
    pub keyboard_layout: AttrValue,
}

#[function_component(Game)]
pub fn game(p: &GameProps) -> Html {
    let on_key = Callback::from(|key: Key| log::debug!("key pressed: {key:?}"));
    html! {
        <div
            class="Game"
            style={p.hidden.then_some("display: none")}
            data-max-guesses={p.max_guesses.to_string()}
            data-difficulty={p.difficulty.level().to_string()}
            data-color-blind={p.color_blind.to_string()}
            data-testid="game-screen"
        >
            <Keyboard layout={p.keyboard_layout.clone()} {on_key} />
        </div>
    }
}
