use crate::storage::BrowserStorage;
use wadoru_core::Preferences;
use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

/// Browser entry component: builds the settings service once and hands it down.
#[function_component(App)]
pub fn app() -> Html {
    let preferences = use_state(|| Preferences::new(BrowserStorage));
    html! { <AppShell preferences={(*preferences).clone()} /> }
}

#[derive(Properties, PartialEq, Clone)]
pub struct AppShellProps {
    pub preferences: Preferences,
}

#[function_component(AppShell)]
pub fn app_shell(props: &AppShellProps) -> Html {
    let app_state = state::use_app_state(&props.preferences);
    bootstrap::use_bootstrap(&app_state);
    view::render_app(&app_state)
}
