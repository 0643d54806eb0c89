use crate::app::state::AppState;
use gloo::timers::callback::Timeout;
use wadoru_core::config::{TRANSITION_DELAY_MS, body_class};
use yew::prelude::*;

/// Startup side effects: theme class, today redirect, deferred transition, language.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    crate::i18n::set_lang(&app_state.lang.get());

    use_effect_with(app_state.dark.get(), |dark| {
        crate::dom::set_body_class(body_class(*dark));
        || {}
    });

    let query = (*app_state.query).clone();
    let today = *app_state.today;
    use_effect_with((), move |()| {
        if let Some(target) = query.redirect_target(today) {
            log::info!("redirecting to today's puzzle: {target}");
            crate::dom::redirect_to(&target);
        }
        let _ = Timeout::new(TRANSITION_DELAY_MS, crate::dom::enable_body_transition).forget();
        || {}
    });
}
