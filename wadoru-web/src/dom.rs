//! Thin wrappers over the browser globals.
//!
//! Off wasm every accessor reports "unavailable" so components can render on
//! the host (server-side rendering, unit tests) without touching JS imports.

use chrono::NaiveDate;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{HtmlElement, Storage, Window};

/// The global `window`, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[must_use]
pub fn body() -> Option<HtmlElement> {
    window()?.document()?.body()
}

/// Access the browser `localStorage` handle.
#[must_use]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Whether the host asks for a dark color scheme. Light when unknown.
#[must_use]
pub fn prefers_dark_scheme() -> bool {
    window()
        .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches())
}

/// Current `location.search`, or an empty string.
#[must_use]
pub fn query_string() -> String {
    window()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default()
}

/// Navigate to `url` (relative to the current page).
pub fn redirect_to(url: &str) {
    let Some(win) = window() else {
        return;
    };
    if let Err(err) = win.location().assign(url) {
        log::warn!("redirect to {url} failed: {}", js_error_message(&err));
    }
}

pub fn set_body_class(class: &str) {
    if let Some(body) = body() {
        body.set_class_name(class);
    }
}

/// Animate later background changes; left off for the first paint.
pub fn enable_body_transition() {
    if let Some(body) = body() {
        let _ = body
            .style()
            .set_property("transition", wadoru_core::config::BODY_TRANSITION);
    }
}

/// Today's date in UTC, as used for the daily seed.
#[must_use]
pub fn today() -> NaiveDate {
    #[cfg(target_arch = "wasm32")]
    {
        let now = js_sys::Date::new_0();
        i32::try_from(now.get_utc_full_year())
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, now.get_utc_month() + 1, now.get_utc_date()))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        chrono::Utc::now().date_naive()
    }
}
