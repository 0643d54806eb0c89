use crate::i18n::locales::{is_supported, load_translations};
use serde_json::Value;
use std::cell::RefCell;
use wadoru_core::config::DEFAULT_LANG;

pub struct I18nBundle {
    pub lang: String,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: &str) -> Option<I18nBundle> {
    if !is_supported(lang) {
        return None;
    }
    let fallback = load_translations(DEFAULT_LANG)?;
    let translations = load_translations(lang)?;

    Some(I18nBundle {
        lang: lang.to_string(),
        translations,
        fallback,
    })
}

fn fallback_bundle() -> I18nBundle {
    let fallback =
        load_translations(DEFAULT_LANG).unwrap_or(Value::Object(serde_json::Map::new()));

    I18nBundle {
        lang: DEFAULT_LANG.to_string(),
        translations: fallback.clone(),
        fallback,
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> =
        RefCell::new(build_bundle(DEFAULT_LANG).unwrap_or_else(fallback_bundle));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Set the current language for internationalization
///
/// Changes the active language bundle and updates the `<html lang>` attribute.
/// Unknown codes are ignored. Persisting the choice is up to the caller.
pub fn set_lang(lang: &str) {
    if current_lang() == lang {
        return;
    }
    let Some(bundle) = build_bundle(lang) else {
        log::debug!("unsupported language `{lang}`");
        return;
    };
    CURRENT.with(|cell| cell.replace(bundle));
    if let Some(el) = crate::dom::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = el.set_attribute("lang", lang);
    }
}

/// Get the current active language code
#[must_use]
pub fn current_lang() -> String {
    with_bundle(|bundle| bundle.lang.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_bundle_loads_requested_locale() {
        let bundle = build_bundle("en").expect("bundle should load");
        assert_eq!(bundle.lang, "en");
        assert!(bundle.translations.is_object());
        assert!(bundle.fallback.is_object());
        assert!(build_bundle("xx").is_none());
    }

    #[test]
    fn unsupported_language_keeps_current_bundle() {
        set_lang("en");
        set_lang("xx");
        assert_eq!(current_lang(), "en");
        set_lang("ja");
        assert_eq!(current_lang(), "ja");
    }
}
