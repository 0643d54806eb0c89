#![cfg(target_arch = "wasm32")]

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};
use yew::Renderer;

use wadoru_web::app::App;
use wadoru_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    dom::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn ensure_app_root() -> web_sys::Element {
    let doc = document();
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    if let Some(storage) = dom::local_storage() {
        let _ = storage.clear();
    }
    wadoru_web::i18n::set_lang("ja");
    Renderer::<App>::with_root(ensure_app_root()).render();
    TimeoutFuture::new(20).await;
}

fn click(selector: &str) {
    let el: HtmlElement = document()
        .query_selector(selector)
        .expect("query")
        .unwrap_or_else(|| panic!("{selector} exists"))
        .dyn_into()
        .expect("cast to element");
    el.click();
}

#[wasm_bindgen_test]
async fn settings_opens_and_closes() {
    render_app().await;
    click("button[aria-label='設定']");
    TimeoutFuture::new(20).await;
    assert!(document().get_element_by_id("dark-setting").is_some());

    click("button[aria-label='閉じる']");
    TimeoutFuture::new(20).await;
    assert!(document().get_element_by_id("dark-setting").is_none());
}

#[wasm_bindgen_test]
async fn dark_toggle_updates_body_and_storage() {
    render_app().await;
    click("button[aria-label='設定']");
    TimeoutFuture::new(20).await;
    let before = document().body().expect("body").class_name() == "dark";
    click("#dark-setting");
    TimeoutFuture::new(20).await;

    let body = document().body().expect("body");
    assert_eq!(body.class_name() == "dark", !before);
    let stored = dom::local_storage()
        .and_then(|s| s.get_item("dark").ok().flatten())
        .expect("dark persisted");
    assert_eq!(stored, (!before).to_string());
    assert!(
        !body
            .style()
            .get_property_value("transition")
            .unwrap_or_default()
            .is_empty(),
        "transition should be enabled after the first paint"
    );
}
