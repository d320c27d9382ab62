//! Browser tests for the startup sequence.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use flow_studio_ui::styles::GLOBAL_STYLESHEETS;
use flow_studio_ui::styles::register_stylesheets;
use std::collections::BTreeMap;

use flow_studio_ui::http::HttpClient;
use flow_studio_ui::{bootstrap, run, ApiConfig, ApiError, BootstrapError, APP_SELECTOR};
use leptos::prelude::*;
use wasm_bindgen_test::*;
use web_sys::Document;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("test runs in a browser document")
}

fn fresh_mount_target(document: &Document) -> web_sys::Element {
    if let Ok(Some(old)) = document.query_selector(APP_SELECTOR) {
        old.remove();
    }
    let target = document.create_element("div").unwrap();
    target.set_id("app");
    document.body().unwrap().append_child(&target).unwrap();
    target
}

#[wasm_bindgen_test]
fn mounts_into_app_element() {
    let document = document();
    let target = fresh_mount_target(&document);

    let result = bootstrap(&document, ApiConfig::default(), || {
        view! { <div class="root-under-test">"editor"</div> }
    });

    assert_eq!(result, Ok(()));
    assert!(target.child_element_count() > 0, "#app should be populated");
    assert!(target.query_selector(".root-under-test").unwrap().is_some());
    assert!(target.query_selector(".status-bar").unwrap().is_some());
    target.remove();
}

#[wasm_bindgen_test]
fn status_bar_shows_configured_origin() {
    let document = document();
    let target = fresh_mount_target(&document);

    bootstrap(&document, ApiConfig::new(Some("https://api.example.com")), || ()).unwrap();

    let origin = target.query_selector(".status-origin").unwrap().unwrap();
    assert_eq!(origin.text_content().as_deref(), Some("https://api.example.com"));
    target.remove();
}

#[wasm_bindgen_test]
fn missing_mount_target_fails() {
    let document = document();
    if let Ok(Some(old)) = document.query_selector(APP_SELECTOR) {
        old.remove();
    }

    let result = bootstrap(&document, ApiConfig::default(), || ());

    assert_eq!(
        result,
        Err(BootstrapError::MountTargetMissing {
            selector: "#app".to_string()
        })
    );
}

#[wasm_bindgen_test]
fn stylesheets_are_linked_once() {
    let document = document();
    register_stylesheets(&document).unwrap();
    assert_eq!(register_stylesheets(&document).unwrap(), 0);

    let links = document.query_selector_all("link[rel=\"stylesheet\"]").unwrap();
    for href in GLOBAL_STYLESHEETS {
        let matching = (0..links.length())
            .filter_map(|i| links.item(i))
            .filter_map(|n| wasm_bindgen::JsCast::dyn_into::<web_sys::Element>(n).ok())
            .filter(|el| el.get_attribute("href").as_deref() == Some(*href))
            .count();
        assert_eq!(matching, 1, "{href} linked exactly once");
    }
}

#[wasm_bindgen_test]
fn run_mounts_only_once() {
    let document = document();
    let target = fresh_mount_target(&document);

    assert_eq!(run(|| ()), Ok(()));
    assert_eq!(run(|| ()), Err(BootstrapError::AlreadyBootstrapped));

    let apps = target.query_selector_all("main.app").unwrap();
    assert_eq!(apps.length(), 1, "second run must not mount again");
    target.remove();
}

#[wasm_bindgen_test]
fn non_html_mount_target_is_a_dom_error() {
    let document = document();
    if let Ok(Some(old)) = document.query_selector(APP_SELECTOR) {
        old.remove();
    }
    let svg = document
        .create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
        .unwrap();
    svg.set_id("app");
    document.body().unwrap().append_child(&svg).unwrap();

    let result = bootstrap(&document, ApiConfig::default(), || ());

    match result {
        Err(BootstrapError::Dom(message)) => {
            assert!(message.contains("not an HTML element"), "{message}");
        }
        other => panic!("expected a DOM error, got {other:?}"),
    }
    svg.remove();
}

#[wasm_bindgen_test]
async fn unserializable_body_is_an_encode_error() {
    let client = HttpClient::new(&ApiConfig::default());
    // JSON object keys must be strings
    let mut body = BTreeMap::new();
    body.insert((1_u8, 2_u8), "edge");

    let result = client
        .post_json::<_, serde_json::Value>("/api/ontology/build", &body)
        .await;

    match result {
        Err(ApiError::Encode { url, .. }) => {
            assert_eq!(url, "http://localhost:8000/api/ontology/build");
        }
        other => panic!("expected an encode error, got {other:?}"),
    }
}
