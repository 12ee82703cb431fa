// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for raffle-ui component tests.
//
// Provides mount/cleanup helpers, stylesheet and runtime config injection,
// and event dispatch so that individual test files stay focused on
// assertions rather than boilerplate.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use std::time::Duration;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement};
use yew::platform::time::sleep;

/// Long enough for the slowest default track (0.4 s) to finish.
pub const SETTLE: Duration = Duration::from_millis(700);

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

/// Append a `<style>` element with `css` to `<head>` and return it.
pub fn inject_stylesheet(css: &str) -> Element {
    let document = gloo_utils::document();
    let style = document.create_element("style").unwrap();
    style.set_text_content(Some(css));
    document.head().unwrap().append_child(&style).unwrap();
    style
}

pub fn remove_stylesheet(style: &Element) {
    style.remove();
}

/// Query a required element below `root`.
pub fn find(root: &Element, selector: &str) -> HtmlElement {
    root.query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("missing {selector}"))
        .unchecked_into()
}

pub fn dispatch(target: &Element, event: &str) {
    let event = Event::new(event).unwrap();
    target.dispatch_event(&event).unwrap();
}

pub fn inline_style(el: &HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

/// Horizontal offset, in px, of an inline `translate(..)` transform.
pub fn inline_translate_x(el: &HtmlElement) -> f64 {
    let transform = inline_style(el, "transform");
    transform
        .strip_prefix("translate(")
        .and_then(|rest| rest.split("px").next())
        .and_then(|x| x.trim().parse().ok())
        .unwrap_or_else(|| panic!("unexpected transform {transform:?}"))
}

pub fn computed_style(el: &HtmlElement, property: &str) -> String {
    gloo_utils::window()
        .get_computed_style(el)
        .unwrap()
        .unwrap()
        .get_property_value(property)
        .unwrap()
}

/// Let Yew flush a render.
pub async fn flush() {
    sleep(Duration::ZERO).await;
}

/// Wait until every running track has reached its end.
pub async fn settle() {
    sleep(SETTLE).await;
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` whose `logoAnimation.raffle` track is
/// replaced by the given values.
pub fn inject_raffle_override(x: f64, color: &str, duration: f64) {
    let raffle = js_sys::Object::new();
    js_sys::Reflect::set(&raffle, &"x".into(), &x.into()).unwrap();
    js_sys::Reflect::set(&raffle, &"color".into(), &color.into()).unwrap();
    js_sys::Reflect::set(&raffle, &"duration".into(), &duration.into()).unwrap();
    inject_logo_animation(&[("raffle", raffle.into())]);
}

/// Inject a `window.__APP_CONFIG.logoAnimation` built from `tracks`.
pub fn inject_logo_animation(tracks: &[(&str, wasm_bindgen::JsValue)]) {
    let logo = js_sys::Object::new();
    for (name, value) in tracks {
        js_sys::Reflect::set(&logo, &(*name).into(), value).unwrap();
    }
    let config = js_sys::Object::new();
    js_sys::Reflect::set(&config, &"logoAnimation".into(), &logo).unwrap();

    let frozen = js_sys::Object::freeze(&config);
    let window = gloo_utils::window();
    js_sys::Reflect::set(&window, &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}
