// Shared mount/cleanup helpers for the browser component tests.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions};

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

pub fn query(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).unwrap()
}

pub fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn texts(root: &Element, selector: &str) -> Vec<String> {
    query_all(root, selector)
        .iter()
        .map(|el| el.text_content().unwrap_or_default())
        .collect()
}

pub fn click(el: &Element) {
    el.clone().dyn_into::<HtmlElement>().unwrap().click();
}

/// Jump the window to `y` without smooth scrolling, then fire `scroll`
/// so listeners run before the next await.
pub fn scroll_instantly(y: f64) {
    let window = gloo_utils::window();
    let options = ScrollToOptions::new();
    options.set_top(y);
    options.set_behavior(ScrollBehavior::Instant);
    window.scroll_to_with_scroll_to_options(&options);
    window
        .dispatch_event(&Event::new("scroll").unwrap())
        .unwrap();
}

pub fn has_class(root: &Element, selector: &str, class: &str) -> bool {
    query(root, selector)
        .map(|el| el.class_list().contains(class))
        .unwrap_or(false)
}
