// Browser tests for the fire-once entrance wrapper: it turns visible the
// first time it enters the viewport, never turns back, and falls back to
// visible when the observer cannot be built.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, has_class, scroll_instantly};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::js_sys::Reflect;
use yew::platform::time::sleep;
use yew::prelude::*;

use starshine_frontend::components::Reveal;

wasm_bindgen_test_configure!(run_in_browser);

const SETTLE: Duration = Duration::from_millis(200);

#[function_component(InView)]
fn in_view() -> Html {
    html! {
        <>
            <Reveal class={classes!("target")}><p>{"hello"}</p></Reveal>
            <div style="height: 4000px;"></div>
        </>
    }
}

#[function_component(BelowFold)]
fn below_fold() -> Html {
    html! {
        <>
            <div style="height: 4000px;"></div>
            <Reveal class={classes!("target")}><p>{"later"}</p></Reveal>
            <div style="height: 4000px;"></div>
        </>
    }
}

fn is_visible(mount: &web_sys::Element) -> bool {
    has_class(mount, ".reveal.target", "is-visible")
}

#[wasm_bindgen_test]
async fn element_in_view_reveals_and_stays() {
    scroll_instantly(0.0);
    let mount = create_mount_point();
    yew::Renderer::<InView>::with_root(mount.clone()).render();
    sleep(SETTLE).await;
    assert!(is_visible(&mount));

    scroll_instantly(3_000.0);
    sleep(SETTLE).await;
    assert!(is_visible(&mount), "leaving the viewport keeps the class");

    scroll_instantly(0.0);
    sleep(SETTLE).await;
    assert!(is_visible(&mount));

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn element_below_the_fold_waits_for_first_entry() {
    scroll_instantly(0.0);
    let mount = create_mount_point();
    yew::Renderer::<BelowFold>::with_root(mount.clone()).render();
    sleep(SETTLE).await;
    assert!(!is_visible(&mount), "hidden until scrolled into view");

    let target = mount.query_selector(".reveal.target").unwrap().unwrap();
    let top = target.get_bounding_client_rect().top();
    scroll_instantly(top);
    sleep(SETTLE).await;
    assert!(is_visible(&mount));

    scroll_instantly(0.0);
    sleep(SETTLE).await;
    assert!(is_visible(&mount), "scrolling back out does not replay");

    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn missing_observer_reveals_immediately() {
    scroll_instantly(0.0);
    let window = gloo_utils::window();
    let key = JsValue::from_str("IntersectionObserver");
    let original = Reflect::get(&window, &key).unwrap();
    Reflect::set(&window, &key, &JsValue::UNDEFINED).unwrap();

    let mount = create_mount_point();
    yew::Renderer::<BelowFold>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;
    let visible = is_visible(&mount);

    Reflect::set(&window, &key, &original).unwrap();
    assert!(visible, "content must not stay hidden without an observer");

    cleanup(&mount);
}
