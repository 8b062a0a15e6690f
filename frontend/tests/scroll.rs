// Browser tests for the window scroll hook: it tracks the offset while
// mounted and leaves no listener behind after unmount.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, query, scroll_instantly};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

use starshine_frontend::hooks::use_scroll_y;

wasm_bindgen_test_configure!(run_in_browser);

#[function_component(Readout)]
fn readout() -> Html {
    let scroll_y = use_scroll_y();
    html! {
        <>
            <p class="readout">{ format!("{scroll_y:.0}") }</p>
            <div style="height: 4000px;"></div>
        </>
    }
}

fn reading(mount: &web_sys::Element) -> String {
    query(mount, ".readout")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn offset_follows_scroll_events() {
    scroll_instantly(0.0);
    let mount = create_mount_point();
    yew::Renderer::<Readout>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;
    assert_eq!(reading(&mount), "0");

    scroll_instantly(120.0);
    sleep(Duration::from_millis(20)).await;
    assert_eq!(reading(&mount), "120");

    scroll_instantly(0.0);
    cleanup(&mount);
}

#[wasm_bindgen_test]
async fn scrolling_after_unmount_is_harmless() {
    scroll_instantly(0.0);
    let mount = create_mount_point();
    let app = yew::Renderer::<Readout>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    app.destroy();
    sleep(Duration::ZERO).await;
    assert!(query(&mount, ".readout").is_none());

    // A listener left attached would call into a dropped closure here.
    scroll_instantly(80.0);
    sleep(Duration::from_millis(20)).await;
    scroll_instantly(0.0);
    sleep(Duration::from_millis(20)).await;

    cleanup(&mount);
}
