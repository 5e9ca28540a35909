#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use mjforyou::components::nav::scroll_to_section;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn section_links_scroll_to_their_target() {
    let window = web_sys::window().unwrap();
    let document = window.document().unwrap();
    let section = document.create_element("section").unwrap();
    section.set_id("pricing");
    section
        .set_attribute("style", "margin-top: 4000px; height: 200px;")
        .unwrap();
    document.body().unwrap().append_child(&section).unwrap();
    window.scroll_to_with_x_and_y(0.0, 0.0);

    scroll_to_section("pricing");
    TimeoutFuture::new(1_000).await;
    assert!(window.scroll_y().unwrap() > 0.0);

    // Unknown ids leave the page where it is.
    let settled = window.scroll_y().unwrap();
    scroll_to_section("no-such-section");
    TimeoutFuture::new(100).await;
    assert_eq!(window.scroll_y().unwrap(), settled);

    window.scroll_to_with_x_and_y(0.0, 0.0);
    section.remove();
}
