#![cfg(target_arch = "wasm32")]

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use mjforyou::components::hero_shader::HeroShader;

wasm_bindgen_test_configure!(run_in_browser);

fn webgl_available() -> bool {
    let document = web_sys::window().unwrap().document().unwrap();
    let scratch: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    matches!(scratch.get_context("webgl"), Ok(Some(_)))
}

fn size(canvas: &HtmlCanvasElement) -> (u32, u32) {
    (canvas.width(), canvas.height())
}

#[wasm_bindgen_test]
async fn unmounted_canvas_is_no_longer_drawn() {
    if !webgl_available() {
        console_log!("no webgl in this browser, skipping");
        return;
    }
    let document = web_sys::window().unwrap().document().unwrap();
    let body = document.body().unwrap();
    let host = document.create_element("div").unwrap();
    body.append_child(&host).unwrap();

    let app = yew::Renderer::<HeroShader>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let canvas: HtmlCanvasElement = host
        .query_selector("canvas")
        .unwrap()
        .unwrap()
        .dyn_into()
        .unwrap();

    // Running: the backing store follows the layout size.
    canvas
        .set_attribute("style", "display: block; width: 200px; height: 100px;")
        .unwrap();
    TimeoutFuture::new(200).await;
    assert_eq!(size(&canvas), (200, 100));

    app.destroy();

    // Put the same element back on the page with a new size. A live loop
    // would resize it on the next frame.
    body.append_child(&canvas).unwrap();
    canvas
        .set_attribute("style", "display: block; width: 120px; height: 60px;")
        .unwrap();
    TimeoutFuture::new(200).await;
    assert_eq!(size(&canvas), (200, 100));

    canvas.remove();
    host.remove();
}
