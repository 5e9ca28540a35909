#![cfg(target_arch = "wasm32")]

use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

use mjforyou::shader::{self, ShaderError};

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn canvas_without_webgl_fails_soft() {
    let canvas = canvas();
    // A canvas bound to a 2d context can never hand out a webgl one.
    assert!(canvas.get_context("2d").unwrap().is_some());

    let result = shader::mount(canvas.clone());
    assert!(matches!(result, Err(ShaderError::Unsupported)));

    // Backing store untouched
    assert_eq!((canvas.width(), canvas.height()), (300, 150));
    canvas.remove();
}
