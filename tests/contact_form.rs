#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use mjforyou::components::contact_form::ContactForm;
use mjforyou::config::SUBMIT_DELAY_MS;

wasm_bindgen_test_configure!(run_in_browser);

/// Swaps `window.open` for a counter until dropped.
struct OpenCounter {
    calls: Rc<Cell<u32>>,
    original: JsValue,
    _stub: Closure<dyn FnMut() -> JsValue>,
}

impl OpenCounter {
    fn install() -> Self {
        let window = web_sys::window().unwrap();
        let original = js_sys::Reflect::get(&window, &"open".into()).unwrap();
        let calls = Rc::new(Cell::new(0));
        let stub = Closure::<dyn FnMut() -> JsValue>::new({
            let calls = calls.clone();
            move || {
                calls.set(calls.get() + 1);
                JsValue::NULL
            }
        });
        js_sys::Reflect::set(&window, &"open".into(), stub.as_ref()).unwrap();
        Self {
            calls,
            original,
            _stub: stub,
        }
    }
}

impl Drop for OpenCounter {
    fn drop(&mut self) {
        let window = web_sys::window().unwrap();
        js_sys::Reflect::set(&window, &"open".into(), &self.original).unwrap();
    }
}

fn host() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

fn type_into(host: &Element, id: &str, value: &str) {
    let target = host.query_selector(&format!("#{}", id)).unwrap().unwrap();
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
    } else {
        target.unchecked_ref::<HtmlTextAreaElement>().set_value(value);
    }
    let init = EventInit::new();
    init.set_bubbles(true);
    let event = Event::new_with_event_init_dict("input", &init).unwrap();
    target.dispatch_event(&event).unwrap();
}

async fn fill_and_submit(host: &Element) {
    type_into(host, "name", "Peter Parker");
    type_into(host, "email", "peter@dailybugle.com");
    type_into(host, "subject", "Web");
    type_into(host, "message", "Need a site");
    TimeoutFuture::new(50).await;

    host.query_selector(".form-submit")
        .unwrap()
        .unwrap()
        .unchecked_into::<HtmlElement>()
        .click();
    TimeoutFuture::new(50).await;
}

fn submit_disabled(host: &Element) -> bool {
    host.query_selector(".form-submit")
        .unwrap()
        .map(|button| button.has_attribute("disabled"))
        .unwrap_or(false)
}

#[wasm_bindgen_test]
async fn valid_submission_hands_off_after_the_pause() {
    let opens = OpenCounter::install();
    let host = host();
    let app = yew::Renderer::<ContactForm>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    fill_and_submit(&host).await;
    assert!(submit_disabled(&host));
    assert_eq!(opens.calls.get(), 0);

    TimeoutFuture::new(SUBMIT_DELAY_MS + 200).await;
    assert_eq!(opens.calls.get(), 1);
    // The stub returns null, as a popup blocker would.
    assert!(host.query_selector(".fallback-link").unwrap().is_some());

    app.destroy();
    host.remove();
}

#[wasm_bindgen_test]
async fn unmounting_mid_pause_cancels_the_hand_off() {
    let opens = OpenCounter::install();
    let host = host();
    let app = yew::Renderer::<ContactForm>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    fill_and_submit(&host).await;
    assert!(submit_disabled(&host));

    app.destroy();
    TimeoutFuture::new(SUBMIT_DELAY_MS + 200).await;
    assert_eq!(opens.calls.get(), 0);
    host.remove();
}
