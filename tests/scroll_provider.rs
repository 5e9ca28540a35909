#![cfg(target_arch = "wasm32")]

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event};
use yew::prelude::*;

use mjforyou::motion::{use_scroll_signal, ScrollProvider};

wasm_bindgen_test_configure!(run_in_browser);

thread_local! {
    static RENDERS: Cell<u32> = Cell::new(0);
}

fn renders() -> u32 {
    RENDERS.with(Cell::get)
}

#[function_component(Tally)]
fn tally() -> Html {
    let signal = use_scroll_signal();
    RENDERS.with(|r| r.set(r.get() + 1));
    html! { <span>{ signal.y }</span> }
}

#[function_component(Page)]
fn page() -> Html {
    html! {
        <ScrollProvider>
            <Tally />
        </ScrollProvider>
    }
}

fn host() -> Element {
    let document = web_sys::window().unwrap().document().unwrap();
    let host = document.create_element("div").unwrap();
    host.set_attribute("style", "height: 5000px;").unwrap();
    document.body().unwrap().append_child(&host).unwrap();
    host
}

async fn scroll_to(y: f64) {
    let window = web_sys::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, y);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    TimeoutFuture::new(50).await;
}

#[wasm_bindgen_test]
async fn unmounted_provider_stops_listening() {
    let host = host();
    let app = yew::Renderer::<Page>::with_root(host.clone()).render();
    TimeoutFuture::new(50).await;

    let before = renders();
    scroll_to(120.0).await;
    assert!(renders() > before, "scrolling should re-render subscribers");

    app.destroy();
    let after_unmount = renders();
    scroll_to(480.0).await;
    assert_eq!(renders(), after_unmount);

    scroll_to(0.0).await;
    host.remove();
}
