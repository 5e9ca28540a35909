#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use mjforyou::motion::FrameLoop;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
async fn frames_arrive_while_running() {
    let frames = Rc::new(Cell::new(0u32));
    let frame_loop = FrameLoop::start({
        let frames = frames.clone();
        move |_| frames.set(frames.get() + 1)
    });
    assert!(frame_loop.is_scheduled());

    TimeoutFuture::new(200).await;
    assert!(frames.get() > 0);
    drop(frame_loop);
}

#[wasm_bindgen_test]
async fn dropping_the_loop_stops_frames() {
    let frames = Rc::new(Cell::new(0u32));
    let frame_loop = FrameLoop::start({
        let frames = frames.clone();
        move |_| frames.set(frames.get() + 1)
    });

    TimeoutFuture::new(100).await;
    drop(frame_loop);
    let seen = frames.get();

    TimeoutFuture::new(200).await;
    assert_eq!(frames.get(), seen);
}

#[wasm_bindgen_test]
async fn timestamps_never_go_backwards() {
    let last = Rc::new(Cell::new(f64::MIN));
    let ordered = Rc::new(Cell::new(true));
    let frame_loop = FrameLoop::start({
        let last = last.clone();
        let ordered = ordered.clone();
        move |now| {
            if now < last.get() {
                ordered.set(false);
            }
            last.set(now);
        }
    });

    TimeoutFuture::new(150).await;
    drop(frame_loop);
    assert!(ordered.get());
}
