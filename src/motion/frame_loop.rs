use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use log::debug;

struct Inner {
    pending: RefCell<Option<AnimationFrame>>,
    tick: RefCell<Box<dyn FnMut(f64)>>,
}

/// Runs a callback once per display frame until dropped.
///
/// The callback receives the frame timestamp in milliseconds. The scheduled
/// callback only holds a weak reference to the loop, so dropping the handle
/// releases the pending frame request and nothing runs afterwards.
pub struct FrameLoop {
    inner: Rc<Inner>,
}

impl FrameLoop {
    pub fn start<F>(tick: F) -> Self
    where
        F: FnMut(f64) + 'static,
    {
        let inner = Rc::new(Inner {
            pending: RefCell::new(None),
            tick: RefCell::new(Box::new(tick)),
        });
        schedule(&inner);
        debug!("frame loop started");
        Self { inner }
    }

    pub fn is_scheduled(&self) -> bool {
        self.inner.pending.borrow().is_some()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Cancels the outstanding request_animation_frame.
        self.inner.pending.borrow_mut().take();
        debug!("frame loop released");
    }
}

fn schedule(inner: &Rc<Inner>) {
    let weak: Weak<Inner> = Rc::downgrade(inner);
    let handle = request_animation_frame(move |timestamp| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        (inner.tick.borrow_mut())(timestamp);
        schedule(&inner);
    });
    *inner.pending.borrow_mut() = Some(handle);
}
