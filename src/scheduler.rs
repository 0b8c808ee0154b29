//! "Next frame" scheduling.
//!
//! The engine never loops on its own; it asks a `FrameScheduler` to call it
//! back once, draws, and asks again. The browser implementation sits on
//! `requestAnimationFrame`; `ManualScheduler` lets a test play frames by hand.

use std::cell::{Cell, RefCell};

use crate::error::EngineError;

/// Receives the frame timestamp in milliseconds.
pub type FrameCallback = Box<dyn FnOnce(f64)>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, EngineError>;
    fn cancel_frame(&self, handle: FrameHandle);
}

/// Frame driver for tests and headless hosts.
#[derive(Default)]
pub struct ManualScheduler {
    pending: RefCell<Vec<(FrameHandle, FrameCallback)>>,
    next_id: Cell<i32>,
    now: Cell<f64>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward by `ms` and fires every callback that was
    /// pending beforehand. Callbacks requested while firing wait for the next
    /// call. Returns how many fired.
    pub fn advance(&self, ms: f64) -> usize {
        self.now.set(self.now.get() + ms);
        let due: Vec<_> = self.pending.borrow_mut().drain(..).collect();
        let fired = due.len();
        for (_, callback) in due {
            callback(self.now.get());
        }
        fired
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn now(&self) -> f64 {
        self.now.get()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, EngineError> {
        let handle = FrameHandle(self.next_id.get());
        self.next_id.set(self.next_id.get() + 1);
        self.pending.borrow_mut().push((handle, callback));
        Ok(handle)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        self.pending.borrow_mut().retain(|(h, _)| *h != handle);
    }
}

impl<S: FrameScheduler + ?Sized> FrameScheduler for std::rc::Rc<S> {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, EngineError> {
        (**self).request_frame(callback)
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        (**self).cancel_frame(handle)
    }
}
