//! Player intents and the seam between the engine and whatever produces them.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Intent {
    Jump,
    DuckStart,
    DuckEnd,
}

/// Maps a `KeyboardEvent.code` to an intent. `pressed` is false for keyup.
pub fn intent_for_key(code: &str, pressed: bool) -> Option<Intent> {
    match (code, pressed) {
        ("Space" | "ArrowUp", true) => Some(Intent::Jump),
        ("ArrowDown", true) => Some(Intent::DuckStart),
        ("ArrowDown", false) => Some(Intent::DuckEnd),
        _ => None,
    }
}

pub type IntentSink = Rc<dyn Fn(Intent)>;

/// Something that can deliver intents to the engine. The returned guard keeps
/// the binding alive; dropping it detaches.
pub trait InputSource {
    type Guard;
    fn attach(&self, sink: IntentSink) -> Result<Self::Guard, EngineError>;
}

/// Headless input: keeps the sink so a driver can push intents by hand.
#[derive(Clone, Default)]
pub struct ManualInput {
    sink: Rc<RefCell<Option<IntentSink>>>,
}

/// Clears the `ManualInput` sink when dropped.
pub struct ManualBinding {
    sink: Rc<RefCell<Option<IntentSink>>>,
}

impl Drop for ManualBinding {
    fn drop(&mut self) {
        self.sink.borrow_mut().take();
    }
}

impl ManualInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delivers `intent` if bound; returns whether anything was listening.
    pub fn send(&self, intent: Intent) -> bool {
        let sink = self.sink.borrow().clone();
        match sink {
            Some(sink) => {
                sink(intent);
                true
            }
            None => false,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.sink.borrow().is_some()
    }
}

impl InputSource for ManualInput {
    type Guard = ManualBinding;

    fn attach(&self, sink: IntentSink) -> Result<ManualBinding, EngineError> {
        *self.sink.borrow_mut() = Some(sink);
        Ok(ManualBinding {
            sink: self.sink.clone(),
        })
    }
}
