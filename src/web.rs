//! Browser bindings: requestAnimationFrame, DOM listeners and the 2d canvas.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, TouchEvent, Window};

use crate::config::GameConfig;
use crate::engine::TRexGame;
use crate::error::EngineError;
use crate::input::{intent_for_key, InputSource, Intent, IntentSink};
use crate::render::{Surface, TextAlign};
use crate::rng::default_source;
use crate::scheduler::{FrameCallback, FrameHandle, FrameScheduler};

pub type WebGame = TRexGame<AnimationFrameScheduler, DomInput, CanvasRenderingContext2d>;

/// Validates the inputs, sizes the canvas to the virtual resolution and builds
/// an idle engine on it. Call `start` on the result.
pub fn mount(
    canvas: Option<HtmlCanvasElement>,
    config: GameConfig,
    on_game_over: impl Fn(u32) + 'static,
) -> Result<WebGame, EngineError> {
    let canvas = canvas.ok_or(EngineError::MissingSurface)?;
    config.validate()?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or(EngineError::MissingContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| EngineError::MissingContext)?;
    canvas.set_width(config.width as u32);
    canvas.set_height(config.height as u32);

    let window = web_sys::window().ok_or(EngineError::NoWindow)?;
    let document = window.document().ok_or(EngineError::NoDocument)?;
    TRexGame::new(
        config,
        default_source(),
        AnimationFrameScheduler::new(window),
        DomInput::new(document, canvas),
        ctx,
        on_game_over,
    )
}

pub struct AnimationFrameScheduler {
    window: Window,
}

impl AnimationFrameScheduler {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn request_frame(&self, callback: FrameCallback) -> Result<FrameHandle, EngineError> {
        // frees itself once invoked
        let closure = Closure::once_into_js(move |timestamp: f64| callback(timestamp));
        let id = self.window.request_animation_frame(closure.unchecked_ref())?;
        Ok(FrameHandle(id))
    }

    fn cancel_frame(&self, handle: FrameHandle) {
        if let Err(e) = self.window.cancel_animation_frame(handle.0) {
            log::debug!("cancelAnimationFrame({}) failed: {:?}", handle.0, e);
        }
    }
}

/// Keyboard on the document, touch on the canvas.
pub struct DomInput {
    document: Document,
    canvas: HtmlCanvasElement,
}

impl DomInput {
    pub fn new(document: Document, canvas: HtmlCanvasElement) -> Self {
        Self { document, canvas }
    }
}

/// Attached listeners; removed on drop.
pub struct DomListeners {
    document: Document,
    canvas: HtmlCanvasElement,
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    keyup: Closure<dyn FnMut(KeyboardEvent)>,
    touchstart: Closure<dyn FnMut(TouchEvent)>,
}

impl InputSource for DomInput {
    type Guard = DomListeners;

    fn attach(&self, sink: IntentSink) -> Result<DomListeners, EngineError> {
        let keydown = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Some(intent) = intent_for_key(&e.code(), true) {
                    e.prevent_default();
                    sink(intent);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let keyup = {
            let sink = sink.clone();
            Closure::wrap(Box::new(move |e: KeyboardEvent| {
                if let Some(intent) = intent_for_key(&e.code(), false) {
                    sink(intent);
                }
            }) as Box<dyn FnMut(_)>)
        };
        let touchstart = Closure::wrap(Box::new(move |e: TouchEvent| {
            e.prevent_default();
            sink(Intent::Jump);
        }) as Box<dyn FnMut(_)>);

        // built first so a failed attach still detaches what went on
        let listeners = DomListeners {
            document: self.document.clone(),
            canvas: self.canvas.clone(),
            keydown,
            keyup,
            touchstart,
        };
        listeners
            .document
            .add_event_listener_with_callback("keydown", listeners.keydown.as_ref().unchecked_ref())?;
        listeners
            .document
            .add_event_listener_with_callback("keyup", listeners.keyup.as_ref().unchecked_ref())?;
        listeners.canvas.add_event_listener_with_callback(
            "touchstart",
            listeners.touchstart.as_ref().unchecked_ref(),
        )?;
        Ok(listeners)
    }
}

impl Drop for DomListeners {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("keyup", self.keyup.as_ref().unchecked_ref());
        let _ = self.canvas.remove_event_listener_with_callback(
            "touchstart",
            self.touchstart.as_ref().unchecked_ref(),
        );
    }
}

impl Surface for CanvasRenderingContext2d {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.set_fill_style_str(color);
        CanvasRenderingContext2d::fill_rect(self, x, y, w, h);
    }

    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64) {
        self.set_stroke_style_str(color);
        self.set_line_width(width);
        self.begin_path();
        self.move_to(x0, y0);
        self.line_to(x1, y1);
        self.stroke();
    }

    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str) {
        self.set_fill_style_str(color);
        self.set_font(font);
        self.set_text_align(align.as_css());
        if let Err(e) = self.fill_text(text, x, y) {
            log::debug!("fillText({:?}) failed: {:?}", text, e);
        }
    }
}
