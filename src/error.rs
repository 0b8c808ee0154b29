//! Errors raised while wiring the game to its host.
//!
//! The simulation itself cannot fail; everything here comes from construction
//! (bad config, missing canvas) or from the browser refusing a DOM call.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// No canvas was handed to the engine (or the node ref was not attached yet).
    #[error("no drawable surface supplied")]
    MissingSurface,

    /// The canvas refused to hand out a 2d context.
    #[error("canvas has no 2d rendering context")]
    MissingContext,

    #[error("no global `window` exists")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("invalid game configuration: {0}")]
    InvalidConfig(String),

    /// A DOM call threw; the JS value is formatted into the message.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        EngineError::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{:?}", value)),
        )
    }
}
