//! Chrome-Dino style runner for the event page.
//!
//! The engine lives in [`world`] (simulation), [`render`] (drawing onto any
//! [`render::Surface`]) and [`engine`] (the start/destroy lifecycle driven by a
//! [`scheduler::FrameScheduler`]). [`web`] plugs those into the browser and
//! [`components`] is the yew page that hosts a game per player.

pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
pub mod render;
pub mod rng;
pub mod scheduler;
pub mod sprites;
pub mod state;
pub mod util;
pub mod web;
pub mod world;

pub use config::GameConfig;
pub use engine::TRexGame;
pub use error::EngineError;
pub use input::Intent;
pub use model::SessionState;
pub use world::World;
