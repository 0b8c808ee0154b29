#![allow(dead_code)]

use trex_runner::render::{Surface, TextAlign};
use trex_runner::rng::RandomSource;
use trex_runner::{GameConfig, World};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Rect { x: f64, y: f64, w: f64, h: f64, color: String },
    Line { y: f64, color: String },
    Text { text: String, x: f64, y: f64, align: TextAlign, color: String },
}

/// Surface that remembers every draw call.
#[derive(Default)]
pub struct RecordingSurface {
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn texts(&self) -> Vec<String> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn has_rect(&self, x: f64, y: f64, color: &str) -> bool {
        self.ops.iter().any(|op| {
            matches!(op, Op::Rect { x: rx, y: ry, color: c, .. } if *rx == x && *ry == y && c == color)
        })
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ops.push(Op::Rect { x, y, w, h, color: color.to_string() });
    }

    fn line(&mut self, _x0: f64, y0: f64, _x1: f64, _y1: f64, color: &str, _width: f64) {
        self.ops.push(Op::Line { y: y0, color: color.to_string() });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, _font: &str, align: TextAlign, color: &str) {
        self.ops.push(Op::Text {
            text: text.to_string(),
            x,
            y,
            align,
            color: color.to_string(),
        });
    }
}

/// Defaults, but no obstacle ever spawns on its own and no clouds appear.
pub fn quiet_config() -> GameConfig {
    GameConfig {
        first_obstacle_delay: i64::MAX / 2,
        cloud_spawn_chance: 0.0,
        ..GameConfig::default()
    }
}

pub fn seeded() -> Box<dyn RandomSource> {
    Box::new(fastrand::Rng::with_seed(7))
}

pub fn quiet_world() -> World {
    World::new(quiet_config(), seeded()).expect("valid config")
}

/// Starts the session with a jump and ticks until the player is back on the ground.
pub fn start_and_land(world: &mut World) {
    world.jump();
    for _ in 0..200 {
        world.tick();
        if !world.dino().jumping {
            return;
        }
    }
    panic!("player never landed");
}
