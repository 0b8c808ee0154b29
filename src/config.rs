//! Tunable constants for a game session.
//!
//! Every number the simulation uses lives here so a host can override single
//! values with a partial JSON object (`{"gravity": 0.7}`) and keep the rest.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// localStorage key the web host reads an override from.
pub const CONFIG_STORAGE_KEY: &str = "trex_config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Virtual canvas size; the host scales the element with CSS.
    pub width: f64,
    pub height: f64,
    /// Top of the player sprite when standing on the ground. Kept at 140 so
    /// the ground line (`ground_y + 44`) stays inside a 200px canvas.
    pub ground_y: f64,
    pub dino_x: f64,

    pub base_speed: f64,
    pub speed_growth: f64,
    pub score_rate: f64,
    /// Score span of one day (or one night).
    pub night_threshold: u32,
    pub ground_period: f64,

    pub jump_velocity: f64,
    pub gravity: f64,
    /// Frames between run/wing pose flips.
    pub anim_cadence: u64,

    pub cloud_parallax: f64,
    pub cloud_spawn_chance: f64,
    pub initial_clouds: usize,

    pub first_obstacle_delay: i64,
    pub spawn_floor: f64,
    pub spawn_spread: f64,
    pub spawn_margin: f64,
    pub despawn_x: f64,

    pub bird_chance: f64,
    pub bird_min_speed: f64,
    pub small_cactus_band: f64,
    pub large_cactus_band: f64,
    /// Distances above `ground_y` a bird can fly at.
    pub bird_heights: Vec<f64>,

    pub hitbox_padding: f64,
    pub game_over_delay_ms: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 200.0,
            ground_y: 140.0,
            dino_x: 50.0,
            base_speed: 6.0,
            speed_growth: 0.002,
            score_rate: 0.15,
            night_threshold: 700,
            ground_period: 20.0,
            jump_velocity: -12.0,
            gravity: 0.6,
            anim_cadence: 6,
            cloud_parallax: 0.3,
            cloud_spawn_chance: 0.005,
            initial_clouds: 3,
            first_obstacle_delay: 60,
            spawn_floor: 50.0,
            spawn_spread: 80.0,
            spawn_margin: 20.0,
            despawn_x: -60.0,
            bird_chance: 0.3,
            bird_min_speed: 8.0,
            small_cactus_band: 0.55,
            large_cactus_band: 0.8,
            bird_heights: vec![20.0, 45.0, 70.0],
            hitbox_padding: 6.0,
            game_over_delay_ms: 800.0,
        }
    }
}

impl GameConfig {
    /// Parses a (possibly partial) JSON override and validates the result.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        let cfg: GameConfig =
            serde_json::from_str(raw).map_err(|e| EngineError::InvalidConfig(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        let fail = |msg: &str| Err(EngineError::InvalidConfig(msg.to_string()));
        if !(self.width > 0.0 && self.height > 0.0) {
            return fail("width and height must be positive");
        }
        if !(self.ground_y > 0.0 && self.ground_y < self.height) {
            return fail("ground_y must lie inside the canvas");
        }
        if self.jump_velocity >= 0.0 {
            return fail("jump_velocity must be negative (upwards)");
        }
        if self.gravity <= 0.0 {
            return fail("gravity must be positive");
        }
        if self.base_speed <= 0.0 || self.speed_growth < 0.0 || self.score_rate < 0.0 {
            return fail("speed and score rates must be non-negative");
        }
        if self.night_threshold == 0 || self.anim_cadence == 0 || self.ground_period <= 0.0 {
            return fail("night_threshold, anim_cadence and ground_period must be non-zero");
        }
        let bands = [
            self.bird_chance,
            self.small_cactus_band,
            self.large_cactus_band,
            self.cloud_spawn_chance,
        ];
        if bands.iter().any(|b| !(0.0..=1.0).contains(b)) {
            return fail("probabilities must lie in [0, 1]");
        }
        if self.small_cactus_band > self.large_cactus_band {
            return fail("small_cactus_band must not exceed large_cactus_band");
        }
        if self.bird_heights.is_empty() || self.bird_heights.iter().any(|h| *h <= 0.0) {
            return fail("bird_heights must be non-empty and positive");
        }
        if self.spawn_floor < 1.0 || self.spawn_spread < 0.0 || self.first_obstacle_delay < 0 {
            return fail("spawn_floor must be at least 1, spawn_spread and first_obstacle_delay non-negative");
        }
        if self.despawn_x >= 0.0 || self.cloud_parallax < 0.0 {
            return fail("despawn_x must be negative and cloud_parallax non-negative");
        }
        if self.hitbox_padding < 0.0 || self.game_over_delay_ms < 0.0 {
            return fail("hitbox_padding and game_over_delay_ms must be non-negative");
        }
        Ok(())
    }

    /// Reads the override stored by the page, falling back to defaults.
    pub fn from_storage() -> Self {
        let raw = web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .and_then(|store| store.get_item(CONFIG_STORAGE_KEY).ok().flatten());
        match raw {
            Some(raw) => match Self::from_json(&raw) {
                Ok(cfg) => {
                    log::info!("using config override from localStorage");
                    cfg
                }
                Err(e) => {
                    log::warn!("ignoring stored config: {}", e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
