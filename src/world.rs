//! The runner simulation.
//!
//! `World` holds everything one session mutates and advances it one display
//! frame at a time. It knows nothing about canvases, timers or listeners; the
//! engine drives it and the renderer reads it.

use crate::config::GameConfig;
use crate::error::EngineError;
use crate::input::Intent;
use crate::model::{hitboxes_collide, Cloud, Dino, Obstacle, ObstacleKind, SessionState};
use crate::rng::RandomSource;

/// Scroll speed after `frame` running frames. Linear, unbounded.
pub fn speed_at(cfg: &GameConfig, frame: u64) -> f64 {
    cfg.base_speed + frame as f64 * cfg.speed_growth
}

/// Score after `frame` running frames.
pub fn score_at(cfg: &GameConfig, frame: u64) -> u32 {
    (frame as f64 * cfg.score_rate).floor() as u32
}

/// Night covers every odd `threshold`-sized span of score.
pub fn is_night(score: u32, threshold: u32) -> bool {
    (score / threshold) % 2 == 1
}

pub struct World {
    config: GameConfig,
    rng: Box<dyn RandomSource>,
    state: SessionState,
    frame_count: u64,
    speed: f64,
    score: u32,
    night_mode: bool,
    ground_offset: f64,
    dino: Dino,
    anim_frame: u8,
    obstacles: Vec<Obstacle>,
    clouds: Vec<Cloud>,
    next_obstacle_in: i64,
}

impl World {
    pub fn new(config: GameConfig, rng: Box<dyn RandomSource>) -> Result<Self, EngineError> {
        config.validate()?;
        let mut world = Self {
            dino: Dino::grounded(config.ground_y),
            speed: config.base_speed,
            next_obstacle_in: config.first_obstacle_delay,
            config,
            rng,
            state: SessionState::NotStarted,
            frame_count: 0,
            score: 0,
            night_mode: false,
            ground_offset: 0.0,
            anim_frame: 0,
            obstacles: Vec::new(),
            clouds: Vec::new(),
        };
        world.reset();
        Ok(world)
    }

    pub fn reset(&mut self) {
        let cfg = &self.config;
        self.state = SessionState::NotStarted;
        self.speed = cfg.base_speed;
        self.score = 0;
        self.frame_count = 0;
        self.night_mode = false;
        self.ground_offset = 0.0;
        self.anim_frame = 0;
        self.dino = Dino::grounded(cfg.ground_y);
        self.obstacles.clear();
        self.clouds.clear();
        self.next_obstacle_in = cfg.first_obstacle_delay;
        for i in 0..cfg.initial_clouds {
            let x = 200.0 + i as f64 * 250.0 + self.rng.next_f64() * 100.0;
            let y = 20.0 + self.rng.next_f64() * 40.0;
            self.clouds.push(Cloud { x, y });
        }
    }

    pub fn apply(&mut self, intent: Intent) {
        match intent {
            Intent::Jump => self.jump(),
            Intent::DuckStart => self.set_ducking(true),
            Intent::DuckEnd => self.set_ducking(false),
        }
    }

    /// Starts the session on first use; ignored when over or already airborne.
    pub fn jump(&mut self) {
        if self.state == SessionState::Over {
            return;
        }
        if self.state == SessionState::NotStarted {
            self.state = SessionState::Running;
        }
        if !self.dino.jumping {
            self.dino.jumping = true;
            self.dino.vy = self.config.jump_velocity;
            self.dino.ducking = false;
        }
    }

    pub fn set_ducking(&mut self, ducking: bool) {
        self.dino.ducking = ducking;
    }

    /// Advances one frame if running. Returns the final score on the frame
    /// the player crashes.
    pub fn tick(&mut self) -> Option<u32> {
        if self.state != SessionState::Running {
            return None;
        }
        self.frame_count += 1;
        self.speed = speed_at(&self.config, self.frame_count);
        self.score = score_at(&self.config, self.frame_count);
        self.night_mode = is_night(self.score, self.config.night_threshold);
        self.ground_offset = (self.ground_offset + self.speed) % self.config.ground_period;

        self.step_dino();
        if self.frame_count % self.config.anim_cadence == 0 {
            self.anim_frame = 1 - self.anim_frame;
        }
        self.step_clouds();

        self.next_obstacle_in -= 1;
        if self.next_obstacle_in <= 0 {
            self.spawn_obstacle();
            let spread = self.rng.next_f64() * self.config.spawn_spread * (self.config.base_speed / self.speed);
            self.next_obstacle_in = (self.config.spawn_floor + spread).floor() as i64;
        }

        let speed = self.speed;
        let despawn_x = self.config.despawn_x;
        for o in &mut self.obstacles {
            o.x -= speed;
        }
        self.obstacles.retain(|o| o.x > despawn_x);

        if self.first_collision().is_some() {
            self.state = SessionState::Over;
            log::info!("crashed at frame {} with score {}", self.frame_count, self.score);
            return Some(self.score);
        }
        None
    }

    fn step_dino(&mut self) {
        if !self.dino.jumping {
            return;
        }
        self.dino.y += self.dino.vy;
        self.dino.vy += self.config.gravity;
        if self.dino.y >= self.config.ground_y {
            self.dino.y = self.config.ground_y;
            self.dino.jumping = false;
            self.dino.vy = 0.0;
        }
    }

    fn step_clouds(&mut self) {
        let drift = self.speed * self.config.cloud_parallax;
        let despawn_x = self.config.despawn_x;
        for c in &mut self.clouds {
            c.x -= drift;
        }
        self.clouds.retain(|c| c.x > despawn_x);
        if self.rng.next_f64() < self.config.cloud_spawn_chance {
            let y = 20.0 + self.rng.next_f64() * 50.0;
            self.clouds.push(Cloud {
                x: self.config.width + self.config.spawn_margin,
                y,
            });
        }
    }

    fn spawn_obstacle(&mut self) {
        let cfg = &self.config;
        let x = cfg.width + cfg.spawn_margin;
        let r = self.rng.next_f64();
        let obstacle = if r < cfg.bird_chance && self.speed > cfg.bird_min_speed {
            let lift = cfg.bird_heights[self.rng.pick(cfg.bird_heights.len())];
            Obstacle::new(ObstacleKind::Bird, x, cfg.ground_y - lift)
        } else if r < cfg.small_cactus_band {
            Obstacle::on_ground(ObstacleKind::CactusSmall, x, cfg.ground_y)
        } else if r < cfg.large_cactus_band {
            Obstacle::on_ground(ObstacleKind::CactusLarge, x, cfg.ground_y)
        } else {
            Obstacle::on_ground(ObstacleKind::CactusGroup, x, cfg.ground_y)
        };
        log::debug!("spawned {:?} at speed {:.2}", obstacle.kind, self.speed);
        self.obstacles.push(obstacle);
    }

    /// Index of the first obstacle the player's padded hitbox overlaps.
    pub fn first_collision(&self) -> Option<usize> {
        let player = self.dino.hitbox(self.config.dino_x);
        let pad = self.config.hitbox_padding;
        self.obstacles
            .iter()
            .position(|o| hitboxes_collide(&player, &o.bounds(), pad))
    }

    /// Adds an obstacle directly, bypassing the spawn policy.
    pub fn push_obstacle(&mut self, obstacle: Obstacle) {
        self.obstacles.push(obstacle);
    }

    pub fn set_spawn_countdown(&mut self, frames: i64) {
        self.next_obstacle_in = frames;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn night_mode(&self) -> bool {
        self.night_mode
    }

    pub fn ground_offset(&self) -> f64 {
        self.ground_offset
    }

    pub fn dino(&self) -> &Dino {
        &self.dino
    }

    pub fn anim_frame(&self) -> u8 {
        self.anim_frame
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn spawn_countdown(&self) -> i64 {
        self.next_obstacle_in
    }
}
