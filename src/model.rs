//! Core data models for the runner.
//! Plain state the simulation owns; nothing here is shared outside one engine.

use serde::{Deserialize, Serialize};

use crate::sprites::{
    Sprite, BIRD_UP, CACTUS_GROUP, CACTUS_LARGE, CACTUS_SMALL, DINO_DUCK_1, DINO_RUN_1,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    NotStarted,
    Running,
    Over,
}

/// Axis-aligned rectangle in virtual coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Shrinks every side by `pad`.
    pub fn shrink(&self, pad: f64) -> Rect {
        Rect {
            x: self.x + pad,
            y: self.y + pad,
            w: self.w - 2.0 * pad,
            h: self.h - 2.0 * pad,
        }
    }

    /// Strict overlap; touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Overlap test after shrinking both boxes by `pad`.
pub fn hitboxes_collide(a: &Rect, b: &Rect, pad: f64) -> bool {
    a.shrink(pad).intersects(&b.shrink(pad))
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Dino {
    /// Top of the sprite; equals the ground baseline while grounded.
    pub y: f64,
    pub vy: f64,
    pub jumping: bool,
    pub ducking: bool,
}

impl Dino {
    pub fn grounded(ground_y: f64) -> Self {
        Self {
            y: ground_y,
            vy: 0.0,
            jumping: false,
            ducking: false,
        }
    }

    /// Duck shape only applies on the ground.
    pub fn uses_duck_shape(&self) -> bool {
        self.ducking && !self.jumping
    }

    pub fn hitbox(&self, x: f64) -> Rect {
        if self.uses_duck_shape() {
            Rect::new(
                x,
                self.y + duck_offset(),
                DINO_DUCK_1.width(),
                DINO_DUCK_1.height(),
            )
        } else {
            Rect::new(x, self.y, DINO_RUN_1.width(), DINO_RUN_1.height())
        }
    }
}

/// How far the duck sprite sits below the run sprite's top.
pub fn duck_offset() -> f64 {
    DINO_RUN_1.height() - DINO_DUCK_1.height()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    CactusSmall,
    CactusLarge,
    CactusGroup,
    Bird,
}

impl ObstacleKind {
    /// Sprite used for the bounding box (birds flap but keep the same size).
    pub fn sprite(&self) -> &'static Sprite {
        match self {
            ObstacleKind::CactusSmall => &CACTUS_SMALL,
            ObstacleKind::CactusLarge => &CACTUS_LARGE,
            ObstacleKind::CactusGroup => &CACTUS_GROUP,
            ObstacleKind::Bird => &BIRD_UP,
        }
    }

    pub fn is_ground(&self) -> bool {
        !matches!(self, ObstacleKind::Bird)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    pub x: f64,
    /// Fixed for the obstacle's lifetime.
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind, x: f64, y: f64) -> Self {
        let sprite = kind.sprite();
        Self {
            kind,
            x,
            y,
            w: sprite.width(),
            h: sprite.height(),
        }
    }

    /// Ground obstacle whose base sits flush with the player's feet.
    pub fn on_ground(kind: ObstacleKind, x: f64, ground_y: f64) -> Self {
        let y = ground_y + DINO_RUN_1.height() - kind.sprite().height();
        Self::new(kind, x, y)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub x: f64,
    pub y: f64,
}
