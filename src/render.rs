//! Draws a `World` onto any 2d surface.

use crate::model::{duck_offset, ObstacleKind, SessionState};
use crate::sprites::{
    Cell, Sprite, BIRD_DOWN, BIRD_UP, CLOUD, DINO_DEAD, DINO_DUCK_1, DINO_DUCK_2, DINO_JUMP,
    DINO_RUN_1, DINO_RUN_2, PIXEL_SCALE,
};
use crate::util::format_score;
use crate::world::World;

pub const START_PROMPT: &str = "Press SPACE to start";
pub const GAME_OVER_TEXT: &str = "GAME OVER";
pub const SUBMITTING_TEXT: &str = "Submitting score...";
const HIGHLIGHT: &str = "#fff";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn as_css(&self) -> &'static str {
        match self {
            TextAlign::Left => "left",
            TextAlign::Center => "center",
            TextAlign::Right => "right",
        }
    }
}

/// The handful of primitives the game needs from a canvas.
pub trait Surface {
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: &str, width: f64);
    fn text(&mut self, text: &str, x: f64, y: f64, font: &str, align: TextAlign, color: &str);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub foreground: &'static str,
    pub cloud: &'static str,
}

pub const DAY: Palette = Palette {
    background: "#f7f7f7",
    foreground: "#535353",
    cloud: "#e0e0e0",
};

pub const NIGHT: Palette = Palette {
    background: "#1a1a2e",
    foreground: "#e0e0e0",
    cloud: "#2a2a4e",
};

pub fn palette(night: bool) -> Palette {
    if night { NIGHT } else { DAY }
}

fn font(px: u32) -> String {
    format!("{}px \"Press Start 2P\", monospace", px)
}

pub fn draw_sprite<S: Surface + ?Sized>(surface: &mut S, sprite: &Sprite, x: f64, y: f64, color: &str) {
    for (c, r, cell) in sprite.cells() {
        let fill = match cell {
            Cell::Highlight => HIGHLIGHT,
            _ => color,
        };
        surface.fill_rect(
            x + c as f64 * PIXEL_SCALE,
            y + r as f64 * PIXEL_SCALE,
            PIXEL_SCALE,
            PIXEL_SCALE,
            fill,
        );
    }
}

/// Sprite and vertical position for the player this frame.
/// Priority: dead, jumping, ducking, running.
pub fn player_pose(world: &World) -> (&'static Sprite, f64) {
    let dino = world.dino();
    let alt = world.anim_frame() != 0;
    if world.state() == SessionState::Over {
        (&DINO_DEAD, dino.y)
    } else if dino.jumping {
        (&DINO_JUMP, dino.y)
    } else if dino.ducking {
        let sprite = if alt { &DINO_DUCK_2 } else { &DINO_DUCK_1 };
        (sprite, dino.y + duck_offset())
    } else {
        let sprite = if alt { &DINO_RUN_2 } else { &DINO_RUN_1 };
        (sprite, dino.y)
    }
}

/// Score text is hidden for half of every 10-frame window while the score
/// sits on a positive multiple of 100.
pub fn score_visible(score: u32, frame_count: u64) -> bool {
    !(score > 0 && score % 100 == 0 && frame_count % 10 < 5)
}

pub fn draw_frame<S: Surface + ?Sized>(world: &World, surface: &mut S) {
    let cfg = world.config();
    let (w, h) = (cfg.width, cfg.height);
    let colors = palette(world.night_mode());
    let fg = colors.foreground;

    surface.fill_rect(0.0, 0.0, w, h, colors.background);

    for cloud in world.clouds() {
        draw_sprite(surface, &CLOUD, cloud.x, cloud.y, colors.cloud);
    }

    // ground line sits just under the player's feet
    let gy = cfg.ground_y + DINO_RUN_1.height() + 2.0;
    surface.line(0.0, gy, w, gy, fg, 1.0);
    let mut i = 0.0;
    while i < w {
        let x = (i - world.ground_offset()).rem_euclid(w);
        surface.fill_rect(x, gy + 3.0, 6.0, 1.0, fg);
        surface.fill_rect((x + 10.0) % w, gy + 6.0, 4.0, 1.0, fg);
        i += cfg.ground_period;
    }

    for o in world.obstacles() {
        let sprite = match o.kind {
            ObstacleKind::Bird if world.anim_frame() != 0 => &BIRD_DOWN,
            ObstacleKind::Bird => &BIRD_UP,
            _ => o.kind.sprite(),
        };
        draw_sprite(surface, sprite, o.x, o.y, fg);
    }

    let (sprite, y) = player_pose(world);
    draw_sprite(surface, sprite, cfg.dino_x, y, fg);

    if score_visible(world.score(), world.frame_count()) {
        surface.text(
            &format_score(world.score()),
            w - 20.0,
            30.0,
            &font(16),
            TextAlign::Right,
            fg,
        );
    }

    match world.state() {
        SessionState::NotStarted => {
            surface.text(START_PROMPT, w / 2.0, h / 2.0 - 20.0, &font(14), TextAlign::Center, fg);
        }
        SessionState::Over => {
            surface.text(GAME_OVER_TEXT, w / 2.0, h / 2.0 - 20.0, &font(18), TextAlign::Center, fg);
            surface.text(SUBMITTING_TEXT, w / 2.0, h / 2.0 + 10.0, &font(11), TextAlign::Center, fg);
        }
        SessionState::Running => {}
    }
}
