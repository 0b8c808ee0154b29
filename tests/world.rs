mod common;

use common::{quiet_config, quiet_world, seeded, start_and_land};
use trex_runner::model::{hitboxes_collide, Obstacle, ObstacleKind, Rect};
use trex_runner::rng::ScriptedRandom;
use trex_runner::world::{is_night, score_at, speed_at};
use trex_runner::{GameConfig, Intent, SessionState, World};

#[test]
fn reset_seeds_clouds_and_idles() {
    let world = quiet_world();
    assert_eq!(world.state(), SessionState::NotStarted);
    assert_eq!(world.clouds().len(), 3);
    assert!(world.obstacles().is_empty());
    assert_eq!(world.score(), 0);
    assert_eq!(world.speed(), 6.0);
    for (i, c) in world.clouds().iter().enumerate() {
        let left = 200.0 + i as f64 * 250.0;
        assert!(c.x >= left && c.x < left + 100.0);
        assert!(c.y >= 20.0 && c.y < 60.0);
    }
}

#[test]
fn nothing_moves_before_the_first_jump() {
    let mut world = quiet_world();
    world.apply(Intent::DuckStart);
    for _ in 0..10 {
        assert_eq!(world.tick(), None);
    }
    assert_eq!(world.frame_count(), 0);
    assert_eq!(world.state(), SessionState::NotStarted);

    world.apply(Intent::Jump);
    assert_eq!(world.state(), SessionState::Running);
    assert!(world.dino().jumping);
    assert!(!world.dino().ducking);
}

#[test]
fn score_and_speed_follow_the_frame_count() {
    let cfg = GameConfig::default();
    let mut last_score = 0;
    let mut last_speed = 0.0;
    for f in 0..5000 {
        let (score, speed) = (score_at(&cfg, f), speed_at(&cfg, f));
        assert_eq!(score, (f as f64 * 0.15).floor() as u32);
        assert!(score >= last_score);
        assert!(speed >= last_speed);
        last_score = score;
        last_speed = speed;
    }
    // no cap
    assert!(speed_at(&cfg, 10_000_000) > 20_000.0);
}

#[test]
fn night_boundaries() {
    assert!(!is_night(0, 700));
    assert!(!is_night(699, 700));
    assert!(is_night(700, 700));
    assert!(is_night(1399, 700));
    assert!(!is_night(1400, 700));
    assert!(is_night(2100, 700));
}

#[test]
fn idle_run_scores_from_frames_alone() {
    let mut world = quiet_world();
    world.jump();
    let n = 600;
    for _ in 0..n {
        assert_eq!(world.tick(), None);
    }
    assert_eq!(world.frame_count(), n);
    assert_eq!(world.score(), (n as f64 * 0.15).floor() as u32);
    assert_eq!(world.state(), SessionState::Running);
    assert!(world.obstacles().is_empty());
}

#[test]
fn night_mode_switches_with_score() {
    let mut world = quiet_world();
    world.jump();
    while world.score() < 699 {
        world.tick();
    }
    assert!(!world.night_mode());
    while world.score() < 700 {
        world.tick();
    }
    assert!(world.night_mode());
}

#[test]
fn jump_while_airborne_changes_nothing() {
    let mut world = quiet_world();
    world.jump();
    for _ in 0..5 {
        world.tick();
    }
    let before = world.dino().clone();
    assert!(before.jumping);
    world.jump();
    assert_eq!(world.dino(), &before);
}

#[test]
fn landing_clamps_to_the_ground() {
    let mut world = quiet_world();
    let ground = world.config().ground_y;
    world.jump();
    let mut peak = ground;
    loop {
        world.tick();
        let dino = world.dino();
        assert!(dino.y <= ground, "tunnelled below ground: {}", dino.y);
        peak = peak.min(dino.y);
        if !dino.jumping {
            break;
        }
    }
    assert!(peak < ground - 100.0);
    assert_eq!(world.dino().y, ground);
    assert_eq!(world.dino().vy, 0.0);
}

#[test]
fn duck_shape_only_on_the_ground() {
    let mut world = quiet_world();
    start_and_land(&mut world);
    world.apply(Intent::DuckStart);
    let ground = world.config().ground_y;
    let hb = world.dino().hitbox(50.0);
    assert_eq!(hb, Rect::new(50.0, ground + 15.0, 48.0, 27.0));

    world.apply(Intent::DuckEnd);
    world.apply(Intent::Jump);
    world.apply(Intent::DuckStart);
    assert!(world.dino().jumping && world.dino().ducking);
    let hb = world.dino().hitbox(50.0);
    assert_eq!((hb.w, hb.h), (36.0, 42.0));
}

#[test]
fn padding_boundary_is_exclusive() {
    let player = Rect::new(50.0, 120.0, 36.0, 42.0);
    // touches the padded edge exactly: overlap without padding, none with it
    let edge = Rect::new(74.0, 117.0, 18.0, 45.0);
    assert!(player.intersects(&edge));
    assert!(!hitboxes_collide(&player, &edge, 6.0));
    // half a pixel further in
    let inside = Rect::new(73.5, 117.0, 18.0, 45.0);
    assert!(hitboxes_collide(&player, &inside, 6.0));
}

#[test]
fn padding_boundary_through_the_world() {
    let mut world = quiet_world();
    let ground = world.config().ground_y;
    world.push_obstacle(Obstacle::on_ground(ObstacleKind::CactusSmall, 74.0, ground));
    assert_eq!(world.first_collision(), None);

    let mut world = quiet_world();
    world.push_obstacle(Obstacle::on_ground(ObstacleKind::CactusSmall, 73.5, ground));
    assert_eq!(world.first_collision(), Some(0));
}

#[test]
fn crash_lands_on_the_exact_frame() {
    let cfg = quiet_config();
    let mut world = World::new(cfg.clone(), seeded()).unwrap();
    start_and_land(&mut world);
    let start_frame = world.frame_count();
    let obstacle = Obstacle::on_ground(ObstacleKind::CactusSmall, 300.0, cfg.ground_y);
    world.push_obstacle(obstacle.clone());

    let player = Rect::new(cfg.dino_x, cfg.ground_y, 36.0, 42.0);
    let mut x = obstacle.x;
    let mut expected = None;
    for f in start_frame + 1..start_frame + 1000 {
        x -= speed_at(&cfg, f);
        if hitboxes_collide(&player, &Rect::new(x, obstacle.y, obstacle.w, obstacle.h), cfg.hitbox_padding) {
            expected = Some(f);
            break;
        }
    }
    let expected = expected.expect("obstacle reaches the player");

    loop {
        let crashed = world.tick();
        if world.frame_count() < expected {
            assert_eq!(crashed, None, "crashed early at frame {}", world.frame_count());
        } else {
            assert_eq!(crashed, Some(world.score()));
            break;
        }
    }
    assert_eq!(world.frame_count(), expected);
    assert_eq!(world.state(), SessionState::Over);

    // frozen once over
    let score = world.score();
    for _ in 0..10 {
        assert_eq!(world.tick(), None);
    }
    assert_eq!(world.score(), score);
    assert_eq!(world.frame_count(), expected);
    world.jump();
    assert_eq!(world.state(), SessionState::Over);
}

#[test]
fn first_obstacle_in_list_order_ends_the_game() {
    let mut world = quiet_world();
    let ground = world.config().ground_y;
    world.push_obstacle(Obstacle::on_ground(ObstacleKind::CactusLarge, 500.0, ground));
    world.push_obstacle(Obstacle::on_ground(ObstacleKind::CactusSmall, 60.0, ground));
    world.push_obstacle(Obstacle::on_ground(ObstacleKind::CactusGroup, 55.0, ground));
    assert_eq!(world.first_collision(), Some(1));
}

fn world_with_draws(draws: Vec<f64>, cfg: GameConfig) -> World {
    let cfg = GameConfig {
        initial_clouds: 0,
        first_obstacle_delay: 1,
        ..cfg
    };
    World::new(cfg, Box::new(ScriptedRandom::new(draws))).unwrap()
}

fn first_spawn(draws: Vec<f64>, cfg: GameConfig) -> (World, Obstacle) {
    let mut world = world_with_draws(draws, cfg);
    world.jump();
    world.tick();
    let spawned = world.obstacles()[0].clone();
    (world, spawned)
}

#[test]
fn spawn_bands_pick_ground_obstacles() {
    let ground = GameConfig::default().ground_y;
    // draws: cloud roll, obstacle roll, countdown roll
    let cases = [
        (0.10, ObstacleKind::CactusSmall),
        (0.30, ObstacleKind::CactusSmall),
        (0.54, ObstacleKind::CactusSmall),
        (0.55, ObstacleKind::CactusLarge),
        (0.79, ObstacleKind::CactusLarge),
        (0.80, ObstacleKind::CactusGroup),
        (0.99, ObstacleKind::CactusGroup),
    ];
    for (roll, kind) in cases {
        let (world, o) = first_spawn(vec![0.9, roll, 0.5], GameConfig::default());
        assert_eq!(o.kind, kind, "roll {}", roll);
        // base flush with the player's feet
        assert_eq!(o.y + o.h, ground + 42.0);
        assert_eq!(o.x, 820.0 - world.speed());
    }
}

#[test]
fn birds_need_speed() {
    // at base speed a low roll is a small cactus
    let (_, o) = first_spawn(vec![0.9, 0.1, 0.5], GameConfig::default());
    assert_eq!(o.kind, ObstacleKind::CactusSmall);

    let fast = GameConfig {
        bird_min_speed: 5.0,
        ..GameConfig::default()
    };
    let (world, o) = first_spawn(vec![0.9, 0.1, 0.5, 0.5], fast);
    assert_eq!(o.kind, ObstacleKind::Bird);
    assert_eq!(o.y, world.config().ground_y - 45.0);
}

#[test]
fn countdown_shrinks_with_speed() {
    let (world, _) = first_spawn(vec![0.9, 0.6, 0.5], GameConfig::default());
    let expected = (50.0 + 0.5 * 80.0 * (6.0 / world.speed())).floor() as i64;
    assert_eq!(world.spawn_countdown(), expected);
    let slow = world.spawn_countdown();

    // twice the base speed halves the random spread
    let fast = GameConfig {
        speed_growth: 6.0,
        ..GameConfig::default()
    };
    let (world, _) = first_spawn(vec![0.9, 0.6, 0.5], fast);
    assert_eq!(world.speed(), 12.0);
    assert_eq!(world.spawn_countdown(), 70);
    assert!(world.spawn_countdown() < slow);

    // the floor holds on a zero roll
    let (world, _) = first_spawn(vec![0.9, 0.6, 0.0], GameConfig::default());
    assert_eq!(world.spawn_countdown(), 50);
}

#[test]
fn obstacles_and_clouds_scroll_and_despawn() {
    let mut world = quiet_world();
    world.jump();
    let clouds: Vec<f64> = world.clouds().iter().map(|c| c.x).collect();
    world.push_obstacle(Obstacle::on_ground(ObstacleKind::CactusSmall, -50.0, world.config().ground_y));
    world.tick();
    let speed = world.speed();
    for (before, after) in clouds.iter().zip(world.clouds()) {
        assert!((before - speed * 0.3 - after.x).abs() < 1e-9);
    }
    assert_eq!(world.obstacles().len(), 1);
    world.tick();
    assert!(world.obstacles().is_empty());
}

#[test]
fn clouds_spawn_off_the_right_edge_and_drop_past_the_left() {
    let cfg = GameConfig {
        first_obstacle_delay: i64::MAX / 2,
        cloud_spawn_chance: 0.5,
        ..GameConfig::default()
    };
    // six draws seed the three starting clouds, then one spawn roll under the
    // chance and its height draw; the cycle repeats every seven frames
    let script = vec![0.9, 0.9, 0.9, 0.9, 0.9, 0.9, 0.1, 0.5];
    let mut world = World::new(cfg, Box::new(ScriptedRandom::new(script))).unwrap();
    let seeded: Vec<f64> = world.clouds().iter().map(|c| c.x).collect();
    assert_eq!(seeded.len(), 3);

    world.jump();
    world.tick();
    let drift = world.speed() * 0.3;
    assert_eq!(world.clouds().len(), 4);
    let spawned = world.clouds()[3];
    assert_eq!(spawned.x, 820.0);
    assert_eq!(spawned.y, 45.0);
    for (before, after) in seeded.iter().zip(world.clouds()) {
        assert!((before - drift - after.x).abs() < 1e-9);
    }

    // roll 0.9 is over the chance: nothing new on the next frame
    world.tick();
    assert_eq!(world.clouds().len(), 4);

    for _ in 0..600 {
        world.tick();
        assert!(world.clouds().iter().all(|c| c.x > -60.0));
    }
    // the starting clouds (y = 56) have all scrolled off; only late spawns remain
    assert!(!world.clouds().is_empty());
    assert!(world.clouds().iter().all(|c| c.y == 45.0));
    assert!(world.clouds().iter().all(|c| c.x <= 820.0));
}

#[test]
fn ground_texture_wraps() {
    let mut world = quiet_world();
    world.jump();
    for _ in 0..100 {
        world.tick();
        assert!(world.ground_offset() >= 0.0 && world.ground_offset() < 20.0);
    }
}

#[test]
fn run_pose_flips_every_six_frames() {
    let mut world = quiet_world();
    world.jump();
    let mut flips = Vec::new();
    let mut last = world.anim_frame();
    for _ in 0..24 {
        world.tick();
        if world.anim_frame() != last {
            flips.push(world.frame_count());
            last = world.anim_frame();
        }
    }
    assert_eq!(flips, vec![6, 12, 18, 24]);
}

#[test]
fn invalid_config_fails_fast() {
    let cfg = GameConfig {
        gravity: 0.0,
        ..GameConfig::default()
    };
    assert!(World::new(cfg, seeded()).is_err());
}
