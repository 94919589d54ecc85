//! This module contains all the tuning constants used in the game.

use std::ops::RangeInclusive;
use std::time::Duration;

use glam::{UVec2, Vec2};

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

pub const WINDOW_TITLE: &str = "Cat";

/// The size of the canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(640, 480);
pub const SCREEN_WIDTH: f32 = CANVAS_SIZE.x as f32;
pub const SCREEN_HEIGHT: f32 = CANVAS_SIZE.y as f32;

/// The y coordinate every grounded actor stands on.
pub const FLOOR: f32 = SCREEN_HEIGHT - 59.0;

/// Size of a single sprite sheet frame before scaling.
pub const BASE_SPRITE_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const SPRITE_SCALE: f32 = 2.0;
/// On-screen size of a scaled sprite.
pub const SPRITE_SIZE: Vec2 = Vec2::new(BASE_SPRITE_SIZE.x * SPRITE_SCALE, BASE_SPRITE_SIZE.y * SPRITE_SCALE);

/// Horizontal player speed, in pixels per second.
pub const PLAYER_SPEED: f32 = 480.0;
pub const PLAYER_START: Vec2 = Vec2::new(100.0, FLOOR);
/// Where the sleeping cat is drawn on the win screen.
pub const SLEEPER_POSITION: Vec2 = Vec2::new(100.0, 100.0);

/// Initial upward velocity of a jump, in pixels per second.
pub const JUMP_VELOCITY: f32 = -304.76;
/// Pixels per second squared.
pub const GRAVITY: f32 = 1451.25;
/// Jump animation frames during which velocity integration applies.
pub const AIRBORNE_FRAMES: RangeInclusive<usize> = 3..=10;

pub const IDLE_FRAMES: usize = 7;
pub const RUN_FRAMES: usize = 7;
pub const JUMP_FRAMES: usize = 13;
pub const ATTACK_FRAMES: usize = 9;
pub const SLEEP_FRAMES: usize = 3;
pub const GHOST_FRAMES: usize = 4;
pub const SNOWMAN_FRAMES: usize = 1;
pub const MOUSE_FRAMES: usize = 4;

/// Frame period shared by the player, ghost and mouse animations.
pub const ANIMATION_PERIOD: Duration = Duration::from_millis(50);
pub const SLEEP_ANIMATION_PERIOD: Duration = Duration::from_millis(250);

/// Vertical fall speed of snowmen and ghosts, in pixels per second.
pub const FALL_SPEED: f32 = 100.0;
/// Respawned hazards start just above the top of the screen.
pub const RESPAWN_Y: f32 = -64.0;

pub const SNOWMAN_CAPACITY: usize = 5;
pub const SNOWMAN_INITIAL_ACTIVE: usize = 1;
pub const SNOWMAN_SPAWN_PERIOD: Duration = Duration::from_secs(5);

pub const GHOST_CAPACITY: usize = 1;

/// Pixels trimmed from the top of a collision target's box.
pub const COLLISION_INSET: f32 = 16.0;

pub const STARTING_HEALTH: i32 = 3;
/// Maximum number of heart icons drawn, regardless of the actual health.
pub const MAX_HEARTS: usize = 4;
/// Ghost hits required to win.
pub const KILL_THRESHOLD: u32 = 10;

/// Horizontal drift speed of the bonus mouse, in pixels per second.
pub const BONUS_SPEED: f32 = 120.0;
/// How long the mouse stays away after being caught.
pub const BONUS_RESPAWN_PERIOD: Duration = Duration::from_secs(20);

pub const FONT_SIZE: u16 = 24;
pub const HEART_SIZE: u32 = 32;

/// Highest x an actor of the given width may occupy without leaving the screen.
pub fn max_x(width: f32) -> f32 {
    (SCREEN_WIDTH - width).max(0.0)
}
