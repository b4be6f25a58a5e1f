//! Simulation constants. Tuned as a set; changing one in isolation
//! changes jump height, air time and step-per-frame behavior together.

use glam::Vec3;

// Player dimensions (the avatar is a 1x1x1 box, position = feet center)
pub const PLAYER_WIDTH: f32 = 1.0;
pub const PLAYER_HEIGHT: f32 = 1.0;
pub const PLAYER_DEPTH: f32 = 1.0;

// Movement
pub const MOVE_SPEED: f32 = 5.0;
pub const JUMP_FORCE: f32 = 7.5;
pub const GRAVITY: f32 = 9.81 * 2.0;
pub const MAX_FALL_VELOCITY: f32 = -25.0;
pub const GROUND_LEVEL_Y: f32 = 0.0;

// Collision resolution
pub const PUSH_BACK_EPSILON: f32 = 0.001;

// Win condition
pub const WIN_TOLERANCE: f32 = 1.0;

// Fixed-timestep driver
pub const TICK_RATE: f32 = 60.0;
pub const TICK_DT: f32 = 1.0 / TICK_RATE;
pub const MAX_FRAME_TIME: f32 = 0.25;

// Map
pub const DEFAULT_MAP_FILE: &str = "map.txt";
pub const FALLBACK_VICTORY_POINT: Vec3 = Vec3::new(0.0, 0.0, 10.0);

// Spawn, slightly above ground so the first ticks settle onto it
pub const SPAWN_POSITION: Vec3 = Vec3::new(0.0, 0.5, 0.0);
