//! Player kinematic state.

use glam::Vec3;

use crate::config::SPAWN_POSITION;

/// Authoritative physical state of the avatar. `position` is the feet
/// center. Invariants, upheld by `Simulation::step`:
/// - grounded implies `velocity.y == 0`
/// - `velocity.y` never falls below `MAX_FALL_VELOCITY`
#[derive(Clone, Copy, Debug)]
pub struct PlayerState {
    pub position: Vec3,
    pub velocity: Vec3,
    pub airborne: bool,
    pub won: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            position: SPAWN_POSITION,
            velocity: Vec3::ZERO,
            // Spawns slightly above ground and settles onto it
            airborne: true,
            won: false,
        }
    }
}
