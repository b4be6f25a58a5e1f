//! Kinematic integration and heuristic AABB collision resolution.

use glam::Vec3;

use crate::config::{
    GRAVITY, GROUND_LEVEL_Y, JUMP_FORCE, MAX_FALL_VELOCITY, MOVE_SPEED, PLAYER_DEPTH,
    PLAYER_HEIGHT, PLAYER_WIDTH, PUSH_BACK_EPSILON,
};
use crate::input::InputIntent;
use crate::map::World;
use crate::math::player_aabb;
use crate::player::PlayerState;

/// Advance velocity from the current intent and produce the candidate
/// next position. The candidate is provisional: it belongs to this
/// tick's resolution pass and must not be stored as-is.
///
/// Horizontal velocity is set directly from the movement flags each
/// tick; there is no acceleration ramp or friction, and opposing flags
/// cancel to zero. The jump impulse is applied strictly before gravity
/// so a jump tick already carries one tick of gravity.
pub fn integrate(state: &mut PlayerState, input: &InputIntent, dt: f32) -> Vec3 {
    let mut target = Vec3::new(0.0, state.velocity.y, 0.0);
    if input.move_forward {
        target.z += MOVE_SPEED;
    }
    if input.move_backward {
        target.z -= MOVE_SPEED;
    }
    if input.move_right {
        target.x += MOVE_SPEED;
    }
    if input.move_left {
        target.x -= MOVE_SPEED;
    }
    state.velocity.x = target.x;
    state.velocity.z = target.z;

    // Jump only from the ground; requests while airborne are dropped
    if input.jump_requested && !state.airborne {
        state.velocity.y = JUMP_FORCE;
        state.airborne = true;
    }

    if state.airborne {
        state.velocity.y -= GRAVITY * dt;
        state.velocity.y = state.velocity.y.max(MAX_FALL_VELOCITY);
    } else {
        state.velocity.y = 0.0;
    }

    state.position + state.velocity * dt
}

/// Corrects a candidate position against the world and settles the
/// grounded/airborne flag for the tick.
///
/// Behind a trait so the order-dependent heuristic below can later be
/// swapped for a contact-manifold solver without touching the
/// integrator.
pub trait CollisionResolver {
    fn resolve(&self, state: &mut PlayerState, candidate: Vec3, world: &World);
}

/// Sequential per-obstacle resolver. Each contact is corrected along a
/// single axis (the smallest positive overlap; Y wins ties with X and
/// Z, the smaller of X/Z wins otherwise) and the player box is
/// recomputed before the next obstacle, so corrections accumulate in
/// obstacle list order.
///
/// Known approximation: simultaneous multi-obstacle contact and deep
/// interpenetration can resolve to a visibly wrong position. There is
/// no penetration-depth bound; this is accepted behavior.
pub struct AxisOverlapResolver;

enum Axis {
    X,
    Y,
    Z,
}

impl CollisionResolver for AxisOverlapResolver {
    fn resolve(&self, state: &mut PlayerState, mut candidate: Vec3, world: &World) {
        let mut landed = false;

        for obstacle in &world.obstacles {
            let player_box = player_aabb(candidate);
            if !player_box.intersects(obstacle) {
                continue;
            }
            let depths = player_box.overlap_depths(obstacle);
            match resolution_axis(depths) {
                Some(Axis::Y) => {
                    if state.velocity.y <= 0.0 && player_box.min.y < obstacle.max.y {
                        // Landing on the obstacle top
                        candidate.y = obstacle.max.y;
                        state.velocity.y = 0.0;
                        state.airborne = false;
                        landed = true;
                    } else if state.velocity.y > 0.0 && player_box.max.y > obstacle.min.y {
                        // Head bump against the underside
                        candidate.y = obstacle.min.y - PLAYER_HEIGHT;
                        state.velocity.y = 0.0;
                    }
                }
                Some(Axis::X) => {
                    if state.velocity.x > 0.0 {
                        candidate.x = obstacle.min.x - PLAYER_WIDTH * 0.5 - PUSH_BACK_EPSILON;
                        state.velocity.x = 0.0;
                    } else if state.velocity.x < 0.0 {
                        candidate.x = obstacle.max.x + PLAYER_WIDTH * 0.5 + PUSH_BACK_EPSILON;
                        state.velocity.x = 0.0;
                    }
                }
                Some(Axis::Z) => {
                    if state.velocity.z > 0.0 {
                        candidate.z = obstacle.min.z - PLAYER_DEPTH * 0.5 - PUSH_BACK_EPSILON;
                        state.velocity.z = 0.0;
                    } else if state.velocity.z < 0.0 {
                        candidate.z = obstacle.max.z + PLAYER_DEPTH * 0.5 + PUSH_BACK_EPSILON;
                        state.velocity.z = 0.0;
                    }
                }
                None => {}
            }
        }

        // Ground plane
        if candidate.y <= GROUND_LEVEL_Y && state.velocity.y <= 0.0 {
            candidate.y = GROUND_LEVEL_Y;
            state.velocity.y = 0.0;
            state.airborne = false;
            landed = true;
        }

        state.position = candidate;

        // Walked off a ledge, or still mid-air: no landing event this
        // tick and the final position is above ground level
        if !landed && state.position.y > GROUND_LEVEL_Y {
            state.airborne = true;
        }
    }
}

/// Smallest strictly-positive overlap wins; Y beats X and Z on ties,
/// X beats Z on ties. Asymmetric on purpose, kept for behavioral
/// parity with the shipped resolver.
fn resolution_axis(depths: Vec3) -> Option<Axis> {
    let (x, y, z) = (depths.x, depths.y, depths.z);
    if y > 0.0 && (x == 0.0 || y <= x) && (z == 0.0 || y <= z) {
        Some(Axis::Y)
    } else if x > 0.0 && (y == 0.0 || x <= y) && (z == 0.0 || x <= z) {
        Some(Axis::X)
    } else if z > 0.0 {
        Some(Axis::Z)
    } else {
        None
    }
}
