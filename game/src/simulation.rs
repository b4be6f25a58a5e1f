//! Per-tick orchestration: integrate, resolve, win check.

use glam::Vec3;

use crate::config::WIN_TOLERANCE;
use crate::input::InputIntent;
use crate::map::World;
use crate::math::close_to;
use crate::physics::{self, AxisOverlapResolver, CollisionResolver};
use crate::player::PlayerState;

/// Externally visible player state, polled once per outer frame and
/// handed to the transport layer. Pure read, no side effects.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot {
    pub position: Vec3,
    pub velocity: Vec3,
    pub airborne: bool,
    pub won: bool,
}

/// One authoritative simulation session: a player, an immutable world
/// and the latest input intent. `step` is synchronous and never
/// blocks; drive it from a fixed-timestep loop.
pub struct Simulation {
    player: PlayerState,
    world: World,
    input: InputIntent,
    resolver: Box<dyn CollisionResolver + Send>,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Self::with_resolver(world, Box::new(AxisOverlapResolver))
    }

    pub fn with_resolver(world: World, resolver: Box<dyn CollisionResolver + Send>) -> Self {
        Self {
            player: PlayerState::default(),
            world,
            input: InputIntent::default(),
            resolver,
        }
    }

    /// Start from an explicit player state instead of the spawn
    /// default, e.g. when restoring a session.
    pub fn with_player(world: World, player: PlayerState) -> Self {
        let mut sim = Self::new(world);
        sim.player = player;
        sim
    }

    /// Replace the current intent with the latest one from the client.
    pub fn apply_input(&mut self, input: InputIntent) {
        self.input = input;
    }

    /// Advance the session by one fixed timestep.
    ///
    /// After a win the session is terminal: position, velocity and the
    /// airborne flag are frozen, and the only remaining work per tick
    /// is clearing the single-tick jump edge.
    pub fn step(&mut self, dt: f32) {
        if self.player.won {
            self.input.jump_requested = false;
            return;
        }

        let candidate = physics::integrate(&mut self.player, &self.input, dt);
        self.resolver.resolve(&mut self.player, candidate, &self.world);
        self.check_win();

        // Jump is an edge signal: consumed or not, it never survives
        // the tick
        self.input.jump_requested = false;
    }

    fn check_win(&mut self) {
        if self.player.won || !self.world.loaded {
            return;
        }
        if close_to(self.player.position, self.world.victory_point, WIN_TOLERANCE) {
            self.player.won = true;
            self.player.velocity = Vec3::ZERO;
            log::info!(
                "player reached the victory point at ({}, {}, {})",
                self.world.victory_point.x,
                self.world.victory_point.y,
                self.world.victory_point.z
            );
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            position: self.player.position,
            velocity: self.player.velocity,
            airborne: self.player.airborne,
            won: self.player.won,
        }
    }

    /// Fresh player and cleared input; the world is kept.
    pub fn reset(&mut self) {
        self.player = PlayerState::default();
        self.input = InputIntent::default();
        log::info!("simulation reset");
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
