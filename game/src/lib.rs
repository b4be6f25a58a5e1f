//! Authoritative movement simulation for a single player avatar.
//!
//! The crate is pure logic: it consumes per-tick [`input::InputIntent`]s,
//! integrates kinematic state, resolves collisions against the static
//! obstacle set of a [`map::World`], and exposes the result as a
//! [`simulation::Snapshot`]. Sockets, wire formats and the process
//! lifecycle live in the `server` crate.

pub mod config;
pub mod input;
pub mod map;
pub mod math;
pub mod physics;
pub mod player;
pub mod simulation;
pub mod tick;

pub use glam::Vec3;
