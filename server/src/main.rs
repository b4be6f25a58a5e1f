//! Authoritative movement server: UDP in, fixed-timestep simulation,
//! state snapshots out.

mod network;
mod protocol;

use std::time::Duration;

use anyhow::Context;
use game::config::{DEFAULT_MAP_FILE, TICK_DT};
use game::input::InputMailbox;
use game::map::World;
use game::simulation::Simulation;
use game::tick::TickClock;

use crate::network::Transport;
use crate::protocol::ServerMessage;

const DEFAULT_PORT: u16 = 12034;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let port = match std::env::var("PORT") {
        Ok(value) => value.parse().context("PORT is not a valid port number")?,
        Err(_) => DEFAULT_PORT,
    };
    let map_path =
        std::env::var("MAP_FILE").unwrap_or_else(|_| DEFAULT_MAP_FILE.to_string());

    let world = match World::load(&map_path) {
        Ok(world) => {
            log::info!(
                "loaded {} with {} obstacles, victory point ({}, {}, {})",
                map_path,
                world.obstacles.len(),
                world.victory_point.x,
                world.victory_point.y,
                world.victory_point.z
            );
            world
        }
        Err(e) => {
            log::error!("failed to load {}: {}; using empty world", map_path, e);
            World::fallback()
        }
    };
    let mut sim = Simulation::new(world);

    let transport = Transport::bind(port)
        .await
        .with_context(|| format!("could not bind UDP port {}, is it already in use?", port))?;

    let mailbox = InputMailbox::new();
    // Owned receive task; it ends with the process. Nothing else holds
    // a reference into it, so there is no teardown ordering to get
    // wrong.
    let _receiver = transport.spawn_receiver(mailbox.clone());

    let mut clock = TickClock::new();
    loop {
        if transport.take_reset_request() {
            sim.reset();
        }

        for _ in 0..clock.poll() {
            sim.apply_input(mailbox.take());
            sim.step(TICK_DT);
        }

        // One snapshot per outer frame, to whoever spoke last
        if let Some(target) = transport.last_client() {
            transport
                .send_state(&ServerMessage::from(sim.snapshot()), target)
                .await;
        }

        if clock.idle() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    }
}
